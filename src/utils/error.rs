use thiserror::Error;

#[derive(Error, Debug)]
pub enum CartError {
    #[error("Unknown menu item: {id}")]
    ItemNotFound { id: String },

    #[error("No such cart entry: {key}")]
    EntryNotFound { key: String },

    #[error("Invalid quantity {value} for entry {key}")]
    InvalidQuantity { key: String, value: i64 },

    #[error("No promotion offer is pending")]
    NoPendingOffer,

    #[error("Cannot check out an empty cart")]
    EmptyCart,

    #[error("Checkout rejected, {field}: {reason}")]
    CheckoutError { field: String, reason: String },

    #[error("Missing required configuration field: {field}")]
    MissingConfigError { field: String },

    #[error("Invalid value '{value}' for {field}: {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Configuration error in {field}: {message}")]
    ConfigValidationError { field: String, message: String },

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, CartError>;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorSeverity {
    Low,
    Medium,
    High,
    Critical,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Catalog,
    Cart,
    Promotion,
    Checkout,
    Configuration,
    System,
}

impl CartError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            CartError::ItemNotFound { .. } => ErrorCategory::Catalog,
            CartError::EntryNotFound { .. } | CartError::InvalidQuantity { .. } => {
                ErrorCategory::Cart
            }
            CartError::NoPendingOffer => ErrorCategory::Promotion,
            CartError::EmptyCart | CartError::CheckoutError { .. } => ErrorCategory::Checkout,
            CartError::MissingConfigError { .. }
            | CartError::InvalidConfigValueError { .. }
            | CartError::ConfigValidationError { .. } => ErrorCategory::Configuration,
            CartError::IoError(_) | CartError::SerializationError(_) => ErrorCategory::System,
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self {
            // Recoverable by the next user gesture
            CartError::ItemNotFound { .. }
            | CartError::EntryNotFound { .. }
            | CartError::InvalidQuantity { .. }
            | CartError::NoPendingOffer => ErrorSeverity::Low,

            // The form can be corrected and resubmitted
            CartError::EmptyCart | CartError::CheckoutError { .. } => ErrorSeverity::Medium,

            CartError::MissingConfigError { .. }
            | CartError::InvalidConfigValueError { .. }
            | CartError::ConfigValidationError { .. } => ErrorSeverity::High,

            CartError::IoError(_) | CartError::SerializationError(_) => ErrorSeverity::Critical,
        }
    }

    pub fn recovery_suggestion(&self) -> String {
        match self {
            CartError::ItemNotFound { id } => {
                format!("Check the menu for available item ids (got '{}')", id)
            }
            CartError::EntryNotFound { .. } => {
                "List the cart first; the entry may already have been removed".to_string()
            }
            CartError::InvalidQuantity { .. } => {
                "Quantities must be zero or positive; zero removes the entry".to_string()
            }
            CartError::NoPendingOffer => {
                "Order more items to trigger the next promotion".to_string()
            }
            CartError::EmptyCart => "Add at least one item before paying".to_string(),
            CartError::CheckoutError { field, .. } => {
                format!("Correct the '{}' field and submit again", field)
            }
            CartError::MissingConfigError { field } => {
                format!("Add the '{}' field to the configuration file", field)
            }
            CartError::InvalidConfigValueError { field, .. }
            | CartError::ConfigValidationError { field, .. } => {
                format!("Fix the '{}' setting and restart", field)
            }
            CartError::IoError(_) => "Check that the menu file exists and is readable".to_string(),
            CartError::SerializationError(_) => {
                "The receipt could not be encoded; please report this".to_string()
            }
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            CartError::ItemNotFound { id } => format!("'{}' is not on the menu", id),
            CartError::EntryNotFound { key } => format!("'{}' is not in your cart", key),
            CartError::InvalidQuantity { value, .. } => {
                format!("{} is not a valid quantity", value)
            }
            CartError::NoPendingOffer => "There is no promotion to answer right now".to_string(),
            CartError::EmptyCart => "No coffee, go add some.".to_string(),
            CartError::CheckoutError { reason, .. } => reason.clone(),
            CartError::MissingConfigError { .. }
            | CartError::InvalidConfigValueError { .. }
            | CartError::ConfigValidationError { .. } => {
                format!("Configuration problem: {}", self)
            }
            CartError::IoError(e) => format!("File problem: {}", e),
            CartError::SerializationError(e) => format!("Output problem: {}", e),
        }
    }
}
