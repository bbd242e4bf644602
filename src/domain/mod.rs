// Domain layer: core models and ports (interfaces). No external dependencies
// beyond serde and the shared money/time types.

pub mod model;
pub mod ports;
