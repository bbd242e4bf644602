use clap::Parser;
use coffee_cart::utils::error::ErrorSeverity;
use coffee_cart::utils::{logger, validation::Validate};
use coffee_cart::{CartError, CheckoutDetails, CliConfig, EntryKey, OrderSession, PromoState};
use std::io::{self, BufRead, Write};

fn main() {
    let config = CliConfig::parse();

    logger::init_cli_logger(config.verbose);

    tracing::info!("Starting coffee-cart CLI");
    if config.verbose {
        tracing::debug!("CLI config: {:?}", config);
    }

    if let Err(e) = config.validate() {
        tracing::error!("❌ Configuration validation failed: {}", e);
        tracing::error!("💡 Suggestion: {}", e.recovery_suggestion());
        eprintln!("❌ {}", e.user_friendly_message());
        std::process::exit(1);
    }

    let mut session = match OrderSession::from_config(&config) {
        Ok(session) => session,
        Err(e) => {
            tracing::error!(
                "❌ Could not start the session: {} (Category: {:?}, Severity: {:?})",
                e,
                e.category(),
                e.severity()
            );
            tracing::error!("💡 Recovery suggestion: {}", e.recovery_suggestion());
            eprintln!("❌ {}", e.user_friendly_message());
            eprintln!("💡 {}", e.recovery_suggestion());

            let exit_code = match e.severity() {
                ErrorSeverity::Low | ErrorSeverity::High => 1,
                ErrorSeverity::Medium => 2,
                ErrorSeverity::Critical => 3,
            };
            std::process::exit(exit_code);
        }
    };

    println!("☕ Welcome to the coffee cart! Type 'help' for commands.");
    print_menu(&session);

    if let Err(e) = run(&mut session) {
        tracing::error!("❌ Session ended unexpectedly: {}", e);
        std::process::exit(3);
    }
}

fn run(session: &mut OrderSession) -> anyhow::Result<()> {
    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();

    loop {
        print!("> ");
        io::stdout().flush()?;

        let line = match lines.next() {
            Some(line) => line?,
            None => break,
        };
        let tokens: Vec<&str> = line.split_whitespace().collect();

        let outcome = match tokens.as_slice() {
            [] => Ok(()),
            ["help"] => {
                print_help();
                Ok(())
            }
            ["menu"] => {
                print_menu(session);
                Ok(())
            }
            ["cart"] => {
                print_cart(session);
                Ok(())
            }
            ["total"] => {
                println!("{}", session.total_label());
                Ok(())
            }
            ["lang"] => {
                let locale = session.toggle_locale();
                println!("Display language: {:?}", locale);
                Ok(())
            }
            ["add", id] => session.add_item(id).map(|state| announce_offer(session, state)),
            ["+", rest @ ..] => match parse_key(rest) {
                Some(key) => session
                    .increment(&key)
                    .map(|state| announce_offer(session, state)),
                None => usage(),
            },
            ["-", rest @ ..] => match parse_key(rest) {
                Some(key) => session.decrement(&key),
                None => usage(),
            },
            ["rm", rest @ ..] => match parse_key(rest) {
                Some(key) => session.remove(&key),
                None => usage(),
            },
            ["yes"] | ["accept"] => session.accept_promo().map(|()| {
                println!("🎁 Added to your cart. {}", session.total_label());
            }),
            ["no"] | ["discard"] => session.discard_promo(),
            ["pay"] => checkout(session, &mut lines),
            ["quit"] | ["exit"] => break,
            _ => usage(),
        };

        if let Err(e) = outcome {
            eprintln!("❌ {}", e.user_friendly_message());
            eprintln!("💡 {}", e.recovery_suggestion());
        }
    }

    Ok(())
}

fn parse_key(tokens: &[&str]) -> Option<EntryKey> {
    match tokens {
        [id] => Some(EntryKey::basic(*id)),
        [id, "discounted"] => Some(EntryKey::discounted(*id)),
        _ => None,
    }
}

fn usage() -> Result<(), CartError> {
    println!("Unrecognized command; type 'help' for the list.");
    Ok(())
}

fn announce_offer(session: &OrderSession, state: PromoState) {
    println!("{}", session.total_label());
    if state == PromoState::Offered {
        if let Some(bonus) = session.pending_offer() {
            println!(
                "🎁 Get an extra {} for ${:.2}! (yes/no)",
                bonus.display_name(session.locale()),
                bonus.unit_price
            );
        }
    }
}

fn print_menu(session: &OrderSession) {
    println!("--- menu ---");
    for item in session.catalog().items() {
        println!(
            "  {:<20} {:<20} ${:.2}",
            item.id,
            item.display_name(session.locale()),
            item.unit_price
        );
    }
}

fn print_cart(session: &OrderSession) {
    if session.cart().is_empty() {
        println!("No coffee, go add some.");
        return;
    }
    println!("--- cart ({}) ---", session.item_count());
    for entry in session.preview() {
        println!(
            "  {:<24} ${:.2} x {:<3} ${:.2}",
            entry.display_name(session.locale()),
            entry.item.unit_price,
            entry.quantity,
            entry.line_total()
        );
    }
    println!("{}", session.total_label());
}

/// The payment form: name, email, optional promotion opt-in.
fn checkout(
    session: &mut OrderSession,
    lines: &mut impl Iterator<Item = io::Result<String>>,
) -> Result<(), CartError> {
    let name = prompt(lines, "Name: ")?;
    let email = prompt(lines, "Email: ")?;
    let opt_in = prompt(lines, "Promotion updates? (y/n): ")?;

    let details = CheckoutDetails {
        name,
        email,
        promotion_opt_in: matches!(opt_in.trim(), "y" | "yes"),
    };

    let receipt = session.pay(&details)?;
    println!("✅ Thanks for your purchase, {}!", receipt.customer_name);
    println!("{}", serde_json::to_string_pretty(&receipt)?);
    Ok(())
}

fn prompt(
    lines: &mut impl Iterator<Item = io::Result<String>>,
    label: &str,
) -> Result<String, CartError> {
    print!("{}", label);
    io::stdout().flush()?;
    match lines.next() {
        Some(line) => Ok(line?),
        None => Ok(String::new()),
    }
}

fn print_help() {
    println!("  menu                 show the menu");
    println!("  add <id>             add one item to the cart");
    println!("  cart                 show the sorted cart preview");
    println!("  + <id> [discounted]  one more of an entry");
    println!("  - <id> [discounted]  one fewer; the last one removes the entry");
    println!("  rm <id> [discounted] remove an entry entirely");
    println!("  yes / no             answer a promotion offer");
    println!("  lang                 toggle English / Chinese names");
    println!("  total                show the pay-button label");
    println!("  pay                  check out");
    println!("  quit                 leave");
}
