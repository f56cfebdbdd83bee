//! contact-lifecycle
//!
//! Builds the reference contact from raw strings, prints the assembled
//! (still unverified) contact, then runs verification and prints the outcome.
//!
//! ```bash
//! RUST_LOG=contact_lifecycle=debug CONTACT_LAST_NAME_MAX=3 cargo run
//! ```

use std::process::ExitCode;

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use contact_lifecycle::config::ContactPolicy;
use contact_lifecycle::workflow::{PredicateVerifier, UnvalidatedContact, create_contact, verify_entity};

fn main() -> ExitCode {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "contact_lifecycle=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let policy = match ContactPolicy::from_env() {
        Ok(policy) => policy,
        Err(error) => {
            eprintln!("{error}");
            return ExitCode::FAILURE;
        }
    };
    tracing::debug!(?policy, "validation policy loaded");

    let input = UnvalidatedContact::new("Richard", "Chuo", "test@example.com").with_middle_name("Andrew");

    let contact = create_contact(&policy, &input);
    match &contact {
        Some(contact) => println!("Some({contact})"),
        None => println!("None"),
    }

    match verify_entity(&PredicateVerifier::stub(), &input, contact) {
        Ok(verified) => {
            println!("Right({verified})");
            ExitCode::SUCCESS
        }
        Err(error) => {
            println!("Left({error})");
            ExitCode::FAILURE
        }
    }
}
