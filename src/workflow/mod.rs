//! The contact workflow: create, then verify.
//!
//! ```text
//! UnvalidatedContact
//!   → create_contact        Option<Contact>            (applicative, all-or-nothing)
//!   → verify_entity         Result<Contact, ContactError>
//! ```
//!
//! External collaborators are injected: a [`ContactPolicy`](crate::config::ContactPolicy)
//! for the field predicates and an [`EmailVerifier`] for the lifecycle
//! transition.

mod create_contact;
mod email_verification;
mod error_types;
mod verify_contact;

pub use create_contact::{UnvalidatedContact, create_contact};
pub use email_verification::{
    EmailVerifier, PredicateVerifier, STUB_REJECTION_REASON, verify_email, verify_unverified,
};
pub use error_types::ContactError;
pub use verify_contact::{create_and_verify_contact, verify_contact, verify_entity};
