//! # contact-lifecycle
//!
//! Validated contact construction and a typed email verification lifecycle.
//!
//! ## Overview
//!
//! A contact is built from raw strings in two stages:
//!
//! 1. **Assembly**: every field is validated on its own by a caller-chosen
//!    predicate, producing `Option<Field>`. The fields are then combined
//!    applicatively: the contact exists only if every required field does.
//! 2. **Verification**: the contact's email moves from `Unverified` to
//!    `Verified` through a fallible transition. Absence from stage 1 becomes
//!    an explicit [`ContactError::InitializationFailed`](workflow::ContactError).
//!
//! ## Module Structure
//!
//! - `typeclass`: `Functor`, `Applicative`, `Monad` for `Option` and `Result`
//! - `compose`: the `pipe!` macro
//! - `optics`: `Lens` for immutable field replacement
//! - `simple_types`: predicate-gated fields and the email lifecycle value
//! - `compound_types`: the `Contact` aggregate
//! - `workflow`: contact creation and verification
//! - `config`: the validation policy
//!
//! ## Example
//!
//! ```rust
//! use contact_lifecycle::config::ContactPolicy;
//! use contact_lifecycle::workflow::{create_and_verify_contact, PredicateVerifier, UnvalidatedContact};
//!
//! let input = UnvalidatedContact::new("Richard", "Chuo", "test@example.com").with_middle_name("Andrew");
//! let contact = create_and_verify_contact(&ContactPolicy::default(), &PredicateVerifier::stub(), &input).unwrap();
//!
//! assert_eq!(contact.email().to_string(), "Verified:[test@example.com]");
//! ```
//!
//! ## Feature Flags
//!
//! - `serde`: `Serialize` for the domain types, `Deserialize` for raw input

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]

// Lets derive output refer to this crate by name from inside it.
extern crate self as contact_lifecycle;

/// Prelude module for convenient imports.
///
/// ```rust
/// use contact_lifecycle::prelude::*;
/// ```
pub mod prelude {
    pub use crate::compound_types::Contact;
    pub use crate::config::ContactPolicy;
    pub use crate::simple_types::{
        Email, FirstName, LastName, MiddleName, UnverifiedEmail, ValidatedField, VerifiedEmail, make_field,
    };
    pub use crate::typeclass::{Applicative, Functor, Monad};
    pub use crate::workflow::{
        ContactError, EmailVerifier, PredicateVerifier, UnvalidatedContact, create_and_verify_contact,
        create_contact, verify_contact, verify_email, verify_entity,
    };
}

pub mod compose;
pub mod compound_types;
pub mod config;
pub mod optics;
pub mod simple_types;
pub mod typeclass;
pub mod workflow;

static_assertions::assert_impl_all!(compound_types::Contact: Clone, Send, Sync);
static_assertions::assert_impl_all!(simple_types::Email: Clone, Send, Sync);
static_assertions::assert_impl_all!(workflow::ContactError: std::error::Error, Send, Sync);
static_assertions::assert_not_impl_any!(simple_types::VerifiedEmail: Default);
