//! Field-level building blocks of a contact.
//!
//! Every field is a newtype that can only be produced by [`make_field`],
//! which wraps raw text if and only if a caller-supplied predicate accepts
//! it. The predicates in [`predicate`] cover the usual cases.
//!
//! - **Names**: [`FirstName`], [`MiddleName`], [`LastName`]
//! - **Email lifecycle**: [`Email`], [`UnverifiedEmail`], [`VerifiedEmail`]
//!
//! ```
//! use contact_lifecycle::simple_types::predicate::{in_between, should_be_email};
//! use contact_lifecycle::simple_types::{make_field, Email, FirstName};
//!
//! let first_name: Option<FirstName> = make_field(in_between(1, 10), "Richard");
//! let email: Option<Email> = make_field(should_be_email, "not-an-address");
//!
//! assert!(first_name.is_some());
//! assert!(email.is_none());
//! ```

mod email;
mod name_types;
pub mod predicate;
pub(crate) mod validated_field;

pub use email::{Email, UnverifiedEmail, VerifiedEmail};
pub use name_types::{FirstName, LastName, MiddleName};
pub use validated_field::{ValidatedField, make_field, make_field_with};
