//! Derive macros for contact-lifecycle.
//!
//! # Available Derive Macros
//!
//! - [`ValidatedField`]: Turns a single-field `String` newtype into a field
//!   that can only be built through `make_field`
//! - [`Lenses`]: Generates lens methods for struct fields
//!
//! # Example: Lenses
//!
//! ```rust,ignore
//! use contact_lifecycle::optics::Lens;
//! use contact_lifecycle_derive::Lenses;
//!
//! #[derive(Clone, Lenses)]
//! struct Mailbox {
//!     owner: String,
//!     unread: u32,
//! }
//!
//! // Generated methods:
//! // - Mailbox::owner_lens() -> impl Lens<Mailbox, String>
//! // - Mailbox::unread_lens() -> impl Lens<Mailbox, u32>
//!
//! let mailbox = Mailbox { owner: "richard".to_string(), unread: 3 };
//! assert_eq!(*Mailbox::unread_lens().get(&mailbox), 3);
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]

mod lenses;
mod validated_field;

use proc_macro::TokenStream;

/// Derive macro for generating lens accessors for each named struct field.
///
/// For a field `email: Email` on `Contact`, this generates
/// `Contact::email_lens() -> impl Lens<Contact, Email> + Clone`.
///
/// # Restrictions
///
/// - Only structs with named fields are supported
/// - Tuple structs, unit structs, enums and unions are rejected
#[proc_macro_derive(Lenses)]
pub fn derive_lenses(input: TokenStream) -> TokenStream {
    lenses::derive_lenses_impl(input)
}

/// Derive macro for the crate's validated text fields.
///
/// Applies to tuple structs holding exactly one `String`. The generated
/// code implements the sealed wrapping constructor, `ValidatedField`
/// (with `FIELD_NAME` set to the type name), `Display` and `AsRef<str>`.
///
/// The sealed constructor lives inside `contact_lifecycle`, so this derive
/// only compiles for types defined in that crate.
#[proc_macro_derive(ValidatedField)]
pub fn derive_validated_field(input: TokenStream) -> TokenStream {
    validated_field::derive_validated_field_impl(input)
}
