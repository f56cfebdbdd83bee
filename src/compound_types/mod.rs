//! Compound types built from validated fields.
//!
//! - [`Contact`]: first name, optional middle name, last name and email

mod contact;

pub use contact::Contact;
