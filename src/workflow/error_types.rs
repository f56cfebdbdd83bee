//! Errors surfaced by the contact workflow.
//!
//! Every failure is returned to the immediate caller as a [`ContactError`];
//! nothing is retried and nothing is swallowed.

use thiserror::Error;

/// Failure of contact creation or email verification.
///
/// # Examples
///
/// ```
/// use contact_lifecycle::workflow::ContactError;
///
/// let error = ContactError::AlreadyVerified { address: "test@example.com".to_string() };
/// assert_eq!(error.to_string(), "Email already verified: test@example.com");
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum ContactError {
    /// One or more required fields were rejected by their predicate. Carries
    /// the raw inputs so the caller can tell which.
    #[error(
        "Contact initialization failed: first-name: {first_name}, last-name: {last_name}, {}email: {email}",
        middle_name_segment(.middle_name)
    )]
    InitializationFailed {
        /// Raw first name as supplied.
        first_name: String,
        /// Raw last name as supplied.
        last_name: String,
        /// Raw middle name, if one was supplied.
        middle_name: Option<String>,
        /// Raw email address as supplied.
        email: String,
    },

    /// The verification check rejected an unverified address.
    #[error("Email verification failed: {reason}")]
    VerificationFailed {
        /// Why the check said no.
        reason: String,
    },

    /// A transition was attempted on an address that is already verified.
    #[error("Email already verified: {address}")]
    AlreadyVerified {
        /// The address that was already verified.
        address: String,
    },
}

fn middle_name_segment(middle_name: &Option<String>) -> String {
    middle_name
        .as_deref()
        .map(|name| format!("middle-name: {name}, "))
        .unwrap_or_default()
}
