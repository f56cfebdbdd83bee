//! The email lifecycle transition.
//!
//! `Unverified` → `Verified` is the only forward transition. It runs a
//! caller-supplied [`EmailVerifier`] and never mutates its input:
//!
//! | input        | check   | result                      |
//! |--------------|---------|-----------------------------|
//! | `Unverified` | `true`  | `Ok(VerifiedEmail)`         |
//! | `Unverified` | `false` | `Err(VerificationFailed)`   |
//! | `Verified`   | any     | `Err(AlreadyVerified)`      |

use crate::simple_types::{Email, UnverifiedEmail, VerifiedEmail};
use crate::workflow::ContactError;

/// Reason reported by [`PredicateVerifier::stub`] when it rejects an address.
pub const STUB_REJECTION_REASON: &str = "Test implementation";

/// Decides whether an unverified address may become verified.
///
/// This is where a real confirmation mechanism (a mailed link, an external
/// service) plugs in.
pub trait EmailVerifier {
    /// Returns `true` if `email` is confirmed.
    fn check(&self, email: &UnverifiedEmail) -> bool;

    /// Reason attached to [`ContactError::VerificationFailed`] when
    /// [`check`](Self::check) returns `false`.
    fn rejection_reason(&self) -> String;
}

/// An [`EmailVerifier`] backed by a predicate and a fixed rejection reason.
///
/// # Examples
///
/// ```
/// use contact_lifecycle::simple_types::UnverifiedEmail;
/// use contact_lifecycle::workflow::{EmailVerifier, PredicateVerifier};
///
/// let corporate_only = PredicateVerifier::new("not a corporate address", |email: &UnverifiedEmail| {
///     email.address().ends_with("@example.com")
/// });
/// assert_eq!(corporate_only.rejection_reason(), "not a corporate address");
/// ```
#[derive(Clone)]
pub struct PredicateVerifier<F> {
    predicate: F,
    reason: String,
}

impl<F> PredicateVerifier<F>
where
    F: Fn(&UnverifiedEmail) -> bool,
{
    /// Wraps `predicate`, reporting `reason` on rejection.
    pub fn new(reason: impl Into<String>, predicate: F) -> Self {
        Self {
            predicate,
            reason: reason.into(),
        }
    }
}

impl PredicateVerifier<fn(&UnverifiedEmail) -> bool> {
    /// Stand-in verifier that accepts any non-empty address.
    #[must_use]
    pub fn stub() -> Self {
        Self {
            predicate: address_is_present,
            reason: STUB_REJECTION_REASON.to_string(),
        }
    }
}

fn address_is_present(email: &UnverifiedEmail) -> bool {
    !email.address().is_empty()
}

impl<F> EmailVerifier for PredicateVerifier<F>
where
    F: Fn(&UnverifiedEmail) -> bool,
{
    fn check(&self, email: &UnverifiedEmail) -> bool {
        (self.predicate)(email)
    }

    fn rejection_reason(&self) -> String {
        self.reason.clone()
    }
}

impl<F> std::fmt::Debug for PredicateVerifier<F> {
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        formatter
            .debug_struct("PredicateVerifier")
            .field("reason", &self.reason)
            .finish_non_exhaustive()
    }
}

/// Runs `verifier` against an address known to be unverified.
///
/// # Errors
///
/// [`ContactError::VerificationFailed`] when the check rejects the address.
pub fn verify_unverified<V>(verifier: &V, email: &UnverifiedEmail) -> Result<VerifiedEmail, ContactError>
where
    V: EmailVerifier + ?Sized,
{
    if verifier.check(email) {
        tracing::info!(address = email.address(), "email verified");
        Ok(VerifiedEmail::promote(email))
    } else {
        let reason = verifier.rejection_reason();
        tracing::warn!(address = email.address(), %reason, "email verification rejected");
        Err(ContactError::VerificationFailed { reason })
    }
}

/// Advances `email` to the verified state.
///
/// # Errors
///
/// - [`ContactError::VerificationFailed`] when the check rejects the address
/// - [`ContactError::AlreadyVerified`] when `email` is already verified,
///   whatever the verifier would have said
///
/// # Examples
///
/// ```
/// use contact_lifecycle::simple_types::predicate::should_be_email;
/// use contact_lifecycle::simple_types::{make_field, Email};
/// use contact_lifecycle::workflow::{verify_email, ContactError, PredicateVerifier};
///
/// let email: Email = make_field(should_be_email, "test@example.com").unwrap();
/// let verified: Email = verify_email(&PredicateVerifier::stub(), &email).unwrap().into();
/// assert_eq!(verified.to_string(), "Verified:[test@example.com]");
///
/// let again = verify_email(&PredicateVerifier::stub(), &verified);
/// assert_eq!(again, Err(ContactError::AlreadyVerified { address: "test@example.com".to_string() }));
/// ```
pub fn verify_email<V>(verifier: &V, email: &Email) -> Result<VerifiedEmail, ContactError>
where
    V: EmailVerifier + ?Sized,
{
    match email {
        Email::Unverified(unverified) => verify_unverified(verifier, unverified),
        Email::Verified(verified) => {
            tracing::warn!(address = verified.address(), "email already verified");
            Err(ContactError::AlreadyVerified {
                address: verified.address().to_owned(),
            })
        }
    }
}
