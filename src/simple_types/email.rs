//! The email lifecycle value.
//!
//! An [`Email`] is either [`Unverified`](Email::Unverified), the state every
//! freshly validated address starts in, or [`Verified`](Email::Verified), the
//! terminal state. The enum is closed and matched exhaustively.
//!
//! [`VerifiedEmail`] has no public constructor. The only way to obtain one is
//! the verification transition in
//! [`workflow::verify_email`](crate::workflow::verify_email):
//!
//! ```compile_fail
//! use contact_lifecycle::simple_types::VerifiedEmail;
//!
//! let forged = VerifiedEmail { address: "test@example.com".to_string() };
//! ```

use std::fmt;

use super::validated_field::{ValidatedField, sealed};

/// An address that passed the format predicate but has not been verified.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct UnverifiedEmail {
    address: String,
}

impl UnverifiedEmail {
    /// The raw address.
    #[must_use]
    pub fn address(&self) -> &str {
        &self.address
    }
}

impl fmt::Display for UnverifiedEmail {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(formatter, "Unverified:[{}]", self.address)
    }
}

/// An address that passed a verification check.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct VerifiedEmail {
    address: String,
}

impl VerifiedEmail {
    /// Promotes an unverified address. The caller is responsible for having
    /// run the check.
    pub(crate) fn promote(email: &UnverifiedEmail) -> Self {
        Self {
            address: email.address.clone(),
        }
    }

    /// The raw address.
    #[must_use]
    pub fn address(&self) -> &str {
        &self.address
    }
}

impl fmt::Display for VerifiedEmail {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(formatter, "Verified:[{}]", self.address)
    }
}

/// An email address in one of its two lifecycle states.
///
/// # Examples
///
/// ```
/// use contact_lifecycle::simple_types::predicate::should_be_email;
/// use contact_lifecycle::simple_types::{make_field, Email};
///
/// let email: Email = make_field(should_be_email, "test@example.com").unwrap();
/// assert!(!email.is_verified());
/// assert_eq!(email.to_string(), "Unverified:[test@example.com]");
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub enum Email {
    /// Initial state.
    Unverified(UnverifiedEmail),
    /// Terminal state.
    Verified(VerifiedEmail),
}

impl Email {
    /// The raw address, whatever the state.
    #[must_use]
    pub fn address(&self) -> &str {
        match self {
            Self::Unverified(email) => email.address(),
            Self::Verified(email) => email.address(),
        }
    }

    /// Returns `true` for the terminal state.
    #[must_use]
    pub const fn is_verified(&self) -> bool {
        matches!(self, Self::Verified(_))
    }
}

impl From<VerifiedEmail> for Email {
    fn from(email: VerifiedEmail) -> Self {
        Self::Verified(email)
    }
}

impl fmt::Display for Email {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Unverified(email) => fmt::Display::fmt(email, formatter),
            Self::Verified(email) => fmt::Display::fmt(email, formatter),
        }
    }
}

impl sealed::Wrap for Email {
    fn wrap(raw: String) -> Self {
        Self::Unverified(UnverifiedEmail { address: raw })
    }
}

impl ValidatedField for Email {
    const FIELD_NAME: &'static str = "Email";

    fn value(&self) -> &str {
        self.address()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::simple_types::make_field;
    use crate::simple_types::predicate::non_empty;
    use rstest::{fixture, rstest};

    #[fixture]
    fn unverified() -> UnverifiedEmail {
        match make_field::<Email, _>(non_empty, "test@example.com") {
            Some(Email::Unverified(email)) => email,
            other => panic!("expected an unverified email, got {other:?}"),
        }
    }

    #[rstest]
    fn unverified_display(unverified: UnverifiedEmail) {
        assert_eq!(unverified.to_string(), "Unverified:[test@example.com]");
    }

    #[rstest]
    fn promote_keeps_address(unverified: UnverifiedEmail) {
        let verified = VerifiedEmail::promote(&unverified);

        assert_eq!(verified.address(), unverified.address());
        assert_eq!(verified.to_string(), "Verified:[test@example.com]");
    }

    #[rstest]
    fn email_reports_state(unverified: UnverifiedEmail) {
        let verified: Email = VerifiedEmail::promote(&unverified).into();
        let pending = Email::Unverified(unverified);

        assert!(!pending.is_verified());
        assert!(verified.is_verified());
        assert_eq!(pending.address(), verified.address());
    }
}
