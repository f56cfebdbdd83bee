//! From raw input to a present-or-absent contact.

use crate::compound_types::Contact;
use crate::config::ContactPolicy;
use crate::simple_types::{Email, FirstName, LastName, MiddleName, make_field};
use crate::workflow::ContactError;

/// Raw contact input, exactly as received.
///
/// A `None` middle name means none was supplied; `Some` text is validated
/// like any other field.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct UnvalidatedContact {
    first_name: String,
    last_name: String,
    #[cfg_attr(feature = "serde", serde(default))]
    middle_name: Option<String>,
    email: String,
}

impl UnvalidatedContact {
    /// Creates raw input without a middle name.
    pub fn new(first_name: impl Into<String>, last_name: impl Into<String>, email: impl Into<String>) -> Self {
        Self {
            first_name: first_name.into(),
            last_name: last_name.into(),
            middle_name: None,
            email: email.into(),
        }
    }

    /// Sets the raw middle name.
    #[must_use]
    pub fn with_middle_name(self, middle_name: impl Into<String>) -> Self {
        Self {
            middle_name: Some(middle_name.into()),
            ..self
        }
    }

    /// Raw first name.
    #[must_use]
    pub fn first_name(&self) -> &str {
        &self.first_name
    }

    /// Raw last name.
    #[must_use]
    pub fn last_name(&self) -> &str {
        &self.last_name
    }

    /// Raw middle name, if supplied.
    #[must_use]
    pub fn middle_name(&self) -> Option<&str> {
        self.middle_name.as_deref()
    }

    /// Raw email address.
    #[must_use]
    pub fn email(&self) -> &str {
        &self.email
    }

    /// The error reported when this input does not yield a contact.
    #[must_use]
    pub fn initialization_failed(&self) -> ContactError {
        ContactError::InitializationFailed {
            first_name: self.first_name.clone(),
            last_name: self.last_name.clone(),
            middle_name: self.middle_name.clone(),
            email: self.email.clone(),
        }
    }
}

/// Validates every field of `unvalidated` under `policy` and assembles them.
///
/// The middle name picks the assembler: without one the three-field path is
/// used, with one the four-field path, where an invalid middle name makes
/// the whole contact absent.
///
/// # Examples
///
/// ```
/// use contact_lifecycle::config::ContactPolicy;
/// use contact_lifecycle::workflow::{create_contact, UnvalidatedContact};
///
/// let policy = ContactPolicy::default();
///
/// let with_middle = UnvalidatedContact::new("Richard", "Chuo", "test@example.com").with_middle_name("Andrew");
/// assert!(create_contact(&policy, &with_middle).is_some());
///
/// let without_middle = UnvalidatedContact::new("Richard", "Chuo", "test@example.com");
/// assert!(create_contact(&policy, &without_middle).unwrap().middle_name().is_none());
/// ```
pub fn create_contact(policy: &ContactPolicy, unvalidated: &UnvalidatedContact) -> Option<Contact> {
    let first_name: Option<FirstName> = make_field(policy.first_name.predicate(), unvalidated.first_name());
    let last_name: Option<LastName> = make_field(policy.last_name.predicate(), unvalidated.last_name());
    let email: Option<Email> = make_field(|raw: &str| policy.email_format.accepts(raw), unvalidated.email());

    let contact = match unvalidated.middle_name() {
        Some(raw) => {
            let middle_name: Option<MiddleName> = make_field(policy.middle_name.predicate(), raw);
            Contact::assemble(first_name, last_name, middle_name, email)
        }
        None => Contact::assemble_without_middle_name(first_name, last_name, email),
    };

    match &contact {
        Some(contact) => tracing::debug!(%contact, "contact assembled"),
        None => tracing::debug!(?unvalidated, "contact rejected by field predicates"),
    }

    contact
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::EmailFormat;
    use rstest::{fixture, rstest};

    #[fixture]
    fn policy() -> ContactPolicy {
        ContactPolicy::default()
    }

    #[fixture]
    fn input() -> UnvalidatedContact {
        UnvalidatedContact::new("Richard", "Chuo", "test@example.com").with_middle_name("Andrew")
    }

    #[rstest]
    fn valid_input_creates_contact(policy: ContactPolicy, input: UnvalidatedContact) {
        let contact = create_contact(&policy, &input).unwrap();

        assert_eq!(contact.first_name().to_string(), "Richard");
        assert_eq!(contact.middle_name().map(ToString::to_string).as_deref(), Some("Andrew"));
        assert!(!contact.email().is_verified());
    }

    #[rstest]
    #[case(UnvalidatedContact::new("", "Chuo", "test@example.com"))]
    #[case(UnvalidatedContact::new("Richard", "ChuoChuoChuoChuo", "test@example.com"))]
    #[case(UnvalidatedContact::new("Richard", "Chuo", "test.example.com"))]
    #[case(UnvalidatedContact::new("Richard", "Chuo", "test@example.com").with_middle_name(""))]
    fn any_invalid_field_makes_contact_absent(policy: ContactPolicy, #[case] input: UnvalidatedContact) {
        assert_eq!(create_contact(&policy, &input), None);
    }

    #[rstest]
    fn email_format_follows_policy(input: UnvalidatedContact) {
        let lenient = ContactPolicy {
            email_format: EmailFormat::NonEmpty,
            ..ContactPolicy::default()
        };
        let odd_email = UnvalidatedContact::new("Richard", "Chuo", "richard at example");

        assert!(create_contact(&lenient, &odd_email).is_some());
        assert!(create_contact(&ContactPolicy::default(), &odd_email).is_none());
        assert!(create_contact(&lenient, &input).is_some());
    }

    #[rstest]
    fn initialization_failed_carries_raw_input(input: UnvalidatedContact) {
        assert_eq!(
            input.initialization_failed(),
            ContactError::InitializationFailed {
                first_name: "Richard".to_string(),
                last_name: "Chuo".to_string(),
                middle_name: Some("Andrew".to_string()),
                email: "test@example.com".to_string(),
            }
        );
    }
}
