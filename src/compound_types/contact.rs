//! The contact aggregate and its applicative assemblers.

use std::fmt;

use contact_lifecycle_derive::Lenses;

use crate::simple_types::{Email, FirstName, LastName, MiddleName};
use crate::typeclass::Applicative;

/// A contact whose required fields all passed validation.
///
/// There are two plain constructors, one per arity:
/// [`with_middle_name`](Self::with_middle_name) and
/// [`without_middle_name`](Self::without_middle_name). Their lifted
/// counterparts [`assemble`](Self::assemble) and
/// [`assemble_without_middle_name`](Self::assemble_without_middle_name)
/// combine present-or-absent fields and yield a contact only when every
/// input is present.
///
/// # Examples
///
/// ```
/// use contact_lifecycle::compound_types::Contact;
/// use contact_lifecycle::simple_types::predicate::{in_between, should_be_email};
/// use contact_lifecycle::simple_types::make_field;
///
/// let contact = Contact::assemble(
///     make_field(in_between(1, 10), "Richard"),
///     make_field(in_between(1, 15), "Chuo"),
///     make_field(in_between(1, 10), "Andrew"),
///     make_field(should_be_email, "test@example.com"),
/// );
/// assert!(contact.is_some());
///
/// let missing_last_name = Contact::assemble(
///     make_field(in_between(1, 10), "Richard"),
///     make_field(in_between(1, 15), ""),
///     make_field(in_between(1, 10), "Andrew"),
///     make_field(should_be_email, "test@example.com"),
/// );
/// assert!(missing_last_name.is_none());
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash, Lenses)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Contact {
    first_name: FirstName,
    middle_name: Option<MiddleName>,
    last_name: LastName,
    email: Email,
}

impl Contact {
    /// Builds a contact that has a middle name.
    #[must_use]
    pub const fn with_middle_name(
        first_name: FirstName,
        last_name: LastName,
        middle_name: MiddleName,
        email: Email,
    ) -> Self {
        Self {
            first_name,
            middle_name: Some(middle_name),
            last_name,
            email,
        }
    }

    /// Builds a contact without a middle name.
    #[must_use]
    pub const fn without_middle_name(first_name: FirstName, last_name: LastName, email: Email) -> Self {
        Self {
            first_name,
            middle_name: None,
            last_name,
            email,
        }
    }

    /// Combines four independently validated fields.
    ///
    /// Present if and only if all four inputs are present.
    #[must_use]
    pub fn assemble(
        first_name: Option<FirstName>,
        last_name: Option<LastName>,
        middle_name: Option<MiddleName>,
        email: Option<Email>,
    ) -> Option<Self> {
        first_name.map4(last_name, middle_name, email, Self::with_middle_name)
    }

    /// Combines three independently validated fields into a contact with no
    /// middle name.
    #[must_use]
    pub fn assemble_without_middle_name(
        first_name: Option<FirstName>,
        last_name: Option<LastName>,
        email: Option<Email>,
    ) -> Option<Self> {
        first_name.map3(last_name, email, Self::without_middle_name)
    }

    /// The given name.
    #[must_use]
    pub const fn first_name(&self) -> &FirstName {
        &self.first_name
    }

    /// The middle name, if the contact has one.
    #[must_use]
    pub const fn middle_name(&self) -> Option<&MiddleName> {
        self.middle_name.as_ref()
    }

    /// The family name.
    #[must_use]
    pub const fn last_name(&self) -> &LastName {
        &self.last_name
    }

    /// The email in its current lifecycle state.
    #[must_use]
    pub const fn email(&self) -> &Email {
        &self.email
    }
}

impl fmt::Display for Contact {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(formatter, "Contact {{ first-name: {}, ", self.first_name)?;
        if let Some(middle_name) = &self.middle_name {
            write!(formatter, "middle-name: {middle_name}, ")?;
        }
        write!(formatter, "last-name: {}, email: {} }}", self.last_name, self.email)
    }
}
