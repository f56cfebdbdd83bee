//! Personal name fields.
//!
//! The types hold no length metadata. Bounds live in the predicate passed to
//! [`make_field`](super::make_field), which is the only way to build them:
//!
//! ```compile_fail
//! use contact_lifecycle::simple_types::FirstName;
//!
//! let forged = FirstName("Richard".to_string());
//! ```

use contact_lifecycle_derive::ValidatedField;

/// A contact's given name.
///
/// # Examples
///
/// ```
/// use contact_lifecycle::simple_types::predicate::in_between;
/// use contact_lifecycle::simple_types::{make_field, FirstName};
///
/// let first_name: FirstName = make_field(in_between(1, 10), "Richard").unwrap();
/// assert_eq!(first_name.to_string(), "Richard");
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, ValidatedField)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct FirstName(String);

/// A contact's middle name. Optional on a [`Contact`](crate::compound_types::Contact).
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, ValidatedField)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct MiddleName(String);

/// A contact's family name.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, ValidatedField)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct LastName(String);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::simple_types::predicate::in_between;
    use crate::simple_types::{ValidatedField, make_field};
    use rstest::rstest;

    #[rstest]
    fn display_renders_raw_text() {
        let last_name: LastName = make_field(in_between(1, 15), "Chuo").unwrap();
        assert_eq!(format!("{last_name}"), "Chuo");
    }

    #[rstest]
    fn as_ref_exposes_text() {
        let middle_name: MiddleName = make_field(in_between(1, 10), "Andrew").unwrap();
        let text: &str = middle_name.as_ref();
        assert_eq!(text, middle_name.value());
    }

    #[rstest]
    fn equal_text_gives_equal_fields() {
        let left: FirstName = make_field(in_between(1, 10), "Richard").unwrap();
        let right: FirstName = make_field(|_: &str| true, "Richard").unwrap();
        assert_eq!(left, right);
    }
}
