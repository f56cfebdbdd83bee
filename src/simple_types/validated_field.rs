//! Predicate-gated construction of field values.
//!
//! A field type never validates itself. It is handed a predicate and a raw
//! string by its caller and either wraps the string or produces nothing.
//! Absence carries no diagnostic: the caller chose the predicate and is the
//! one who knows what the failure means.

pub(crate) mod sealed {
    /// Wraps already-checked text. Reachable only from inside the crate, so
    /// [`make_field`](super::make_field) is the single public way in.
    pub trait Wrap {
        fn wrap(raw: String) -> Self;
    }
}

/// A field whose values are only created through [`make_field`].
///
/// Implemented by [`FirstName`](super::FirstName),
/// [`MiddleName`](super::MiddleName), [`LastName`](super::LastName) and
/// [`Email`](super::Email). The set is closed.
pub trait ValidatedField: sealed::Wrap + Sized {
    /// Name used when reporting this field.
    const FIELD_NAME: &'static str;

    /// The wrapped text.
    fn value(&self) -> &str;
}

/// Builds a field of type `T` from `raw` if `predicate` accepts it.
///
/// # Examples
///
/// ```
/// use contact_lifecycle::simple_types::predicate::in_between;
/// use contact_lifecycle::simple_types::{make_field, FirstName, ValidatedField};
///
/// let first_name: Option<FirstName> = make_field(in_between(1, 10), "Richard");
/// assert_eq!(first_name.as_ref().map(ValidatedField::value), Some("Richard"));
///
/// let too_long: Option<FirstName> = make_field(in_between(1, 10), "Maximiliano-Jose");
/// assert!(too_long.is_none());
/// ```
pub fn make_field<T, P>(predicate: P, raw: &str) -> Option<T>
where
    T: ValidatedField,
    P: FnOnce(&str) -> bool,
{
    predicate(raw).then(|| <T as sealed::Wrap>::wrap(raw.to_owned()))
}

/// Fixes the predicate of [`make_field`], returning a reusable constructor.
///
/// ```
/// use contact_lifecycle::simple_types::predicate::in_between;
/// use contact_lifecycle::simple_types::{make_field_with, LastName};
///
/// let last_name_of = make_field_with::<LastName, _>(in_between(1, 15));
/// assert!(last_name_of("Chuo").is_some());
/// assert!(last_name_of("").is_none());
/// ```
pub fn make_field_with<T, P>(predicate: P) -> impl Fn(&str) -> Option<T>
where
    T: ValidatedField,
    P: Fn(&str) -> bool,
{
    move |raw: &str| make_field(&predicate, raw)
}
