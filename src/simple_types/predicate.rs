//! String predicates used to gate field construction.
//!
//! Each predicate is a plain `Fn(&str) -> bool`; `make_field` accepts any of
//! them, or any caller-supplied closure with the same shape.

use regex::Regex;
use std::sync::LazyLock;

/// `local@domain` where neither side is empty or holds `@` or whitespace.
static EMAIL_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[^@\s]+@[^@\s]+$").expect("Invalid email regex pattern"));

/// Returns a predicate accepting text whose character count lies in `min..=max`.
///
/// Length is measured in `char`s, so `"Zoë"` has length 3.
///
/// # Examples
///
/// ```
/// use contact_lifecycle::simple_types::predicate::in_between;
///
/// let first_name_bounds = in_between(1, 10);
/// assert!(first_name_bounds("Richard"));
/// assert!(!first_name_bounds(""));
/// assert!(!first_name_bounds("Bartholomew"));
/// ```
#[must_use]
pub fn in_between(min: usize, max: usize) -> impl Fn(&str) -> bool + Copy {
    move |raw: &str| {
        let length = raw.chars().count();
        min <= length && length <= max
    }
}

/// Accepts any text with at least one character.
#[must_use]
pub const fn non_empty(raw: &str) -> bool {
    !raw.is_empty()
}

/// Accepts text shaped like `local@domain` with no whitespace.
///
/// # Examples
///
/// ```
/// use contact_lifecycle::simple_types::predicate::should_be_email;
///
/// assert!(should_be_email("test@example.com"));
/// assert!(!should_be_email("test.example.com"));
/// assert!(!should_be_email("te st@example.com"));
/// ```
#[must_use]
pub fn should_be_email(raw: &str) -> bool {
    EMAIL_PATTERN.is_match(raw)
}
