//! Validation policy configuration.
//!
//! [`ContactPolicy`] holds the predicates' parameters: the length bounds of
//! each name field and the accepted email format. Defaults match the
//! reference contact (first and middle name 1..=10, last name 1..=15,
//! address-shaped email). Each value can be overridden from the environment.
//!
//! # Environment Variables
//!
//! - `CONTACT_FIRST_NAME_MIN` / `CONTACT_FIRST_NAME_MAX`
//! - `CONTACT_MIDDLE_NAME_MIN` / `CONTACT_MIDDLE_NAME_MAX`
//! - `CONTACT_LAST_NAME_MIN` / `CONTACT_LAST_NAME_MAX`
//! - `CONTACT_EMAIL_FORMAT`: `address` or `non-empty`
//!
//! # Example
//!
//! ```rust,ignore
//! use contact_lifecycle::config::ContactPolicy;
//!
//! let policy = ContactPolicy::from_env()?;
//! ```

use std::str::FromStr;

use thiserror::Error;

use crate::simple_types::predicate::{in_between, non_empty, should_be_email};

/// Configuration error types.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum ConfigError {
    /// An environment variable has a value that cannot be parsed.
    #[error("Invalid value for {key}: {message}")]
    InvalidValue {
        /// The name of the environment variable.
        key: String,
        /// Description of why the value is invalid.
        message: String,
    },

    /// A length range is empty or admits empty names.
    #[error("Invalid bounds for {field}: {min}..={max} (expected 1 <= min <= max)")]
    InvalidBounds {
        /// Field the bounds apply to.
        field: &'static str,
        /// Configured minimum.
        min: usize,
        /// Configured maximum.
        max: usize,
    },
}

/// Inclusive character-count bounds for a name field.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct LengthBounds {
    min: usize,
    max: usize,
}

impl LengthBounds {
    /// Creates bounds for `field`.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidBounds`] when `min` is zero or greater
    /// than `max`.
    pub const fn new(field: &'static str, min: usize, max: usize) -> Result<Self, ConfigError> {
        if min == 0 || min > max {
            Err(ConfigError::InvalidBounds { field, min, max })
        } else {
            Ok(Self { min, max })
        }
    }

    /// Smallest accepted length.
    #[must_use]
    pub const fn min(self) -> usize {
        self.min
    }

    /// Largest accepted length.
    #[must_use]
    pub const fn max(self) -> usize {
        self.max
    }

    /// The predicate these bounds describe.
    #[must_use]
    pub fn predicate(self) -> impl Fn(&str) -> bool + Copy {
        in_between(self.min, self.max)
    }
}

/// Which predicate gates email construction.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum EmailFormat {
    /// `local@domain`, see [`should_be_email`].
    #[default]
    Address,
    /// Any non-empty text, see [`non_empty`].
    NonEmpty,
}

impl EmailFormat {
    /// Applies the selected predicate.
    #[must_use]
    pub fn accepts(self, raw: &str) -> bool {
        match self {
            Self::Address => should_be_email(raw),
            Self::NonEmpty => non_empty(raw),
        }
    }
}

impl FromStr for EmailFormat {
    type Err = String;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "address" => Ok(Self::Address),
            "non-empty" | "non_empty" => Ok(Self::NonEmpty),
            other => Err(format!("unknown email format '{other}' (expected 'address' or 'non-empty')")),
        }
    }
}

/// Parameters of every field predicate used to build a contact.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ContactPolicy {
    /// Bounds for the first name.
    pub first_name: LengthBounds,
    /// Bounds for the middle name.
    pub middle_name: LengthBounds,
    /// Bounds for the last name.
    pub last_name: LengthBounds,
    /// Predicate for the email address.
    pub email_format: EmailFormat,
}

impl Default for ContactPolicy {
    fn default() -> Self {
        Self {
            first_name: LengthBounds { min: 1, max: 10 },
            middle_name: LengthBounds { min: 1, max: 10 },
            last_name: LengthBounds { min: 1, max: 15 },
            email_format: EmailFormat::Address,
        }
    }
}

impl ContactPolicy {
    /// Loads the policy from environment variables, falling back to
    /// [`ContactPolicy::default`] for anything unset.
    ///
    /// A `.env` file is read first if present.
    ///
    /// # Errors
    ///
    /// See [`ContactPolicy::from_lookup`].
    pub fn from_env() -> Result<Self, ConfigError> {
        // Load .env file if present (ignores errors if file doesn't exist)
        dotenvy::dotenv().ok();

        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds the policy from an arbitrary key lookup.
    ///
    /// # Errors
    ///
    /// - [`ConfigError::InvalidValue`] when a value does not parse
    /// - [`ConfigError::InvalidBounds`] when a range is empty or starts at zero
    ///
    /// # Examples
    ///
    /// ```
    /// use contact_lifecycle::config::{ContactPolicy, EmailFormat};
    ///
    /// let policy = ContactPolicy::from_lookup(|key| match key {
    ///     "CONTACT_LAST_NAME_MAX" => Some("30".to_string()),
    ///     "CONTACT_EMAIL_FORMAT" => Some("non-empty".to_string()),
    ///     _ => None,
    /// })
    /// .unwrap();
    ///
    /// assert_eq!(policy.last_name.max(), 30);
    /// assert_eq!(policy.first_name.max(), 10);
    /// assert_eq!(policy.email_format, EmailFormat::NonEmpty);
    /// ```
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();

        let first_name = bounds_from_lookup(&lookup, "FirstName", "CONTACT_FIRST_NAME", defaults.first_name)?;
        let middle_name = bounds_from_lookup(&lookup, "MiddleName", "CONTACT_MIDDLE_NAME", defaults.middle_name)?;
        let last_name = bounds_from_lookup(&lookup, "LastName", "CONTACT_LAST_NAME", defaults.last_name)?;
        let email_format = parsed_or(&lookup, "CONTACT_EMAIL_FORMAT", defaults.email_format)?;

        Ok(Self {
            first_name,
            middle_name,
            last_name,
            email_format,
        })
    }
}

fn bounds_from_lookup<F>(
    lookup: &F,
    field: &'static str,
    prefix: &str,
    default: LengthBounds,
) -> Result<LengthBounds, ConfigError>
where
    F: Fn(&str) -> Option<String>,
{
    let min = parsed_or(lookup, &format!("{prefix}_MIN"), default.min)?;
    let max = parsed_or(lookup, &format!("{prefix}_MAX"), default.max)?;
    LengthBounds::new(field, min, max)
}

fn parsed_or<F, T>(lookup: &F, key: &str, default: T) -> Result<T, ConfigError>
where
    F: Fn(&str) -> Option<String>,
    T: FromStr,
    T::Err: std::fmt::Display,
{
    lookup(key).map_or(Ok(default), |raw| {
        raw.trim().parse().map_err(|error: T::Err| ConfigError::InvalidValue {
            key: key.to_string(),
            message: error.to_string(),
        })
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let values: HashMap<String, String> = pairs
            .iter()
            .map(|(key, value)| ((*key).to_string(), (*value).to_string()))
            .collect();
        move |key: &str| values.get(key).cloned()
    }

    #[rstest]
    fn empty_lookup_gives_defaults() {
        let policy = ContactPolicy::from_lookup(|_| None).unwrap();
        assert_eq!(policy, ContactPolicy::default());
    }

    #[rstest]
    fn defaults_match_reference_contact() {
        let policy = ContactPolicy::default();

        assert_eq!((policy.first_name.min(), policy.first_name.max()), (1, 10));
        assert_eq!((policy.middle_name.min(), policy.middle_name.max()), (1, 10));
        assert_eq!((policy.last_name.min(), policy.last_name.max()), (1, 15));
        assert_eq!(policy.email_format, EmailFormat::Address);
    }

    #[rstest]
    fn overrides_are_applied() {
        let policy = ContactPolicy::from_lookup(lookup_from(&[
            ("CONTACT_FIRST_NAME_MIN", "2"),
            ("CONTACT_FIRST_NAME_MAX", " 20 "),
        ]))
        .unwrap();

        assert_eq!((policy.first_name.min(), policy.first_name.max()), (2, 20));
        assert_eq!(policy.last_name, ContactPolicy::default().last_name);
    }

    #[rstest]
    fn unparsable_value_names_the_key() {
        let error = ContactPolicy::from_lookup(lookup_from(&[("CONTACT_LAST_NAME_MAX", "many")])).unwrap_err();

        assert!(matches!(error, ConfigError::InvalidValue { ref key, .. } if key == "CONTACT_LAST_NAME_MAX"));
    }

    #[rstest]
    #[case("0", "10")]
    #[case("11", "10")]
    fn invalid_bounds_are_rejected(#[case] min: &str, #[case] max: &str) {
        let error = ContactPolicy::from_lookup(lookup_from(&[
            ("CONTACT_MIDDLE_NAME_MIN", min),
            ("CONTACT_MIDDLE_NAME_MAX", max),
        ]))
        .unwrap_err();

        assert!(matches!(error, ConfigError::InvalidBounds { field: "MiddleName", .. }));
    }

    #[rstest]
    #[case("address", EmailFormat::Address)]
    #[case("NON-EMPTY", EmailFormat::NonEmpty)]
    #[case("non_empty", EmailFormat::NonEmpty)]
    fn email_format_parses(#[case] raw: &str, #[case] expected: EmailFormat) {
        assert_eq!(raw.parse::<EmailFormat>(), Ok(expected));
    }

    #[rstest]
    fn unknown_email_format_is_rejected() {
        let error = ContactPolicy::from_lookup(lookup_from(&[("CONTACT_EMAIL_FORMAT", "mx-record")])).unwrap_err();
        assert!(matches!(error, ConfigError::InvalidValue { .. }));
    }

    #[rstest]
    fn email_format_accepts() {
        assert!(EmailFormat::NonEmpty.accepts("not-an-address"));
        assert!(!EmailFormat::Address.accepts("not-an-address"));
    }
}
