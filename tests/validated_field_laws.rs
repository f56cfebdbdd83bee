//! Property-based tests for predicate-gated field construction.
//!
//! - A present field always unwraps to the raw input
//! - A length-bounded field is present exactly when the length is in range
//! - Emails always start unverified

use contact_lifecycle::simple_types::predicate::{in_between, non_empty, should_be_email};
use contact_lifecycle::simple_types::{Email, FirstName, LastName, MiddleName, ValidatedField, make_field};
use proptest::prelude::*;

// =============================================================================
// Strategy definitions
// =============================================================================

fn bounded_text_strategy(max: usize) -> impl Strategy<Value = String> {
    proptest::string::string_regex(&format!("[a-zA-Z' -]{{1,{max}}}")).unwrap()
}

fn overlong_text_strategy(max: usize) -> impl Strategy<Value = String> {
    proptest::string::string_regex(&format!("[a-zA-Z]{{{},{}}}", max + 1, max + 20)).unwrap()
}

fn address_strategy() -> impl Strategy<Value = String> {
    (
        proptest::string::string_regex("[a-zA-Z0-9._%+-]{1,20}").unwrap(),
        proptest::string::string_regex("[a-zA-Z0-9-]{1,20}").unwrap(),
        proptest::string::string_regex("[a-z]{2,5}").unwrap(),
    )
        .prop_map(|(local, domain, tld)| format!("{local}@{domain}.{tld}"))
}

// =============================================================================
// Length-bounded names
// =============================================================================

proptest! {
    #[test]
    fn prop_in_range_first_name_is_present_and_unwraps(raw in bounded_text_strategy(10)) {
        let field: Option<FirstName> = make_field(in_between(1, 10), &raw);
        prop_assert_eq!(field.as_ref().map(ValidatedField::value), Some(raw.as_str()));
    }

    #[test]
    fn prop_overlong_first_name_is_absent(raw in overlong_text_strategy(10)) {
        let field: Option<FirstName> = make_field(in_between(1, 10), &raw);
        prop_assert!(field.is_none());
    }

    #[test]
    fn prop_presence_matches_length(raw in "\\PC{0,30}", max in 1usize..20) {
        let field: Option<LastName> = make_field(in_between(1, max), &raw);
        let length = raw.chars().count();
        prop_assert_eq!(field.is_some(), (1..=max).contains(&length));
    }

    #[test]
    fn prop_middle_name_construction_is_deterministic(raw in "\\PC{0,15}") {
        let first: Option<MiddleName> = make_field(in_between(1, 10), &raw);
        let second: Option<MiddleName> = make_field(in_between(1, 10), &raw);
        prop_assert_eq!(first, second);
    }
}

// =============================================================================
// Email
// =============================================================================

proptest! {
    #[test]
    fn prop_valid_address_starts_unverified(raw in address_strategy()) {
        let email: Option<Email> = make_field(should_be_email, &raw);

        prop_assert!(matches!(email, Some(Email::Unverified(_))));
        prop_assert_eq!(email.map(|email| email.address().to_owned()), Some(raw));
    }

    #[test]
    fn prop_address_without_at_sign_is_absent(raw in "[a-zA-Z0-9.]{1,30}") {
        let email: Option<Email> = make_field(should_be_email, &raw);
        prop_assert!(email.is_none());
    }

    #[test]
    fn prop_non_empty_email_accepts_any_text(raw in "\\PC{1,30}") {
        let email: Option<Email> = make_field(non_empty, &raw);
        prop_assert!(email.is_some());
    }
}

#[test]
fn empty_input_is_absent_for_every_field() {
    assert!(make_field::<FirstName, _>(in_between(1, 10), "").is_none());
    assert!(make_field::<MiddleName, _>(in_between(1, 10), "").is_none());
    assert!(make_field::<LastName, _>(in_between(1, 15), "").is_none());
    assert!(make_field::<Email, _>(non_empty, "").is_none());
}
