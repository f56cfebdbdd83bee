//! Lens law tests for derived lenses.

use contact_lifecycle::compound_types::Contact;
use contact_lifecycle::optics::Lens;
use contact_lifecycle::simple_types::predicate::{in_between, non_empty};
use contact_lifecycle::simple_types::{Email, FirstName, LastName, MiddleName, make_field};
use contact_lifecycle_derive::Lenses;
use proptest::prelude::*;
use rstest::{fixture, rstest};

#[derive(Clone, Debug, PartialEq, Lenses)]
struct Mailbox {
    owner: String,
    unread: u32,
}

fn contact(first: &str, last: &str) -> Contact {
    Contact::assemble_without_middle_name(
        make_field(in_between(1, 10), first),
        make_field(in_between(1, 15), last),
        make_field(non_empty, "test@example.com"),
    )
    .unwrap()
}

#[fixture]
fn richard() -> Contact {
    contact("Richard", "Chuo")
}

#[rstest]
fn first_name_lens_get_put(richard: Contact) {
    let lens = Contact::first_name_lens();
    let current = lens.get(&richard).clone();

    assert_eq!(lens.set(richard.clone(), current), richard);
}

#[rstest]
fn first_name_lens_put_get(richard: Contact) {
    let lens = Contact::first_name_lens();
    let replacement: FirstName = make_field(non_empty, "Andrew").unwrap();

    let updated = lens.set(richard, replacement.clone());

    assert_eq!(lens.get(&updated), &replacement);
}

#[rstest]
fn last_name_lens_put_put(richard: Contact) {
    let lens = Contact::last_name_lens();
    let first: LastName = make_field(non_empty, "Smith").unwrap();
    let second: LastName = make_field(non_empty, "Jones").unwrap();

    assert_eq!(
        lens.set(lens.set(richard.clone(), first), second.clone()),
        lens.set(richard, second)
    );
}

#[rstest]
fn middle_name_lens_can_add_a_middle_name(richard: Contact) {
    let middle: Option<MiddleName> = make_field(non_empty, "Andrew");

    let updated = Contact::middle_name_lens().set(richard, middle.clone());

    assert_eq!(updated.middle_name(), middle.as_ref());
}

#[rstest]
fn email_lens_modify_leaves_other_fields(richard: Contact) {
    let replaced = Contact::email_lens().modify(richard.clone(), |_| {
        make_field::<Email, _>(non_empty, "other@example.com").unwrap()
    });

    assert_eq!(replaced.email().address(), "other@example.com");
    assert_eq!(replaced.first_name(), richard.first_name());
    assert_eq!(replaced.last_name(), richard.last_name());
}

#[rstest]
fn derive_works_on_any_named_struct() {
    let mailbox = Mailbox {
        owner: "richard".to_string(),
        unread: 3,
    };

    let read = Mailbox::unread_lens().set(mailbox.clone(), 0);

    assert_eq!(*Mailbox::unread_lens().get(&read), 0);
    assert_eq!(Mailbox::owner_lens().get(&read), "richard");
    assert_eq!(mailbox.unread, 3);
}

proptest! {
    #[test]
    fn prop_mailbox_lens_laws(owner in "[a-z]{1,10}", unread in any::<u32>(), first in any::<u32>(), second in any::<u32>()) {
        let lens = Mailbox::unread_lens();
        let mailbox = Mailbox { owner, unread };

        prop_assert_eq!(lens.set(mailbox.clone(), *lens.get(&mailbox)), mailbox.clone());
        prop_assert_eq!(*lens.get(&lens.set(mailbox.clone(), first)), first);
        prop_assert_eq!(lens.set(lens.set(mailbox.clone(), first), second), lens.set(mailbox, second));
    }

    #[test]
    fn prop_first_name_lens_get_put(first in "[A-Z][a-z]{0,9}", last in "[A-Z][a-z]{0,14}") {
        let contact = contact(&first, &last);
        let lens = Contact::first_name_lens();

        prop_assert_eq!(lens.set(contact.clone(), lens.get(&contact).clone()), contact);
    }
}
