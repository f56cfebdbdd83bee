//! Verification of an assembled contact.
//!
//! ```text
//! Option<Contact> --(absent → InitializationFailed)--> Result<Contact, _>
//!                 --(verify email)--> Result<Contact with Verified email, _>
//! ```

use crate::compound_types::Contact;
use crate::config::ContactPolicy;
use crate::optics::Lens;
use crate::pipe;
use crate::typeclass::Monad;
use crate::workflow::{ContactError, EmailVerifier, UnvalidatedContact, create_contact, verify_email};

/// Verifies the email of `contact`, returning an updated copy.
///
/// `contact` itself is left as it was; the result equals it except for the
/// email, which is `Verified`.
///
/// # Errors
///
/// Lifecycle errors from [`verify_email`], unchanged.
pub fn verify_contact<V>(verifier: &V, contact: &Contact) -> Result<Contact, ContactError>
where
    V: EmailVerifier + ?Sized,
{
    let verified = verify_email(verifier, contact.email())?;
    Ok(Contact::email_lens().set(contact.clone(), verified.into()))
}

/// Turns the outcome of contact assembly into a verified contact or an error.
///
/// # Errors
///
/// - [`ContactError::InitializationFailed`] with the raw strings of
///   `unvalidated` when `contact` is absent
/// - otherwise any error of [`verify_contact`]
///
/// # Examples
///
/// ```
/// use contact_lifecycle::config::ContactPolicy;
/// use contact_lifecycle::workflow::{create_contact, verify_entity, PredicateVerifier, UnvalidatedContact};
///
/// let input = UnvalidatedContact::new("Richard", "Chuo", "test@example.com").with_middle_name("Andrew");
/// let contact = create_contact(&ContactPolicy::default(), &input);
///
/// let verified = verify_entity(&PredicateVerifier::stub(), &input, contact).unwrap();
/// assert!(verified.email().is_verified());
/// ```
pub fn verify_entity<V>(
    verifier: &V,
    unvalidated: &UnvalidatedContact,
    contact: Option<Contact>,
) -> Result<Contact, ContactError>
where
    V: EmailVerifier + ?Sized,
{
    pipe!(
        contact,
        (|contact: Option<Contact>| contact.ok_or_else(|| unvalidated.initialization_failed())),
        (|contact: Result<Contact, ContactError>| contact.flat_map(|contact| verify_contact(verifier, &contact)))
    )
    .inspect_err(|error| tracing::warn!(%error, "contact verification failed"))
}

/// Validates, assembles and verifies a contact in one step.
///
/// # Errors
///
/// See [`verify_entity`].
#[tracing::instrument(level = "debug", skip_all)]
pub fn create_and_verify_contact<V>(
    policy: &ContactPolicy,
    verifier: &V,
    unvalidated: &UnvalidatedContact,
) -> Result<Contact, ContactError>
where
    V: EmailVerifier + ?Sized,
{
    let contact = create_contact(policy, unvalidated);
    verify_entity(verifier, unvalidated, contact)
}
