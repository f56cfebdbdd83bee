//! Lens optics for focusing on struct fields.
//!
//! A Lens gives get/set access to one field of a larger value. Setting
//! consumes the source and returns a new one, so a caller that cloned the
//! source first keeps its own copy untouched. Contact verification relies on
//! this to replace the email of a copied contact.
//!
//! # Laws
//!
//! 1. **GetPut**: `lens.set(source, lens.get(&source).clone()) == source`
//! 2. **PutGet**: `lens.get(&lens.set(source, value)) == &value`
//! 3. **PutPut**: `lens.set(lens.set(source, v1), v2) == lens.set(source, v2)`
//!
//! # Examples
//!
//! ```
//! use contact_lifecycle::optics::{FunctionLens, Lens};
//!
//! #[derive(Clone, PartialEq, Debug)]
//! struct Mailbox { owner: String, unread: u32 }
//!
//! let unread_lens = FunctionLens::new(
//!     |mailbox: &Mailbox| &mailbox.unread,
//!     |mailbox: Mailbox, unread: u32| Mailbox { unread, ..mailbox },
//! );
//!
//! let mailbox = Mailbox { owner: "richard".to_string(), unread: 3 };
//! let read = unread_lens.set(mailbox.clone(), 0);
//!
//! assert_eq!(*unread_lens.get(&read), 0);
//! assert_eq!(mailbox.unread, 3);
//! ```

use std::marker::PhantomData;

/// A Lens focuses on a single field within a larger structure.
///
/// - `S`: The source type (the whole structure)
/// - `A`: The target type (the focused field)
pub trait Lens<S, A> {
    /// Gets a reference to the focused field.
    fn get<'a>(&self, source: &'a S) -> &'a A;

    /// Returns a new source with the focused field replaced by `value`.
    fn set(&self, source: S, value: A) -> S;

    /// Returns a new source with the focused field transformed by `function`.
    fn modify<F>(&self, source: S, function: F) -> S
    where
        F: FnOnce(A) -> A,
        A: Clone,
    {
        let current = self.get(&source).clone();
        self.set(source, function(current))
    }
}

/// A Lens built from a getter and a setter function.
pub struct FunctionLens<S, A, G, St>
where
    G: Fn(&S) -> &A,
    St: Fn(S, A) -> S,
{
    getter: G,
    setter: St,
    _marker: PhantomData<fn(S) -> A>,
}

impl<S, A, G, St> FunctionLens<S, A, G, St>
where
    G: Fn(&S) -> &A,
    St: Fn(S, A) -> S,
{
    /// Creates a new `FunctionLens` from a getter and setter.
    #[must_use]
    pub const fn new(getter: G, setter: St) -> Self {
        Self {
            getter,
            setter,
            _marker: PhantomData,
        }
    }
}

impl<S, A, G, St> Lens<S, A> for FunctionLens<S, A, G, St>
where
    G: Fn(&S) -> &A,
    St: Fn(S, A) -> S,
{
    fn get<'a>(&self, source: &'a S) -> &'a A {
        (self.getter)(source)
    }

    fn set(&self, source: S, value: A) -> S {
        (self.setter)(source, value)
    }
}

impl<S, A, G, St> Clone for FunctionLens<S, A, G, St>
where
    G: Fn(&S) -> &A + Clone,
    St: Fn(S, A) -> S + Clone,
{
    fn clone(&self) -> Self {
        Self {
            getter: self.getter.clone(),
            setter: self.setter.clone(),
            _marker: PhantomData,
        }
    }
}

impl<S, A, G, St> std::fmt::Debug for FunctionLens<S, A, G, St>
where
    G: Fn(&S) -> &A,
    St: Fn(S, A) -> S,
{
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        formatter.debug_struct("FunctionLens").finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[derive(Clone, Debug, PartialEq)]
    struct Mailbox {
        owner: String,
        unread: u32,
    }

    fn unread_lens() -> impl Lens<Mailbox, u32> + Clone {
        FunctionLens::new(
            |mailbox: &Mailbox| &mailbox.unread,
            |mailbox: Mailbox, unread: u32| Mailbox { unread, ..mailbox },
        )
    }

    fn mailbox() -> Mailbox {
        Mailbox {
            owner: "richard".to_string(),
            unread: 3,
        }
    }

    #[rstest]
    fn get_returns_focused_field() {
        assert_eq!(*unread_lens().get(&mailbox()), 3);
    }

    #[rstest]
    fn set_leaves_other_fields() {
        let updated = unread_lens().set(mailbox(), 9);

        assert_eq!(updated.unread, 9);
        assert_eq!(updated.owner, "richard");
    }

    #[rstest]
    fn modify_applies_function() {
        let updated = unread_lens().modify(mailbox(), |unread| unread + 1);
        assert_eq!(updated.unread, 4);
    }

    #[rstest]
    fn get_put_law() {
        let lens = unread_lens();
        let source = mailbox();
        let value = *lens.get(&source);

        assert_eq!(lens.set(source.clone(), value), source);
    }
}
