//! Monad type class - sequencing dependent computations.
//!
//! Where [`Applicative`](super::Applicative) combines independent values,
//! `flat_map` feeds the result of one step into the next. Contact
//! verification is such a step: it only runs once a contact exists.

use super::applicative::Applicative;

/// A type class for contexts that support dependent sequencing.
///
/// # Laws
///
/// ```text
/// pure(a).flat_map(f) == f(a)                                  // left identity
/// m.flat_map(pure) == m                                        // right identity
/// m.flat_map(f).flat_map(g) == m.flat_map(|x| f(x).flat_map(g)) // associativity
/// ```
pub trait Monad: Applicative {
    /// Feeds the inner value into a function returning a new context.
    ///
    /// ```rust
    /// use contact_lifecycle::typeclass::Monad;
    ///
    /// let parsed: Result<u32, String> = Ok("10".to_string())
    ///     .flat_map(|raw| raw.parse::<u32>().map_err(|error| error.to_string()));
    /// assert_eq!(parsed, Ok(10));
    /// ```
    fn flat_map<B, F>(self, function: F) -> Self::WithType<B>
    where
        F: FnOnce(Self::Inner) -> Self::WithType<B>;
}

impl<A> Monad for Option<A> {
    #[inline]
    fn flat_map<B, F>(self, function: F) -> Option<B>
    where
        F: FnOnce(A) -> Option<B>,
    {
        self.and_then(function)
    }
}

impl<T, E: Clone> Monad for Result<T, E> {
    #[inline]
    fn flat_map<B, F>(self, function: F) -> Result<B, E>
    where
        F: FnOnce(T) -> Result<B, E>,
    {
        self.and_then(function)
    }
}
