//! Applicative type class - combining independent computations.
//!
//! `Applicative` extends [`Functor`] with the ability to lift a plain value
//! into a context (`pure`) and to combine several contexts that do not depend
//! on one another (`map2` .. `map4`, `apply`). Because no input's outcome
//! decides how another is evaluated, the combined result is present only when
//! every input is present. This is the shape of contact assembly: each field
//! is validated on its own and the contact exists only if all of them did.
//!
//! # Laws
//!
//! ```text
//! pure(|x| x).apply(v) == v                      // identity
//! pure(f).apply(pure(x)) == pure(f(x))           // homomorphism
//! u.apply(pure(y)) == pure(|f| f(y)).apply(u)    // interchange
//! ```
//!
//! # Examples
//!
//! ```rust
//! use contact_lifecycle::typeclass::Applicative;
//!
//! let first = Some("Richard");
//! let last = Some("Chuo");
//! assert_eq!(first.map2(last, |f, l| format!("{f} {l}")), Some("Richard Chuo".to_string()));
//!
//! let missing: Option<&str> = None;
//! assert_eq!(first.map2(missing, |f, l| format!("{f} {l}")), None);
//! ```

use super::functor::Functor;

/// A type class for contexts that can be built from plain values and
/// combined independently.
pub trait Applicative: Functor {
    /// Lifts a pure value into the applicative context.
    ///
    /// ```rust
    /// use contact_lifecycle::typeclass::Applicative;
    ///
    /// let lifted: Option<&str> = <Option<()>>::pure("Andrew");
    /// assert_eq!(lifted, Some("Andrew"));
    /// ```
    fn pure<B>(value: B) -> Self::WithType<B>;

    /// Combines two applicative values using a binary function.
    fn map2<B, C, F>(self, other: Self::WithType<B>, function: F) -> Self::WithType<C>
    where
        F: FnOnce(Self::Inner, B) -> C;

    /// Combines three applicative values using a ternary function.
    fn map3<B, C, D, F>(
        self,
        second: Self::WithType<B>,
        third: Self::WithType<C>,
        function: F,
    ) -> Self::WithType<D>
    where
        F: FnOnce(Self::Inner, B, C) -> D;

    /// Combines four applicative values using a quaternary function.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use contact_lifecycle::typeclass::Applicative;
    ///
    /// let joined = Some("Richard").map4(Some("Andrew"), Some("Chuo"), Some("test@example.com"), |f, m, l, e| {
    ///     format!("{f} {m} {l} <{e}>")
    /// });
    /// assert_eq!(joined.as_deref(), Some("Richard Andrew Chuo <test@example.com>"));
    ///
    /// let absent = Some("Richard").map4(Some("Andrew"), None::<&str>, Some("e"), |_, _, _, _| ());
    /// assert_eq!(absent, None);
    /// ```
    fn map4<B, C, D, R, F>(
        self,
        second: Self::WithType<B>,
        third: Self::WithType<C>,
        fourth: Self::WithType<D>,
        function: F,
    ) -> Self::WithType<R>
    where
        F: FnOnce(Self::Inner, B, C, D) -> R;

    /// Combines two applicative values into a tuple.
    #[inline]
    fn product<B>(self, other: Self::WithType<B>) -> Self::WithType<(Self::Inner, B)>
    where
        Self: Sized,
    {
        self.map2(other, |a, b| (a, b))
    }

    /// Applies a function inside the context to a value inside the context.
    ///
    /// Chaining `apply` over a curried constructor is the point-free spelling
    /// of `map4`:
    ///
    /// ```rust
    /// use contact_lifecycle::typeclass::Applicative;
    ///
    /// let greet = |first: &'static str| move |last: &'static str| format!("{first} {last}");
    /// let assembled = Some(greet).apply(Some("Richard")).apply(Some("Chuo"));
    /// assert_eq!(assembled, Some("Richard Chuo".to_string()));
    /// ```
    fn apply<B, Output>(self, other: Self::WithType<B>) -> Self::WithType<Output>
    where
        Self: Sized,
        Self::Inner: FnOnce(B) -> Output;
}

impl<A> Applicative for Option<A> {
    #[inline]
    fn pure<B>(value: B) -> Option<B> {
        Some(value)
    }

    #[inline]
    fn map2<B, C, F>(self, other: Option<B>, function: F) -> Option<C>
    where
        F: FnOnce(A, B) -> C,
    {
        match (self, other) {
            (Some(a), Some(b)) => Some(function(a, b)),
            _ => None,
        }
    }

    #[inline]
    fn map3<B, C, D, F>(self, second: Option<B>, third: Option<C>, function: F) -> Option<D>
    where
        F: FnOnce(A, B, C) -> D,
    {
        match (self, second, third) {
            (Some(a), Some(b), Some(c)) => Some(function(a, b, c)),
            _ => None,
        }
    }

    #[inline]
    fn map4<B, C, D, R, F>(
        self,
        second: Option<B>,
        third: Option<C>,
        fourth: Option<D>,
        function: F,
    ) -> Option<R>
    where
        F: FnOnce(A, B, C, D) -> R,
    {
        match (self, second, third, fourth) {
            (Some(a), Some(b), Some(c), Some(d)) => Some(function(a, b, c, d)),
            _ => None,
        }
    }

    #[inline]
    fn apply<B, Output>(self, other: Option<B>) -> Option<Output>
    where
        A: FnOnce(B) -> Output,
    {
        match (self, other) {
            (Some(function), Some(b)) => Some(function(b)),
            _ => None,
        }
    }
}

// Result short-circuits on the leftmost error.
impl<T, E: Clone> Applicative for Result<T, E> {
    #[inline]
    fn pure<B>(value: B) -> Result<B, E> {
        Ok(value)
    }

    #[inline]
    fn map2<B, C, F>(self, other: Result<B, E>, function: F) -> Result<C, E>
    where
        F: FnOnce(T, B) -> C,
    {
        Ok(function(self?, other?))
    }

    #[inline]
    fn map3<B, C, D, F>(self, second: Result<B, E>, third: Result<C, E>, function: F) -> Result<D, E>
    where
        F: FnOnce(T, B, C) -> D,
    {
        Ok(function(self?, second?, third?))
    }

    #[inline]
    fn map4<B, C, D, R, F>(
        self,
        second: Result<B, E>,
        third: Result<C, E>,
        fourth: Result<D, E>,
        function: F,
    ) -> Result<R, E>
    where
        F: FnOnce(T, B, C, D) -> R,
    {
        Ok(function(self?, second?, third?, fourth?))
    }

    #[inline]
    fn apply<B, Output>(self, other: Result<B, E>) -> Result<Output, E>
    where
        T: FnOnce(B) -> Output,
    {
        let function = self?;
        Ok(function(other?))
    }
}
