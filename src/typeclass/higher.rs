//! Higher-Kinded Type emulation through Generic Associated Types.
//!
//! Rust cannot abstract over `Option<_>` or `Result<_, E>` as type
//! constructors directly. [`TypeConstructor`] uses a GAT to describe
//! "the same container holding a different type", which is what lets
//! [`Functor`](super::Functor) and [`Applicative`](super::Applicative)
//! turn an `Option<FirstName>` into an `Option<Contact>`.

/// A trait representing a type constructor.
///
/// # Laws
///
/// `<F as TypeConstructor>::WithType<F::Inner>` is `F`.
///
/// # Example
///
/// ```rust
/// use contact_lifecycle::typeclass::TypeConstructor;
///
/// type Assembled = <Option<String> as TypeConstructor>::WithType<u8>;
///
/// let absent: Assembled = None;
/// assert_eq!(absent, None::<u8>);
/// ```
pub trait TypeConstructor {
    /// The inner type that this type constructor is applied to.
    type Inner;

    /// The same type constructor applied to a different type `B`.
    type WithType<B>: TypeConstructor<Inner = B>;
}

impl<A> TypeConstructor for Option<A> {
    type Inner = A;
    type WithType<B> = Option<B>;
}

impl<T, E> TypeConstructor for Result<T, E> {
    type Inner = T;
    type WithType<B> = Result<B, E>;
}
