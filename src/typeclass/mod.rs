//! Type class traits used to assemble and sequence contact computations.
//!
//! - [`TypeConstructor`]: Higher-kinded type emulation through GATs
//! - [`Functor`]: Mapping over a present value
//! - [`Applicative`]: Combining independent present-or-absent values
//! - [`Monad`]: Sequencing a step that depends on a previous result
//!
//! Implementations are provided for `Option<A>` (present or absent) and
//! `Result<T, E>` (success or error).

mod applicative;
mod functor;
mod higher;
mod monad;

pub use applicative::Applicative;
pub use functor::Functor;
pub use higher::TypeConstructor;
pub use monad::Monad;
