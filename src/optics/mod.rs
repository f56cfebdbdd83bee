//! Optics for immutable record updates.
//!
//! - [`Lens`]: Focus on a single field of a record
//! - [`FunctionLens`]: A lens built from a getter and a setter
//!
//! `#[derive(Lenses)]` from `contact-lifecycle-derive` generates one
//! `FunctionLens` per named field.

mod lens;

pub use lens::{FunctionLens, Lens};
