//! Union-type algebra: stripping, flattening, and resolution.
//!
//! Every operation is a pure function of its inputs; nothing is retained
//! between calls. Operations that require a union fail with
//! [`Error::InvalidType`](crate::Error::InvalidType) when handed anything
//! else.

mod flatten;
mod resolve;
mod strip;

#[cfg(test)]
mod strip_tests;

pub use flatten::{FlattenMode, flatten};
pub use resolve::{SearchMode, resolve};
pub use strip::{StripSet, strip, strip_optional};
