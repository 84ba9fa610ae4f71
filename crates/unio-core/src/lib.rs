#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

//! Core data structures for unio type-expression metadata.
//!
//! Two layers:
//! - **Raw layer**: 1:1 serde mapping of host reflection dumps (`RawType`, `RawSignature`)
//! - **Analysis layer**: validated value types the algebra operates on (`TypeExpr`, `Signature`)
//!
//! The raw layer accepts whatever a host's callable-introspection API yields;
//! the conversion into the analysis layer is where shape invariants (such as
//! "a union is never empty") are enforced.

mod expr;
mod meta;
mod registry;
mod signature;

#[cfg(test)]
mod expr_tests;

pub use expr::TypeExpr;
pub use meta::{MetaError, RawSignature, RawType, parse_signature, parse_type};
pub use registry::{Builtin, is_builtin_name};
pub use signature::{ParameterDefault, RETURN_KEY, Signature};
