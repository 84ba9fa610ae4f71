//! unio: union-type algebra over host reflection metadata.
//!
//! # Example
//!
//! ```
//! use unio_algebra::{FlattenMode, SearchMode, TypeExpr, flatten, resolve};
//!
//! // (int | int | str) | bool, as a host reflection API would report it.
//! let expr = TypeExpr::union(vec![
//!     TypeExpr::union(vec![
//!         TypeExpr::atom("int"),
//!         TypeExpr::atom("int"),
//!         TypeExpr::atom("str"),
//!     ]),
//!     TypeExpr::atom("bool"),
//! ]);
//!
//! let leaves = flatten(&expr, FlattenMode::Deep)?;
//! assert_eq!(leaves.len(), 4);
//!
//! // `int` occurs twice, making it the canonical pick under Count.
//! let canonical = resolve(&expr, &[], SearchMode::Count)?;
//! assert_eq!(canonical, TypeExpr::atom("int"));
//! # Ok::<(), unio_algebra::Error>(())
//! ```

#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

pub mod algebra;


pub use algebra::{FlattenMode, SearchMode, StripSet, flatten, resolve, strip, strip_optional};
pub use unio_core::{
    Builtin, MetaError, ParameterDefault, RETURN_KEY, RawSignature, RawType, Signature, TypeExpr,
    is_builtin_name, parse_signature, parse_type,
};

/// Errors from the union algebra.
///
/// Every error is raised at the point of detection and propagates unmodified;
/// there are no retries and no partial results. All of these are programming
/// or data errors, not transient conditions.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum Error {
    /// Operation required a union (or an already-resolved type) and did not
    /// get one.
    #[error("invalid type `{0}`")]
    InvalidType(TypeExpr),

    /// The strip removal set referenced the alternatives of a non-union.
    #[error("invalid strip set `{0}`: not a union")]
    InvalidStripSet(TypeExpr),

    /// Stripping removed every alternative.
    #[error("stripping `{0}` left no alternatives")]
    EmptyStrip(TypeExpr),

    /// Resolution traversed every reachable alternative without finding a
    /// builtin or extension type.
    #[error("no builtin type found in `{0}`")]
    NoBuiltinFound(TypeExpr),

    /// A search-mode string outside the closed set.
    #[error("invalid search mode `{0}`")]
    InvalidSearchMode(String),
}

/// Result type for algebra operations.
pub type Result<T> = std::result::Result<T, Error>;
