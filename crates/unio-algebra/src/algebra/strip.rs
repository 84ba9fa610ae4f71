//! Shallow union stripping.

use unio_core::{Builtin, TypeExpr};

use crate::{Error, Result};

/// The removal set accepted by [`strip`].
///
/// Three shapes: one expression, an explicit list, or another union whose
/// direct alternatives form the removal set.
#[derive(Clone, Debug, PartialEq)]
pub enum StripSet {
    /// Remove a single alternative.
    One(TypeExpr),
    /// Remove each listed alternative.
    Many(Vec<TypeExpr>),
    /// Remove every direct alternative of another union.
    Union(TypeExpr),
}

impl StripSet {
    /// The expressions to remove.
    ///
    /// Fails with [`Error::InvalidStripSet`] when `Union` holds a non-union.
    fn members(&self) -> Result<&[TypeExpr]> {
        match self {
            StripSet::One(expr) => Ok(std::slice::from_ref(expr)),
            StripSet::Many(exprs) => Ok(exprs),
            StripSet::Union(TypeExpr::Union(alternatives)) => Ok(alternatives),
            StripSet::Union(other) => Err(Error::InvalidStripSet(other.clone())),
        }
    }
}

impl From<TypeExpr> for StripSet {
    /// Unions contribute their alternatives; anything else is removed as-is.
    fn from(expr: TypeExpr) -> Self {
        if expr.is_union() {
            StripSet::Union(expr)
        } else {
            StripSet::One(expr)
        }
    }
}

impl From<Vec<TypeExpr>> for StripSet {
    fn from(exprs: Vec<TypeExpr>) -> Self {
        StripSet::Many(exprs)
    }
}

/// Remove alternatives from a union's direct alternative list.
///
/// Filtering is shallow: alternatives are compared whole, by equality, and
/// nested unions are never descended into. Surviving alternatives keep their
/// original order. Exactly one survivor is returned collapsed; zero survivors
/// fail with [`Error::EmptyStrip`].
pub fn strip(expr: &TypeExpr, set: impl Into<StripSet>) -> Result<TypeExpr> {
    let TypeExpr::Union(alternatives) = expr else {
        return Err(Error::InvalidType(expr.clone()));
    };
    let set = set.into();
    let removed = set.members()?;

    let mut survivors: Vec<TypeExpr> = alternatives
        .iter()
        .filter(|alt| !removed.contains(alt))
        .cloned()
        .collect();

    match survivors.len() {
        0 => Err(Error::EmptyStrip(expr.clone())),
        1 => Ok(survivors.remove(0)),
        _ => Ok(TypeExpr::Union(survivors)),
    }
}

/// Strip the `NoneType` alternative from an optional union.
///
/// `int | NoneType` collapses to `int`; a union without a direct `NoneType`
/// alternative comes back unchanged.
pub fn strip_optional(expr: &TypeExpr) -> Result<TypeExpr> {
    strip(expr, StripSet::One(Builtin::NoneType.into()))
}
