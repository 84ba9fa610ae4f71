//! Resolution of a union down to a builtin (or extension-registered) type.

use std::str::FromStr;

use indexmap::IndexMap;
use unio_core::TypeExpr;

use crate::algebra::{FlattenMode, flatten};
use crate::{Error, Result};

/// Strategy for picking the canonical type out of a union.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum SearchMode {
    /// Repeatedly descend into the first alternative until a qualifying type
    /// or a dead end is reached. Cheap, deterministic, and narrow: sibling
    /// alternatives are never examined.
    DepthFirst,
    /// Tally every leaf occurrence across the whole tree and pick the most
    /// frequent qualifying type; ties keep first-encounter order.
    Count,
}

impl FromStr for SearchMode {
    type Err = Error;

    /// Host-facing mode strings: `"depth-first"` and `"count"`.
    fn from_str(s: &str) -> Result<Self> {
        match s {
            "depth-first" => Ok(SearchMode::DepthFirst),
            "count" => Ok(SearchMode::Count),
            other => Err(Error::InvalidSearchMode(other.to_string())),
        }
    }
}

/// Reduce a type expression to a single canonical type.
///
/// A type qualifies when it is builtin or a member of `extension`
/// (whole-expression equality, so a union can be registered too).
/// Already-qualifying inputs come back unchanged; anything else must be a
/// union or the call fails with [`Error::InvalidType`].
///
/// A singleton union returns its sole alternative directly, without
/// re-validating it against the registry — which is why the result is a
/// [`TypeExpr`] rather than always an atom.
pub fn resolve(expr: &TypeExpr, extension: &[TypeExpr], mode: SearchMode) -> Result<TypeExpr> {
    if qualifies(expr, extension) {
        return Ok(expr.clone());
    }
    let TypeExpr::Union(alternatives) = expr else {
        return Err(Error::InvalidType(expr.clone()));
    };
    if let [sole] = alternatives.as_slice() {
        return Ok(sole.clone());
    }

    match mode {
        SearchMode::DepthFirst => first_path(&alternatives[0], extension)
            .ok_or_else(|| Error::NoBuiltinFound(expr.clone())),
        SearchMode::Count => by_count(expr, extension),
    }
}

/// Whether `expr` already counts as resolved: builtin, or in the extension
/// set.
fn qualifies(expr: &TypeExpr, extension: &[TypeExpr]) -> bool {
    expr.is_builtin() || extension.contains(expr)
}

/// Single-path descent. Only the first alternative of each level is ever
/// examined; a singleton union short-circuits to its sole alternative,
/// unvalidated.
fn first_path(expr: &TypeExpr, extension: &[TypeExpr]) -> Option<TypeExpr> {
    if qualifies(expr, extension) {
        return Some(expr.clone());
    }
    match expr {
        TypeExpr::Union(alternatives) => {
            if let [sole] = alternatives.as_slice() {
                return Some(sole.clone());
            }
            first_path(&alternatives[0], extension)
        }
        TypeExpr::Atom(_) => None,
    }
}

/// Frequency tally over the deep-flattened leaves.
fn by_count(expr: &TypeExpr, extension: &[TypeExpr]) -> Result<TypeExpr> {
    let leaves = flatten(expr, FlattenMode::Deep)?;

    let mut counts: IndexMap<&TypeExpr, usize> = IndexMap::new();
    for leaf in &leaves {
        *counts.entry(leaf).or_insert(0) += 1;
    }

    // Stable sort: ties keep first-encounter order.
    let mut tally: Vec<(&TypeExpr, usize)> = counts.into_iter().collect();
    tally.sort_by(|(_, a), (_, b)| b.cmp(a));

    for (leaf, _) in tally {
        if qualifies(leaf, extension) {
            return Ok(leaf.clone());
        }
    }
    Err(Error::NoBuiltinFound(expr.clone()))
}
