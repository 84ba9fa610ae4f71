//! Union flattening.

use indexmap::IndexSet;
use unio_core::TypeExpr;

use crate::{Error, Result};

/// How [`flatten`] expands a union tree.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum FlattenMode {
    /// Direct alternatives only; nested unions stay opaque elements.
    Shallow,
    /// Depth-first pre-order expansion keeping every leaf occurrence.
    Deep,
    /// Depth-first expansion with duplicates removed, in first-encounter
    /// order.
    DeepUnique,
}

/// Flatten a union into a sequence of alternatives.
///
/// `Shallow` returns the direct alternatives as-is; callers asking for it
/// accept that nested unions are not expanded. `Deep` splices nested unions
/// in place and preserves repeats at every level — the count-based
/// resolution strategy depends on them. `DeepUnique` keeps the first
/// occurrence of each leaf and is idempotent.
pub fn flatten(expr: &TypeExpr, mode: FlattenMode) -> Result<Vec<TypeExpr>> {
    let TypeExpr::Union(alternatives) = expr else {
        return Err(Error::InvalidType(expr.clone()));
    };

    match mode {
        FlattenMode::Shallow => Ok(alternatives.clone()),
        FlattenMode::Deep => {
            let mut leaves = Vec::new();
            collect_leaves(alternatives, &mut leaves);
            Ok(leaves)
        }
        FlattenMode::DeepUnique => {
            let mut leaves = Vec::new();
            collect_leaves(alternatives, &mut leaves);
            let unique: IndexSet<TypeExpr> = leaves.into_iter().collect();
            Ok(unique.into_iter().collect())
        }
    }
}

/// Depth-first pre-order walk appending every non-union leaf.
fn collect_leaves(alternatives: &[TypeExpr], leaves: &mut Vec<TypeExpr>) {
    for alt in alternatives {
        match alt {
            TypeExpr::Union(nested) => collect_leaves(nested, leaves),
            leaf => leaves.push(leaf.clone()),
        }
    }
}
