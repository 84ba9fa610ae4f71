//! Type expressions: the value trees the algebra operates on.

use std::fmt;

use crate::registry::Builtin;

/// A type expression drawn from a host's reflection metadata.
///
/// Either a single concrete type identifier or a union over one or more
/// alternatives. Unions may nest; the tree is kept exactly as the host
/// reported it (no auto-flattening, no dedupe).
///
/// Equality is identifier equality for atoms and structural for unions.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum TypeExpr {
    /// A single concrete type identifier (builtin or user-defined).
    Atom(String),
    /// One of a list of alternative expressions, possibly nested.
    Union(Vec<TypeExpr>),
}

impl TypeExpr {
    /// Create an atomic type from its identifier.
    pub fn atom(name: impl Into<String>) -> Self {
        TypeExpr::Atom(name.into())
    }

    /// Create a union over `alternatives`.
    ///
    /// # Panics
    /// Panics if `alternatives` is empty. Type trees are never empty; raw
    /// metadata of unknown provenance goes through [`TypeExpr::from_raw`]
    /// instead, which reports the violation as an error.
    pub fn union(alternatives: Vec<TypeExpr>) -> Self {
        assert!(
            !alternatives.is_empty(),
            "TypeExpr: a union must carry at least one alternative"
        );
        TypeExpr::Union(alternatives)
    }

    /// Whether this is exactly the union variant.
    pub fn is_union(&self) -> bool {
        matches!(self, TypeExpr::Union(_))
    }

    /// Whether this is a single concrete identifier.
    pub fn is_atom(&self) -> bool {
        matches!(self, TypeExpr::Atom(_))
    }

    /// Whether this names a builtin type.
    ///
    /// Exact-identifier membership in the fixed registry. A union is never
    /// builtin, and neither is a host type derived from a primitive.
    pub fn is_builtin(&self) -> bool {
        match self {
            TypeExpr::Atom(name) => Builtin::from_name(name).is_some(),
            TypeExpr::Union(_) => false,
        }
    }

    /// Whether this is an optional type: a union with a direct `NoneType`
    /// alternative.
    pub fn is_optional(&self) -> bool {
        match self {
            TypeExpr::Union(alternatives) => alternatives
                .iter()
                .any(|alt| matches!(alt, TypeExpr::Atom(name) if name == Builtin::NoneType.name())),
            TypeExpr::Atom(_) => false,
        }
    }
}

impl From<Builtin> for TypeExpr {
    fn from(kind: Builtin) -> Self {
        TypeExpr::Atom(kind.name().to_string())
    }
}

impl fmt::Display for TypeExpr {
    /// Render atoms as their identifier and unions as `a | b | c`, with
    /// nested unions parenthesized.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TypeExpr::Atom(name) => write!(f, "{name}"),
            TypeExpr::Union(alternatives) => {
                for (i, alt) in alternatives.iter().enumerate() {
                    if i > 0 {
                        write!(f, " | ")?;
                    }
                    if alt.is_union() {
                        write!(f, "({alt})")?;
                    } else {
                        write!(f, "{alt}")?;
                    }
                }
                Ok(())
            }
        }
    }
}
