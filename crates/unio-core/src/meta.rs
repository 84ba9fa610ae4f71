//! Raw reflection-metadata layer.
//!
//! 1:1 serde mapping of host callable-introspection dumps. A dump carries an
//! insertion-ordered annotation map (which may include a `"return"` entry)
//! and the default values for the trailing annotated parameters, which is
//! exactly what annotation-based reflection APIs expose.
//!
//! Raw values are permissive; [`TypeExpr::from_raw`] and
//! [`Signature::from_raw`] are the validation step.

use indexmap::IndexMap;
use serde_json::Value;

use crate::expr::TypeExpr;
use crate::signature::Signature;

/// Raw type reference from a reflection dump.
///
/// A bare string is an atomic identifier; an array is a union over its
/// elements, which may themselves be arrays.
#[derive(Debug, Clone, serde::Deserialize)]
#[serde(untagged)]
pub enum RawType {
    Name(String),
    Union(Vec<RawType>),
}

/// Raw callable signature from a reflection dump.
#[derive(Debug, Clone, serde::Deserialize)]
pub struct RawSignature {
    /// Annotated names in declaration order; may include a `"return"` entry.
    pub annotations: IndexMap<String, RawType>,
    /// Default values for the trailing annotated parameters, in order.
    #[serde(default)]
    pub defaults: Vec<Value>,
}

/// Parse a reflection dump of a single type reference.
pub fn parse_type(json: &str) -> Result<RawType, serde_json::Error> {
    serde_json::from_str(json)
}

/// Parse a reflection dump of a callable signature.
pub fn parse_signature(json: &str) -> Result<RawSignature, serde_json::Error> {
    serde_json::from_str(json)
}

/// Errors from converting raw metadata into analysis-layer values.
#[derive(Debug, thiserror::Error)]
pub enum MetaError {
    /// The dump was not valid JSON for the documented shapes.
    #[error("malformed reflection dump: {0}")]
    Json(#[from] serde_json::Error),

    /// A union carried zero alternatives. Type trees are never empty.
    #[error("union with no alternatives")]
    EmptyUnion,

    /// More default values than annotated parameters.
    #[error("{defaults} default values for {params} annotated parameters")]
    DefaultCountMismatch { params: usize, defaults: usize },
}

impl TypeExpr {
    /// Build a validated type expression from raw metadata.
    pub fn from_raw(raw: RawType) -> Result<TypeExpr, MetaError> {
        match raw {
            RawType::Name(name) => Ok(TypeExpr::Atom(name)),
            RawType::Union(alternatives) => {
                if alternatives.is_empty() {
                    return Err(MetaError::EmptyUnion);
                }
                let alternatives = alternatives
                    .into_iter()
                    .map(TypeExpr::from_raw)
                    .collect::<Result<_, _>>()?;
                Ok(TypeExpr::Union(alternatives))
            }
        }
    }
}

impl Signature {
    /// Build a validated signature from raw metadata.
    pub fn from_raw(raw: RawSignature) -> Result<Signature, MetaError> {
        let mut annotations = IndexMap::with_capacity(raw.annotations.len());
        for (name, ty) in raw.annotations {
            annotations.insert(name, TypeExpr::from_raw(ty)?);
        }
        Ok(Signature::new(annotations, raw.defaults))
    }
}
