//! Callable signature metadata and parameter extraction.
//!
//! A [`Signature`] is the analysis-layer view of one callable's annotation
//! metadata: declaration-ordered annotations plus the default values of its
//! trailing parameters. It is an extraction artifact; nothing here is
//! retained by the algebra.

use indexmap::IndexMap;
use serde_json::Value;

use crate::expr::TypeExpr;
use crate::meta::MetaError;

/// Annotation key reserved for the declared return type.
pub const RETURN_KEY: &str = "return";

/// One callable's annotation metadata.
#[derive(Clone, Debug, PartialEq)]
pub struct Signature {
    annotations: IndexMap<String, TypeExpr>,
    defaults: Vec<Value>,
}

/// A trailing parameter paired with its default value.
#[derive(Clone, Debug, PartialEq)]
pub struct ParameterDefault {
    pub name: String,
    pub ty: TypeExpr,
    pub value: Value,
}

impl Signature {
    /// Create a signature from declaration-ordered annotations and the
    /// default values of the trailing annotated parameters.
    pub fn new(annotations: IndexMap<String, TypeExpr>, defaults: Vec<Value>) -> Self {
        Signature {
            annotations,
            defaults,
        }
    }

    /// Annotated parameters in declaration order, excluding the return
    /// annotation.
    pub fn parameters(&self) -> impl Iterator<Item = (&str, &TypeExpr)> {
        self.annotations
            .iter()
            .filter(|(name, _)| name.as_str() != RETURN_KEY)
            .map(|(name, ty)| (name.as_str(), ty))
    }

    /// The declared return annotation, if any.
    pub fn return_type(&self) -> Option<&TypeExpr> {
        self.annotations.get(RETURN_KEY)
    }

    /// Trailing annotated parameters paired with their defaults, in
    /// declaration order.
    ///
    /// Defaults align with the end of the parameter list: the last default
    /// belongs to the last parameter, and so on backwards. Parameters earlier
    /// than the available defaults are excluded.
    ///
    /// Fails with [`MetaError::DefaultCountMismatch`] when the dump carries
    /// more defaults than annotated parameters; any pairing would be
    /// arbitrary.
    pub fn default_parameters(&self) -> Result<Vec<ParameterDefault>, MetaError> {
        let params: Vec<(&str, &TypeExpr)> = self.parameters().collect();
        if self.defaults.len() > params.len() {
            return Err(MetaError::DefaultCountMismatch {
                params: params.len(),
                defaults: self.defaults.len(),
            });
        }

        let skip = params.len() - self.defaults.len();
        Ok(params[skip..]
            .iter()
            .zip(&self.defaults)
            .map(|((name, ty), value)| ParameterDefault {
                name: (*name).to_string(),
                ty: (*ty).clone(),
                value: value.clone(),
            })
            .collect())
    }
}
