use thiserror::Error;

/// Errors surfaced by the conversion pipeline.
///
/// Lenient conversion (the default) substitutes documented defaults for
/// malformed values instead of failing, so the `Input` and `Field` variants
/// only occur in strict mode; `Template` covers document assembly itself.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum RejestrError {
    /// The input mapping is unusable: empty, not a JSON object, or missing
    /// required fields in strict mode.
    #[error("input error: {0}")]
    Input(String),

    /// A supplied value could not be normalized (strict mode only).
    #[error("field '{field}': {message}")]
    Field {
        /// Canonical name of the logical field.
        field: &'static str,
        /// Why the value was rejected.
        message: String,
    },

    /// XML document assembly failed.
    #[error("template error: {0}")]
    Template(String),
}

impl RejestrError {
    /// True for errors caused by the caller's data rather than by assembly.
    pub fn is_input(&self) -> bool {
        matches!(self, Self::Input(_) | Self::Field { .. })
    }
}
