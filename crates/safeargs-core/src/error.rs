//! Error types for schema resolution and code generation.

/// Errors raised while resolving a schema or rendering class text.
#[derive(Debug, thiserror::Error)]
pub enum GenerateError {
    /// A structured argument spec has no `type` key.
    #[error("schema entry `{entry}`: argument `{argument}` is missing the `type` key")]
    MissingType {
        /// Root name of the schema entry the argument belongs to.
        entry: String,
        /// Raw name of the offending argument.
        argument: String,
    },

    /// The schema or table document is not valid YAML for the expected shape.
    #[error("failed to parse document: {0}")]
    Yaml(#[from] serde_yaml::Error),

    /// Writing rendered text into the output buffer failed.
    #[error(transparent)]
    Fmt(#[from] std::fmt::Error),
}

/// Convenience result type for generation operations.
pub type GenerateResult<T> = Result<T, GenerateError>;
