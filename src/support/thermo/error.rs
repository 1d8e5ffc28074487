use thiserror::Error;

/// Errors that may occur when evaluating fluid properties.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PropertyError {
    /// The requested state is outside the model's valid domain.
    ///
    /// For example, a temperature at or below absolute zero.
    #[error("out of domain: {context}")]
    OutOfDomain { context: String },

    /// The calculation produced a non-finite or non-physical value.
    #[error("calculation error: {context}")]
    Calculation { context: String },
}
