use thiserror::Error;

use crate::support::constraint::ConstraintError;

/// Errors raised while building or combining duct geometry.
#[derive(Debug, Clone, PartialEq, Error)]
#[non_exhaustive]
pub enum GeometryError {
    /// A length is zero, negative or `NaN`.
    #[error("invalid dimension `{name}`")]
    Dimension {
        name: &'static str,
        #[source]
        source: ConstraintError,
    },

    /// A fitting angle is zero, negative or `NaN`.
    #[error("invalid angle `{name}`")]
    Angle {
        name: &'static str,
        #[source]
        source: ConstraintError,
    },

    /// The sections of a fitting do not fit together as the formula requires.
    #[error("incompatible sections: {context}")]
    Mismatch { context: String },
}
