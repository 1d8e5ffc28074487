use thiserror::Error;

use crate::support::{flow::FlowError, geometry::GeometryError, thermo::PropertyError};

/// Errors returned by the ventilation fitting models.
#[derive(Debug, Clone, PartialEq, Error)]
#[non_exhaustive]
pub enum ResistanceError {
    /// A dimension or angle is invalid, or the sections do not fit together.
    #[error("invalid geometry")]
    InvalidGeometry(#[from] GeometryError),

    /// A flow rate, flow split or Reynolds number is invalid.
    #[error("invalid flow")]
    InvalidFlow(#[from] FlowError),

    /// The inputs fall outside the handbook tables.
    ///
    /// Only raised with [`Strictness::Strict`](super::Strictness::Strict).
    #[error("unsupported configuration: {context}")]
    UnsupportedConfiguration { context: String },

    /// The fluid property model failed.
    #[error("fluid property evaluation failed")]
    Property(#[from] PropertyError),
}
