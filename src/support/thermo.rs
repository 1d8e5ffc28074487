//! Fluid properties consumed by the fitting models.
//!
//! Resistance formulas only need the kinematic viscosity of the conveyed
//! medium at the flow temperature. Property models implement
//! [`TransportProperties`]; fluids are named by the types in [`fluid`].

mod error;

pub mod capability;
pub mod fluid;
pub mod model;

pub use capability::TransportProperties;
pub use error::PropertyError;
