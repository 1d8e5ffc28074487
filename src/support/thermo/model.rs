//! Fluid property models.

pub mod fixed;
pub mod sutherland;

pub(crate) mod ideal_gas_eos;

pub use fixed::FixedProperties;
pub use sutherland::{SpecificGasConstant, Sutherland, SutherlandFluid, SutherlandParameters};
