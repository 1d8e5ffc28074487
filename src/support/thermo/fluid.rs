//! Canonical fluid identifiers.
//!
//! A fluid type names a substance. Property models interpret the name
//! through trait implementations, such as the constants a
//! [`Sutherland`](super::model::Sutherland) model reads from
//! [`SutherlandFluid`](super::model::SutherlandFluid).

mod air;
mod carbon_dioxide;

pub use air::Air;
pub use carbon_dioxide::CarbonDioxide;
