//! Mean-flow quantities in a duct section.
//!
//! [`DuctFlow`] turns a volumetric flow rate through a [`CrossSection`] into
//! the mean velocity and Reynolds number, and provides the friction factor
//! shared by every transition formula:
//!
//! ```text
//! λ = 0.11·(Δ/D_h + 0.68/Re)^0.25
//! ```

use thiserror::Error;
use uom::si::{
    f64::{KinematicViscosity, Length, Velocity, VolumeRate},
    ratio::ratio,
};

use crate::support::{
    constraint::{ConstraintError, NonNegative, StrictlyPositive},
    geometry::CrossSection,
};

/// Errors raised by flow-rate and flow-state calculations.
#[derive(Debug, Clone, PartialEq, Error)]
#[non_exhaustive]
pub enum FlowError {
    /// A flow rate violates its sign requirement.
    #[error("invalid flow rate `{name}`")]
    FlowRate {
        name: &'static str,
        #[source]
        source: ConstraintError,
    },

    /// The wall roughness is negative or `NaN`.
    #[error("invalid roughness")]
    Roughness(#[source] ConstraintError),

    /// The Reynolds number is not strictly positive.
    #[error("Reynolds number must be positive, got {reynolds}")]
    Reynolds { reynolds: f64 },

    /// Flow rates that must be split between ducts are inconsistent.
    #[error("inconsistent flow split: {context}")]
    Split { context: String },
}

/// Mean flow through one duct section.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DuctFlow {
    velocity: Velocity,
    hydraulic_diameter: Length,
    reynolds: f64,
}

impl DuctFlow {
    /// Evaluates the mean flow of `flow_rate` through `section`.
    ///
    /// # Errors
    ///
    /// Returns [`FlowError::FlowRate`] if the flow rate is not strictly
    /// positive, and [`FlowError::Reynolds`] if the resulting Reynolds number
    /// is not (for example because the viscosity is not positive).
    pub fn new(
        flow_rate: VolumeRate,
        section: &CrossSection,
        kinematic_viscosity: KinematicViscosity,
    ) -> Result<Self, FlowError> {
        let flow_rate = StrictlyPositive::new(flow_rate)
            .map_err(|source| FlowError::FlowRate {
                name: "flow rate",
                source,
            })?
            .into_inner();

        let velocity: Velocity = flow_rate / section.area();
        let hydraulic_diameter = section.hydraulic_diameter();
        let reynolds = (velocity * hydraulic_diameter / kinematic_viscosity).get::<ratio>();
        StrictlyPositive::new(reynolds).map_err(|_| FlowError::Reynolds { reynolds })?;

        Ok(Self {
            velocity,
            hydraulic_diameter,
            reynolds,
        })
    }

    #[must_use]
    pub fn velocity(&self) -> Velocity {
        self.velocity
    }

    #[must_use]
    pub fn hydraulic_diameter(&self) -> Length {
        self.hydraulic_diameter
    }

    #[must_use]
    pub fn reynolds(&self) -> f64 {
        self.reynolds
    }

    /// Returns the Darcy friction factor for the given equivalent roughness.
    ///
    /// # Errors
    ///
    /// Returns [`FlowError::Roughness`] if the roughness is negative or `NaN`.
    pub fn friction_factor(&self, roughness: Length) -> Result<f64, FlowError> {
        let roughness = NonNegative::new(roughness)
            .map_err(FlowError::Roughness)?
            .into_inner();
        let relative_roughness = (roughness / self.hydraulic_diameter).get::<ratio>();
        Ok(0.11 * (relative_roughness + 0.68 / self.reynolds).powf(0.25))
    }
}
