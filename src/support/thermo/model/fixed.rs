//! Temperature-independent transport properties.
//!
//! `FixedProperties` returns the same density and viscosity at every
//! temperature. Use it when measured values for the conveyed medium are at
//! hand, or for media whose properties barely change over the operating range.

use thiserror::Error;
use uom::si::{
    dynamic_viscosity::pascal_second,
    f64::{DynamicViscosity, MassDensity, ThermodynamicTemperature},
    mass_density::kilogram_per_cubic_meter,
};

use crate::support::{
    constraint::{Constraint, StrictlyPositive},
    thermo::{PropertyError, TransportProperties},
};

#[derive(Debug, Error, Clone, PartialEq)]
pub enum FixedPropertiesError {
    #[error("invalid density: {rho:?}")]
    Density { rho: MassDensity },
    #[error("invalid dynamic viscosity: {mu:?}")]
    Viscosity { mu: DynamicViscosity },
}

/// Constant density and dynamic viscosity.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FixedProperties {
    density: MassDensity,
    viscosity: DynamicViscosity,
}

impl FixedProperties {
    /// Creates a model from a density and a dynamic viscosity.
    ///
    /// # Errors
    ///
    /// Returns [`FixedPropertiesError`] if either value is not strictly positive.
    pub fn new(
        density: MassDensity,
        viscosity: DynamicViscosity,
    ) -> Result<Self, FixedPropertiesError> {
        if StrictlyPositive::check(&density.get::<kilogram_per_cubic_meter>()).is_err() {
            return Err(FixedPropertiesError::Density { rho: density });
        }
        if StrictlyPositive::check(&viscosity.get::<pascal_second>()).is_err() {
            return Err(FixedPropertiesError::Viscosity { mu: viscosity });
        }
        Ok(Self { density, viscosity })
    }
}

impl TransportProperties for FixedProperties {
    fn density(
        &self,
        _temperature: ThermodynamicTemperature,
    ) -> Result<MassDensity, PropertyError> {
        Ok(self.density)
    }

    fn dynamic_viscosity(
        &self,
        _temperature: ThermodynamicTemperature,
    ) -> Result<DynamicViscosity, PropertyError> {
        Ok(self.viscosity)
    }
}
