//! Capability traits for querying fluid properties.

use uom::si::f64::{DynamicViscosity, KinematicViscosity, MassDensity, ThermodynamicTemperature};

use super::PropertyError;

/// Density and viscosity of a fluid as functions of temperature.
///
/// Implementors fix every other state variable (typically pressure), so a
/// temperature alone identifies the state.
pub trait TransportProperties {
    /// Returns the density at the given temperature.
    ///
    /// # Errors
    ///
    /// Returns [`PropertyError`] if the density cannot be calculated.
    fn density(&self, temperature: ThermodynamicTemperature)
    -> Result<MassDensity, PropertyError>;

    /// Returns the dynamic viscosity at the given temperature.
    ///
    /// # Errors
    ///
    /// Returns [`PropertyError`] if the viscosity cannot be calculated.
    fn dynamic_viscosity(
        &self,
        temperature: ThermodynamicTemperature,
    ) -> Result<DynamicViscosity, PropertyError>;

    /// Returns the kinematic viscosity `ν = μ/ρ` at the given temperature.
    ///
    /// # Errors
    ///
    /// Returns [`PropertyError`] if either underlying property fails.
    fn kinematic_viscosity(
        &self,
        temperature: ThermodynamicTemperature,
    ) -> Result<KinematicViscosity, PropertyError> {
        let mu = self.dynamic_viscosity(temperature)?;
        let rho = self.density(temperature)?;
        Ok((mu / rho).into())
    }
}

impl<T: TransportProperties + ?Sized> TransportProperties for &T {
    fn density(
        &self,
        temperature: ThermodynamicTemperature,
    ) -> Result<MassDensity, PropertyError> {
        (**self).density(temperature)
    }

    fn dynamic_viscosity(
        &self,
        temperature: ThermodynamicTemperature,
    ) -> Result<DynamicViscosity, PropertyError> {
        (**self).dynamic_viscosity(temperature)
    }

    fn kinematic_viscosity(
        &self,
        temperature: ThermodynamicTemperature,
    ) -> Result<KinematicViscosity, PropertyError> {
        (**self).kinematic_viscosity(temperature)
    }
}
