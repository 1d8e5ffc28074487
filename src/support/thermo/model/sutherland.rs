//! Ideal gas with Sutherland's viscosity law.
//!
//! `Sutherland` covers the usual ventilation media: dry air and other gases
//! at near-atmospheric pressure.
//!
//! # Assumptions
//!
//! - Ideal gas equation of state at a fixed pressure: `ρ = p/(R·T)`
//! - Sutherland's law: `μ = μ₀·(T/T₀)^1.5·(T₀ + S)/(T + S)`
//!
//! The pressure defaults to one standard atmosphere.

use std::marker::PhantomData;

use thiserror::Error;
use uom::si::{
    dynamic_viscosity::pascal_second,
    f64::{
        DynamicViscosity, MassDensity, Pressure, TemperatureInterval, ThermodynamicTemperature,
    },
    pressure::{atmosphere, pascal},
    specific_heat_capacity::joule_per_kilogram_kelvin,
    temperature_interval, thermodynamic_temperature,
};
use uom::{
    si::{ISQ, Quantity, SI},
    typenum::{N1, N2, P2, Z0},
};

use crate::support::{
    constraint::{Constraint, NonNegative, StrictlyPositive},
    thermo::{PropertyError, TransportProperties},
};

use super::ideal_gas_eos;

/// Gas constant of one substance, `R = R_u/M`, in J/(kg·K).
///
/// `uom` ships no such quantity; its dimension is that of a specific heat
/// capacity.
pub type SpecificGasConstant = Quantity<ISQ<P2, Z0, N2, Z0, N1, Z0, Z0>, SI<f64>, f64>;

#[derive(Debug, Error, Clone, PartialEq)]
pub enum SutherlandParametersError {
    #[error("invalid gas constant R: {r:?}")]
    GasConstant { r: SpecificGasConstant },
    #[error("invalid reference viscosity: {mu_ref:?}")]
    ReferenceViscosity { mu_ref: DynamicViscosity },
    #[error("invalid reference temperature: {t_ref:?}")]
    ReferenceTemperature { t_ref: ThermodynamicTemperature },
    #[error("invalid Sutherland constant: {s:?}")]
    SutherlandConstant { s: TemperatureInterval },
    #[error("invalid pressure: {p:?}")]
    Pressure { p: Pressure },
}

/// Constant parameters for the [`Sutherland`] model.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SutherlandParameters {
    pub gas_constant: SpecificGasConstant,
    pub reference_viscosity: DynamicViscosity,
    pub reference_temperature: ThermodynamicTemperature,
    pub sutherland_constant: TemperatureInterval,
}

/// Fluid constants required by the [`Sutherland`] model.
pub trait SutherlandFluid {
    /// Returns the constant parameters for use with [`Sutherland`].
    fn parameters() -> SutherlandParameters;
}

/// Ideal gas at fixed pressure with temperature-dependent viscosity.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Sutherland<Fluid> {
    r: SpecificGasConstant,
    mu_ref: DynamicViscosity,
    t_ref: f64,
    s: f64,
    pressure: Pressure,
    _marker: PhantomData<Fluid>,
}

impl<Fluid: SutherlandFluid> Sutherland<Fluid> {
    /// Creates a model at one standard atmosphere using constants defined by `Fluid`.
    ///
    /// # Errors
    ///
    /// Returns [`SutherlandParametersError`] if any constant is invalid.
    pub fn new() -> Result<Self, SutherlandParametersError> {
        Self::with_pressure(Pressure::new::<atmosphere>(1.0))
    }

    /// Creates a model at the given absolute pressure.
    ///
    /// # Errors
    ///
    /// Returns [`SutherlandParametersError`] if the pressure or any constant is invalid.
    pub fn with_pressure(pressure: Pressure) -> Result<Self, SutherlandParametersError> {
        let parameters = Fluid::parameters();

        let r = parameters.gas_constant;
        if StrictlyPositive::check(&r.get::<joule_per_kilogram_kelvin>()).is_err() {
            return Err(SutherlandParametersError::GasConstant { r });
        }

        let mu_ref = parameters.reference_viscosity;
        if StrictlyPositive::check(&mu_ref.get::<pascal_second>()).is_err() {
            return Err(SutherlandParametersError::ReferenceViscosity { mu_ref });
        }

        let t_ref = parameters.reference_temperature;
        if StrictlyPositive::check(&t_ref.get::<thermodynamic_temperature::kelvin>()).is_err() {
            return Err(SutherlandParametersError::ReferenceTemperature { t_ref });
        }

        let s = parameters.sutherland_constant;
        if NonNegative::check(&s.get::<temperature_interval::kelvin>()).is_err() {
            return Err(SutherlandParametersError::SutherlandConstant { s });
        }

        if StrictlyPositive::check(&pressure.get::<pascal>()).is_err() {
            return Err(SutherlandParametersError::Pressure { p: pressure });
        }

        Ok(Self {
            r,
            mu_ref,
            t_ref: t_ref.get::<thermodynamic_temperature::kelvin>(),
            s: s.get::<temperature_interval::kelvin>(),
            pressure,
            _marker: PhantomData,
        })
    }

    /// Returns the absolute pressure the model is evaluated at.
    #[must_use]
    pub fn pressure(&self) -> Pressure {
        self.pressure
    }
}

fn absolute_kelvin(temperature: ThermodynamicTemperature) -> Result<f64, PropertyError> {
    let t = temperature.get::<thermodynamic_temperature::kelvin>();
    StrictlyPositive::check(&t).map_err(|_| PropertyError::OutOfDomain {
        context: format!("absolute temperature must be positive, got {t} K"),
    })?;
    Ok(t)
}

impl<Fluid> TransportProperties for Sutherland<Fluid> {
    fn density(
        &self,
        temperature: ThermodynamicTemperature,
    ) -> Result<MassDensity, PropertyError> {
        absolute_kelvin(temperature)?;
        Ok(ideal_gas_eos::density(temperature, self.pressure, self.r))
    }

    fn dynamic_viscosity(
        &self,
        temperature: ThermodynamicTemperature,
    ) -> Result<DynamicViscosity, PropertyError> {
        let t = absolute_kelvin(temperature)?;
        let factor = (t / self.t_ref).powf(1.5) * (self.t_ref + self.s) / (t + self.s);
        if !factor.is_finite() {
            return Err(PropertyError::Calculation {
                context: format!("Sutherland factor is not finite at {t} K"),
            });
        }
        Ok(self.mu_ref * factor)
    }
}
