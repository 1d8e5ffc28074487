//! Diffuser and confuser resistance.
//!
//! A diffuser loses energy to wall friction, to the sudden-expansion-like
//! mixing of the jet, and to the distorted velocity profile it leaves behind:
//!
//! ```text
//! ζ = ζ′_fr + ζ_exp + ζ_nu
//! ζ′_fr = (1 + 0.5/1.5^x̃)·ζ_fr
//! ζ_exp = Φ(α, Re)·(1 − 1/n)^m
//! ```
//!
//! A confuser loses energy to the contraction itself and to wall friction:
//!
//! ```text
//! ζ = ζ_local + ζ_fr
//! ```
//!
//! Here `n` is the ratio of the large to the small area, `x̃` the relative
//! length of the fitting measured in local hydraulic diameters and `Φ` the
//! tabulated shock-completeness coefficient. Each shape supplies its own
//! `ζ_fr`, `x̃` and `ζ_nu`. Reynolds number and friction factor are evaluated
//! at the inlet section, which is the small one for diffusers and the large
//! one for confusers.

mod conical;
mod contraction;
mod flat;
mod input;
mod phi;
mod pyramidal;

pub use input::{
    Conditions, ConicalInput, FlatConfuserInput, FlatDiffuserInput, PyramidalConfuserInput,
    PyramidalDiffuserInput,
};

pub(crate) use conical::{conical_confuser, conical_diffuser};
pub(crate) use flat::{flat_confuser, flat_diffuser};
pub(crate) use pyramidal::{pyramidal_confuser, pyramidal_diffuser};

use uom::si::f64::Area;

use crate::{
    models::ventilation::{ResistanceConfig, ResistanceError},
    support::{
        flow::DuctFlow,
        geometry::{CrossSection, GeometryError, area_ratio},
        thermo::TransportProperties,
    },
};

/// Straight run ahead of a diffuser, in inlet hydraulic diameters.
const UPSTREAM_LENGTH: f64 = 10.0;

/// Loss terms of a diffuser.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) struct DiffuserLoss {
    /// Wall friction corrected for the relative length, `ζ′_fr`.
    pub(crate) friction: f64,
    /// Uniform-expansion loss, `ζ_exp`.
    pub(crate) expansion: f64,
    /// Velocity-profile distortion loss, `ζ_nu`.
    pub(crate) nonuniformity: f64,
}

impl DiffuserLoss {
    pub(crate) fn total(&self) -> f64 {
        self.friction + self.expansion + self.nonuniformity
    }

    fn checked(self) -> Result<Self, ResistanceError> {
        physical(&[self.friction, self.expansion, self.nonuniformity])?;
        Ok(self)
    }
}

/// Loss terms of a confuser.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) struct ConfuserLoss {
    pub(crate) local: f64,
    pub(crate) friction: f64,
}

impl ConfuserLoss {
    pub(crate) fn total(&self) -> f64 {
        self.local + self.friction
    }

    fn checked(self) -> Result<Self, ResistanceError> {
        physical(&[self.local, self.friction])?;
        Ok(self)
    }
}

/// Rejects loss terms that are negative or not finite.
///
/// Reflex angles can drive the relative-length integrals out of their
/// domain; no strictness setting turns such a fitting into a valid one.
fn physical(terms: &[f64]) -> Result<(), ResistanceError> {
    if terms.iter().all(|term| term.is_finite() && *term >= 0.0) {
        return Ok(());
    }
    Err(GeometryError::Mismatch {
        context: format!("fitting geometry yields non-physical loss terms {terms:?}"),
    }
    .into())
}

/// Reynolds number and friction factor at the inlet of a fitting.
#[derive(Debug, Clone, Copy)]
struct Inlet {
    reynolds: f64,
    friction_factor: f64,
}

impl Inlet {
    fn new(
        fluid: &impl TransportProperties,
        conditions: &Conditions,
        section: CrossSection,
    ) -> Result<Self, ResistanceError> {
        let viscosity = fluid.kinematic_viscosity(conditions.temperature)?;
        let flow = DuctFlow::new(conditions.flow_rate, &section, viscosity)?;
        Ok(Self {
            reynolds: flow.reynolds(),
            friction_factor: flow.friction_factor(conditions.roughness)?,
        })
    }
}

/// Returns `n = A_large/A_small`.
///
/// A "large" section smaller than the "small" one is an error in every
/// strictness mode.
fn expansion_ratio(small: Area, large: Area) -> Result<f64, ResistanceError> {
    let n = area_ratio(large, small);
    if n < 1.0 {
        return Err(GeometryError::Mismatch {
            context: format!("large section is smaller than the small one (area ratio {n})"),
        }
        .into());
    }
    Ok(n)
}

/// Resolves Φ, or reports that the table has no value for this angle.
fn shock_completeness(
    value: Option<f64>,
    alpha: f64,
    reynolds: f64,
    config: &ResistanceConfig,
) -> Result<f64, ResistanceError> {
    config.tabulated(value, || {
        format!("no Φ value for a {alpha}° diffuser at Re = {reynolds:.0}")
    })
}

/// Corrects the friction of a diffuser for its relative length `x̃`.
fn length_corrected(friction: f64, relative_length: f64) -> f64 {
    (1.0 + 0.5 / 1.5_f64.powf(relative_length)) * friction
}

/// Returns `sin(α/2)` for an included angle in degrees.
fn half_sin(alpha: f64) -> f64 {
    (alpha.to_radians() / 2.0).sin()
}

/// Returns `tan(α/2)` for an included angle in degrees.
fn half_tan(alpha: f64) -> f64 {
    (alpha.to_radians() / 2.0).tan()
}
