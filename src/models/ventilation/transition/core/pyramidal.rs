use uom::si::ratio::ratio;

use crate::{
    models::ventilation::{ResistanceConfig, ResistanceError},
    support::{
        geometry::{area_ratio, positive_angle, positive_length},
        thermo::TransportProperties,
    },
};

use super::{
    ConfuserLoss, DiffuserLoss, Inlet, PyramidalConfuserInput, PyramidalDiffuserInput,
    UPSTREAM_LENGTH, contraction::local_loss, expansion_ratio, half_sin, half_tan,
    length_corrected, phi, shock_completeness,
};

const EXPANSION_EXPONENT: f64 = 1.76;

/// Evaluates a rectangular diffuser expanding in both planes.
///
/// Φ and the non-uniformity regression are indexed by the width-plane angle.
pub(crate) fn pyramidal_diffuser(
    fluid: &impl TransportProperties,
    input: &PyramidalDiffuserInput,
    config: &ResistanceConfig,
) -> Result<DiffuserLoss, ResistanceError> {
    let alpha = positive_angle("width angle", input.width_angle)?;
    let beta = positive_angle("height angle", input.height_angle)?;
    let length = positive_length("length", input.length)?;
    let n = expansion_ratio(input.small.area(), input.large.area())?;
    let inlet = Inlet::new(fluid, &input.conditions, input.small.into())?;

    let dh = input.small.hydraulic_diameter();
    let relative_length = (length / dh).get::<ratio>();
    let relative_width = (input.small.width() / dh).get::<ratio>();
    let relative_height = (input.small.height() / dh).get::<ratio>();
    let (tan_a, tan_b) = (half_tan(alpha), half_tan(beta));
    let reduced_length = (1.0 + 2.0 * relative_length * tan_a / relative_width).ln()
        / (4.0 * tan_a)
        + (1.0 + 2.0 * relative_length * tan_b / relative_height).ln() / (4.0 * tan_b);

    let completeness = shock_completeness(
        phi::pyramidal(inlet.reynolds, alpha),
        alpha,
        inlet.reynolds,
        config,
    )?;

    DiffuserLoss {
        friction: length_corrected(
            friction(inlet.friction_factor, n, alpha, beta),
            reduced_length,
        ),
        expansion: completeness * (1.0 - 1.0 / n).powf(EXPANSION_EXPONENT),
        nonuniformity: nonuniformity(alpha, n, inlet.reynolds),
    }
    .checked()
}

/// Evaluates a rectangular confuser contracting in both planes.
pub(crate) fn pyramidal_confuser(
    fluid: &impl TransportProperties,
    input: &PyramidalConfuserInput,
    _config: &ResistanceConfig,
) -> Result<ConfuserLoss, ResistanceError> {
    let alpha = positive_angle("width angle", input.width_angle)?;
    let beta = positive_angle("height angle", input.height_angle)?;
    let n = expansion_ratio(input.small.area(), input.large.area())?;
    let inlet = Inlet::new(fluid, &input.conditions, input.large.into())?;

    ConfuserLoss {
        local: local_loss(area_ratio(input.small.area(), input.large.area()), alpha),
        friction: friction(inlet.friction_factor, n, alpha, beta),
    }
    .checked()
}

/// `ζ_fr = λ/16·(1 − 1/n²)·(1/sin(α/2) + 1/sin(β/2))`
fn friction(lambda: f64, n: f64, alpha: f64, beta: f64) -> f64 {
    lambda / 16.0 * (1.0 - 1.0 / n.powi(2)) * (1.0 / half_sin(alpha) + 1.0 / half_sin(beta))
}

fn nonuniformity(alpha: f64, n: f64, reynolds: f64) -> f64 {
    let l0 = UPSTREAM_LENGTH;
    let s = 1.06 / (1.0 + 2.82e-3 * alpha.powf(2.24));
    let t = 0.73 / (1.0 + 4.31e-6 * l0.powf(7.31));
    let u = 1.0 / (1.0 + 1.1 * 10.0_f64.powf(-30.1) * reynolds.powf(5.62));

    0.024
        * (0.625 * alpha).powf(s)
        * (1.0 - (2.81 * n - 1.81).powf(-1.04))
        * (0.303 * l0).powf(t)
        * (4.8e-7 * reynolds + 1.8).powf(u)
}
