use uom::si::ratio::ratio;

use crate::{
    models::ventilation::{ResistanceConfig, ResistanceError},
    support::{
        geometry::{area_ratio, positive_angle, positive_length},
        thermo::TransportProperties,
    },
};

use super::{
    ConfuserLoss, DiffuserLoss, FlatConfuserInput, FlatDiffuserInput, Inlet, UPSTREAM_LENGTH,
    contraction::local_loss, expansion_ratio, half_sin, half_tan, length_corrected, phi,
    shock_completeness,
};

const EXPANSION_EXPONENT: f64 = 1.76;

/// Evaluates a rectangular diffuser whose width grows and height stays.
///
/// Flat diffusers share the Φ table of conical ones.
pub(crate) fn flat_diffuser(
    fluid: &impl TransportProperties,
    input: &FlatDiffuserInput,
    config: &ResistanceConfig,
) -> Result<DiffuserLoss, ResistanceError> {
    let alpha = positive_angle("angle", input.angle)?;
    let length = positive_length("length", input.length)?;
    let n = expansion_ratio(input.small.area(), input.large.area())?;
    let inlet = Inlet::new(fluid, &input.conditions, input.small.into())?;

    let dh = input.small.hydraulic_diameter();
    let relative_length = (length / dh).get::<ratio>();
    let relative_width = (input.small.width() / dh).get::<ratio>();
    let relative_height = (input.small.height() / dh).get::<ratio>();
    let tan = half_tan(alpha);
    let reduced_length = relative_length / (2.0 * relative_height)
        + (1.0 + 2.0 * relative_length * tan / relative_width).ln() / (4.0 * tan);

    let completeness = shock_completeness(
        phi::conical(inlet.reynolds, alpha),
        alpha,
        inlet.reynolds,
        config,
    )?;

    let aspect = input.small.aspect_ratio();
    DiffuserLoss {
        friction: length_corrected(
            friction(inlet.friction_factor, n, alpha, aspect),
            reduced_length,
        ),
        expansion: completeness * (1.0 - 1.0 / n).powf(EXPANSION_EXPONENT),
        nonuniformity: nonuniformity(alpha, n, inlet.reynolds),
    }
    .checked()
}

/// Evaluates a rectangular confuser whose width shrinks and height stays.
///
/// Friction uses the aspect ratio of the large (inlet) section.
pub(crate) fn flat_confuser(
    fluid: &impl TransportProperties,
    input: &FlatConfuserInput,
    _config: &ResistanceConfig,
) -> Result<ConfuserLoss, ResistanceError> {
    let alpha = positive_angle("angle", input.angle)?;
    let n = expansion_ratio(input.small.area(), input.large.area())?;
    let inlet = Inlet::new(fluid, &input.conditions, input.large.into())?;

    ConfuserLoss {
        local: local_loss(area_ratio(input.small.area(), input.large.area()), alpha),
        friction: friction(inlet.friction_factor, n, alpha, input.large.aspect_ratio()),
    }
    .checked()
}

/// `ζ_fr = λ/(4·sin(α/2))·((a/b)(1 − 1/n) + 0.5(1 − 1/n²))`
fn friction(lambda: f64, n: f64, alpha: f64, aspect: f64) -> f64 {
    lambda / (4.0 * half_sin(alpha))
        * (aspect * (1.0 - 1.0 / n) + 0.5 * (1.0 - 1.0 / n.powi(2)))
}

fn nonuniformity(alpha: f64, n: f64, reynolds: f64) -> f64 {
    let l0 = UPSTREAM_LENGTH;
    let angle_exponent = 1.0 / (1.0 + 4.31e-8 * alpha.powf(4.62));
    let length_exponent = 0.75 / (1.0 + 6.32e-6 * l0.powf(7.11));
    let reynolds_exponent = 1.0 / (1.0 + 6.4 * 10.0_f64.powf(-12.9) * reynolds.powf(2.37));

    0.0106
        * (0.625 * alpha).powf(angle_exponent)
        * (1.0 - (0.658 * (n - 1.0) + 1.0).powf(-1.79))
        * (0.303 * l0).powf(length_exponent)
        * (1.65e-5 * reynolds + 1.4).powf(reynolds_exponent)
}
