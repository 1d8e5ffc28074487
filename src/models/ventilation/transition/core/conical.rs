use uom::si::ratio::ratio;

use crate::{
    models::ventilation::{ResistanceConfig, ResistanceError},
    support::{
        geometry::{area_ratio, positive_angle},
        thermo::TransportProperties,
    },
};

use super::{
    ConfuserLoss, ConicalInput, DiffuserLoss, Inlet, UPSTREAM_LENGTH, contraction::local_loss,
    expansion_ratio, half_sin, half_tan, length_corrected, phi, shock_completeness,
};

const EXPANSION_EXPONENT: f64 = 1.92;

/// Exponent of the angle in the `a` coefficient of `ζ_nu`; not π.
const ANGLE_EXPONENT: f64 = 3.140;

/// Evaluates a round diffuser with flow from `small` to `large`.
pub(crate) fn conical_diffuser(
    fluid: &impl TransportProperties,
    input: &ConicalInput,
    config: &ResistanceConfig,
) -> Result<DiffuserLoss, ResistanceError> {
    let alpha = positive_angle("angle", input.angle)?;
    let n = expansion_ratio(input.small.area(), input.large.area())?;
    let inlet = Inlet::new(fluid, &input.conditions, input.small.into())?;

    let d = input.small.diameter();
    let tan = half_tan(alpha);
    let length = (input.large.diameter() - d) / (2.0 * tan);
    let relative_length = (length / d).get::<ratio>();
    let reduced_length = (1.0 + 2.0 * relative_length * tan).ln() / (2.0 * tan);

    let completeness = shock_completeness(
        phi::conical(inlet.reynolds, alpha),
        alpha,
        inlet.reynolds,
        config,
    )?;

    DiffuserLoss {
        friction: length_corrected(friction(inlet.friction_factor, n, alpha), reduced_length),
        expansion: completeness * (1.0 - 1.0 / n).powf(EXPANSION_EXPONENT),
        nonuniformity: nonuniformity(alpha, n, inlet.reynolds),
    }
    .checked()
}

/// Evaluates a round confuser with flow from `large` to `small`.
pub(crate) fn conical_confuser(
    fluid: &impl TransportProperties,
    input: &ConicalInput,
    _config: &ResistanceConfig,
) -> Result<ConfuserLoss, ResistanceError> {
    let alpha = positive_angle("angle", input.angle)?;
    let n = expansion_ratio(input.small.area(), input.large.area())?;
    let inlet = Inlet::new(fluid, &input.conditions, input.large.into())?;

    ConfuserLoss {
        local: local_loss(area_ratio(input.small.area(), input.large.area()), alpha),
        friction: friction(inlet.friction_factor, n, alpha),
    }
    .checked()
}

/// `ζ_fr = λ/(8·sin(α/2))·(1 − 1/n²)`
fn friction(lambda: f64, n: f64, alpha: f64) -> f64 {
    lambda / (8.0 * half_sin(alpha)) * (1.0 - 1.0 / n.powi(2))
}

/// Velocity-profile loss for an included angle `alpha` in degrees.
fn nonuniformity(alpha: f64, n: f64, reynolds: f64) -> f64 {
    let l0 = UPSTREAM_LENGTH;
    let a = 0.924 / (1.0 + 1.3e-5 * alpha.powf(ANGLE_EXPONENT));
    let b = (0.3 + 1.55 * 1.1_f64.powf(-alpha)) / (1.0 + 1.03e-8 * l0.powf(7.5));
    let c = 1.05 / (1.0 + 2.3e-62 * reynolds.powi(11));

    0.044
        * (0.345 * alpha).powf(a)
        * (1.0 - (0.2 * n + 0.8).powf(-3.82))
        * (0.154 * l0).powf(b)
        * (2.31e-6 * reynolds + 0.2 + 2.54 * (1.0 + 0.081 * alpha).powf(-1.51)).powf(c)
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;

    use crate::{
        models::ventilation::test_support::{
            SWEEP_ANGLES, SWEEP_AREA_RATIOS, SWEEP_FLOWS, air, circle, conditions, degrees,
        },
        support::{flow::FlowError, geometry::GeometryError},
    };

    fn input(flow_m3h: f64, small_mm: f64, large_mm: f64, angle: f64) -> ConicalInput {
        ConicalInput {
            conditions: conditions(flow_m3h),
            small: circle(small_mm),
            large: circle(large_mm),
            angle: degrees(angle),
        }
    }

    #[test]
    fn diffuser_reference_case() {
        let loss = conical_diffuser(
            &air(),
            &input(1000.0, 200.0, 300.0, 20.0),
            &ResistanceConfig::default(),
        )
        .unwrap();

        assert_relative_eq!(loss.friction, 0.012_518_384_943_942_322, max_relative = 1e-9);
        assert_relative_eq!(loss.expansion, 0.103_520_597_149_504_12, max_relative = 1e-9);
        assert_relative_eq!(
            loss.nonuniformity,
            0.149_558_050_695_946_88,
            max_relative = 1e-9
        );
        assert_relative_eq!(loss.total(), 0.265_597_032_789_393_34, max_relative = 1e-9);
    }

    #[test]
    fn wider_diffuser_trades_friction_for_expansion() {
        let narrow = conical_diffuser(
            &air(),
            &input(1000.0, 200.0, 300.0, 20.0),
            &ResistanceConfig::default(),
        )
        .unwrap();
        let wide = conical_diffuser(
            &air(),
            &input(1000.0, 200.0, 300.0, 40.0),
            &ResistanceConfig::default(),
        )
        .unwrap();

        assert!(wide.friction < narrow.friction);
        assert!(wide.expansion > narrow.expansion);
        assert_relative_eq!(wide.total(), 0.329_965_889_540_582_04, max_relative = 1e-9);
    }

    #[test]
    fn diffuser_without_expansion_has_no_loss() {
        let loss = conical_diffuser(
            &air(),
            &input(1000.0, 200.0, 200.0, 20.0),
            &ResistanceConfig::strict(),
        )
        .unwrap();

        assert_relative_eq!(loss.friction, 0.0);
        assert_relative_eq!(loss.expansion, 0.0);
        assert_relative_eq!(loss.nonuniformity, 0.0);
    }

    #[test]
    fn confuser_reference_case() {
        let loss = conical_confuser(
            &air(),
            &input(1000.0, 200.0, 300.0, 30.0),
            &ResistanceConfig::default(),
        )
        .unwrap();

        assert_relative_eq!(loss.local, 0.036_978_358_284_523_644, max_relative = 1e-9);
        assert_relative_eq!(loss.friction, 0.005_797_590_708_809_694, max_relative = 1e-9);
        assert_relative_eq!(loss.total(), 0.042_775_948_993_333_34, max_relative = 1e-9);
    }

    #[test]
    fn confuser_without_contraction_keeps_only_local_loss() {
        let loss = conical_confuser(
            &air(),
            &input(1000.0, 300.0, 300.0, 30.0),
            &ResistanceConfig::default(),
        )
        .unwrap();

        assert_relative_eq!(loss.friction, 0.0);
        assert_relative_eq!(loss.total(), 0.002_317_103_775_850_524, max_relative = 1e-9);
    }

    #[test]
    fn angle_must_be_positive() {
        let result = conical_diffuser(
            &air(),
            &input(1000.0, 200.0, 300.0, 0.0),
            &ResistanceConfig::default(),
        );
        assert!(matches!(
            result,
            Err(ResistanceError::InvalidGeometry(GeometryError::Angle { .. }))
        ));

        let result = conical_confuser(
            &air(),
            &input(1000.0, 200.0, 300.0, -10.0),
            &ResistanceConfig::default(),
        );
        assert!(matches!(
            result,
            Err(ResistanceError::InvalidGeometry(GeometryError::Angle { .. }))
        ));
    }

    #[test]
    fn zero_flow_is_invalid() {
        let result = conical_diffuser(
            &air(),
            &input(0.0, 200.0, 300.0, 20.0),
            &ResistanceConfig::default(),
        );
        assert!(matches!(
            result,
            Err(ResistanceError::InvalidFlow(FlowError::FlowRate { .. }))
        ));
    }

    #[test]
    fn swapped_sections_are_rejected() {
        let swapped = input(1000.0, 300.0, 200.0, 20.0);

        for config in [ResistanceConfig::default(), ResistanceConfig::strict()] {
            assert!(matches!(
                conical_diffuser(&air(), &swapped, &config),
                Err(ResistanceError::InvalidGeometry(GeometryError::Mismatch { .. }))
            ));
            assert!(matches!(
                conical_confuser(&air(), &swapped, &config),
                Err(ResistanceError::InvalidGeometry(GeometryError::Mismatch { .. }))
            ));
        }
    }

    #[test]
    fn relative_length_follows_from_the_diameters() {
        let loss = conical_diffuser(
            &air(),
            &input(1000.0, 200.0, 300.0, 20.0),
            &ResistanceConfig::default(),
        )
        .unwrap();

        let lambda = 0.016_496_257_429_714_407;
        let reduced_length = 1.5_f64.ln() / (2.0 * 10_f64.to_radians().tan());
        assert_relative_eq!(reduced_length, 1.149_753_448_051_581, max_relative = 1e-12);
        assert_relative_eq!(
            loss.friction,
            length_corrected(friction(lambda, 2.25, 20.0), reduced_length),
            max_relative = 1e-9
        );
    }

    #[test]
    fn nonuniformity_regression_takes_degrees() {
        let reynolds = 117_426.816_361_614_95;

        assert_relative_eq!(
            nonuniformity(20.0, 2.25, reynolds),
            0.149_558_050_695_946_88,
            max_relative = 1e-9
        );
        assert_relative_eq!(
            nonuniformity(20_f64.to_radians(), 2.25, reynolds),
            0.019_665_887_795_577_562,
            max_relative = 1e-9
        );
    }

    #[test]
    fn losses_are_finite_and_non_negative() {
        let config = ResistanceConfig::default();

        for alpha in SWEEP_ANGLES {
            for flow in SWEEP_FLOWS {
                for n in SWEEP_AREA_RATIOS {
                    let fitting = input(flow, 200.0, 200.0 * n.sqrt(), alpha);
                    let diffuser = conical_diffuser(&air(), &fitting, &config).unwrap();
                    let confuser = conical_confuser(&air(), &fitting, &config).unwrap();

                    for zeta in [diffuser.total(), confuser.total()] {
                        assert!(
                            zeta.is_finite() && zeta >= 0.0,
                            "α={alpha}, Q={flow}, n={n}: ζ={zeta}"
                        );
                    }
                }
            }
        }
    }

    #[test]
    fn untabulated_angle_depends_on_strictness() {
        let reflex = input(1000.0, 200.0, 300.0, 200.0);

        let lenient = conical_diffuser(&air(), &reflex, &ResistanceConfig::default()).unwrap();
        assert_relative_eq!(lenient.expansion, 0.0);

        assert!(matches!(
            conical_diffuser(&air(), &reflex, &ResistanceConfig::strict()),
            Err(ResistanceError::UnsupportedConfiguration { .. })
        ));
    }
}
