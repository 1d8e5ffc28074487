use crate::models::ventilation::{ResistanceConfig, ResistanceError};

use super::{Junction, TeeInput, coefficient};

/// Geometric family of a supply tee.
///
/// The handbook tabulates supply tees for two families only.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Regime {
    /// The pass keeps the collector section, `A_p = A_c`.
    Branching,
    /// Branch and pass split the collector section, `A_b + A_p = A_c`.
    AreaConserving,
    Untabulated,
}

impl Regime {
    fn of(junction: &Junction, config: &ResistanceConfig) -> Self {
        if config.areas_match(junction.pass_area_ratio, 1.0) {
            Self::Branching
        } else if config.areas_match(junction.branch_area_ratio + junction.pass_area_ratio, 1.0)
        {
            Self::AreaConserving
        } else {
            Self::Untabulated
        }
    }
}

/// ζ of the straight run of a supply tee, `ζ = τ·q²`.
///
/// Only branching tees have a tabulated `τ`. Any other geometry yields
/// ζ = 0 under lenient evaluation.
pub(crate) fn supply_on_pass(
    input: &TeeInput,
    config: &ResistanceConfig,
) -> Result<f64, ResistanceError> {
    let junction = Junction::new(input)?;
    if Regime::of(&junction, config) != Regime::Branching {
        config.precondition_failed(|| {
            format!(
                "supply tee pass needs the collector section, got A_p/A_c = {:.3}",
                junction.pass_area_ratio
            )
        })?;
        return Ok(0.0);
    }

    let q = junction.flow_share;
    let tau = config.tabulated(
        coefficient::supply_pass(junction.branch_area_ratio, q),
        || missing("τ", &junction),
    )?;
    Ok(tau * q.powi(2))
}

/// ζ of the branch of a supply tee.
///
/// ```text
/// ζ = A·(1 + r² − 2r·cos θ) − K_b·r²,   r = v_b/v_c
/// ```
///
/// Branching tees take `A` from the table and `K_b = 0`. Area-conserving
/// tees take `A = 1` and `K_b` from the branch angle. Any other geometry
/// yields ζ = 0 under lenient evaluation.
pub(crate) fn supply_on_turn(
    input: &TeeInput,
    config: &ResistanceConfig,
) -> Result<f64, ResistanceError> {
    let junction = Junction::new(input)?;
    let (a, kb) = match Regime::of(&junction, config) {
        Regime::Branching => {
            let a = config.tabulated(
                coefficient::supply_turn(junction.branch_area_ratio, junction.flow_share),
                || missing("A", &junction),
            )?;
            (a, 0.0)
        }
        Regime::AreaConserving => (1.0, coefficient::branch_angle(junction.angle)),
        Regime::Untabulated => {
            config.precondition_failed(|| {
                format!(
                    "supply tee needs A_p = A_c or A_b + A_p = A_c, got A_b/A_c = {:.3}, A_p/A_c = {:.3}",
                    junction.branch_area_ratio, junction.pass_area_ratio
                )
            })?;
            return Ok(0.0);
        }
    };

    let r = junction.branch_velocity_ratio();
    Ok(a * (1.0 + r.powi(2) - 2.0 * r * junction.cos()) - kb * r.powi(2))
}

fn missing(name: &str, junction: &Junction) -> String {
    format!(
        "no supply tee {name} for A_b/A_c = {:.3}, q = {:.3}",
        junction.branch_area_ratio, junction.flow_share
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;

    use crate::{
        models::ventilation::test_support::{degrees, m3h, rectangular, round},
        support::geometry::GeometryError,
    };

    fn branching(branch_mm: f64, branch_flow: f64, angle: f64) -> TeeInput {
        TeeInput {
            collector: round(250.0),
            branch: round(branch_mm),
            pass: round(250.0),
            collector_flow: m3h(2000.0),
            branch_flow: m3h(branch_flow),
            angle: degrees(angle),
        }
    }

    fn area_conserving(angle: f64) -> TeeInput {
        TeeInput {
            collector: rectangular(400.0, 200.0),
            branch: rectangular(200.0, 100.0),
            pass: rectangular(300.0, 200.0),
            collector_flow: m3h(2000.0),
            branch_flow: m3h(600.0),
            angle: degrees(angle),
        }
    }

    fn untabulated() -> TeeInput {
        TeeInput {
            pass: round(220.0),
            ..branching(150.0, 600.0, 90.0)
        }
    }

    #[test]
    fn regimes() {
        let config = ResistanceConfig::default();
        let regime = |input: &TeeInput| Regime::of(&Junction::new(input).unwrap(), &config);

        assert_eq!(regime(&branching(150.0, 600.0, 90.0)), Regime::Branching);
        assert_eq!(regime(&area_conserving(45.0)), Regime::AreaConserving);
        assert_eq!(regime(&untabulated()), Regime::Untabulated);
    }

    #[test]
    fn on_pass_branching() {
        let config = ResistanceConfig::default();
        let on_pass = |input: TeeInput| supply_on_pass(&input, &config).unwrap();

        assert_relative_eq!(on_pass(branching(150.0, 600.0, 90.0)), 0.036, max_relative = 1e-12);
        assert_relative_eq!(on_pass(branching(150.0, 1200.0, 90.0)), 0.144, max_relative = 1e-12);
        assert_relative_eq!(on_pass(branching(100.0, 600.0, 90.0)), 0.036, max_relative = 1e-12);
        assert_relative_eq!(on_pass(branching(200.0, 600.0, 90.0)), -0.072, max_relative = 1e-9);
    }

    #[test]
    fn on_pass_outside_branching_regime() {
        assert_eq!(
            supply_on_pass(&area_conserving(45.0), &ResistanceConfig::default()),
            Ok(0.0)
        );
        assert!(matches!(
            supply_on_pass(&untabulated(), &ResistanceConfig::strict()),
            Err(ResistanceError::InvalidGeometry(GeometryError::Mismatch { .. }))
        ));
    }

    #[test]
    fn on_turn_branching() {
        let config = ResistanceConfig::default();

        assert_relative_eq!(
            supply_on_turn(&branching(150.0, 600.0, 90.0), &config).unwrap(),
            1.389_444_444_444_444_7,
            max_relative = 1e-9
        );
        assert_relative_eq!(
            supply_on_turn(&branching(150.0, 600.0, 45.0), &config).unwrap(),
            0.423_065_176_822_829_6,
            max_relative = 1e-9
        );
    }

    #[test]
    fn on_turn_area_conserving() {
        let config = ResistanceConfig::default();

        assert_relative_eq!(
            supply_on_turn(&area_conserving(45.0), &config).unwrap(),
            0.224_543_725_152_285_93,
            max_relative = 1e-9
        );
        assert_relative_eq!(
            supply_on_turn(&area_conserving(90.0), &config).unwrap(),
            1.0,
            max_relative = 1e-9
        );
    }

    #[test]
    fn on_turn_untabulated_angle_takes_unit_branch_coefficient() {
        assert_relative_eq!(
            supply_on_turn(&area_conserving(75.0), &ResistanceConfig::default()).unwrap(),
            0.378_834_291_753_950_2,
            max_relative = 1e-9
        );
    }

    #[test]
    fn on_turn_outside_both_regimes() {
        assert_eq!(
            supply_on_turn(&untabulated(), &ResistanceConfig::default()),
            Ok(0.0)
        );
        assert!(matches!(
            supply_on_turn(&untabulated(), &ResistanceConfig::strict()),
            Err(ResistanceError::InvalidGeometry(GeometryError::Mismatch { .. }))
        ));
    }
}
