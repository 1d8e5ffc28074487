use crate::models::ventilation::{ResistanceConfig, ResistanceError};

use super::{Junction, TeeInput, coefficient};

/// ζ of the straight run of an exhaust tee.
///
/// ```text
/// ζ = 1 − (1 − q)² − (1.4 − q)·q²·sin θ − 2K·(A_c/A_b)·q·cos θ
/// ```
pub(crate) fn exhaust_on_pass(
    input: &TeeInput,
    config: &ResistanceConfig,
) -> Result<f64, ResistanceError> {
    let junction = Junction::new(input)?;
    let q = junction.flow_share;
    let k = config.tabulated(
        coefficient::exhaust_pass(junction.branch_area_ratio, q),
        || missing("K", &junction),
    )?;

    Ok(1.0
        - (1.0 - q).powi(2)
        - (1.4 - q) * q.powi(2) * junction.sin()
        - 2.0 * k * q * junction.cos() / junction.branch_area_ratio)
}

/// ζ of the branch of an exhaust tee.
///
/// ```text
/// ζ = A·(1 + (v_b/v_c)² − 2(A_p/A_c)(v_p/v_c)² − 2(A_b/A_c)(v_b/v_c)²·cos θ)
/// ```
pub(crate) fn exhaust_on_turn(
    input: &TeeInput,
    config: &ResistanceConfig,
) -> Result<f64, ResistanceError> {
    let junction = Junction::new(input)?;
    let a = config.tabulated(
        coefficient::exhaust_turn(junction.branch_area_ratio, junction.flow_share),
        || missing("A", &junction),
    )?;

    let branch = junction.branch_velocity_ratio().powi(2);
    let pass = junction.pass_velocity_ratio().powi(2);
    Ok(a
        * (1.0 + branch
            - 2.0 * junction.pass_area_ratio * pass
            - 2.0 * junction.branch_area_ratio * branch * junction.cos()))
}

fn missing(name: &str, junction: &Junction) -> String {
    format!(
        "no exhaust tee {name} for A_b/A_c = {:.3}, q = {:.3}",
        junction.branch_area_ratio, junction.flow_share
    )
}
