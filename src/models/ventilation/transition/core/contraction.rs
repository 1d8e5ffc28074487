use std::f64::consts::PI;

/// Local loss of a contraction.
///
/// `n` is `A_small/A_large` and `alpha` the included angle in degrees. The
/// same correlation holds for round, pyramidal and flat confusers:
///
/// ```text
/// ζ_local = (−0.0125n⁴ + 0.0224n³ − 0.00723n² + 0.00444n − 0.00745)·(a³ − 2πa² − 10a)
/// ```
///
/// with `a` the angle in radians.
pub(super) fn local_loss(n: f64, alpha: f64) -> f64 {
    let a = alpha.to_radians();
    let area_term = -0.0125 * n.powi(4) + 0.0224 * n.powi(3) - 0.00723 * n.powi(2)
        + 0.00444 * n
        - 0.00745;
    area_term * (a.powi(3) - 2.0 * PI * a.powi(2) - 10.0 * a)
}
