//! Shock-completeness coefficient Φ of diffusers.
//!
//! Φ scales the Borda–Carnot loss of an abrupt expansion down to the loss of
//! a gradual one. It is tabulated against the included angle (degrees) in
//! three Reynolds-number bands. Conical and flat diffusers share one table;
//! pyramidal diffusers have their own, whose middle band is open at
//! `Re = 2·10⁵`.

use crate::support::table::{Bound, StepTable};

const ANGLES: &[Bound] = &[
    Bound::AtMost(5.0),
    Bound::AtMost(10.0),
    Bound::AtMost(15.0),
    Bound::AtMost(20.0),
    Bound::AtMost(25.0),
    Bound::AtMost(30.0),
    Bound::AtMost(40.0),
    Bound::AtMost(45.0),
    Bound::AtMost(50.0),
    Bound::AtMost(60.0),
    Bound::AtMost(80.0),
    Bound::AtMost(140.0),
    Bound::AtMost(180.0),
];

const fn by_angle(values: &'static [f64]) -> StepTable<f64> {
    StepTable::new(Some(0.0), ANGLES, values, None)
}

const CONICAL_LOW: StepTable<f64> = by_angle(&[
    0.12, 0.26, 0.35, 0.45, 0.58, 0.75, 0.90, 0.95, 0.98, 1.00, 1.02, 1.00, 1.00,
]);
const CONICAL_MID: StepTable<f64> = by_angle(&[
    0.08, 0.15, 0.24, 0.32, 0.43, 0.60, 0.82, 0.88, 0.93, 0.95, 0.95, 0.97, 0.99,
]);
const CONICAL_HIGH: StepTable<f64> = by_angle(&[
    0.04, 0.09, 0.18, 0.25, 0.37, 0.52, 0.77, 0.82, 0.88, 0.91, 0.95, 0.97, 0.98,
]);

const CONICAL_BANDS: &[Bound] = &[Bound::AtMost(5e4), Bound::AtMost(2e5)];
const CONICAL_ROWS: &[StepTable<f64>] = &[CONICAL_LOW, CONICAL_MID];

/// Φ of conical and flat diffusers.
const CONICAL: StepTable<StepTable<f64>> =
    StepTable::new(None, CONICAL_BANDS, CONICAL_ROWS, Some(CONICAL_HIGH));

const PYRAMIDAL_MODERATE: StepTable<f64> = by_angle(&[
    0.10, 0.20, 0.28, 0.36, 0.48, 0.60, 0.84, 0.89, 0.97, 1.04, 1.10, 1.09, 1.06,
]);
const PYRAMIDAL_HIGH: StepTable<f64> = by_angle(&[
    0.05, 0.12, 0.23, 0.30, 0.45, 0.60, 0.84, 0.89, 0.97, 1.04, 1.10, 1.09, 1.06,
]);

const PYRAMIDAL_BANDS: &[Bound] = &[Bound::AtMost(5e4), Bound::Below(2e5)];
const PYRAMIDAL_ROWS: &[StepTable<f64>] = &[PYRAMIDAL_MODERATE, PYRAMIDAL_MODERATE];

/// Φ of pyramidal diffusers.
const PYRAMIDAL: StepTable<StepTable<f64>> =
    StepTable::new(None, PYRAMIDAL_BANDS, PYRAMIDAL_ROWS, Some(PYRAMIDAL_HIGH));

/// Returns Φ of a conical or flat diffuser, or `None` outside `[0°, 180°]`.
pub(super) fn conical(reynolds: f64, alpha: f64) -> Option<f64> {
    CONICAL.lookup(reynolds).and_then(|row| row.lookup(alpha))
}

/// Returns Φ of a pyramidal diffuser, or `None` outside `[0°, 180°]`.
pub(super) fn pyramidal(reynolds: f64, alpha: f64) -> Option<f64> {
    PYRAMIDAL.lookup(reynolds).and_then(|row| row.lookup(alpha))
}
