//! Tabulated tee coefficients.
//!
//! Each coefficient is chosen by the branch area ratio `A_b/A_c` first and
//! the branch flow share `q` second, and within a cell is linear in `q`.

use crate::support::table::{Bound, StepTable};

/// `intercept + slope·q`
#[derive(Debug, Clone, Copy, PartialEq)]
pub(super) struct Linear {
    intercept: f64,
    slope: f64,
}

impl Linear {
    const fn new(intercept: f64, slope: f64) -> Self {
        Self { intercept, slope }
    }

    const fn constant(value: f64) -> Self {
        Self::new(value, 0.0)
    }

    fn at(self, q: f64) -> f64 {
        self.intercept + self.slope * q
    }
}

type ByShare = StepTable<Linear>;
type ByAreaAndShare = StepTable<ByShare>;

const fn uniform(value: Linear) -> ByShare {
    StepTable::new(None, &[], &[], Some(value))
}

fn lookup(table: &ByAreaAndShare, area_ratio: f64, q: f64) -> Option<f64> {
    table
        .lookup(area_ratio)
        .and_then(|row| row.lookup(q))
        .map(|cell| cell.at(q))
}

const AT_MOST_0_35: &[Bound] = &[Bound::AtMost(0.35)];
const AT_MOST_0_4: &[Bound] = &[Bound::AtMost(0.4)];
const AT_MOST_0_5: &[Bound] = &[Bound::AtMost(0.5)];
const AT_MOST_0_6: &[Bound] = &[Bound::AtMost(0.6)];

const EXHAUST_PASS_SMALL: ByShare = uniform(Linear::new(0.0, 0.8));
const EXHAUST_PASS_LARGE_CELLS: &[Linear] = &[Linear::constant(0.5)];
const EXHAUST_PASS_LARGE: ByShare = StepTable::new(
    None,
    AT_MOST_0_6,
    EXHAUST_PASS_LARGE_CELLS,
    Some(Linear::new(0.0, 0.8)),
);
const EXHAUST_PASS_ROWS: &[ByShare] = &[EXHAUST_PASS_SMALL];

/// `K` of an exhaust tee on the pass.
const EXHAUST_PASS: ByAreaAndShare = StepTable::new(
    None,
    AT_MOST_0_35,
    EXHAUST_PASS_ROWS,
    Some(EXHAUST_PASS_LARGE),
);

const EXHAUST_TURN_SMALL: ByShare = uniform(Linear::constant(1.0));
const EXHAUST_TURN_LARGE_CELLS: &[Linear] = &[Linear::new(0.9, -0.9)];
const EXHAUST_TURN_LARGE: ByShare = StepTable::new(
    None,
    AT_MOST_0_4,
    EXHAUST_TURN_LARGE_CELLS,
    Some(Linear::constant(0.55)),
);
const EXHAUST_TURN_ROWS: &[ByShare] = &[EXHAUST_TURN_SMALL];

/// `A` of an exhaust tee on the turn.
const EXHAUST_TURN: ByAreaAndShare = StepTable::new(
    None,
    AT_MOST_0_35,
    EXHAUST_TURN_ROWS,
    Some(EXHAUST_TURN_LARGE),
);

const SUPPLY_PASS_SMALL: ByShare = uniform(Linear::constant(0.4));
const SUPPLY_PASS_LARGE_CELLS: &[Linear] = &[Linear::new(-2.0, 4.0)];
const SUPPLY_PASS_LARGE: ByShare = StepTable::new(
    None,
    AT_MOST_0_5,
    SUPPLY_PASS_LARGE_CELLS,
    Some(Linear::new(-0.3, 0.6)),
);
const SUPPLY_PASS_ROWS: &[ByShare] = &[SUPPLY_PASS_SMALL];

/// `τ` of a supply tee on the pass.
const SUPPLY_PASS: ByAreaAndShare = StepTable::new(
    None,
    AT_MOST_0_4,
    SUPPLY_PASS_ROWS,
    Some(SUPPLY_PASS_LARGE),
);

const SUPPLY_TURN_SMALL_CELLS: &[Linear] = &[Linear::new(1.1, -0.7)];
const SUPPLY_TURN_SMALL: ByShare = StepTable::new(
    None,
    AT_MOST_0_4,
    SUPPLY_TURN_SMALL_CELLS,
    Some(Linear::constant(0.85)),
);
const SUPPLY_TURN_LARGE_CELLS: &[Linear] = &[Linear::new(1.0, -0.6)];
const SUPPLY_TURN_LARGE: ByShare = StepTable::new(
    None,
    AT_MOST_0_6,
    SUPPLY_TURN_LARGE_CELLS,
    Some(Linear::constant(0.6)),
);
const SUPPLY_TURN_ROWS: &[ByShare] = &[SUPPLY_TURN_SMALL];

/// `A` of a branching supply tee on the turn.
const SUPPLY_TURN: ByAreaAndShare = StepTable::new(
    None,
    AT_MOST_0_35,
    SUPPLY_TURN_ROWS,
    Some(SUPPLY_TURN_LARGE),
);

/// Branch-angle coefficient `K_b` of an area-conserving supply tee.
const BRANCH_ANGLE: [(f64, f64); 5] = [
    (15.0, 0.04),
    (30.0, 0.16),
    (45.0, 0.36),
    (60.0, 0.64),
    (90.0, 1.0),
];

const ANGLE_TOLERANCE: f64 = 1e-9;

pub(super) fn exhaust_pass(area_ratio: f64, q: f64) -> Option<f64> {
    lookup(&EXHAUST_PASS, area_ratio, q)
}

pub(super) fn exhaust_turn(area_ratio: f64, q: f64) -> Option<f64> {
    lookup(&EXHAUST_TURN, area_ratio, q)
}

pub(super) fn supply_pass(area_ratio: f64, q: f64) -> Option<f64> {
    lookup(&SUPPLY_PASS, area_ratio, q)
}

pub(super) fn supply_turn(area_ratio: f64, q: f64) -> Option<f64> {
    lookup(&SUPPLY_TURN, area_ratio, q)
}

/// Returns `K_b` for a branch angle in degrees.
///
/// Only the five handbook angles are tabulated; every other angle takes the
/// 90° value of 1.
pub(super) fn branch_angle(angle: f64) -> f64 {
    BRANCH_ANGLE
        .iter()
        .find(|(tabulated, _)| (angle - tabulated).abs() <= ANGLE_TOLERANCE)
        .map_or(1.0, |&(_, value)| value)
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;

    #[test]
    fn exhaust_pass_coefficient() {
        assert_relative_eq!(exhaust_pass(0.2, 0.3).unwrap(), 0.24, max_relative = 1e-12);
        assert_relative_eq!(exhaust_pass(0.35, 0.9).unwrap(), 0.72, max_relative = 1e-12);
        assert_relative_eq!(exhaust_pass(0.36, 0.6).unwrap(), 0.5);
        assert_relative_eq!(exhaust_pass(0.36, 0.7).unwrap(), 0.56, max_relative = 1e-12);
    }

    #[test]
    fn exhaust_turn_coefficient() {
        assert_relative_eq!(exhaust_turn(0.35, 0.9).unwrap(), 1.0);
        assert_relative_eq!(exhaust_turn(0.5, 0.4).unwrap(), 0.54, max_relative = 1e-12);
        assert_relative_eq!(exhaust_turn(0.5, 0.41).unwrap(), 0.55);
    }

    #[test]
    fn supply_pass_coefficient() {
        assert_relative_eq!(supply_pass(0.4, 0.8).unwrap(), 0.4);
        assert_relative_eq!(supply_pass(0.64, 0.3).unwrap(), -0.8, max_relative = 1e-12);
        assert_relative_eq!(supply_pass(0.64, 0.5).unwrap(), 0.0, epsilon = 1e-15);
        assert_relative_eq!(supply_pass(0.64, 0.8).unwrap(), 0.18, max_relative = 1e-12);
    }

    #[test]
    fn supply_turn_coefficient() {
        assert_relative_eq!(supply_turn(0.2, 0.4).unwrap(), 0.82, max_relative = 1e-12);
        assert_relative_eq!(supply_turn(0.2, 0.5).unwrap(), 0.85);
        assert_relative_eq!(supply_turn(0.36, 0.6).unwrap(), 0.64, max_relative = 1e-12);
        assert_relative_eq!(supply_turn(0.36, 0.61).unwrap(), 0.6);
    }

    #[test]
    fn tables_cover_every_valid_junction() {
        for ratio in [0.05, 0.35, 0.4, 1.0, 2.5] {
            for hundredth in 0..=100 {
                let q = f64::from(hundredth) / 100.0;
                assert!(exhaust_pass(ratio, q).is_some());
                assert!(exhaust_turn(ratio, q).is_some());
                assert!(supply_pass(ratio, q).is_some());
                assert!(supply_turn(ratio, q).is_some());
            }
        }
    }

    #[test]
    fn branch_angle_coefficient() {
        assert_relative_eq!(branch_angle(45.0), 0.36);
        assert_relative_eq!(branch_angle(45.000_000_000_01), 0.36);
        assert_relative_eq!(branch_angle(15.0), 0.04);
        assert_relative_eq!(branch_angle(75.0), 1.0);
        assert_relative_eq!(branch_angle(90.0), 1.0);
    }
}
