//! Piecewise-constant lookup tables over ordered breakpoints.
//!
//! Handbook coefficients without a closed form are tabulated as steps: a
//! query selects the first breakpoint it does not exceed. A table may also
//! carry an explicit value for a query of exactly zero and a value for
//! queries past its last breakpoint.
//!
//! Two-axis tables are built by nesting: a [`StepTable`] whose values are
//! themselves tables (for example Reynolds-number bands, each holding an
//! angle table).
//!
//! Tables are defined over non-negative axes. A negative or `NaN` query
//! selects no step.
//!
//! ```
//! use duct_resistance::support::table::{Bound, StepTable};
//!
//! const BOUNDS: &[Bound] = &[Bound::AtMost(10.0), Bound::Below(20.0)];
//! const TABLE: StepTable<f64> = StepTable::new(Some(0.0), BOUNDS, &[1.0, 2.0], Some(3.0));
//!
//! assert_eq!(TABLE.lookup(0.0), Some(0.0));
//! assert_eq!(TABLE.lookup(10.0), Some(1.0));
//! assert_eq!(TABLE.lookup(19.9), Some(2.0));
//! assert_eq!(TABLE.lookup(20.0), Some(3.0));
//! assert_eq!(TABLE.lookup(-1.0), None);
//! ```

/// Upper bound of one step.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Bound {
    /// Admits queries `x ≤ bound`.
    AtMost(f64),
    /// Admits queries `x < bound`.
    Below(f64),
}

impl Bound {
    /// Returns `true` if the query falls on or below this bound.
    #[must_use]
    pub fn admits(self, x: f64) -> bool {
        match self {
            Self::AtMost(bound) => x <= bound,
            Self::Below(bound) => x < bound,
        }
    }
}

/// A step function defined by ordered bounds and one value per step.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StepTable<T: 'static> {
    zero: Option<T>,
    bounds: &'static [Bound],
    values: &'static [T],
    beyond: Option<T>,
}

impl<T: 'static> StepTable<T> {
    /// Creates a table.
    ///
    /// `zero` is returned for a query of exactly zero, ahead of the first
    /// step. `beyond` is returned for queries past the last bound; without it
    /// such queries select nothing.
    ///
    /// # Panics
    ///
    /// Panics if `bounds` and `values` differ in length. Tables are usually
    /// `const` items, so this surfaces at compile time.
    #[must_use]
    pub const fn new(
        zero: Option<T>,
        bounds: &'static [Bound],
        values: &'static [T],
        beyond: Option<T>,
    ) -> Self {
        assert!(
            bounds.len() == values.len(),
            "every bound needs exactly one value"
        );
        Self {
            zero,
            bounds,
            values,
            beyond,
        }
    }
}

impl<T: Copy + 'static> StepTable<T> {
    /// Returns the value of the step that admits `x`.
    ///
    /// Returns `None` for negative or `NaN` queries and for queries past the
    /// last bound when the table has no `beyond` value.
    #[must_use]
    pub fn lookup(&self, x: f64) -> Option<T> {
        if x.is_nan() || x < 0.0 {
            return None;
        }

        if x == 0.0 && self.zero.is_some() {
            return self.zero;
        }

        self.bounds
            .iter()
            .zip(self.values)
            .find(|(bound, _)| bound.admits(x))
            .map(|(_, value)| *value)
            .or(self.beyond)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const BANDS: &[Bound] = &[Bound::AtMost(5e4), Bound::Below(2e5)];
    const ANGLES: &[Bound] = &[Bound::AtMost(5.0), Bound::AtMost(30.0), Bound::AtMost(180.0)];

    const LOW: StepTable<f64> = StepTable::new(Some(0.0), ANGLES, &[0.1, 0.2, 0.3], None);
    const MID: StepTable<f64> = StepTable::new(Some(0.0), ANGLES, &[1.1, 1.2, 1.3], None);
    const HIGH: StepTable<f64> = StepTable::new(Some(0.0), ANGLES, &[2.1, 2.2, 2.3], None);
    const ROWS: &[StepTable<f64>] = &[LOW, MID];
    const TABLE: StepTable<StepTable<f64>> = StepTable::new(None, BANDS, ROWS, Some(HIGH));

    fn lookup(re: f64, angle: f64) -> Option<f64> {
        TABLE.lookup(re).and_then(|row| row.lookup(angle))
    }

    #[test]
    fn zero_has_its_own_branch() {
        assert_eq!(LOW.lookup(0.0), Some(0.0));
        assert_eq!(LOW.lookup(1e-9), Some(0.1));
    }

    #[test]
    fn closed_bounds_include_the_breakpoint() {
        assert_eq!(LOW.lookup(5.0), Some(0.1));
        assert_eq!(LOW.lookup(30.0), Some(0.2));
        assert_eq!(LOW.lookup(30.000_001), Some(0.3));
    }

    #[test]
    fn open_bounds_exclude_the_breakpoint() {
        assert_eq!(lookup(5e4, 10.0), Some(0.2));
        assert_eq!(lookup(1.999_99e5, 10.0), Some(1.2));
        assert_eq!(lookup(2e5, 10.0), Some(2.2));
    }

    #[test]
    fn outside_the_domain_selects_nothing() {
        assert_eq!(LOW.lookup(180.5), None);
        assert_eq!(LOW.lookup(-0.5), None);
        assert_eq!(LOW.lookup(f64::NAN), None);
        assert!(TABLE.lookup(-1.0).is_none());
    }

    #[test]
    fn total_and_deterministic_over_the_domain() {
        for step in 0..=1800 {
            let angle = f64::from(step) / 10.0;
            for re in [1e3, 5e4, 1e5, 2e5, 1e6] {
                let first = lookup(re, angle);
                assert!(first.is_some(), "no step for Re={re}, angle={angle}");
                assert_eq!(first, lookup(re, angle));
            }
        }
    }

    #[test]
    fn tables_without_bounds_are_uniform() {
        const UNIFORM: StepTable<f64> = StepTable::new(None, &[], &[], Some(0.4));
        assert_eq!(UNIFORM.lookup(0.0), Some(0.4));
        assert_eq!(UNIFORM.lookup(12.5), Some(0.4));
    }

    #[test]
    #[should_panic(expected = "every bound needs exactly one value")]
    fn mismatched_lengths_panic() {
        let _ = StepTable::new(None, ANGLES, &[1.0], None::<f64>);
    }
}
