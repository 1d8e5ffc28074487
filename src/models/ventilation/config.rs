use crate::support::geometry::GeometryError;

use super::ResistanceError;

/// How a fitting treats inputs the handbook does not cover.
///
/// Inverted transition sections and loss terms that come out negative or
/// non-finite are [`ResistanceError::InvalidGeometry`] in either mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Strictness {
    /// Uncovered inputs contribute nothing.
    ///
    /// A Φ lookup outside its table yields zero, and a supply tee whose
    /// sections fail the geometric precondition yields ζ = 0.
    #[default]
    Lenient,

    /// Uncovered inputs are errors.
    ///
    /// A Φ lookup outside its table raises
    /// [`ResistanceError::UnsupportedConfiguration`]. A supply tee outside
    /// its tabulated geometries raises [`ResistanceError::InvalidGeometry`].
    Strict,
}

/// Evaluation settings shared by every fitting model.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ResistanceConfig {
    /// Treatment of inputs outside the handbook tables and preconditions.
    pub strictness: Strictness,

    /// Relative tolerance used when comparing section areas.
    pub area_tolerance: f64,
}

impl Default for ResistanceConfig {
    fn default() -> Self {
        Self {
            strictness: Strictness::Lenient,
            area_tolerance: 1e-9,
        }
    }
}

impl ResistanceConfig {
    /// Returns a default configuration with [`Strictness::Strict`].
    #[must_use]
    pub fn strict() -> Self {
        Self {
            strictness: Strictness::Strict,
            ..Self::default()
        }
    }

    /// Resolves an optional tabulated coefficient.
    pub(crate) fn tabulated(
        &self,
        value: Option<f64>,
        context: impl FnOnce() -> String,
    ) -> Result<f64, ResistanceError> {
        match (value, self.strictness) {
            (Some(value), _) => Ok(value),
            (None, Strictness::Lenient) => Ok(0.0),
            (None, Strictness::Strict) => Err(ResistanceError::UnsupportedConfiguration {
                context: context(),
            }),
        }
    }

    /// Reports a geometric precondition that does not hold.
    ///
    /// Lenient evaluation carries on; strict evaluation fails.
    pub(crate) fn precondition_failed(
        &self,
        context: impl FnOnce() -> String,
    ) -> Result<(), ResistanceError> {
        match self.strictness {
            Strictness::Lenient => Ok(()),
            Strictness::Strict => Err(GeometryError::Mismatch { context: context() }.into()),
        }
    }

    /// Returns `true` if two area ratios agree within [`Self::area_tolerance`].
    pub(crate) fn areas_match(&self, a: f64, b: f64) -> bool {
        (a - b).abs() <= self.area_tolerance * a.abs().max(b.abs())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lenient_by_default() {
        let config = ResistanceConfig::default();
        assert_eq!(config.strictness, Strictness::Lenient);
        assert_eq!(config.tabulated(None, String::new), Ok(0.0));
        assert_eq!(config.precondition_failed(String::new), Ok(()));
    }

    #[test]
    fn strict_reports_missing_values() {
        let config = ResistanceConfig::strict();
        assert_eq!(config.tabulated(Some(0.45), String::new), Ok(0.45));
        assert!(matches!(
            config.tabulated(None, || "angle 190".to_string()),
            Err(ResistanceError::UnsupportedConfiguration { context }) if context == "angle 190"
        ));
        assert!(matches!(
            config.precondition_failed(|| "areas".to_string()),
            Err(ResistanceError::InvalidGeometry(GeometryError::Mismatch { .. }))
        ));
    }

    #[test]
    fn areas_match_within_relative_tolerance() {
        let config = ResistanceConfig::default();
        assert!(config.areas_match(1.0, 1.0 + 1e-12));
        assert!(config.areas_match(0.25 + 0.75, 1.0));
        assert!(!config.areas_match(1.0, 1.001));
    }
}
