//! Duct cross-section geometry.
//!
//! All lengths are [`uom`] quantities, so millimetre or inch inputs are
//! converted to SI exactly once, at construction. Areas, hydraulic diameters
//! and the dimensionless ratios the fitting formulas need are derived from
//! validated [`CrossSection`] values and are therefore infallible.

mod cross_section;
mod error;

pub use cross_section::{Circle, CrossSection, Rectangle};
pub use error::GeometryError;

use uom::si::{
    angle::degree,
    f64::{Angle, Area, Length},
    ratio::ratio,
};

use crate::support::constraint::StrictlyPositive;

/// Returns the area of a round duct.
///
/// # Errors
///
/// Returns [`GeometryError::Dimension`] if the diameter is not strictly positive.
pub fn circle_area(diameter: Length) -> Result<Area, GeometryError> {
    Ok(Circle::new(diameter)?.area())
}

/// Returns the area of a rectangular duct.
///
/// # Errors
///
/// Returns [`GeometryError::Dimension`] if either side is not strictly positive.
pub fn rectangle_area(width: Length, height: Length) -> Result<Area, GeometryError> {
    Ok(Rectangle::new(width, height)?.area())
}

/// Returns the hydraulic diameter `4·A/P` of a cross-section.
#[must_use]
pub fn hydraulic_diameter(section: &CrossSection) -> Length {
    section.hydraulic_diameter()
}

/// Returns the equivalent diameter `2·w·h/(w + h)` of a rectangular duct.
///
/// # Errors
///
/// Returns [`GeometryError::Dimension`] if either side is not strictly positive.
pub fn equivalent_diameter(width: Length, height: Length) -> Result<Length, GeometryError> {
    Ok(Rectangle::new(width, height)?.hydraulic_diameter())
}

/// Returns the dimensionless ratio `numerator / denominator` of two areas.
#[must_use]
pub fn area_ratio(numerator: Area, denominator: Area) -> f64 {
    (numerator / denominator).get::<ratio>()
}

/// Validates a fitting angle and returns it in degrees.
///
/// # Errors
///
/// Returns [`GeometryError::Angle`] if the angle is zero, negative or `NaN`.
pub fn positive_angle(name: &'static str, angle: Angle) -> Result<f64, GeometryError> {
    StrictlyPositive::new(angle.get::<degree>())
        .map(|degrees| degrees.into_inner())
        .map_err(|source| GeometryError::Angle { name, source })
}

/// Validates a fitting length.
///
/// # Errors
///
/// Returns [`GeometryError::Dimension`] if the length is not strictly positive.
pub fn positive_length(name: &'static str, length: Length) -> Result<Length, GeometryError> {
    StrictlyPositive::new(length)
        .map(|length| length.into_inner())
        .map_err(|source| GeometryError::Dimension { name, source })
}
