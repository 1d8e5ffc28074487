use std::f64::consts::PI;

use uom::si::{
    f64::{Area, Length},
    ratio::ratio,
};

use crate::support::constraint::{Constrained, StrictlyPositive};

use super::GeometryError;

fn dimension(
    name: &'static str,
    value: Length,
) -> Result<Constrained<Length, StrictlyPositive>, GeometryError> {
    StrictlyPositive::new(value).map_err(|source| GeometryError::Dimension { name, source })
}

/// A round duct section.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Circle {
    diameter: Constrained<Length, StrictlyPositive>,
}

impl Circle {
    /// Creates a round section.
    ///
    /// # Errors
    ///
    /// Returns [`GeometryError::Dimension`] if the diameter is not strictly positive.
    pub fn new(diameter: Length) -> Result<Self, GeometryError> {
        Ok(Self {
            diameter: dimension("diameter", diameter)?,
        })
    }

    #[must_use]
    pub fn diameter(&self) -> Length {
        self.diameter.into_inner()
    }

    #[must_use]
    pub fn area(&self) -> Area {
        let d = self.diameter();
        PI * d * d / 4.0
    }

    #[must_use]
    pub fn perimeter(&self) -> Length {
        PI * self.diameter()
    }
}

/// A rectangular duct section.
///
/// Fittings that change only one side of a rectangle (flat transitions)
/// treat `width` as the changing side and `height` as the constant one.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rectangle {
    width: Constrained<Length, StrictlyPositive>,
    height: Constrained<Length, StrictlyPositive>,
}

impl Rectangle {
    /// Creates a rectangular section.
    ///
    /// # Errors
    ///
    /// Returns [`GeometryError::Dimension`] if either side is not strictly positive.
    pub fn new(width: Length, height: Length) -> Result<Self, GeometryError> {
        Ok(Self {
            width: dimension("width", width)?,
            height: dimension("height", height)?,
        })
    }

    #[must_use]
    pub fn width(&self) -> Length {
        self.width.into_inner()
    }

    #[must_use]
    pub fn height(&self) -> Length {
        self.height.into_inner()
    }

    #[must_use]
    pub fn area(&self) -> Area {
        self.width() * self.height()
    }

    #[must_use]
    pub fn perimeter(&self) -> Length {
        2.0 * (self.width() + self.height())
    }

    /// Returns `2·w·h/(w + h)`, the hydraulic diameter of the rectangle.
    #[must_use]
    pub fn hydraulic_diameter(&self) -> Length {
        let (w, h) = (self.width(), self.height());
        2.0 * w * h / (w + h)
    }

    /// Returns `width / height`.
    #[must_use]
    pub fn aspect_ratio(&self) -> f64 {
        (self.width() / self.height()).get::<ratio>()
    }
}

/// The shape of a duct section.
///
/// Every fitting formula works on areas and hydraulic diameters, so the
/// same fitting accepts any combination of round and rectangular sections.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum CrossSection {
    Round(Circle),
    Rectangular(Rectangle),
}

impl CrossSection {
    /// Creates a round section from its diameter.
    ///
    /// # Errors
    ///
    /// Returns [`GeometryError::Dimension`] if the diameter is not strictly positive.
    pub fn round(diameter: Length) -> Result<Self, GeometryError> {
        Circle::new(diameter).map(Self::Round)
    }

    /// Creates a rectangular section from its sides.
    ///
    /// # Errors
    ///
    /// Returns [`GeometryError::Dimension`] if either side is not strictly positive.
    pub fn rectangular(width: Length, height: Length) -> Result<Self, GeometryError> {
        Rectangle::new(width, height).map(Self::Rectangular)
    }

    #[must_use]
    pub fn area(&self) -> Area {
        match self {
            Self::Round(circle) => circle.area(),
            Self::Rectangular(rectangle) => rectangle.area(),
        }
    }

    #[must_use]
    pub fn perimeter(&self) -> Length {
        match self {
            Self::Round(circle) => circle.perimeter(),
            Self::Rectangular(rectangle) => rectangle.perimeter(),
        }
    }

    /// Returns the hydraulic diameter `4·A/P`.
    ///
    /// For a round section this is the diameter itself.
    #[must_use]
    pub fn hydraulic_diameter(&self) -> Length {
        match self {
            Self::Round(circle) => circle.diameter(),
            Self::Rectangular(rectangle) => rectangle.hydraulic_diameter(),
        }
    }
}

impl From<Circle> for CrossSection {
    fn from(circle: Circle) -> Self {
        Self::Round(circle)
    }
}

impl From<Rectangle> for CrossSection {
    fn from(rectangle: Rectangle) -> Self {
        Self::Rectangular(rectangle)
    }
}
