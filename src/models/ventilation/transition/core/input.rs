use uom::si::f64::{Angle, Length, ThermodynamicTemperature, VolumeRate};

use crate::support::geometry::{Circle, Rectangle};

/// Flow through a transition fitting.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Conditions {
    /// Temperature of the conveyed medium.
    pub temperature: ThermodynamicTemperature,

    /// Equivalent absolute roughness of the duct walls.
    pub roughness: Length,

    /// Volumetric flow rate through the fitting.
    pub flow_rate: VolumeRate,
}

/// A round transition between two diameters.
///
/// Used by both the conical diffuser (flow from `small` to `large`) and the
/// conical confuser (flow from `large` to `small`). The fitting length follows
/// from the diameters and the included angle.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ConicalInput {
    pub conditions: Conditions,
    pub small: Circle,
    pub large: Circle,
    /// Full included angle of the cone.
    pub angle: Angle,
}

/// A rectangular diffuser expanding in both planes.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PyramidalDiffuserInput {
    pub conditions: Conditions,
    /// Inlet section.
    pub small: Rectangle,
    /// Outlet section.
    pub large: Rectangle,
    /// Axial length of the expansion.
    pub length: Length,
    /// Included angle in the plane of the width.
    pub width_angle: Angle,
    /// Included angle in the plane of the height.
    pub height_angle: Angle,
}

/// A rectangular confuser contracting in both planes.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PyramidalConfuserInput {
    pub conditions: Conditions,
    /// Inlet section.
    pub large: Rectangle,
    /// Outlet section.
    pub small: Rectangle,
    /// Included angle in the plane of the width.
    pub width_angle: Angle,
    /// Included angle in the plane of the height.
    pub height_angle: Angle,
}

/// A rectangular diffuser expanding in the plane of the width only.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FlatDiffuserInput {
    pub conditions: Conditions,
    /// Inlet section.
    pub small: Rectangle,
    /// Outlet section.
    pub large: Rectangle,
    /// Axial length of the expansion.
    pub length: Length,
    /// Included angle in the plane of the width.
    pub angle: Angle,
}

/// A rectangular confuser contracting in the plane of the width only.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FlatConfuserInput {
    pub conditions: Conditions,
    /// Inlet section.
    pub large: Rectangle,
    /// Outlet section.
    pub small: Rectangle,
    /// Included angle in the plane of the width.
    pub angle: Angle,
}
