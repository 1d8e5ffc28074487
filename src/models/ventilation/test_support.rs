use uom::si::{
    angle::degree,
    f64::{Angle, Length, ThermodynamicTemperature, VolumeRate},
    length::millimeter,
    thermodynamic_temperature::degree_celsius,
    volume_rate::cubic_meter_per_hour,
};

use crate::support::{
    geometry::{Circle, CrossSection, Rectangle},
    thermo::{fluid::Air, model::Sutherland},
};

use super::transition::Conditions;

/// Included angles (degrees) covering every Φ step up to a straight angle.
pub(crate) const SWEEP_ANGLES: [f64; 14] = [
    3.0, 8.0, 12.0, 18.0, 22.0, 28.0, 35.0, 42.0, 48.0, 55.0, 70.0, 100.0, 160.0, 180.0,
];

/// Flow rates (m³/h) putting a 200 mm wide inlet in each Reynolds band.
pub(crate) const SWEEP_FLOWS: [f64; 3] = [300.0, 1000.0, 3000.0];

/// Large-to-small area ratios.
pub(crate) const SWEEP_AREA_RATIOS: [f64; 4] = [1.1, 1.5, 2.25, 4.0];

pub(crate) fn air() -> Sutherland<Air> {
    Sutherland::<Air>::new().unwrap()
}

pub(crate) fn mm(value: f64) -> Length {
    Length::new::<millimeter>(value)
}

pub(crate) fn degrees(value: f64) -> Angle {
    Angle::new::<degree>(value)
}

pub(crate) fn m3h(value: f64) -> VolumeRate {
    VolumeRate::new::<cubic_meter_per_hour>(value)
}

/// Air at 20 °C through ducts with 0.1 mm equivalent roughness.
pub(crate) fn conditions(flow_m3h: f64) -> Conditions {
    Conditions {
        temperature: ThermodynamicTemperature::new::<degree_celsius>(20.0),
        roughness: mm(0.1),
        flow_rate: m3h(flow_m3h),
    }
}

pub(crate) fn circle(diameter_mm: f64) -> Circle {
    Circle::new(mm(diameter_mm)).unwrap()
}

pub(crate) fn rectangle(width_mm: f64, height_mm: f64) -> Rectangle {
    Rectangle::new(mm(width_mm), mm(height_mm)).unwrap()
}

pub(crate) fn round(diameter_mm: f64) -> CrossSection {
    CrossSection::round(mm(diameter_mm)).unwrap()
}

pub(crate) fn rectangular(width_mm: f64, height_mm: f64) -> CrossSection {
    CrossSection::rectangular(mm(width_mm), mm(height_mm)).unwrap()
}
