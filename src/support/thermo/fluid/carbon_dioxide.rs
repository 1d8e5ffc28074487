use uom::si::{
    dynamic_viscosity::pascal_second,
    f64::{DynamicViscosity, TemperatureInterval, ThermodynamicTemperature},
    specific_heat_capacity::joule_per_kilogram_kelvin,
    temperature_interval, thermodynamic_temperature,
};

use crate::support::thermo::model::{SpecificGasConstant, SutherlandFluid, SutherlandParameters};

/// Canonical identifier for carbon dioxide.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CarbonDioxide;

impl SutherlandFluid for CarbonDioxide {
    fn parameters() -> SutherlandParameters {
        SutherlandParameters {
            gas_constant: SpecificGasConstant::new::<joule_per_kilogram_kelvin>(188.924),
            reference_viscosity: DynamicViscosity::new::<pascal_second>(1.370e-5),
            reference_temperature: ThermodynamicTemperature::new::<
                thermodynamic_temperature::kelvin,
            >(273.15),
            sutherland_constant: TemperatureInterval::new::<temperature_interval::kelvin>(222.0),
        }
    }
}
