//! Diffusers and confusers.
//!
//! Each fitting is a [`twine_core::Model`] whose input describes the geometry
//! and flow and whose output is the resistance coefficient ζ referred to the
//! velocity in the small section. The computational core is in the internal
//! [`core`] module.
//!
//! # Example
//!
//! ```
//! use duct_resistance::{
//!     models::ventilation::transition::{Conditions, ConicalDiffuser, ConicalInput},
//!     support::{
//!         geometry::Circle,
//!         thermo::{fluid::Air, model::Sutherland},
//!     },
//! };
//! use twine_core::Model;
//! use uom::si::{
//!     angle::degree,
//!     f64::{Angle, Length, ThermodynamicTemperature, VolumeRate},
//!     length::millimeter,
//!     ratio::ratio,
//!     thermodynamic_temperature::degree_celsius,
//!     volume_rate::cubic_meter_per_hour,
//! };
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let diffuser = ConicalDiffuser::new(Sutherland::<Air>::new()?);
//!
//! let zeta = diffuser.call(&ConicalInput {
//!     conditions: Conditions {
//!         temperature: ThermodynamicTemperature::new::<degree_celsius>(20.0),
//!         roughness: Length::new::<millimeter>(0.1),
//!         flow_rate: VolumeRate::new::<cubic_meter_per_hour>(1000.0),
//!     },
//!     small: Circle::new(Length::new::<millimeter>(200.0))?,
//!     large: Circle::new(Length::new::<millimeter>(300.0))?,
//!     angle: Angle::new::<degree>(20.0),
//! })?;
//!
//! assert!((zeta.get::<ratio>() - 0.2656).abs() < 1e-4);
//! # Ok(())
//! # }
//! ```

pub(crate) mod core;

pub use self::core::{
    Conditions, ConicalInput, FlatConfuserInput, FlatDiffuserInput, PyramidalConfuserInput,
    PyramidalDiffuserInput,
};

use twine_core::Model;
use uom::si::{f64::Ratio, ratio::ratio};

use crate::support::thermo::TransportProperties;

use super::{ResistanceConfig, ResistanceError};

macro_rules! transition_model {
    ($(#[$meta:meta])* $name:ident, $input:ty, $evaluate:path) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy)]
        pub struct $name<Fluid> {
            fluid: Fluid,
            config: ResistanceConfig,
        }

        impl<Fluid> $name<Fluid> {
            /// Creates the model with the default [`ResistanceConfig`].
            #[must_use]
            pub fn new(fluid: Fluid) -> Self {
                Self::with_config(fluid, ResistanceConfig::default())
            }

            #[must_use]
            pub fn with_config(fluid: Fluid, config: ResistanceConfig) -> Self {
                Self { fluid, config }
            }

            #[must_use]
            pub fn config(&self) -> &ResistanceConfig {
                &self.config
            }
        }

        impl<Fluid: TransportProperties> Model for $name<Fluid> {
            type Input = $input;
            type Output = Ratio;
            type Error = ResistanceError;

            fn call(&self, input: &Self::Input) -> Result<Self::Output, Self::Error> {
                $evaluate(&self.fluid, input, &self.config)
                    .map(|loss| Ratio::new::<ratio>(loss.total()))
            }
        }
    };
}

transition_model!(
    /// Round diffuser, flow from the small to the large diameter.
    ///
    /// The fitting length follows from the diameters and the included angle.
    ConicalDiffuser,
    ConicalInput,
    self::core::conical_diffuser
);

transition_model!(
    /// Round confuser, flow from the large to the small diameter.
    ConicalConfuser,
    ConicalInput,
    self::core::conical_confuser
);

transition_model!(
    /// Rectangular diffuser expanding in both planes.
    PyramidalDiffuser,
    PyramidalDiffuserInput,
    self::core::pyramidal_diffuser
);

transition_model!(
    /// Rectangular confuser contracting in both planes.
    PyramidalConfuser,
    PyramidalConfuserInput,
    self::core::pyramidal_confuser
);

transition_model!(
    /// Rectangular diffuser expanding in the plane of the width only.
    FlatDiffuser,
    FlatDiffuserInput,
    self::core::flat_diffuser
);

transition_model!(
    /// Rectangular confuser contracting in the plane of the width only.
    FlatConfuser,
    FlatConfuserInput,
    self::core::flat_confuser
);
