//! Supply and exhaust tee junctions.
//!
//! Each junction is a [`twine_core::Model`] that maps a [`TeeInput`] to the
//! resistance coefficient ζ of either the straight run (on-pass) or the side
//! branch (on-turn), referred to the collector velocity. The computational
//! core is in the internal [`core`] module.
//!
//! Tee coefficients depend on geometry and flow split only, so these models
//! need no fluid properties.
//!
//! # Example
//!
//! ```
//! use duct_resistance::{
//!     models::ventilation::tee::{TeeExhaustOnPass, TeeInput},
//!     support::geometry::CrossSection,
//! };
//! use twine_core::Model;
//! use uom::si::{
//!     angle::degree,
//!     f64::{Angle, Length, VolumeRate},
//!     length::millimeter,
//!     ratio::ratio,
//!     volume_rate::cubic_meter_per_hour,
//! };
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let round = |d| CrossSection::round(Length::new::<millimeter>(d));
//!
//! let zeta = TeeExhaustOnPass::default().call(&TeeInput {
//!     collector: round(250.0)?,
//!     branch: round(150.0)?,
//!     pass: round(220.0)?,
//!     collector_flow: VolumeRate::new::<cubic_meter_per_hour>(2000.0),
//!     branch_flow: VolumeRate::new::<cubic_meter_per_hour>(600.0),
//!     angle: Angle::new::<degree>(90.0),
//! })?;
//!
//! assert!((zeta.get::<ratio>() - 0.411).abs() < 1e-9);
//! # Ok(())
//! # }
//! ```

pub(crate) mod core;

pub use self::core::TeeInput;

use twine_core::Model;
use uom::si::{f64::Ratio, ratio::ratio};

use super::{ResistanceConfig, ResistanceError};

macro_rules! tee_model {
    ($(#[$meta:meta])* $name:ident, $evaluate:path) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, Default)]
        pub struct $name {
            config: ResistanceConfig,
        }

        impl $name {
            #[must_use]
            pub fn new(config: ResistanceConfig) -> Self {
                Self { config }
            }

            #[must_use]
            pub fn config(&self) -> &ResistanceConfig {
                &self.config
            }
        }

        impl Model for $name {
            type Input = TeeInput;
            type Output = Ratio;
            type Error = ResistanceError;

            fn call(&self, input: &Self::Input) -> Result<Self::Output, Self::Error> {
                $evaluate(input, &self.config).map(Ratio::new::<ratio>)
            }
        }
    };
}

tee_model!(
    /// Straight run of an exhaust tee, where the branch joins the main flow.
    TeeExhaustOnPass,
    self::core::exhaust_on_pass
);

tee_model!(
    /// Side branch of an exhaust tee.
    TeeExhaustOnTurn,
    self::core::exhaust_on_turn
);

tee_model!(
    /// Straight run of a supply tee, where the branch leaves the main flow.
    ///
    /// Tabulated for tees whose pass keeps the collector section.
    TeeSupplyOnPass,
    self::core::supply_on_pass
);

tee_model!(
    /// Side branch of a supply tee.
    ///
    /// Tabulated for tees whose pass keeps the collector section and for tees
    /// whose branch and pass split the collector section between them.
    TeeSupplyOnTurn,
    self::core::supply_on_turn
);
