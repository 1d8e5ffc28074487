//! Tee-junction resistance.
//!
//! Every tee formula is written in terms of a handful of dimensionless
//! groups, collected in [`Junction`]:
//!
//! ```text
//! q     = Q_b/Q_c          branch share of the flow
//! A_b/A_c, A_p/A_c         branch and pass area ratios
//! v_b/v_c = q/(A_b/A_c)
//! v_p/v_c = (1 − q)/(A_p/A_c)
//! ```
//!
//! ζ refers to the collector velocity and may be negative: a fast stream
//! can entrain a slow one and hand it energy.

mod coefficient;
mod exhaust;
mod input;
mod supply;

pub use input::TeeInput;

pub(crate) use exhaust::{exhaust_on_pass, exhaust_on_turn};
pub(crate) use supply::{supply_on_pass, supply_on_turn};

use uom::si::{ratio::ratio, volume_rate::cubic_meter_per_hour};

use crate::{
    models::ventilation::ResistanceError,
    support::{
        constraint::{NonNegative, StrictlyPositive},
        flow::FlowError,
        geometry::{area_ratio, positive_angle},
    },
};

/// Dimensionless state of a tee.
#[derive(Debug, Clone, Copy, PartialEq)]
struct Junction {
    /// Branch angle in degrees.
    angle: f64,
    flow_share: f64,
    branch_area_ratio: f64,
    pass_area_ratio: f64,
}

impl Junction {
    fn new(input: &TeeInput) -> Result<Self, ResistanceError> {
        let angle = positive_angle("branch angle", input.angle)?;

        let collector_flow = StrictlyPositive::new(input.collector_flow)
            .map_err(|source| FlowError::FlowRate {
                name: "collector flow",
                source,
            })?
            .into_inner();
        let branch_flow = NonNegative::new(input.branch_flow)
            .map_err(|source| FlowError::FlowRate {
                name: "branch flow",
                source,
            })?
            .into_inner();
        if branch_flow > collector_flow {
            return Err(FlowError::Split {
                context: format!(
                    "branch flow {:.1} m³/h exceeds collector flow {:.1} m³/h",
                    branch_flow.get::<cubic_meter_per_hour>(),
                    collector_flow.get::<cubic_meter_per_hour>(),
                ),
            }
            .into());
        }

        let collector_area = input.collector.area();
        Ok(Self {
            angle,
            flow_share: (branch_flow / collector_flow).get::<ratio>(),
            branch_area_ratio: area_ratio(input.branch.area(), collector_area),
            pass_area_ratio: area_ratio(input.pass.area(), collector_area),
        })
    }

    /// `v_b/v_c`
    fn branch_velocity_ratio(&self) -> f64 {
        self.flow_share / self.branch_area_ratio
    }

    /// `v_p/v_c`
    fn pass_velocity_ratio(&self) -> f64 {
        (1.0 - self.flow_share) / self.pass_area_ratio
    }

    fn sin(&self) -> f64 {
        self.angle.to_radians().sin()
    }

    fn cos(&self) -> f64 {
        self.angle.to_radians().cos()
    }
}
