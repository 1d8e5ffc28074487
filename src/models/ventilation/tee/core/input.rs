use uom::si::f64::{Angle, VolumeRate};

use crate::support::geometry::CrossSection;

/// A three-way junction between a collector, a branch and a straight pass.
///
/// The collector carries the total flow. In a supply tee it splits into the
/// branch and the pass; in an exhaust tee the branch and the pass merge into
/// it. Any mix of round and rectangular sections is accepted.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TeeInput {
    /// Section carrying the combined flow.
    pub collector: CrossSection,
    /// Section of the side branch.
    pub branch: CrossSection,
    /// Section of the straight run opposite the collector.
    pub pass: CrossSection,
    /// Flow rate through the collector.
    pub collector_flow: VolumeRate,
    /// Flow rate through the branch, at most [`Self::collector_flow`].
    pub branch_flow: VolumeRate,
    /// Angle between the branch and the collector axis.
    pub angle: Angle,
}
