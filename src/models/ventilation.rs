//! Ventilation duct fittings.
//!
//! Every model here evaluates the local resistance coefficient ζ of one
//! fitting. The pressure loss across the fitting is `Δp = ζ·ρ·v²/2`, where
//! `v` is the mean velocity in the fitting's reference section:
//!
//! - diffusers and confusers: the small section,
//! - tees: the collector.
//!
//! Transition fittings live in [`transition`], junctions in [`tee`].

mod config;
mod error;

pub mod tee;
pub mod transition;

#[cfg(test)]
mod test_support;

pub use config::{ResistanceConfig, Strictness};
pub use error::ResistanceError;
