//! # Duct Resistance
//!
//! Local resistance coefficients (ζ) of ventilation duct fittings, exposed as
//! [Twine](https://github.com/isentropic-dev/twine) models.
//!
//! Each fitting evaluates a dimensionless ζ that a duct-network solver
//! multiplies by the dynamic pressure of its reference section to obtain a
//! pressure loss.
//!
//! ## Crate layout
//!
//! - [`models`]: Fitting models implementing [`twine_core::Model`].
//! - [`support`]: Geometry, flow, lookup tables, fluid properties and other
//!   utilities used by the models.
//!
//! ## Utility code lifecycle
//!
//! Modules in [`support`] are part of the public API because they're useful,
//! but their APIs are not stable. Breaking changes may occur as needed.
//!
//! Code that only one fitting family needs stays in that family's internal
//! `core` module. It moves to [`support`] once a second family depends on it.

pub mod models;
pub mod support;
