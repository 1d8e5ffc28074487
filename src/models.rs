//! Public Twine models.
//!
//! Models are the primary public interface of this crate.
//!
//! # Organization
//!
//! Models are grouped by engineering domain. [`ventilation`] holds the duct
//! fittings of air distribution networks.
//!
//! # Model structure
//!
//! Each model family lives in its own module and contains an internal `core`
//! submodule where the actual computation and domain logic lives. The `core`
//! module is an implementation detail and is **not** re-exported as part of
//! the public API.
//!
//! The [`twine_core::Model`] implementations are thin adapters that delegate
//! to the family's core API. A single `core` is exposed through several
//! adapters, one per fitting.

pub mod ventilation;
