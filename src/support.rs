//! Supporting utilities shared by the fitting models.

pub mod constraint;
pub mod flow;
pub mod geometry;
pub mod table;
pub mod thermo;
