//! Software size estimation
//!
//! Houses the basic COCOMO model used by the `cocomo` binary.

pub mod cocomo;

pub use cocomo::{estimate, Coefficients, Estimate, ProjectMode};
