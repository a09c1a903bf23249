//! Scripted simulation core for the FastFolio demo.
//!
//! Nothing in this crate optimizes anything. Computation time comes from a
//! closed-form scaling model ([`scaling`]), portfolio outcomes from a random
//! sampler ([`sampler`]), and the [`runner`] ties the two together behind a
//! progress callback so any presentation layer can animate a run.

pub mod prelude;
pub mod runner;
pub mod sampler;
pub mod scaling;
pub mod weights;
