//! Prelude module for convenient imports.
//!
//! # Example
//!
//! ```rust
//! use fastfolio_simulation::prelude::*;
//! ```

// Runner
pub use crate::runner::{PROGRESS_STEPS, Pacing, SimulationRunner};

// Outcome sampling
pub use crate::sampler::{Band, OutcomeRanges, PortfolioOutcome, sample, sample_with};

// Scaling model
pub use crate::scaling::{PACED_RUNTIME_CAP_SECONDS, paced_seconds, predicted_seconds};

// Weight sampling
pub use crate::weights::{concentration, sample_weights};
