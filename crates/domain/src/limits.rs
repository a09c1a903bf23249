//! Portfolio-size limits enforced by the interactive controls.
//!
//! The simulation core assumes asset counts are already inside these bounds;
//! validation happens at the presentation boundary only.

pub const MIN_ASSETS: u32 = 100;
pub const MAX_ASSETS: u32 = 1000;
pub const ASSET_STEP: u32 = 50;

/// Default selection; deltas in the UI are reported against this.
pub const BASELINE_ASSETS: u32 = 300;
