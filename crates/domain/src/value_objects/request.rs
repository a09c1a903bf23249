use crate::enums::OptimizationMethod;
use serde::{Deserialize, Serialize};

/// One user-triggered optimization run. Created fresh per run and discarded
/// with it; the asset count is assumed already validated by the caller.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct OptimizationRequest {
    pub method: OptimizationMethod,
    pub asset_count: u32,
}

impl OptimizationRequest {
    #[must_use]
    pub fn new(method: OptimizationMethod, asset_count: u32) -> Self {
        Self {
            method,
            asset_count,
        }
    }
}
