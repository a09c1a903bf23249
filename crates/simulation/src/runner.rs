//! Progress-driven execution of a single simulated run.
//!
//! The sleep-and-report loop lives behind a callback so a CLI, a server
//! pushing progress over a socket, or a test harness can all drive the same
//! run without coupling to a UI runtime.

use crate::sampler;
use crate::scaling;
use fastfolio_domain::error::DomainError;
use fastfolio_domain::value_objects::outcome::OptimizationResult;
use fastfolio_domain::value_objects::request::OptimizationRequest;
use std::thread;
use std::time::{Duration, Instant};
use tracing::{debug, info};

/// Paced steps per run; one progress tick each, 1% to 100%.
pub const PROGRESS_STEPS: u32 = 100;

/// Whether a run blocks in real time or returns immediately.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Pacing {
    /// Sleep through the modeled duration, animating progress.
    #[default]
    RealTime,
    /// Skip the sleeps. Progress ticks still fire; for tests and callers
    /// that only want the figures.
    Instant,
}

/// Runs simulated optimizations, reporting progress through a callback.
#[derive(Debug, Clone, Copy, Default)]
pub struct SimulationRunner {
    pacing: Pacing,
}

impl SimulationRunner {
    #[must_use]
    pub fn new() -> Self {
        Self {
            pacing: Pacing::RealTime,
        }
    }

    #[must_use]
    pub fn with_pacing(mut self, pacing: Pacing) -> Self {
        self.pacing = pacing;
        self
    }

    /// Executes one run: paces through the modeled duration in
    /// [`PROGRESS_STEPS`] equal sleeps, reporting percent complete after
    /// each, then samples the fabricated outcome.
    ///
    /// Once started a run always completes its full step count; there is no
    /// cancellation.
    ///
    /// # Errors
    ///
    /// Only through the Sharpe guard; unreachable with the configured
    /// sampling ranges.
    pub fn run(
        &self,
        request: &OptimizationRequest,
        on_progress: &mut dyn FnMut(u8),
    ) -> Result<OptimizationResult, DomainError> {
        let theoretical = scaling::predicted_seconds(request.method, request.asset_count);
        let paced = scaling::paced_seconds(request.method, request.asset_count);
        let step = Duration::from_secs_f64(paced / f64::from(PROGRESS_STEPS));

        debug!(
            method = %request.method,
            assets = request.asset_count,
            theoretical,
            paced,
            "starting simulated run"
        );

        let started = Instant::now();
        for percent in 1..=PROGRESS_STEPS {
            if self.pacing == Pacing::RealTime {
                thread::sleep(step);
            }
            on_progress(percent as u8);
        }

        let outcome = sampler::sample(request.method, request.asset_count)?;
        let elapsed = started.elapsed().as_secs_f64();

        info!(
            method = %request.method,
            assets = request.asset_count,
            elapsed,
            "simulated run complete"
        );

        Ok(OptimizationResult {
            weights: outcome.weights,
            expected_return: outcome.expected_return,
            volatility: outcome.volatility,
            sharpe_ratio: outcome.sharpe_ratio,
            computation_time_seconds: elapsed,
            theoretical_time_seconds: theoretical,
        })
    }
}
