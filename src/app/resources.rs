use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use bevy::prelude::*;
use pizza_economy::{MAX_DELTA_SECONDS, Session, data::read_json};
use serde::Deserialize;

/// Shortest timer period the driver accepts, in seconds.
const MIN_TIMER_SECONDS: f64 = 0.001;
/// Fastest scripted click rate, per second.
const MAX_CLICKS_PER_SECOND: f64 = 1_000.0;

#[derive(Resource, Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct RuntimeConfig {
    /// Logical step handed to the economy, independent of frame jitter.
    pub tick_seconds: f64,
    /// Wall-clock pacing of the headless runner.
    pub frame_millis: u64,
    /// Simulated seconds before the run ends.
    pub run_seconds: f64,
    pub clicks_per_second: f64,
    pub start_resource: f64,
    pub report_interval_seconds: f64,
    pub catalog_path: Option<PathBuf>,
}

impl Default for RuntimeConfig {
    fn default() -> Self {
        Self {
            tick_seconds: 0.015,
            frame_millis: 15,
            run_seconds: 120.0,
            clicks_per_second: 6.0,
            start_resource: 900.0,
            report_interval_seconds: 10.0,
            catalog_path: None,
        }
    }
}

impl RuntimeConfig {
    pub fn load(path: &Path) -> Result<Self> {
        let config: Self = read_json(path, "runtime config")?;
        config
            .validate()
            .with_context(|| format!("invalid runtime config: {}", path.display()))?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        anyhow::ensure!(
            timer_seconds_in_range(self.tick_seconds),
            "tick_seconds must be between {MIN_TIMER_SECONDS} and {MAX_DELTA_SECONDS}, got {}",
            self.tick_seconds
        );
        anyhow::ensure!(self.frame_millis > 0, "frame_millis must be positive");
        anyhow::ensure!(
            self.run_seconds.is_finite() && self.run_seconds >= 0.0,
            "run_seconds must be non-negative, got {}",
            self.run_seconds
        );
        // Zero disables scripted clicks; anything else becomes a timer period.
        anyhow::ensure!(
            self.clicks_per_second == 0.0
                || (self.clicks_per_second >= 1.0 / MAX_DELTA_SECONDS
                    && self.clicks_per_second <= MAX_CLICKS_PER_SECOND),
            "clicks_per_second must be 0 or between {} and {MAX_CLICKS_PER_SECOND}, got {}",
            1.0 / MAX_DELTA_SECONDS,
            self.clicks_per_second
        );
        anyhow::ensure!(
            self.start_resource.is_finite() && self.start_resource >= 0.0,
            "start_resource must be non-negative, got {}",
            self.start_resource
        );
        anyhow::ensure!(
            timer_seconds_in_range(self.report_interval_seconds),
            "report_interval_seconds must be between {MIN_TIMER_SECONDS} and {MAX_DELTA_SECONDS}, got {}",
            self.report_interval_seconds
        );
        Ok(())
    }
}

fn timer_seconds_in_range(seconds: f64) -> bool {
    (MIN_TIMER_SECONDS..=MAX_DELTA_SECONDS).contains(&seconds)
}

#[derive(Resource, Debug)]
pub struct SessionState {
    pub session: Session,
    pub tick_timer: Timer,
    /// `None` when the scripted player does not click.
    pub click_timer: Option<Timer>,
    pub report_timer: Timer,
    pub auto_click_pulses: u64,
}
