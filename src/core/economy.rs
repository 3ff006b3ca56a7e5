use crate::error::{EconomyError, Result};

/// Share of the production rate added to every click.
pub const CLICK_PRODUCTION_DIVISOR: f64 = 50.0;
/// Auto-click period at level 1, in seconds.
pub const AUTO_CLICK_BASE_PERIOD: f64 = 1.0;
/// Period reduction per auto-click level past the first.
pub const AUTO_CLICK_LEVEL_DECREMENT: f64 = 0.033;
/// Auto-click never fires faster than this.
pub const AUTO_CLICK_MIN_PERIOD: f64 = 0.05;
/// Longest single time step `advance` accepts (one week).
pub const MAX_DELTA_SECONDS: f64 = 7.0 * 24.0 * 60.0 * 60.0;
/// Slack on the due check, so rounding in summed short steps does not drop
/// a click that a single long step would fire.
const ACCUMULATOR_EPSILON: f64 = 1e-9;

/// What a single [`EconomyState::advance`] call did.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct TickReport {
    pub produced: f64,
    pub auto_clicks: u64,
}

impl TickReport {
    pub fn auto_clicked(&self) -> bool {
        self.auto_clicks > 0
    }
}

/// Resource, production and auto-click state of one game session.
///
/// Fields are only reachable through the operations below so that
/// `record_max` and `auto_click_period` can never drift from the values they
/// are derived from.
#[derive(Debug, Clone, PartialEq)]
pub struct EconomyState {
    resource: f64,
    production_rate: f64,
    record_max: f64,
    click_power: f64,
    auto_click_level: u32,
    auto_click_period: f64,
    auto_click_accumulator: f64,
    auto_click_fired: bool,
}

impl Default for EconomyState {
    fn default() -> Self {
        Self {
            resource: 0.0,
            production_rate: 0.0,
            record_max: 0.0,
            click_power: 1.0,
            auto_click_level: 0,
            auto_click_period: AUTO_CLICK_BASE_PERIOD,
            auto_click_accumulator: 0.0,
            auto_click_fired: false,
        }
    }
}

impl EconomyState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Starts a session with `resource` already banked. The record starts at
    /// the same value so it is never below the current resource.
    pub fn with_resource(resource: f64) -> Self {
        Self {
            resource,
            record_max: resource.max(0.0),
            ..Self::default()
        }
    }

    pub fn resource(&self) -> f64 {
        self.resource
    }

    pub fn production_rate(&self) -> f64 {
        self.production_rate
    }

    pub fn record_max(&self) -> f64 {
        self.record_max
    }

    pub fn click_power(&self) -> f64 {
        self.click_power
    }

    pub fn auto_click_level(&self) -> u32 {
        self.auto_click_level
    }

    pub fn auto_click_period(&self) -> f64 {
        self.auto_click_period
    }

    pub fn auto_click_accumulator(&self) -> f64 {
        self.auto_click_accumulator
    }

    pub fn auto_click_enabled(&self) -> bool {
        self.auto_click_level > 0
    }

    /// Resource gained by one click, manual or automatic.
    pub fn click_yield(&self) -> f64 {
        self.click_power + self.production_rate / CLICK_PRODUCTION_DIVISOR
    }

    pub fn click(&mut self) {
        self.resource += self.click_yield();
        self.update_record();
    }

    /// Advances production and the auto-click timer by `delta_seconds`.
    ///
    /// Every auto click that became due inside the step fires, so a long
    /// stall is caught up instead of dropping ticks. Steps longer than
    /// [`MAX_DELTA_SECONDS`] are rejected.
    pub fn advance(&mut self, delta_seconds: f64) -> Result<TickReport> {
        if !delta_seconds.is_finite() || delta_seconds < 0.0 {
            tracing::warn!(delta_seconds, "rejected time step");
            return Err(EconomyError::InvalidDelta(delta_seconds));
        }
        if delta_seconds > MAX_DELTA_SECONDS {
            tracing::warn!(delta_seconds, "rejected oversized time step");
            return Err(EconomyError::DeltaTooLarge {
                delta: delta_seconds,
                max: MAX_DELTA_SECONDS,
            });
        }

        let produced = self.production_rate * delta_seconds;
        self.resource += produced;
        self.update_record();

        let mut report = TickReport {
            produced,
            auto_clicks: 0,
        };
        if self.auto_click_level == 0 {
            return Ok(report);
        }

        self.auto_click_accumulator += delta_seconds;
        while self.auto_click_accumulator + ACCUMULATOR_EPSILON >= self.auto_click_period {
            self.click();
            self.auto_click_fired = true;
            self.auto_click_accumulator =
                (self.auto_click_accumulator - self.auto_click_period).max(0.0);
            report.auto_clicks += 1;
        }

        Ok(report)
    }

    pub fn level_up_auto_click(&mut self) {
        self.auto_click_level += 1;
        self.auto_click_period = auto_click_period_for_level(self.auto_click_level);
        tracing::debug!(
            level = self.auto_click_level,
            period = self.auto_click_period,
            "auto-click levelled up"
        );
    }

    pub fn increase_production(&mut self, amount: f64) {
        self.production_rate += amount;
    }

    pub fn increase_click_power(&mut self, amount: f64) {
        self.click_power += amount;
    }

    pub fn can_afford(&self, cost: f64) -> bool {
        self.resource >= cost
    }

    /// Deducts `amount` without any floor. Callers gate this with
    /// [`EconomyState::can_afford`]; misuse drives the resource negative.
    pub fn spend(&mut self, amount: f64) {
        self.resource -= amount;
    }

    /// Returns whether an auto click fired since the last call, and clears it.
    pub fn take_auto_click_fired(&mut self) -> bool {
        std::mem::take(&mut self.auto_click_fired)
    }

    fn update_record(&mut self) {
        if self.resource > self.record_max {
            self.record_max = self.resource;
        }
    }
}

/// Period for a given auto-click level, derived from the level alone.
/// Level 0 (disabled) reports the base period.
pub fn auto_click_period_for_level(level: u32) -> f64 {
    let steps = level.saturating_sub(1) as f64;
    (AUTO_CLICK_BASE_PERIOD - steps * AUTO_CLICK_LEVEL_DECREMENT).max(AUTO_CLICK_MIN_PERIOD)
}
