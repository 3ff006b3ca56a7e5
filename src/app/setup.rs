use std::time::Duration;

use anyhow::Result;
use bevy::prelude::*;
use pizza_economy::{EconomyState, Session, load_catalog, load_catalog_from_path};

use super::resources::{RuntimeConfig, SessionState};

pub fn bootstrap_session(config: &RuntimeConfig) -> Result<SessionState> {
    let catalog = match &config.catalog_path {
        Some(path) => load_catalog_from_path(path)?,
        None => load_catalog()?,
    };
    tracing::info!(upgrades = catalog.len(), "catalog ready");

    let session = Session::with_economy(EconomyState::with_resource(config.start_resource), catalog);

    let click_timer = (config.clicks_per_second > 0.0).then(|| {
        Timer::new(
            Duration::from_secs_f64(1.0 / config.clicks_per_second),
            TimerMode::Repeating,
        )
    });

    Ok(SessionState {
        session,
        tick_timer: Timer::new(
            Duration::from_secs_f64(config.tick_seconds),
            TimerMode::Repeating,
        ),
        click_timer,
        report_timer: Timer::new(
            Duration::from_secs_f64(config.report_interval_seconds),
            TimerMode::Repeating,
        ),
        auto_click_pulses: 0,
    })
}
