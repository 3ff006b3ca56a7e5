use bevy::prelude::*;
use pizza_economy::{UpgradeStatus, abbreviate, status_line};

use super::resources::SessionState;

/// Consumes the auto-click flag once per frame, so a burst of catch-up
/// clicks yields a single pulse.
pub fn pulse_auto_click(mut state: ResMut<SessionState>) {
    if state.session.take_auto_click_fired() {
        state.auto_click_pulses += 1;
        tracing::trace!(pulses = state.auto_click_pulses, "auto-click pulse");
    }
}

pub fn report_progress(time: Res<Time>, mut state: ResMut<SessionState>) {
    if !state.report_timer.tick(time.delta()).just_finished() {
        return;
    }

    let snapshot = state.session.snapshot();
    let views = state.session.upgrade_views();
    let purchasable = views
        .iter()
        .filter(|view| view.status == UpgradeStatus::Purchasable)
        .count();
    let locked = views
        .iter()
        .filter(|view| view.status == UpgradeStatus::Locked)
        .count();

    tracing::info!(
        resource = %abbreviate(snapshot.resource),
        record = %abbreviate(snapshot.record_max),
        click = %abbreviate(snapshot.click_yield),
        auto_level = snapshot.auto_click_level,
        purchasable,
        locked,
        "{}",
        status_line(&snapshot)
    );
}
