use bevy::prelude::*;

use super::resources::{RuntimeConfig, SessionState};

/// Runs every logical step that became due this frame. A slow frame runs
/// several steps instead of one long one.
pub fn tick_session(time: Res<Time>, config: Res<RuntimeConfig>, mut state: ResMut<SessionState>) {
    let steps = state.tick_timer.tick(time.delta()).times_finished_this_tick();

    for _ in 0..steps {
        if let Err(err) = state.session.advance(config.tick_seconds) {
            tracing::error!(%err, "economy step failed");
            return;
        }
    }
}

pub fn finish_run(
    config: Res<RuntimeConfig>,
    state: Res<SessionState>,
    mut exit: EventWriter<AppExit>,
) {
    if state.session.elapsed_seconds < config.run_seconds {
        return;
    }

    let session = &state.session;
    tracing::info!(
        ticks = session.tick_index,
        elapsed = session.elapsed_seconds,
        resource = session.economy.resource(),
        record = session.economy.record_max(),
        production = session.economy.production_rate(),
        manual_clicks = session.manual_clicks,
        auto_clicks = session.auto_clicks,
        purchases = session.purchases,
        pulses = state.auto_click_pulses,
        "run finished"
    );
    exit.send(AppExit::Success);
}
