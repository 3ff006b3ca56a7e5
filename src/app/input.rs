//! Scripted player standing in for mouse input.

use bevy::prelude::*;

use super::resources::SessionState;

pub fn scripted_clicks(time: Res<Time>, mut state: ResMut<SessionState>) {
    let Some(timer) = state.click_timer.as_mut() else {
        return;
    };
    let clicks = timer.tick(time.delta()).times_finished_this_tick();

    for _ in 0..clicks {
        state.session.click();
    }
}

/// Buys at most one upgrade per frame, always the cheapest available.
pub fn scripted_purchases(mut state: ResMut<SessionState>) {
    let session = &mut state.session;
    let Some(id) = session.catalog.cheapest_purchasable(&session.economy) else {
        return;
    };

    match session.purchase(id) {
        Ok(outcome) if outcome.is_purchased() => {
            if let Ok(view) = session.upgrade_view(id) {
                tracing::info!(
                    upgrade = %view.name,
                    level = view.level,
                    next_price = %pizza_economy::abbreviate(view.price),
                    "bought upgrade"
                );
            }
        }
        Ok(_) => {}
        Err(err) => tracing::warn!(%err, "purchase failed"),
    }
}
