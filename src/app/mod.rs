mod input;
mod resources;
mod setup;
mod simulation;
mod view;

use bevy::prelude::*;

pub use resources::{RuntimeConfig, SessionState};
pub use setup::bootstrap_session;

pub struct EconomyAppPlugin;

impl Plugin for EconomyAppPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(
            Update,
            (
                input::scripted_clicks,
                simulation::tick_session,
                input::scripted_purchases,
                view::pulse_auto_click,
                view::report_progress,
                simulation::finish_run,
            )
                .chain(),
        );
    }
}
