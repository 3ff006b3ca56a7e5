mod app;

use std::path::PathBuf;
use std::time::Duration;

use anyhow::Result;
use bevy::app::ScheduleRunnerPlugin;
use bevy::prelude::*;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use app::{EconomyAppPlugin, RuntimeConfig, bootstrap_session};

fn main() -> AppExit {
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer())
        .with(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let (config, state) = match prepare() {
        Ok(prepared) => prepared,
        Err(err) => {
            tracing::error!("startup failed: {err:#}");
            return AppExit::error();
        }
    };
    tracing::info!(
        tick_seconds = config.tick_seconds,
        run_seconds = config.run_seconds,
        "starting headless session"
    );

    let frame = Duration::from_millis(config.frame_millis);
    App::new()
        .add_plugins(MinimalPlugins.set(ScheduleRunnerPlugin::run_loop(frame)))
        .insert_resource(config)
        .insert_resource(state)
        .add_plugins(EconomyAppPlugin)
        .run()
}

/// Optional first argument: path to a JSON runtime config.
fn prepare() -> Result<(RuntimeConfig, app::SessionState)> {
    let config = match std::env::args_os().nth(1).map(PathBuf::from) {
        Some(path) => RuntimeConfig::load(&path)?,
        None => RuntimeConfig::default(),
    };
    let state = bootstrap_session(&config)?;
    Ok((config, state))
}
