mod format;
mod snapshot;

pub use format::{abbreviate, status_line};
pub use snapshot::{EconomySnapshot, UpgradeStatus, UpgradeView};
