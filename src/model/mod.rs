mod catalog;
mod upgrade;

pub use catalog::{UpgradeCatalog, UpgradeId};
pub use upgrade::{PurchaseOutcome, Upgrade, UpgradeEffect, UpgradeGroup};
