pub mod core;
pub mod data;
pub mod error;
pub mod model;
pub mod view;

pub use self::core::{
    EconomyState, MAX_DELTA_SECONDS, Session, TickReport, auto_click_period_for_level,
};
pub use data::{
    UpgradeDataFile, UpgradeDefinition, load_catalog, load_catalog_from_path, load_upgrade_data,
    load_upgrade_data_from_path,
};
pub use error::{CatalogError, EconomyError, Result};
pub use model::{PurchaseOutcome, Upgrade, UpgradeCatalog, UpgradeEffect, UpgradeGroup, UpgradeId};
pub use view::{EconomySnapshot, UpgradeStatus, UpgradeView, abbreviate, status_line};
