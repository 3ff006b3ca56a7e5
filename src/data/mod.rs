mod loader;
mod upgrade_data;

pub use loader::{
    load_catalog, load_catalog_from_path, load_upgrade_data, load_upgrade_data_from_path,
    read_json, upgrade_data_path,
};
pub use upgrade_data::{UpgradeDataFile, UpgradeDefinition};
