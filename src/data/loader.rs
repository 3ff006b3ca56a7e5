use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::de::DeserializeOwned;

use crate::model::UpgradeCatalog;

use super::UpgradeDataFile;

const UPGRADE_DATA_RELATIVE_PATH: &str = "data/upgrade_data.json";

pub fn upgrade_data_path() -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR")).join(UPGRADE_DATA_RELATIVE_PATH)
}

pub fn load_upgrade_data() -> Result<UpgradeDataFile> {
    load_upgrade_data_from_path(upgrade_data_path())
}

pub fn load_upgrade_data_from_path(path: impl AsRef<Path>) -> Result<UpgradeDataFile> {
    read_json(path.as_ref(), "upgrade data")
}

/// Loads and validates a catalog in one step.
pub fn load_catalog_from_path(path: impl AsRef<Path>) -> Result<UpgradeCatalog> {
    let path = path.as_ref();
    let data = load_upgrade_data_from_path(path)?;
    let catalog = data
        .to_catalog()
        .with_context(|| format!("invalid upgrade catalog: {}", path.display()))?;
    tracing::debug!(path = %path.display(), upgrades = catalog.len(), "catalog loaded");
    Ok(catalog)
}

pub fn load_catalog() -> Result<UpgradeCatalog> {
    load_catalog_from_path(upgrade_data_path())
}

pub fn read_json<T>(path: &Path, label: &str) -> Result<T>
where
    T: DeserializeOwned,
{
    let raw = fs::read_to_string(path)
        .with_context(|| format!("failed reading {label} file: {}", path.display()))?;

    serde_json::from_str(&raw)
        .with_context(|| format!("failed parsing {label} file as JSON: {}", path.display()))
}
