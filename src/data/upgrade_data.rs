use serde::{Deserialize, Serialize};

use crate::error::CatalogError;
use crate::model::{Upgrade, UpgradeCatalog, UpgradeEffect, UpgradeGroup};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UpgradeDataFile {
    #[serde(default)]
    pub upgrades: Vec<UpgradeDefinition>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UpgradeDefinition {
    pub name: String,
    #[serde(default)]
    pub icon: String,
    /// Falls back to the effect's natural group.
    #[serde(default)]
    pub group: Option<UpgradeGroup>,
    pub price: f64,
    pub price_growth: f64,
    #[serde(default)]
    pub unlock_threshold: f64,
    pub effect: UpgradeEffect,
}

impl UpgradeDefinition {
    pub fn to_upgrade(&self) -> Upgrade {
        let upgrade = Upgrade::new(
            self.name.clone(),
            self.price,
            self.price_growth,
            self.unlock_threshold,
            self.effect,
        )
        .with_icon(self.icon.clone());
        match self.group {
            Some(group) => upgrade.with_group(group),
            None => upgrade,
        }
    }
}

impl UpgradeDataFile {
    /// Builds a fresh catalog with every upgrade at level 0.
    pub fn to_catalog(&self) -> Result<UpgradeCatalog, CatalogError> {
        UpgradeCatalog::new(self.upgrades.iter().map(UpgradeDefinition::to_upgrade).collect())
    }
}
