use serde::Serialize;

use crate::core::EconomyState;
use crate::model::{Upgrade, UpgradeGroup, UpgradeId};

/// Read-only copy of the economy for a UI refresh.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct EconomySnapshot {
    pub resource: f64,
    pub production_rate: f64,
    pub click_power: f64,
    pub click_yield: f64,
    pub record_max: f64,
    pub auto_click_level: u32,
    pub auto_click_period: f64,
    pub auto_click_enabled: bool,
}

impl EconomySnapshot {
    pub fn from_economy(economy: &EconomyState) -> Self {
        Self {
            resource: economy.resource(),
            production_rate: economy.production_rate(),
            click_power: economy.click_power(),
            click_yield: economy.click_yield(),
            record_max: economy.record_max(),
            auto_click_level: economy.auto_click_level(),
            auto_click_period: economy.auto_click_period(),
            auto_click_enabled: economy.auto_click_enabled(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum UpgradeStatus {
    Locked,
    Unaffordable,
    Purchasable,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct UpgradeView {
    #[serde(skip)]
    pub id: UpgradeId,
    pub group: UpgradeGroup,
    pub name: String,
    pub icon: String,
    pub price: f64,
    pub level: u32,
    pub unlocked: bool,
    /// Only true for unlocked upgrades.
    pub affordable: bool,
    pub status: UpgradeStatus,
}

impl UpgradeView {
    pub fn new(id: UpgradeId, upgrade: &Upgrade, economy: &EconomyState) -> Self {
        let unlocked = upgrade.is_unlocked(economy.record_max());
        let affordable = unlocked && upgrade.is_affordable(economy);
        let status = match (unlocked, affordable) {
            (false, _) => UpgradeStatus::Locked,
            (true, false) => UpgradeStatus::Unaffordable,
            (true, true) => UpgradeStatus::Purchasable,
        };

        Self {
            id,
            group: upgrade.group,
            name: upgrade.name.clone(),
            icon: upgrade.icon.clone(),
            price: upgrade.price(),
            level: upgrade.level(),
            unlocked,
            affordable,
            status,
        }
    }
}
