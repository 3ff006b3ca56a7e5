use std::collections::HashSet;
use std::fmt;

use crate::core::EconomyState;
use crate::error::CatalogError;

use super::upgrade::{PurchaseOutcome, Upgrade, UpgradeGroup};

/// Stable position of an upgrade inside its catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct UpgradeId(pub usize);

impl fmt::Display for UpgradeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// All upgrades of a session, created once and never resized.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct UpgradeCatalog {
    upgrades: Vec<Upgrade>,
}

impl UpgradeCatalog {
    pub fn new(upgrades: Vec<Upgrade>) -> Result<Self, CatalogError> {
        let mut seen = HashSet::new();
        for (index, upgrade) in upgrades.iter().enumerate() {
            validate(index, upgrade)?;
            if !seen.insert(upgrade.name.as_str()) {
                return Err(CatalogError::DuplicateName {
                    name: upgrade.name.clone(),
                });
            }
        }
        Ok(Self { upgrades })
    }

    pub fn len(&self) -> usize {
        self.upgrades.len()
    }

    pub fn is_empty(&self) -> bool {
        self.upgrades.is_empty()
    }

    pub fn get(&self, id: UpgradeId) -> Option<&Upgrade> {
        self.upgrades.get(id.0)
    }

    pub fn get_mut(&mut self, id: UpgradeId) -> Option<&mut Upgrade> {
        self.upgrades.get_mut(id.0)
    }

    pub fn find(&self, name: &str) -> Option<UpgradeId> {
        self.upgrades
            .iter()
            .position(|upgrade| upgrade.name == name)
            .map(UpgradeId)
    }

    pub fn iter(&self) -> impl Iterator<Item = (UpgradeId, &Upgrade)> {
        self.upgrades
            .iter()
            .enumerate()
            .map(|(index, upgrade)| (UpgradeId(index), upgrade))
    }

    pub fn in_group(&self, group: UpgradeGroup) -> impl Iterator<Item = (UpgradeId, &Upgrade)> {
        self.iter().filter(move |(_, upgrade)| upgrade.group == group)
    }

    /// Shop order: click upgrades first, then production, each in definition
    /// order.
    pub fn display_order(&self) -> Vec<UpgradeId> {
        UpgradeGroup::all()
            .iter()
            .flat_map(|group| self.in_group(*group).map(|(id, _)| id))
            .collect()
    }

    /// Cheapest upgrade that is both unlocked and affordable right now.
    pub fn cheapest_purchasable(&self, economy: &EconomyState) -> Option<UpgradeId> {
        self.iter()
            .filter(|(_, upgrade)| {
                upgrade.is_unlocked(economy.record_max()) && upgrade.is_affordable(economy)
            })
            .min_by(|(_, a), (_, b)| a.price().total_cmp(&b.price()))
            .map(|(id, _)| id)
    }

    /// Runs the purchase protocol for `id`. Returns `None` for unknown ids.
    /// Unlock gating is left to the caller.
    pub fn purchase(&mut self, id: UpgradeId, economy: &mut EconomyState) -> Option<PurchaseOutcome> {
        self.get_mut(id).map(|upgrade| upgrade.purchase(economy))
    }
}

fn validate(index: usize, upgrade: &Upgrade) -> Result<(), CatalogError> {
    let name = upgrade.name.trim();
    if name.is_empty() {
        return Err(CatalogError::EmptyName { index });
    }
    let name = name.to_string();

    if !upgrade.price().is_finite() || upgrade.price() < 0.0 {
        return Err(CatalogError::InvalidPrice {
            name,
            price: upgrade.price(),
        });
    }
    if !upgrade.price_growth().is_finite() || upgrade.price_growth() <= 1.0 {
        return Err(CatalogError::InvalidGrowth {
            name,
            growth: upgrade.price_growth(),
        });
    }
    if !upgrade.unlock_threshold().is_finite() || upgrade.unlock_threshold() < 0.0 {
        return Err(CatalogError::InvalidThreshold {
            name,
            threshold: upgrade.unlock_threshold(),
        });
    }
    if let Some(amount) = upgrade.effect().amount()
        && (!amount.is_finite() || amount < 0.0)
    {
        return Err(CatalogError::InvalidEffectAmount { name, amount });
    }
    Ok(())
}
