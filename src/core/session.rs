use crate::error::{EconomyError, Result};
use crate::model::{PurchaseOutcome, UpgradeCatalog, UpgradeId};
use crate::view::{EconomySnapshot, UpgradeView};

use super::economy::{EconomyState, TickReport};

/// One game session: the economy plus the catalog it spends on.
///
/// Everything a driver does goes through here, in the order it happens.
/// Replaying the same sequence of calls on the same starting session yields
/// the same state.
#[derive(Debug, Clone, PartialEq)]
pub struct Session {
    pub economy: EconomyState,
    pub catalog: UpgradeCatalog,
    pub tick_index: u64,
    pub elapsed_seconds: f64,
    pub manual_clicks: u64,
    pub auto_clicks: u64,
    pub purchases: u64,
}

impl Session {
    pub fn new(catalog: UpgradeCatalog) -> Self {
        Self::with_economy(EconomyState::default(), catalog)
    }

    pub fn with_economy(economy: EconomyState, catalog: UpgradeCatalog) -> Self {
        Self {
            economy,
            catalog,
            tick_index: 0,
            elapsed_seconds: 0.0,
            manual_clicks: 0,
            auto_clicks: 0,
            purchases: 0,
        }
    }

    pub fn advance(&mut self, delta_seconds: f64) -> Result<TickReport> {
        let report = self.economy.advance(delta_seconds)?;
        self.tick_index += 1;
        self.elapsed_seconds += delta_seconds;
        self.auto_clicks += report.auto_clicks;
        Ok(report)
    }

    pub fn click(&mut self) {
        self.economy.click();
        self.manual_clicks += 1;
    }

    /// Buys one level of `id` if it is unlocked and affordable.
    pub fn purchase(&mut self, id: UpgradeId) -> Result<PurchaseOutcome> {
        let upgrade = self
            .catalog
            .get_mut(id)
            .ok_or(EconomyError::UnknownUpgrade(id))?;
        if !upgrade.is_unlocked(self.economy.record_max()) {
            return Ok(PurchaseOutcome::Locked);
        }

        let outcome = upgrade.purchase(&mut self.economy);
        if outcome.is_purchased() {
            self.purchases += 1;
        }
        Ok(outcome)
    }

    pub fn take_auto_click_fired(&mut self) -> bool {
        self.economy.take_auto_click_fired()
    }

    pub fn snapshot(&self) -> EconomySnapshot {
        EconomySnapshot::from_economy(&self.economy)
    }

    pub fn upgrade_view(&self, id: UpgradeId) -> Result<UpgradeView> {
        let upgrade = self
            .catalog
            .get(id)
            .ok_or(EconomyError::UnknownUpgrade(id))?;
        Ok(UpgradeView::new(id, upgrade, &self.economy))
    }

    /// Views of every upgrade in shop order.
    pub fn upgrade_views(&self) -> Vec<UpgradeView> {
        self.catalog
            .display_order()
            .into_iter()
            .filter_map(|id| {
                self.catalog
                    .get(id)
                    .map(|upgrade| UpgradeView::new(id, upgrade, &self.economy))
            })
            .collect()
    }
}
