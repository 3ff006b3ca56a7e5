use serde::{Deserialize, Serialize};

use crate::core::EconomyState;

/// Which shop column an upgrade belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum UpgradeGroup {
    /// Click power and auto-click upgrades.
    Click,
    /// Passive production upgrades.
    Production,
}

impl UpgradeGroup {
    pub fn all() -> &'static [UpgradeGroup] {
        &[UpgradeGroup::Click, UpgradeGroup::Production]
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Click => "Click",
            Self::Production => "Production",
        }
    }
}

/// Effect applied to the economy once per successful purchase.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "amount", rename_all = "snake_case")]
pub enum UpgradeEffect {
    IncreaseProduction(f64),
    IncreaseClickPower(f64),
    LevelUpAutoClick,
}

impl UpgradeEffect {
    pub fn apply(self, economy: &mut EconomyState) {
        match self {
            Self::IncreaseProduction(amount) => economy.increase_production(amount),
            Self::IncreaseClickPower(amount) => economy.increase_click_power(amount),
            Self::LevelUpAutoClick => economy.level_up_auto_click(),
        }
    }

    pub fn amount(self) -> Option<f64> {
        match self {
            Self::IncreaseProduction(amount) | Self::IncreaseClickPower(amount) => Some(amount),
            Self::LevelUpAutoClick => None,
        }
    }

    /// Group an effect naturally belongs to when a definition does not say.
    pub fn default_group(self) -> UpgradeGroup {
        match self {
            Self::IncreaseProduction(_) => UpgradeGroup::Production,
            Self::IncreaseClickPower(_) | Self::LevelUpAutoClick => UpgradeGroup::Click,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PurchaseOutcome {
    Purchased,
    Unaffordable,
    /// Record maximum is still below the unlock threshold.
    Locked,
}

impl PurchaseOutcome {
    pub fn is_purchased(self) -> bool {
        self == Self::Purchased
    }
}

/// One purchasable upgrade. `price` and `level` only change through
/// [`Upgrade::purchase`].
#[derive(Debug, Clone, PartialEq)]
pub struct Upgrade {
    pub name: String,
    pub icon: String,
    pub group: UpgradeGroup,
    price: f64,
    price_growth: f64,
    unlock_threshold: f64,
    level: u32,
    effect: UpgradeEffect,
}

impl Upgrade {
    pub fn new(
        name: impl Into<String>,
        price: f64,
        price_growth: f64,
        unlock_threshold: f64,
        effect: UpgradeEffect,
    ) -> Self {
        Self {
            name: name.into(),
            icon: String::new(),
            group: effect.default_group(),
            price,
            price_growth,
            unlock_threshold,
            level: 0,
            effect,
        }
    }

    pub fn with_icon(mut self, icon: impl Into<String>) -> Self {
        self.icon = icon.into();
        self
    }

    pub fn with_group(mut self, group: UpgradeGroup) -> Self {
        self.group = group;
        self
    }

    pub fn price(&self) -> f64 {
        self.price
    }

    pub fn price_growth(&self) -> f64 {
        self.price_growth
    }

    pub fn unlock_threshold(&self) -> f64 {
        self.unlock_threshold
    }

    pub fn level(&self) -> u32 {
        self.level
    }

    pub fn effect(&self) -> UpgradeEffect {
        self.effect
    }

    pub fn is_unlocked(&self, record_max: f64) -> bool {
        record_max >= self.unlock_threshold
    }

    pub fn is_affordable(&self, economy: &EconomyState) -> bool {
        economy.can_afford(self.price)
    }

    /// Pays the current price, applies the effect, then grows the price.
    /// An unaffordable attempt leaves both sides untouched.
    pub fn purchase(&mut self, economy: &mut EconomyState) -> PurchaseOutcome {
        if !economy.can_afford(self.price) {
            return PurchaseOutcome::Unaffordable;
        }

        let paid = self.price;
        economy.spend(paid);
        self.level += 1;
        self.effect.apply(economy);
        self.price *= self.price_growth;

        tracing::debug!(
            upgrade = %self.name,
            level = self.level,
            paid,
            next_price = self.price,
            "upgrade purchased"
        );
        PurchaseOutcome::Purchased
    }
}
