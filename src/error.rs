//! Error types for the economy engine.
//!
//! An unaffordable purchase is not an error; it is reported through
//! [`crate::PurchaseOutcome`].

use thiserror::Error;

use crate::model::UpgradeId;

/// Result type alias using [`EconomyError`].
pub type Result<T> = std::result::Result<T, EconomyError>;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum EconomyError {
    /// Time steps must be finite and non-negative.
    #[error("invalid time step: {0} seconds")]
    InvalidDelta(f64),

    #[error("time step of {delta} seconds exceeds the {max} second limit")]
    DeltaTooLarge { delta: f64, max: f64 },

    #[error("unknown upgrade id: {0}")]
    UnknownUpgrade(UpgradeId),
}

/// Rejected upgrade definitions.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum CatalogError {
    #[error("upgrade #{index} has an empty name")]
    EmptyName { index: usize },

    #[error("upgrade '{name}' is defined more than once")]
    DuplicateName { name: String },

    #[error("upgrade '{name}' has invalid price {price}")]
    InvalidPrice { name: String, price: f64 },

    #[error("upgrade '{name}' has price growth {growth}, expected a finite value above 1")]
    InvalidGrowth { name: String, growth: f64 },

    #[error("upgrade '{name}' has invalid unlock threshold {threshold}")]
    InvalidThreshold { name: String, threshold: f64 },

    #[error("upgrade '{name}' has invalid effect amount {amount}")]
    InvalidEffectAmount { name: String, amount: f64 },
}
