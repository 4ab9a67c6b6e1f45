//! Narrative stakes derived from a transfer amount.

use serde::{Deserialize, Serialize};

fn default_network() -> f64 {
    10_000.0
}

fn default_survival() -> f64 {
    100.0
}

/// Tier boundaries. Both are strict lower bounds.
///
/// ```
/// use ledger_bard_core::{StakesThresholds, StakesTier};
///
/// let thresholds = StakesThresholds::new(500.0, 5.0);
/// assert_eq!(thresholds.tier_for(600.0), StakesTier::Network);
/// assert_eq!(thresholds.tier_for(500.0), StakesTier::Survival);
/// ```
#[derive(
    Debug, Clone, Copy, PartialEq, Serialize, Deserialize, derive_getters::Getters,
)]
pub struct StakesThresholds {
    /// Amount above which the whole network is at stake
    #[serde(default = "default_network")]
    network: f64,
    /// Amount above which the character is buying survival
    #[serde(default = "default_survival")]
    survival: f64,
}

impl StakesThresholds {
    /// Custom boundaries.
    pub fn new(network: f64, survival: f64) -> Self {
        Self { network, survival }
    }

    /// Pick the tier for an amount.
    pub fn tier_for(&self, amount: f64) -> StakesTier {
        if amount > self.network {
            StakesTier::Network
        } else if amount > self.survival {
            StakesTier::Survival
        } else {
            StakesTier::Subsistence
        }
    }
}

impl Default for StakesThresholds {
    fn default() -> Self {
        Self::new(default_network(), default_survival())
    }
}

/// Three-tier table mapping an amount to story stakes.
///
/// Thresholds are strict: exactly 10000 is survival tier and exactly 100 is
/// subsistence tier.
///
/// # Examples
///
/// ```
/// use ledger_bard_core::StakesTier;
///
/// assert_eq!(StakesTier::for_amount(50_000.0), StakesTier::Network);
/// assert_eq!(StakesTier::for_amount(10_000.0), StakesTier::Survival);
/// assert_eq!(StakesTier::for_amount(100.0), StakesTier::Subsistence);
/// ```
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Serialize,
    Deserialize,
    strum::EnumIter,
    derive_more::Display,
)]
pub enum StakesTier {
    /// More than 10000 units
    #[display("network")]
    Network,
    /// More than 100 units
    #[display("survival")]
    Survival,
    /// Everything else
    #[display("subsistence")]
    Subsistence,
}

impl StakesTier {
    /// Pick the tier for an amount using the standard thresholds.
    pub fn for_amount(amount: f64) -> Self {
        StakesThresholds::default().tier_for(amount)
    }

    /// What is at risk.
    pub fn stakes(&self) -> &'static str {
        match self {
            StakesTier::Network => "The fate of the entire network is at risk.",
            StakesTier::Survival => "Survival. Payment for a new identity.",
            StakesTier::Subsistence => "Desperation. Just enough for a meal and a recharge.",
        }
    }

    /// The item being bought or sold.
    pub fn object_of_desire(&self) -> &'static str {
        match self {
            StakesTier::Network => "The Golden Key code",
            StakesTier::Survival => "Clean passports",
            StakesTier::Subsistence => "A bowl of synthetic ramen",
        }
    }
}

/// Story variables injected into the stakes prompt.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, derive_getters::Getters)]
pub struct Stakes {
    /// The exact amount the story must mention
    amount: f64,
    /// Tier selected from the amount
    tier: StakesTier,
}

impl Stakes {
    /// Derive stakes from an amount.
    pub fn from_amount(amount: f64) -> Self {
        Self::with_thresholds(amount, &StakesThresholds::default())
    }

    /// Derive stakes from an amount with custom tier boundaries.
    pub fn with_thresholds(amount: f64, thresholds: &StakesThresholds) -> Self {
        Self {
            amount,
            tier: thresholds.tier_for(amount),
        }
    }
}
