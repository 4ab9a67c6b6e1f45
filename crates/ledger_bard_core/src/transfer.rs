//! Observed token transfers.

use serde::{Deserialize, Serialize};

/// One token movement observed on chain.
///
/// Supplied wholesale by a transfer source and never mutated afterwards.
/// `value` is the raw amount as reported by the chain API; a missing or
/// non-numeric amount is recorded as `0.0`.
///
/// # Examples
///
/// ```
/// use ledger_bard_core::TransferRecord;
///
/// let transfer = TransferRecord::new(250.0).with_token_symbol("USDT");
/// assert_eq!(*transfer.value(), 250.0);
/// assert_eq!(transfer.token_symbol().as_deref(), Some("USDT"));
/// ```
#[derive(
    Debug,
    Clone,
    Default,
    PartialEq,
    Serialize,
    Deserialize,
    derive_getters::Getters,
    derive_setters::Setters,
)]
#[setters(prefix = "with_", into, strip_option)]
pub struct TransferRecord {
    /// Amount moved, in the token's raw units
    #[serde(default)]
    #[setters(skip)]
    value: f64,
    /// Token ticker (e.g. "USDT")
    #[serde(default, skip_serializing_if = "Option::is_none")]
    token_symbol: Option<String>,
    /// Decimal places of the token, when the chain API reports them
    #[serde(default, skip_serializing_if = "Option::is_none")]
    token_decimals: Option<u32>,
    /// Transaction hash
    #[serde(default, skip_serializing_if = "Option::is_none")]
    transaction_id: Option<String>,
    /// Sending address
    #[serde(default, skip_serializing_if = "Option::is_none")]
    from: Option<String>,
    /// Receiving address
    #[serde(default, skip_serializing_if = "Option::is_none")]
    to: Option<String>,
    /// Block time in milliseconds since the epoch
    #[serde(default, skip_serializing_if = "Option::is_none")]
    block_timestamp: Option<i64>,
}

impl TransferRecord {
    /// Create a record with only an amount.
    pub fn new(value: f64) -> Self {
        Self {
            value,
            ..Default::default()
        }
    }

    /// Interpret a loosely typed amount the way chain APIs send it.
    ///
    /// Accepts decimal strings ("1000000") and plain numbers; anything else
    /// (absent, empty, garbage) is `0.0`.
    ///
    /// ```
    /// use ledger_bard_core::TransferRecord;
    ///
    /// assert_eq!(TransferRecord::lenient_amount(Some("42.5")), 42.5);
    /// assert_eq!(TransferRecord::lenient_amount(Some("n/a")), 0.0);
    /// assert_eq!(TransferRecord::lenient_amount(None), 0.0);
    /// ```
    pub fn lenient_amount(raw: Option<&str>) -> f64 {
        raw.and_then(|s| s.trim().parse::<f64>().ok())
            .unwrap_or(0.0)
    }
}
