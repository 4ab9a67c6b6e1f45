//! TronGrid wire types.

use ledger_bard_core::TransferRecord;
use serde::Deserialize;
use serde_json::Value;

/// One page of `/v1/accounts/{address}/transactions/trc20`.
#[derive(Debug, Deserialize)]
pub(crate) struct Trc20Page {
    #[serde(default)]
    pub data: Vec<Trc20Transfer>,
    #[serde(default)]
    pub success: Option<bool>,
    #[serde(default)]
    pub error: Option<String>,
}

/// A TRC-20 transfer as TronGrid reports it.
#[derive(Debug, Deserialize)]
pub(crate) struct Trc20Transfer {
    #[serde(default)]
    pub transaction_id: Option<String>,
    #[serde(default)]
    pub token_info: Option<TokenInfo>,
    #[serde(default)]
    pub block_timestamp: Option<i64>,
    #[serde(default)]
    pub from: Option<String>,
    #[serde(default)]
    pub to: Option<String>,
    /// Usually a decimal string, occasionally a number
    #[serde(default)]
    pub value: Option<Value>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct TokenInfo {
    #[serde(default)]
    pub symbol: Option<String>,
    #[serde(default)]
    pub decimals: Option<u32>,
}

fn amount(value: Option<&Value>) -> f64 {
    match value {
        Some(Value::String(s)) => TransferRecord::lenient_amount(Some(s)),
        Some(Value::Number(n)) => n.as_f64().unwrap_or(0.0),
        _ => 0.0,
    }
}

impl From<Trc20Transfer> for TransferRecord {
    fn from(dto: Trc20Transfer) -> Self {
        let mut record = TransferRecord::new(amount(dto.value.as_ref()));
        if let Some(info) = dto.token_info {
            if let Some(symbol) = info.symbol {
                record = record.with_token_symbol(symbol);
            }
            if let Some(decimals) = info.decimals {
                record = record.with_token_decimals(decimals);
            }
        }
        if let Some(id) = dto.transaction_id {
            record = record.with_transaction_id(id);
        }
        if let Some(from) = dto.from {
            record = record.with_from(from);
        }
        if let Some(to) = dto.to {
            record = record.with_to(to);
        }
        if let Some(ts) = dto.block_timestamp {
            record = record.with_block_timestamp(ts);
        }
        record
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn converts_string_amounts_and_token_info() {
        let page: Trc20Page = serde_json::from_str(
            r#"{
                "data": [{
                    "transaction_id": "abc123",
                    "token_info": {"symbol": "USDT", "address": "TR7", "decimals": 6, "name": "Tether USD"},
                    "block_timestamp": 1700000000000,
                    "from": "TFrom",
                    "to": "TTo",
                    "type": "Transfer",
                    "value": "1500000"
                }],
                "success": true,
                "meta": {"at": 1700000000001, "page_size": 1}
            }"#,
        )
        .unwrap();

        let record: TransferRecord = page.data.into_iter().next().unwrap().into();
        assert_eq!(*record.value(), 1_500_000.0);
        assert_eq!(record.token_symbol().as_deref(), Some("USDT"));
        assert_eq!(*record.token_decimals(), Some(6));
        assert_eq!(record.transaction_id().as_deref(), Some("abc123"));
        assert_eq!(*record.block_timestamp(), Some(1_700_000_000_000));
    }

    #[test]
    fn missing_or_garbage_amount_is_zero() {
        let page: Trc20Page = serde_json::from_str(
            r#"{"data": [{"transaction_id": "a"}, {"value": "lots"}, {"value": 12.5}, {"value": null}]}"#,
        )
        .unwrap();

        let values: Vec<f64> = page
            .data
            .into_iter()
            .map(<TransferRecord as From<Trc20Transfer>>::from)
            .map(|r| *r.value())
            .collect();
        assert_eq!(values, vec![0.0, 0.0, 12.5, 0.0]);
    }

    #[test]
    fn page_without_data_is_empty() {
        let page: Trc20Page = serde_json::from_str(r#"{"success": false, "error": "bad"}"#).unwrap();
        assert!(page.data.is_empty());
        assert_eq!(page.success, Some(false));
        assert_eq!(page.error.as_deref(), Some("bad"));
    }
}
