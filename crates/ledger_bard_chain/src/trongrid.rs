//! TronGrid REST client.

use crate::dto::Trc20Page;
use crate::{ChainConfig, FallbackMode};
use async_trait::async_trait;
use ledger_bard_core::TransferRecord;
use ledger_bard_error::{ChainError, ChainErrorKind, HttpError, LedgerBardResult};
use ledger_bard_interface::TransferSource;
use std::time::Duration;
use tracing::{debug, instrument, warn};

/// Fetches recent TRC-20 transfers from TronGrid.
///
/// # Example
///
/// ```no_run
/// use ledger_bard_chain::{ChainConfig, TronGridClient};
/// use ledger_bard_interface::TransferSource;
///
/// # #[tokio::main]
/// # async fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let client = TronGridClient::new(ChainConfig::default())?;
/// let transfers = client.fetch_transfers("TXYZopYRdj2D9XRtbG411XZZ3kM5VkAeBf").await;
/// println!("{} transfers", transfers.len());
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct TronGridClient {
    client: reqwest::Client,
    config: ChainConfig,
}

impl TronGridClient {
    /// Create a client with the configured timeout.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be initialized.
    #[instrument(name = "trongrid_client_new", skip(config), fields(base_url = %config.base_url()))]
    pub fn new(config: ChainConfig) -> LedgerBardResult<Self> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(*config.timeout_secs()))
            .build()
            .map_err(|e| HttpError::new(format!("Failed to build HTTP client: {}", e)))?;

        Ok(Self { client, config })
    }

    /// Active configuration.
    pub fn config(&self) -> &ChainConfig {
        &self.config
    }

    /// Fetch transfers, reporting failures instead of degrading.
    ///
    /// # Errors
    ///
    /// Returns a [`ChainError`] for an invalid address, a transport failure,
    /// a non-success status, or a payload that is not a TronGrid page.
    #[instrument(skip(self))]
    pub async fn try_fetch(&self, address: &str) -> Result<Vec<TransferRecord>, ChainError> {
        let address = address.trim();
        if address.is_empty() || address.contains(char::is_whitespace) {
            return Err(ChainError::new(ChainErrorKind::InvalidAddress(
                address.to_string(),
            )));
        }

        let url = format!(
            "{}/v1/accounts/{}/transactions/trc20",
            self.config.base_url().trim_end_matches('/'),
            address
        );
        debug!(url = %url, limit = self.config.limit(), "Requesting TRC-20 transfers");

        let mut request = self
            .client
            .get(&url)
            .query(&[("limit", self.config.limit().to_string())]);
        if let Some(key) = self.config.api_key() {
            request = request.header("TRON-PRO-API-KEY", key);
        }

        let response = request
            .send()
            .await
            .map_err(|e| ChainError::new(ChainErrorKind::Request(e.to_string())))?;

        let status = response.status();
        if !status.is_success() {
            let message = response.text().await.unwrap_or_default();
            return Err(ChainError::new(ChainErrorKind::HttpStatus {
                status_code: status.as_u16(),
                message,
            }));
        }

        let page: Trc20Page = response
            .json()
            .await
            .map_err(|e| ChainError::new(ChainErrorKind::MalformedResponse(e.to_string())))?;

        if page.success == Some(false) {
            return Err(ChainError::new(ChainErrorKind::MalformedResponse(
                page.error
                    .unwrap_or_else(|| "TronGrid reported failure".to_string()),
            )));
        }

        let transfers: Vec<TransferRecord> = page
            .data
            .into_iter()
            .take(*self.config.limit())
            .map(<TransferRecord as From<_>>::from)
            .collect();

        debug!(count = transfers.len(), "Fetched transfers");
        Ok(transfers)
    }

    /// History used by [`FallbackMode::Simulated`].
    pub fn simulated_transfers() -> Vec<TransferRecord> {
        [
            (1_250.0, "sim-0001"),
            (42.0, "sim-0002"),
            (380.0, "sim-0003"),
        ]
        .into_iter()
        .map(|(value, id)| {
            TransferRecord::new(value)
                .with_token_symbol("USDT")
                .with_transaction_id(id)
        })
        .collect()
    }

    fn fallback(&self) -> Vec<TransferRecord> {
        match self.config.fallback() {
            FallbackMode::Empty => Vec::new(),
            FallbackMode::Simulated => {
                let mut transfers = Self::simulated_transfers();
                transfers.truncate(*self.config.limit());
                transfers
            }
        }
    }
}

#[async_trait]
impl TransferSource for TronGridClient {
    #[instrument(skip(self))]
    async fn fetch_transfers(&self, address: &str) -> Vec<TransferRecord> {
        match self.try_fetch(address).await {
            Ok(transfers) => transfers,
            Err(e) => {
                warn!(
                    error = %e,
                    fallback = ?self.config.fallback(),
                    "Transfer fetch failed, degrading"
                );
                self.fallback()
            }
        }
    }

    fn source_name(&self) -> &'static str {
        "trongrid"
    }
}
