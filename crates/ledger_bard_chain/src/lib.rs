//! TRON transfer history for Ledger Bard.
//!
//! [`TronGridClient`] implements [`TransferSource`](ledger_bard_interface::TransferSource)
//! over the public TronGrid REST API. Any failure (bad address, network
//! error, timeout, unexpected payload) is logged and replaced by the
//! configured [`FallbackMode`].

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod config;
mod dto;
mod trongrid;

pub use config::{ChainConfig, FallbackMode, TRON_API_KEY};
pub use trongrid::TronGridClient;
