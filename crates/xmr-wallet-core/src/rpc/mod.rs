//! Wallet RPC abstraction layer.
//!
//! Defines the [`WalletRpc`] trait and its HTTP JSON-RPC implementation
//! ([`WalletClient`]).

mod http_adapter;
pub mod types;

pub use http_adapter::WalletClient;

use async_trait::async_trait;

use crate::error::CoreError;
use crate::types::{Balance, Transfer, TransferFilter};

/// The wallet RPC methods this crate exposes.
///
/// Each call is independent: implementations hold no per-call state, so a
/// single instance can serve concurrent callers.
#[async_trait]
pub trait WalletRpc: Send + Sync {
    /// Primary address of the open wallet (`getaddress`). Returned verbatim,
    /// without format validation.
    async fn address(&self) -> Result<String, CoreError>;

    /// Total and unlocked balance in XMR (`getbalance`).
    async fn balance(&self) -> Result<Balance, CoreError>;

    /// Current wallet block height (`getheight`).
    async fn height(&self) -> Result<i64, CoreError>;

    /// Transfers of the requested categories, most recent first
    /// (`get_transfers`).
    async fn transfers(&self, filter: TransferFilter) -> Result<Vec<Transfer>, CoreError>;
}
