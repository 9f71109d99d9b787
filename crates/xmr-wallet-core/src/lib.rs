//! Typed async client for `monero-wallet-rpc`.
//!
//! [`rpc::WalletClient`] issues Digest-authenticated JSON-RPC calls over HTTP
//! and decodes the results into the types in [`types`].

pub mod error;
pub mod rpc;
pub mod transfers;
pub mod types;
pub mod units;

#[cfg(test)]
mod test_util;

pub use error::{CoreError, RpcError};
pub use rpc::{WalletClient, WalletRpc};
pub use types::{Balance, Transfer, TransferFilter, TransferStatus};
pub use units::{atomic_to_coin, ATOMIC_UNITS_PER_COIN};
