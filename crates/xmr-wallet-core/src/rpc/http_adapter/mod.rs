//! JSON-RPC client for `monero-wallet-rpc` endpoints.
//!
//! Implements [`WalletRpc`](super::WalletRpc) over HTTP using `reqwest`,
//! answering the daemon's Digest challenge with `digest_auth`.

mod client;
mod connection;
mod digest;
mod protocol;

pub use client::WalletClient;
