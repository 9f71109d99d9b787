//! Shared test helpers for `xmr-wallet-core` unit tests.

use crate::rpc::types::TransferEntry;

/// Build a wire transfer entry with the given txid and timestamp and
/// otherwise default fields.
pub fn transfer_entry(txid: &str, timestamp: u64) -> TransferEntry {
    TransferEntry {
        txid: txid.to_owned(),
        timestamp,
        amount: 1_000_000_000_000,
        fee: 10_000_000,
        ..TransferEntry::default()
    }
}
