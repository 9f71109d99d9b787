//! Public result types returned by [`WalletRpc`](crate::rpc::WalletRpc).
//!
//! These are deliberately decoupled from the wire structures in
//! `crate::rpc::types`, so the daemon's JSON shape can change without
//! touching the public API.

use serde::{Deserialize, Serialize};

// ==============================================================================
// Balance
// ==============================================================================

/// Wallet balance in decimal XMR.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Balance {
    /// Total balance of the wallet open in the daemon.
    pub balance: f64,
    /// Funds deep enough in the chain to be considered safe to spend.
    pub unlocked_balance: f64,
}

// ==============================================================================
// Transfers
// ==============================================================================

/// Category a transfer was reported under.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TransferStatus {
    Incoming,
    Outgoing,
    Pending,
    Failed,
}

impl TransferStatus {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Incoming => "incoming",
            Self::Outgoing => "outgoing",
            Self::Pending => "pending",
            Self::Failed => "failed",
        }
    }
}

impl std::fmt::Display for TransferStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.pad(self.as_str())
    }
}

/// A single wallet transfer, amounts in decimal XMR.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Transfer {
    pub txid: String,
    pub amount: f64,
    pub fee: f64,
    pub status: TransferStatus,
    /// Seconds since the Unix epoch.
    pub timestamp: u64,
}

/// Which transfer categories `get_transfers` should populate.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TransferFilter {
    pub incoming: bool,
    pub outgoing: bool,
    pub pending: bool,
    pub failed: bool,
}

impl TransferFilter {
    pub fn all() -> Self {
        Self {
            incoming: true,
            outgoing: true,
            pending: true,
            failed: true,
        }
    }

    pub fn none() -> Self {
        Self::default()
    }

    pub fn incoming(mut self, include: bool) -> Self {
        self.incoming = include;
        self
    }

    pub fn outgoing(mut self, include: bool) -> Self {
        self.outgoing = include;
        self
    }

    pub fn pending(mut self, include: bool) -> Self {
        self.pending = include;
        self
    }

    pub fn failed(mut self, include: bool) -> Self {
        self.failed = include;
        self
    }

    pub fn is_empty(&self) -> bool {
        !(self.incoming || self.outgoing || self.pending || self.failed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn transfer_status_serializes_as_category_name() {
        let json = serde_json::to_string(&TransferStatus::Outgoing).expect("serialize status");
        assert_eq!(json, "\"outgoing\"");
        assert_eq!(TransferStatus::Failed.to_string(), "failed");
    }

    #[test]
    fn filter_builders_toggle_single_categories() {
        let filter = TransferFilter::none().incoming(true).failed(true);
        assert!(filter.incoming && filter.failed);
        assert!(!filter.outgoing && !filter.pending);
        assert!(TransferFilter::none().is_empty());
        assert!(!TransferFilter::all().is_empty());
    }

    #[test]
    fn zero_balance_is_default() {
        assert_eq!(
            Balance::default(),
            Balance {
                balance: 0.0,
                unlocked_balance: 0.0
            }
        );
    }
}
