//! Wire types for the wallet RPC methods this crate calls.
//!
//! One named structure per request/result shape. Public result types live in
//! `crate::types`; conversions between the two happen in the client.
//!
//! Result fields the daemon leaves out read as zero (`""`, `0`, empty list);
//! a transfer category sent as `null` reads as empty too. A field that is
//! present with the wrong type still fails the decode.

use serde::{Deserialize, Deserializer, Serialize};

use crate::types::{Balance, TransferFilter};
use crate::units::atomic_to_coin;

// ==============================================================================
// getaddress / getheight
// ==============================================================================

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct GetAddressResult {
    pub address: String,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct GetHeightResult {
    pub height: i64,
}

// ==============================================================================
// getbalance
// ==============================================================================

/// Balances in atomic units.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct GetBalanceResult {
    pub balance: u64,
    pub unlocked_balance: u64,
}

impl From<GetBalanceResult> for Balance {
    fn from(raw: GetBalanceResult) -> Self {
        Self {
            balance: atomic_to_coin(raw.balance),
            unlocked_balance: atomic_to_coin(raw.unlocked_balance),
        }
    }
}

// ==============================================================================
// get_transfers
// ==============================================================================

/// Parameters for `get_transfers`. All four flags are always serialized.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct GetTransfersParams {
    #[serde(rename = "in")]
    pub incoming: bool,
    #[serde(rename = "out")]
    pub outgoing: bool,
    pub pending: bool,
    pub failed: bool,
}

impl From<TransferFilter> for GetTransfersParams {
    fn from(filter: TransferFilter) -> Self {
        Self {
            incoming: filter.incoming,
            outgoing: filter.outgoing,
            pending: filter.pending,
            failed: filter.failed,
        }
    }
}

/// The daemon omits a category when it has no entries or was not requested,
/// and some builds send `null` instead; both decode as an empty list.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct GetTransfersResult {
    #[serde(default, rename = "in", deserialize_with = "null_as_empty")]
    pub incoming: Vec<TransferEntry>,
    #[serde(default, rename = "out", deserialize_with = "null_as_empty")]
    pub outgoing: Vec<TransferEntry>,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub pending: Vec<TransferEntry>,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub failed: Vec<TransferEntry>,
}

fn null_as_empty<'de, D>(deserializer: D) -> Result<Vec<TransferEntry>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<Vec<TransferEntry>>::deserialize(deserializer)?.unwrap_or_default())
}

/// One transfer as reported by `get_transfers`, amounts in atomic units.
///
/// `payment_id`, `height` and `note` are decoded but not surfaced in
/// [`Transfer`](crate::types::Transfer).
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct TransferEntry {
    pub txid: String,
    pub payment_id: String,
    pub height: u64,
    pub timestamp: u64,
    pub amount: u64,
    pub fee: u64,
    pub note: String,
}
