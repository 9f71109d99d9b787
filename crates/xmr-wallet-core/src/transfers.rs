//! Reshaping of `get_transfers` results into a single timeline.

use crate::rpc::types::{GetTransfersResult, TransferEntry};
use crate::types::{Transfer, TransferStatus};
use crate::units::atomic_to_coin;

/// Flatten every category into one list, most recent first.
///
/// Categories are concatenated as incoming, outgoing, pending, failed before a
/// stable sort on timestamp, so entries sharing a timestamp keep that
/// precedence and their response order within a category.
pub fn merge_transfers(result: GetTransfersResult) -> Vec<Transfer> {
    let GetTransfersResult {
        incoming,
        outgoing,
        pending,
        failed,
    } = result;

    let mut transfers: Vec<Transfer> = [
        (TransferStatus::Incoming, incoming),
        (TransferStatus::Outgoing, outgoing),
        (TransferStatus::Pending, pending),
        (TransferStatus::Failed, failed),
    ]
    .into_iter()
    .flat_map(|(status, entries)| entries.into_iter().map(move |e| to_transfer(e, status)))
    .collect();

    // `sort_by` is stable.
    transfers.sort_by(|a, b| b.timestamp.cmp(&a.timestamp));
    transfers
}

fn to_transfer(entry: TransferEntry, status: TransferStatus) -> Transfer {
    Transfer {
        txid: entry.txid,
        amount: atomic_to_coin(entry.amount),
        fee: atomic_to_coin(entry.fee),
        status,
        timestamp: entry.timestamp,
    }
}
