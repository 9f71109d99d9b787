use clap::{Args, Parser, Subcommand};

use xmr_wallet_core::TransferFilter;

/// Query a monero-wallet-rpc daemon: address, balance, height and transfers.
#[derive(Parser, Debug)]
#[command(version, about)]
pub struct Cli {
    /// Wallet RPC endpoint URL.
    #[arg(
        long,
        default_value = "http://127.0.0.1:18082/json_rpc",
        env = "XMR_WALLET_RPC_URL"
    )]
    pub rpc_url: String,

    /// RPC username (as passed to `--rpc-login`).
    #[arg(long, env = "XMR_WALLET_RPC_USER")]
    pub rpc_user: String,

    /// RPC password.
    #[arg(long, env = "XMR_WALLET_RPC_PASS", hide_env_values = true)]
    pub rpc_pass: String,

    /// Abort a call after this many seconds. No timeout when omitted.
    #[arg(long)]
    pub timeout_secs: Option<u64>,

    /// Print results as JSON.
    #[arg(long, global = true)]
    pub json: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// Print the wallet's primary address.
    Address,
    /// Print total and unlocked balance in XMR.
    Balance,
    /// Print the wallet's block height.
    Height,
    /// List transfers, most recent first.
    Transfers(TransferArgs),
}

/// Category flags for `transfers`. Passing none selects every category.
#[derive(Args, Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TransferArgs {
    #[arg(long = "in")]
    pub incoming: bool,
    #[arg(long = "out")]
    pub outgoing: bool,
    #[arg(long)]
    pub pending: bool,
    #[arg(long)]
    pub failed: bool,
}

impl TransferArgs {
    pub fn filter(&self) -> TransferFilter {
        let filter = TransferFilter::none()
            .incoming(self.incoming)
            .outgoing(self.outgoing)
            .pending(self.pending)
            .failed(self.failed);
        if filter.is_empty() {
            TransferFilter::all()
        } else {
            filter
        }
    }
}
