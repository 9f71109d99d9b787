use eyre::{Result, WrapErr};
use serde_json::json;

use xmr_wallet_core::{Balance, Transfer, WalletRpc};

use crate::cli::Command;

// ==============================================================================
// Command Dispatch
// ==============================================================================

/// Run `command` against `wallet` and render its output.
pub(crate) async fn run(wallet: &dyn WalletRpc, command: Command, as_json: bool) -> Result<String> {
    match command {
        Command::Address => {
            let address = wallet.address().await.wrap_err("getaddress failed")?;
            Ok(if as_json {
                pretty(&json!({ "address": address }))?
            } else {
                address
            })
        }
        Command::Balance => {
            let balance = wallet.balance().await.wrap_err("getbalance failed")?;
            if as_json {
                pretty(&balance)
            } else {
                Ok(render_balance(&balance))
            }
        }
        Command::Height => {
            let height = wallet.height().await.wrap_err("getheight failed")?;
            Ok(if as_json {
                pretty(&json!({ "height": height }))?
            } else {
                height.to_string()
            })
        }
        Command::Transfers(args) => {
            let transfers = wallet
                .transfers(args.filter())
                .await
                .wrap_err("get_transfers failed")?;
            if as_json {
                pretty(&transfers)
            } else {
                Ok(render_transfers(&transfers))
            }
        }
    }
}

// ==============================================================================
// Rendering
// ==============================================================================

fn pretty<T: serde::Serialize>(value: &T) -> Result<String> {
    serde_json::to_string_pretty(value).wrap_err("serialize output")
}

fn render_balance(balance: &Balance) -> String {
    format!(
        "balance:  {:.12} XMR\nunlocked: {:.12} XMR",
        balance.balance, balance.unlocked_balance
    )
}

fn render_transfers(transfers: &[Transfer]) -> String {
    if transfers.is_empty() {
        return "no transfers".to_owned();
    }

    transfers
        .iter()
        .map(|t| {
            format!(
                "{:>10}  {:<8}  {:>20.12}  fee {:.12}  {}",
                t.timestamp, t.status, t.amount, t.fee, t.txid
            )
        })
        .collect::<Vec<_>>()
        .join("\n")
}

#[cfg(test)]
mod tests {
    use std::sync::Mutex;

    use async_trait::async_trait;
    use xmr_wallet_core::{CoreError, RpcError, TransferFilter, TransferStatus};

    use super::*;
    use crate::cli::TransferArgs;

    /// Canned wallet answers; records the last transfer filter it saw.
    struct StubWallet {
        fail: bool,
        seen_filter: Mutex<Option<TransferFilter>>,
    }

    impl StubWallet {
        fn new() -> Self {
            Self {
                fail: false,
                seen_filter: Mutex::new(None),
            }
        }

        fn failing() -> Self {
            Self {
                fail: true,
                ..Self::new()
            }
        }

        fn check(&self) -> Result<(), CoreError> {
            if self.fail {
                return Err(RpcError::Protocol { status: 401 }.into());
            }
            Ok(())
        }
    }

    #[async_trait]
    impl WalletRpc for StubWallet {
        async fn address(&self) -> Result<String, CoreError> {
            self.check()?;
            Ok("4Ab9stub".to_owned())
        }

        async fn balance(&self) -> Result<Balance, CoreError> {
            self.check()?;
            Ok(Balance {
                balance: 2.5,
                unlocked_balance: 1.25,
            })
        }

        async fn height(&self) -> Result<i64, CoreError> {
            self.check()?;
            Ok(3_195_144)
        }

        async fn transfers(&self, filter: TransferFilter) -> Result<Vec<Transfer>, CoreError> {
            self.check()?;
            *self.seen_filter.lock().expect("filter lock") = Some(filter);
            Ok(vec![Transfer {
                txid: "c0ffee".to_owned(),
                amount: 1.5,
                fee: 0.00002,
                status: TransferStatus::Incoming,
                timestamp: 1_700_000_000,
            }])
        }
    }

    #[tokio::test]
    async fn address_prints_plain_and_json() {
        let wallet = StubWallet::new();
        assert_eq!(
            run(&wallet, Command::Address, false).await.expect("run"),
            "4Ab9stub"
        );
        let out = run(&wallet, Command::Address, true).await.expect("run");
        let parsed: serde_json::Value = serde_json::from_str(&out).expect("valid json");
        assert_eq!(parsed["address"], "4Ab9stub");
    }

    #[tokio::test]
    async fn balance_prints_twelve_decimals() {
        let out = run(&StubWallet::new(), Command::Balance, false)
            .await
            .expect("run");
        assert_eq!(
            out,
            "balance:  2.500000000000 XMR\nunlocked: 1.250000000000 XMR"
        );
    }

    #[tokio::test]
    async fn transfers_passes_filter_and_renders_rows() {
        let wallet = StubWallet::new();
        let args = TransferArgs {
            outgoing: true,
            ..TransferArgs::default()
        };
        let out = run(&wallet, Command::Transfers(args), false)
            .await
            .expect("run");

        assert!(out.contains("incoming"));
        assert!(out.contains("c0ffee"));
        assert!(out.contains("1.500000000000"));
        assert_eq!(
            *wallet.seen_filter.lock().expect("filter lock"),
            Some(TransferFilter::none().outgoing(true))
        );
    }

    #[tokio::test]
    async fn transfers_json_lists_status_names() {
        let out = run(
            &StubWallet::new(),
            Command::Transfers(TransferArgs::default()),
            true,
        )
        .await
        .expect("run");
        let parsed: serde_json::Value = serde_json::from_str(&out).expect("valid json");
        assert_eq!(parsed[0]["status"], "incoming");
        assert_eq!(parsed[0]["timestamp"], 1_700_000_000u64);
    }

    #[tokio::test]
    async fn failures_keep_rpc_error_in_chain() {
        let err = run(&StubWallet::failing(), Command::Height, false)
            .await
            .expect_err("must fail");
        assert_eq!(err.to_string(), "getheight failed");
        let root = err
            .downcast_ref::<CoreError>()
            .expect("core error must be in the chain");
        assert_eq!(root.as_rpc().and_then(RpcError::status), Some(401));
    }

    #[test]
    fn empty_transfer_list_renders_placeholder() {
        assert_eq!(render_transfers(&[]), "no transfers");
    }
}
