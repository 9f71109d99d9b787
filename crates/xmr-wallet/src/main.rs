mod cli;
mod commands;

use std::sync::Arc;
use std::time::Duration;

use clap::Parser;
use eyre::WrapErr;

use xmr_wallet_core::{CoreError, RpcError, WalletClient, WalletRpc};

#[tokio::main]
async fn main() -> eyre::Result<()> {
    let args = cli::Cli::parse();

    // Results go to stdout; diagnostics stay on stderr.
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .with_level(true)
        .init();

    let mut http = reqwest::Client::builder();
    if let Some(secs) = args.timeout_secs {
        http = http.timeout(Duration::from_secs(secs));
    }
    let http = http.build().context("build HTTP client")?;

    let wallet: Arc<dyn WalletRpc> = Arc::new(
        WalletClient::with_http_client(&args.rpc_url, &args.rpc_user, &args.rpc_pass, http)
            .context("configure wallet RPC client")?,
    );
    tracing::debug!(rpc_url = %args.rpc_url, command = ?args.command, "running command");

    let output = commands::run(wallet.as_ref(), args.command, args.json)
        .await
        .map_err(|err| {
            let hint = err.downcast_ref::<CoreError>().and_then(rpc_error_hint);
            let message = format!("wallet RPC call to `{}` failed", args.rpc_url);
            match hint {
                Some(hint) => err.wrap_err(format!("{message}\n{hint}")),
                None => err.wrap_err(message),
            }
        })?;

    println!("{output}");
    Ok(())
}

/// Actionable hint for the common ways a wallet RPC call goes wrong.
fn rpc_error_hint(err: &CoreError) -> Option<&'static str> {
    match err.as_rpc()? {
        RpcError::Connection(source) if source.is_timeout() => {
            Some("hint: the wallet did not answer in time; raise --timeout-secs or check the daemon")
        }
        RpcError::Connection(_) => Some(
            "hint: request could not be sent; verify the URL and that monero-wallet-rpc is running",
        ),
        RpcError::Protocol { status: 401 } | RpcError::Auth(_) => {
            Some("hint: authentication failed; verify --rpc-user/--rpc-pass match --rpc-login")
        }
        RpcError::Protocol { status: 404 } => {
            Some("hint: endpoint path is invalid; the wallet RPC usually listens on /json_rpc")
        }
        RpcError::Server { code: -13, .. } => {
            Some("hint: no wallet is open; start monero-wallet-rpc with --wallet-file")
        }
        _ => None,
    }
}
