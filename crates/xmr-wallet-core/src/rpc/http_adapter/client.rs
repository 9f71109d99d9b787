use std::sync::atomic::{AtomicU64, Ordering};

use async_trait::async_trait;
use reqwest::{header, StatusCode, Url};
use serde::de::DeserializeOwned;
use serde::Serialize;
use tracing::{debug, trace};

use crate::error::{CoreError, RpcError};
use crate::rpc::types::{
    GetAddressResult, GetBalanceResult, GetHeightResult, GetTransfersParams, GetTransfersResult,
};
use crate::rpc::WalletRpc;
use crate::transfers::merge_transfers;
use crate::types::{Balance, Transfer, TransferFilter};

use super::connection::{parse_connection, resolve_credentials, Credentials};
use super::digest;
use super::protocol::{decode_result, encode_request};

const NO_PARAMS: Option<&()> = None;

/// `monero-wallet-rpc` JSON-RPC client over HTTP(S) with Digest auth.
///
/// Configuration is fixed at construction. Every call makes a single attempt:
/// an unauthenticated POST to obtain the Digest challenge, then one
/// authenticated POST carrying the same body. Nothing is retried and no
/// timeout is applied beyond what the supplied `reqwest::Client` enforces.
#[derive(Debug)]
pub struct WalletClient {
    client: reqwest::Client,
    url: Url,
    credentials: Credentials,
    next_id: AtomicU64,
}

impl WalletClient {
    /// Create a client for `url` (e.g. `http://127.0.0.1:18082/json_rpc`)
    /// using a default transport with no client-side timeout.
    pub fn new(url: &str, username: &str, password: &str) -> Result<Self, CoreError> {
        let client = reqwest::Client::builder()
            .build()
            .map_err(|e| CoreError::InvalidConfig(format!("build HTTP client: {e}")))?;
        Self::with_http_client(url, username, password, client)
    }

    /// Create a client over a caller-configured transport. Timeouts, proxies
    /// and TLS settings belong on `client`.
    pub fn with_http_client(
        url: &str,
        username: &str,
        password: &str,
        client: reqwest::Client,
    ) -> Result<Self, CoreError> {
        let url = parse_connection(url)?;
        let credentials = resolve_credentials(username, password)?;

        Ok(Self {
            client,
            url,
            credentials,
            next_id: AtomicU64::new(0),
        })
    }

    pub fn url(&self) -> &str {
        self.url.as_str()
    }

    async fn rpc_call<P, R>(&self, method: &str, params: Option<&P>) -> Result<R, CoreError>
    where
        P: Serialize + Sync,
        R: DeserializeOwned,
    {
        let id = self.next_id.fetch_add(1, Ordering::Relaxed);
        debug!(
            rpc.id = id,
            rpc.method = method,
            rpc.params = params.is_some(),
            "rpc call"
        );
        let body = encode_request(id, method, params)?;

        let mut response = self.send(body.clone(), None).await?;
        if response.status() == StatusCode::UNAUTHORIZED {
            let authorization = digest::find_challenge(response.headers())
                .map(|challenge| {
                    digest::authorization(challenge, &self.url, &self.credentials, &body)
                })
                .transpose()?;
            if let Some(authorization) = authorization {
                debug!(rpc.id = id, rpc.method = method, "answering digest challenge");
                response = self.send(body, Some(authorization)).await?;
            }
        }

        let status = response.status();
        let body = response.text().await.map_err(RpcError::Connection)?;
        debug!(rpc.id = id, rpc.method = method, %status, body_len = body.len(), "rpc response");
        trace!(rpc.id = id, rpc.method = method, body = %body, "rpc response body");

        if status != StatusCode::OK {
            return Err(RpcError::Protocol {
                status: status.as_u16(),
            }
            .into());
        }

        Ok(decode_result(method, &body)?)
    }

    async fn send(
        &self,
        body: Vec<u8>,
        authorization: Option<String>,
    ) -> Result<reqwest::Response, RpcError> {
        let mut builder = self
            .client
            .post(self.url.clone())
            .header(header::CONTENT_TYPE, "application/json")
            .header(header::ACCEPT, "application/json")
            .body(body);
        if let Some(authorization) = authorization {
            builder = builder.header(header::AUTHORIZATION, authorization);
        }

        builder.send().await.map_err(RpcError::Connection)
    }
}

#[async_trait]
impl WalletRpc for WalletClient {
    async fn address(&self) -> Result<String, CoreError> {
        let result: GetAddressResult = self.rpc_call("getaddress", NO_PARAMS).await?;
        Ok(result.address)
    }

    async fn balance(&self) -> Result<Balance, CoreError> {
        let result: GetBalanceResult = self.rpc_call("getbalance", NO_PARAMS).await?;
        Ok(result.into())
    }

    async fn height(&self) -> Result<i64, CoreError> {
        let result: GetHeightResult = self.rpc_call("getheight", NO_PARAMS).await?;
        Ok(result.height)
    }

    async fn transfers(&self, filter: TransferFilter) -> Result<Vec<Transfer>, CoreError> {
        let params = GetTransfersParams::from(filter);
        let result: GetTransfersResult = self.rpc_call("get_transfers", Some(&params)).await?;
        Ok(merge_transfers(result))
    }
}
