use serde::de::DeserializeOwned;

use crate::error::RpcError;

#[derive(serde::Serialize)]
pub(super) struct JsonRpcRequest<'a, P> {
    pub(super) jsonrpc: &'static str,
    pub(super) id: u64,
    pub(super) method: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub(super) params: Option<&'a P>,
}

#[derive(serde::Deserialize)]
pub(super) struct JsonRpcResponse {
    pub(super) result: Option<serde_json::Value>,
    pub(super) error: Option<serde_json::Value>,
}

/// Serialize the JSON-RPC envelope for `method`; `params` is omitted when
/// absent.
pub(super) fn encode_request<P: serde::Serialize>(
    id: u64,
    method: &str,
    params: Option<&P>,
) -> Result<Vec<u8>, RpcError> {
    let req = JsonRpcRequest {
        jsonrpc: "2.0",
        id,
        method,
        params,
    };
    serde_json::to_vec(&req).map_err(|e| RpcError::Encode {
        method: method.to_owned(),
        message: e.to_string(),
    })
}

/// Decode a JSON-RPC response body into the method's result type.
pub(super) fn decode_result<R: DeserializeOwned>(method: &str, body: &str) -> Result<R, RpcError> {
    let decoded: JsonRpcResponse = serde_json::from_str(body).map_err(|e| RpcError::Decode {
        method: method.to_owned(),
        message: format!("invalid JSON-RPC response: {e}; body={body}"),
    })?;

    if let Some(err) = decoded.error {
        return Err(parse_jsonrpc_error(method, err));
    }

    let result = decoded.result.ok_or_else(|| RpcError::Decode {
        method: method.to_owned(),
        message: "response has no result".to_owned(),
    })?;

    serde_json::from_value(result).map_err(|e| RpcError::Decode {
        method: method.to_owned(),
        message: format!("unexpected result shape: {e}"),
    })
}

/// Parse a JSON-RPC error value into a structured `RpcError`.
///
/// Errors shaped `{"code": <int>, "message": <string>}` become `Server`;
/// anything else is reported as a decode failure with the raw JSON.
pub(super) fn parse_jsonrpc_error(method: &str, err: serde_json::Value) -> RpcError {
    #[derive(serde::Deserialize)]
    struct JsonRpcError {
        code: i64,
        message: String,
    }

    match serde_json::from_value::<JsonRpcError>(err.clone()) {
        Ok(parsed) => RpcError::Server {
            code: parsed.code,
            message: parsed.message,
        },
        Err(_) => RpcError::Decode {
            method: method.to_owned(),
            message: format!("non-standard JSON-RPC error: {err}"),
        },
    }
}
