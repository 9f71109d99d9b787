#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    #[error(transparent)]
    Rpc(#[from] RpcError),

    #[error("invalid client configuration: {0}")]
    InvalidConfig(String),
}

/// Failures raised while talking to the wallet daemon.
#[derive(Debug, thiserror::Error)]
pub enum RpcError {
    /// The HTTP request could not be sent or its body could not be read.
    #[error("connection failure: {0}")]
    Connection(#[source] reqwest::Error),

    #[error("request returned invalid status code {status}")]
    Protocol { status: u16 },

    #[error("decode {method} response: {message}")]
    Decode { method: String, message: String },

    /// The request body could not be serialized.
    #[error("encode {method} request: {message}")]
    Encode { method: String, message: String },

    /// The daemon answered with a JSON-RPC error object.
    #[error("wallet RPC error {code}: {message}")]
    Server { code: i64, message: String },

    #[error("digest authentication failed: {0}")]
    Auth(String),
}

impl RpcError {
    /// HTTP status code carried by a protocol error.
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Protocol { status } => Some(*status),
            _ => None,
        }
    }
}

impl CoreError {
    pub fn as_rpc(&self) -> Option<&RpcError> {
        match self {
            Self::Rpc(err) => Some(err),
            Self::InvalidConfig(_) => None,
        }
    }
}
