use reqwest::Url;

use crate::error::CoreError;

/// Username/password pair used to answer Digest challenges.
#[derive(Clone)]
pub(super) struct Credentials {
    pub(super) username: String,
    pub(super) password: String,
}

impl std::fmt::Debug for Credentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Credentials")
            .field("username", &self.username)
            .field("password", &"<redacted>")
            .finish()
    }
}

pub(super) fn resolve_credentials(username: &str, password: &str) -> Result<Credentials, CoreError> {
    if username.is_empty() {
        return Err(CoreError::InvalidConfig(
            "rpc username must not be empty".to_owned(),
        ));
    }

    Ok(Credentials {
        username: username.to_owned(),
        password: password.to_owned(),
    })
}

pub(super) fn parse_connection(connection: &str) -> Result<Url, CoreError> {
    let parsed = Url::parse(connection).map_err(|e| {
        CoreError::InvalidConfig(format!(
            "invalid connection `{connection}`: expected HTTP(S) URL ({e})"
        ))
    })?;
    match parsed.scheme() {
        "http" | "https" => Ok(parsed),
        other => Err(CoreError::InvalidConfig(format!(
            "unsupported connection scheme `{other}`; expected http or https"
        ))),
    }
}

/// Request-URI as it appears in the Digest `uri` parameter: path plus query.
pub(super) fn request_uri(url: &Url) -> String {
    match url.query() {
        Some(query) => format!("{}?{query}", url.path()),
        None => url.path().to_owned(),
    }
}
