//! HTTP Digest challenge handling.

use digest_auth::AuthContext;
use reqwest::header::{self, HeaderMap};
use reqwest::Url;

use crate::error::RpcError;

use super::connection::{request_uri, Credentials};

/// First `WWW-Authenticate` value offering the Digest scheme, if any.
pub(super) fn find_challenge(headers: &HeaderMap) -> Option<&str> {
    headers
        .get_all(header::WWW_AUTHENTICATE)
        .iter()
        .filter_map(|value| value.to_str().ok())
        .find(|value| {
            value
                .trim_start()
                .get(..6)
                .is_some_and(|scheme| scheme.eq_ignore_ascii_case("digest"))
        })
}

/// Build the `Authorization` header value answering `challenge` for a POST of
/// `body` to `url`.
pub(super) fn authorization(
    challenge: &str,
    url: &Url,
    credentials: &Credentials,
    body: &[u8],
) -> Result<String, RpcError> {
    let mut prompt = digest_auth::parse(challenge)
        .map_err(|e| RpcError::Auth(format!("unparseable challenge `{challenge}`: {e}")))?;
    let context = AuthContext::new_post(
        credentials.username.as_str(),
        credentials.password.as_str(),
        request_uri(url),
        Some(body),
    );
    let answer = prompt
        .respond(&context)
        .map_err(|e| RpcError::Auth(format!("cannot answer challenge: {e}")))?;
    Ok(answer.to_header_string())
}

#[cfg(test)]
mod tests {
    use reqwest::header::HeaderValue;

    use super::*;
    use crate::rpc::http_adapter::connection::resolve_credentials;

    const CHALLENGE: &str =
        r#"Digest qop="auth",algorithm=MD5,realm="monero-rpc",nonce="q2Rx8bvUdDmw1ZFVdCXXOg==",stale=false"#;

    #[test]
    fn find_challenge_skips_other_schemes() {
        let mut headers = HeaderMap::new();
        headers.append(header::WWW_AUTHENTICATE, HeaderValue::from_static("Basic realm=\"x\""));
        headers.append(header::WWW_AUTHENTICATE, HeaderValue::from_static(CHALLENGE));
        assert_eq!(find_challenge(&headers), Some(CHALLENGE));
    }

    #[test]
    fn find_challenge_none_without_digest() {
        let mut headers = HeaderMap::new();
        headers.append(header::WWW_AUTHENTICATE, HeaderValue::from_static("Basic realm=\"x\""));
        assert_eq!(find_challenge(&headers), None);
        assert_eq!(find_challenge(&HeaderMap::new()), None);
    }

    #[test]
    fn authorization_carries_username_realm_and_uri() {
        let url = Url::parse("http://127.0.0.1:18082/json_rpc").expect("static url");
        let creds = resolve_credentials("alice", "secret").expect("valid credentials");
        let header = authorization(CHALLENGE, &url, &creds, b"{}").expect("answer challenge");

        assert!(header.starts_with("Digest "));
        assert!(header.contains(r#"username="alice""#));
        assert!(header.contains(r#"realm="monero-rpc""#));
        assert!(header.contains(r#"uri="/json_rpc""#));
        assert!(!header.contains("secret"));
    }

    #[test]
    fn authorization_rejects_malformed_challenge() {
        let url = Url::parse("http://127.0.0.1:18082/json_rpc").expect("static url");
        let creds = resolve_credentials("alice", "secret").expect("valid credentials");
        let err = authorization("Digest", &url, &creds, b"{}").expect_err("must reject");
        assert!(matches!(err, RpcError::Auth(_)));
    }
}
