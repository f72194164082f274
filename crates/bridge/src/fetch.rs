//! Best-effort authorized GET helper.
//!
//! Mirrors the page-side fetch wrapper: attach the panel token from the
//! store (or an explicit override), treat any non-2xx as failure, and
//! swallow every error into `None` after logging it. Callers that need to
//! tell failure modes apart should use a real client instead.

use tracing::{debug, warn};

use crate::token::{TokenStore, DEFAULT_TOKEN_KEY};

/// Options for [`get_json`].
#[derive(Debug, Clone)]
pub struct FetchOptions {
    /// Prefix the token with `Bearer `.
    pub with_bearer: bool,
    /// Header to carry the token in; doubles as the store key.
    pub header_name: String,
    /// Explicit token, bypassing the store.
    pub token: Option<String>,
}

impl Default for FetchOptions {
    fn default() -> Self {
        Self {
            with_bearer: false,
            header_name: DEFAULT_TOKEN_KEY.to_string(),
            token: None,
        }
    }
}

impl FetchOptions {
    pub fn bearer() -> Self {
        Self {
            with_bearer: true,
            ..Self::default()
        }
    }

    pub fn with_token(mut self, token: impl Into<String>) -> Self {
        self.token = Some(token.into());
        self
    }
}

/// Issue a GET request and parse the JSON body.
///
/// Returns `None` on any failure: bad URL, network error, non-2xx status,
/// or a body that is missing or not JSON.
pub async fn get_json(
    client: &reqwest::Client,
    url: &str,
    options: &FetchOptions,
    store: &dyn TokenStore,
) -> Option<serde_json::Value> {
    let url = match url::Url::parse(url) {
        Ok(url) => url,
        Err(err) => {
            warn!(%err, url, "fetch url is invalid");
            return None;
        }
    };

    let token = match &options.token {
        Some(token) => Some(token.clone()),
        None => match store.load(&options.header_name) {
            Ok(token) => token,
            Err(err) => {
                warn!(%err, key = %options.header_name, "could not read token store");
                None
            }
        },
    };

    let mut request = client.get(url);
    if let Some(token) = token {
        let value = if options.with_bearer {
            format!("Bearer {token}")
        } else {
            token
        };
        request = request.header(&options.header_name, value);
    }

    let response = match request.send().await {
        Ok(response) => response,
        Err(err) => {
            warn!(%err, "fetch request failed");
            return None;
        }
    };

    let status = response.status();
    if !status.is_success() {
        warn!(status = status.as_u16(), "fetch request failed");
        return None;
    }

    match response.json::<serde_json::Value>().await {
        Ok(serde_json::Value::Null) => {
            warn!("fetch returned an empty body");
            None
        }
        Ok(body) => {
            debug!("fetch complete");
            Some(body)
        }
        Err(err) => {
            warn!(%err, "fetch body is not JSON");
            None
        }
    }
}
