//! HTTP client for the Nanigans reporting API.

use std::time::Duration;

use url::Url;

use crate::{
    types::{Payload, Response},
    Error, PreparedRequest,
};

const DEFAULT_BASE_URL: &str = "https://api.nanigans.com";
const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// HTTP client for the Nanigans reporting API.
///
/// Every request is scoped to one site and authenticated with an access
/// token passed as the `access_token` query parameter.
pub struct Client {
    /// Base URL for the API. Defaults to `https://api.nanigans.com`.
    base_api_url: String,
    site_id: String,
    access_token: String,
    timeout: Duration,
}

impl Client {
    /// Creates a new client pointing at the production API.
    pub fn new(site_id: &str, access_token: &str) -> Self {
        Self::with_base_url(DEFAULT_BASE_URL, site_id, access_token)
    }

    /// Creates a new client with a custom base URL. Used for testing with wiremock.
    pub fn with_base_url(base_url: &str, site_id: &str, access_token: &str) -> Self {
        Self {
            base_api_url: base_url.trim_end_matches('/').to_string(),
            site_id: site_id.to_string(),
            access_token: access_token.to_string(),
            timeout: DEFAULT_TIMEOUT,
        }
    }

    /// Overrides the per-request timeout (30 seconds by default).
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn site_id(&self) -> &str {
        &self.site_id
    }

    fn get_url(&self, request: &PreparedRequest) -> Result<Url, Error> {
        let mut url = Url::parse(&self.base_api_url).map_err(|e| {
            tracing::error!("Invalid base URL {}: {}", self.base_api_url, e);
            Error::RequestFailed
        })?;
        let segments = request.path_segments(&self.site_id)?;
        url.path_segments_mut()
            .map_err(|_| {
                tracing::error!("Base URL cannot carry a path: {}", self.base_api_url);
                Error::RequestFailed
            })?
            .pop_if_empty()
            .extend(segments);

        let mut url = match &request.params {
            Some(params) => params.add_to_url(&url),
            None => url,
        };
        url.query_pairs_mut()
            .append_pair("access_token", &self.access_token);
        Ok(url)
    }

    /// Issues the request and decodes the body into a [`Response`].
    pub async fn send(&self, request: &PreparedRequest) -> Result<Response, Error> {
        let url = self.get_url(request)?;
        let client = reqwest::Client::builder()
            .user_agent(concat!("nanigans-rs/", env!("CARGO_PKG_VERSION")))
            .timeout(self.timeout)
            .build()
            .map_err(|e| {
                tracing::error!("Failed to build HTTP client: {}", e);
                Error::RequestFailed
            })?;
        let resp = client
            .get(url)
            .header("accept", "application/json")
            .send()
            .await
            .map_err(|e| {
                tracing::error!("Failed to get {}: {}", request.operation, e);
                Error::RequestFailed
            })?;

        let status = resp.status();
        let body = resp.text().await.map_err(|e| {
            tracing::error!("Failed to read response body: {}", e);
            Error::RequestFailed
        })?;

        if !status.is_success() {
            let snippet = truncate_body(&body);
            tracing::error!("Request failed with status {}: {}", status, snippet);
            return Err(Error::HttpStatus {
                status: status.as_u16(),
                body: snippet,
            });
        }

        let payload = serde_json::from_str::<Payload>(&body).map_err(|e| {
            let snippet = truncate_body(&body);
            tracing::error!("Failed to parse {}: {} | body: {}", request.operation, e, snippet);
            Error::Parse(e.to_string())
        })?;

        Ok(payload.into())
    }
}

fn truncate_body(body: &str) -> String {
    const MAX: usize = 2000;
    if body.len() <= MAX {
        body.to_string()
    } else {
        let mut end = MAX;
        while !body.is_char_boundary(end) {
            end -= 1;
        }
        format!("{}...[truncated]", &body[..end])
    }
}
