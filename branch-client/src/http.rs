//! HTTP client for network-based API calls

use crate::{ClientConfig, ClientError, ClientResult};
use reqwest::header::{self, HeaderMap, HeaderValue};
use reqwest::{Client, StatusCode, Url};
use serde::Serialize;
use serde::de::DeserializeOwned;

/// HTTP client for making requests to the branch API
#[derive(Debug, Clone)]
pub struct NetworkHttpClient {
    client: Client,
    base_url: Url,
    token: Option<String>,
}

impl NetworkHttpClient {
    /// Create a new HTTP client from configuration
    pub fn new(config: &ClientConfig) -> ClientResult<Self> {
        let mut headers = HeaderMap::new();
        headers.insert(header::CONTENT_TYPE, HeaderValue::from_static("application/json"));
        headers.insert(header::ACCEPT, HeaderValue::from_static("application/json"));

        let mut builder = Client::builder().default_headers(headers);
        if let Some(secs) = config.timeout {
            builder = builder.timeout(std::time::Duration::from_secs(secs));
        }

        let trimmed = config.base_url.trim_end_matches('/');
        if trimmed.is_empty() {
            return Err(ClientError::InvalidConfig("base URL is empty".into()));
        }
        let base_url = Url::parse(trimmed)
            .map_err(|e| ClientError::InvalidConfig(format!("base URL {trimmed:?}: {e}")))?;
        if base_url.cannot_be_a_base() {
            return Err(ClientError::InvalidConfig(format!(
                "base URL {trimmed:?} cannot carry a path"
            )));
        }

        Ok(Self {
            client: builder.build()?,
            base_url,
            token: config.token.clone(),
        })
    }

    /// 获取基础 URL
    pub fn base_url(&self) -> &str {
        self.base_url.as_str()
    }

    /// Get the configured token
    pub fn token(&self) -> Option<&str> {
        self.token.as_deref()
    }

    fn auth_header(&self) -> Option<String> {
        self.token.as_ref().map(|t| format!("Bearer {}", t))
    }

    /// Append path segments to the base URL, percent-encoding each one
    fn url(&self, segments: &[&str]) -> Url {
        let mut url = self.base_url.clone();
        // cannot_be_a_base was rejected in `new`
        if let Ok(mut path) = url.path_segments_mut() {
            path.pop_if_empty().extend(segments);
        }
        url
    }

    /// Make a GET request with query parameters
    pub async fn get_with_query<T, Q>(&self, segments: &[&str], query: &Q) -> ClientResult<T>
    where
        T: DeserializeOwned,
        Q: Serialize + ?Sized,
    {
        let url = self.url(segments);
        tracing::debug!(%url, "GET");

        let mut req = self.client.get(url).query(query);
        if let Some(auth) = self.auth_header() {
            req = req.header(header::AUTHORIZATION, auth);
        }

        let response = Self::check_status(req.send().await?).await?;
        let text = response.text().await?;
        serde_json::from_str(&text).map_err(Into::into)
    }

    /// Make a PUT request with JSON body; the response body is discarded
    pub async fn put<B>(&self, segments: &[&str], body: &B) -> ClientResult<()>
    where
        B: Serialize + ?Sized,
    {
        let url = self.url(segments);
        tracing::debug!(%url, "PUT");

        let mut req = self.client.put(url).json(body);
        if let Some(auth) = self.auth_header() {
            req = req.header(header::AUTHORIZATION, auth);
        }

        Self::check_status(req.send().await?).await?;
        Ok(())
    }

    /// Map non-success statuses to [`ClientError`]
    async fn check_status(response: reqwest::Response) -> ClientResult<reqwest::Response> {
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }

        let text = response.text().await.unwrap_or_default();
        match status {
            StatusCode::UNAUTHORIZED => Err(ClientError::Unauthorized),
            StatusCode::FORBIDDEN => Err(ClientError::Forbidden(text)),
            StatusCode::NOT_FOUND => Err(ClientError::NotFound(text)),
            StatusCode::BAD_REQUEST | StatusCode::UNPROCESSABLE_ENTITY => {
                Err(ClientError::Validation(text))
            }
            _ => Err(ClientError::Internal { status, body: text }),
        }
    }
}
