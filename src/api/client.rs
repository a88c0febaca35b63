use std::time::Duration;

use reqwest::header::AUTHORIZATION;
use reqwest::{Client, Method, RequestBuilder, StatusCode, Url};
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;

use crate::api::error::ApiError;
use crate::api::types::QueryParams;
use crate::config::ApiConfig;

const REQUEST_ID_HEADER: &str = "x-request-id";

/// Thin JSON client over the back-office REST API.
///
/// Cloning is cheap; clones share one connection pool.
#[derive(Clone)]
pub struct ApiClient {
    http: Client,
    base_url: String,
    token: Option<String>,
}

impl ApiClient {
    pub fn new(config: &ApiConfig) -> Result<Self, ApiError> {
        let http = Client::builder()
            .timeout(Duration::from_secs(u64::from(config.timeout_seconds)))
            .connect_timeout(Duration::from_secs(u64::from(config.connect_timeout_seconds)))
            .build()
            .map_err(|source| ApiError::Transport {
                url: config.base_url.clone(),
                source,
            })?;

        Ok(Self {
            http,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            token: config.resolve_token(),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Absolute URL for `path` with `query` appended.
    pub fn url(&self, path: &str, query: &[(&'static str, String)]) -> Result<Url, ApiError> {
        let raw = format!("{}/{}", self.base_url, path.trim_start_matches('/'));
        let mut url = Url::parse(&raw).map_err(|_| ApiError::InvalidUrl { url: raw.clone() })?;
        if !query.is_empty() {
            let mut pairs = url.query_pairs_mut();
            for (key, value) in query {
                pairs.append_pair(key, value);
            }
        }
        Ok(url)
    }

    pub async fn get<R>(&self, path: &str) -> Result<R, ApiError>
    where
        R: DeserializeOwned,
    {
        let url = self.url(path, &[])?;
        self.send(self.request(Method::GET, url.clone()), url).await
    }

    pub async fn get_with<R, Q>(&self, path: &str, query: &Q) -> Result<R, ApiError>
    where
        R: DeserializeOwned,
        Q: QueryParams,
    {
        let url = self.url(path, &query.pairs())?;
        self.send(self.request(Method::GET, url.clone()), url).await
    }

    pub async fn post<B, R>(&self, path: &str, body: &B) -> Result<R, ApiError>
    where
        B: Serialize + ?Sized,
        R: DeserializeOwned,
    {
        let url = self.url(path, &[])?;
        self.send(self.request(Method::POST, url.clone()).json(body), url)
            .await
    }

    pub async fn put<B, R>(&self, path: &str, body: &B) -> Result<R, ApiError>
    where
        B: Serialize + ?Sized,
        R: DeserializeOwned,
    {
        let url = self.url(path, &[])?;
        self.send(self.request(Method::PUT, url.clone()).json(body), url)
            .await
    }

    fn request(&self, method: Method, url: Url) -> RequestBuilder {
        let mut builder = self
            .http
            .request(method, url)
            .header(REQUEST_ID_HEADER, uuid::Uuid::new_v4().to_string());
        if let Some(token) = &self.token {
            builder = builder.header(AUTHORIZATION, format!("Bearer {}", token));
        }
        builder
    }

    async fn send<R>(&self, builder: RequestBuilder, url: Url) -> Result<R, ApiError>
    where
        R: DeserializeOwned,
    {
        let url = url.to_string();
        let response = builder.send().await.map_err(|source| ApiError::Transport {
            url: url.clone(),
            source,
        })?;
        let status = response.status();
        let bytes = response.bytes().await.map_err(|source| ApiError::Transport {
            url: url.clone(),
            source,
        })?;

        if !status.is_success() {
            if status == StatusCode::UNAUTHORIZED {
                tracing::warn!(url = %url, "Session rejected by API (401); token may have expired");
            } else {
                tracing::debug!(url = %url, status = status.as_u16(), "API returned error status");
            }
            let body = serde_json::from_slice::<Value>(&bytes).unwrap_or(Value::Null);
            return Err(ApiError::Status {
                url,
                status: status.as_u16(),
                body,
            });
        }

        serde_json::from_slice(&bytes).map_err(|source| ApiError::Decode { url, source })
    }
}
