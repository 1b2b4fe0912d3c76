// src/api/client.rs
//! Pure HTTP client wrapper for the WordPress REST API.
//!
//! A thin wrapper around reqwest. It sets the default headers and turns a
//! response into status, headers and body text, without judging the
//! status or parsing anything.

use crate::constants::USER_AGENT;
use crate::error::AppError;
use reqwest::{header, Client, Response};

/// A thin wrapper around reqwest Client for WordPress requests.
///
/// Cloning is cheap; clones share the underlying connection pool.
#[derive(Clone)]
pub struct WordPressHttpClient {
    client: Client,
}

impl WordPressHttpClient {
    /// Creates a new HTTP client. No credentials are sent.
    pub fn new() -> Result<Self, AppError> {
        let client = Client::builder()
            .default_headers(Self::create_headers())
            .user_agent(USER_AGENT)
            .build()?;
        Ok(Self { client })
    }

    /// Creates the default headers for WordPress API requests.
    fn create_headers() -> header::HeaderMap {
        let mut headers = header::HeaderMap::new();
        headers.insert(
            header::ACCEPT,
            header::HeaderValue::from_static("application/json"),
        );
        headers
    }
}

#[async_trait::async_trait]
impl super::HttpTransport for WordPressHttpClient {
    async fn get(&self, url: &str) -> Result<ApiResponse<String>, AppError> {
        log::debug!("GET {}", url);

        let response = self.client.get(url).send().await?;

        log::debug!("{} -> {}", url, response.status());

        extract_response_text(url, response).await
    }
}

/// Result of an HTTP operation with response metadata.
#[derive(Debug)]
pub struct ApiResponse<T> {
    pub data: T,
    pub status: reqwest::StatusCode,
    /// The URL as requested, before any redirects.
    pub url: String,
    pub headers: header::HeaderMap,
}

impl ApiResponse<String> {
    /// A `200 OK` response with the given body and no headers.
    pub fn ok(url: impl Into<String>, body: impl Into<String>) -> Self {
        Self {
            data: body.into(),
            status: reqwest::StatusCode::OK,
            url: url.into(),
            headers: header::HeaderMap::new(),
        }
    }

    /// Adds a header, ignoring names or values that are not valid HTTP.
    pub fn with_header(mut self, name: &str, value: &str) -> Self {
        if let (Ok(name), Ok(value)) = (
            header::HeaderName::from_bytes(name.as_bytes()),
            header::HeaderValue::from_str(value),
        ) {
            self.headers.insert(name, value);
        }
        self
    }

    pub fn with_status(mut self, status: reqwest::StatusCode) -> Self {
        self.status = status;
        self
    }
}

/// Extracts the response body as text with metadata.
///
/// The requested URL is kept rather than `response.url()` so error
/// messages name what the caller asked for.
pub async fn extract_response_text(
    requested_url: &str,
    response: Response,
) -> Result<ApiResponse<String>, AppError> {
    let status = response.status();
    let headers = response.headers().clone();
    let text = response.text().await?;

    Ok(ApiResponse {
        data: text,
        status,
        url: requested_url.to_string(),
        headers,
    })
}
