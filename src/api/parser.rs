// src/api/parser.rs
//! Status checking and JSON parsing of WordPress responses.

use super::client::ApiResponse;
use crate::constants::{ERROR_BODY_PREVIEW_LENGTH, TOTAL_ITEMS_HEADER, TOTAL_PAGES_HEADER};
use crate::error::{AppError, StatusPolicy};
use crate::transform::ListingTotals;
use reqwest::header::HeaderMap;
use serde::de::DeserializeOwned;

/// Checks the status against `policy`, then parses the body as JSON.
pub fn parse_api_response<T>(
    response: &ApiResponse<String>,
    policy: StatusPolicy,
) -> Result<T, AppError>
where
    T: DeserializeOwned,
{
    ensure_status(response, policy)?;
    parse_json_body(response)
}

/// Fails with [`AppError::FetchFailed`] when the status does not pass.
pub fn ensure_status(response: &ApiResponse<String>, policy: StatusPolicy) -> Result<(), AppError> {
    if policy.accepts(response.status) {
        return Ok(());
    }

    log::error!(
        "WordPress API returned {} for {}",
        response.status,
        response.url
    );
    Err(AppError::FetchFailed {
        url: response.url.clone(),
        status: response.status,
    })
}

fn parse_json_body<T>(response: &ApiResponse<String>) -> Result<T, AppError>
where
    T: DeserializeOwned,
{
    serde_json::from_str(&response.data).map_err(|e| {
        log::error!(
            "Failed to parse response from {}: {} (body starts: {})",
            response.url,
            e,
            preview(&response.data)
        );
        AppError::MalformedResponse {
            url: response.url.clone(),
            source: e,
        }
    })
}

/// Reads the pagination totals; each is 0 when missing or unparsable.
pub fn listing_totals(headers: &HeaderMap) -> ListingTotals {
    ListingTotals {
        total_posts: read_count_header(headers, TOTAL_ITEMS_HEADER),
        total_pages: read_count_header(headers, TOTAL_PAGES_HEADER),
    }
}

/// Parses the leading run of digits of a header value, so `"42"`, `"+42"`
/// and `" 42 items"` all read as 42. Anything else, including negative
/// counts and values past `u64::MAX`, reads as 0.
pub fn read_count_header(headers: &HeaderMap, name: &str) -> u64 {
    headers
        .get(name)
        .and_then(|value| value.to_str().ok())
        .map(|value| {
            let trimmed = value.trim_start();
            let trimmed = trimmed.strip_prefix('+').unwrap_or(trimmed);
            let digits_end = trimmed
                .find(|c: char| !c.is_ascii_digit())
                .unwrap_or(trimmed.len());
            trimmed[..digits_end].parse().unwrap_or(0)
        })
        .unwrap_or(0)
}

fn preview(body: &str) -> &str {
    match body.char_indices().nth(ERROR_BODY_PREVIEW_LENGTH) {
        Some((end, _)) => &body[..end],
        None => body,
    }
}
