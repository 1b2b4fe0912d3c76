// src/types/domain_types.rs
//! Domain-specific newtypes for type safety and validation.

use super::ValidationError;
use serde::{Deserialize, Serialize};
use std::fmt;
use url::Url;

/// Base address of the WordPress site, e.g. `https://blog.example.com`.
///
/// An empty value is allowed: requests are then built against a relative
/// path and fail when sent. A trailing `/` is dropped so endpoint paths
/// can be appended verbatim.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SiteUrl(String);

impl SiteUrl {
    pub fn new(url: impl Into<String>) -> Self {
        let url = url.into();
        Self(url.trim().trim_end_matches('/').to_string())
    }

    /// Like [`SiteUrl::new`], but rejects anything that is not an absolute
    /// http(s) URL.
    pub fn parse(url: &str) -> Result<Self, ValidationError> {
        match Url::parse(url.trim()) {
            Ok(parsed) if parsed.scheme() == "http" || parsed.scheme() == "https" => {
                Ok(Self::new(url))
            }
            Ok(parsed) => Err(ValidationError::InvalidUrl {
                url: url.to_string(),
                reason: format!("unsupported scheme '{}'", parsed.scheme()),
            }),
            Err(e) => Err(ValidationError::InvalidUrl {
                url: url.to_string(),
                reason: e.to_string(),
            }),
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Display for SiteUrl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// URL-safe, human-readable identifier of a post, page or tag.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Slug(String);

impl Slug {
    pub fn new(slug: impl Into<String>) -> Result<Self, ValidationError> {
        let slug = slug.into();
        let trimmed = slug.trim();
        if trimmed.is_empty() {
            return Err(ValidationError::EmptyField("slug"));
        }
        Ok(Self(trimmed.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Slug {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Hierarchical page path such as `about/team/leadership`.
///
/// WordPress looks pages up by their own slug only, so the last segment
/// is what gets sent.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContentPath(String);

impl ContentPath {
    pub fn new(path: impl Into<String>) -> Result<Self, ValidationError> {
        let path = path.into();
        if path.trim().is_empty() {
            return Err(ValidationError::EmptyField("path"));
        }
        Ok(Self(path))
    }

    /// The final `/`-delimited segment. Empty when the path ends in `/`.
    pub fn lookup_slug(&self) -> &str {
        self.0.rsplit('/').next().unwrap_or_default()
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ContentPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Locale hint carried with every query.
///
/// Only meaningful for sites running a translation plugin; the core REST
/// API ignores it, so it is not added to request URLs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Locale(String);

impl Locale {
    pub fn new(locale: impl Into<String>) -> Self {
        Self(locale.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Default for Locale {
    fn default() -> Self {
        Self(crate::constants::DEFAULT_LOCALE.to_string())
    }
}

/// A document serialized and ready for delivery.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedDocument(String);

impl RenderedDocument {
    pub fn new(content: String) -> Self {
        Self(content)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_string(self) -> String {
        self.0
    }
}

impl fmt::Display for RenderedDocument {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
