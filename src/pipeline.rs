// src/pipeline.rs
//! Pipeline capability traits: abstract the three stages of a lookup:
//! fetch, compose, deliver.
//!
//! Each trait describes a single capability, enabling testing each stage in isolation.

use crate::error::AppError;
use crate::model::ContentDocument;
use crate::output::OutputReport;
use crate::types::{ContentQuery, RenderedDocument};

/// Retrieves WordPress content for a query. `None` when nothing matched.
#[async_trait::async_trait]
pub trait ContentSource {
    async fn fetch(&self, query: &ContentQuery) -> Result<Option<ContentDocument>, AppError>;
}

/// Serializes a fetched document (or its absence) for delivery.
pub trait DocumentComposer {
    fn compose(&self, content: Option<&ContentDocument>) -> Result<RenderedDocument, AppError>;
}

/// Delivers a rendered document to its destinations.
pub trait DocumentDelivery {
    fn deliver(&self, document: RenderedDocument) -> Result<OutputReport, AppError>;
}

/// Renders a document as JSON. A missing document renders as `null`.
pub fn render_json(
    content: Option<&ContentDocument>,
    compact: bool,
) -> Result<RenderedDocument, AppError> {
    let mut json = if compact {
        serde_json::to_string(&content)?
    } else {
        serde_json::to_string_pretty(&content)?
    };
    json.push('\n');
    Ok(RenderedDocument::new(json))
}
