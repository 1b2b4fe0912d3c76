// src/lib.rs
//! wp2content library: fetches WordPress blog content and reshapes it for a front-end.
//!
//! # Public API
//!
//! The library exposes types organized by concern:
//! - **Error handling**: `AppError`, `StatusPolicy`, `ValidationError`
//! - **Configuration**: `SiteConfig`, `PipelineConfig`
//! - **Query parameters**: `PostsListParams`, `SinglePostParams`, `SinglePageParams`
//! - **Raw API model**: `WpPost`, `WpTag`, `PageDocument`
//! - **API client**: `WordPressFetcher`, `WordPressRepository`, `HttpTransport`
//! - **Transforms**: `posts_to_list_result`, `post_to_document` and their documents
//!
//! ```no_run
//! use wp2content::{PostsListParams, SiteConfig, SiteUrl, WordPressFetcher, WordPressRepository};
//!
//! # async fn run() -> Result<(), wp2content::AppError> {
//! let config = SiteConfig::new(SiteUrl::new("https://blog.example.com"));
//! let fetcher = WordPressFetcher::connect(&config)?;
//! if let Some(blog) = fetcher.list_posts(&PostsListParams::default()).await? {
//!     println!("{} has {} posts", blog.name, blog.posts.page_info.total_posts);
//! }
//! # Ok(())
//! # }
//! ```

mod api;
mod config;
mod constants;
mod error;
mod model;
mod output;
mod pipeline;
mod transform;
mod types;

// --- Error Handling ---
pub use crate::error::{AppError, Result, StatusPolicy};
pub use crate::types::ValidationError;

// --- Configuration ---
pub use crate::config::{CommandLineInput, PipelineConfig, QueryCommand, SiteConfig};

// --- Domain Types ---
pub use crate::types::{
    ContentPath, ContentQuery, Locale, OrderBy, PostsListParams, RenderedDocument,
    SinglePageParams, SinglePostParams, SiteUrl, Slug, SortOrder,
};

// --- Raw API Model ---
pub use crate::model::{
    ContentDocument, Embedded, PageDocument, Rendered, WpAuthor, WpMedia, WpPost, WpTag, WpTerm,
};

// --- API Client ---
pub use crate::api::{
    fetcher::ResolvedTag,
    parser::{ensure_status, listing_totals, parse_api_response, read_count_header},
    ApiResponse, Endpoints, HttpTransport, WordPressFetcher, WordPressHttpClient,
    WordPressRepository,
};

// --- Transforms ---
pub use crate::transform::{
    listing_title, post_to_document, post_to_list_item, posts_to_list_result,
    text::{normalize_title, strip_tags, summarize_excerpt},
    ListingTotals, PageInfo, PostConnection, PostDocument, PostListItem, PostListResult,
    PublishedDate, Seo, TagLink, Thumbnail,
};

// --- Pipeline Traits ---
pub use crate::pipeline::{render_json, ContentSource, DocumentComposer, DocumentDelivery};

// --- Output ---
pub use crate::output::{deliver, DeliveryTarget, OutputPlan, OutputReport};
