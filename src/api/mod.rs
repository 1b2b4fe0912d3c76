// src/api/mod.rs
//! WordPress REST API interaction: the ability to retrieve blog content.
//!
//! Split into I/O ([`client`]), URL construction ([`endpoints`]), response
//! checking and parsing ([`parser`]) and the query operations that tie
//! them to the transforms ([`fetcher`]).

pub mod client;
pub mod endpoints;
pub mod fetcher;
pub mod parser;

use crate::error::AppError;
use crate::model::{ContentDocument, PageDocument};
use crate::transform::{PostDocument, PostListResult};
use crate::types::{ContentQuery, PostsListParams, SinglePageParams, SinglePostParams};

pub use client::{ApiResponse, WordPressHttpClient};
pub use endpoints::Endpoints;
pub use fetcher::WordPressFetcher;

/// One HTTP GET, answered with status, headers and the raw body.
///
/// The operations depend on this trait, never on `reqwest` directly, so
/// tests can answer from fixtures.
#[async_trait::async_trait]
pub trait HttpTransport: Send + Sync {
    async fn get(&self, url: &str) -> Result<ApiResponse<String>, AppError>;
}

/// The ability to retrieve blog content from a WordPress site.
///
/// Every operation returns `Ok(None)` when the lookup matched nothing.
#[async_trait::async_trait]
pub trait WordPressRepository: Send + Sync {
    async fn list_posts(
        &self,
        params: &PostsListParams,
    ) -> Result<Option<PostListResult>, AppError>;

    async fn retrieve_post(
        &self,
        params: &SinglePostParams,
    ) -> Result<Option<PostDocument>, AppError>;

    async fn retrieve_page(
        &self,
        params: &SinglePageParams,
    ) -> Result<Option<PageDocument>, AppError>;

    /// Runs whichever operation the query names.
    async fn resolve_query(
        &self,
        query: &ContentQuery,
    ) -> Result<Option<ContentDocument>, AppError> {
        Ok(match query {
            ContentQuery::Posts(params) => self
                .list_posts(params)
                .await?
                .map(ContentDocument::PostList),
            ContentQuery::Post(params) => self
                .retrieve_post(params)
                .await?
                .map(ContentDocument::Post),
            ContentQuery::Page(params) => self
                .retrieve_page(params)
                .await?
                .map(ContentDocument::Page),
        })
    }
}
