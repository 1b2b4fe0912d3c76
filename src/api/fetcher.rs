// src/api/fetcher.rs
//! The three query operations: list posts, get a post, get a page.
//!
//! Each is at most two sequential GETs (tag lookup, then listing). Nothing
//! is cached or retried, and the first failure aborts the operation.

use super::endpoints::Endpoints;
use super::parser::{listing_totals, parse_api_response};
use super::{HttpTransport, WordPressHttpClient, WordPressRepository};
use crate::config::SiteConfig;
use crate::error::{AppError, StatusPolicy};
use crate::model::{PageDocument, WpPost, WpTag};
use crate::transform::{
    listing_title, post_to_document, posts_to_list_result, PostDocument, PostListResult,
};
use crate::types::{PostsListParams, SinglePageParams, SinglePostParams, Slug};
use serde_json::Value;
use std::sync::Arc;

/// Retrieves blog content from one WordPress site.
#[derive(Clone)]
pub struct WordPressFetcher {
    transport: Arc<dyn HttpTransport>,
    endpoints: Endpoints,
}

/// A tag slug resolved to the numeric id the posts endpoint filters on.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedTag {
    pub id: u64,
    pub name: String,
}

impl WordPressFetcher {
    pub fn new(transport: Arc<dyn HttpTransport>, config: &SiteConfig) -> Self {
        Self {
            transport,
            endpoints: Endpoints::new(config.site_url.clone()),
        }
    }

    /// A fetcher backed by a real HTTP client.
    pub fn connect(config: &SiteConfig) -> Result<Self, AppError> {
        let client = WordPressHttpClient::new()?;
        Ok(Self::new(Arc::new(client), config))
    }

    pub fn endpoints(&self) -> &Endpoints {
        &self.endpoints
    }

    /// Looks up a tag by slug. `Ok(None)` when no tag has that slug.
    pub async fn resolve_tag(&self, slug: &Slug) -> Result<Option<ResolvedTag>, AppError> {
        let url = self.endpoints.tags_by_slug(slug);
        let response = self.transport.get(&url).await?;
        let tags: Vec<WpTag> = parse_api_response(&response, StatusPolicy::SuccessRange)?;

        Ok(tags.into_iter().next().map(|tag| {
            log::info!("Resolved tag '{}' to id {} ({})", slug, tag.id, tag.name);
            ResolvedTag {
                id: tag.id,
                name: tag.name,
            }
        }))
    }
}

#[async_trait::async_trait]
impl WordPressRepository for WordPressFetcher {
    async fn list_posts(
        &self,
        params: &PostsListParams,
    ) -> Result<Option<PostListResult>, AppError> {
        log::debug!("Listing posts with locale hint '{}'", params.locale.as_str());

        let tag = match &params.tag {
            Some(slug) => match self.resolve_tag(slug).await? {
                Some(tag) => Some(tag),
                None => {
                    log::info!("No tag matches '{}'; skipping post listing", slug);
                    return Ok(None);
                }
            },
            None => None,
        };

        let url = self
            .endpoints
            .posts_listing(params, tag.as_ref().map(|tag| tag.id));
        let response = self.transport.get(&url).await?;
        let posts: Vec<WpPost> = parse_api_response(&response, StatusPolicy::SuccessRange)?;
        let totals = listing_totals(&response.headers);

        log::info!(
            "Fetched {} posts (page {} of {}, {} total)",
            posts.len(),
            params.page,
            totals.total_pages,
            totals.total_posts
        );

        let title = listing_title(tag.as_ref().map(|tag| tag.name.as_str()));
        Ok(Some(posts_to_list_result(
            &posts,
            &title,
            totals,
            params.page,
            params.per_page,
        )))
    }

    async fn retrieve_post(
        &self,
        params: &SinglePostParams,
    ) -> Result<Option<PostDocument>, AppError> {
        log::debug!("Retrieving post with locale hint '{}'", params.locale.as_str());

        let url = self.endpoints.post_by_slug(&params.slug);
        let response = self.transport.get(&url).await?;
        let posts: Vec<WpPost> = parse_api_response(&response, StatusPolicy::SuccessRange)?;

        match posts.first() {
            Some(post) => Ok(Some(post_to_document(post))),
            None => {
                log::info!("No post matches slug '{}'", params.slug);
                Ok(None)
            }
        }
    }

    async fn retrieve_page(
        &self,
        params: &SinglePageParams,
    ) -> Result<Option<PageDocument>, AppError> {
        log::debug!("Retrieving page with locale hint '{}'", params.locale.as_str());

        let slug = params.path.lookup_slug();
        let url = self.endpoints.page_by_slug(slug);
        let response = self.transport.get(&url).await?;
        let pages: Vec<Value> = parse_api_response(&response, StatusPolicy::ExactOk)?;

        match pages.into_iter().next() {
            Some(page) => Ok(Some(PageDocument::new(page))),
            None => {
                log::info!("No page matches slug '{}' (path '{}')", slug, params.path);
                Ok(None)
            }
        }
    }
}
