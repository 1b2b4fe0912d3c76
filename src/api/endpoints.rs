// src/api/endpoints.rs
//! URL construction for the WordPress REST endpoints.
//!
//! Pure string building: no requests are made here, which keeps query
//! parameter order and the offset rule testable.

use crate::constants::WP_API_NAMESPACE;
use crate::types::{PostsListParams, SiteUrl, Slug};
use url::form_urlencoded;

/// Builds request URLs against one configured site.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Endpoints {
    site: SiteUrl,
}

impl Endpoints {
    pub fn new(site: SiteUrl) -> Self {
        Self { site }
    }

    pub fn site(&self) -> &SiteUrl {
        &self.site
    }

    /// `GET /tags?slug=<slug>`
    pub fn tags_by_slug(&self, slug: &Slug) -> String {
        format!("{}?slug={}", self.collection("tags"), encode(slug.as_str()))
    }

    /// `GET /posts?_embed&page=..&per_page=..&order=..&orderby=..[&tags=..][&offset=..]`
    pub fn posts_listing(&self, params: &PostsListParams, tag_id: Option<u64>) -> String {
        let mut url = format!(
            "{}?_embed&page={}&per_page={}&order={}&orderby={}",
            self.collection("posts"),
            params.page,
            params.per_page,
            params.order,
            params.orderby,
        );

        if let Some(tag_id) = tag_id {
            url.push_str(&format!("&tags={}", tag_id));
        }

        if let Some(offset) = params.effective_offset() {
            url.push_str(&format!("&offset={}", offset));
        }

        url
    }

    /// `GET /posts?slug=<slug>&_embed`
    pub fn post_by_slug(&self, slug: &Slug) -> String {
        format!("{}?slug={}&_embed", self.collection("posts"), encode(slug.as_str()))
    }

    /// `GET /pages?slug=<slug>&_embed`
    pub fn page_by_slug(&self, slug: &str) -> String {
        format!("{}?slug={}&_embed", self.collection("pages"), encode(slug))
    }

    fn collection(&self, name: &str) -> String {
        format!("{}{}/{}", self.site, WP_API_NAMESPACE, name)
    }
}

fn encode(value: &str) -> String {
    form_urlencoded::byte_serialize(value.as_bytes()).collect()
}
