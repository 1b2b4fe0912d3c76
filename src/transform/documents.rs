// src/transform/documents.rs
//! Output documents handed to the blog front-end.
//!
//! Field names serialize in camelCase to match the storefront's GraphQL
//! blog fragments, so a rendering layer can swap data sources.

use serde::{Deserialize, Serialize};

/// One page of the blog index.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PostListResult {
    pub name: String,
    pub description: String,
    pub posts: PostConnection,
    pub is_visible_in_navigation: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PostConnection {
    pub page_info: PageInfo,
    pub items: Vec<PostListItem>,
}

/// Pagination state, derived from the API-reported totals.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PageInfo {
    pub has_next_page: bool,
    pub has_previous_page: bool,
    pub start_cursor: String,
    pub end_cursor: String,
    pub current_page: u32,
    pub total_pages: u64,
    pub total_posts: u64,
    pub per_page: u32,
}

impl PageInfo {
    pub fn new(current_page: u32, per_page: u32, total_posts: u64, total_pages: u64) -> Self {
        Self {
            has_next_page: u64::from(current_page) < total_pages,
            has_previous_page: current_page > 1,
            start_cursor: current_page.to_string(),
            end_cursor: current_page.saturating_add(1).to_string(),
            current_page,
            total_pages,
            total_posts,
            per_page,
        }
    }
}

/// A post card on the blog index.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PostListItem {
    pub author: String,
    pub entity_id: String,
    pub name: String,
    pub plain_text_summary: String,
    pub published_date: PublishedDate,
    pub thumbnail_image: Option<Thumbnail>,
}

/// A full blog post.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PostDocument {
    pub author: String,
    pub html_body: String,
    pub content: String,
    pub id: String,
    pub name: String,
    pub published_date: PublishedDate,
    pub tags: Vec<TagLink>,
    pub thumbnail_image: Option<Thumbnail>,
    pub seo: Seo,
    pub is_visible_in_navigation: bool,
    pub vanity_url: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PublishedDate {
    pub utc: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Thumbnail {
    pub alt_text: String,
    pub url: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TagLink {
    pub name: String,
    pub href: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Seo {
    pub meta_keywords: String,
    pub meta_description: String,
    pub page_title: String,
}
