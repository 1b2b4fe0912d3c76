// src/transform/blog.rs
//! Raw WordPress posts → blog documents.
//!
//! Pure functions: the same input always yields the same document, and
//! nothing here performs I/O.

use super::documents::*;
use super::text::{normalize_title, strip_tags, summarize_excerpt};
use crate::constants::{BLOG_TITLE, TAG_ROUTE_PREFIX};
use crate::model::{WpMedia, WpPost};

/// Totals reported by the `X-WP-Total` / `X-WP-TotalPages` headers.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ListingTotals {
    pub total_posts: u64,
    pub total_pages: u64,
}

/// Title of a blog index page, optionally scoped to a tag.
pub fn listing_title(tag_name: Option<&str>) -> String {
    match tag_name {
        Some(name) if !name.is_empty() => format!("{}: {}", BLOG_TITLE, name),
        _ => BLOG_TITLE.to_string(),
    }
}

/// Builds a blog index page from one page of API results.
///
/// Pagination comes from `totals`, never from `posts.len()`: if the API
/// misreports its totals the page info is wrong in the same way.
pub fn posts_to_list_result(
    posts: &[WpPost],
    page_title: &str,
    totals: ListingTotals,
    current_page: u32,
    per_page: u32,
) -> PostListResult {
    PostListResult {
        name: page_title.to_string(),
        description: String::new(),
        posts: PostConnection {
            page_info: PageInfo::new(
                current_page,
                per_page,
                totals.total_posts,
                totals.total_pages,
            ),
            items: posts.iter().map(post_to_list_item).collect(),
        },
        is_visible_in_navigation: true,
    }
}

/// A post card: cleaned title and plain-text teaser.
pub fn post_to_list_item(post: &WpPost) -> PostListItem {
    PostListItem {
        author: post.author_name().to_string(),
        entity_id: post.slug.clone(),
        name: normalize_title(&post.title.rendered),
        plain_text_summary: summarize_excerpt(&post.excerpt.rendered),
        published_date: published_date(post),
        thumbnail_image: post.featured_media().map(thumbnail),
    }
}

/// A full post. Title and body are passed through raw; only the SEO
/// description has its tags stripped.
pub fn post_to_document(post: &WpPost) -> PostDocument {
    let terms = post.tag_terms();

    let tags = terms
        .iter()
        .map(|term| TagLink {
            name: term.name.clone(),
            href: format!("{}{}", TAG_ROUTE_PREFIX, term.slug),
        })
        .collect();

    let meta_keywords = terms
        .iter()
        .map(|term| term.name.as_str())
        .collect::<Vec<_>>()
        .join(",");

    PostDocument {
        author: post.author_name().to_string(),
        html_body: post.content.rendered.clone(),
        content: post.content.rendered.clone(),
        id: post.slug.clone(),
        name: post.title.rendered.clone(),
        published_date: published_date(post),
        tags,
        thumbnail_image: post.featured_media().map(thumbnail),
        seo: Seo {
            meta_keywords,
            meta_description: strip_tags(&post.excerpt.rendered).into_owned(),
            page_title: post.title.rendered.clone(),
        },
        is_visible_in_navigation: true,
        vanity_url: post.link.clone(),
    }
}

fn published_date(post: &WpPost) -> PublishedDate {
    PublishedDate {
        utc: post.date_gmt.clone().unwrap_or_default(),
    }
}

fn thumbnail(media: &WpMedia) -> Thumbnail {
    Thumbnail {
        alt_text: media.alt_text.clone().unwrap_or_default(),
        url: media.source_url.clone().unwrap_or_default(),
    }
}
