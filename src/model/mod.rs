//! Raw WordPress REST API shapes.
//!
//! These mirror what `/wp-json/wp/v2` returns, limited to the fields the
//! transforms read. Unknown fields are ignored and missing optional ones
//! default, so partially embedded responses still parse.

mod page;
mod post;
mod tag;

pub use page::PageDocument;
pub use post::{Embedded, Rendered, WpAuthor, WpMedia, WpPost, WpTerm};
pub use tag::WpTag;

use serde::Serialize;

/// The root content kinds this adapter hands to a rendering layer.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum ContentDocument {
    PostList(crate::transform::PostListResult),
    Post(crate::transform::PostDocument),
    Page(PageDocument),
}

impl ContentDocument {
    pub fn object_type_name(&self) -> &str {
        match self {
            ContentDocument::PostList(_) => "post list",
            ContentDocument::Post(_) => "post",
            ContentDocument::Page(_) => "page",
        }
    }

    /// Returns a human-readable display title for this document.
    pub fn display_title(&self) -> String {
        match self {
            ContentDocument::PostList(list) => list.name.clone(),
            ContentDocument::Post(post) => post.name.clone(),
            ContentDocument::Page(page) => page.title().unwrap_or("Untitled").to_string(),
        }
    }
}
