//! Pure transformation of raw WordPress responses into front-end documents.
//!
//! - [`text`]: entity substitution and tag stripping
//! - [`blog`]: list and single-post transforms
//! - [`documents`]: the output document types

pub mod blog;
pub mod documents;
pub mod text;

pub use blog::{
    listing_title, post_to_document, post_to_list_item, posts_to_list_result, ListingTotals,
};
pub use documents::{
    PageInfo, PostConnection, PostDocument, PostListItem, PostListResult, PublishedDate, Seo,
    TagLink, Thumbnail,
};
