// src/constants.rs
//! Domain constants that define how the adapter talks to WordPress and
//! how the blog front-end expects its documents to look.

// ---------------------------------------------------------------------------
// WordPress REST API
// ---------------------------------------------------------------------------

/// Path prefix of the core WordPress REST namespace.
pub const WP_API_NAMESPACE: &str = "/wp-json/wp/v2";

/// Response header carrying the total number of matching items.
pub const TOTAL_ITEMS_HEADER: &str = "X-WP-Total";

/// Response header carrying the total number of result pages.
pub const TOTAL_PAGES_HEADER: &str = "X-WP-TotalPages";

/// Taxonomy name WordPress gives to post tags inside `_embedded["wp:term"]`.
pub const TAG_TAXONOMY: &str = "post_tag";

/// Slot of the tag group in `_embedded["wp:term"]` when terms carry no
/// taxonomy name. WordPress emits categories first, then tags.
pub const TAG_TERM_SLOT: usize = 1;

/// Environment variable holding the WordPress site base URL.
pub const SITE_URL_ENV: &str = "WORDPRESS_URL";

// ---------------------------------------------------------------------------
// Listing defaults
// ---------------------------------------------------------------------------

/// First page of a listing.
pub const DEFAULT_PAGE: u32 = 1;

/// Posts per page on the blog index (a 3x3 card grid).
pub const DEFAULT_PER_PAGE: u32 = 9;

/// Locale hint assumed when the caller gives none.
pub const DEFAULT_LOCALE: &str = "en";

// ---------------------------------------------------------------------------
// Front-end document shape
// ---------------------------------------------------------------------------

/// Page title of the blog index; a tag filter appends `": <tag name>"`.
pub const BLOG_TITLE: &str = "Blog";

/// Route prefix of tag listing pages on the storefront.
pub const TAG_ROUTE_PREFIX: &str = "/blog/tag/";

/// Trailing call-to-action WordPress themes append to auto excerpts.
pub const CONTINUE_READING: &str = "Continue Reading";

/// User agent sent with every request.
pub const USER_AGENT: &str = concat!("wp2content/", env!("CARGO_PKG_VERSION"));

// ---------------------------------------------------------------------------
// Error display
// ---------------------------------------------------------------------------

/// Maximum characters of a response body logged when JSON parsing fails.
pub const ERROR_BODY_PREVIEW_LENGTH: usize = 200;
