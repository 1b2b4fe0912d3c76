// src/transform/text.rs
//! Text cleanup applied to rendered WordPress HTML.
//!
//! WordPress `wptexturize` turns plain quotes into numeric character
//! references. Only the handful it emits in titles and excerpts are
//! mapped back; this is not a general HTML entity decoder.

use crate::constants::CONTINUE_READING;
use regex::Regex;
use std::borrow::Cow;

/// Right single quotation mark (apostrophe).
pub const RIGHT_SINGLE_QUOTE: &str = "&#8217;";
/// Left double quotation mark.
pub const LEFT_DOUBLE_QUOTE: &str = "&#8220;";
/// Right double quotation mark.
pub const RIGHT_DOUBLE_QUOTE: &str = "&#8221;";
/// Horizontal ellipsis.
pub const HORIZONTAL_ELLIPSIS: &str = "&#8230;";

/// Entity → replacement table used for display names.
pub const TITLE_ENTITIES: [(&str, &str); 3] = [
    (RIGHT_SINGLE_QUOTE, "'"),
    (LEFT_DOUBLE_QUOTE, "\""),
    (RIGHT_DOUBLE_QUOTE, "\""),
];

lazy_static::lazy_static! {
    static ref HTML_TAG: Regex = Regex::new(r"(?i)<[^>]+>")
        .expect("Failed to compile HTML tag regex - this is a bug in the code");
}

/// Removes every `<...>` sequence. Entities are left untouched.
pub fn strip_tags(html: &str) -> Cow<'_, str> {
    HTML_TAG.replace_all(html, "")
}

/// Replaces the curly quote entities in a title with straight quotes.
pub fn normalize_title(title: &str) -> String {
    TITLE_ENTITIES
        .iter()
        .fold(title.to_string(), |text, &(entity, plain)| {
            text.replace(entity, plain)
        })
}

/// Plain-text teaser for a post card.
///
/// Tags are stripped, apostrophes straightened, the first ellipsis entity
/// spelled out and the theme's first "Continue Reading" link text dropped.
/// Surrounding whitespace is kept as-is.
pub fn summarize_excerpt(excerpt_html: &str) -> String {
    strip_tags(excerpt_html)
        .replace(RIGHT_SINGLE_QUOTE, "'")
        .replacen(HORIZONTAL_ELLIPSIS, "...", 1)
        .replacen(CONTINUE_READING, "", 1)
}
