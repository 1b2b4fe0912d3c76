// src/types/query.rs
//! Per-operation query parameters.

use super::{ContentPath, Locale, Slug, ValidationError};
use crate::constants::{DEFAULT_PAGE, DEFAULT_PER_PAGE};
use std::fmt;
use std::str::FromStr;

/// Sort direction of a post listing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortOrder {
    Asc,
    #[default]
    Desc,
}

impl SortOrder {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Asc => "asc",
            Self::Desc => "desc",
        }
    }
}

impl FromStr for SortOrder {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "asc" => Ok(Self::Asc),
            "desc" => Ok(Self::Desc),
            _ => Err(ValidationError::UnknownVariant {
                field: "order",
                value: s.to_string(),
                expected: "asc, desc",
            }),
        }
    }
}

impl fmt::Display for SortOrder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Field a post listing is sorted by.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OrderBy {
    #[default]
    Date,
    Relevance,
    Id,
    Include,
    Title,
    Slug,
}

impl OrderBy {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Date => "date",
            Self::Relevance => "relevance",
            Self::Id => "id",
            Self::Include => "include",
            Self::Title => "title",
            Self::Slug => "slug",
        }
    }
}

impl FromStr for OrderBy {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "date" => Ok(Self::Date),
            "relevance" => Ok(Self::Relevance),
            "id" => Ok(Self::Id),
            "include" => Ok(Self::Include),
            "title" => Ok(Self::Title),
            "slug" => Ok(Self::Slug),
            _ => Err(ValidationError::UnknownVariant {
                field: "orderby",
                value: s.to_string(),
                expected: "date, relevance, id, include, title, slug",
            }),
        }
    }
}

impl fmt::Display for OrderBy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Parameters of a blog index listing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PostsListParams {
    /// Human-readable tag slug; resolved to the numeric tag id before listing.
    pub tag: Option<Slug>,
    pub page: u32,
    pub per_page: u32,
    /// Items to skip. Zero behaves exactly like no offset.
    pub offset: Option<u32>,
    pub order: SortOrder,
    pub orderby: OrderBy,
    pub locale: Locale,
}

impl Default for PostsListParams {
    fn default() -> Self {
        Self {
            tag: None,
            page: DEFAULT_PAGE,
            per_page: DEFAULT_PER_PAGE,
            offset: None,
            order: SortOrder::default(),
            orderby: OrderBy::default(),
            locale: Locale::default(),
        }
    }
}

impl PostsListParams {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_tag(mut self, tag: Slug) -> Self {
        self.tag = Some(tag);
        self
    }

    pub fn with_page(mut self, page: u32) -> Self {
        self.page = page;
        self
    }

    pub fn with_per_page(mut self, per_page: u32) -> Self {
        self.per_page = per_page;
        self
    }

    pub fn with_offset(mut self, offset: u32) -> Self {
        self.offset = Some(offset);
        self
    }

    pub fn with_order(mut self, order: SortOrder) -> Self {
        self.order = order;
        self
    }

    pub fn with_orderby(mut self, orderby: OrderBy) -> Self {
        self.orderby = orderby;
        self
    }

    pub fn with_locale(mut self, locale: Locale) -> Self {
        self.locale = locale;
        self
    }

    /// The offset to send, if any. Zero is treated as absent.
    pub fn effective_offset(&self) -> Option<u32> {
        self.offset.filter(|&offset| offset > 0)
    }
}

/// Parameters of a single blog post lookup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SinglePostParams {
    pub slug: Slug,
    pub locale: Locale,
}

impl SinglePostParams {
    pub fn new(slug: Slug) -> Self {
        Self {
            slug,
            locale: Locale::default(),
        }
    }

    pub fn with_locale(mut self, locale: Locale) -> Self {
        self.locale = locale;
        self
    }
}

/// Parameters of a single page lookup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SinglePageParams {
    pub path: ContentPath,
    pub locale: Locale,
}

impl SinglePageParams {
    pub fn new(path: ContentPath) -> Self {
        Self {
            path,
            locale: Locale::default(),
        }
    }

    pub fn with_locale(mut self, locale: Locale) -> Self {
        self.locale = locale;
        self
    }
}

/// One of the three lookups, as chosen on the command line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ContentQuery {
    Posts(PostsListParams),
    Post(SinglePostParams),
    Page(SinglePageParams),
}

impl ContentQuery {
    pub fn locale(&self) -> &Locale {
        match self {
            ContentQuery::Posts(params) => &params.locale,
            ContentQuery::Post(params) => &params.locale,
            ContentQuery::Page(params) => &params.locale,
        }
    }
}

impl fmt::Display for ContentQuery {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ContentQuery::Posts(params) => match &params.tag {
                Some(tag) => write!(f, "posts tagged '{}' (page {})", tag, params.page),
                None => write!(f, "posts (page {})", params.page),
            },
            ContentQuery::Post(params) => write!(f, "post '{}'", params.slug),
            ContentQuery::Page(params) => write!(f, "page '{}'", params.path),
        }
    }
}
