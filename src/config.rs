// src/config.rs
use crate::constants::{DEFAULT_LOCALE, DEFAULT_PAGE, DEFAULT_PER_PAGE, SITE_URL_ENV};
use crate::error::AppError;
use crate::types::{
    ContentPath, ContentQuery, Locale, OrderBy, PostsListParams, SinglePageParams,
    SinglePostParams, SiteUrl, Slug, SortOrder, ValidationError,
};
use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Parsed and validated command-line input.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct CommandLineInput {
    /// WordPress site base URL (falls back to the WORDPRESS_URL environment variable)
    #[arg(long, global = true)]
    pub site_url: Option<String>,

    /// Output file for the resulting JSON document (optional)
    #[arg(short, long, global = true)]
    pub output_file: Option<String>,

    /// Copy the resulting JSON document to the clipboard
    #[arg(short = 'b', long, global = true, default_value_t = false)]
    pub clipboard: bool,

    /// Emit compact JSON instead of pretty-printed
    #[arg(long, global = true, default_value_t = false)]
    pub compact: bool,

    /// Enable verbose logging (debug level)
    #[arg(short, long, global = true, default_value_t = false)]
    pub verbose: bool,

    /// Locale hint (only meaningful with a translation plugin)
    #[arg(long, global = true, default_value = DEFAULT_LOCALE)]
    pub locale: String,

    #[command(subcommand)]
    pub command: QueryCommand,
}

#[derive(Subcommand, Debug)]
pub enum QueryCommand {
    /// List blog posts, optionally filtered by tag
    Posts {
        /// Tag slug to filter by (e.g. "release-notes")
        #[arg(short, long)]
        tag: Option<String>,

        /// Page number, starting at 1
        #[arg(long, default_value_t = DEFAULT_PAGE)]
        page: u32,

        /// Posts per page
        #[arg(long, default_value_t = DEFAULT_PER_PAGE)]
        per_page: u32,

        /// Number of posts to skip (0 = none)
        #[arg(long)]
        offset: Option<u32>,

        /// Sort direction: asc or desc
        #[arg(long, default_value = "desc")]
        order: String,

        /// Sort field: date, relevance, id, include, title or slug
        #[arg(long, default_value = "date")]
        orderby: String,
    },

    /// Fetch a single blog post by slug
    Post {
        /// Post slug (e.g. "hello-world")
        slug: String,
    },

    /// Fetch a single page by path; the last path segment is its slug
    Page {
        /// Page path (e.g. "about/team")
        path: String,
    },
}

/// Where the WordPress site lives.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SiteConfig {
    pub site_url: SiteUrl,
}

impl SiteConfig {
    pub fn new(site_url: SiteUrl) -> Self {
        Self { site_url }
    }

    /// An explicit URL wins over the environment.
    pub fn resolve(explicit: Option<String>) -> Self {
        let raw = explicit
            .or_else(|| std::env::var(SITE_URL_ENV).ok())
            .unwrap_or_default();
        let site_url = SiteUrl::new(raw);

        if site_url.is_empty() {
            log::warn!(
                "{} is not set; requests will use relative URLs and fail",
                SITE_URL_ENV
            );
        }

        Self { site_url }
    }
}

/// Resolved pipeline configuration: validated and ready to drive all three stages.
#[derive(Debug, Clone)]
pub struct PipelineConfig {
    pub site: SiteConfig,
    pub query: ContentQuery,
    pub output_file: Option<PathBuf>,
    pub clipboard: bool,
    pub compact: bool,
    pub verbose: bool,
}

impl PipelineConfig {
    /// Resolves a complete pipeline configuration from CLI input and environment.
    pub fn resolve(cli: CommandLineInput) -> Result<Self, AppError> {
        let locale = Locale::new(cli.locale);
        let query = build_query(cli.command, locale)?;

        Ok(PipelineConfig {
            site: SiteConfig::resolve(cli.site_url),
            query,
            output_file: cli.output_file.map(PathBuf::from),
            clipboard: cli.clipboard,
            compact: cli.compact,
            verbose: cli.verbose,
        })
    }

    /// Stdout is the destination unless a file or the clipboard was asked for.
    pub fn prints_to_stdout(&self) -> bool {
        self.output_file.is_none() && !self.clipboard
    }
}

fn build_query(command: QueryCommand, locale: Locale) -> Result<ContentQuery, ValidationError> {
    Ok(match command {
        QueryCommand::Posts {
            tag,
            page,
            per_page,
            offset,
            order,
            orderby,
        } => {
            if page < 1 {
                return Err(ValidationError::OutOfBounds { value: page, min: 1 });
            }
            if per_page < 1 {
                return Err(ValidationError::OutOfBounds {
                    value: per_page,
                    min: 1,
                });
            }

            let mut params = PostsListParams::new()
                .with_page(page)
                .with_per_page(per_page)
                .with_order(order.parse::<SortOrder>()?)
                .with_orderby(orderby.parse::<OrderBy>()?)
                .with_locale(locale);

            // An empty --tag behaves like no tag at all.
            if let Some(tag) = tag.filter(|tag| !tag.trim().is_empty()) {
                params = params.with_tag(Slug::new(tag)?);
            }
            if let Some(offset) = offset {
                params = params.with_offset(offset);
            }
            ContentQuery::Posts(params)
        }
        QueryCommand::Post { slug } => {
            ContentQuery::Post(SinglePostParams::new(Slug::new(slug)?).with_locale(locale))
        }
        QueryCommand::Page { path } => {
            ContentQuery::Page(SinglePageParams::new(ContentPath::new(path)?).with_locale(locale))
        }
    })
}
