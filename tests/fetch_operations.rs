//! End-to-end tests of the three query operations.
//!
//! A mock transport answers from fixtures and records every URL it was
//! asked for, so the tests can check both the documents produced and the
//! requests that were (or were not) made.

use pretty_assertions::assert_eq;
use reqwest::StatusCode;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::Mutex;
use wp2content::*;

const SITE: &str = "https://blog.example.com";
const TAGS_RUST_URL: &str = "https://blog.example.com/wp-json/wp/v2/tags?slug=rust";
const DEFAULT_LISTING_URL: &str =
    "https://blog.example.com/wp-json/wp/v2/posts?_embed&page=1&per_page=9&order=desc&orderby=date";

/// A canned answer for one URL.
#[derive(Clone)]
struct CannedResponse {
    status: StatusCode,
    body: String,
    headers: Vec<(&'static str, String)>,
}

/// Mock transport that returns fixture data instead of making real requests.
#[derive(Clone, Default)]
struct MockTransport {
    responses: Arc<Mutex<HashMap<String, CannedResponse>>>,
    requested: Arc<Mutex<Vec<String>>>,
}

impl MockTransport {
    fn new() -> Self {
        Self::default()
    }

    async fn respond(&self, url: &str, status: StatusCode, body: &str) {
        self.respond_with_headers(url, status, body, Vec::new()).await;
    }

    async fn respond_with_headers(
        &self,
        url: &str,
        status: StatusCode,
        body: &str,
        headers: Vec<(&'static str, String)>,
    ) {
        self.responses.lock().await.insert(
            url.to_string(),
            CannedResponse {
                status,
                body: body.to_string(),
                headers,
            },
        );
    }

    async fn requested_urls(&self) -> Vec<String> {
        self.requested.lock().await.clone()
    }
}

#[async_trait::async_trait]
impl HttpTransport for MockTransport {
    async fn get(&self, url: &str) -> Result<ApiResponse<String>, AppError> {
        self.requested.lock().await.push(url.to_string());

        let canned = self
            .responses
            .lock()
            .await
            .get(url)
            .cloned()
            .ok_or_else(|| AppError::InternalError {
                message: format!("unexpected request: {}", url),
                source: None,
            })?;

        let response = canned
            .headers
            .iter()
            .fold(ApiResponse::ok(url, canned.body), |response, (name, value)| {
                response.with_header(name, value)
            })
            .with_status(canned.status);
        Ok(response)
    }
}

fn fetcher(transport: &MockTransport) -> WordPressFetcher {
    let config = SiteConfig::new(SiteUrl::new(SITE));
    WordPressFetcher::new(Arc::new(transport.clone()), &config)
}

fn totals(total: u32, pages: u32) -> Vec<(&'static str, String)> {
    vec![
        ("X-WP-Total", total.to_string()),
        ("X-WP-TotalPages", pages.to_string()),
    ]
}

fn listing_url(params: &PostsListParams, tag_id: Option<u64>) -> String {
    Endpoints::new(SiteUrl::new(SITE)).posts_listing(params, tag_id)
}

mod list_posts {
    use super::*;
    use pretty_assertions::assert_eq;

    #[tokio::test]
    async fn unknown_tag_returns_none_without_listing() {
        let transport = MockTransport::new();
        transport.respond(TAGS_RUST_URL, StatusCode::OK, "[]").await;

        let params = PostsListParams::new().with_tag(Slug::new("rust").unwrap());
        let result = fetcher(&transport).list_posts(&params).await.unwrap();

        assert!(result.is_none());
        assert_eq!(transport.requested_urls().await, vec![TAGS_RUST_URL.to_string()]);
    }

    #[tokio::test]
    async fn matching_tag_filters_listing_and_titles_page() {
        let transport = MockTransport::new();
        transport
            .respond(
                TAGS_RUST_URL,
                StatusCode::OK,
                include_str!("fixtures/api_responses/tags_rust.json"),
            )
            .await;

        let params = PostsListParams::new().with_tag(Slug::new("rust").unwrap());
        let url = listing_url(&params, Some(17));
        assert!(url.contains("&tags=17"));
        transport
            .respond_with_headers(
                &url,
                StatusCode::OK,
                include_str!("fixtures/api_responses/posts_listing.json"),
                totals(4, 1),
            )
            .await;

        let result = fetcher(&transport)
            .list_posts(&params)
            .await
            .unwrap()
            .expect("tag matched, so a listing is expected");

        assert_eq!(result.name, "Blog: Rust &amp; Systems");
        assert_eq!(transport.requested_urls().await, vec![TAGS_RUST_URL.to_string(), url]);
    }

    #[tokio::test]
    async fn untagged_listing_is_titled_blog() {
        let transport = MockTransport::new();
        transport
            .respond_with_headers(
                DEFAULT_LISTING_URL,
                StatusCode::OK,
                include_str!("fixtures/api_responses/posts_listing.json"),
                totals(2, 1),
            )
            .await;

        let result = fetcher(&transport)
            .list_posts(&PostsListParams::default())
            .await
            .unwrap()
            .unwrap();

        assert_eq!(result.name, "Blog");
        assert_eq!(result.description, "");
        assert!(result.is_visible_in_navigation);
        assert_eq!(transport.requested_urls().await, vec![DEFAULT_LISTING_URL.to_string()]);
    }

    #[tokio::test]
    async fn items_are_transformed() {
        let transport = MockTransport::new();
        transport
            .respond_with_headers(
                DEFAULT_LISTING_URL,
                StatusCode::OK,
                include_str!("fixtures/api_responses/posts_listing.json"),
                totals(2, 1),
            )
            .await;

        let result = fetcher(&transport)
            .list_posts(&PostsListParams::default())
            .await
            .unwrap()
            .unwrap();
        let items = &result.posts.items;

        assert_eq!(items.len(), 2);
        assert_eq!(
            items[0],
            PostListItem {
                author: "Ada Lovelace".to_string(),
                entity_id: "its-great".to_string(),
                name: "It's \"great\"".to_string(),
                plain_text_summary: "Hello world... \n".to_string(),
                published_date: PublishedDate {
                    utc: "2024-05-01T09:30:00".to_string()
                },
                thumbnail_image: Some(Thumbnail {
                    alt_text: "Sunrise over the bay".to_string(),
                    url: "https://blog.example.com/wp-content/uploads/sunrise.jpg".to_string(),
                }),
            }
        );
        assert_eq!(items[1].entity_id, "release-notes-april");
        assert_eq!(items[1].plain_text_summary, "What's new this month\n");
        assert!(items[1].thumbnail_image.is_none());
    }

    #[tokio::test]
    async fn pagination_follows_reported_totals() {
        let cases = [(3, true, true), (5, false, true), (1, true, false)];
        for (page, has_next, has_previous) in cases {
            let transport = MockTransport::new();
            let params = PostsListParams::new().with_page(page);
            transport
                .respond_with_headers(
                    &listing_url(&params, None),
                    StatusCode::OK,
                    "[]",
                    totals(42, 5),
                )
                .await;

            let info = fetcher(&transport)
                .list_posts(&params)
                .await
                .unwrap()
                .unwrap()
                .posts
                .page_info;

            assert_eq!(info.has_next_page, has_next, "page {}", page);
            assert_eq!(info.has_previous_page, has_previous, "page {}", page);
            assert_eq!(info.current_page, page);
            assert_eq!(info.total_pages, 5);
            assert_eq!(info.total_posts, 42);
            assert_eq!(info.start_cursor, page.to_string());
            assert_eq!(info.end_cursor, (page + 1).to_string());
        }
    }

    #[tokio::test]
    async fn missing_totals_read_as_zero() {
        let transport = MockTransport::new();
        transport
            .respond(
                DEFAULT_LISTING_URL,
                StatusCode::OK,
                include_str!("fixtures/api_responses/posts_listing.json"),
            )
            .await;

        let info = fetcher(&transport)
            .list_posts(&PostsListParams::default())
            .await
            .unwrap()
            .unwrap()
            .posts
            .page_info;

        assert_eq!(info.total_posts, 0);
        assert_eq!(info.total_pages, 0);
        assert!(!info.has_next_page);
    }

    #[tokio::test]
    async fn offset_is_sent_only_when_non_zero() {
        let transport = MockTransport::new();
        let with_offset = PostsListParams::new().with_offset(5);
        let offset_url = format!("{}&offset=5", DEFAULT_LISTING_URL);
        transport.respond(&offset_url, StatusCode::OK, "[]").await;
        transport.respond(DEFAULT_LISTING_URL, StatusCode::OK, "[]").await;

        let fetcher = fetcher(&transport);
        fetcher.list_posts(&with_offset).await.unwrap();
        fetcher
            .list_posts(&PostsListParams::new().with_offset(0))
            .await
            .unwrap();

        assert_eq!(
            transport.requested_urls().await,
            vec![offset_url, DEFAULT_LISTING_URL.to_string()]
        );
    }

    #[tokio::test]
    async fn failed_tag_lookup_names_the_tags_url() {
        let transport = MockTransport::new();
        transport
            .respond(TAGS_RUST_URL, StatusCode::INTERNAL_SERVER_ERROR, "oops")
            .await;

        let params = PostsListParams::new().with_tag(Slug::new("rust").unwrap());
        let err = fetcher(&transport).list_posts(&params).await.unwrap_err();

        assert_eq!(
            err.to_string(),
            format!("WordPress API fetch error: {} (code: 500)", TAGS_RUST_URL)
        );
        assert_eq!(transport.requested_urls().await.len(), 1);
    }

    #[tokio::test]
    async fn failed_listing_is_an_error() {
        let transport = MockTransport::new();
        transport
            .respond(
                DEFAULT_LISTING_URL,
                StatusCode::BAD_REQUEST,
                r#"{"code":"rest_invalid_param"}"#,
            )
            .await;

        let err = fetcher(&transport)
            .list_posts(&PostsListParams::default())
            .await
            .unwrap_err();

        assert_eq!(err.status(), Some(StatusCode::BAD_REQUEST));
    }

    #[tokio::test]
    async fn malformed_listing_is_an_error() {
        let transport = MockTransport::new();
        transport
            .respond(DEFAULT_LISTING_URL, StatusCode::OK, "<html>Briefly unavailable</html>")
            .await;

        let err = fetcher(&transport)
            .list_posts(&PostsListParams::default())
            .await
            .unwrap_err();

        assert!(matches!(err, AppError::MalformedResponse { .. }));
    }
}

mod retrieve_post {
    use super::*;
    use pretty_assertions::assert_eq;

    const POST_URL: &str = "https://blog.example.com/wp-json/wp/v2/posts?slug=its-great&_embed";

    fn params() -> SinglePostParams {
        SinglePostParams::new(Slug::new("its-great").unwrap())
    }

    #[tokio::test]
    async fn no_match_returns_none() {
        let transport = MockTransport::new();
        transport.respond(POST_URL, StatusCode::OK, "[]").await;

        let result = fetcher(&transport).retrieve_post(&params()).await.unwrap();

        assert!(result.is_none());
        assert_eq!(transport.requested_urls().await, vec![POST_URL.to_string()]);
    }

    #[tokio::test]
    async fn match_becomes_document() {
        let transport = MockTransport::new();
        transport
            .respond(
                POST_URL,
                StatusCode::OK,
                include_str!("fixtures/api_responses/post_single.json"),
            )
            .await;

        let doc = fetcher(&transport)
            .retrieve_post(&params())
            .await
            .unwrap()
            .expect("post should be found");

        assert_eq!(doc.id, "its-great");
        assert_eq!(doc.author, "Ada Lovelace");
        assert_eq!(doc.name, "It&#8217;s &#8220;great&#8221;");
        assert_eq!(doc.html_body, "<p>Long <em>body</em>.</p>\n");
        assert_eq!(doc.content, doc.html_body);
        assert_eq!(
            doc.tags,
            vec![
                TagLink {
                    name: "Rust".to_string(),
                    href: "/blog/tag/rust".to_string()
                },
                TagLink {
                    name: "Async".to_string(),
                    href: "/blog/tag/async".to_string()
                },
            ]
        );
        assert_eq!(doc.seo.meta_keywords, "Rust,Async");
        assert_eq!(doc.seo.meta_description, "Hello world&#8230; Continue Reading\n");
        assert_eq!(doc.seo.page_title, doc.name);
        assert!(doc.thumbnail_image.is_none());
        assert_eq!(doc.vanity_url, "https://blog.example.com/2024/05/its-great/");
    }

    #[tokio::test]
    async fn rejected_status_is_an_error() {
        let transport = MockTransport::new();
        transport.respond(POST_URL, StatusCode::FORBIDDEN, "{}").await;

        let err = fetcher(&transport).retrieve_post(&params()).await.unwrap_err();

        assert!(matches!(err, AppError::FetchFailed { .. }));
        assert_eq!(err.status(), Some(StatusCode::FORBIDDEN));
    }
}

mod retrieve_page {
    use super::*;
    use pretty_assertions::assert_eq;

    const PAGE_C_URL: &str = "https://blog.example.com/wp-json/wp/v2/pages?slug=c&_embed";
    const TEAM_URL: &str = "https://blog.example.com/wp-json/wp/v2/pages?slug=team&_embed";

    fn params(path: &str) -> SinglePageParams {
        SinglePageParams::new(ContentPath::new(path).unwrap())
    }

    #[tokio::test]
    async fn last_path_segment_is_the_slug() {
        let transport = MockTransport::new();
        transport.respond(PAGE_C_URL, StatusCode::OK, "[]").await;

        let result = fetcher(&transport).retrieve_page(&params("a/b/c")).await.unwrap();

        assert!(result.is_none());
        assert_eq!(transport.requested_urls().await, vec![PAGE_C_URL.to_string()]);
    }

    #[tokio::test]
    async fn not_found_status_is_an_error() {
        let transport = MockTransport::new();
        transport.respond(PAGE_C_URL, StatusCode::NOT_FOUND, "[]").await;

        let err = fetcher(&transport).retrieve_page(&params("a/b/c")).await.unwrap_err();

        match err {
            AppError::FetchFailed { url, status } => {
                assert_eq!(url, PAGE_C_URL);
                assert_eq!(status, StatusCode::NOT_FOUND);
            }
            other => panic!("expected a fetch failure, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn only_200_is_accepted() {
        let transport = MockTransport::new();
        transport
            .respond(TEAM_URL, StatusCode::NON_AUTHORITATIVE_INFORMATION, "[]")
            .await;

        let err = fetcher(&transport)
            .retrieve_page(&params("about/team"))
            .await
            .unwrap_err();

        assert_eq!(err.status(), Some(StatusCode::NON_AUTHORITATIVE_INFORMATION));
    }

    #[tokio::test]
    async fn page_is_passed_through_unmodified() {
        let fixture = include_str!("fixtures/api_responses/page_team.json");
        let transport = MockTransport::new();
        transport.respond(TEAM_URL, StatusCode::OK, fixture).await;

        let page = fetcher(&transport)
            .retrieve_page(&params("about/team"))
            .await
            .unwrap()
            .expect("page should be found");

        let raw: serde_json::Value = serde_json::from_str(fixture).unwrap();
        assert_eq!(page.as_value(), &raw[0]);
        assert_eq!(page.title(), Some("Our &#8220;Team&#8221;"));
        assert_eq!(page.as_value()["acf"]["hero_image"], 88);
    }
}

mod resolve_query {
    use super::*;
    use pretty_assertions::assert_eq;

    #[tokio::test]
    async fn wraps_each_operation() {
        let transport = MockTransport::new();
        transport
            .respond(
                "https://blog.example.com/wp-json/wp/v2/posts?slug=its-great&_embed",
                StatusCode::OK,
                include_str!("fixtures/api_responses/post_single.json"),
            )
            .await;
        transport.respond(DEFAULT_LISTING_URL, StatusCode::OK, "[]").await;

        let fetcher = fetcher(&transport);

        let post = fetcher
            .resolve_query(&ContentQuery::Post(SinglePostParams::new(
                Slug::new("its-great").unwrap(),
            )))
            .await
            .unwrap();
        assert!(matches!(post, Some(ContentDocument::Post(ref doc)) if doc.id == "its-great"));

        let list = fetcher
            .resolve_query(&ContentQuery::Posts(PostsListParams::default()))
            .await
            .unwrap();
        assert!(matches!(list, Some(ContentDocument::PostList(_))));
    }

    #[tokio::test]
    async fn rendered_document_uses_front_end_field_names() {
        let transport = MockTransport::new();
        transport
            .respond_with_headers(
                DEFAULT_LISTING_URL,
                StatusCode::OK,
                include_str!("fixtures/api_responses/posts_listing.json"),
                totals(2, 1),
            )
            .await;

        let content = fetcher(&transport)
            .resolve_query(&ContentQuery::Posts(PostsListParams::default()))
            .await
            .unwrap();
        let rendered = render_json(content.as_ref(), true).unwrap();
        let json: serde_json::Value = serde_json::from_str(rendered.as_str()).unwrap();

        assert_eq!(json["name"], "Blog");
        assert_eq!(json["isVisibleInNavigation"], true);
        assert_eq!(json["posts"]["pageInfo"]["hasNextPage"], false);
        assert_eq!(json["posts"]["pageInfo"]["perPage"], 9);
        assert_eq!(json["posts"]["items"][0]["entityId"], "its-great");
        assert_eq!(json["posts"]["items"][1]["thumbnailImage"], serde_json::Value::Null);
    }
}
