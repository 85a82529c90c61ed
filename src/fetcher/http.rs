use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use serde::de::DeserializeOwned;
use tracing::debug;
use url::Url;

use crate::app::Result;
use crate::domain::{AuthorProfile, Tag, Timeline};
use crate::fetcher::{Fetcher, RawPost, SearchResponse};

pub const DEVTO_BASE_URL: &str = "https://dev.to";

pub struct HttpFetcher {
    client: Client,
    base: Url,
}

impl HttpFetcher {
    pub fn new() -> Self {
        Self::with_base_url(DEVTO_BASE_URL).expect("default base URL is valid")
    }

    pub fn with_base_url(base_url: &str) -> Result<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(10))
            .gzip(true)
            .brotli(true)
            .user_agent(concat!("devscope/", env!("CARGO_PKG_VERSION")))
            .build()
            .expect("Failed to build HTTP client");

        Ok(Self {
            client,
            base: Url::parse(base_url)?,
        })
    }

    async fn get_json<T: DeserializeOwned>(
        &self,
        path: &str,
        query: &[(&str, String)],
    ) -> Result<T> {
        let url = self.base.join(path)?;
        debug!(%url, "GET");

        let response = self.client.get(url).query(query).send().await?;
        let response = response.error_for_status()?;

        Ok(response.json().await?)
    }
}

impl Default for HttpFetcher {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl Fetcher for HttpFetcher {
    async fn fetch_home(&self) -> Result<Vec<RawPost>> {
        self.get_json("/api/articles", &[]).await
    }

    async fn fetch_top(&self, timeline: Timeline) -> Result<Vec<RawPost>> {
        self.get_json("/api/articles", &[("top", timeline.days().to_string())])
            .await
    }

    async fn fetch_by_tag(&self, tag: &str) -> Result<Vec<RawPost>> {
        self.get_json("/api/articles", &[("tag", tag.to_string())])
            .await
    }

    async fn fetch_tags(&self) -> Result<Vec<Tag>> {
        self.get_json("/api/tags", &[("per_page", "100".to_string())])
            .await
    }

    async fn fetch_latest(&self) -> Result<Vec<RawPost>> {
        self.get_json("/api/articles/latest", &[]).await
    }

    async fn search_posts(&self, keyword: &str) -> Result<SearchResponse> {
        self.get_json(
            "/search/feed_content",
            &[
                ("search_fields", keyword.to_string()),
                ("per_page", "60".to_string()),
                ("class_name", "Article".to_string()),
            ],
        )
        .await
    }

    async fn fetch_by_author(&self, username: &str) -> Result<Vec<RawPost>> {
        self.get_json("/api/articles", &[("username", username.to_string())])
            .await
    }

    async fn fetch_author_profile(&self, username: &str) -> Result<AuthorProfile> {
        let url = self.base.join("/api/users/by_username")?;
        debug!(%url, username, "GET");

        let response = self
            .client
            .get(url)
            .query(&[("url", username)])
            .send()
            .await?;

        // The users endpoint answers 404 for unknown usernames. That is
        // "author not found", not a transport failure; the empty profile
        // carries the signal (no name).
        if response.status() == StatusCode::NOT_FOUND {
            return Ok(AuthorProfile::default());
        }

        let response = response.error_for_status()?;
        Ok(response.json().await?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::DevscopeError;
    use crate::normalizer::Normalizer;
    use mockito::{Matcher, Server};

    fn fetcher(server: &Server) -> HttpFetcher {
        HttpFetcher::with_base_url(&server.url()).unwrap()
    }

    #[tokio::test]
    async fn fetch_home_decodes_posts() {
        let mut server = Server::new_async().await;
        let mock = server
            .mock("GET", "/api/articles")
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(
                r#"[{"title":"A","url":"https://dev.to/x/a"},{"url":"https://dev.to/x/b"}]"#,
            )
            .create_async()
            .await;

        let posts = fetcher(&server).fetch_home().await.unwrap();

        assert_eq!(posts.len(), 2);
        assert_eq!(posts[0].title.as_deref(), Some("A"));
        assert!(posts[1].title.is_none());
        mock.assert_async().await;
    }

    #[tokio::test]
    async fn fetch_top_sends_day_count() {
        let mut server = Server::new_async().await;
        let mock = server
            .mock("GET", "/api/articles")
            .match_query(Matcher::UrlEncoded("top".into(), "7".into()))
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(r#"[{"title":"Weekly best","url":"https://dev.to/x/w"}]"#)
            .create_async()
            .await;

        let posts = fetcher(&server).fetch_top(Timeline::Week).await.unwrap();

        assert_eq!(posts.len(), 1);
        mock.assert_async().await;
    }

    #[tokio::test]
    async fn fetch_by_tag_accepts_empty_feed() {
        let mut server = Server::new_async().await;
        server
            .mock("GET", "/api/articles")
            .match_query(Matcher::UrlEncoded("tag".into(), "cobol".into()))
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body("[]")
            .create_async()
            .await;

        let posts = fetcher(&server).fetch_by_tag("cobol").await.unwrap();

        assert!(posts.is_empty());
    }

    #[tokio::test]
    async fn search_decodes_hit_envelope() {
        let mut server = Server::new_async().await;
        server
            .mock("GET", "/search/feed_content")
            .match_query(Matcher::UrlEncoded("search_fields".into(), "foo".into()))
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(r#"{"hits":[{"title":"Foo post","path":"/u/foo-post"}]}"#)
            .create_async()
            .await;

        let response = fetcher(&server).search_posts("foo").await.unwrap();

        assert_eq!(response.hits.len(), 1);
        assert_eq!(response.hits[0].path.as_deref(), Some("/u/foo-post"));
    }

    #[tokio::test]
    async fn unknown_author_yields_empty_profile() {
        let mut server = Server::new_async().await;
        server
            .mock("GET", "/api/users/by_username")
            .match_query(Matcher::UrlEncoded("url".into(), "ghost".into()))
            .with_status(404)
            .with_header("content-type", "application/json")
            .with_body(r#"{"error":"Not Found","status":404}"#)
            .create_async()
            .await;

        let profile = fetcher(&server).fetch_author_profile("ghost").await.unwrap();

        assert!(!profile.is_found());
    }

    #[tokio::test]
    async fn known_author_decodes_profile() {
        let mut server = Server::new_async().await;
        server
            .mock("GET", "/api/users/by_username")
            .match_query(Matcher::UrlEncoded("url".into(), "ben".into()))
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(
                serde_json::json!({
                    "name": "Ben",
                    "username": "ben",
                    "summary": "writes things",
                    "followers_count": 42
                })
                .to_string(),
            )
            .create_async()
            .await;

        let profile = fetcher(&server).fetch_author_profile("ben").await.unwrap();

        assert!(profile.is_found());
        assert_eq!(profile.name.as_deref(), Some("Ben"));
        assert_eq!(profile.summary.as_deref(), Some("writes things"));
        assert_eq!(profile.followers_count, Some(42));
    }

    #[tokio::test]
    async fn server_error_maps_to_http_error() {
        let mut server = Server::new_async().await;
        server
            .mock("GET", "/api/articles")
            .with_status(500)
            .create_async()
            .await;

        let err = fetcher(&server).fetch_home().await.unwrap_err();

        assert!(matches!(err, DevscopeError::Http(_)));
    }

    // `tag rust` against a feed with one malformed row leaves exactly one
    // selectable article.
    #[tokio::test]
    async fn tag_feed_normalizes_to_selectable_articles() {
        let mut server = Server::new_async().await;
        server
            .mock("GET", "/api/articles")
            .match_query(Matcher::UrlEncoded("tag".into(), "rust".into()))
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(r#"[{"title":"A","url":"http://x/a"},{"url":"http://x/b"}]"#)
            .create_async()
            .await;

        let client = fetcher(&server);
        let normalizer = Normalizer::new(&server.url());
        let posts = client.fetch_by_tag("rust").await.unwrap();
        let articles = normalizer.normalize_posts(posts);

        assert_eq!(articles.len(), 1);
        assert_eq!(articles[0].title, "A");
        assert_eq!(articles[0].link, "http://x/a");
    }
}
