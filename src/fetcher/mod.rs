pub mod http;

use async_trait::async_trait;
use serde::Deserialize;

use crate::app::Result;
use crate::domain::{AuthorProfile, Tag, Timeline};

/// A post record as the articles endpoints return it, before
/// normalization. Only the fields the pipeline consumes are decoded;
/// both may be missing on malformed rows.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawPost {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub url: Option<String>,
}

/// Envelope the search endpoint wraps its results in.
#[derive(Debug, Default, Deserialize)]
pub struct SearchResponse {
    #[serde(default)]
    pub hits: Vec<SearchHit>,
}

/// A single search result. Unlike the article feeds, `path` is
/// site-relative and must be resolved against the base URL.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SearchHit {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub path: Option<String>,
}

/// Upstream access behind capability-named operations. Everything past
/// this trait sees decoded records, never the wire format.
#[async_trait]
pub trait Fetcher {
    /// The signed-out home feed.
    async fn fetch_home(&self) -> Result<Vec<RawPost>>;

    /// Top posts ranked over `timeline`. The enum guarantees the window
    /// was validated before any request is made.
    async fn fetch_top(&self, timeline: Timeline) -> Result<Vec<RawPost>>;

    /// Posts under a tag. An unknown tag yields an empty list, not an error.
    async fn fetch_by_tag(&self, tag: &str) -> Result<Vec<RawPost>>;

    /// The tag catalog, used only to drive the tag picker.
    async fn fetch_tags(&self) -> Result<Vec<Tag>>;

    /// Most recently published posts.
    async fn fetch_latest(&self) -> Result<Vec<RawPost>>;

    /// Full-text search. Returns the raw hit envelope; link resolution
    /// is the normalizer's job.
    async fn search_posts(&self, keyword: &str) -> Result<SearchResponse>;

    /// Posts written by `username`. Empty if the author has none.
    async fn fetch_by_author(&self, username: &str) -> Result<Vec<RawPost>>;

    /// An author's profile. An unknown username resolves to the empty
    /// profile (no `name`) rather than an error.
    async fn fetch_author_profile(&self, username: &str) -> Result<AuthorProfile>;
}
