use html_escape::decode_html_entities;

use crate::domain::Article;
use crate::fetcher::{RawPost, SearchHit};

/// Turns the heterogeneous feed payloads into one uniform article shape.
/// Rows without a usable title or link are dropped; upstream order is
/// preserved. Ranking is the platform's job, not ours.
#[derive(Clone)]
pub struct Normalizer {
    base_url: String,
}

impl Normalizer {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
        }
    }

    /// Shape posts from the feed endpoints, which already carry absolute
    /// links.
    pub fn normalize_posts(&self, posts: Vec<RawPost>) -> Vec<Article> {
        posts
            .into_iter()
            .filter_map(|post| {
                let title = clean_title(post.title.as_deref()?)?;
                let link = post.url.filter(|url| !url.is_empty())?;
                Some(Article { title, link })
            })
            .collect()
    }

    /// Shape search hits, whose `path` is site-relative: the link is the
    /// base URL with the path appended verbatim.
    pub fn normalize_hits(&self, hits: Vec<SearchHit>) -> Vec<Article> {
        let base = self.base_url.trim_end_matches('/');

        hits.into_iter()
            .filter_map(|hit| {
                let title = clean_title(hit.title.as_deref()?)?;
                let path = hit.path.filter(|path| !path.is_empty())?;
                Some(Article {
                    title,
                    link: format!("{base}{path}"),
                })
            })
            .collect()
    }
}

fn clean_title(raw: &str) -> Option<String> {
    let title = decode_html_entities(raw).trim().to_string();
    if title.is_empty() {
        None
    } else {
        Some(title)
    }
}
