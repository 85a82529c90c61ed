use std::future::Future;

use tracing::debug;

use crate::app::{AppContext, DevscopeError, Result};
use crate::domain::{Article, AuthorProfile, Timeline};
use crate::ui::{self, spinner::Spinner};

pub async fn home(ctx: &AppContext) -> Result<()> {
    let posts = with_spinner("Fetching your home feed...", ctx.fetcher.fetch_home()).await?;
    present(&ctx.normalizer.normalize_posts(posts))
}

pub async fn top(ctx: &AppContext, timeline: Option<String>) -> Result<()> {
    let window = match timeline {
        Some(raw) => raw.parse::<Timeline>()?,
        None => match ui::select_timeline()? {
            Some(window) => window,
            None => return Ok(()),
        },
    };

    let posts = with_spinner(
        &format!("Fetching top posts ({window})..."),
        ctx.fetcher.fetch_top(window),
    )
    .await?;
    present(&ctx.normalizer.normalize_posts(posts))
}

pub async fn tag(ctx: &AppContext, tag: Option<String>) -> Result<()> {
    let tag = match tag {
        Some(tag) => tag,
        None => {
            let tags = with_spinner("Fetching tags...", ctx.fetcher.fetch_tags()).await?;
            if tags.is_empty() {
                println!("No tags found.");
                return Ok(());
            }
            match ui::select_tag(&tags)? {
                Some(tag) => tag,
                None => return Ok(()),
            }
        }
    };

    let posts = with_spinner(
        &format!("Fetching posts tagged #{tag}..."),
        ctx.fetcher.fetch_by_tag(&tag),
    )
    .await?;
    present(&ctx.normalizer.normalize_posts(posts))
}

pub async fn latest(ctx: &AppContext) -> Result<()> {
    let posts = with_spinner("Fetching the latest posts...", ctx.fetcher.fetch_latest()).await?;
    present(&ctx.normalizer.normalize_posts(posts))
}

pub async fn search(ctx: &AppContext, keyword: &str) -> Result<()> {
    let keyword = non_empty_keyword(keyword)?;

    let response = with_spinner(
        &format!("Searching for \"{keyword}\"..."),
        ctx.fetcher.search_posts(keyword),
    )
    .await?;
    present(&ctx.normalizer.normalize_hits(response.hits))
}

pub async fn author_posts(ctx: &AppContext, username: &str) -> Result<()> {
    let posts = with_spinner(
        &format!("Fetching posts by @{username}..."),
        ctx.fetcher.fetch_by_author(username),
    )
    .await?;
    present(&ctx.normalizer.normalize_posts(posts))
}

pub async fn author_profile(ctx: &AppContext, username: &str) -> Result<()> {
    let profile = with_spinner(
        &format!("Fetching the profile of @{username}..."),
        ctx.fetcher.fetch_author_profile(username),
    )
    .await?;

    let profile = require_found(profile, username)?;
    ui::profile::render(&profile);
    Ok(())
}

/// Run one fetch under a spinner. The spinner is cleared before the
/// outcome propagates, success or not.
async fn with_spinner<T>(message: &str, work: impl Future<Output = Result<T>>) -> Result<T> {
    let spinner = Spinner::new(message);
    let outcome = work.await;
    spinner.finish();
    outcome
}

/// The tail of every post pipeline: prompt, then hand the chosen link to
/// the system browser. Zero articles is an answer, not an error.
fn present(articles: &[Article]) -> Result<()> {
    if articles.is_empty() {
        println!("No articles found.");
        return Ok(());
    }

    if let Some(article) = ui::select_article(articles)? {
        debug!(link = %article.link, "opening in browser");
        open::that(&article.link)?;
    }

    Ok(())
}

fn non_empty_keyword(raw: &str) -> Result<&str> {
    let keyword = raw.trim();
    if keyword.is_empty() {
        return Err(DevscopeError::EmptyKeyword);
    }
    Ok(keyword)
}

fn require_found(profile: AuthorProfile, username: &str) -> Result<AuthorProfile> {
    if !profile.is_found() {
        return Err(DevscopeError::AuthorNotFound(username.to_string()));
    }
    Ok(profile)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn profile_without_name_routes_to_not_found() {
        let err = require_found(AuthorProfile::default(), "ghost").unwrap_err();
        assert!(matches!(err, DevscopeError::AuthorNotFound(ref who) if who == "ghost"));
    }

    #[test]
    fn profile_with_name_passes_through() {
        let profile = AuthorProfile {
            name: Some("Ben".into()),
            ..AuthorProfile::default()
        };
        assert!(require_found(profile, "ben").is_ok());
    }

    #[test]
    fn blank_keyword_is_rejected_before_any_request() {
        assert!(matches!(
            non_empty_keyword("   "),
            Err(DevscopeError::EmptyKeyword)
        ));
        assert_eq!(non_empty_keyword(" rust ").unwrap(), "rust");
    }
}
