//! # Devscope
//!
//! A terminal browser for the dev.to article feed.
//!
//! ## Architecture
//!
//! Devscope runs one pipeline per invocation:
//!
//! ```text
//! Fetcher → Normalizer → Selector → Browser
//! ```
//!
//! - [`fetcher`]: HTTP client over the dev.to endpoints
//! - [`normalizer`]: converts heterogeneous feed payloads into uniform articles
//! - [`ui`]: interactive picker, spinner, profile card
//! - [`cli`]: verb definitions and the fetch → select → open pipelines
//!
//! ## Quick Start
//!
//! ```bash
//! # Home feed
//! devscope
//!
//! # Top posts of the week
//! devscope top week
//!
//! # Posts tagged #rust
//! devscope tag rust
//!
//! # Full-text search
//! devscope search wasm
//!
//! # An author's profile
//! devscope author ben -p
//! ```

/// Application context and error handling.
///
/// [`AppContext`](app::AppContext) wires the fetcher and the normalizer
/// together; [`DevscopeError`](app::DevscopeError) is the crate-wide
/// error taxonomy.
pub mod app;

/// Command-line interface using clap.
///
/// Verbs map one-to-one onto fetch operations:
/// - `top [timeline]` - top posts over a window
/// - `tag [tag]` - posts under a tag
/// - `latest` - most recent posts
/// - `search <keyword>` - full-text search
/// - `author <username> [-p]` - posts or profile
/// - no verb - the home feed
pub mod cli;

/// Core domain models.
///
/// - [`Article`](domain::Article): normalized `{title, link}` record
/// - [`AuthorProfile`](domain::AuthorProfile): users-endpoint wire shape
/// - [`Timeline`](domain::Timeline): closed set of ranking windows
pub mod domain;

/// Upstream access.
///
/// - [`Fetcher`](fetcher::Fetcher): async trait over the endpoints
/// - [`HttpFetcher`](fetcher::http::HttpFetcher): reqwest-based implementation
pub mod fetcher;

/// Feed payload normalization.
///
/// Filters malformed rows and resolves search-hit paths against the
/// platform base URL.
pub mod normalizer;

/// Terminal presentation: dialoguer pickers, the request spinner, and
/// the author profile card.
pub mod ui;
