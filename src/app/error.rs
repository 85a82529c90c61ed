use thiserror::Error;

#[derive(Error, Debug)]
pub enum DevscopeError {
    #[error("network error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("invalid URL: {0}")]
    InvalidUrl(#[from] url::ParseError),

    #[error("'{0}' is not a timeline (expected day, week, month, year or infinity)")]
    InvalidTimeline(String),

    #[error("search keyword must not be empty")]
    EmptyKeyword,

    #[error("author not found: {0}")]
    AuthorNotFound(String),

    #[error("prompt error: {0}")]
    Prompt(#[from] dialoguer::Error),

    #[error("interrupted")]
    Interrupted,

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, DevscopeError>;
