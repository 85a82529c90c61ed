use std::sync::Arc;

use crate::app::error::Result;
use crate::fetcher::http::{HttpFetcher, DEVTO_BASE_URL};
use crate::fetcher::Fetcher;
use crate::normalizer::Normalizer;

pub struct AppContext {
    pub fetcher: Arc<dyn Fetcher + Send + Sync>,
    pub normalizer: Normalizer,
}

impl AppContext {
    pub fn new() -> Result<Self> {
        Self::with_base_url(DEVTO_BASE_URL)
    }

    /// Point the whole pipeline at another host. Tests use this to target
    /// a local mock server.
    pub fn with_base_url(base_url: &str) -> Result<Self> {
        let fetcher: Arc<dyn Fetcher + Send + Sync> =
            Arc::new(HttpFetcher::with_base_url(base_url)?);
        let normalizer = Normalizer::new(base_url);

        Ok(Self { fetcher, normalizer })
    }
}
