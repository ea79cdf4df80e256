use std::sync::Arc;

use crate::extraction::fetcher::PageFetcher;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    /// Pluggable page source. Default: HttpPageFetcher. Tests swap in canned pages.
    pub fetcher: Arc<dyn PageFetcher>,
}
