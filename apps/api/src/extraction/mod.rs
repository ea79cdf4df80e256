// Page retrieval and tag extraction: URL in, TagRecord out.
// A record is produced only when the fetch fully succeeds.

pub mod fetcher;
pub mod tags;

use anyhow::Context;
use tracing::info;

use crate::errors::AppError;
use crate::extraction::fetcher::{normalize_url, PageFetcher};
use crate::extraction::tags::extract_tags;
use crate::models::tag_record::TagRecord;

/// Normalizes `raw_url`, fetches the page and extracts its tags.
pub async fn extract_page(
    fetcher: &dyn PageFetcher,
    raw_url: &str,
) -> Result<TagRecord, AppError> {
    let url = normalize_url(raw_url)
        .ok_or_else(|| AppError::Validation("URL is required".to_string()))?;

    let html = fetcher.fetch(&url).await?;

    // Parsing large documents is CPU-bound; keep it off the async workers.
    let record = {
        let url = url.clone();
        tokio::task::spawn_blocking(move || extract_tags(&url, &html))
            .await
            .context("tag extraction task failed")?
    };

    info!(
        "Extracted tags from {url}: title_chars={}, structured_data={}",
        record.title.chars().count(),
        record.has_structured_data
    );

    Ok(record)
}
