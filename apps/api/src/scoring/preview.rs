//! How a page would look in a search result and when shared on social platforms.
//!
//! Each platform falls back to more generic tags when its own are missing:
//! Twitter falls back to Open Graph, Open Graph falls back to the basic tags.

use serde::{Deserialize, Serialize};

use crate::models::tag_record::TagRecord;

const NO_TITLE: &str = "No title available";
const NO_DESCRIPTION: &str = "No description available";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchPreview {
    pub title: String,
    pub url: String,
    pub description: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SocialPreview {
    pub title: String,
    pub description: String,
    pub image: Option<String>,
    pub url: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Previews {
    pub search: SearchPreview,
    pub open_graph: SocialPreview,
    pub twitter: SocialPreview,
}

pub fn build_previews(record: &TagRecord) -> Previews {
    Previews {
        search: SearchPreview {
            title: first_present(&[record.title.as_str()], NO_TITLE),
            url: record.url.clone(),
            description: first_present(&[record.description.as_str()], NO_DESCRIPTION),
        },
        open_graph: SocialPreview {
            title: first_present(
                &[record.og_title.as_str(), record.title.as_str()],
                NO_TITLE,
            ),
            description: first_present(
                &[record.og_description.as_str(), record.description.as_str()],
                NO_DESCRIPTION,
            ),
            image: non_empty(&record.og_image),
            url: record.url.clone(),
        },
        twitter: SocialPreview {
            title: first_present(
                &[
                    record.twitter_title.as_str(),
                    record.og_title.as_str(),
                    record.title.as_str(),
                ],
                NO_TITLE,
            ),
            description: first_present(
                &[
                    record.twitter_description.as_str(),
                    record.og_description.as_str(),
                    record.description.as_str(),
                ],
                NO_DESCRIPTION,
            ),
            image: non_empty(&record.twitter_image),
            url: record.url.clone(),
        },
    }
}

fn first_present(candidates: &[&str], fallback: &str) -> String {
    candidates
        .iter()
        .find(|c| !c.is_empty())
        .copied()
        .unwrap_or(fallback)
        .to_string()
}

fn non_empty(value: &str) -> Option<String> {
    (!value.is_empty()).then(|| value.to_string())
}
