use serde::{Deserialize, Serialize};

/// Human-readable label for an overall score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Rating {
    Excellent,
    #[serde(rename = "Very Good")]
    VeryGood,
    Good,
    Average,
    Poor,
}

/// Lower bound of each bucket, highest first. A score on a boundary takes the
/// higher bucket.
const RATING_BUCKETS: &[(u32, Rating)] = &[
    (90, Rating::Excellent),
    (80, Rating::VeryGood),
    (70, Rating::Good),
    (50, Rating::Average),
];

impl Rating {
    pub fn label(self) -> &'static str {
        match self {
            Rating::Excellent => "Excellent",
            Rating::VeryGood => "Very Good",
            Rating::Good => "Good",
            Rating::Average => "Average",
            Rating::Poor => "Poor",
        }
    }
}

impl std::fmt::Display for Rating {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

pub fn derive_rating(score: u32) -> Rating {
    RATING_BUCKETS
        .iter()
        .find(|(min, _)| score >= *min)
        .map(|(_, rating)| *rating)
        .unwrap_or(Rating::Poor)
}
