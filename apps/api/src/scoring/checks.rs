//! The fixed check table and per-check evaluation.
//!
//! Each of the 14 checks inspects one tag of a [`TagRecord`] and classifies it as
//! pass, warning or fail. Checks are plain data: the tag they read plus a
//! [`CheckRule`]. Adding a check means adding a row to [`CHECKS`], not a branch.

use serde::{Deserialize, Serialize};

use crate::models::tag_record::{TagField, TagRecord};

// ────────────────────────────────────────────────────────────────────────────
// Status and category
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum CheckStatus {
    Pass,
    Warning,
    Fail,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Category {
    Basic,
    OpenGraph,
    Twitter,
}

impl Category {
    #[cfg(test)]
    pub const ALL: [Category; 3] = [Category::Basic, Category::OpenGraph, Category::Twitter];

    pub fn name(self) -> &'static str {
        match self {
            Category::Basic => "Basic SEO",
            Category::OpenGraph => "Open Graph",
            Category::Twitter => "Twitter Cards",
        }
    }

    pub fn description(self) -> &'static str {
        match self {
            Category::Basic => {
                "These are the fundamental tags search engines use to understand your page."
            }
            Category::OpenGraph => {
                "These tags control how your page appears when shared on Facebook and other social platforms."
            }
            Category::Twitter => "These tags control how your page appears when shared on Twitter.",
        }
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Rules
// ────────────────────────────────────────────────────────────────────────────

/// How a check turns its tag value into a status and recommendation.
///
/// Every rule yields an empty recommendation exactly when the status is `Pass`.
#[derive(Debug, Clone, Copy)]
pub enum CheckRule {
    /// Fail when empty, otherwise pass.
    Presence { missing: &'static str },
    /// Fail when empty, warn when longer than `max_chars` characters, otherwise pass.
    MaxLength {
        max_chars: usize,
        missing: &'static str,
        too_long: &'static str,
    },
}

impl CheckRule {
    pub fn status(&self, value: &str) -> CheckStatus {
        if value.is_empty() {
            return CheckStatus::Fail;
        }
        match self {
            CheckRule::Presence { .. } => CheckStatus::Pass,
            // Characters, not bytes: "é" counts once.
            CheckRule::MaxLength { max_chars, .. } if value.chars().count() > *max_chars => {
                CheckStatus::Warning
            }
            CheckRule::MaxLength { .. } => CheckStatus::Pass,
        }
    }

    pub fn recommendation(&self, value: &str) -> String {
        let text = match (self, self.status(value)) {
            (_, CheckStatus::Pass) => "",
            (CheckRule::Presence { missing }, _) => *missing,
            (CheckRule::MaxLength { missing, .. }, CheckStatus::Fail) => *missing,
            (CheckRule::MaxLength { too_long, .. }, CheckStatus::Warning) => *too_long,
        };
        text.to_string()
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Check definitions
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug)]
pub struct CheckDefinition {
    pub name: &'static str,
    pub title: &'static str,
    pub category: Category,
    pub weight: u32,
    pub field: TagField,
    pub rule: CheckRule,
    pub explanation: &'static str,
}

impl CheckDefinition {
    pub fn status(&self, record: &TagRecord) -> CheckStatus {
        self.rule.status(record.get(self.field))
    }

    pub fn recommendation(&self, record: &TagRecord) -> String {
        self.rule.recommendation(record.get(self.field))
    }
}

pub const TITLE_MAX_CHARS: usize = 60;
pub const DESCRIPTION_MAX_CHARS: usize = 160;

/// All checks, in display order. Weights sum to 22.
pub static CHECKS: [CheckDefinition; 14] = [
    // Basic SEO
    CheckDefinition {
        name: "title",
        title: "Title Tag",
        category: Category::Basic,
        weight: 3,
        field: TagField::Title,
        rule: CheckRule::MaxLength {
            max_chars: TITLE_MAX_CHARS,
            missing: "Missing title tag",
            too_long: "Title too long (should be under 60 characters)",
        },
        explanation: "The title tag defines the title of your web page. It appears in browser tabs and search results. Keep it under 60 characters for best results.",
    },
    CheckDefinition {
        name: "description",
        title: "Meta Description",
        category: Category::Basic,
        weight: 3,
        field: TagField::Description,
        rule: CheckRule::MaxLength {
            max_chars: DESCRIPTION_MAX_CHARS,
            missing: "Missing meta description",
            too_long: "Description too long (should be under 160 characters)",
        },
        explanation: "The meta description summarizes your page content. Search engines often display this in search results. Aim for 50-160 characters.",
    },
    CheckDefinition {
        name: "canonical",
        title: "Canonical URL",
        category: Category::Basic,
        weight: 2,
        field: TagField::Canonical,
        rule: CheckRule::Presence {
            missing: "Missing canonical URL tag",
        },
        explanation: "The canonical tag tells search engines which version of a page is the original when you have similar content on multiple URLs.",
    },
    CheckDefinition {
        name: "robots",
        title: "Robots Meta",
        category: Category::Basic,
        weight: 1,
        field: TagField::Robots,
        rule: CheckRule::Presence {
            missing: "Missing robots meta tag",
        },
        explanation: "The robots meta tag tells search engines if they should index your page or follow its links.",
    },
    CheckDefinition {
        name: "viewport",
        title: "Viewport",
        category: Category::Basic,
        weight: 1,
        field: TagField::Viewport,
        rule: CheckRule::Presence {
            missing: "Missing viewport meta tag",
        },
        explanation: "The viewport meta tag helps your page display properly on mobile devices, which is crucial for mobile SEO.",
    },
    CheckDefinition {
        name: "language",
        title: "Language",
        category: Category::Basic,
        weight: 1,
        field: TagField::Language,
        rule: CheckRule::Presence {
            missing: "Missing language attribute",
        },
        explanation: "The language attribute helps search engines understand what language your content is in.",
    },
    // Open Graph
    CheckDefinition {
        name: "ogTitle",
        title: "OG Title",
        category: Category::OpenGraph,
        weight: 2,
        field: TagField::OgTitle,
        rule: CheckRule::Presence {
            missing: "Missing og:title tag",
        },
        explanation: "The og:title tag defines how your page title appears when shared on Facebook and other platforms that support Open Graph.",
    },
    CheckDefinition {
        name: "ogDescription",
        title: "OG Description",
        category: Category::OpenGraph,
        weight: 2,
        field: TagField::OgDescription,
        rule: CheckRule::Presence {
            missing: "Missing og:description tag",
        },
        explanation: "The og:description defines how your page description appears when shared on social platforms.",
    },
    CheckDefinition {
        name: "ogImage",
        title: "OG Image",
        category: Category::OpenGraph,
        weight: 2,
        field: TagField::OgImage,
        rule: CheckRule::Presence {
            missing: "Missing og:image tag",
        },
        explanation: "The og:image defines what image appears when your page is shared on social platforms. Recommended size is 1200×630 pixels.",
    },
    CheckDefinition {
        name: "ogUrl",
        title: "OG URL",
        category: Category::OpenGraph,
        weight: 1,
        field: TagField::OgUrl,
        rule: CheckRule::Presence {
            missing: "Missing og:url tag",
        },
        explanation: "The og:url helps social platforms identify the canonical URL for your shared content.",
    },
    // Twitter Cards
    CheckDefinition {
        name: "twitterCard",
        title: "Twitter Card",
        category: Category::Twitter,
        weight: 1,
        field: TagField::TwitterCard,
        rule: CheckRule::Presence {
            missing: "Missing twitter:card tag",
        },
        explanation: "The twitter:card tag defines how your content appears when shared on Twitter. Common values are 'summary', 'summary_large_image', etc.",
    },
    CheckDefinition {
        name: "twitterTitle",
        title: "Twitter Title",
        category: Category::Twitter,
        weight: 1,
        field: TagField::TwitterTitle,
        rule: CheckRule::Presence {
            missing: "Missing twitter:title tag",
        },
        explanation: "The twitter:title defines the title of your content when shared on Twitter.",
    },
    CheckDefinition {
        name: "twitterDescription",
        title: "Twitter Description",
        category: Category::Twitter,
        weight: 1,
        field: TagField::TwitterDescription,
        rule: CheckRule::Presence {
            missing: "Missing twitter:description tag",
        },
        explanation: "The twitter:description defines the description of your content when shared on Twitter.",
    },
    CheckDefinition {
        name: "twitterImage",
        title: "Twitter Image",
        category: Category::Twitter,
        weight: 1,
        field: TagField::TwitterImage,
        rule: CheckRule::Presence {
            missing: "Missing twitter:image tag",
        },
        explanation: "The twitter:image defines what image appears when your content is shared on Twitter.",
    },
];

// ────────────────────────────────────────────────────────────────────────────
// Evaluation
// ────────────────────────────────────────────────────────────────────────────

/// One check applied to one record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EvaluatedCheck {
    pub name: String,
    pub title: String,
    pub category: Category,
    pub weight: u32,
    pub status: CheckStatus,
    pub value: String,
    pub recommendation: String,
    pub explanation: String,
}

pub fn evaluate_check(def: &CheckDefinition, record: &TagRecord) -> EvaluatedCheck {
    EvaluatedCheck {
        name: def.name.to_string(),
        title: def.title.to_string(),
        category: def.category,
        weight: def.weight,
        status: def.status(record),
        value: record.get(def.field).to_string(),
        recommendation: def.recommendation(record),
        explanation: def.explanation.to_string(),
    }
}

/// Runs every check in [`CHECKS`] against `record`, in table order.
pub fn evaluate_all(record: &TagRecord) -> Vec<EvaluatedCheck> {
    CHECKS.iter().map(|def| evaluate_check(def, record)).collect()
}

#[cfg(test)]
pub fn find_check(name: &str) -> Option<&'static CheckDefinition> {
    CHECKS.iter().find(|def| def.name == name)
}
