use serde::{Deserialize, Serialize};

use crate::models::tag_record::TagRecord;
use crate::scoring::aggregate::score;
use crate::scoring::checks::{evaluate_all, Category, EvaluatedCheck};
use crate::scoring::rating::{derive_rating, Rating};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryScore {
    pub name: String,
    pub description: String,
    pub total: u32,
    pub passed: u32,
    pub warnings: u32,
    pub failed: u32,
    pub score: u32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CategoryScores {
    pub basic: CategoryScore,
    pub open_graph: CategoryScore,
    pub twitter: CategoryScore,
}

#[cfg(test)]
impl CategoryScores {
    pub fn get(&self, category: Category) -> &CategoryScore {
        match category {
            Category::Basic => &self.basic,
            Category::OpenGraph => &self.open_graph,
            Category::Twitter => &self.twitter,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoreSummary {
    pub passed: u32,
    pub warnings: u32,
    pub failed: u32,
    pub score: u32,
    pub rating: Rating,
    pub categories: CategoryScores,
}

/// Evaluates every check against `record` and summarizes the result.
pub fn build_summary(record: &TagRecord) -> ScoreSummary {
    summarize(&evaluate_all(record))
}

/// Summarizes checks that were already evaluated, so callers that also display
/// the individual checks evaluate them once.
pub fn summarize(checks: &[EvaluatedCheck]) -> ScoreSummary {
    let overall = score(checks);

    ScoreSummary {
        passed: overall.passed,
        warnings: overall.warnings,
        failed: overall.failed,
        score: overall.score,
        rating: derive_rating(overall.score),
        categories: CategoryScores {
            basic: category_score(checks, Category::Basic),
            open_graph: category_score(checks, Category::OpenGraph),
            twitter: category_score(checks, Category::Twitter),
        },
    }
}

fn category_score(checks: &[EvaluatedCheck], category: Category) -> CategoryScore {
    let in_category: Vec<EvaluatedCheck> = checks
        .iter()
        .filter(|c| c.category == category)
        .cloned()
        .collect();
    let tally = score(&in_category);

    CategoryScore {
        name: category.name().to_string(),
        description: category.description().to_string(),
        total: in_category.len() as u32,
        passed: tally.passed,
        warnings: tally.warnings,
        failed: tally.failed,
        score: tally.score,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::tag_record::TagField;
    use crate::scoring::checks::{CheckStatus, CHECKS};
    use crate::scoring::test_support::complete_record;

    fn assert_consistent(summary: &ScoreSummary) {
        assert_eq!(summary.passed + summary.warnings + summary.failed, 14);
        assert!(summary.score <= 100);

        let mut totals = 0;
        for category in Category::ALL {
            let c = summary.categories.get(category);
            assert_eq!(c.passed + c.warnings + c.failed, c.total, "{}", c.name);
            assert!(c.score <= 100);
            totals += c.total;
        }
        assert_eq!(totals, 14);
    }

    /// A handful of records spanning empty, complete and mixed states.
    fn sample_records() -> Vec<TagRecord> {
        let mut records = vec![TagRecord::empty("https://example.com"), complete_record()];
        for (i, def) in CHECKS.iter().enumerate() {
            let mut only_one = TagRecord::empty("https://example.com");
            *only_one.get_mut(def.field) = "x".repeat(i + 1);
            records.push(only_one);

            let mut all_but_one = complete_record();
            all_but_one.get_mut(def.field).clear();
            records.push(all_but_one);
        }
        records.push(TagRecord {
            title: "t".repeat(70),
            description: "d".repeat(300),
            ..TagRecord::empty("https://example.com")
        });
        records
    }

    #[test]
    fn test_empty_record_is_poor() {
        let summary = build_summary(&TagRecord::empty("https://example.com"));
        assert_eq!(summary.passed, 0);
        assert_eq!(summary.warnings, 0);
        assert_eq!(summary.failed, 14);
        assert_eq!(summary.score, 0);
        assert_eq!(summary.rating, Rating::Poor);
        for category in Category::ALL {
            assert_eq!(summary.categories.get(category).score, 0);
        }
    }

    #[test]
    fn test_complete_record_is_excellent() {
        let summary = build_summary(&complete_record());
        assert_eq!(summary.passed, 14);
        assert_eq!(summary.warnings, 0);
        assert_eq!(summary.failed, 0);
        assert_eq!(summary.score, 100);
        assert_eq!(summary.rating, Rating::Excellent);
    }

    #[test]
    fn test_long_title_gets_half_credit() {
        let record = TagRecord {
            title: "a".repeat(61),
            ..complete_record()
        };
        let summary = build_summary(&record);
        assert_eq!(summary.warnings, 1);
        assert_eq!(summary.passed, 13);
        // (22 - 3 + 1.5) / 22 = 93.18%
        assert_eq!(summary.score, 93);
        assert_eq!(summary.rating, Rating::Excellent);
        // basic: (11 - 3 + 1.5) / 11 = 86.36%
        assert_eq!(summary.categories.basic.score, 86);
        assert_eq!(summary.categories.open_graph.score, 100);
    }

    #[test]
    fn test_category_totals_and_labels() {
        let summary = build_summary(&complete_record());
        let c = &summary.categories;
        assert_eq!((c.basic.total, c.open_graph.total, c.twitter.total), (6, 4, 4));
        assert_eq!(c.basic.name, "Basic SEO");
        assert_eq!(c.open_graph.name, "Open Graph");
        assert_eq!(c.twitter.name, "Twitter Cards");
        assert!(c.twitter.description.contains("Twitter"));
    }

    #[test]
    fn test_invariants_hold_across_samples() {
        for record in sample_records() {
            assert_consistent(&build_summary(&record));
        }
    }

    #[test]
    fn test_deterministic() {
        for record in sample_records() {
            let a = serde_json::to_string(&build_summary(&record)).unwrap();
            let b = serde_json::to_string(&build_summary(&record)).unwrap();
            assert_eq!(a, b);
        }
    }

    #[test]
    fn test_fixing_a_failed_check_never_lowers_score() {
        for def in CHECKS.iter() {
            let mut before = complete_record();
            before.get_mut(def.field).clear();
            let after = complete_record();

            let low = build_summary(&before).score;
            let high = build_summary(&after).score;
            assert!(high > low, "fixing {} moved {low} -> {high}", def.name);
        }

        // Starting from nothing, adding any one tag raises the score.
        for def in CHECKS.iter() {
            let empty = TagRecord::empty("https://example.com");
            let mut one = empty.clone();
            *one.get_mut(def.field) = "present".to_string();
            assert!(build_summary(&one).score > build_summary(&empty).score);
        }
    }

    #[test]
    fn test_single_failure_costs_its_weight() {
        let mut record = complete_record();
        record.og_image.clear();
        let summary = build_summary(&record);
        // 20 / 22 = 90.9%
        assert_eq!(summary.score, 91);
        assert_eq!(summary.categories.open_graph.score, 71); // 5 / 7
        assert_eq!(summary.categories.open_graph.failed, 1);
    }

    #[test]
    fn test_twitter_only_page() {
        let mut record = TagRecord::empty("https://example.com");
        for field in [
            TagField::TwitterCard,
            TagField::TwitterTitle,
            TagField::TwitterDescription,
            TagField::TwitterImage,
        ] {
            *record.get_mut(field) = "set".to_string();
        }
        let summary = build_summary(&record);
        assert_eq!(summary.categories.twitter.score, 100);
        assert_eq!(summary.categories.basic.score, 0);
        // 4 / 22 = 18.2%
        assert_eq!(summary.score, 18);
        assert_eq!(summary.rating, Rating::Poor);
    }

    #[test]
    fn test_summarize_matches_build_summary() {
        let record = complete_record();
        let checks = evaluate_all(&record);
        assert_eq!(summarize(&checks), build_summary(&record));
        assert!(checks.iter().all(|c| c.status == CheckStatus::Pass));
    }

    #[test]
    fn test_serialized_shape() {
        let value = serde_json::to_value(build_summary(&complete_record())).unwrap();
        assert_eq!(value["rating"], "Excellent");
        assert_eq!(value["categories"]["openGraph"]["total"], 4);
        assert_eq!(value["categories"]["basic"]["name"], "Basic SEO");
    }
}
