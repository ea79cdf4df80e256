use serde::Serialize;

use crate::scoring::checks::{CheckStatus, EvaluatedCheck};

/// Status counts and weighted percentage over a set of evaluated checks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ScoreTally {
    pub passed: u32,
    pub warnings: u32,
    pub failed: u32,
    pub score: u32, // 0 – 100
}

/// Weighted score: pass earns the full weight, warning half of it, fail nothing.
///
/// `score = round(100 × earned / total)` with halves rounded up, or 0 for an empty
/// set. Used unchanged for the overall summary and for each category.
pub fn score(checks: &[EvaluatedCheck]) -> ScoreTally {
    let mut passed = 0;
    let mut warnings = 0;
    let mut failed = 0;

    // Tracked in half-weight units so the warning credit stays exact.
    let mut total_halves: u64 = 0;
    let mut earned_halves: u64 = 0;

    for check in checks {
        let halves = u64::from(check.weight) * 2;
        total_halves += halves;
        match check.status {
            CheckStatus::Pass => {
                passed += 1;
                earned_halves += halves;
            }
            CheckStatus::Warning => {
                warnings += 1;
                earned_halves += halves / 2;
            }
            CheckStatus::Fail => failed += 1,
        }
    }

    ScoreTally {
        passed,
        warnings,
        failed,
        score: percent_half_up(earned_halves, total_halves),
    }
}

/// `round(100 × part / whole)` with .5 rounding up; 0 when `whole` is 0.
fn percent_half_up(part: u64, whole: u64) -> u32 {
    if whole == 0 {
        return 0;
    }
    let scaled = 100 * part;
    ((2 * scaled + whole) / (2 * whole)) as u32
}
