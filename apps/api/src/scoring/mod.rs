// Scoring engine: fixed check table, weighted aggregation, rating, previews.
// Everything here is synchronous and pure; no I/O.

pub mod aggregate;
pub mod checks;
pub mod preview;
pub mod rating;
pub mod summary;

pub use checks::{evaluate_all, EvaluatedCheck};
pub use preview::{build_previews, Previews};
pub use summary::{build_summary, summarize, ScoreSummary};
