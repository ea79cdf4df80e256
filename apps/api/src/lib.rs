//! seoscope: fetch a page, extract its SEO tags, and score them.
//!
//! The scoring engine in [`scoring`] is pure and synchronous; it can be used on
//! its own with any [`TagRecord`]. The HTTP surface lives in [`routes`].
//!
//! ```
//! use seoscope::{build_summary, TagRecord};
//!
//! let summary = build_summary(&TagRecord::empty("https://example.com"));
//! assert_eq!(summary.score, 0);
//! assert_eq!(summary.rating.label(), "Poor");
//! ```

pub mod analysis;
pub mod config;
pub mod errors;
pub mod extraction;
pub mod models;
pub mod routes;
pub mod scoring;
pub mod state;

pub use config::Config;
pub use errors::AppError;
pub use models::tag_record::TagRecord;
pub use scoring::{build_summary, ScoreSummary};
