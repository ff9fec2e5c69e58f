//! Skill analytics for reviewing security-engineering candidates.
//!
//! The crate holds the in-memory candidate store, the analytics engine that
//! derives talent distribution, skill weakness and theory/practice quadrant
//! views, the per-candidate report view, and the JSON import / Word export
//! adapters that sit around them.

pub mod analytics;
pub mod candidates;
pub mod catalog;
pub mod config;
pub mod error;
pub mod interchange;
pub mod report;
pub mod router;
pub mod session;
pub mod telemetry;

pub use analytics::AnalyticsSnapshot;
pub use candidates::{Candidate, CandidateStore, InMemoryCandidateStore, ScoreType, SkillScore};
pub use catalog::SkillCatalog;
