pub mod avatar;
pub mod domain;
pub mod intake;
pub mod seed;
pub mod store;

pub use domain::{timestamp_now, Candidate, CandidateId, Recommendation, ScoreType, SkillScore};
pub use intake::{candidate_from_manual, IntakeError, ManualEntry, ScoreInput};
pub use store::{CandidateStore, InMemoryCandidateStore, StoreError};
