use serde::{Deserialize, Serialize};
use std::fmt;

/// Identifier wrapper for candidates held in the store.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CandidateId(pub String);

impl CandidateId {
    pub fn generate() -> Self {
        Self(format!("c-{}", uuid::Uuid::new_v4().simple()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for CandidateId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for CandidateId {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

/// Whether a score measures knowledge or hands-on ability.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ScoreType {
    Theory,
    Practice,
}

impl ScoreType {
    pub const fn label(self) -> &'static str {
        match self {
            Self::Theory => "理论",
            Self::Practice => "实操",
        }
    }
}

/// One measured skill axis for one candidate.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SkillScore {
    pub category: String,
    pub score: f64,
    #[serde(rename = "type")]
    pub score_type: ScoreType,
}

impl SkillScore {
    pub fn new(category: impl Into<String>, score: f64, score_type: ScoreType) -> Self {
        Self {
            category: category.into(),
            score,
            score_type,
        }
    }

    pub fn theory(category: impl Into<String>, score: f64) -> Self {
        Self::new(category, score, ScoreType::Theory)
    }

    pub fn practice(category: impl Into<String>, score: f64) -> Self {
        Self::new(category, score, ScoreType::Practice)
    }
}

/// A single learning-path suggestion.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Recommendation {
    pub direction: String,
    pub steps: String,
    pub resources: String,
}

/// Candidate record as held by the store and exchanged over JSON.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Candidate {
    pub id: CandidateId,
    pub name: String,
    pub role: String,
    pub avatar: String,
    pub updated_at: String,
    pub summary: String,
    pub detailed_analysis: String,
    pub scores: Vec<SkillScore>,
    pub recommendations: Vec<Recommendation>,
}

impl Candidate {
    /// Case-insensitive substring match against name or role.
    pub fn matches(&self, term: &str) -> bool {
        let needle = term.trim().to_lowercase();
        if needle.is_empty() {
            return true;
        }

        self.name.to_lowercase().contains(&needle) || self.role.to_lowercase().contains(&needle)
    }

    pub fn score_for(&self, category: &str, score_type: ScoreType) -> Option<f64> {
        self.scores
            .iter()
            .find(|score| score.category == category && score.score_type == score_type)
            .map(|score| score.score)
    }
}

/// Local timestamp in the format stored on candidate records.
pub fn timestamp_now() -> String {
    chrono::Local::now().format("%Y-%m-%d %H:%M:%S").to_string()
}
