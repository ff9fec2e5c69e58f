use serde::Serialize;

use crate::candidates::{CandidateId, Recommendation, ScoreType};

/// Colour band used by the score bar chart.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ScoreBand {
    Zero,
    Weak,
    Fair,
    Good,
    Excellent,
}

impl ScoreBand {
    pub fn for_score(score: f64) -> Self {
        if score == 0.0 {
            Self::Zero
        } else if score < 60.0 {
            Self::Weak
        } else if score < 80.0 {
            Self::Fair
        } else if score < 90.0 {
            Self::Good
        } else {
            Self::Excellent
        }
    }

    pub const fn color(self) -> &'static str {
        match self {
            Self::Zero => "#cbd5e1",
            Self::Weak => "#ef4444",
            Self::Fair => "#f59e0b",
            Self::Good => "#10b981",
            Self::Excellent => "#059669",
        }
    }
}

/// Grade shown next to each score in the detailed list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ScoreGrade {
    Strong,
    Adequate,
    Weak,
}

impl ScoreGrade {
    pub fn for_score(score: f64) -> Self {
        if score >= 80.0 {
            Self::Strong
        } else if score >= 60.0 {
            Self::Adequate
        } else {
            Self::Weak
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RadarAxis {
    pub subject: String,
    pub theory: f64,
    pub practice: f64,
    pub full_mark: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScoreBar {
    pub label: String,
    pub score: f64,
    pub band: ScoreBand,
    pub color: &'static str,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScoreLine {
    pub category: String,
    pub score_type: ScoreType,
    pub label: String,
    pub score: f64,
    pub grade: ScoreGrade,
}

#[derive(Debug, Clone, Serialize)]
pub struct CandidateReport {
    pub id: CandidateId,
    pub name: String,
    pub role: String,
    pub avatar: String,
    pub updated_at: String,
    pub summary: String,
    pub detailed_analysis: String,
    pub overall_average: f64,
    pub theory_average: f64,
    pub practice_average: f64,
    pub radar: Vec<RadarAxis>,
    pub bars: Vec<ScoreBar>,
    pub scores: Vec<ScoreLine>,
    pub recommendations: Vec<Recommendation>,
}
