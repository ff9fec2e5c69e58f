use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use super::avatar::resolve_avatar;
use super::domain::{timestamp_now, Candidate, CandidateId, Recommendation, SkillScore};
use crate::catalog::SkillCatalog;

pub const DEFAULT_MANUAL_SCORE: f64 = 60.0;

/// Theory/practice pair entered for one category.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScoreInput {
    pub theory: f64,
    pub practice: f64,
}

impl Default for ScoreInput {
    fn default() -> Self {
        Self {
            theory: DEFAULT_MANUAL_SCORE,
            practice: DEFAULT_MANUAL_SCORE,
        }
    }
}

/// Manual form submission. Score inputs are keyed by category label.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ManualEntry {
    pub name: String,
    pub role: String,
    #[serde(default)]
    pub avatar: Option<String>,
    #[serde(default)]
    pub scores: BTreeMap<String, ScoreInput>,
}

impl ManualEntry {
    /// Blank form with every catalog category preset to the default score.
    pub fn blank(catalog: &SkillCatalog) -> Self {
        Self {
            name: String::new(),
            role: String::new(),
            avatar: None,
            scores: catalog
                .categories()
                .iter()
                .map(|category| (category.label.to_string(), ScoreInput::default()))
                .collect(),
        }
    }

    pub fn set_score(&mut self, category: &str, input: ScoreInput) {
        self.scores.insert(category.to_string(), input);
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum IntakeError {
    #[error("manual entry is missing required field `{0}`")]
    MissingField(&'static str),
}

pub fn clamp_score(value: f64) -> f64 {
    if value.is_nan() {
        return 0.0;
    }
    value.clamp(0.0, 100.0).trunc()
}

/// Build a candidate from a manual entry, clamping every score into [0, 100].
///
/// Categories follow catalog order; categories absent from the entry use the
/// default inputs. Theory-only categories record practice only when it is non-zero.
pub fn candidate_from_manual(
    entry: ManualEntry,
    catalog: &SkillCatalog,
) -> Result<Candidate, IntakeError> {
    let name = entry.name.trim().to_string();
    let role = entry.role.trim().to_string();
    if name.is_empty() {
        return Err(IntakeError::MissingField("name"));
    }
    if role.is_empty() {
        return Err(IntakeError::MissingField("role"));
    }

    let mut scores = Vec::with_capacity(catalog.len() * 2);
    for category in catalog.categories() {
        let input = entry
            .scores
            .get(category.label)
            .copied()
            .unwrap_or_default();
        let theory = clamp_score(input.theory);
        let practice = clamp_score(input.practice);

        scores.push(SkillScore::theory(category.label, theory));
        if !category.theory_only || practice > 0.0 {
            scores.push(SkillScore::practice(category.label, practice));
        }
    }

    Ok(Candidate {
        id: CandidateId::generate(),
        avatar: resolve_avatar(&name, entry.avatar.as_deref()),
        name,
        role,
        updated_at: timestamp_now(),
        summary: "手动录入的候选人数据。".to_string(),
        detailed_analysis: "基于手动录入的各项评分生成的能力画像。".to_string(),
        scores,
        recommendations: vec![Recommendation {
            direction: "能力提升建议".to_string(),
            steps: "根据当前评分，建议加强薄弱环节的理论学习与实操训练。".to_string(),
            resources: "内部知识库、在线CTF靶场".to_string(),
        }],
    })
}
