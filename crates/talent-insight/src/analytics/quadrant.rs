use serde::Serialize;

use super::aggregate::{average_by_type, round_half_up};
use crate::candidates::{Candidate, CandidateId, ScoreType};

/// Applied to both axes; meeting it counts as strong.
pub const QUADRANT_THRESHOLD: f64 = 70.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Quadrant {
    Expert,
    Practitioner,
    Theorist,
    Developing,
}

impl Quadrant {
    pub const fn ordered() -> [Self; 4] {
        [
            Self::Expert,
            Self::Practitioner,
            Self::Theorist,
            Self::Developing,
        ]
    }

    pub fn classify(theory_avg: f64, practice_avg: f64) -> Self {
        let strong_theory = theory_avg >= QUADRANT_THRESHOLD;
        let strong_practice = practice_avg >= QUADRANT_THRESHOLD;
        match (strong_theory, strong_practice) {
            (true, true) => Self::Expert,
            (false, true) => Self::Practitioner,
            (true, false) => Self::Theorist,
            (false, false) => Self::Developing,
        }
    }

    pub const fn name(self) -> &'static str {
        match self {
            Self::Expert => "Expert",
            Self::Practitioner => "Practitioner",
            Self::Theorist => "Theorist",
            Self::Developing => "Developing",
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Expert => "卓越专家",
            Self::Practitioner => "实战能手",
            Self::Theorist => "理论强人",
            Self::Developing => "待激活者",
        }
    }

    pub const fn color(self) -> &'static str {
        match self {
            Self::Expert => "#4f46e5",
            Self::Practitioner => "#10b981",
            Self::Theorist => "#f59e0b",
            Self::Developing => "#ef4444",
        }
    }

    /// Management strategy shown for the quadrant, if it has one.
    pub const fn strategy(self) -> Option<&'static str> {
        match self {
            Self::Expert => Some("建议作为内部导师，进行经验萃取与传承。"),
            Self::Practitioner => Some("建议补充系统化理论培训，提升架构思维。"),
            Self::Theorist => Some("建议安排高难度项目实战，或进行轮岗锻炼。"),
            Self::Developing => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct QuadrantPlacement {
    pub id: CandidateId,
    pub name: String,
    pub role: String,
    pub theory_avg: f64,
    pub practice_avg: f64,
    pub quadrant: Quadrant,
    pub quadrant_label: &'static str,
}

impl QuadrantPlacement {
    /// Averages are rounded to whole points before thresholding.
    pub fn place(candidate: &Candidate) -> Self {
        let theory_avg = round_half_up(average_by_type(candidate, ScoreType::Theory));
        let practice_avg = round_half_up(average_by_type(candidate, ScoreType::Practice));
        let quadrant = Quadrant::classify(theory_avg, practice_avg);

        Self {
            id: candidate.id.clone(),
            name: candidate.name.clone(),
            role: candidate.role.clone(),
            theory_avg,
            practice_avg,
            quadrant,
            quadrant_label: quadrant.label(),
        }
    }
}

/// Per-candidate placements in store order.
#[derive(Debug, Clone, Default, Serialize)]
pub struct QuadrantMatrix {
    pub placements: Vec<QuadrantPlacement>,
}

impl QuadrantMatrix {
    pub fn compute(candidates: &[Candidate]) -> Self {
        Self {
            placements: candidates.iter().map(QuadrantPlacement::place).collect(),
        }
    }

    pub fn members(&self, quadrant: Quadrant) -> impl Iterator<Item = &QuadrantPlacement> {
        self.placements
            .iter()
            .filter(move |placement| placement.quadrant == quadrant)
    }

    pub fn count(&self, quadrant: Quadrant) -> usize {
        self.members(quadrant).count()
    }

    pub fn names(&self, quadrant: Quadrant) -> Vec<&str> {
        self.members(quadrant)
            .map(|placement| placement.name.as_str())
            .collect()
    }
}
