use serde::Serialize;

use super::aggregate::round_half_up;
use crate::candidates::{Candidate, ScoreType};
use crate::catalog::SYSTEM_HARDENING;

/// Any single score under this marks a candidate as needing improvement.
pub const IMPROVEMENT_SCORE_FLOOR: f64 = 60.0;

/// Headline counters shown above the analytics views.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Overview {
    pub total_candidates: usize,
    pub avg_system_hardening_practice: f64,
    pub needs_improvement_count: usize,
}

impl Overview {
    pub fn compute(candidates: &[Candidate]) -> Self {
        let total_candidates = candidates.len();
        let avg_system_hardening_practice = if total_candidates == 0 {
            0.0
        } else {
            let total: f64 = candidates
                .iter()
                .map(|candidate| {
                    candidate
                        .score_for(SYSTEM_HARDENING, ScoreType::Practice)
                        .unwrap_or(0.0)
                })
                .sum();
            round_half_up(total / total_candidates as f64)
        };
        let needs_improvement_count = candidates
            .iter()
            .filter(|candidate| {
                candidate
                    .scores
                    .iter()
                    .any(|score| score.score < IMPROVEMENT_SCORE_FLOOR)
            })
            .count();

        Self {
            total_candidates,
            avg_system_hardening_practice,
            needs_improvement_count,
        }
    }
}
