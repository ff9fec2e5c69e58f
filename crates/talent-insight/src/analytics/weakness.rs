use serde::Serialize;

use super::aggregate::{average_by_category, round_half_up};
use crate::candidates::Candidate;
use crate::catalog::SkillCatalog;

/// Category averages under this value are flagged for improvement.
pub const NEEDS_IMPROVEMENT_BELOW: f64 = 60.0;
/// Category averages above this value count as mastered.
pub const MASTERED_ABOVE: f64 = 80.0;
pub const LEARNING_PLAN_SIZE: usize = 3;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SkillWeakness {
    pub key: &'static str,
    pub category: &'static str,
    pub average_score: f64,
}

impl SkillWeakness {
    pub fn needs_improvement(&self) -> bool {
        self.average_score < NEEDS_IMPROVEMENT_BELOW
    }

    pub fn status_label(&self) -> &'static str {
        if self.needs_improvement() {
            "需提升"
        } else {
            "良好"
        }
    }
}

/// Rank catalog categories weakest first.
///
/// Each candidate contributes the mean of their scores in the category (0 when
/// they have none); the per-category value is the rounded mean of those across
/// candidates. Ties keep catalog order.
pub fn rank_weaknesses(candidates: &[Candidate], catalog: &SkillCatalog) -> Vec<SkillWeakness> {
    let denominator = candidates.len().max(1) as f64;

    let mut ranking: Vec<SkillWeakness> = catalog
        .categories()
        .iter()
        .map(|category| {
            let total: f64 = candidates
                .iter()
                .map(|candidate| average_by_category(candidate, category.label))
                .sum();
            SkillWeakness {
                key: category.key,
                category: category.label,
                average_score: round_half_up(total / denominator),
            }
        })
        .collect();

    ranking.sort_by(|a, b| a.average_score.total_cmp(&b.average_score));
    ranking
}

#[derive(Debug, Clone, Serialize)]
pub struct LearningPlanItem {
    pub rank: usize,
    pub category: &'static str,
    pub average_score: f64,
    pub priority: bool,
    pub steps: &'static str,
    pub resources: &'static str,
}

/// Study plan for the weakest `limit` categories of a ranking.
pub fn learning_plan(
    ranking: &[SkillWeakness],
    catalog: &SkillCatalog,
    limit: usize,
) -> Vec<LearningPlanItem> {
    ranking
        .iter()
        .take(limit)
        .enumerate()
        .map(|(index, entry)| LearningPlanItem {
            rank: index + 1,
            category: entry.category,
            average_score: entry.average_score,
            priority: index < 2,
            steps: catalog.training_steps(entry.category),
            resources: catalog.training_resources(entry.category),
        })
        .collect()
}
