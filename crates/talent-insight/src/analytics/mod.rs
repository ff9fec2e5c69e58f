//! Analytics engine: pure recomputation from a store snapshot.

pub mod aggregate;
pub mod distribution;
mod insights;
pub mod overview;
pub mod quadrant;
pub mod views;
pub mod weakness;

pub use aggregate::{average_by_category, average_by_type, average_overall, round_half_up};
pub use distribution::{TalentDistribution, TalentTier, TierEntry};
pub use overview::Overview;
pub use quadrant::{Quadrant, QuadrantMatrix, QuadrantPlacement};
pub use views::{
    AnalyticsView, DistributionInsights, QuadrantGroup, QuadrantInsights, StructureHealth,
    WeaknessInsights,
};
pub use weakness::{learning_plan, rank_weaknesses, LearningPlanItem, SkillWeakness};

pub(crate) use insights::joined_names;

use crate::candidates::Candidate;
use crate::catalog::SkillCatalog;
use serde::Serialize;

#[derive(Debug, Clone, Serialize)]
pub struct DistributionSection {
    pub counts: TalentDistribution,
    pub entries: Vec<TierEntry>,
    pub insights: DistributionInsights,
}

#[derive(Debug, Clone, Serialize)]
pub struct WeaknessSection {
    pub ranking: Vec<SkillWeakness>,
    /// Weakest three, as printed in the export.
    pub learning_plan: Vec<LearningPlanItem>,
    /// Every category, weakest first, for the plan tab.
    pub full_plan: Vec<LearningPlanItem>,
    pub insights: WeaknessInsights,
}

#[derive(Debug, Clone, Serialize)]
pub struct QuadrantSection {
    pub placements: Vec<QuadrantPlacement>,
    pub insights: QuadrantInsights,
}

/// Every analytics view computed from one candidate snapshot.
///
/// Screen and export both render from this value, so they cannot disagree.
#[derive(Debug, Clone, Serialize)]
pub struct AnalyticsSnapshot {
    pub overview: Overview,
    pub distribution: DistributionSection,
    pub weakness: WeaknessSection,
    pub quadrant: QuadrantSection,
}

impl AnalyticsSnapshot {
    pub fn compute(candidates: &[Candidate], catalog: &SkillCatalog) -> Self {
        let overview = Overview::compute(candidates);

        let counts = TalentDistribution::compute(candidates);
        let distribution = DistributionSection {
            entries: counts.entries(),
            insights: insights::distribution_insights(&counts),
            counts,
        };

        let ranking = rank_weaknesses(candidates, catalog);
        let weakness = WeaknessSection {
            learning_plan: learning_plan(&ranking, catalog, weakness::LEARNING_PLAN_SIZE),
            full_plan: learning_plan(&ranking, catalog, ranking.len()),
            insights: insights::weakness_insights(&ranking),
            ranking,
        };

        let matrix = QuadrantMatrix::compute(candidates);
        let quadrant = QuadrantSection {
            insights: insights::quadrant_insights(&matrix),
            placements: matrix.placements,
        };

        Self {
            overview,
            distribution,
            weakness,
            quadrant,
        }
    }
}
