use serde::{Deserialize, Serialize};

use super::quadrant::Quadrant;
use super::weakness::SkillWeakness;

/// Which analytics perspective is active on the dashboard and in exports.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AnalyticsView {
    /// Talent distribution.
    #[default]
    Enterprise,
    /// Skill weakness ranking and learning plan.
    Training,
    /// Theory/practice quadrant matrix.
    Review,
}

impl AnalyticsView {
    pub const fn title(self) -> &'static str {
        match self {
            Self::Enterprise => "企业视角分析 - 人才梯队",
            Self::Training => "培训视角分析 - 技能短板",
            Self::Review => "人才盘点视角 - 知行矩阵分析",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum StructureHealth {
    Healthy,
    Polarized,
}

impl StructureHealth {
    pub const fn label(self) -> &'static str {
        match self {
            Self::Healthy => "健康，中坚力量充足",
            Self::Polarized => "呈两极分化，需加强腰部力量",
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct DistributionInsights {
    pub elite_count: usize,
    pub developing_share_pct: f64,
    pub structure: StructureHealth,
    pub observations: Vec<String>,
}

#[derive(Debug, Clone, Serialize)]
pub struct WeaknessInsights {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub weakest: Option<SkillWeakness>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub drill_focus: Vec<&'static str>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub mastered: Vec<&'static str>,
    pub observations: Vec<String>,
}

#[derive(Debug, Clone, Serialize)]
pub struct QuadrantGroup {
    pub quadrant: Quadrant,
    pub label: &'static str,
    pub count: usize,
    pub names: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub strategy: Option<&'static str>,
}

#[derive(Debug, Clone, Serialize)]
pub struct QuadrantInsights {
    pub groups: Vec<QuadrantGroup>,
    pub observations: Vec<String>,
}

impl QuadrantInsights {
    pub fn group(&self, quadrant: Quadrant) -> Option<&QuadrantGroup> {
        self.groups.iter().find(|group| group.quadrant == quadrant)
    }
}
