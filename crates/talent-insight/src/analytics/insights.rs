use super::distribution::{TalentDistribution, TalentTier};
use super::quadrant::{Quadrant, QuadrantMatrix};
use super::views::{
    DistributionInsights, QuadrantGroup, QuadrantInsights, StructureHealth, WeaknessInsights,
};
use super::weakness::{SkillWeakness, MASTERED_ABOVE};

const NAME_SEPARATOR: &str = "、";
const NO_MEMBERS: &str = "暂无";

pub(crate) fn distribution_insights(distribution: &TalentDistribution) -> DistributionInsights {
    let total = distribution.total();
    let elite_count = distribution.count(TalentTier::Elite);
    let developing_share_pct = distribution.share_pct(TalentTier::Developing);

    let structure = if distribution.count(TalentTier::Qualified) as f64 > total as f64 * 0.5 {
        StructureHealth::Healthy
    } else {
        StructureHealth::Polarized
    };

    let observations = vec![
        format!("目前团队中 {elite_count} 名高潜人才，建议纳入核心项目组。"),
        format!("待培养人员占比 {developing_share_pct}%，需制定基础提升计划。"),
        format!("整体梯队结构{}。", structure.label()),
    ];

    DistributionInsights {
        elite_count,
        developing_share_pct,
        structure,
        observations,
    }
}

pub(crate) fn weakness_insights(ranking: &[SkillWeakness]) -> WeaknessInsights {
    let weakest = ranking.first().cloned();
    let drill_focus: Vec<&'static str> = ranking
        .iter()
        .take(2)
        .map(|entry| entry.category)
        .collect();
    let mastered: Vec<&'static str> = ranking
        .iter()
        .filter(|entry| entry.average_score > MASTERED_ABOVE)
        .map(|entry| entry.category)
        .collect();

    let mut observations = Vec::new();
    if let Some(entry) = &weakest {
        observations.push(format!(
            "全体学员在 {} 方面表现最弱 (平均 {} 分)。",
            entry.category, entry.average_score
        ));
    }

    if drill_focus.len() == 2 {
        observations.push(format!(
            "建议增加 {} 和 {} 的实战演练课时。",
            drill_focus[0], drill_focus[1]
        ));
    }

    if mastered.is_empty() {
        observations.push("所有模块均需加强基础巩固。".to_string());
    } else {
        observations.push(format!(
            "学员在 {} 方面掌握较好，可适当减少理论授课。",
            mastered.join(NAME_SEPARATOR)
        ));
    }

    WeaknessInsights {
        weakest,
        drill_focus,
        mastered,
        observations,
    }
}

pub(crate) fn quadrant_insights(matrix: &QuadrantMatrix) -> QuadrantInsights {
    let groups: Vec<QuadrantGroup> = Quadrant::ordered()
        .into_iter()
        .map(|quadrant| QuadrantGroup {
            quadrant,
            label: quadrant.label(),
            count: matrix.count(quadrant),
            names: matrix
                .names(quadrant)
                .into_iter()
                .map(str::to_string)
                .collect(),
            strategy: quadrant.strategy(),
        })
        .collect();

    let observations = groups
        .iter()
        .filter_map(|group| {
            group.strategy.map(|strategy| {
                format!(
                    "{}: {} —— {}",
                    group.label,
                    joined_names(&group.names),
                    strategy
                )
            })
        })
        .collect();

    QuadrantInsights {
        groups,
        observations,
    }
}

pub(crate) fn joined_names(names: &[String]) -> String {
    if names.is_empty() {
        NO_MEMBERS.to_string()
    } else {
        names.join(NAME_SEPARATOR)
    }
}
