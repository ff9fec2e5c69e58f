use serde::Serialize;

use super::aggregate::{average_overall, round_half_up};
use crate::candidates::Candidate;

pub const ELITE_THRESHOLD: f64 = 80.0;
pub const QUALIFIED_THRESHOLD: f64 = 60.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum TalentTier {
    Elite,
    Qualified,
    Developing,
}

impl TalentTier {
    pub const fn ordered() -> [Self; 3] {
        [Self::Elite, Self::Qualified, Self::Developing]
    }

    /// Lower bounds are inclusive.
    pub fn classify(average: f64) -> Self {
        if average >= ELITE_THRESHOLD {
            Self::Elite
        } else if average >= QUALIFIED_THRESHOLD {
            Self::Qualified
        } else {
            Self::Developing
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Elite => "高潜人才 (>80分)",
            Self::Qualified => "胜任骨干 (60-80分)",
            Self::Developing => "待培养 (<60分)",
        }
    }

    pub const fn color(self) -> &'static str {
        match self {
            Self::Elite => "#4f46e5",
            Self::Qualified => "#10b981",
            Self::Developing => "#f59e0b",
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct TierEntry {
    pub tier: TalentTier,
    pub label: &'static str,
    pub color: &'static str,
    pub count: usize,
    pub share_pct: f64,
}

/// Tier counts over the full candidate set.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct TalentDistribution {
    pub elite: usize,
    pub qualified: usize,
    pub developing: usize,
}

impl TalentDistribution {
    pub fn compute(candidates: &[Candidate]) -> Self {
        candidates
            .iter()
            .fold(Self::default(), |mut distribution, candidate| {
                match TalentTier::classify(average_overall(candidate)) {
                    TalentTier::Elite => distribution.elite += 1,
                    TalentTier::Qualified => distribution.qualified += 1,
                    TalentTier::Developing => distribution.developing += 1,
                }
                distribution
            })
    }

    pub fn count(&self, tier: TalentTier) -> usize {
        match tier {
            TalentTier::Elite => self.elite,
            TalentTier::Qualified => self.qualified,
            TalentTier::Developing => self.developing,
        }
    }

    pub fn total(&self) -> usize {
        self.elite + self.qualified + self.developing
    }

    /// Rounded percentage of the total, 0 when there are no candidates.
    pub fn share_pct(&self, tier: TalentTier) -> f64 {
        let total = self.total();
        if total == 0 {
            return 0.0;
        }
        round_half_up(self.count(tier) as f64 / total as f64 * 100.0)
    }

    /// Display entries; tiers without members are omitted.
    pub fn entries(&self) -> Vec<TierEntry> {
        TalentTier::ordered()
            .into_iter()
            .filter(|tier| self.count(*tier) > 0)
            .map(|tier| TierEntry {
                tier,
                label: tier.label(),
                color: tier.color(),
                count: self.count(tier),
                share_pct: self.share_pct(tier),
            })
            .collect()
    }
}
