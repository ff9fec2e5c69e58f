//! Reductions over a candidate's score list.
//!
//! Every average divides by `max(count, 1)`, so an empty selection yields 0.0
//! instead of NaN.

use crate::candidates::{Candidate, ScoreType, SkillScore};

/// Round halves toward positive infinity, matching the dashboard's integer display.
pub fn round_half_up(value: f64) -> f64 {
    // `value + 0.5` can round up in binary before the floor is taken.
    let floor = value.floor();
    if value - floor >= 0.5 {
        floor + 1.0
    } else {
        floor
    }
}

pub(crate) fn guarded_mean<'a, I>(scores: I) -> f64
where
    I: IntoIterator<Item = &'a SkillScore>,
{
    let (sum, count) = scores
        .into_iter()
        .fold((0.0_f64, 0usize), |(sum, count), score| {
            (sum + score.score, count + 1)
        });
    sum / count.max(1) as f64
}

/// Mean across every score, both types and all categories.
pub fn average_overall(candidate: &Candidate) -> f64 {
    guarded_mean(&candidate.scores)
}

pub fn average_by_type(candidate: &Candidate, score_type: ScoreType) -> f64 {
    guarded_mean(
        candidate
            .scores
            .iter()
            .filter(|score| score.score_type == score_type),
    )
}

/// Mean of one category across theory and practice.
pub fn average_by_category(candidate: &Candidate, category: &str) -> f64 {
    guarded_mean(
        candidate
            .scores
            .iter()
            .filter(|score| score.category == category),
    )
}
