//! Read-only profile of one candidate.

pub mod views;

pub use views::{CandidateReport, RadarAxis, ScoreBand, ScoreBar, ScoreGrade, ScoreLine};

use crate::analytics::{average_by_type, average_overall, round_half_up};
use crate::candidates::{Candidate, ScoreType};

pub const FULL_MARK: f64 = 100.0;

impl CandidateReport {
    pub fn build(candidate: &Candidate) -> Self {
        Self {
            id: candidate.id.clone(),
            name: candidate.name.clone(),
            role: candidate.role.clone(),
            avatar: candidate.avatar.clone(),
            updated_at: candidate.updated_at.clone(),
            summary: candidate.summary.clone(),
            detailed_analysis: candidate.detailed_analysis.clone(),
            overall_average: round_half_up(average_overall(candidate)),
            theory_average: round_half_up(average_by_type(candidate, ScoreType::Theory)),
            practice_average: round_half_up(average_by_type(candidate, ScoreType::Practice)),
            radar: radar_axes(candidate),
            bars: score_bars(candidate),
            scores: score_lines(candidate),
            recommendations: candidate.recommendations.clone(),
        }
    }
}

/// One axis per distinct category, in first-appearance order.
fn radar_axes(candidate: &Candidate) -> Vec<RadarAxis> {
    let mut subjects: Vec<&str> = Vec::new();
    for score in &candidate.scores {
        if !subjects.contains(&score.category.as_str()) {
            subjects.push(&score.category);
        }
    }

    subjects
        .into_iter()
        .map(|subject| RadarAxis {
            subject: subject.to_string(),
            theory: candidate
                .score_for(subject, ScoreType::Theory)
                .unwrap_or(0.0),
            practice: candidate
                .score_for(subject, ScoreType::Practice)
                .unwrap_or(0.0),
            full_mark: FULL_MARK,
        })
        .collect()
}

fn score_label(category: &str, score_type: ScoreType) -> String {
    format!("{category}{}", score_type.label())
}

fn score_bars(candidate: &Candidate) -> Vec<ScoreBar> {
    candidate
        .scores
        .iter()
        .map(|score| {
            let band = ScoreBand::for_score(score.score);
            ScoreBar {
                label: format!("{} ({})", score.category, score.score_type.label()),
                score: score.score,
                band,
                color: band.color(),
            }
        })
        .collect()
}

fn score_lines(candidate: &Candidate) -> Vec<ScoreLine> {
    candidate
        .scores
        .iter()
        .map(|score| ScoreLine {
            category: score.category.clone(),
            score_type: score.score_type,
            label: score_label(&score.category, score.score_type),
            score: score.score,
            grade: ScoreGrade::for_score(score.score),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::candidates::seed;

    #[test]
    fn report_summarizes_reference_candidate() {
        let report = CandidateReport::build(&seed::reference_candidate());

        assert_eq!(report.name, "李白");
        // 678 / 11 = 61.6
        assert_eq!(report.overall_average, 62.0);
        assert_eq!(report.theory_average, 79.0);
        assert_eq!(report.practice_average, 41.0);
        assert_eq!(report.recommendations.len(), 4);
    }

    #[test]
    fn radar_has_one_axis_per_category_with_zero_for_missing_practice() {
        let report = CandidateReport::build(&seed::reference_candidate());

        assert_eq!(report.radar.len(), 6);
        assert_eq!(report.radar[0].subject, "安全监测");
        assert_eq!(report.radar[0].theory, 65.0);
        assert_eq!(report.radar[0].practice, 33.0);
        let business = report
            .radar
            .iter()
            .find(|axis| axis.subject == "业务理解")
            .expect("business axis");
        assert_eq!(business.practice, 0.0);
        assert!(report.radar.iter().all(|axis| axis.full_mark == 100.0));
    }

    #[test]
    fn bars_and_lines_follow_score_order() {
        let report = CandidateReport::build(&seed::reference_candidate());

        assert_eq!(report.bars.len(), 11);
        assert_eq!(report.bars[0].label, "安全监测 (理论)");
        assert_eq!(report.bars[7].band, ScoreBand::Excellent);
        assert_eq!(report.bars[9].band, ScoreBand::Zero);
        assert_eq!(report.scores[6].label, "安全监测实操");
        assert_eq!(report.scores[6].grade, ScoreGrade::Weak);
    }

    #[test]
    fn bands_and_grades_use_inclusive_lower_bounds() {
        assert_eq!(ScoreBand::for_score(59.0), ScoreBand::Weak);
        assert_eq!(ScoreBand::for_score(60.0), ScoreBand::Fair);
        assert_eq!(ScoreBand::for_score(89.0), ScoreBand::Good);
        assert_eq!(ScoreBand::for_score(90.0), ScoreBand::Excellent);
        assert_eq!(ScoreGrade::for_score(80.0), ScoreGrade::Strong);
        assert_eq!(ScoreGrade::for_score(60.0), ScoreGrade::Adequate);
    }

    #[test]
    fn empty_scores_produce_empty_charts() {
        let mut candidate = seed::reference_candidate();
        candidate.scores.clear();
        let report = CandidateReport::build(&candidate);
        assert!(report.radar.is_empty());
        assert_eq!(report.overall_average, 0.0);
    }
}
