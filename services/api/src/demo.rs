use crate::infra::{initial_store, load_store, parse_date, ViewArg};
use chrono::{Local, NaiveDate};
use clap::Args;
use std::collections::HashSet;
use std::path::PathBuf;
use talent_insight::analytics::{AnalyticsSnapshot, AnalyticsView, LearningPlanItem};
use talent_insight::candidates::{Candidate, CandidateId};
use talent_insight::error::AppError;
use talent_insight::interchange::{candidate_json, parse_candidates, render_word_document};
use talent_insight::report::CandidateReport;
use talent_insight::{CandidateStore, SkillCatalog};
use tracing::info;

#[derive(Args, Debug, Default)]
pub(crate) struct AnalyticsArgs {
    /// Analytics perspective to print
    #[arg(long, value_enum, default_value_t = ViewArg::Enterprise)]
    pub(crate) view: ViewArg,
    /// JSON import file whose candidates are added before analysing
    #[arg(long)]
    pub(crate) input: Option<PathBuf>,
    /// Skip the demo candidates
    #[arg(long)]
    pub(crate) no_seed: bool,
    /// Write the Word export to this file, or into this directory under its default name
    #[arg(long)]
    pub(crate) word: Option<PathBuf>,
    /// Generation date printed on the export (YYYY-MM-DD). Defaults to today.
    #[arg(long, value_parser = parse_date)]
    pub(crate) date: Option<NaiveDate>,
}

#[derive(Args, Debug)]
pub(crate) struct ReportArgs {
    /// Candidate id, e.g. c-001
    #[arg(long)]
    pub(crate) id: String,
    /// Print the raw candidate JSON instead of the formatted report
    #[arg(long)]
    pub(crate) json: bool,
    /// JSON import file whose candidates are added before the lookup
    #[arg(long)]
    pub(crate) input: Option<PathBuf>,
    /// Skip the demo candidates
    #[arg(long)]
    pub(crate) no_seed: bool,
}

#[derive(Args, Debug)]
pub(crate) struct ImportArgs {
    /// JSON file holding one candidate object or an array of them
    pub(crate) file: PathBuf,
    /// Validate against an empty store instead of the demo candidates
    #[arg(long)]
    pub(crate) no_seed: bool,
}

pub(crate) fn run_analytics(args: AnalyticsArgs) -> Result<(), AppError> {
    let AnalyticsArgs {
        view,
        input,
        no_seed,
        word,
        date,
    } = args;

    let store = load_store(!no_seed, input.as_deref())?;
    let candidates = store.list()?;
    let catalog = SkillCatalog::standard();
    let snapshot = AnalyticsSnapshot::compute(&candidates, &catalog);
    let view = AnalyticsView::from(view);

    render_analytics(&snapshot, view);

    if let Some(target) = word {
        let date = date.unwrap_or_else(|| Local::now().date_naive());
        let document = render_word_document(&snapshot, view, date);
        let path = if target.is_dir() {
            target.join(&document.file_name)
        } else {
            target
        };
        std::fs::write(&path, document.content)?;
        info!(path = %path.display(), ?view, "word export written");
        println!("\nWord export written to {}", path.display());
    }

    Ok(())
}

pub(crate) fn run_report(args: ReportArgs) -> Result<(), AppError> {
    let ReportArgs {
        id,
        json,
        input,
        no_seed,
    } = args;

    let store = load_store(!no_seed, input.as_deref())?;
    let id = CandidateId(id);
    let candidate = store.get(&id)?.ok_or(AppError::NotFound(id))?;

    if json {
        println!("{}", candidate_json(&candidate)?);
    } else {
        render_report(&CandidateReport::build(&candidate));
    }
    Ok(())
}

pub(crate) fn run_import_check(args: ImportArgs) -> Result<(), AppError> {
    let ImportArgs { file, no_seed } = args;

    let store = initial_store(!no_seed)?;
    let existing: HashSet<CandidateId> = store
        .list()?
        .into_iter()
        .map(|candidate| candidate.id)
        .collect();
    let text = std::fs::read_to_string(&file)?;
    let candidates = parse_candidates(&text, &existing)?;

    println!(
        "{} is valid: {} candidate(s) would be added",
        file.display(),
        candidates.len()
    );
    for candidate in &candidates {
        render_import_line(candidate);
    }
    Ok(())
}

fn render_import_line(candidate: &Candidate) {
    println!(
        "- {} | {} | {} | {} scores, {} recommendations",
        candidate.id,
        candidate.name,
        candidate.role,
        candidate.scores.len(),
        candidate.recommendations.len()
    );
}

pub(crate) fn render_analytics(snapshot: &AnalyticsSnapshot, view: AnalyticsView) {
    let overview = &snapshot.overview;
    println!("Talent analytics");
    println!(
        "- {} candidates | system hardening practice avg {} | {} need improvement",
        overview.total_candidates,
        overview.avg_system_hardening_practice,
        overview.needs_improvement_count
    );

    println!("\n{}", view.title());
    match view {
        AnalyticsView::Enterprise => {
            let section = &snapshot.distribution;
            if section.entries.is_empty() {
                println!("- no candidates");
            }
            for entry in &section.entries {
                println!("- {}: {} ({}%)", entry.label, entry.count, entry.share_pct);
            }
            render_observations("Insights", &section.insights.observations);
        }
        AnalyticsView::Training => {
            let section = &snapshot.weakness;
            for entry in &section.ranking {
                println!(
                    "- {}: {} [{}]",
                    entry.category,
                    entry.average_score,
                    entry.status_label()
                );
            }
            render_observations("Suggestions", &section.insights.observations);
            println!("Learning plan:");
            for line in learning_plan_lines(&section.full_plan) {
                println!("{line}");
            }
        }
        AnalyticsView::Review => {
            let section = &snapshot.quadrant;
            for placement in &section.placements {
                println!(
                    "- {} ({}): theory {} | practice {} -> {}",
                    placement.name,
                    placement.role,
                    placement.theory_avg,
                    placement.practice_avg,
                    placement.quadrant_label
                );
            }
            render_observations("Strategies", &section.insights.observations);
        }
    }
}

fn learning_plan_lines(plan: &[LearningPlanItem]) -> Vec<String> {
    plan.iter()
        .flat_map(|item| {
            let marker = if item.priority { " (priority)" } else { "" };
            [
                format!(
                    "  {}. {} - avg {}{}",
                    item.rank, item.category, item.average_score, marker
                ),
                format!("     steps: {}", item.steps),
                format!("     resources: {}", item.resources),
            ]
        })
        .collect()
}

fn render_observations(heading: &str, observations: &[String]) {
    println!("{heading}:");
    for observation in observations {
        println!("  - {observation}");
    }
}

pub(crate) fn render_report(report: &CandidateReport) {
    println!("{} | {} ({})", report.name, report.role, report.id);
    println!("Updated {}", report.updated_at);
    println!(
        "Averages: overall {} | theory {} | practice {}",
        report.overall_average, report.theory_average, report.practice_average
    );
    println!("\n{}", report.summary);

    println!("\nSkill radar:");
    for axis in &report.radar {
        println!(
            "- {}: theory {} / practice {} (of {})",
            axis.subject, axis.theory, axis.practice, axis.full_mark
        );
    }

    println!("\nScores:");
    for line in &report.scores {
        println!("- {}: {} ({:?})", line.label, line.score, line.grade);
    }

    if report.recommendations.is_empty() {
        return;
    }
    println!("\nRecommendations:");
    for recommendation in &report.recommendations {
        println!("- {}", recommendation.direction);
        println!("  steps: {}", recommendation.steps);
        println!("  resources: {}", recommendation.resources);
    }
}
