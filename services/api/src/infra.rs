use chrono::NaiveDate;
use clap::ValueEnum;
use metrics_exporter_prometheus::PrometheusHandle;
use std::path::Path;
use std::sync::atomic::AtomicBool;
use std::sync::Arc;
use talent_insight::analytics::AnalyticsView;
use talent_insight::candidates::seed;
use talent_insight::error::AppError;
use talent_insight::interchange::CandidateImporter;
use talent_insight::{CandidateStore, InMemoryCandidateStore};
use tracing::info;

#[derive(Clone)]
pub(crate) struct AppState {
    pub(crate) readiness: Arc<AtomicBool>,
    pub(crate) metrics: Arc<PrometheusHandle>,
}

/// Command-line spelling of the analytics perspectives.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub(crate) enum ViewArg {
    #[default]
    Enterprise,
    Training,
    Review,
}

impl From<ViewArg> for AnalyticsView {
    fn from(value: ViewArg) -> Self {
        match value {
            ViewArg::Enterprise => AnalyticsView::Enterprise,
            ViewArg::Training => AnalyticsView::Training,
            ViewArg::Review => AnalyticsView::Review,
        }
    }
}

pub(crate) fn parse_date(value: &str) -> Result<NaiveDate, String> {
    NaiveDate::parse_from_str(value, "%Y-%m-%d")
        .map_err(|err| format!("invalid date '{value}': {err}"))
}

/// Store initialised with the demo candidates unless seeding is disabled.
pub(crate) fn initial_store(seed_demo: bool) -> Result<InMemoryCandidateStore, AppError> {
    let store = InMemoryCandidateStore::new();
    if seed_demo {
        store.replace_all(seed::demo_candidates())?;
    }
    Ok(store)
}

/// Initial store plus the records of an optional import file.
pub(crate) fn load_store(
    seed_demo: bool,
    import: Option<&Path>,
) -> Result<InMemoryCandidateStore, AppError> {
    let store = initial_store(seed_demo)?;
    if let Some(path) = import {
        let text = std::fs::read_to_string(path)?;
        let summary = CandidateImporter::import(&store, &text)?;
        info!(path = %path.display(), imported = summary.imported, "import file loaded");
    }
    Ok(store)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_date_accepts_iso_dates() {
        assert_eq!(
            parse_date("2025-12-01"),
            Ok(NaiveDate::from_ymd_opt(2025, 12, 1).expect("valid date"))
        );
        assert!(parse_date("12/01/2025").is_err());
    }

    #[test]
    fn initial_store_respects_seed_flag() {
        let seeded = initial_store(true).expect("store builds");
        assert_eq!(seeded.list().expect("list").len(), 3);

        let empty = initial_store(false).expect("store builds");
        assert!(empty.list().expect("list").is_empty());
    }

    #[test]
    fn view_args_map_onto_analytics_views() {
        assert_eq!(AnalyticsView::from(ViewArg::Review), AnalyticsView::Review);
        assert_eq!(AnalyticsView::from(ViewArg::default()), AnalyticsView::Enterprise);
    }
}
