//! Navigation state of one dashboard user, driven by explicit actions.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::analytics::AnalyticsView;
use crate::candidates::{CandidateId, CandidateStore, StoreError};

pub const DASHBOARD_TAB: &str = "dashboard";
pub const CANDIDATES_TAB: &str = "candidates";

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "candidateId", rename_all = "snake_case")]
pub enum Screen {
    #[default]
    Dashboard,
    Report(CandidateId),
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TrainingTab {
    #[default]
    Analysis,
    Plan,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardSession {
    pub screen: Screen,
    pub active_tab: String,
    pub analytics: AnalyticsView,
    pub training_tab: TrainingTab,
    pub search: String,
}

impl Default for DashboardSession {
    fn default() -> Self {
        Self {
            screen: Screen::Dashboard,
            active_tab: DASHBOARD_TAB.to_string(),
            analytics: AnalyticsView::default(),
            training_tab: TrainingTab::default(),
            search: String::new(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "action", content = "value", rename_all = "snake_case")]
pub enum SessionAction {
    SelectCandidate(CandidateId),
    BackToDashboard,
    SwitchAnalytics(AnalyticsView),
    SwitchTrainingTab(TrainingTab),
    Search(String),
    NavigateTab(String),
}

#[derive(Debug, thiserror::Error)]
pub enum SessionError {
    #[error("candidate `{0}` not found")]
    UnknownCandidate(CandidateId),
    #[error(transparent)]
    Store(#[from] StoreError),
}

impl DashboardSession {
    pub fn new() -> Self {
        Self::default()
    }

    /// Apply one navigation action. Selecting a candidate requires it to exist in `store`.
    ///
    /// A failed action leaves the session unchanged.
    pub fn apply<S>(&mut self, action: SessionAction, store: &S) -> Result<(), SessionError>
    where
        S: CandidateStore + ?Sized,
    {
        debug!(?action, "applying session action");
        match action {
            SessionAction::SelectCandidate(id) => {
                if !store.contains(&id)? {
                    return Err(SessionError::UnknownCandidate(id));
                }
                self.screen = Screen::Report(id);
            }
            SessionAction::BackToDashboard => self.screen = Screen::Dashboard,
            SessionAction::SwitchAnalytics(view) => self.analytics = view,
            SessionAction::SwitchTrainingTab(tab) => self.training_tab = tab,
            SessionAction::Search(term) => self.search = term,
            SessionAction::NavigateTab(tab) => {
                // Other tabs only change the highlighted entry.
                if tab == DASHBOARD_TAB || tab == CANDIDATES_TAB {
                    self.screen = Screen::Dashboard;
                }
                self.active_tab = tab;
            }
        }
        Ok(())
    }

    pub fn selected_candidate(&self) -> Option<&CandidateId> {
        match &self.screen {
            Screen::Report(id) => Some(id),
            Screen::Dashboard => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::candidates::{seed, InMemoryCandidateStore};

    fn store() -> InMemoryCandidateStore {
        InMemoryCandidateStore::with_candidates(seed::demo_candidates())
    }

    #[test]
    fn starts_on_dashboard_with_enterprise_view() {
        let session = DashboardSession::new();
        assert_eq!(session.screen, Screen::Dashboard);
        assert_eq!(session.analytics, AnalyticsView::Enterprise);
        assert_eq!(session.training_tab, TrainingTab::Analysis);
        assert_eq!(session.active_tab, "dashboard");
    }

    #[test]
    fn select_then_back_round_trips_screen() {
        let store = store();
        let mut session = DashboardSession::new();

        session
            .apply(SessionAction::SelectCandidate("c-002".into()), &store)
            .expect("known candidate");
        assert_eq!(session.selected_candidate().map(|id| id.as_str()), Some("c-002"));

        session
            .apply(SessionAction::BackToDashboard, &store)
            .expect("back");
        assert_eq!(session.selected_candidate(), None);
    }

    #[test]
    fn unknown_candidate_leaves_session_unchanged() {
        let store = store();
        let mut session = DashboardSession::new();

        let err = session
            .apply(SessionAction::SelectCandidate("c-404".into()), &store)
            .expect_err("unknown id");

        assert!(matches!(err, SessionError::UnknownCandidate(_)));
        assert_eq!(session, DashboardSession::new());
    }

    #[test]
    fn navigating_to_other_tabs_keeps_report_open() {
        let store = store();
        let mut session = DashboardSession::new();
        session
            .apply(SessionAction::SelectCandidate("c-001".into()), &store)
            .expect("select");

        session
            .apply(SessionAction::NavigateTab("settings".into()), &store)
            .expect("navigate");
        assert!(session.selected_candidate().is_some());
        assert_eq!(session.active_tab, "settings");

        session
            .apply(SessionAction::NavigateTab("candidates".into()), &store)
            .expect("navigate");
        assert_eq!(session.screen, Screen::Dashboard);
    }

    #[test]
    fn search_and_view_switches_are_recorded() {
        let store = store();
        let mut session = DashboardSession::new();
        session
            .apply(SessionAction::Search("工程师".into()), &store)
            .expect("search");
        session
            .apply(SessionAction::SwitchAnalytics(AnalyticsView::Training), &store)
            .expect("switch view");
        session
            .apply(SessionAction::SwitchTrainingTab(TrainingTab::Plan), &store)
            .expect("switch tab");

        assert_eq!(session.search, "工程师");
        assert_eq!(session.analytics, AnalyticsView::Training);
        assert_eq!(session.training_tab, TrainingTab::Plan);
    }

    #[test]
    fn actions_deserialize_from_tagged_json() {
        let action: SessionAction =
            serde_json::from_str(r#"{"action": "switch_analytics", "value": "review"}"#)
                .expect("valid action");
        assert_eq!(action, SessionAction::SwitchAnalytics(AnalyticsView::Review));

        let action: SessionAction =
            serde_json::from_str(r#"{"action": "back_to_dashboard"}"#).expect("unit action");
        assert_eq!(action, SessionAction::BackToDashboard);
    }
}
