//! JSON API over the candidate store, analytics and dashboard session.

use std::sync::{Arc, RwLock};

use axum::extract::{Path, Query, State};
use axum::http::header::{self, HeaderMap, HeaderValue};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::{get, post};
use axum::{Json, Router};
use chrono::{Local, NaiveDate};
use serde::Deserialize;
use tracing::info;

use crate::analytics::{AnalyticsSnapshot, AnalyticsView};
use crate::candidates::{
    candidate_from_manual, Candidate, CandidateId, CandidateStore, ManualEntry, StoreError,
};
use crate::catalog::SkillCatalog;
use crate::error::AppError;
use crate::interchange::{render_word_document, CandidateImporter, ImportSummary, WORD_MIME};
use crate::report::CandidateReport;
use crate::session::{DashboardSession, SessionAction};

/// Shared state behind every handler.
pub struct DashboardContext<S> {
    store: Arc<S>,
    catalog: SkillCatalog,
    session: RwLock<DashboardSession>,
}

impl<S> DashboardContext<S>
where
    S: CandidateStore,
{
    pub fn new(store: Arc<S>, catalog: SkillCatalog) -> Self {
        Self {
            store,
            catalog,
            session: RwLock::new(DashboardSession::default()),
        }
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn catalog(&self) -> &SkillCatalog {
        &self.catalog
    }

    /// Analytics always run over the full list, never a search result.
    pub fn snapshot(&self) -> Result<AnalyticsSnapshot, StoreError> {
        let candidates = self.store.list()?;
        Ok(AnalyticsSnapshot::compute(&candidates, &self.catalog))
    }
}

pub fn candidate_router<S>(context: Arc<DashboardContext<S>>) -> Router
where
    S: CandidateStore + 'static,
{
    Router::new()
        .route(
            "/api/v1/candidates",
            get(list_handler::<S>).post(create_handler::<S>),
        )
        .route("/api/v1/candidates/import", post(import_handler::<S>))
        .route("/api/v1/candidates/:candidate_id", get(candidate_handler::<S>))
        .route(
            "/api/v1/candidates/:candidate_id/report",
            get(report_handler::<S>),
        )
        .route("/api/v1/analytics", get(analytics_handler::<S>))
        .route("/api/v1/analytics/export", get(export_handler::<S>))
        .route("/api/v1/session", get(session_handler::<S>))
        .route("/api/v1/session/actions", post(session_action_handler::<S>))
        .with_state(context)
}

#[derive(Debug, Default, Deserialize)]
pub(crate) struct ListQuery {
    #[serde(default)]
    search: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
pub(crate) struct ExportQuery {
    #[serde(default)]
    view: Option<AnalyticsView>,
    #[serde(default)]
    date: Option<NaiveDate>,
}

pub(crate) async fn list_handler<S>(
    State(context): State<Arc<DashboardContext<S>>>,
    Query(query): Query<ListQuery>,
) -> Result<Json<Vec<Candidate>>, AppError>
where
    S: CandidateStore + 'static,
{
    let candidates = match query.search.as_deref() {
        Some(term) => context.store.search(term)?,
        None => context.store.list()?,
    };
    Ok(Json(candidates))
}

pub(crate) async fn create_handler<S>(
    State(context): State<Arc<DashboardContext<S>>>,
    Json(entry): Json<ManualEntry>,
) -> Result<Response, AppError>
where
    S: CandidateStore + 'static,
{
    let candidate = candidate_from_manual(entry, &context.catalog)?;
    context.store.add(candidate.clone())?;
    info!(id = %candidate.id, "candidate added from manual entry");
    Ok((StatusCode::CREATED, Json(candidate)).into_response())
}

pub(crate) async fn import_handler<S>(
    State(context): State<Arc<DashboardContext<S>>>,
    body: String,
) -> Result<(StatusCode, Json<ImportSummary>), AppError>
where
    S: CandidateStore + 'static,
{
    let summary = CandidateImporter::import(context.store.as_ref(), &body)?;
    Ok((StatusCode::CREATED, Json(summary)))
}

fn find_candidate<S>(context: &DashboardContext<S>, raw_id: String) -> Result<Candidate, AppError>
where
    S: CandidateStore,
{
    let id = CandidateId(raw_id);
    context.store.get(&id)?.ok_or(AppError::NotFound(id))
}

pub(crate) async fn candidate_handler<S>(
    State(context): State<Arc<DashboardContext<S>>>,
    Path(candidate_id): Path<String>,
) -> Result<Json<Candidate>, AppError>
where
    S: CandidateStore + 'static,
{
    find_candidate(&context, candidate_id).map(Json)
}

pub(crate) async fn report_handler<S>(
    State(context): State<Arc<DashboardContext<S>>>,
    Path(candidate_id): Path<String>,
) -> Result<Json<CandidateReport>, AppError>
where
    S: CandidateStore + 'static,
{
    let candidate = find_candidate(&context, candidate_id)?;
    Ok(Json(CandidateReport::build(&candidate)))
}

pub(crate) async fn analytics_handler<S>(
    State(context): State<Arc<DashboardContext<S>>>,
) -> Result<Json<AnalyticsSnapshot>, AppError>
where
    S: CandidateStore + 'static,
{
    Ok(Json(context.snapshot()?))
}

pub(crate) async fn export_handler<S>(
    State(context): State<Arc<DashboardContext<S>>>,
    Query(query): Query<ExportQuery>,
) -> Result<Response, AppError>
where
    S: CandidateStore + 'static,
{
    let view = query.view.unwrap_or_default();
    let date = query.date.unwrap_or_else(|| Local::now().date_naive());
    let document = render_word_document(&context.snapshot()?, view, date);
    info!(?view, file = %document.file_name, "analytics document exported");

    let mut headers = HeaderMap::new();
    headers.insert(header::CONTENT_TYPE, HeaderValue::from_static(WORD_MIME));
    // Raw UTF-8 bytes are permitted as obs-text in header values.
    let disposition = format!("attachment; filename=\"{}\"", document.file_name);
    if let Ok(value) = HeaderValue::from_bytes(disposition.as_bytes()) {
        headers.insert(header::CONTENT_DISPOSITION, value);
    }

    Ok((StatusCode::OK, headers, document.content).into_response())
}

fn session_unavailable<T>(_: T) -> AppError {
    AppError::Store(StoreError::Unavailable(
        "dashboard session lock poisoned".to_string(),
    ))
}

pub(crate) async fn session_handler<S>(
    State(context): State<Arc<DashboardContext<S>>>,
) -> Result<Json<DashboardSession>, AppError>
where
    S: CandidateStore + 'static,
{
    let session = context.session.read().map_err(session_unavailable)?;
    Ok(Json(session.clone()))
}

pub(crate) async fn session_action_handler<S>(
    State(context): State<Arc<DashboardContext<S>>>,
    Json(action): Json<SessionAction>,
) -> Result<Json<DashboardSession>, AppError>
where
    S: CandidateStore + 'static,
{
    let mut session = context.session.write().map_err(session_unavailable)?;
    session.apply(action, context.store.as_ref())?;
    Ok(Json(session.clone()))
}
