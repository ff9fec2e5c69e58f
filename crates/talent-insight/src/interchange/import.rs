use std::collections::HashSet;

use serde::Deserialize;
use serde_json::Value;
use tracing::{info, warn};

use crate::candidates::avatar::resolve_avatar;
use crate::candidates::{
    timestamp_now, Candidate, CandidateId, CandidateStore, Recommendation, SkillScore, StoreError,
};

pub const REQUIRED_FIELDS: [&str; 3] = ["name", "role", "scores"];

const DEFAULT_SUMMARY: &str = "批量导入数据";
const DEFAULT_ANALYSIS: &str = "暂无详细分析";

/// Import failures. Record indices are 1-based.
#[derive(Debug, thiserror::Error)]
pub enum ImportError {
    #[error("invalid JSON: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("import payload must be a JSON object or an array of objects")]
    UnexpectedShape,
    #[error("record {index} is missing required field `{field}`")]
    MissingField { index: usize, field: &'static str },
    #[error("record {index} is malformed: {message}")]
    InvalidRecord { index: usize, message: String },
    #[error("record {index} reuses candidate id `{id}`")]
    DuplicateId { index: usize, id: String },
    #[error(transparent)]
    Store(#[from] StoreError),
}

impl ImportError {
    /// 1-based position of the offending record, when the error concerns one.
    pub fn record_index(&self) -> Option<usize> {
        match self {
            ImportError::MissingField { index, .. }
            | ImportError::InvalidRecord { index, .. }
            | ImportError::DuplicateId { index, .. } => Some(*index),
            ImportError::Parse(_) | ImportError::UnexpectedShape | ImportError::Store(_) => None,
        }
    }
}

/// Wire shape of one imported record; everything but the required fields may be absent.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ImportRecord {
    #[serde(default)]
    id: Option<String>,
    name: String,
    role: String,
    #[serde(default)]
    avatar: Option<String>,
    #[serde(default)]
    updated_at: Option<String>,
    #[serde(default)]
    summary: Option<String>,
    #[serde(default)]
    detailed_analysis: Option<String>,
    scores: Vec<SkillScore>,
    #[serde(default)]
    recommendations: Option<Vec<Recommendation>>,
}

fn is_absent(value: Option<&Value>) -> bool {
    match value {
        None | Some(Value::Null) => true,
        Some(Value::String(text)) => text.is_empty(),
        Some(_) => false,
    }
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|text| !text.is_empty())
}

/// Parse and validate an import payload without touching any store.
///
/// The whole batch is validated before anything is returned; the first failing
/// record aborts the batch. Scores are taken as given, without range checks.
pub fn parse_candidates(
    text: &str,
    existing_ids: &HashSet<CandidateId>,
) -> Result<Vec<Candidate>, ImportError> {
    let payload: Value = serde_json::from_str(text)?;
    let elements = match payload {
        Value::Array(elements) => elements,
        object @ Value::Object(_) => vec![object],
        _ => return Err(ImportError::UnexpectedShape),
    };

    let mut seen: HashSet<CandidateId> = existing_ids.clone();
    let mut candidates = Vec::with_capacity(elements.len());

    for (offset, element) in elements.into_iter().enumerate() {
        let index = offset + 1;
        let candidate = candidate_from_value(index, element)?;

        if !seen.insert(candidate.id.clone()) {
            return Err(ImportError::DuplicateId {
                index,
                id: candidate.id.0,
            });
        }
        candidates.push(candidate);
    }

    Ok(candidates)
}

fn candidate_from_value(index: usize, element: Value) -> Result<Candidate, ImportError> {
    let Some(fields) = element.as_object() else {
        return Err(ImportError::InvalidRecord {
            index,
            message: "expected a JSON object".to_string(),
        });
    };

    if let Some(field) = REQUIRED_FIELDS
        .into_iter()
        .find(|field| is_absent(fields.get(*field)))
    {
        return Err(ImportError::MissingField { index, field });
    }

    let record: ImportRecord =
        serde_json::from_value(element).map_err(|err| ImportError::InvalidRecord {
            index,
            message: err.to_string(),
        })?;

    let id = non_empty(record.id)
        .map(CandidateId)
        .unwrap_or_else(CandidateId::generate);

    Ok(Candidate {
        id,
        avatar: resolve_avatar(&record.name, record.avatar.as_deref()),
        name: record.name,
        role: record.role,
        updated_at: non_empty(record.updated_at).unwrap_or_else(timestamp_now),
        summary: non_empty(record.summary).unwrap_or_else(|| DEFAULT_SUMMARY.to_string()),
        detailed_analysis: non_empty(record.detailed_analysis)
            .unwrap_or_else(|| DEFAULT_ANALYSIS.to_string()),
        scores: record.scores,
        recommendations: record.recommendations.unwrap_or_default(),
    })
}

/// Outcome of a committed import.
#[derive(Debug, Clone, serde::Serialize)]
pub struct ImportSummary {
    pub imported: usize,
    pub ids: Vec<CandidateId>,
}

pub struct CandidateImporter;

impl CandidateImporter {
    /// Validate `text` against the store's current ids, then add every record.
    ///
    /// Nothing is added when any record fails.
    pub fn import<S>(store: &S, text: &str) -> Result<ImportSummary, ImportError>
    where
        S: CandidateStore + ?Sized,
    {
        let existing: HashSet<CandidateId> = store
            .list()?
            .into_iter()
            .map(|candidate| candidate.id)
            .collect();

        let candidates = match parse_candidates(text, &existing) {
            Ok(candidates) => candidates,
            Err(err) => {
                warn!(error = %err, "candidate import rejected");
                return Err(err);
            }
        };

        let ids: Vec<CandidateId> = candidates.iter().map(|c| c.id.clone()).collect();
        store.add_batch(candidates)?;
        info!(imported = ids.len(), "candidate import committed");

        Ok(ImportSummary {
            imported: ids.len(),
            ids,
        })
    }
}
