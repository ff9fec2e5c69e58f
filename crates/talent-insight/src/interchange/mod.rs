//! JSON import of candidate records and document export of analytics views.

pub mod export;
pub mod import;

pub use export::{
    candidate_json, export_file_name, render_word_document, WordDocument, WORD_MIME,
};
pub use import::{parse_candidates, CandidateImporter, ImportError, ImportSummary};
