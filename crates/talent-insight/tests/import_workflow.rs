//! Import and export flows through the public adapter API.

use chrono::NaiveDate;
use serde_json::Value;

use talent_insight::analytics::AnalyticsView;
use talent_insight::candidates::seed;
use talent_insight::interchange::{
    candidate_json, render_word_document, CandidateImporter, ImportError,
};
use talent_insight::{AnalyticsSnapshot, CandidateStore, InMemoryCandidateStore, SkillCatalog};

#[test]
fn exported_candidate_reimports_as_equivalent_record() {
    let original = seed::reference_candidate();
    let exported = candidate_json(&original).expect("candidate serializes");

    let mut payload: Value = serde_json::from_str(&exported).expect("valid json");
    payload
        .as_object_mut()
        .expect("candidate object")
        .remove("id");

    let store = InMemoryCandidateStore::new();
    let summary = CandidateImporter::import(&store, &payload.to_string()).expect("import");
    assert_eq!(summary.imported, 1);

    let mut reimported = store.list().expect("list").remove(0);
    assert_ne!(reimported.id, original.id);
    reimported.id = original.id.clone();
    assert_eq!(reimported, original);
}

#[test]
fn reimporting_with_existing_id_is_rejected() {
    let store = InMemoryCandidateStore::with_candidates(seed::demo_candidates());
    let exported = candidate_json(&seed::reference_candidate()).expect("serializes");

    let err = CandidateImporter::import(&store, &exported).expect_err("duplicate id");

    assert!(matches!(err, ImportError::DuplicateId { index: 1, .. }));
    assert_eq!(store.list().expect("list").len(), 3);
}

#[test]
fn imported_candidates_flow_into_exported_document() {
    let store = InMemoryCandidateStore::new();
    let text = r#"[
        {"name": "岑参", "role": "渗透测试工程师", "scores": [
            {"category": "渗透测试", "score": 90, "type": "Theory"},
            {"category": "渗透测试", "score": 95, "type": "Practice"}
        ]},
        {"name": "王昌龄", "role": "安全运营", "scores": [
            {"category": "安全监测", "score": 40, "type": "Theory"}
        ]}
    ]"#;
    CandidateImporter::import(&store, text).expect("batch imports");

    let snapshot =
        AnalyticsSnapshot::compute(&store.list().expect("list"), &SkillCatalog::standard());
    let date = NaiveDate::from_ymd_opt(2025, 12, 1).expect("valid date");
    let document = render_word_document(&snapshot, AnalyticsView::Review, date);

    assert!(document.content.contains("岑参"));
    assert!(document.content.contains("<strong>卓越专家</strong>"));
    assert!(document.content.contains("<strong>待激活者</strong>"));
    assert_eq!(document.file_name, "人才盘点分析报告_2025-12-01.doc");
}

#[test]
fn malformed_payload_leaves_store_untouched() {
    let store = InMemoryCandidateStore::with_candidates(seed::demo_candidates());

    let err = CandidateImporter::import(&store, "{not json").expect_err("parse failure");

    assert!(matches!(err, ImportError::Parse(_)));
    assert_eq!(store.list().expect("list").len(), 3);
}
