//! End-to-end batch loads against an in-memory store.
//!
//! - A changed pick appends one curated ion and repoints the result
//! - Reloading the same file, or an unedited export, changes nothing
//! - Any failing row leaves the store exactly as it was
//! - History rows are never modified by later loads

use lcms_core::entities::EditRow;
use lcms_core::vocabulary::Vocabulary;
use lcms_curate::export::export_tsv;
use lcms_curate::history::load_history;
use lcms_curate::source::parse_edit_rows;
use lcms_curate::{BatchMode, ReconcileError, Reconciler, run_batch};
use lcms_db::service::IonService;
use pretty_assertions::assert_eq;

const HEADER: &str = "STANDARD_ION_RESULT_ID\tMANUAL_PICK\tNOTE\n";

async fn service_with(ids: &[i64]) -> IonService {
    let svc = IonService::new_local(":memory:").await.unwrap();
    for &id in ids {
        svc.insert_result(Some(id), &format!("chem-{id}"), Some("M+H"))
            .await
            .unwrap();
    }
    svc
}

fn rows(body: &str) -> Vec<EditRow> {
    parse_edit_rows(format!("{HEADER}{body}").as_bytes()).unwrap()
}

async fn load(
    svc: &IonService,
    author: &str,
    body: &str,
) -> Result<lcms_curate::BatchReport, ReconcileError> {
    let vocab = Vocabulary::metlin_positive();
    let reconciler = Reconciler::new(&vocab, author);
    run_batch(svc, &reconciler, &rows(body), BatchMode::Commit).await
}

/// Everything a load could change, for before/after comparison.
async fn snapshot(svc: &IonService) -> (Vec<Option<i64>>, i64) {
    let overrides = svc
        .list_results()
        .await
        .unwrap()
        .into_iter()
        .map(|r| r.manual_override_id)
        .collect();
    (overrides, svc.count_curated_ions().await.unwrap())
}

#[tokio::test]
async fn first_override_is_recorded_and_made_current() {
    let svc = service_with(&[42]).await;

    let report = load(&svc, "alice", "42\tM+H\tconfident pick\n")
        .await
        .unwrap();

    assert!(report.committed);
    assert_eq!(report.applied.len(), 1);
    let history = load_history(&svc, 42).await.unwrap();
    assert_eq!(history.entries.len(), 1);
    let current = history.current().unwrap();
    assert_eq!(current.best_metlin_ion, "M+H");
    assert_eq!(current.author, "alice");
    assert_eq!(current.note.as_deref(), Some("confident pick"));
    assert_eq!(current.id, report.applied[0].curated_ion_id);
}

#[tokio::test]
async fn reloading_the_same_file_is_a_no_op() {
    let svc = service_with(&[1, 2]).await;
    let body = "1\tM+Na\t\n2\tNULL\t\n";

    load(&svc, "alice", body).await.unwrap();
    let before = snapshot(&svc).await;
    let report = load(&svc, "bob", body).await.unwrap();

    assert!(report.applied.is_empty());
    assert_eq!(report.unchanged, 1);
    assert_eq!(report.unset, 1);
    assert_eq!(snapshot(&svc).await, before);
}

#[tokio::test]
async fn unedited_export_loads_as_a_no_op() {
    let svc = service_with(&[1, 2, 3]).await;
    load(&svc, "alice", "2\tM+K\tfirst pass\n").await.unwrap();
    let before = snapshot(&svc).await;

    let mut exported = Vec::new();
    export_tsv(&svc, &mut exported, "NULL").await.unwrap();
    let edit_rows = parse_edit_rows(exported.as_slice()).unwrap();
    assert_eq!(edit_rows.len(), 3);

    let vocab = Vocabulary::metlin_positive();
    let reconciler = Reconciler::new(&vocab, "carol");
    let report = run_batch(&svc, &reconciler, &edit_rows, BatchMode::Commit)
        .await
        .unwrap();

    assert!(report.applied.is_empty());
    assert_eq!(report.unchanged, 1);
    assert_eq!(report.unset, 2);
    assert_eq!(snapshot(&svc).await, before);
}

#[tokio::test]
async fn invalid_value_aborts_without_changes() {
    let svc = service_with(&[42]).await;
    let before = snapshot(&svc).await;

    let err = load(&svc, "alice", "42\tXYZ\t\n").await.unwrap_err();

    assert_eq!(
        err.to_string(),
        "line 2: found invalid chemical ion name: XYZ"
    );
    assert_eq!(snapshot(&svc).await, before);
}

#[tokio::test]
async fn failure_in_middle_row_applies_neither_neighbour() {
    let svc = service_with(&[1, 2, 3]).await;
    let before = snapshot(&svc).await;

    let err = load(&svc, "alice", "1\tM+H\t\n2\tXYZ\t\n3\tM+K\t\n")
        .await
        .unwrap_err();

    assert!(matches!(err, ReconcileError::InvalidValue { line: 3, .. }));
    assert_eq!(snapshot(&svc).await, before);
    assert!(load_history(&svc, 1).await.unwrap().entries.is_empty());
    assert!(load_history(&svc, 3).await.unwrap().entries.is_empty());
}

#[tokio::test]
async fn failure_in_last_row_undoes_earlier_rows() {
    let svc = service_with(&[1, 2, 3]).await;
    let before = snapshot(&svc).await;

    let err = load(&svc, "alice", "1\tM+H\t\n2\tM+Na\t\n3\tnot-an-ion\t\n")
        .await
        .unwrap_err();

    assert!(matches!(err, ReconcileError::InvalidValue { line: 4, .. }));
    assert_eq!(snapshot(&svc).await, before);
}

#[tokio::test]
async fn unknown_result_aborts_without_changes() {
    let svc = service_with(&[1]).await;
    let before = snapshot(&svc).await;

    let err = load(&svc, "alice", "1\tM+H\t\n77\tM+H\t\n")
        .await
        .unwrap_err();

    assert!(matches!(
        err,
        ReconcileError::NotFound {
            line: 3,
            result_id: 77
        }
    ));
    assert_eq!(snapshot(&svc).await, before);
}

#[tokio::test]
async fn store_failure_mid_batch_undoes_earlier_rows() {
    let svc = service_with(&[1, 2]).await;
    let conn = svc.db().conn();
    conn.execute("PRAGMA foreign_keys = OFF", ()).await.unwrap();
    conn.execute(
        "UPDATE standard_ion_results SET manual_override_id = 999 WHERE id = 2",
        (),
    )
    .await
    .unwrap();

    let err = load(&svc, "alice", "1\tM+H\t\n2\tM+K\t\n")
        .await
        .unwrap_err();

    assert!(matches!(err, ReconcileError::Persistence { .. }));
    assert!(err.to_string().starts_with("line 3:"), "got: {err}");
    assert!(svc.get_result(1).await.unwrap().manual_override_id.is_none());
    assert_eq!(svc.count_curated_ions().await.unwrap(), 0);
}

#[tokio::test]
async fn malformed_id_aborts_without_changes() {
    let svc = service_with(&[1]).await;
    let before = snapshot(&svc).await;

    let err = load(&svc, "alice", "1\tM+H\t\nabc\tM+H\t\n")
        .await
        .unwrap_err();

    assert_eq!(err.kind(), "malformed_input");
    assert_eq!(snapshot(&svc).await, before);
}

#[tokio::test]
async fn later_override_appends_and_keeps_history() {
    let svc = service_with(&[5]).await;

    load(&svc, "alice", "5\tM+H\tfirst\n").await.unwrap();
    let first = load_history(&svc, 5).await.unwrap().entries[0].ion.clone();
    let report = load(&svc, "bob", "5\tM+Na\tsecond\n").await.unwrap();

    assert_eq!(report.applied[0].previous.as_deref(), Some("M+H"));
    let history = load_history(&svc, 5).await.unwrap();
    assert_eq!(history.entries.len(), 2);
    assert_eq!(history.entries[0].ion, first);
    assert!(!history.entries[0].current);
    assert!(history.entries[1].current);
    assert_eq!(history.current().unwrap().author, "bob");
}

#[tokio::test]
async fn every_curated_ion_references_its_result() {
    let svc = service_with(&[1, 2]).await;
    load(&svc, "alice", "1\tM+H\t\n2\tM+K\t\n1\tM+Li\t\n")
        .await
        .unwrap();

    for result in svc.list_results().await.unwrap() {
        let current = result.manual_override_id.unwrap();
        let ion = svc.find_curated_ion(current).await.unwrap().unwrap();
        assert_eq!(ion.standard_ion_result_id, result.id);
    }
    assert_eq!(svc.count_curated_ions().await.unwrap(), 3);
}

#[tokio::test]
async fn dry_run_reports_but_keeps_nothing() {
    let svc = service_with(&[1, 2]).await;
    let before = snapshot(&svc).await;
    let vocab = Vocabulary::metlin_positive();
    let reconciler = Reconciler::new(&vocab, "alice");

    let report = run_batch(
        &svc,
        &reconciler,
        &rows("1\tM+H\t\n2\tM+Na\t\n"),
        BatchMode::DryRun,
    )
    .await
    .unwrap();

    assert!(!report.committed);
    assert_eq!(report.applied.len(), 2);
    assert_eq!(snapshot(&svc).await, before);
}

#[tokio::test]
async fn empty_file_commits_nothing() {
    let svc = service_with(&[1]).await;
    let report = load(&svc, "alice", "").await.unwrap();
    assert_eq!(report.rows(), 0);
    assert!(report.committed);
}
