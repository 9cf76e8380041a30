use std::fs;
use std::path::PathBuf;

use tempfile::TempDir;

use readlog::{
    app::{App, AppError, SelectionError},
    catalog::Catalog,
    persist::{Document, json::JsonStateFile},
    types::{CompletionFilter, SortKey, WorkId},
};

fn open_app(dir: &TempDir) -> App {
    App::open(state_path(dir), dir.path().join("attachments"))
}

fn state_path(dir: &TempDir) -> PathBuf {
    dir.path().join("state.json")
}

fn default_ids(app: &App) -> Vec<WorkId> {
    app.catalog().default_ids().to_vec()
}

/// A passing candidate list that differs from the default twenty.
fn alternate_twenty(catalog: &Catalog) -> Vec<WorkId> {
    catalog
        .default_list()
        .into_iter()
        .map(|w| {
            if w.title == "Proměna" {
                catalog
                    .works()
                    .iter()
                    .find(|c| c.title == "Zločin a trest")
                    .expect("catalog work")
                    .id()
            } else {
                w.id()
            }
        })
        .collect()
}

#[test]
fn mutations_write_through_to_a_fresh_load() {
    let dir = tempfile::tempdir().expect("tempdir");
    let first_id = {
        let mut app = open_app(&dir);
        let id = app.active_list()[0].id();
        assert!(app.toggle_completed(&id).expect("toggle"));
        app.set_notes(&id, "started in June").expect("notes");
        id
    };

    let reopened = open_app(&dir);
    let entry = reopened.entry(&first_id);
    assert!(entry.completed);
    assert_eq!(entry.notes, "started in June");
}

#[test]
fn toggle_on_an_unknown_id_is_refused() {
    let dir = tempfile::tempdir().expect("tempdir");
    let mut app = open_app(&dir);
    match app.toggle_completed("no-such-id") {
        Err(AppError::UnknownWork(id)) => assert_eq!(id, "no-such-id"),
        other => panic!("expected UnknownWork, got {other:?}"),
    }
}

#[test]
fn commit_with_a_failing_candidate_set_changes_nothing() {
    let dir = tempfile::tempdir().expect("tempdir");
    let mut app = open_app(&dir);
    let first_id = app.active_list()[0].id();
    app.set_notes(&first_id, "keep me").expect("notes");
    let before = fs::read_to_string(state_path(&dir)).expect("read");

    let mut ids = default_ids(&app);
    ids.pop();
    match app.commit_selection(ids) {
        Err(AppError::Selection(SelectionError::RulesNotSatisfied(report))) => {
            assert!(!report.total.ok);
        }
        other => panic!("expected RulesNotSatisfied, got {other:?}"),
    }

    // Neither the displayed list nor the persisted document moved.
    let default: Vec<WorkId> = app.catalog().default_ids().to_vec();
    let active: Vec<WorkId> = app.active_list().iter().map(|w| w.id()).collect();
    assert_eq!(active, default);
    assert_eq!(fs::read_to_string(state_path(&dir)).expect("read"), before);
}

#[test]
fn commit_with_duplicate_ids_is_refused() {
    let dir = tempfile::tempdir().expect("tempdir");
    let mut app = open_app(&dir);
    let mut ids = default_ids(&app);
    let dup = ids[0].clone();
    *ids.last_mut().expect("last") = dup.clone();

    match app.commit_selection(ids) {
        Err(AppError::Selection(SelectionError::Duplicate(id))) => assert_eq!(id, dup),
        other => panic!("expected Duplicate, got {other:?}"),
    }
}

#[test]
fn commit_with_an_unknown_id_is_refused() {
    let dir = tempfile::tempdir().expect("tempdir");
    let mut app = open_app(&dir);
    let mut ids = default_ids(&app);
    ids[3] = "bogus".to_string();

    match app.commit_selection(ids) {
        Err(AppError::Selection(SelectionError::Unknown(id))) => assert_eq!(id, "bogus"),
        other => panic!("expected Unknown, got {other:?}"),
    }
}

#[test]
fn committed_selection_becomes_the_active_list_and_survives_reload() {
    let dir = tempfile::tempdir().expect("tempdir");
    let mut app = open_app(&dir);
    let ids = alternate_twenty(app.catalog());
    assert!(app.validate(&ids).passed());

    app.commit_selection(ids.clone()).expect("commit");
    let active: Vec<WorkId> = app.active_list().iter().map(|w| w.id()).collect();
    assert_eq!(active, ids);

    let reopened = open_app(&dir);
    let active: Vec<WorkId> = reopened.active_list().iter().map(|w| w.id()).collect();
    assert_eq!(active, ids);
}

#[test]
fn reset_reverts_to_the_default_list_and_omits_the_selection() {
    let dir = tempfile::tempdir().expect("tempdir");
    let mut app = open_app(&dir);
    app.commit_selection(alternate_twenty(app.catalog()))
        .expect("commit");

    app.reset_selection().expect("reset");
    let active: Vec<WorkId> = app.active_list().iter().map(|w| w.id()).collect();
    assert_eq!(active, default_ids(&app));

    let text = fs::read_to_string(state_path(&dir)).expect("read");
    assert!(!text.contains("custom_selection"));
}

#[test]
fn stored_selection_with_an_unknown_id_falls_back_to_the_default() {
    let dir = tempfile::tempdir().expect("tempdir");
    let catalog = Catalog::builtin();
    let mut ids = catalog.default_ids().to_vec();
    ids[7] = "gone-from-the-catalog".to_string();
    JsonStateFile::new(state_path(&dir))
        .save(&Document {
            custom_selection: Some(ids),
            ..Document::default()
        })
        .expect("save");

    let app = open_app(&dir);
    let active: Vec<WorkId> = app.active_list().iter().map(|w| w.id()).collect();
    assert_eq!(active, catalog.default_ids().to_vec());
}

#[test]
fn display_sorts_and_filters_the_active_list() {
    let dir = tempfile::tempdir().expect("tempdir");
    let mut app = open_app(&dir);

    let by_author = app.display(Some(SortKey::Author), CompletionFilter::All);
    assert_eq!(by_author.len(), 20);
    let authors: Vec<String> = by_author.iter().map(|w| w.author.to_lowercase()).collect();
    let mut sorted = authors.clone();
    sorted.sort();
    assert_eq!(authors, sorted);

    let id = app.active_list()[0].id();
    app.toggle_completed(&id).expect("toggle");
    let completed = app.display(None, CompletionFilter::Completed);
    assert_eq!(completed.len(), 1);
    assert_eq!(completed[0].id(), id);
    assert_eq!(app.display(None, CompletionFilter::NotCompleted).len(), 19);
}
