use std::fs;
use std::path::PathBuf;

use readlog::{app::App, attach::{AttachError, AttachmentStore}};

#[test]
fn collisions_get_a_numeric_suffix_and_content_is_preserved() {
    let dir = tempfile::tempdir().expect("tempdir");
    let store = AttachmentStore::new(dir.path().join("attachments"));

    let src_a = dir.path().join("a").join("report.txt");
    let src_b = dir.path().join("b").join("report.txt");
    let src_c = dir.path().join("c").join("report.txt");
    for (src, bytes) in [(&src_a, b"alpha"), (&src_b, b"bravo"), (&src_c, b"charl")] {
        fs::create_dir_all(src.parent().expect("parent")).expect("mkdir");
        fs::write(src, bytes).expect("write");
    }

    assert_eq!(store.add(&src_a).expect("add"), "report.txt");
    assert_eq!(store.add(&src_b).expect("add"), "report_1.txt");
    assert_eq!(store.add(&src_c).expect("add"), "report_2.txt");

    assert_eq!(fs::read(store.resolve("report.txt")).expect("read"), b"alpha");
    assert_eq!(fs::read(store.resolve("report_1.txt")).expect("read"), b"bravo");
    assert_eq!(fs::read(store.resolve("report_2.txt")).expect("read"), b"charl");
}

#[test]
fn extensionless_files_get_the_suffix_at_the_end() {
    let dir = tempfile::tempdir().expect("tempdir");
    let store = AttachmentStore::new(dir.path().join("attachments"));

    let first = dir.path().join("one").join("NOTES");
    let second = dir.path().join("two").join("NOTES");
    for src in [&first, &second] {
        fs::create_dir_all(src.parent().expect("parent")).expect("mkdir");
        fs::write(src, b"x").expect("write");
    }

    assert_eq!(store.add(&first).expect("add"), "NOTES");
    assert_eq!(store.add(&second).expect("add"), "NOTES_1");
}

#[test]
fn a_missing_source_does_not_abort_the_batch() {
    let dir = tempfile::tempdir().expect("tempdir");
    let store = AttachmentStore::new(dir.path().join("attachments"));

    let good = dir.path().join("good.txt");
    let also_good = dir.path().join("also_good.txt");
    fs::write(&good, b"1").expect("write");
    fs::write(&also_good, b"2").expect("write");
    let missing = dir.path().join("missing.txt");

    let sources = vec![good, missing.clone(), also_good];
    let (stored, failed) = store.add_all(&sources);

    assert_eq!(stored, vec!["good.txt".to_string(), "also_good.txt".to_string()]);
    assert_eq!(failed.len(), 1);
    assert_eq!(failed[0].0, missing);
    assert!(matches!(failed[0].1, AttachError::MissingSource(_)));
}

#[test]
fn opening_a_missing_stored_file_is_reported_not_fatal() {
    let dir = tempfile::tempdir().expect("tempdir");
    let store = AttachmentStore::new(dir.path().join("attachments"));
    match store.open("never-stored.pdf") {
        Err(AttachError::MissingStored(path)) => {
            assert!(path.ends_with("never-stored.pdf"));
        }
        other => panic!("expected MissingStored, got {other:?}"),
    }
}

#[test]
fn attached_names_are_recorded_on_the_entry_and_persisted() {
    let dir = tempfile::tempdir().expect("tempdir");
    let state = dir.path().join("state.json");
    let attach_dir = dir.path().join("attachments");

    let src = dir.path().join("essay.pdf");
    fs::write(&src, b"pdf bytes").expect("write");
    let missing = dir.path().join("absent.doc");

    let id = {
        let mut app = App::open(&state, &attach_dir);
        let id = app.active_list()[0].id();
        let report = app
            .add_attachments(&id, &[src, missing.clone()])
            .expect("attach");
        assert_eq!(report.stored, vec!["essay.pdf".to_string()]);
        assert_eq!(report.failed.len(), 1);
        assert_eq!(report.failed[0].0, missing);
        id
    };

    let reopened = App::open(&state, &attach_dir);
    assert_eq!(
        reopened.entry(&id).attachments,
        vec!["essay.pdf".to_string()]
    );
    let stored_path: PathBuf = reopened.attachment_path("essay.pdf");
    assert_eq!(fs::read(stored_path).expect("read"), b"pdf bytes");
}
