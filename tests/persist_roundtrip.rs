use std::fs;

use readlog::{
    entry::Entry,
    persist::{Document, json::JsonStateFile},
};

fn sample_document(with_selection: bool) -> Document {
    let mut doc = Document::default();
    doc.entries.insert(
        "Franz%20Kafka%7CProm%C4%9Bna".to_string(),
        Entry {
            completed: true,
            notes: "short, read twice".to_string(),
            attachments: vec!["essay.pdf".to_string()],
        },
    );
    doc.entries
        .insert("Karel%20%C4%8Capek%7CR.U.R.".to_string(), Entry::default());
    if with_selection {
        doc.custom_selection = Some(vec![
            "Franz%20Kafka%7CProm%C4%9Bna".to_string(),
            "Karel%20%C4%8Capek%7CR.U.R.".to_string(),
        ]);
    }
    doc
}

#[test]
fn save_then_load_reproduces_the_document() {
    let dir = tempfile::tempdir().expect("tempdir");
    let file = JsonStateFile::new(dir.path().join("state.json"));

    for with_selection in [false, true] {
        let doc = sample_document(with_selection);
        file.save(&doc).expect("save");
        assert_eq!(file.load(), doc);
    }
}

#[test]
fn absent_selection_is_omitted_from_the_serialized_form() {
    let dir = tempfile::tempdir().expect("tempdir");
    let file = JsonStateFile::new(dir.path().join("state.json"));

    file.save(&sample_document(false)).expect("save");
    let text = fs::read_to_string(file.path()).expect("read");
    assert!(!text.contains("custom_selection"));

    file.save(&sample_document(true)).expect("save");
    let text = fs::read_to_string(file.path()).expect("read");
    assert!(text.contains("custom_selection"));
}

#[test]
fn legacy_flat_mapping_loads_as_entries_without_selection() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("state.json");
    fs::write(
        &path,
        r#"{"id1": {"completed": true, "notes": "n", "attachments": ["a.txt"]}, "id2": {}}"#,
    )
    .expect("write");

    let doc = JsonStateFile::new(path).load();
    assert_eq!(doc.custom_selection, None);
    assert_eq!(doc.entries.len(), 2);
    let first = &doc.entries["id1"];
    assert!(first.completed);
    assert_eq!(first.notes, "n");
    assert_eq!(first.attachments, vec!["a.txt".to_string()]);
    // Missing fields take their defaults.
    assert_eq!(doc.entries["id2"], Entry::default());
}

#[test]
fn malformed_state_loads_empty() {
    let dir = tempfile::tempdir().expect("tempdir");

    for garbage in ["not json at all", "[1, 2, 3]", r#"{"id1": 7}"#] {
        let path = dir.path().join("state.json");
        fs::write(&path, garbage).expect("write");
        assert_eq!(JsonStateFile::new(path).load(), Document::default());
    }
}

#[test]
fn missing_file_loads_empty() {
    let dir = tempfile::tempdir().expect("tempdir");
    let file = JsonStateFile::new(dir.path().join("nope.json"));
    assert_eq!(file.load(), Document::default());
}

#[test]
fn save_creates_the_parent_directory() {
    let dir = tempfile::tempdir().expect("tempdir");
    let file = JsonStateFile::new(dir.path().join("deep").join("state.json"));
    file.save(&sample_document(true)).expect("save");
    assert_eq!(file.load(), sample_document(true));
}
