//! Authoritative in-memory progress state.

use hashbrown::{HashMap, HashSet};

use crate::{
    catalog::Catalog,
    entry::{Entry, EntryPatch},
    persist::Document,
    types::WorkId,
    work::Work,
};

/// In-memory entries map plus the optional custom selection.
///
/// The store is the single mutable resource in the system; it is owned by one
/// logical actor and mutated synchronously. It knows nothing about disk, the
/// facade persists the exported [`Document`] after every mutation.
#[derive(Debug, Default)]
pub struct ProgressStore {
    entries: HashMap<WorkId, Entry>,
    custom_selection: Option<Vec<WorkId>>,
}

impl ProgressStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a store from a loaded document.
    pub fn from_document(doc: Document) -> Self {
        Self {
            entries: doc.entries,
            custom_selection: doc.custom_selection,
        }
    }

    /// Exports the full document for persistence.
    pub fn to_document(&self) -> Document {
        Document {
            entries: self.entries.clone(),
            custom_selection: self.custom_selection.clone(),
        }
    }

    /// All entries, keyed by work id.
    pub fn entries(&self) -> &HashMap<WorkId, Entry> {
        &self.entries
    }

    /// Entry for `id`, if one was ever created.
    pub fn entry(&self, id: &str) -> Option<&Entry> {
        self.entries.get(id)
    }

    /// Entry for `id`, created with defaults on first reference.
    pub fn entry_mut(&mut self, id: &str) -> &mut Entry {
        self.entries.entry_ref(id).or_default()
    }

    /// Completion flag for `id`; false when no entry exists yet.
    pub fn completed(&self, id: &str) -> bool {
        self.entries.get(id).is_some_and(|e| e.completed)
    }

    /// Flips the completion flag and returns the new value.
    pub fn toggle_completed(&mut self, id: &str) -> bool {
        let entry = self.entry_mut(id);
        entry.completed = !entry.completed;
        entry.completed
    }

    /// Applies a sparse patch to the entry for `id`.
    pub fn patch(&mut self, id: &str, patch: &EntryPatch) {
        if patch.is_empty() {
            return;
        }
        patch.apply_to(self.entry_mut(id));
    }

    /// Appends a stored attachment filename to the entry for `id`.
    pub fn push_attachment(&mut self, id: &str, stored_name: String) {
        self.entry_mut(id).attachments.push(stored_name);
    }

    /// Current custom selection, if any.
    pub fn selection(&self) -> Option<&[WorkId]> {
        self.custom_selection.as_deref()
    }

    /// Replaces the custom selection.
    pub fn set_selection(&mut self, ids: Vec<WorkId>) {
        self.custom_selection = Some(ids);
    }

    /// Clears the custom selection; the default list becomes active.
    pub fn clear_selection(&mut self) {
        self.custom_selection = None;
    }

    /// Resolves the active display list against the catalog.
    ///
    /// A stored selection is usable only when every id resolves to a known
    /// work, the ids are distinct, and exactly `required` works come out.
    /// Anything else falls back to the built-in default list, never an error.
    pub fn active_list<'c>(&self, catalog: &'c Catalog, required: usize) -> Vec<&'c Work> {
        if let Some(ids) = &self.custom_selection {
            let mut seen: HashSet<&str> = HashSet::with_capacity(ids.len());
            let resolved: Vec<&Work> = ids
                .iter()
                .filter(|id| seen.insert(id.as_str()))
                .filter_map(|id| catalog.get(id))
                .collect();
            if resolved.len() == required && resolved.len() == ids.len() {
                return resolved;
            }
            tracing::warn!(
                stored = ids.len(),
                resolved = resolved.len(),
                required,
                "stored selection unusable, falling back to default list"
            );
        }
        catalog.default_list()
    }
}
