//! Application facade: the named operations every front end calls.

use std::{
    fmt,
    path::{Path, PathBuf},
};

use crate::{
    attach::{AttachError, AttachmentStore},
    catalog::Catalog,
    entry::{Entry, EntryPatch},
    paths::AppPaths,
    persist::{Document, PersistError, json::JsonStateFile},
    rules::{RuleReport, RuleSet},
    store::ProgressStore,
    types::{CompletionFilter, SortKey, WorkId},
    work::Work,
};

/// Why a commit attempt was refused.
#[derive(Debug)]
pub enum SelectionError {
    /// A candidate id does not resolve to a catalog work.
    Unknown(WorkId),
    /// The same work id appears twice among the candidates.
    Duplicate(WorkId),
    /// The candidate set does not satisfy the rule set.
    RulesNotSatisfied(Box<RuleReport>),
}

impl fmt::Display for SelectionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Unknown(id) => write!(f, "unknown work id: {id}"),
            Self::Duplicate(id) => write!(f, "duplicate work id: {id}"),
            Self::RulesNotSatisfied(_) => f.write_str("candidate list does not satisfy the rules"),
        }
    }
}

/// Facade operation failure.
#[derive(Debug)]
pub enum AppError {
    /// The referenced work id is not in the catalog.
    UnknownWork(WorkId),
    /// Commit refused.
    Selection(SelectionError),
    /// Write-through persistence failed.
    Persist(PersistError),
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnknownWork(id) => write!(f, "unknown work id: {id}"),
            Self::Selection(err) => err.fmt(f),
            Self::Persist(err) => err.fmt(f),
        }
    }
}

impl std::error::Error for AppError {}

impl From<PersistError> for AppError {
    fn from(value: PersistError) -> Self {
        Self::Persist(value)
    }
}

impl From<SelectionError> for AppError {
    fn from(value: SelectionError) -> Self {
        Self::Selection(value)
    }
}

/// Outcome of one attach-files batch.
#[derive(Debug)]
pub struct AttachReport {
    /// Stored filenames, in source order.
    pub stored: Vec<String>,
    /// Sources that failed to copy, with the per-file error.
    pub failed: Vec<(PathBuf, AttachError)>,
}

/// The whole application behind a small set of named operations.
///
/// Every mutating operation runs to completion on the calling thread and
/// performs a synchronous full-document save before returning; there is no
/// explicit save action and no batching.
pub struct App {
    catalog: Catalog,
    rules: RuleSet,
    store: ProgressStore,
    file: JsonStateFile,
    attachments: AttachmentStore,
}

impl App {
    /// Opens the application state at explicit locations.
    ///
    /// Malformed or missing persisted state loads as empty; this never
    /// fails.
    pub fn open(state_file: impl Into<PathBuf>, attach_dir: impl Into<PathBuf>) -> Self {
        let file = JsonStateFile::new(state_file);
        let doc = file.load();
        tracing::debug!(
            path = %file.path().display(),
            entries = doc.entries.len(),
            has_selection = doc.custom_selection.is_some(),
            "state loaded"
        );
        Self {
            catalog: Catalog::builtin(),
            rules: RuleSet::default(),
            store: ProgressStore::from_document(doc),
            file,
            attachments: AttachmentStore::new(attach_dir),
        }
    }

    /// Opens the application state at the per-user default locations.
    pub fn open_default() -> Self {
        let paths = AppPaths::resolve();
        Self::open(paths.state_file, paths.attach_dir)
    }

    /// The immutable catalog.
    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// The active rule set.
    pub fn rules(&self) -> &RuleSet {
        &self.rules
    }

    /// Looks up a catalog work by id.
    pub fn work(&self, id: &str) -> Option<&Work> {
        self.catalog.get(id)
    }

    /// Progress entry for a work; defaults when none was created yet.
    pub fn entry(&self, id: &str) -> Entry {
        self.store.entry(id).cloned().unwrap_or_default()
    }

    /// The active display list: the committed custom selection when usable,
    /// else the built-in default list.
    pub fn active_list(&self) -> Vec<&Work> {
        self.store.active_list(&self.catalog, self.rules.total)
    }

    /// The active list with optional sort and completion filter applied.
    pub fn display(&self, sort: Option<SortKey>, filter: CompletionFilter) -> Vec<&Work> {
        let mut works = self.active_list();
        if let Some(key) = sort {
            works.sort_by_cached_key(|w| match key {
                SortKey::Author => w.author.to_lowercase(),
                SortKey::Title => w.title.to_lowercase(),
                SortKey::Genre => w.genre.label().to_lowercase(),
                SortKey::Section => w.section.label().to_lowercase(),
            });
        }
        works.retain(|w| match filter {
            CompletionFilter::All => true,
            CompletionFilter::Completed => self.store.completed(&w.id()),
            CompletionFilter::NotCompleted => !self.store.completed(&w.id()),
        });
        works
    }

    /// Flips the completion flag of a work and returns the new value.
    pub fn toggle_completed(&mut self, id: &str) -> Result<bool, AppError> {
        self.require_known(id)?;
        let completed = self.store.toggle_completed(id);
        self.persist()?;
        tracing::debug!(id, completed, "completion toggled");
        Ok(completed)
    }

    /// Replaces the notes text of a work.
    pub fn set_notes(&mut self, id: &str, notes: &str) -> Result<(), AppError> {
        self.require_known(id)?;
        self.store.patch(
            id,
            &EntryPatch {
                notes: Some(notes.to_string()),
                ..EntryPatch::default()
            },
        );
        self.persist()?;
        Ok(())
    }

    /// Copies source files into the attachment store and records the stored
    /// names on the work's entry.
    ///
    /// Per-file copy failures are reported in the outcome and do not abort
    /// the batch; successfully stored names are recorded and persisted.
    pub fn add_attachments(
        &mut self,
        id: &str,
        sources: &[PathBuf],
    ) -> Result<AttachReport, AppError> {
        self.require_known(id)?;
        let (stored, failed) = self.attachments.add_all(sources);
        for name in &stored {
            self.store.push_attachment(id, name.clone());
        }
        if !stored.is_empty() {
            self.persist()?;
        }
        Ok(AttachReport { stored, failed })
    }

    /// Opens a stored attachment with the host OS default application.
    pub fn open_attachment(&self, stored_name: &str) -> Result<(), AttachError> {
        self.attachments.open(stored_name)
    }

    /// Resolves a stored attachment filename to its full path.
    pub fn attachment_path(&self, stored_name: &str) -> PathBuf {
        self.attachments.resolve(stored_name)
    }

    /// Evaluates candidate ids against the rule set.
    ///
    /// Ids that do not resolve in the catalog are dropped before counting,
    /// mirroring how a checkbox front end builds its candidate list.
    pub fn validate(&self, candidate_ids: &[WorkId]) -> RuleReport {
        let candidates: Vec<&Work> = candidate_ids
            .iter()
            .filter_map(|id| self.catalog.get(id))
            .collect();
        self.rules.evaluate(&candidates)
    }

    /// Replaces the active selection with a passing candidate list.
    ///
    /// The precondition (overall pass, exact size, distinct known ids) is
    /// re-checked defensively; on violation the operation refuses and
    /// neither the in-memory selection nor the persisted document changes.
    /// Order is preserved as presented.
    pub fn commit_selection(&mut self, candidate_ids: Vec<WorkId>) -> Result<(), AppError> {
        let mut candidates: Vec<&Work> = Vec::with_capacity(candidate_ids.len());
        for id in &candidate_ids {
            let work = self
                .catalog
                .get(id)
                .ok_or_else(|| SelectionError::Unknown(id.clone()))?;
            candidates.push(work);
        }
        for (i, id) in candidate_ids.iter().enumerate() {
            if candidate_ids[..i].contains(id) {
                return Err(SelectionError::Duplicate(id.clone()).into());
            }
        }

        let report = self.rules.evaluate(&candidates);
        if !report.passed() {
            return Err(SelectionError::RulesNotSatisfied(Box::new(report)).into());
        }

        // Persist first so the displayed list and the stored selection
        // change together, or not at all.
        let doc = Document {
            custom_selection: Some(candidate_ids.clone()),
            ..self.store.to_document()
        };
        self.file.save(&doc)?;
        self.store.set_selection(candidate_ids);
        tracing::debug!("custom selection committed");
        Ok(())
    }

    /// Clears the custom selection; the default list becomes active.
    pub fn reset_selection(&mut self) -> Result<(), AppError> {
        let doc = Document {
            custom_selection: None,
            ..self.store.to_document()
        };
        self.file.save(&doc)?;
        self.store.clear_selection();
        tracing::debug!("selection reset to default list");
        Ok(())
    }

    /// Path of the backing state file.
    pub fn state_path(&self) -> &Path {
        self.file.path()
    }

    fn require_known(&self, id: &str) -> Result<(), AppError> {
        if self.catalog.get(id).is_none() {
            return Err(AppError::UnknownWork(id.to_string()));
        }
        Ok(())
    }

    fn persist(&self) -> Result<(), PersistError> {
        self.file.save(&self.store.to_document())
    }
}
