//! Reading-list progress tracking for a fixed exam curriculum, with
//! write-through JSON persistence and a live rule validator for custom
//! 20-work selections.
//!
//! # Examples
//!
//! Validating a candidate list against the exam rules:
//! ```
//! use readlog::{catalog::Catalog, rules::RuleSet};
//!
//! let catalog = Catalog::builtin();
//! let rules = RuleSet::default();
//! let report = rules.evaluate(&catalog.default_list());
//! assert!(report.passed());
//! ```
//!
//! Facade usage with explicit state locations:
//! ```no_run
//! use readlog::app::App;
//!
//! let mut app = App::open("readlog.json", "attachments");
//! let first = app.active_list()[0].id();
//! app.toggle_completed(&first).expect("toggle");
//! app.set_notes(&first, "finished over the weekend").expect("notes");
//! ```
#![deny(missing_docs)]

/// Application facade with the named mutation operations.
pub mod app;
/// Attachment directory storage and open helpers.
pub mod attach;
/// Fixed compile-time catalog and the default list.
pub mod catalog;
/// Per-work progress entry and patch types.
pub mod entry;
/// Persistent data locations.
pub mod paths;
/// Document model and schema-tolerant JSON persistence.
pub mod persist;
/// Rule set and validation report for custom selections.
pub mod rules;
/// Authoritative in-memory progress store.
pub mod store;
/// Shared primitive types and enums.
pub mod types;
/// Work record and the derived identity function.
pub mod work;
