//! Shared primitive ids and curriculum enums.

use std::fmt;

use clap::ValueEnum;
use serde::{Deserialize, Serialize};

/// Derived work identifier (percent-encoded `author|title`).
pub type WorkId = String;

/// Literary genre bucket.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Genre {
    /// Prose.
    Prose,
    /// Poetry.
    Poetry,
    /// Drama.
    Drama,
}

impl Genre {
    /// All genres in display order.
    pub const ALL: [Genre; 3] = [Genre::Prose, Genre::Poetry, Genre::Drama];

    /// Display label matching the curriculum sheet.
    pub fn label(self) -> &'static str {
        match self {
            Genre::Prose => "Próza",
            Genre::Poetry => "Poezie",
            Genre::Drama => "Drama",
        }
    }
}

impl fmt::Display for Genre {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// One of the four fixed curriculum periods.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Section {
    /// World and Czech literature up to the end of the 18th century.
    To18thCentury,
    /// World and Czech literature up to the end of the 19th century.
    To19thCentury,
    /// World literature of the 20th and 21st centuries.
    WorldModern,
    /// Czech literature of the 20th and 21st centuries.
    CzechModern,
}

impl Section {
    /// All sections in curriculum order.
    pub const ALL: [Section; 4] = [
        Section::To18thCentury,
        Section::To19thCentury,
        Section::WorldModern,
        Section::CzechModern,
    ];

    /// Display label matching the curriculum sheet.
    pub fn label(self) -> &'static str {
        match self {
            Section::To18thCentury => "Světová a česká literatura do konce 18. stol.",
            Section::To19thCentury => "Světová a česká literatura do konce 19. stol.",
            Section::WorldModern => "Světová literatura 20. a 21. stol.",
            Section::CzechModern => "Česká literatura 20. a 21. stol.",
        }
    }
}

impl fmt::Display for Section {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Sort key for the displayed list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum SortKey {
    /// Sort by author name.
    Author,
    /// Sort by title.
    Title,
    /// Sort by genre label.
    Genre,
    /// Sort by section label.
    Section,
}

/// Completion filter for the displayed list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum CompletionFilter {
    /// Show every work.
    #[default]
    All,
    /// Show only completed works.
    Completed,
    /// Show only works not yet completed.
    NotCompleted,
}
