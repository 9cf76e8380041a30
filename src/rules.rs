//! Rule set and live validation report for custom selections.

use std::fmt;

use hashbrown::HashMap;

use crate::{
    types::{Genre, Section},
    work::Work,
};

/// Counting constraints a custom selection must satisfy.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RuleSet {
    /// Exact number of selected works.
    pub total: usize,
    /// Minimum count per curriculum section, in [`Section::ALL`] order.
    pub section_min: [(Section, usize); 4],
    /// Minimum count for each genre.
    pub genre_min_each: usize,
    /// Maximum number of works by a single author.
    pub max_per_author: usize,
}

impl Default for RuleSet {
    fn default() -> Self {
        Self {
            total: 20,
            section_min: [
                (Section::To18thCentury, 2),
                (Section::To19thCentury, 3),
                (Section::WorldModern, 4),
                (Section::CzechModern, 5),
            ],
            genre_min_each: 2,
            max_per_author: 2,
        }
    }
}

/// Verdict for the exact-total rule.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TotalVerdict {
    /// Candidate count.
    pub have: usize,
    /// Required count.
    pub need: usize,
    /// True when `have == need`.
    pub ok: bool,
}

impl fmt::Display for TotalVerdict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "selected: {} / {}", self.have, self.need)
    }
}

/// Verdict for one per-section minimum.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SectionVerdict {
    /// Section being counted.
    pub section: Section,
    /// Candidate count in this section.
    pub have: usize,
    /// Required minimum.
    pub min: usize,
    /// True when `have >= min`.
    pub ok: bool,
}

impl fmt::Display for SectionVerdict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {} (min {})", self.section, self.have, self.min)
    }
}

/// Verdict for the per-genre minimums, all three genres at once.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenreVerdict {
    /// Candidate count per genre, in [`Genre::ALL`] order.
    pub counts: [(Genre, usize); 3],
    /// Required minimum for each genre.
    pub min_each: usize,
    /// True when every genre meets the minimum.
    pub ok: bool,
}

impl fmt::Display for GenreVerdict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "genres:")?;
        for (i, (genre, have)) in self.counts.iter().enumerate() {
            let sep = if i == 0 { " " } else { ", " };
            write!(f, "{sep}{genre} {have}")?;
        }
        write!(f, " (min {} each)", self.min_each)
    }
}

/// Verdict for the per-author maximum.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthorVerdict {
    /// Allowed maximum per author.
    pub max: usize,
    /// Authors over the limit with their counts, sorted by name.
    pub over: Vec<(String, usize)>,
    /// True when no author exceeds the maximum.
    pub ok: bool,
}

impl fmt::Display for AuthorVerdict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.ok {
            return write!(f, "authors: at most {} per author (OK)", self.max);
        }
        write!(f, "author limit exceeded:")?;
        for (i, (author, count)) in self.over.iter().enumerate() {
            let sep = if i == 0 { " " } else { ", " };
            write!(f, "{sep}{author} ({count})")?;
        }
        Ok(())
    }
}

/// Structured validation report with one verdict per rule.
///
/// Every rule is evaluated even when an earlier one already failed, so a
/// front end can show all statuses at once.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RuleReport {
    /// Exact-total verdict.
    pub total: TotalVerdict,
    /// Per-section verdicts in curriculum order.
    pub sections: Vec<SectionVerdict>,
    /// Per-genre verdict.
    pub genres: GenreVerdict,
    /// Per-author verdict.
    pub authors: AuthorVerdict,
}

impl RuleReport {
    /// Overall pass: every rule holds simultaneously.
    pub fn passed(&self) -> bool {
        self.total.ok && self.sections.iter().all(|s| s.ok) && self.genres.ok && self.authors.ok
    }

    /// One human-readable status line per rule, in display order.
    pub fn summary_lines(&self) -> Vec<String> {
        let mut lines = vec![self.total.to_string()];
        lines.extend(self.sections.iter().map(ToString::to_string));
        lines.push(self.genres.to_string());
        lines.push(self.authors.to_string());
        lines
    }
}

impl RuleSet {
    /// Evaluates a candidate list against every rule.
    ///
    /// The validator is pure: it never mutates candidate state and recomputes
    /// all counts from scratch. Duplicate candidates count as distinct list
    /// entries.
    pub fn evaluate(&self, candidates: &[&Work]) -> RuleReport {
        let total = TotalVerdict {
            have: candidates.len(),
            need: self.total,
            ok: candidates.len() == self.total,
        };

        let sections = self
            .section_min
            .iter()
            .map(|&(section, min)| {
                let have = candidates.iter().filter(|w| w.section == section).count();
                SectionVerdict {
                    section,
                    have,
                    min,
                    ok: have >= min,
                }
            })
            .collect();

        let counts = Genre::ALL.map(|genre| {
            let have = candidates.iter().filter(|w| w.genre == genre).count();
            (genre, have)
        });
        let genres = GenreVerdict {
            counts,
            min_each: self.genre_min_each,
            ok: counts.iter().all(|&(_, have)| have >= self.genre_min_each),
        };

        let mut per_author: HashMap<&str, usize> = HashMap::new();
        for work in candidates {
            *per_author.entry(work.author.as_str()).or_default() += 1;
        }
        let mut over: Vec<(String, usize)> = per_author
            .iter()
            .filter(|&(_, &count)| count > self.max_per_author)
            .map(|(&author, &count)| (author.to_string(), count))
            .collect();
        over.sort();
        let authors = AuthorVerdict {
            max: self.max_per_author,
            ok: over.is_empty(),
            over,
        };

        RuleReport {
            total,
            sections,
            genres,
            authors,
        }
    }
}
