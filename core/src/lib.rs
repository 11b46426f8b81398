//! Matching engine for checking bibliography entries against lists of
//! predatory journals and publishers.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

pub mod bib;
pub mod cache;
pub mod error;
pub mod index;
pub mod matcher;
pub mod normalize;
pub mod report;
pub mod similarity;
pub mod sources;
pub mod tokenizer;

pub use error::CheckError;
pub use index::{build_index, IndexEntry, PredatoryIndex};
pub use matcher::{check_entries, check_entries_sequential, match_entry, MatchConfig, Thresholds, Tier};
pub use report::{aggregate, FieldReport, Report};
pub use similarity::Metric;
pub use sources::{PredatorySource, SOURCES};

/// One known predatory entity as scraped from a source list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PredatoryRecord {
    pub name: String,
    pub url: String,
}

/// A bibliography entry: citation key plus raw field values.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BibEntry {
    pub key: String,
    pub fields: BTreeMap<String, String>,
}

impl BibEntry {
    pub fn new(key: impl Into<String>) -> Self {
        Self { key: key.into(), fields: BTreeMap::new() }
    }

    pub fn with_field(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.fields.insert(name.into(), value.into());
        self
    }
}

/// A single field-vs-index comparison that met the lowest threshold.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MatchResult {
    pub score: f64,
    pub name: String,
    pub url: String,
}
