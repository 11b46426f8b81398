use crate::MatchResult;
use serde::Serialize;
use std::collections::BTreeMap;

/// Matches found for one field of one entry.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FieldReport {
    /// Field value after markup stripping.
    pub value: String,
    /// In discovery order; see [`FieldReport::ranked`].
    pub matches: Vec<MatchResult>,
}

impl FieldReport {
    pub fn new(value: String) -> Self {
        Self { value, matches: Vec::new() }
    }

    /// Matches by descending score; equal scores keep discovery order.
    pub fn ranked(&self) -> Vec<&MatchResult> {
        let mut ranked: Vec<&MatchResult> = self.matches.iter().collect();
        ranked.sort_by(|a, b| b.score.total_cmp(&a.score));
        ranked
    }
}

/// Flagged entries: citation key -> field name -> matches.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct Report {
    entries: BTreeMap<String, BTreeMap<String, FieldReport>>,
}

impl Report {
    pub fn insert(&mut self, key: String, fields: BTreeMap<String, FieldReport>) {
        if fields.values().all(|f| f.matches.is_empty()) {
            return;
        }
        self.entries.insert(key, fields);
    }

    pub fn get(&self, key: &str) -> Option<&BTreeMap<String, FieldReport>> {
        self.entries.get(key)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&String, &BTreeMap<String, FieldReport>)> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize { self.entries.len() }

    pub fn is_empty(&self) -> bool { self.entries.is_empty() }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}

/// Combine per-entry results in any order; entries without matches are left out.
pub fn aggregate<I>(results: I) -> Report
where
    I: IntoIterator<Item = (String, BTreeMap<String, FieldReport>)>,
{
    let mut report = Report::default();
    for (key, fields) in results {
        report.insert(key, fields);
    }
    report
}
