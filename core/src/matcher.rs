use crate::error::{CheckError, Result};
use crate::index::PredatoryIndex;
use crate::normalize::normalize;
use crate::report::{aggregate, FieldReport, Report};
use crate::similarity::Metric;
use crate::{BibEntry, MatchResult};
use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Confidence bucket of a match, used for display.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Tier {
    Low,
    Medium,
    High,
}

/// Increasing similarity cutoffs. Anything below `low` is not a match.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Thresholds {
    pub low: f64,
    pub medium: f64,
    pub high: f64,
}

impl Default for Thresholds {
    fn default() -> Self {
        Self { low: 0.7, medium: 0.75, high: 0.8 }
    }
}

impl Thresholds {
    pub fn new(low: f64, medium: f64, high: f64) -> Result<Self> {
        let in_range = |t: f64| (0.0..=1.0).contains(&t);
        if !(in_range(low) && in_range(medium) && in_range(high) && low <= medium && medium <= high) {
            return Err(CheckError::InvalidThresholds([low, medium, high]));
        }
        Ok(Self { low, medium, high })
    }

    pub fn tier(&self, score: f64) -> Option<Tier> {
        if score >= self.high {
            Some(Tier::High)
        } else if score >= self.medium {
            Some(Tier::Medium)
        } else if score >= self.low {
            Some(Tier::Low)
        } else {
            None
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct MatchConfig {
    pub thresholds: Thresholds,
    pub metric: Metric,
}

/// Compare every checked field of `entry` against every index entry that applies to it.
///
/// Returns one report per field with at least one score at or above the lowest
/// threshold; matches within a field follow index order. Fields that no index
/// entry applies to are never scored.
pub fn match_entry(index: &PredatoryIndex, entry: &BibEntry, config: &MatchConfig) -> BTreeMap<String, FieldReport> {
    let mut fields: BTreeMap<String, FieldReport> = BTreeMap::new();
    for (field, raw) in &entry.fields {
        let mut candidates = index.iter().filter(|(_, e)| e.applies_to(field)).peekable();
        if candidates.peek().is_none() {
            continue;
        }
        let value = normalize(raw);
        for (key, predatory) in candidates {
            let score = config.metric.score(&value, key);
            if score < config.thresholds.low {
                continue;
            }
            fields
                .entry(field.clone())
                .or_insert_with(|| FieldReport::new(value.clone()))
                .matches
                .push(MatchResult { score, name: predatory.name.clone(), url: predatory.url.clone() });
        }
    }
    fields
}

/// Match all entries on the rayon pool and combine the results afterwards.
pub fn check_entries(index: &PredatoryIndex, entries: &[BibEntry], config: &MatchConfig) -> Report {
    let results: Vec<(String, BTreeMap<String, FieldReport>)> = entries
        .par_iter()
        .map(|entry| (entry.key.clone(), match_entry(index, entry, config)))
        .collect();
    let report = aggregate(results);
    tracing::info!(entries = entries.len(), flagged = report.len(), "checked bibliography");
    report
}

pub fn check_entries_sequential(index: &PredatoryIndex, entries: &[BibEntry], config: &MatchConfig) -> Report {
    aggregate(entries.iter().map(|entry| (entry.key.clone(), match_entry(index, entry, config))))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::PredatoryRecord;

    fn index() -> PredatoryIndex {
        let mut index = PredatoryIndex::new();
        index.insert(PredatoryRecord { name: "Fake Journal".into(), url: "http://x".into() }, &["journal"]);
        index.insert(PredatoryRecord { name: "Shady Press".into(), url: "http://y".into() }, &["publisher"]);
        index
    }

    #[test]
    fn tiers() {
        let t = Thresholds::default();
        assert_eq!(t.tier(0.69), None);
        assert_eq!(t.tier(0.7), Some(Tier::Low));
        assert_eq!(t.tier(0.75), Some(Tier::Medium));
        assert_eq!(t.tier(1.0), Some(Tier::High));
    }

    #[test]
    fn rejects_unordered_thresholds() {
        assert!(Thresholds::new(0.8, 0.7, 0.9).is_err());
        assert!(Thresholds::new(0.5, 0.7, 1.2).is_err());
        assert!(Thresholds::new(0.5, 0.5, 0.5).is_ok());
    }

    #[test]
    fn matches_only_applicable_fields() {
        let entry = BibEntry::new("k")
            .with_field("journal", "The Fake Journal")
            .with_field("publisher", "Fake Journal")
            .with_field("author", "Shady Press");
        let fields = match_entry(&index(), &entry, &MatchConfig::default());
        assert_eq!(fields.keys().collect::<Vec<_>>(), vec!["journal"]);
        let journal = &fields["journal"];
        assert_eq!(journal.value, "The Fake Journal");
        assert_eq!(journal.matches.len(), 1);
        assert!(journal.matches[0].score >= 0.7);
        assert_eq!(journal.matches[0].url, "http://x");
    }

    #[test]
    fn markup_is_stripped_before_scoring() {
        let entry = BibEntry::new("k").with_field("publisher", r"\textsc{Shady} Press");
        let fields = match_entry(&index(), &entry, &MatchConfig::default());
        assert_eq!(fields["publisher"].value, "Shady Press");
        assert_eq!(fields["publisher"].matches[0].score, 1.0);
    }

    #[test]
    fn nested_markup_still_matches() {
        let entry = BibEntry::new("k").with_field("journal", r"\textbf{\emph{Fake Journal}}");
        let fields = match_entry(&index(), &entry, &MatchConfig::default());
        assert_eq!(fields["journal"].value, "Fake Journal");
        assert_eq!(fields["journal"].matches[0].name, "Fake Journal");
        assert_eq!(fields["journal"].matches[0].score, 1.0);
    }

    #[test]
    fn empty_field_never_matches() {
        let entry = BibEntry::new("k").with_field("journal", "");
        assert!(match_entry(&index(), &entry, &MatchConfig::default()).is_empty());
    }
}
