use crate::cache::{load_records, CachePaths};
use crate::error::Result;
use crate::sources::PredatorySource;
use crate::PredatoryRecord;
use std::collections::HashMap;

/// One indexed predatory entity and the bibliography fields it is checked against.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IndexEntry {
    pub name: String,
    pub url: String,
    pub fields: &'static [&'static str],
}

impl IndexEntry {
    pub fn applies_to(&self, field: &str) -> bool {
        self.fields.iter().any(|f| f.eq_ignore_ascii_case(field))
    }
}

/// Predatory names keyed by their lowercase form.
///
/// Iteration follows first-insertion order of each key. Inserting a key that is
/// already present replaces the stored entry in place (last write wins).
#[derive(Debug, Default, Clone)]
pub struct PredatoryIndex {
    keys: HashMap<String, usize>,
    entries: Vec<(String, IndexEntry)>,
    collisions: usize,
}

impl PredatoryIndex {
    pub fn new() -> Self { Self::default() }

    pub fn insert(&mut self, record: PredatoryRecord, fields: &'static [&'static str]) {
        let key = record.name.to_lowercase();
        let entry = IndexEntry { name: record.name, url: record.url, fields };
        match self.keys.get(&key) {
            Some(&pos) => {
                self.collisions += 1;
                self.entries[pos].1 = entry;
            }
            None => {
                self.keys.insert(key.clone(), self.entries.len());
                self.entries.push((key, entry));
            }
        }
    }

    pub fn get(&self, key: &str) -> Option<&IndexEntry> {
        self.keys.get(&key.to_lowercase()).map(|&pos| &self.entries[pos].1)
    }

    /// `(lowercase key, entry)` pairs.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &IndexEntry)> {
        self.entries.iter().map(|(k, e)| (k.as_str(), e))
    }

    pub fn len(&self) -> usize { self.entries.len() }

    pub fn is_empty(&self) -> bool { self.entries.is_empty() }

    /// Number of inserts that overwrote an existing key.
    pub fn collisions(&self) -> usize { self.collisions }
}

/// Build the index from the cached records of every source.
/// Fails on the first source without a readable cache.
pub fn build_index(sources: &[PredatorySource], paths: &CachePaths) -> Result<PredatoryIndex> {
    let mut index = PredatoryIndex::new();
    for source in sources {
        let records = load_records(paths, source.url)?;
        tracing::debug!(source = source.url, records = records.len(), "loaded cached records");
        for record in records {
            index.insert(record, source.fields);
        }
    }
    if index.collisions() > 0 {
        tracing::warn!(collisions = index.collisions(), "names collided case-insensitively; kept the last record for each");
    }
    tracing::info!(entries = index.len(), "built predatory index");
    Ok(index)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rec(name: &str, url: &str) -> PredatoryRecord {
        PredatoryRecord { name: name.into(), url: url.into() }
    }

    #[test]
    fn keys_are_case_insensitive_and_last_write_wins() {
        let mut index = PredatoryIndex::new();
        index.insert(rec("Fake Journal", "http://a"), &["journal"]);
        index.insert(rec("Other Press", "http://b"), &["publisher"]);
        index.insert(rec("FAKE JOURNAL", "http://c"), &["publisher"]);

        assert_eq!(index.len(), 2);
        assert_eq!(index.collisions(), 1);
        let entry = index.get("fake journal").unwrap();
        assert_eq!(entry.name, "FAKE JOURNAL");
        assert_eq!(entry.url, "http://c");
        assert!(entry.applies_to("Publisher"));
        // overwritten key keeps its original position
        let keys: Vec<&str> = index.iter().map(|(k, _)| k).collect();
        assert_eq!(keys, vec!["fake journal", "other press"]);
    }
}
