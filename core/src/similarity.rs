use crate::tokenizer::tokenize;
use serde::{Deserialize, Serialize};
use std::collections::{HashMap, HashSet};

/// How two names are compared. Both return a score in [0, 1].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Metric {
    /// Cosine of the term-frequency vectors.
    #[default]
    Cosine,
    /// Shared terms over all distinct terms.
    Jaccard,
}

impl Metric {
    pub fn score(self, a: &str, b: &str) -> f64 {
        match self {
            Metric::Cosine => cosine(a, b),
            Metric::Jaccard => jaccard(a, b),
        }
    }
}

fn term_counts(text: &str) -> HashMap<String, u64> {
    let mut tf: HashMap<String, u64> = HashMap::new();
    for term in tokenize(text) {
        *tf.entry(term).or_insert(0) += 1;
    }
    tf
}

/// Cosine similarity of the term-frequency vectors of `a` and `b`.
///
/// Counts stay integral until the final division, so the result is exactly
/// symmetric and exactly `1.0` for identical non-empty input. A string with no
/// terms has a zero vector, for which the angle is undefined; that scores `0.0`.
pub fn cosine(a: &str, b: &str) -> f64 {
    let tf_a = term_counts(a);
    let tf_b = term_counts(b);
    if tf_a.is_empty() || tf_b.is_empty() {
        return 0.0;
    }
    let dot: u64 = tf_a
        .iter()
        .filter_map(|(term, n)| tf_b.get(term).map(|m| n * m))
        .sum();
    if dot == 0 {
        return 0.0;
    }
    let norm_a: u64 = tf_a.values().map(|n| n * n).sum();
    let norm_b: u64 = tf_b.values().map(|n| n * n).sum();
    let denom = ((norm_a as f64) * (norm_b as f64)).sqrt();
    (dot as f64 / denom).min(1.0)
}

/// Jaccard index of the term sets of `a` and `b`.
pub fn jaccard(a: &str, b: &str) -> f64 {
    let set_a: HashSet<String> = tokenize(a).into_iter().collect();
    let set_b: HashSet<String> = tokenize(b).into_iter().collect();
    if set_a.is_empty() || set_b.is_empty() {
        return 0.0;
    }
    let shared = set_a.intersection(&set_b).count();
    let union = set_a.len() + set_b.len() - shared;
    shared as f64 / union as f64
}
