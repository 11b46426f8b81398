use crate::error::{CheckError, Result};
use crate::BibEntry;
use biblatex::{Bibliography, Chunk, Spanned};
use std::path::Path;

fn chunks_to_string(chunks: &[Spanned<Chunk>]) -> String {
    chunks
        .iter()
        .map(|c| match &c.v {
            Chunk::Normal(s) | Chunk::Verbatim(s) | Chunk::Math(s) => s.as_str(),
        })
        .collect()
}

/// Parse BibTeX/BibLaTeX source into entries with lowercase field names.
pub fn parse_bibliography(src: &str) -> Result<Vec<BibEntry>> {
    let bib = Bibliography::parse(src).map_err(|e| CheckError::Parse(e.to_string()))?;
    let entries = bib
        .iter()
        .map(|entry| BibEntry {
            key: entry.key.clone(),
            fields: entry
                .fields
                .iter()
                .map(|(name, chunks)| (name.to_lowercase(), chunks_to_string(chunks)))
                .collect(),
        })
        .collect();
    Ok(entries)
}

pub fn load_bibliography(path: &Path) -> Result<Vec<BibEntry>> {
    let src = std::fs::read_to_string(path).map_err(|source| CheckError::Io { path: path.to_path_buf(), source })?;
    let entries = parse_bibliography(&src)?;
    tracing::info!(path = %path.display(), entries = entries.len(), "loaded bibliography");
    Ok(entries)
}
