use crate::error::{CheckError, Result};
use crate::PredatoryRecord;
use std::fs::create_dir_all;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

pub const CACHE_DIR_ENV: &str = "BIBCHECK_CACHE_DIR";

/// Directory holding one CSV file of records per source.
#[derive(Debug, Clone)]
pub struct CachePaths {
    pub root: PathBuf,
}

impl CachePaths {
    pub fn new<P: AsRef<Path>>(root: P) -> Self {
        Self { root: root.as_ref().to_path_buf() }
    }

    /// Explicit directory if given, else `$BIBCHECK_CACHE_DIR`, else the working directory.
    pub fn resolve(explicit: Option<&Path>) -> Self {
        match explicit {
            Some(dir) => Self::new(dir),
            None => match std::env::var(CACHE_DIR_ENV) {
                Ok(dir) if !dir.trim().is_empty() => Self::new(dir),
                _ => Self::new("."),
            },
        }
    }

    pub fn file_for(&self, source_url: &str) -> PathBuf {
        self.root.join(format!("predatory_cache_{}.csv", urlencoding::encode(source_url)))
    }
}

/// Read the cached records of one source. A missing file is a setup error.
pub fn load_records(paths: &CachePaths, source_url: &str) -> Result<Vec<PredatoryRecord>> {
    let path = paths.file_for(source_url);
    let mut reader = match csv::ReaderBuilder::new().has_headers(false).from_path(&path) {
        Ok(r) => r,
        Err(e) => {
            let not_found = matches!(e.kind(), csv::ErrorKind::Io(io) if io.kind() == ErrorKind::NotFound);
            return Err(if not_found {
                CheckError::MissingCache { source_url: source_url.to_string(), path }
            } else {
                CheckError::Csv { path, source: e }
            });
        }
    };
    let mut records = Vec::new();
    for row in reader.deserialize() {
        let record: PredatoryRecord = row.map_err(|source| CheckError::Csv { path: path.clone(), source })?;
        records.push(record);
    }
    Ok(records)
}

/// Overwrite the cache file of one source.
pub fn save_records(paths: &CachePaths, source_url: &str, records: &[PredatoryRecord]) -> Result<()> {
    create_dir_all(&paths.root).map_err(|source| CheckError::Io { path: paths.root.clone(), source })?;
    let path = paths.file_for(source_url);
    let csv_err = |source| CheckError::Csv { path: path.clone(), source };
    let mut writer = csv::WriterBuilder::new().has_headers(false).from_path(&path).map_err(csv_err)?;
    for record in records {
        writer.serialize(record).map_err(csv_err)?;
    }
    writer.flush().map_err(|source| CheckError::Io { path: path.clone(), source })?;
    Ok(())
}
