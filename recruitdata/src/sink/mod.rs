//! Candidate files in the test-data directory.
//!
//! Every operation takes a bare file name and resolves it under
//! [`TestDataConfig::dir`]. Names with directory components are refused
//! before any I/O, so the sink only ever touches that one directory.

use std::fs;
use std::path::{Component, Path, PathBuf};

use serde::Serialize;

use crate::config::TestDataConfig;
use crate::error::{SinkError, SinkResult};
use crate::models::{Candidate, CANDIDATE_COLUMNS};
use crate::parser::{self, CsvRow, CsvTable};

/// Reads and writes candidate files under one directory.
#[derive(Debug, Clone)]
pub struct FileSink {
    config: TestDataConfig,
}

impl FileSink {
    pub fn new(config: TestDataConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &TestDataConfig {
        &self.config
    }

    /// Resolve `file_name` inside the test-data directory.
    pub fn path_for(&self, file_name: &str) -> SinkResult<PathBuf> {
        let mut components = Path::new(file_name).components();
        match (components.next(), components.next()) {
            (Some(Component::Normal(_)), None) => Ok(self.config.dir().join(file_name)),
            _ => Err(SinkError::InvalidFileName(file_name.to_string())),
        }
    }

    /// Write candidates as a pretty-printed JSON array, replacing the file.
    pub fn write_json(&self, records: &[Candidate], file_name: &str) -> SinkResult<PathBuf> {
        self.write_pretty_json(records, file_name)
    }

    /// Write generic CSV rows as a JSON array of objects.
    pub fn write_rows_json(&self, rows: &[CsvRow], file_name: &str) -> SinkResult<PathBuf> {
        self.write_pretty_json(rows, file_name)
    }

    /// Write candidates as CSV with the fixed candidate header.
    ///
    /// Values are written verbatim; one containing the delimiter will not
    /// read back into the same columns.
    pub fn write_csv(&self, records: &[Candidate], file_name: &str) -> SinkResult<PathBuf> {
        let path = self.path_for(file_name)?;
        let content = parser::write_records(
            &CANDIDATE_COLUMNS,
            records.iter().map(Candidate::to_columns),
            self.config.delimiter(),
        )
        .map_err(|source| SinkError::Csv {
            path: path.clone(),
            source,
        })?;
        self.write_file(&path, content)?;
        Ok(path)
    }

    /// Read a JSON array of candidates.
    pub fn read_json(&self, file_name: &str) -> SinkResult<Vec<Candidate>> {
        let path = self.path_for(file_name)?;
        let content = read_file(&path)?;
        serde_json::from_str(&content).map_err(|source| SinkError::MalformedJson { path, source })
    }

    /// Read and parse a CSV file, keeping the header list.
    pub fn read_csv_rows(&self, file_name: &str) -> SinkResult<CsvTable> {
        let path = self.path_for(file_name)?;
        let content = read_file(&path)?;
        parser::parse_table(&content, self.config.delimiter())
            .map_err(|source| SinkError::Csv { path, source })
    }

    /// Read a CSV file as candidates, rejecting rows missing a required field.
    pub fn read_csv(&self, file_name: &str) -> SinkResult<Vec<Candidate>> {
        let table = self.read_csv_rows(file_name)?;
        rows_to_candidates(&table.rows)
    }

    /// Convert any CSV file into a JSON array of row objects.
    ///
    /// Returns the number of rows written.
    pub fn convert_csv_to_json(&self, csv_name: &str, json_name: &str) -> SinkResult<usize> {
        let table = self.read_csv_rows(csv_name)?;
        self.write_rows_json(&table.rows, json_name)?;
        Ok(table.rows.len())
    }

    fn write_pretty_json<T: Serialize + ?Sized>(&self, value: &T, file_name: &str) -> SinkResult<PathBuf> {
        let path = self.path_for(file_name)?;
        let content = serde_json::to_string_pretty(value).map_err(|source| SinkError::MalformedJson {
            path: path.clone(),
            source,
        })?;
        self.write_file(&path, content)?;
        Ok(path)
    }

    fn write_file(&self, path: &Path, content: String) -> SinkResult<()> {
        let dir = self.config.dir();
        if !dir.as_os_str().is_empty() {
            fs::create_dir_all(dir).map_err(|source| SinkError::Io {
                path: dir.to_path_buf(),
                source,
            })?;
        }
        fs::write(path, content).map_err(|source| SinkError::Io {
            path: path.to_path_buf(),
            source,
        })
    }
}

/// Convert parsed rows into candidates. Row numbers in errors are 1-based.
pub fn rows_to_candidates(rows: &[CsvRow]) -> SinkResult<Vec<Candidate>> {
    rows.iter()
        .enumerate()
        .map(|(i, row)| Candidate::from_row(row, i + 1))
        .collect()
}

fn read_file(path: &Path) -> SinkResult<String> {
    fs::read_to_string(path).map_err(|source| SinkError::Io {
        path: path.to_path_buf(),
        source,
    })
}
