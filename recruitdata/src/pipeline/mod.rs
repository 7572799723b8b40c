//! High-level flows combining generation, CSV and JSON files.
//!
//! Two flows feed the recruitment tests:
//!
//! ```text
//! generate(n) ──▶ write JSON ──────────────────────────────────▶ read JSON
//! generate(n) ──▶ write CSV ──▶ parse CSV ──▶ write JSON ──────▶ read JSON
//! ```
//!
//! A third converts a hand-maintained candidate CSV into JSON. Every flow is
//! straight-line: the first failing step aborts it and its error is returned.
//!
//! # Example
//!
//! ```rust,no_run
//! use recruitdata::{GeneratorConfig, PipelineDriver, TestDataConfig};
//!
//! let mut driver = PipelineDriver::new(TestDataConfig::new("testdata"), &GeneratorConfig::default());
//! let candidates = driver.generate_via_csv(3, "testData_en.csv", "testDataFromCSV.json")?;
//! assert_eq!(candidates.len(), 3);
//! # Ok::<(), recruitdata::PipelineError>(())
//! ```

use std::path::PathBuf;

use serde::Serialize;

use crate::config::{GeneratorConfig, TestDataConfig};
use crate::error::{PipelineError, PipelineResult};
use crate::generator::RecordGenerator;
use crate::logs::{log_error, log_info, log_info_indent, log_success, log_warning};
use crate::models::{Candidate, CANDIDATE_COLUMNS};
use crate::sink::{rows_to_candidates, FileSink};

/// What a flow produced.
#[derive(Debug, Clone, Serialize)]
pub struct FlowReport {
    /// Candidates read back from the final JSON file.
    pub candidates: Vec<Candidate>,
    /// Files written, in order.
    pub files: Vec<PathBuf>,
}

/// Runs the generate/convert flows against one test-data directory.
pub struct PipelineDriver {
    sink: FileSink,
    generator: RecordGenerator,
}

impl PipelineDriver {
    /// Driver with an entropy-seeded generator.
    pub fn new(data: TestDataConfig, generator: &GeneratorConfig) -> Self {
        Self {
            sink: FileSink::new(data),
            generator: RecordGenerator::new(generator),
        }
    }

    /// Replace the generator, e.g. with a seeded one.
    pub fn with_generator(mut self, generator: RecordGenerator) -> Self {
        self.generator = generator;
        self
    }

    pub fn sink(&self) -> &FileSink {
        &self.sink
    }

    /// Generate `count` candidates, write them as JSON and read them back.
    pub fn generate_to_json(&mut self, count: usize, json_name: &str) -> PipelineResult<Vec<Candidate>> {
        self.generate_to_json_with_report(count, json_name)
            .map(|report| report.candidates)
    }

    /// [`Self::generate_to_json`] with the list of files written.
    pub fn generate_to_json_with_report(&mut self, count: usize, json_name: &str) -> PipelineResult<FlowReport> {
        log_info(format!("Generating {} candidate(s) → {}", count, json_name));
        let batch = self.generator.generate(count);
        log_success(format!("Generated {} candidate(s)", batch.len()));

        let json_path = step("write JSON", self.sink.write_json(&batch, json_name))?;
        log_info_indent(format!("Wrote {}", json_path.display()), 1);

        let candidates = step("read JSON", self.sink.read_json(json_name))?;
        log_success(format!("Read back {} candidate(s)", candidates.len()));

        Ok(FlowReport {
            candidates,
            files: vec![json_path],
        })
    }

    /// Generate `count` candidates, write CSV, parse it, write JSON, read back.
    pub fn generate_via_csv(
        &mut self,
        count: usize,
        csv_name: &str,
        json_name: &str,
    ) -> PipelineResult<Vec<Candidate>> {
        self.generate_via_csv_with_report(count, csv_name, json_name)
            .map(|report| report.candidates)
    }

    /// [`Self::generate_via_csv`] with the list of files written.
    pub fn generate_via_csv_with_report(
        &mut self,
        count: usize,
        csv_name: &str,
        json_name: &str,
    ) -> PipelineResult<FlowReport> {
        log_info(format!("Generating {} candidate(s) → {} → {}", count, csv_name, json_name));
        let batch = self.generator.generate(count);
        log_success(format!("Generated {} candidate(s)", batch.len()));

        let csv_path = step("write CSV", self.sink.write_csv(&batch, csv_name))?;
        log_info_indent(format!("Wrote {}", csv_path.display()), 1);

        let mut report = self.csv_to_json(csv_name, json_name)?;
        report.files.insert(0, csv_path);
        Ok(report)
    }

    /// Convert an existing candidate CSV file to JSON and read it back.
    pub fn convert_csv(&self, csv_name: &str, json_name: &str) -> PipelineResult<Vec<Candidate>> {
        self.csv_to_json(csv_name, json_name).map(|report| report.candidates)
    }

    /// [`Self::convert_csv`] with the list of files written.
    pub fn convert_csv_with_report(&self, csv_name: &str, json_name: &str) -> PipelineResult<FlowReport> {
        self.csv_to_json(csv_name, json_name)
    }

    fn csv_to_json(&self, csv_name: &str, json_name: &str) -> PipelineResult<FlowReport> {
        log_info(format!("Converting {} → {}", csv_name, json_name));
        let table = step("parse CSV", self.sink.read_csv_rows(csv_name))?;
        log_info_indent(
            format!("{} row(s), columns: {}", table.rows.len(), table.headers.join(", ")),
            1,
        );
        let dropped = unmapped_columns(&table.headers);
        if !dropped.is_empty() {
            log_warning(format!("Ignoring column(s) not in the candidate layout: {}", dropped.join(", ")));
        }

        let parsed = step("map rows", rows_to_candidates(&table.rows))?;

        let json_path = step("write JSON", self.sink.write_json(&parsed, json_name))?;
        log_info_indent(format!("Wrote {}", json_path.display()), 1);

        let candidates = step("read JSON", self.sink.read_json(json_name))?;
        log_success(format!("Read back {} candidate(s)", candidates.len()));

        Ok(FlowReport {
            candidates,
            files: vec![json_path],
        })
    }
}

/// Header names a [`Candidate`] has no field for.
fn unmapped_columns(headers: &[String]) -> Vec<&str> {
    headers
        .iter()
        .map(String::as_str)
        .filter(|h| !CANDIDATE_COLUMNS.contains(h))
        .collect()
}

/// Log a failed step and lift its error into [`PipelineError`].
fn step<T, E>(name: &str, result: Result<T, E>) -> PipelineResult<T>
where
    E: Into<PipelineError>,
{
    result.map_err(|e| {
        let err = e.into();
        log_error(format!("{} failed: {}", name, err));
        err
    })
}
