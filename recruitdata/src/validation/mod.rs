//! Caller-side validation of candidates.
//!
//! The pipeline itself never validates on read. Consumers that want to
//! reject a record before typing it into the application use this module:
//! structure and formats are checked against the embedded JSON Schema
//! (draft 7, `schemas/candidate.json`), then the vacancy is checked against
//! the configured designations, which the schema cannot know.
//!
//! # Example
//!
//! ```rust
//! use recruitdata::{validate_candidate, Candidate, GeneratorConfig};
//!
//! let candidate = Candidate {
//!     firstname: "Jo".into(),
//!     lastname: "Bloggs".into(),
//!     vacancy: "Senior QA Lead".into(),
//!     email: "jo.bloggs@example.com".into(),
//!     contact_no: Some("0123456789".into()),
//! };
//! assert!(validate_candidate(&candidate, &GeneratorConfig::default()).is_ok());
//! ```

use serde_json::Value;

use crate::config::GeneratorConfig;
use crate::error::ValidationError;
use crate::models::Candidate;

const CANDIDATE_SCHEMA: &str = include_str!("../../schemas/candidate.json");

/// Validate a JSON value against a JSON schema.
///
/// # Returns
/// * `Ok(())` if valid
/// * `Err(Vec<String>)` with one message per violation
pub fn validate(schema: &Value, data: &Value) -> Result<(), Vec<String>> {
    let validator = jsonschema::draft7::new(schema)
        .map_err(|e| vec![format!("Invalid schema: {}", e)])?;

    let errors: Vec<String> = validator
        .iter_errors(data)
        .map(|e| e.to_string())
        .collect();

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

/// Boolean form of [`validate`].
pub fn is_valid(schema: &Value, data: &Value) -> bool {
    validate(schema, data).is_ok()
}

fn candidate_schema() -> Result<Value, ValidationError> {
    serde_json::from_str(CANDIDATE_SCHEMA).map_err(|e| ValidationError::SchemaError {
        errors: vec![format!("Invalid embedded schema: {}", e)],
    })
}

/// Validate a raw JSON record against the candidate schema only.
pub fn validate_candidate_json(data: &Value) -> Result<(), ValidationError> {
    let schema = candidate_schema()?;
    validate(&schema, data).map_err(|errors| ValidationError::SchemaError { errors })
}

/// Validate a candidate's shape and its vacancy.
pub fn validate_candidate(candidate: &Candidate, config: &GeneratorConfig) -> Result<(), ValidationError> {
    let data = serde_json::to_value(candidate).map_err(|e| ValidationError::SchemaError {
        errors: vec![e.to_string()],
    })?;
    validate_candidate_json(&data)?;

    if !config.allows(&candidate.vacancy) {
        return Err(ValidationError::InvalidValue {
            field: "vacancy".into(),
            message: format!(
                "'{}' is not one of: {}",
                candidate.vacancy,
                config.designations().join(", ")
            ),
        });
    }

    Ok(())
}

/// Outcome of validating a batch.
#[derive(Debug, Clone, Default)]
pub struct ValidationReport {
    pub valid: usize,
    pub invalid: usize,
    /// (record index, message); capped at [`MAX_REPORTED_ERRORS`].
    pub errors: Vec<(usize, String)>,
}

/// Errors kept in a [`ValidationReport`].
pub const MAX_REPORTED_ERRORS: usize = 10;

impl ValidationReport {
    pub fn all_valid(&self) -> bool {
        self.invalid == 0
    }
}

/// Validate every candidate in `candidates`.
pub fn validate_candidates(candidates: &[Candidate], config: &GeneratorConfig) -> ValidationReport {
    let mut report = ValidationReport::default();

    for (i, candidate) in candidates.iter().enumerate() {
        match validate_candidate(candidate, config) {
            Ok(()) => report.valid += 1,
            Err(err) => {
                report.invalid += 1;
                if report.errors.len() < MAX_REPORTED_ERRORS {
                    report.errors.push((i, err.to_string()));
                }
            }
        }
    }

    report
}
