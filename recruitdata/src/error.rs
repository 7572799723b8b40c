//! Error types for the recruitment test-data pipeline.
//!
//! Each component owns one error enum:
//!
//! - [`CsvError`] - delimited text parsing and serialization
//! - [`SinkError`] - file reads and writes under the test-data directory
//! - [`ValidationError`] - caller-side candidate validation
//! - [`ConfigError`] - invalid configuration values
//! - [`SecretError`] - credential encryption and decryption
//! - [`PipelineError`] - top-level flow errors
//!
//! Conversion is automatic via `From` implementations, so `?` works across
//! component boundaries. [`PipelineError::kind`] collapses every failure into
//! an [`ErrorKind`] for callers that only need to branch on the outcome.

use std::path::PathBuf;
use thiserror::Error;

// =============================================================================
// Error Kind
// =============================================================================

/// Coarse classification of a failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// CSV without a header, JSON that is not an array of candidates,
    /// or a row missing a required field.
    MalformedInput,
    /// File unreadable or unwritable.
    IoFailure,
    /// A candidate rejected by validation.
    ValidationFailure,
    /// Invalid delimiter, designation list or file name.
    Configuration,
    /// Encryption or decryption failed.
    Crypto,
}

// =============================================================================
// CSV Errors
// =============================================================================

/// Errors during CSV parsing and serialization.
#[derive(Debug, Error)]
pub enum CsvError {
    /// No non-blank line to use as a header.
    #[error("No headers found in CSV")]
    NoHeaders,

    /// Delimiter is not a single ASCII character.
    #[error("Invalid CSV delimiter '{0}': must be a single ASCII character")]
    InvalidDelimiter(char),

    /// The underlying writer failed.
    #[error("Failed to write CSV: {0}")]
    Write(String),
}

impl From<csv::Error> for CsvError {
    fn from(err: csv::Error) -> Self {
        CsvError::Write(err.to_string())
    }
}

// =============================================================================
// Sink Errors
// =============================================================================

/// Errors from reading or writing files in the test-data directory.
#[derive(Debug, Error)]
pub enum SinkError {
    /// File name is empty, absolute, or escapes the test-data directory.
    #[error("Invalid test-data file name '{0}': must be a plain file name")]
    InvalidFileName(String),

    /// File could not be read or written.
    #[error("IO error on '{}': {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// JSON content is not an array of candidates.
    #[error("Malformed JSON in '{}': {source}", path.display())]
    MalformedJson {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// CSV content could not be parsed or produced.
    #[error("Malformed CSV in '{}': {source}", path.display())]
    Csv {
        path: PathBuf,
        #[source]
        source: CsvError,
    },

    /// A CSV row lacks a required candidate field.
    #[error("Row {row}: missing required field '{field}'")]
    MissingField { row: usize, field: String },
}

// =============================================================================
// Validation Errors
// =============================================================================

/// Errors during candidate validation.
#[derive(Debug, Error)]
pub enum ValidationError {
    /// Schema validation failed.
    #[error("Validation failed: {errors:?}")]
    SchemaError { errors: Vec<String> },

    /// Invalid field value.
    #[error("Invalid value for field '{field}': {message}")]
    InvalidValue { field: String, message: String },
}

// =============================================================================
// Configuration Errors
// =============================================================================

/// Errors raised while building configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Delimiter is not usable for CSV.
    #[error("Invalid delimiter '{0}': must be a single ASCII character other than a quote or newline")]
    InvalidDelimiter(String),

    /// Designation list is empty.
    #[error("At least one vacancy designation is required")]
    NoDesignations,

    /// A designation is blank.
    #[error("Vacancy designation at position {0} is blank")]
    EmptyDesignation(usize),
}

// =============================================================================
// Secret Errors
// =============================================================================

/// Errors from the credential cipher.
#[derive(Debug, Error)]
pub enum SecretError {
    /// Env file could not be read or written.
    #[error("IO error on '{}': {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Cipher text is not valid base64.
    #[error("Cipher text is not valid base64: {0}")]
    Encoding(#[from] base64::DecodeError),

    /// Cipher text is shorter than a nonce.
    #[error("Cipher text is truncated ({0} bytes)")]
    Truncated(usize),

    /// Wrong key or tampered cipher text.
    #[error("Decryption failed: wrong key or corrupted value")]
    Decrypt,

    /// Decrypted bytes are not UTF-8.
    #[error("Decrypted value is not valid UTF-8")]
    Utf8(#[from] std::string::FromUtf8Error),

    /// Cipher could not be initialised or failed to encrypt.
    #[error("Cipher error: {0}")]
    Cipher(String),
}

// =============================================================================
// Pipeline Errors (top-level)
// =============================================================================

/// Top-level flow errors.
///
/// This is the error type returned by [`crate::pipeline::PipelineDriver`].
#[derive(Debug, Error)]
pub enum PipelineError {
    /// CSV error outside of a file context.
    #[error("CSV error: {0}")]
    Csv(#[from] CsvError),

    /// File sink error.
    #[error("File error: {0}")]
    Sink(#[from] SinkError),

    /// Validation error.
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),

    /// Configuration error.
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// Credential error.
    #[error("Credential error: {0}")]
    Secret(#[from] SecretError),
}

impl PipelineError {
    /// Classify this error.
    pub fn kind(&self) -> ErrorKind {
        match self {
            PipelineError::Csv(CsvError::InvalidDelimiter(_)) => ErrorKind::Configuration,
            PipelineError::Csv(_) => ErrorKind::MalformedInput,
            PipelineError::Sink(err) => err.kind(),
            PipelineError::Validation(_) => ErrorKind::ValidationFailure,
            PipelineError::Config(_) => ErrorKind::Configuration,
            PipelineError::Secret(SecretError::Io { .. }) => ErrorKind::IoFailure,
            PipelineError::Secret(_) => ErrorKind::Crypto,
        }
    }
}

impl SinkError {
    /// Classify this error.
    pub fn kind(&self) -> ErrorKind {
        match self {
            SinkError::InvalidFileName(_) => ErrorKind::Configuration,
            SinkError::Io { .. } => ErrorKind::IoFailure,
            SinkError::Csv {
                source: CsvError::InvalidDelimiter(_),
                ..
            } => ErrorKind::Configuration,
            SinkError::MalformedJson { .. }
            | SinkError::Csv { .. }
            | SinkError::MissingField { .. } => ErrorKind::MalformedInput,
        }
    }
}

// =============================================================================
// Result Type Aliases
// =============================================================================

/// Result type for CSV operations.
pub type CsvResult<T> = Result<T, CsvError>;

/// Result type for file sink operations.
pub type SinkResult<T> = Result<T, SinkError>;

/// Result type for configuration.
pub type ConfigResult<T> = Result<T, ConfigError>;

/// Result type for credential operations.
pub type SecretResult<T> = Result<T, SecretError>;

/// Result type for pipeline flows.
pub type PipelineResult<T> = Result<T, PipelineError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_conversion_chain() {
        let csv_err = CsvError::NoHeaders;
        let pipeline_err: PipelineError = csv_err.into();
        assert!(pipeline_err.to_string().contains("No headers"));
        assert_eq!(pipeline_err.kind(), ErrorKind::MalformedInput);

        let sink_err = SinkError::MissingField {
            row: 3,
            field: "email".into(),
        };
        let pipeline_err: PipelineError = sink_err.into();
        assert!(pipeline_err.to_string().contains("email"));
        assert_eq!(pipeline_err.kind(), ErrorKind::MalformedInput);
    }

    #[test]
    fn test_io_error_carries_path() {
        let err = SinkError::Io {
            path: PathBuf::from("testdata/out.json"),
            source: std::io::Error::new(std::io::ErrorKind::NotFound, "gone"),
        };
        let msg = err.to_string();
        assert!(msg.contains("testdata/out.json"));
        assert!(msg.contains("gone"));
        assert_eq!(err.kind(), ErrorKind::IoFailure);
    }

    #[test]
    fn test_validation_error_format() {
        let err = ValidationError::InvalidValue {
            field: "vacancy".into(),
            message: "not an open designation".into(),
        };
        let msg = err.to_string();
        assert!(msg.contains("vacancy"));
        assert!(msg.contains("not an open designation"));

        let pipeline_err: PipelineError = err.into();
        assert_eq!(pipeline_err.kind(), ErrorKind::ValidationFailure);
    }

    #[test]
    fn test_secret_kinds() {
        let err: PipelineError = SecretError::Decrypt.into();
        assert_eq!(err.kind(), ErrorKind::Crypto);
    }
}
