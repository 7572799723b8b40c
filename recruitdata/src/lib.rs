//! # recruitdata - test data for the recruitment end-to-end suite
//!
//! Generates synthetic recruitment candidates, moves them through CSV and
//! JSON files in a single test-data directory, and seals the credentials the
//! login flows read from `.env`.
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────┐     ┌─────────────┐     ┌─────────────┐     ┌─────────────┐
//! │  Generator  │────▶│  CSV file   │────▶│   Parser    │────▶│  JSON file  │
//! │ (candidates)│     │ (no quotes) │     │  (rows)     │     │  (array)    │
//! └─────────────┘     └─────────────┘     └─────────────┘     └─────────────┘
//! ```
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use recruitdata::{GeneratorConfig, PipelineDriver, TestDataConfig};
//!
//! let mut driver = PipelineDriver::new(TestDataConfig::default(), &GeneratorConfig::default());
//! let candidates = driver.generate_to_json(5, "testData_en.json").unwrap();
//! println!("Generated {} candidates", candidates.len());
//! ```
//!
//! ## Modules
//!
//! - [`error`] - Error types and [`ErrorKind`]
//! - [`config`] - Explicit configuration
//! - [`models`] - The [`Candidate`] record
//! - [`parser`] - Delimited text codec
//! - [`generator`] - Synthetic candidates
//! - [`sink`] - Candidate files in the test-data directory
//! - [`pipeline`] - Generate/convert flows
//! - [`validation`] - Caller-side candidate validation
//! - [`secrets`] - `.env` credential sealing
//! - [`logs`] - Progress logging

// Core modules
pub mod config;
pub mod error;
pub mod logs;
pub mod models;

// Data pipeline
pub mod generator;
pub mod parser;
pub mod pipeline;
pub mod sink;

// Validation
pub mod validation;

// Credentials
pub mod secrets;

// =============================================================================
// Re-exports - Errors
// =============================================================================

pub use error::{
    ConfigError, CsvError, ErrorKind, PipelineError, PipelineResult, SecretError, SinkError,
    ValidationError,
};

// =============================================================================
// Re-exports - Configuration
// =============================================================================

pub use config::{CryptoConfig, GeneratorConfig, TestDataConfig};

// =============================================================================
// Re-exports - Models
// =============================================================================

pub use models::{Candidate, CANDIDATE_COLUMNS};

// =============================================================================
// Re-exports - CSV
// =============================================================================

pub use parser::{parse, parse_table, serialize, CsvRow, CsvTable};

// =============================================================================
// Re-exports - Generation, files and flows
// =============================================================================

pub use generator::RecordGenerator;
pub use pipeline::{FlowReport, PipelineDriver};
pub use sink::FileSink;

// =============================================================================
// Re-exports - Validation
// =============================================================================

pub use validation::{
    is_valid, validate, validate_candidate, validate_candidate_json, validate_candidates,
    ValidationReport,
};

// =============================================================================
// Re-exports - Credentials
// =============================================================================

pub use secrets::{
    decrypt_env_file, encrypt_env_file, env_file_path, CredentialCipher,
};
