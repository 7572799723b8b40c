//! Explicit configuration for the data pipeline and the credential cipher.
//!
//! Components receive these structs at construction. The library reads the
//! process environment only in [`CryptoConfig::from_env`]; the CLI maps the
//! data-directory variables onto these structs through its own arguments.

use std::env;
use std::path::{Path, PathBuf};

use crate::error::{ConfigError, ConfigResult};

/// Default directory for generated and consumed test-data files.
pub const DEFAULT_TESTDATA_DIR: &str = "testdata";

/// Default CSV delimiter.
pub const DEFAULT_DELIMITER: char = ',';

/// Key material used when `SALT` is not set.
pub const DEFAULT_SALT: &str = "defaultSalt";

/// Vacancies open on the demo instance.
pub const DEFAULT_DESIGNATIONS: &[&str] = &["Junior Account Assistant", "Senior QA Lead"];

/// Where test-data files live and how CSV is delimited.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TestDataConfig {
    dir: PathBuf,
    delimiter: char,
}

impl TestDataConfig {
    /// Config rooted at `dir` with the default delimiter.
    pub fn new(dir: impl AsRef<Path>) -> Self {
        Self {
            dir: dir.as_ref().to_path_buf(),
            delimiter: DEFAULT_DELIMITER,
        }
    }

    /// Replace the delimiter.
    pub fn with_delimiter(mut self, delimiter: char) -> ConfigResult<Self> {
        check_delimiter(delimiter)?;
        self.delimiter = delimiter;
        Ok(self)
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    pub fn delimiter(&self) -> char {
        self.delimiter
    }
}

impl Default for TestDataConfig {
    fn default() -> Self {
        Self::new(DEFAULT_TESTDATA_DIR)
    }
}

/// Parse a delimiter given as text: exactly one character.
pub fn parse_delimiter(raw: &str) -> ConfigResult<char> {
    let mut chars = raw.chars();
    let delimiter = match (chars.next(), chars.next()) {
        (Some(c), None) => c,
        _ => return Err(ConfigError::InvalidDelimiter(raw.to_string())),
    };
    check_delimiter(delimiter)?;
    Ok(delimiter)
}

/// Lines and values are trimmed when parsed, so a whitespace delimiter
/// cannot separate fields reliably.
fn check_delimiter(delimiter: char) -> ConfigResult<()> {
    if !delimiter.is_ascii() || delimiter.is_ascii_whitespace() || delimiter == '"' {
        return Err(ConfigError::InvalidDelimiter(delimiter.to_string()));
    }
    Ok(())
}

/// The closed set of vacancy designations records are drawn from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratorConfig {
    designations: Vec<String>,
}

impl GeneratorConfig {
    /// Validate and wrap a designation list.
    pub fn new<I, S>(designations: I) -> ConfigResult<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let designations: Vec<String> = designations
            .into_iter()
            .map(|d| d.into().trim().to_string())
            .collect();

        if designations.is_empty() {
            return Err(ConfigError::NoDesignations);
        }
        if let Some(pos) = designations.iter().position(|d| d.is_empty()) {
            return Err(ConfigError::EmptyDesignation(pos));
        }

        Ok(Self { designations })
    }

    pub fn designations(&self) -> &[String] {
        &self.designations
    }

    /// Whether `vacancy` is one of the configured designations.
    pub fn allows(&self, vacancy: &str) -> bool {
        self.designations.iter().any(|d| d == vacancy)
    }
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            designations: DEFAULT_DESIGNATIONS.iter().map(|d| d.to_string()).collect(),
        }
    }
}

/// Key material for the credential cipher.
#[derive(Clone, PartialEq, Eq)]
pub struct CryptoConfig {
    key: String,
}

impl CryptoConfig {
    pub fn new(key: impl Into<String>) -> Self {
        Self { key: key.into() }
    }

    /// Build from `SALT`, falling back to [`DEFAULT_SALT`].
    pub fn from_env() -> Self {
        Self::new(env::var("SALT").unwrap_or_else(|_| DEFAULT_SALT.to_string()))
    }

    pub fn key(&self) -> &str {
        &self.key
    }
}

impl std::fmt::Debug for CryptoConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CryptoConfig").field("key", &"<redacted>").finish()
    }
}
