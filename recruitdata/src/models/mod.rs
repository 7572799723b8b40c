//! Domain model for recruitment test data.
//!
//! - [`Candidate`] - one recruitment candidate, as typed into the
//!   "Add Candidate" form of the HR application
//! - [`CANDIDATE_COLUMNS`] - the fixed CSV column order for candidates

use serde::{Deserialize, Serialize};

use crate::error::{SinkError, SinkResult};
use crate::parser::CsvRow;

/// CSV header order used when writing candidates.
pub const CANDIDATE_COLUMNS: [&str; 5] = ["firstname", "lastname", "vacancy", "email", "contactNo"];

/// Number of digits in a generated contact number.
pub const CONTACT_NO_LEN: usize = 10;

/// One recruitment candidate.
///
/// Field names serialize exactly as the CSV header names. `contactNo` is
/// omitted from JSON when absent.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Candidate {
    pub firstname: String,
    pub lastname: String,
    pub vacancy: String,
    pub email: String,
    #[serde(rename = "contactNo", default, skip_serializing_if = "Option::is_none")]
    pub contact_no: Option<String>,
}

impl Candidate {
    /// Build a candidate from a parsed CSV row.
    ///
    /// `row` is the 1-based data row number, used in the error. Required
    /// fields must be present and non-empty; an empty `contactNo` becomes
    /// `None`.
    pub fn from_row(fields: &CsvRow, row: usize) -> SinkResult<Self> {
        let required = |field: &str| -> SinkResult<String> {
            match fields.get(field) {
                Some(value) if !value.is_empty() => Ok(value.to_string()),
                _ => Err(SinkError::MissingField {
                    row,
                    field: field.to_string(),
                }),
            }
        };

        Ok(Self {
            firstname: required("firstname")?,
            lastname: required("lastname")?,
            vacancy: required("vacancy")?,
            email: required("email")?,
            contact_no: fields
                .get("contactNo")
                .filter(|v| !v.is_empty())
                .map(str::to_string),
        })
    }

    /// Values in [`CANDIDATE_COLUMNS`] order; an absent contact number is empty.
    pub fn to_columns(&self) -> [&str; 5] {
        [
            self.firstname.as_str(),
            self.lastname.as_str(),
            self.vacancy.as_str(),
            self.email.as_str(),
            self.contact_no.as_deref().unwrap_or(""),
        ]
    }
}
