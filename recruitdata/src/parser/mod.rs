//! Plain delimited-text codec.
//!
//! Converts CSV text into rows keyed by header name and back. Parsing is
//! deliberately simple: lines are split on the delimiter with no quoting or
//! escaping, so a value containing the delimiter shifts every later column
//! of that row. Files written by [`crate::sink::FileSink`] follow the same
//! rule and never quote.

use serde::ser::{Serialize, SerializeMap, Serializer};

use crate::error::{CsvError, CsvResult};

/// One parsed data row: header name to value, in header order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CsvRow {
    fields: Vec<(String, String)>,
}

impl CsvRow {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set `column` to `value`. A repeated column keeps its first position
    /// and takes the latest value.
    pub fn insert(&mut self, column: impl Into<String>, value: impl Into<String>) {
        let column = column.into();
        let value = value.into();
        match self.fields.iter_mut().find(|(name, _)| *name == column) {
            Some((_, existing)) => *existing = value,
            None => self.fields.push((column, value)),
        }
    }

    /// Value for `column`, if the column exists.
    pub fn get(&self, column: &str) -> Option<&str> {
        self.fields
            .iter()
            .find(|(name, _)| name == column)
            .map(|(_, value)| value.as_str())
    }

    /// Columns and values in header order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.fields.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for CsvRow {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut row = CsvRow::new();
        for (k, v) in iter {
            row.insert(k, v);
        }
        row
    }
}

impl Serialize for CsvRow {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.fields.len()))?;
        for (k, v) in &self.fields {
            map.serialize_entry(k, v)?;
        }
        map.end()
    }
}

/// Header line plus data rows.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CsvTable {
    pub headers: Vec<String>,
    pub rows: Vec<CsvRow>,
}

/// Parse CSV text into rows keyed by header.
///
/// # Example
/// ```
/// use recruitdata::parser::parse;
///
/// let rows = parse("firstname,lastname\nJo,Bloggs\n", ',').unwrap();
///
/// assert_eq!(rows.len(), 1);
/// assert_eq!(rows[0].get("firstname"), Some("Jo"));
/// assert_eq!(rows[0].get("lastname"), Some("Bloggs"));
/// ```
pub fn parse(text: &str, delimiter: char) -> CsvResult<Vec<CsvRow>> {
    parse_table(text, delimiter).map(|table| table.rows)
}

/// Parse CSV text, keeping the header list.
///
/// Lines are trimmed and blank lines dropped before the header is taken.
/// Short rows are padded with empty strings; extra values are ignored.
pub fn parse_table(text: &str, delimiter: char) -> CsvResult<CsvTable> {
    let mut lines = text
        .split('\n')
        .map(str::trim)
        .filter(|line| !line.is_empty());

    let header_line = lines.next().ok_or(CsvError::NoHeaders)?;
    let headers: Vec<String> = header_line
        .split(delimiter)
        .map(|h| h.trim().to_string())
        .collect();

    let rows = lines
        .map(|line| {
            let values: Vec<&str> = line.split(delimiter).collect();
            headers
                .iter()
                .enumerate()
                .map(|(i, header)| {
                    let value = values.get(i).map(|v| v.trim()).unwrap_or("");
                    (header.as_str(), value)
                })
                .collect::<CsvRow>()
        })
        .collect();

    Ok(CsvTable { headers, rows })
}

/// Serialize rows under `headers`, values written verbatim.
///
/// A row without one of the headers gets an empty field there.
pub fn serialize<S: AsRef<str>>(rows: &[CsvRow], headers: &[S], delimiter: char) -> CsvResult<String> {
    let records = rows.iter().map(|row| {
        headers
            .iter()
            .map(|h| row.get(h.as_ref()).unwrap_or(""))
            .collect::<Vec<_>>()
    });
    write_records(headers, records, delimiter)
}

/// Write a header line and records with the `csv` writer in no-quote mode.
pub(crate) fn write_records<H, I, R, F>(headers: &[H], records: I, delimiter: char) -> CsvResult<String>
where
    H: AsRef<str>,
    I: IntoIterator<Item = R>,
    R: IntoIterator<Item = F>,
    F: AsRef<[u8]>,
{
    let mut writer = csv::WriterBuilder::new()
        .delimiter(delimiter_byte(delimiter)?)
        .quote_style(csv::QuoteStyle::Never)
        .terminator(csv::Terminator::Any(b'\n'))
        .flexible(true)
        .from_writer(Vec::new());

    writer.write_record(headers.iter().map(|h| h.as_ref()))?;
    for record in records {
        let fields: Vec<F> = record.into_iter().collect();
        match fields.as_slice() {
            // The writer emits `""` for a lone empty field; a bare delimiter
            // parses back to the same single empty value.
            [only] if only.as_ref().is_empty() => writer.write_record([b"", b""])?,
            _ => writer.write_record(&fields)?,
        }
    }

    let bytes = writer
        .into_inner()
        .map_err(|e| CsvError::Write(e.error().to_string()))?;
    String::from_utf8(bytes).map_err(|e| CsvError::Write(e.to_string()))
}

fn delimiter_byte(delimiter: char) -> CsvResult<u8> {
    if delimiter.is_ascii() {
        Ok(delimiter as u8)
    } else {
        Err(CsvError::InvalidDelimiter(delimiter))
    }
}
