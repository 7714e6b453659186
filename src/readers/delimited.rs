use crate::error::{DashboardError, Result};
use crate::utils::constants::DEFAULT_DELIMITER;
use serde::de::DeserializeOwned;
use std::borrow::Cow;
use std::path::Path;
use tracing::debug;

/// Reads a delimiter-separated file with a header row into typed records
#[derive(Debug, Clone, Copy)]
pub struct DelimitedReader {
    delimiter: u8,
}

impl DelimitedReader {
    pub fn new(delimiter: u8) -> Self {
        Self { delimiter }
    }

    pub fn with_delimiter_char(delimiter: char) -> Result<Self> {
        if !delimiter.is_ascii() {
            return Err(DashboardError::InvalidFormat(format!(
                "Delimiter must be a single ASCII character, got: '{}'",
                delimiter
            )));
        }
        Ok(Self::new(delimiter as u8))
    }

    pub fn delimiter(&self) -> u8 {
        self.delimiter
    }

    /// Read all records of `path`, failing if any `required` column is absent
    /// or any row does not fit the header.
    pub fn read_records<T: DeserializeOwned>(
        &self,
        path: &Path,
        required: &[&str],
    ) -> Result<Vec<T>> {
        let bytes =
            std::fs::read(path).map_err(|e| DashboardError::data_load(path, e.to_string()))?;
        let text = decode(&bytes);

        let mut reader = csv::ReaderBuilder::new()
            .delimiter(self.delimiter)
            .trim(csv::Trim::All)
            .from_reader(text.as_bytes());

        let headers = reader
            .headers()
            .map_err(|e| DashboardError::data_load(path, e.to_string()))?
            .clone();

        for column in required {
            if !headers.iter().any(|h| h == *column) {
                return Err(DashboardError::MissingColumn {
                    path: path.display().to_string(),
                    column: column.to_string(),
                });
            }
        }

        let mut records = Vec::new();
        for result in reader.deserialize::<T>() {
            let record = result.map_err(|e| DashboardError::data_load(path, e.to_string()))?;
            records.push(record);
        }

        debug!(path = %path.display(), records = records.len(), "read delimited file");
        Ok(records)
    }
}

impl Default for DelimitedReader {
    fn default() -> Self {
        Self::new(DEFAULT_DELIMITER as u8)
    }
}

/// UTF-8 with BOM removal, falling back to Windows-1252
fn decode(bytes: &[u8]) -> Cow<'_, str> {
    let (text, had_errors) = encoding_rs::UTF_8.decode_with_bom_removal(bytes);
    if !had_errors {
        return text;
    }
    let (text, _, _) = encoding_rs::WINDOWS_1252.decode(bytes);
    text
}
