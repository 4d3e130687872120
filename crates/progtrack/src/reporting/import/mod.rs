mod parser;

use crate::reporting::ratings::RatingRecord;
use std::io::Read;
use std::path::Path;

#[derive(Debug)]
pub enum StatusImportError {
    Io(std::io::Error),
    Csv(csv::Error),
}

impl std::fmt::Display for StatusImportError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            StatusImportError::Io(err) => write!(f, "failed to read status export: {}", err),
            StatusImportError::Csv(err) => write!(f, "invalid status CSV data: {}", err),
        }
    }
}

impl std::error::Error for StatusImportError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            StatusImportError::Io(err) => Some(err),
            StatusImportError::Csv(err) => Some(err),
        }
    }
}

impl From<std::io::Error> for StatusImportError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err)
    }
}

impl From<csv::Error> for StatusImportError {
    fn from(err: csv::Error) -> Self {
        Self::Csv(err)
    }
}

/// Reads agency status exports into rating records. Rows without a program
/// name are dropped; unknown status strings survive the import and fall to
/// `not-started` during classification.
pub struct StatusImporter;

impl StatusImporter {
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Vec<RatingRecord>, StatusImportError> {
        let file = std::fs::File::open(path)?;
        Self::from_reader(file)
    }

    pub fn from_reader<R: Read>(reader: R) -> Result<Vec<RatingRecord>, StatusImportError> {
        Ok(parser::parse_records(reader)?)
    }
}
