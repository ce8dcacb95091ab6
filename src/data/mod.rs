// Data module for reading RFP rows and describing the output schema
// Author: Gabriel Demetrios Lafis

mod csv;
mod schema;

pub use self::csv::*;
pub use schema::*;

use std::collections::HashMap;
use std::path::PathBuf;

use thiserror::Error;

/// One CSV data line keyed by column header.
///
/// Absent columns read as the empty string.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Row {
    values: HashMap<String, String>,
}

impl Row {
    /// Create an empty row
    pub fn new() -> Self {
        Row {
            values: HashMap::new(),
        }
    }

    /// Set a column value, replacing any previous one
    pub fn insert<K: Into<String>, V: Into<String>>(&mut self, column: K, value: V) {
        self.values.insert(column.into(), value.into());
    }

    /// Builder-style variant of [`Row::insert`]
    pub fn with<K: Into<String>, V: Into<String>>(mut self, column: K, value: V) -> Self {
        self.insert(column, value);
        self
    }

    /// Raw value of a column, or `""` when the column is absent
    pub fn get(&self, column: &str) -> &str {
        self.values.get(column).map(String::as_str).unwrap_or("")
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for Row {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut row = Row::new();
        for (column, value) in iter {
            row.insert(column, value);
        }
        row
    }
}

/// Represents an error in the data module
#[derive(Debug, Error)]
pub enum DataError {
    #[error("cannot open '{}': {source}", path.display())]
    Open {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("CSV error: {0}")]
    Csv(#[from] ::csv::Error),
}
