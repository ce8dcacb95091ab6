// Storage module for writing mapped records
// Author: Gabriel Demetrios Lafis

mod file;

pub use file::*;

use std::path::PathBuf;

use thiserror::Error;

use crate::data::MappedRecord;

/// Destination for mapped records
pub trait RecordSink {
    /// Persist the record for the 1-based row `index`, returning where it went
    fn write(&self, index: usize, record: &MappedRecord) -> Result<PathBuf, StorageError>;
}

/// Represents an error in the storage module
#[derive(Debug, Error)]
pub enum StorageError {
    #[error("cannot create output directory '{}': {source}", path.display())]
    CreateDir {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("cannot write '{}': {source}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("cannot serialize record for '{}': {source}", path.display())]
    Serialize {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}
