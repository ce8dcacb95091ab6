// JSON file storage for mapped records
// Author: Gabriel Demetrios Lafis

use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use crate::data::MappedRecord;
use super::{RecordSink, StorageError};

/// Writes each record to `<dir>/rfp_<NN>.json`
pub struct JsonFileStorage {
    base_dir: PathBuf,
}

impl JsonFileStorage {
    pub const FILE_PREFIX: &'static str = "rfp";

    /// Create a new file storage, creating the directory if needed
    pub fn new<P: AsRef<Path>>(base_dir: P) -> Result<Self, StorageError> {
        let base_dir = base_dir.as_ref().to_path_buf();

        fs::create_dir_all(&base_dir).map_err(|source| StorageError::CreateDir {
            path: base_dir.clone(),
            source,
        })?;

        Ok(JsonFileStorage { base_dir })
    }

    /// Output path for a 1-based row index, zero-padded to two digits
    pub fn path_for(&self, index: usize) -> PathBuf {
        self.base_dir
            .join(format!("{}_{:02}.json", Self::FILE_PREFIX, index))
    }
}

impl RecordSink for JsonFileStorage {
    fn write(&self, index: usize, record: &MappedRecord) -> Result<PathBuf, StorageError> {
        let path = self.path_for(index);
        let write_err = |source: std::io::Error| StorageError::Write {
            path: path.clone(),
            source,
        };

        let file = File::create(&path).map_err(write_err)?;
        let mut writer = BufWriter::new(file);

        // serde_json leaves non-ASCII text unescaped and indents with two spaces.
        serde_json::to_writer_pretty(&mut writer, record).map_err(|source| {
            StorageError::Serialize {
                path: path.clone(),
                source,
            }
        })?;
        writer.flush().map_err(write_err)?;

        Ok(path)
    }
}
