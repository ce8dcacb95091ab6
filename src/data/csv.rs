// CSV row source
// Author: Gabriel Demetrios Lafis

use std::fs::File;
use std::io::{BufReader, Read};
use std::path::{Path, PathBuf};

use csv::StringRecord;
use log::debug;

use super::{DataError, Row};

const UTF8_BOM: char = '\u{feff}';

/// CSV data source with a mandatory header row
pub struct CsvSource {
    path: PathBuf,
    delimiter: u8,
}

impl CsvSource {
    /// Create a new CSV data source
    pub fn new<P: AsRef<Path>>(path: P, delimiter: u8) -> Self {
        CsvSource {
            path: path.as_ref().to_path_buf(),
            delimiter,
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Open the file and read its header
    pub fn open(&self) -> Result<CsvRows<BufReader<File>>, DataError> {
        let file = File::open(&self.path).map_err(|source| DataError::Open {
            path: self.path.clone(),
            source,
        })?;
        debug!("Opened CSV source {}", self.path.display());

        CsvRows::from_reader(BufReader::new(file), self.delimiter)
    }
}

/// Rows of a CSV document in file order
pub struct CsvRows<R: Read> {
    reader: csv::Reader<R>,
    headers: Vec<String>,
    record: StringRecord,
}

impl<R: Read> CsvRows<R> {
    /// Wrap any reader; the first record is taken as the header
    pub fn from_reader(reader: R, delimiter: u8) -> Result<Self, DataError> {
        let mut reader = csv::ReaderBuilder::new()
            .delimiter(delimiter)
            .has_headers(true)
            .flexible(true)
            .from_reader(reader);

        let headers = reader
            .headers()?
            .iter()
            .enumerate()
            .map(|(i, name)| {
                if i == 0 {
                    name.trim_start_matches(UTF8_BOM).to_string()
                } else {
                    name.to_string()
                }
            })
            .collect();

        Ok(CsvRows {
            reader,
            headers,
            record: StringRecord::new(),
        })
    }

    /// Header names with any leading byte-order mark removed
    pub fn headers(&self) -> &[String] {
        &self.headers
    }

    fn to_row(&self) -> Row {
        // Short records leave trailing columns absent; extra cells have no header and are skipped.
        self.headers
            .iter()
            .zip(self.record.iter())
            .map(|(column, value)| (column.as_str(), value))
            .collect()
    }
}

impl<R: Read> Iterator for CsvRows<R> {
    type Item = Result<Row, DataError>;

    fn next(&mut self) -> Option<Self::Item> {
        match self.reader.read_record(&mut self.record) {
            Ok(true) => Some(Ok(self.to_row())),
            Ok(false) => None,
            Err(err) => Some(Err(DataError::from(err))),
        }
    }
}
