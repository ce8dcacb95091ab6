// Driver: reads the CSV, maps every row and writes one document per row
// Author: Gabriel Demetrios Lafis

use std::io::Read;
use std::path::PathBuf;

use log::{debug, info, warn};

use crate::data::{columns, CsvRows, CsvSource};
use crate::mapping::RowMapper;
use crate::storage::{JsonFileStorage, RecordSink};
use crate::utils::{missing_columns, AppError, AppResult, Config};

/// Outcome of a completed run
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RunSummary {
    /// Paths written, in row order
    pub files: Vec<PathBuf>,
}

impl RunSummary {
    pub fn rows(&self) -> usize {
        self.files.len()
    }
}

/// Sequential CSV-to-JSON conversion
pub struct Driver<S: RecordSink> {
    source: CsvSource,
    sink: S,
    mapper: RowMapper,
    strict_headers: bool,
}

impl Driver<JsonFileStorage> {
    /// Build a driver writing JSON files as described by `config`
    pub fn from_config(config: &Config) -> AppResult<Self> {
        let source = CsvSource::new(&config.input.path, config.delimiter_byte()?);
        let sink = JsonFileStorage::new(&config.output.dir)?;

        Ok(Driver::new(source, sink).with_strict_headers(config.mapping.strict_headers))
    }
}

impl<S: RecordSink> Driver<S> {
    pub fn new(source: CsvSource, sink: S) -> Self {
        Driver {
            source,
            sink,
            mapper: RowMapper::new(),
            strict_headers: false,
        }
    }

    /// Reject inputs whose header lacks expected columns
    pub fn with_strict_headers(mut self, strict: bool) -> Self {
        self.strict_headers = strict;
        self
    }

    /// Convert the configured source file
    pub fn run(&self) -> AppResult<RunSummary> {
        info!("Reading RFP rows from {}", self.source.path().display());
        let rows = self.source.open()?;
        self.process(rows)
    }

    /// Convert already-opened rows; row numbering starts at 1
    pub fn process<R: Read>(&self, rows: CsvRows<R>) -> AppResult<RunSummary> {
        self.check_headers(rows.headers())?;

        let mut summary = RunSummary::default();
        for (offset, row) in rows.enumerate() {
            let index = offset + 1;
            let row = row?;
            let record = self.mapper.map(&row);
            debug!("Row {} mapped: {}", index, record.course_name);

            let path = self.sink.write(index, &record)?;
            println!("Wrote {}", path.display());
            summary.files.push(path);
        }

        info!("Mapped {} rows", summary.rows());
        Ok(summary)
    }

    fn check_headers(&self, headers: &[String]) -> AppResult<()> {
        let missing = missing_columns(headers, columns::ALL);
        if missing.is_empty() {
            return Ok(());
        }

        if self.strict_headers {
            return Err(AppError::MissingColumns(missing));
        }
        warn!("Missing columns will map to defaults: {}", missing.join(", "));
        Ok(())
    }
}
