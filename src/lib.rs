// RFP Mapper
// Author: Gabriel Demetrios Lafis

//! # RFP Mapper
//!
//! Converts training request-for-proposal records from CSV into one JSON
//! document per row.
//!
//! ## Features
//!
//! - Column-keyed CSV reading in file order
//! - Total row mapping: bad cells degrade to empty values, never errors
//! - Period/dates schedule detection, curriculum and contact parsing
//! - Pretty-printed UTF-8 JSON output named `rfp_<NN>.json`
//!
//! ## Example
//!
//! ```rust
//! use rfp_mapper::{data::{Row, Schedule}, mapping::RowMapper};
//!
//! let row = Row::new()
//!     .with("Course Name", " Rust Basics ")
//!     .with("Schedule Details", "2025-08-10~2025-08-11")
//!     .with("Detailed Curriculum Items", "Intro|2;Deep Dive|4;Bad Entry");
//!
//! let record = RowMapper::new().map(&row);
//!
//! assert_eq!(record.course_name, "Rust Basics");
//! assert_eq!(record.curriculum_items.len(), 2);
//! assert_eq!(
//!     record.schedule,
//!     Schedule::Period { period: "2025-08-10/2025-08-11".to_string() }
//! );
//! ```

pub mod data;
pub mod driver;
pub mod mapping;
pub mod storage;
pub mod utils;

// Re-export main types
pub use data::{CsvSource, MappedRecord, Row, Schedule};
pub use driver::{Driver, RunSummary};
pub use mapping::{map_row, RowMapper};
pub use storage::{JsonFileStorage, RecordSink};
pub use utils::{AppError, Config};
