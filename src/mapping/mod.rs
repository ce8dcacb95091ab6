// Mapping module: turns one CSV row into one schema record
// Author: Gabriel Demetrios Lafis

pub mod parse;

pub use parse::*;

use crate::data::{columns, Budget, Contact, Contacts, MappedRecord, Row, Target, BUDGET_CURRENCY};

/// Maps input rows onto [`MappedRecord`].
///
/// Mapping is deterministic and never fails: missing or malformed
/// columns fall back to empty strings, empty lists, 0 or null.
#[derive(Debug, Clone, Copy, Default)]
pub struct RowMapper;

impl RowMapper {
    pub fn new() -> Self {
        RowMapper
    }

    /// Map a single row
    pub fn map(&self, row: &Row) -> MappedRecord {
        let text = |column: &str| row.get(column).trim().to_string();

        MappedRecord {
            company: text(columns::COMPANY),
            request_date: text(columns::REQUEST_DATE),
            request_type: text(columns::REQUEST_TYPE),
            course_name: text(columns::COURSE_NAME),
            topics: split_list(row.get(columns::TOPICS)),
            description: text(columns::DESCRIPTION),
            target: Target {
                level: text(columns::TARGET_LEVEL),
                size: parse_int(row.get(columns::TARGET_SIZE)).unwrap_or(0),
            },
            learning_objectives: text_block(row.get(columns::LEARNING_OBJECTIVES)),
            scope_of_work: text_block(row.get(columns::SCOPE_OF_WORK)),
            curriculum_items: parse_curriculum(row.get(columns::CURRICULUM_ITEMS)),
            delivery_mode: text(columns::DELIVERY_MODE).to_lowercase(),
            location: text(columns::LOCATION),
            schedule: parse_schedule(row.get(columns::SCHEDULE)),
            budget: Budget {
                amount: parse_int(row.get(columns::BUDGET)),
                currency: BUDGET_CURRENCY.to_string(),
            },
            instructor_requirements: split_list(row.get(columns::INSTRUCTOR_REQUIREMENTS)),
            materials: text_block(row.get(columns::MATERIALS)),
            assessments: text_block(row.get(columns::ASSESSMENTS)),
            quality_sla: text_block(row.get(columns::QUALITY_SLA)),
            success_metrics: text_block(row.get(columns::SUCCESS_METRICS)),
            submission_deadline: normalize_deadline(row.get(columns::SUBMISSION_DEADLINE)),
            contacts: Contacts {
                requester: contact(row, columns::CONTACT_PERSON, columns::CONTACT_INFO),
                purchasing: contact(row, columns::PURCHASING_PERSON, columns::PURCHASING_INFO),
            },
        }
    }
}

fn contact(row: &Row, name_column: &str, info_column: &str) -> Contact {
    let (email, phone) = split_contact(row.get(info_column));
    Contact {
        name: row.get(name_column).trim().to_string(),
        email,
        phone,
    }
}

/// Map a row with the default [`RowMapper`]
pub fn map_row(row: &Row) -> MappedRecord {
    RowMapper::new().map(row)
}
