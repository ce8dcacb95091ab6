// Output schema for mapped RFP records
// Author: Gabriel Demetrios Lafis

use serde::{Deserialize, Serialize};

/// Currency every budget amount is expressed in
pub const BUDGET_CURRENCY: &str = "KRW";

/// Source column names expected in the RFP CSV header
pub mod columns {
    pub const COMPANY: &str = "Company/Organization";
    pub const REQUEST_DATE: &str = "Request Date";
    pub const REQUEST_TYPE: &str = "Request Type";
    pub const COURSE_NAME: &str = "Course Name";
    pub const TOPICS: &str = "Education Topic(s)";
    pub const DESCRIPTION: &str = "Free Form Description";
    pub const TARGET_LEVEL: &str = "Target Level";
    pub const TARGET_SIZE: &str = "Target Audience Size";
    pub const LEARNING_OBJECTIVES: &str = "Learning Objectives";
    pub const SCOPE_OF_WORK: &str = "Scope of Work";
    pub const CURRICULUM_ITEMS: &str = "Detailed Curriculum Items";
    pub const DELIVERY_MODE: &str = "Delivery Mode";
    pub const LOCATION: &str = "Location";
    pub const SCHEDULE: &str = "Schedule Details";
    pub const BUDGET: &str = "Budget (KRW)";
    pub const INSTRUCTOR_REQUIREMENTS: &str = "Instructor Requirements";
    pub const MATERIALS: &str = "Materials / Equipment";
    pub const ASSESSMENTS: &str = "Assessment / Tasks";
    pub const QUALITY_SLA: &str = "Quality / SLA";
    pub const SUCCESS_METRICS: &str = "Success Metrics";
    pub const SUBMISSION_DEADLINE: &str = "Submission Deadline";
    pub const CONTACT_PERSON: &str = "Contact Person";
    pub const CONTACT_INFO: &str = "Contact Email/Phone";
    pub const PURCHASING_PERSON: &str = "Purchasing Person";
    pub const PURCHASING_INFO: &str = "Purchasing Contact Info";

    /// Every column the mapper reads, in output order
    pub const ALL: &[&str] = &[
        COMPANY,
        REQUEST_DATE,
        REQUEST_TYPE,
        COURSE_NAME,
        TOPICS,
        DESCRIPTION,
        TARGET_LEVEL,
        TARGET_SIZE,
        LEARNING_OBJECTIVES,
        SCOPE_OF_WORK,
        CURRICULUM_ITEMS,
        DELIVERY_MODE,
        LOCATION,
        SCHEDULE,
        BUDGET,
        INSTRUCTOR_REQUIREMENTS,
        MATERIALS,
        ASSESSMENTS,
        QUALITY_SLA,
        SUCCESS_METRICS,
        SUBMISSION_DEADLINE,
        CONTACT_PERSON,
        CONTACT_INFO,
        PURCHASING_PERSON,
        PURCHASING_INFO,
    ];
}

/// One RFP row mapped onto the target JSON schema.
///
/// Field order here is the key order of the serialized document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MappedRecord {
    pub company: String,
    pub request_date: String,
    pub request_type: String,
    pub course_name: String,
    pub topics: Vec<String>,
    pub description: String,
    pub target: Target,
    pub learning_objectives: Vec<String>,
    pub scope_of_work: Vec<String>,
    pub curriculum_items: Vec<CurriculumItem>,
    pub delivery_mode: String,
    pub location: String,
    pub schedule: Schedule,
    pub budget: Budget,
    pub instructor_requirements: Vec<String>,
    pub materials: Vec<String>,
    pub assessments: Vec<String>,
    pub quality_sla: Vec<String>,
    pub success_metrics: Vec<String>,
    pub submission_deadline: String,
    pub contacts: Contacts,
}

/// Audience level and head count
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Target {
    pub level: String,
    pub size: i64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CurriculumItem {
    pub title: String,
    pub duration_hours: i64,
}

/// Either a `start/end` range or a list of discrete dates
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum Schedule {
    Period { period: String },
    Dates { dates: Vec<String> },
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Budget {
    /// `None` when the source amount is missing or not an integer
    pub amount: Option<i64>,
    pub currency: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Contacts {
    pub requester: Contact,
    pub purchasing: Contact,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Contact {
    pub name: String,
    pub email: String,
    pub phone: String,
}
