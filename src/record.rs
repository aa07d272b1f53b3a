use serde::Serialize;

use crate::availability::is_available;
use crate::schema::{Field, ResolvedSchema};

/// One student's details, read from a sheet row through a resolved schema
///
/// Every value is the raw cell text, or an empty string when the column was
/// not found in the header or the row stops short of it.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StudentRecord {
    pub name: String,
    pub roll_number: String,
    pub address: String,
    pub notes: String,
    pub course: String,
    #[serde(skip)]
    pub marksheet_status: String,
}

impl StudentRecord {
    pub fn from_row<S: AsRef<str>>(schema: &ResolvedSchema, row: &[S]) -> Self {
        let text = |field| schema.text(row, field).to_string();

        StudentRecord {
            name: text(Field::Name),
            roll_number: text(Field::RollNumber),
            address: text(Field::Address),
            notes: text(Field::Notes),
            course: text(Field::Course),
            marksheet_status: text(Field::Marksheet),
        }
    }

    pub fn is_available(&self) -> bool {
        is_available(&self.marksheet_status)
    }
}

/// Per-student entry of a course listing
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StudentSummary {
    pub name: String,
    pub roll_number: String,
    pub available: bool,
}

impl StudentSummary {
    pub fn from_row<S: AsRef<str>>(schema: &ResolvedSchema, row: &[S]) -> Self {
        StudentSummary {
            name: schema.text(row, Field::Name).to_string(),
            roll_number: schema.text(row, Field::RollNumber).to_string(),
            available: is_available(schema.text(row, Field::Marksheet)),
        }
    }
}

/// Response for a roll number or name lookup
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SingleResult {
    pub available: bool,
    #[serde(flatten)]
    pub student: StudentRecord,
    multiple_results: bool,
}

impl SingleResult {
    pub fn new(student: StudentRecord) -> Self {
        SingleResult {
            available: student.is_available(),
            student,
            multiple_results: false,
        }
    }
}

/// Response for a course search
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CourseResult {
    /// The course query exactly as the caller sent it
    pub course: String,
    multiple_results: bool,
    pub students: Vec<StudentSummary>,
}

impl CourseResult {
    pub fn new(course: impl Into<String>, students: Vec<StudentSummary>) -> Self {
        CourseResult {
            course: course.into(),
            multiple_results: true,
            students,
        }
    }
}

/// Outcome of a successful lookup, serialized as the HTTP response body
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum SearchResult {
    Single(SingleResult),
    Course(CourseResult),
}

impl SearchResult {
    pub fn is_multiple(&self) -> bool {
        matches!(self, SearchResult::Course(_))
    }
}
