use log::{debug, error, info};
use serde::Deserialize;

use crate::error::{LookupError, Result};
use crate::record::{CourseResult, SearchResult, SingleResult, StudentRecord, StudentSummary};
use crate::schema::{Field, ResolvedSchema};
use crate::sheets::{Row, SheetSource};

/// Raw query parameters of a lookup request
#[derive(Clone, Debug, Default, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct SearchParams {
    pub roll_number: Option<String>,
    pub name: Option<String>,
    pub course: Option<String>,
}

/// The one search a request is answered with
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SearchRequest {
    RollNumber(String),
    Name(String),
    Course(String),
}

impl SearchParams {
    /// Collect parameters from decoded query pairs
    ///
    /// A repeated key keeps its first value; unknown keys are ignored.
    pub fn from_pairs<I, K, V>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: Into<String>,
    {
        let mut params = SearchParams::default();
        for (key, value) in pairs {
            let slot = match key.as_ref() {
                "rollNumber" => &mut params.roll_number,
                "name" => &mut params.name,
                "course" => &mut params.course,
                _ => continue,
            };
            if slot.is_none() {
                *slot = Some(value.into());
            }
        }
        params
    }

    /// Pick the parameter to honour: roll number first, then name, then
    /// course. Empty values count as absent; extra parameters are ignored.
    pub fn into_request(self) -> Result<SearchRequest> {
        let present = |value: Option<String>| value.filter(|v| !v.is_empty());

        if let Some(roll_number) = present(self.roll_number) {
            Ok(SearchRequest::RollNumber(roll_number))
        } else if let Some(name) = present(self.name) {
            Ok(SearchRequest::Name(name))
        } else if let Some(course) = present(self.course) {
            Ok(SearchRequest::Course(course))
        } else {
            Err(LookupError::MissingParameter)
        }
    }
}

/// First data row whose `field` cell equals `key`, ignoring case and
/// surrounding whitespace on both sides
///
/// Rows are scanned in source order, so duplicates resolve to the earliest.
/// Missing cells and an unresolved column never match.
pub fn locate_student<'a>(
    rows: &'a [Row],
    schema: &ResolvedSchema,
    field: Field,
    key: &str,
) -> Option<&'a Row> {
    let key = key.trim().to_lowercase();
    rows.iter().find(|row| {
        schema
            .cell(row.as_slice(), field)
            .is_some_and(|cell| cell.trim().to_lowercase() == key)
    })
}

/// Every data row whose course cell contains `course`, ignoring case and
/// surrounding whitespace, in source order
///
/// Returns nothing when the sheet has no course column.
pub fn filter_course(rows: &[Row], schema: &ResolvedSchema, course: &str) -> Vec<StudentSummary> {
    if schema.course.is_none() {
        return Vec::new();
    }

    let needle = course.trim().to_lowercase();
    rows.iter()
        .filter(|row| {
            schema
                .text(row.as_slice(), Field::Course)
                .trim()
                .to_lowercase()
                .contains(&needle)
        })
        .map(|row| StudentSummary::from_row(schema, row.as_slice()))
        .collect()
}

/// Answer `request` from a fetched sheet whose first row is the header.
pub fn search(sheet: &[Row], request: &SearchRequest) -> Result<SearchResult> {
    let Some((header, rows)) = sheet.split_first() else {
        return Err(LookupError::NoStudentData);
    };
    if rows.is_empty() {
        return Err(LookupError::NoStudentData);
    }

    let schema = ResolvedSchema::resolve(header.as_slice());
    debug!(
        "Resolved columns {:?} over {} data rows (unresolved: {:?})",
        schema,
        rows.len(),
        schema.unresolved()
    );

    match request {
        SearchRequest::RollNumber(key) => find_single(rows, &schema, Field::RollNumber, key),
        SearchRequest::Name(key) => find_single(rows, &schema, Field::Name, key),
        SearchRequest::Course(course) => {
            if schema.course.is_none() {
                return Err(LookupError::InvalidSearch);
            }

            let students = filter_course(rows, &schema, course);
            if students.is_empty() {
                return Err(LookupError::NoStudentsForCourse);
            }
            Ok(SearchResult::Course(CourseResult::new(course.as_str(), students)))
        }
    }
}

fn find_single(rows: &[Row], schema: &ResolvedSchema, field: Field, key: &str) -> Result<SearchResult> {
    let row = locate_student(rows, schema, field, key).ok_or(LookupError::StudentNotFound)?;
    let student = StudentRecord::from_row(schema, row.as_slice());
    Ok(SearchResult::Single(SingleResult::new(student)))
}

/// Runs lookups against a sheet source, reading the sheet fresh each time
#[derive(Debug)]
pub struct LookupService<S> {
    source: S,
}

impl<S: SheetSource> LookupService<S> {
    pub fn new(source: S) -> Self {
        LookupService { source }
    }

    pub fn source(&self) -> &S {
        &self.source
    }

    /// Validate `params`, fetch the sheet and run the search
    ///
    /// Parameter validation happens before the sheet is fetched. Upstream
    /// failures are logged here with their detail; the returned error only
    /// carries the generic message.
    pub async fn lookup(&self, params: SearchParams) -> Result<SearchResult> {
        let request = params.into_request()?;

        let sheet = self.source.fetch_rows().await.map_err(|e| {
            error!("Error accessing {}: {}", self.source.describe(), e);
            LookupError::from(e)
        })?;

        let outcome = search(&sheet, &request);
        match &outcome {
            Ok(result) => debug!("{:?} answered (multiple results: {})", request, result.is_multiple()),
            Err(e) => info!("{:?}: {}", request, e),
        }
        outcome
    }
}
