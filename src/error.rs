use thiserror::Error;

/// Result type for lookup operations.
pub type Result<T> = std::result::Result<T, LookupError>;

/// Failures while reading rows from the spreadsheet source
///
/// None of these are shown to the caller verbatim; the lookup service logs
/// them and answers with a generic message.
#[derive(Error, Debug)]
pub enum SheetsError {
    /// The service account key could not be loaded or the JWT could not be signed
    #[error("Invalid service account credentials: {0}")]
    Credentials(#[from] jsonwebtoken::errors::Error),

    /// Transport or decoding failure talking to the remote service
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// The remote service answered with a non-success status
    #[error("{endpoint} request failed with {status}: {body}")]
    Status {
        endpoint: &'static str,
        status: reqwest::StatusCode,
        body: String,
    },

    /// A local sheet export could not be read
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// A local sheet export is not valid CSV
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// The configured spreadsheet location is unusable
    #[error("Invalid sheet location: {0}")]
    Location(String),
}

/// Errors a lookup request can end in
///
/// The `Display` text of every variant is the message sent to the client.
#[derive(Error, Debug)]
pub enum LookupError {
    /// None of `rollNumber`, `name` or `course` was supplied
    #[error("At least one search parameter (rollNumber, name, or course) is required")]
    MissingParameter,

    /// A course search against a sheet without a course column
    #[error("Invalid search parameters")]
    InvalidSearch,

    /// The sheet is empty or holds only a header row
    #[error("No student data found")]
    NoStudentData,

    /// No row matched the roll number or name
    #[error("Student not found")]
    StudentNotFound,

    /// No row's course contained the query
    #[error("No students found for this course")]
    NoStudentsForCourse,

    /// Authentication or fetch against the data source failed
    #[error("Failed to check marksheet availability")]
    Upstream(#[from] SheetsError),
}

impl LookupError {
    /// HTTP status code this error is reported with.
    pub fn http_status(&self) -> u16 {
        match self {
            LookupError::MissingParameter | LookupError::InvalidSearch => 400,
            LookupError::NoStudentData
            | LookupError::StudentNotFound
            | LookupError::NoStudentsForCourse => 404,
            LookupError::Upstream(_) => 500,
        }
    }

    pub fn is_not_found(&self) -> bool {
        self.http_status() == 404
    }
}
