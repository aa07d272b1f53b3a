/*!
# Marksheet Finder

A small web application for checking whether a university marksheet is ready
for collection, backed by a spreadsheet.

## Overview

Students search by roll number, name, or course. Each request reads the whole
sheet fresh from its source, works out which columns hold which fields from
the header row, and answers with either one student's record or the list of
students enrolled in a matching course.

## Architecture

### Frontend Layer
- **Technologies**: HTML, CSS, JavaScript
- A single search form (roll number / name / course) that calls the lookup
  endpoint and renders a result card or a course table

### Backend Layer
- **Technologies**: Rust, axum
- **Core Components**:
  - Column Resolver - maps header cells to semantic fields by case-insensitive
    substring match, first match wins
  - Single-Record Locator - exact, case and whitespace insensitive match on
    roll number or name, first row wins
  - Course Filter - substring match on the course column, source order kept
  - Availability Normalizer - reads the marksheet status cell, failing closed

### Data Layer
- Google Sheets through the Sheets v4 API, authenticated per request with a
  service account
- A local CSV export, for running without credentials
- Nothing is written back and nothing is cached between requests

## Modules

- **schema**: header resolution into a typed column map
- **availability**: marksheet status normalization
- **record**: student records and response shapes
- **lookup**: request validation, matching, and the lookup service
- **sheets**: data sources (Google Sheets, CSV, in-memory)
- **config**: command-line and environment configuration
- **error**: error taxonomy and HTTP status mapping
- **app**: routing and handlers (`web` feature)

## REST API Endpoints

- `/lookup?rollNumber=..` | `?name=..` | `?course=..` - runs a search
- `/api/check-marksheet` - same as `/lookup`
- `/` - search page
*/

pub mod availability;
pub mod config;
pub mod error;
pub mod lookup;
pub mod record;
pub mod schema;
pub mod sheets;

#[cfg(feature = "web")]
pub mod app;

pub use availability::is_available;
pub use config::{Config, ConfigError};
pub use error::{LookupError, SheetsError};
pub use lookup::{LookupService, SearchParams, SearchRequest, filter_course, locate_student, search};
pub use record::{CourseResult, SearchResult, SingleResult, StudentRecord, StudentSummary};
pub use schema::{Field, ResolvedSchema};
pub use sheets::{CsvFile, DataSource, GoogleSheets, InMemorySheet, Row, ServiceAccount, SheetSource};
