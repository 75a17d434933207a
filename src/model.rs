// Core structs: CourseQuery, ComparisonResult
use thiserror::Error;

/// One institution's side of a comparison: where to look and what to look for.
#[derive(Debug, Clone)]
pub struct CourseQuery {
    pub catalog_url: String,
    pub course_code: String,
}

/// The unit handed to the report sink. Immutable once built.
#[derive(Debug, Clone)]
pub struct ComparisonResult {
    pub code1: String,
    pub description1: String,
    pub code2: String,
    pub description2: String,
    /// Similarity in [0, 100], rounded to 2 decimal places.
    pub score: f64,
}

#[derive(Debug, Error)]
pub enum FetchError {
    #[error("http error: {0}")]
    Http(String),
    #[error("request timed out")]
    Timeout,
    #[error("unexpected status code {0}")]
    BadStatus(u16),
}

#[derive(Debug, Error)]
pub enum ReportError {
    #[error("pdf generation failed: {0}")]
    Pdf(String),
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}
