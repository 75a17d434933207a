// Report module: turns a ComparisonResult into a downloadable artifact.

pub mod pdf;

pub use pdf::PdfReport;

use crate::model::{ComparisonResult, ReportError};
use std::fs;

pub trait ReportSink {
    /// Renders the comparison into a binary artifact. The pipeline treats the
    /// byte format as opaque.
    fn render(&self, result: &ComparisonResult) -> Result<Vec<u8>, ReportError>;
}

/// Delivers a rendered artifact to disk.
pub fn write_artifact(path: &str, bytes: &[u8]) -> Result<(), ReportError> {
    fs::write(path, bytes)?;
    Ok(())
}
