use thiserror::Error;

/// Errors surfaced by analysis queries.
///
/// All failures are local and synchronous; there is no I/O to retry.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum AnalysisError {
    /// The rectangles sum to zero individual area, so coverage
    /// efficiency is undefined.
    #[error("total rectangle area is zero, coverage efficiency is undefined")]
    ZeroTotalArea,
}
