pub mod analyzer;
pub mod error;
pub mod rect;
pub mod report;
pub mod sweep;

pub use analyzer::Analyzer;
pub use error::AnalysisError;
pub use rect::Rect;
pub use report::{MaxOverlapPoint, OverlapRegion, Stats};
