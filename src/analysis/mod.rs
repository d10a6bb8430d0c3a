//! Advisory analysis and faculty load aggregation.
//!
//! Everything here is informational: warnings from [`analyze`] and the
//! load figures from [`weekly_hours`]/[`load_report`] feed form hints and
//! dashboard widgets, and never block a write. The only blocking signal
//! in the crate is a hard conflict from [`crate::conflict::validate`],
//! which `analyze` runs first and surfaces as an error status.

mod advisory;
mod load;

pub use advisory::{
    analyze, AdvisoryWarning, AnalysisResult, AnalysisStatus, AnalyzerConfig, WarningKind,
};
pub use load::{
    classify_load, load_report, weekly_hours, FacultyLoad, LoadStatus, DEFAULT_MAX_WEEKLY_HOURS,
};
