//! Grading module: learners, score-to-grade derivation, and the file-based
//! grade report.

pub mod learner;
pub mod report;

pub use learner::{Grade, Learner};
pub use report::{generate_report, parse_line, read_learners, write_report, ReportError};
