//! Derived views over the course list: the semester report and
//! per-course forecasts. Both are pure functions of a snapshot.

pub mod forecast;
pub mod report;
#[cfg(test)]
mod tests;

pub use forecast::{Forecast, forecast};
pub use report::{CourseReport, SemesterReport, SemesterSummary, Standing, report};
