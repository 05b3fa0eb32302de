use crate::core::attendance::{EligibilityThreshold, percentage_of};
use crate::core::models::Course;

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Forecast {
    /// No classes conducted yet, so there is nothing to project from.
    NotApplicable,
    Projected { percentage: f64, eligible: bool },
}

/// Project `course` forward by `future_classes`, all of them attended.
pub fn forecast(course: &Course, future_classes: u32, threshold: EligibilityThreshold) -> Forecast {
    if !course.has_classes() {
        return Forecast::NotApplicable;
    }
    let attended = u64::from(course.attended) + u64::from(future_classes);
    let conducted = u64::from(course.conducted) + u64::from(future_classes);
    match percentage_of(attended, conducted) {
        Some(pct) => Forecast::Projected {
            percentage: pct,
            eligible: threshold.is_met(pct),
        },
        None => Forecast::NotApplicable,
    }
}
