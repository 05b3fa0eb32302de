use crate::core::types::Status;
use crate::errors::{Error, Result};

pub const DEFAULT_ELIGIBILITY_PERCENT: f64 = 75.0;
pub const DEFAULT_WARNING_PERCENT: f64 = 65.0;

/// Attendance as a percentage, or `None` when no classes were conducted.
pub fn percentage(attended: u32, conducted: u32) -> Option<f64> {
    percentage_of(u64::from(attended), u64::from(conducted))
}

/// [`percentage`] over widened counts, for sums and projections that can
/// exceed `u32`.
pub fn percentage_of(attended: u64, conducted: u64) -> Option<f64> {
    if conducted == 0 {
        return None;
    }
    Some(attended as f64 * 100.0 / conducted as f64)
}

/// Minimum number of further classes, all attended, needed to reach
/// `threshold`. Zero when already eligible or nothing was conducted.
pub fn required_future_classes(
    attended: u32,
    conducted: u32,
    threshold: EligibilityThreshold,
) -> u32 {
    if conducted == 0 {
        return 0;
    }
    let t = threshold.value();
    let req = (t * f64::from(conducted) - 100.0 * f64::from(attended)) / (100.0 - t);
    if req <= 0.0 {
        return 0;
    }
    req.ceil() as u32
}

/// Percentage needed for exam eligibility. Always in `[0, 100)`, so the
/// projection in [`required_future_classes`] never divides by zero.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
pub struct EligibilityThreshold(f64);

impl EligibilityThreshold {
    pub fn try_new(value: f64) -> Result<Self> {
        if !value.is_finite() || !(0.0..100.0).contains(&value) {
            return Err(Error::config(format!(
                "Eligibility threshold must be at least 0 and below 100, got {value}."
            )));
        }
        Ok(Self(value))
    }

    pub fn value(self) -> f64 {
        self.0
    }

    pub fn is_met(self, percentage: f64) -> bool {
        percentage >= self.0
    }
}

impl Default for EligibilityThreshold {
    fn default() -> Self {
        Self(DEFAULT_ELIGIBILITY_PERCENT)
    }
}

/// Band edges used to classify a course.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Thresholds {
    eligibility: EligibilityThreshold,
    warning: f64,
}

impl Thresholds {
    pub fn try_new(eligibility: f64, warning: f64) -> Result<Self> {
        let eligibility = EligibilityThreshold::try_new(eligibility)?;
        if !warning.is_finite() || warning < 0.0 || warning > eligibility.value() {
            return Err(Error::config(format!(
                "Warning threshold must be between 0 and the eligibility threshold ({}), got {warning}.",
                eligibility.value()
            )));
        }
        Ok(Self {
            eligibility,
            warning,
        })
    }

    pub fn eligibility(&self) -> EligibilityThreshold {
        self.eligibility
    }

    pub fn warning(&self) -> f64 {
        self.warning
    }

    pub fn classify(&self, percentage: f64) -> Status {
        if self.eligibility.is_met(percentage) {
            Status::Safe
        } else if percentage >= self.warning {
            Status::Warning
        } else {
            Status::Critical
        }
    }
}

impl Default for Thresholds {
    fn default() -> Self {
        Self {
            eligibility: EligibilityThreshold::default(),
            warning: DEFAULT_WARNING_PERCENT,
        }
    }
}
