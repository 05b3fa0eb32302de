use strum_macros::{AsRefStr, Display};

/// Attendance band a course falls into.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, AsRefStr)]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE")]
pub enum Status {
    Safe,
    Warning,
    Critical,
}

/// Label used wherever a percentage or status can't be computed yet.
pub const NOT_APPLICABLE: &str = "N/A";
