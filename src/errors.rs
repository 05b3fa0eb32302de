use thiserror::Error;

// Re-export a simple Result alias used across the crate.
pub type Result<T> = std::result::Result<T, Error>;

/// Everything that can go wrong while managing courses.
#[derive(Error, Debug)]
pub enum Error {
    // ---- Course records -----------------------------------------------------
    /// Attended classes exceed conducted classes.
    #[error("Invalid attendance details: {attended} attended out of {conducted} conducted.")]
    InvalidAttendance { attended: u32, conducted: u32 },

    /// Course names are stored whitespace-separated, so they must be a single word.
    #[error("Invalid course name '{0}': names must be non-empty and contain no spaces.")]
    InvalidCourseName(String),

    /// Selection outside `1..=len`.
    #[error("Invalid selection {index}: choose a course between 1 and {len}.")]
    OutOfRange { index: usize, len: usize },

    #[error("No courses available.")]
    NoCourses,

    // ---- Shell input --------------------------------------------------------
    /// Input that couldn't be read as the expected value.
    #[error("Parse error: {0}")]
    Parse(String),

    // ---- Config -------------------------------------------------------------
    #[error("Config error: {0}")]
    Config(String),

    // ---- Plumbing / Wrappers ------------------------------------------------
    /// IO passthrough (store and config files).
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Serde JSON passthrough (config decode/encode).
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

// ----------------------- Convenience constructors ----------------------------

impl Error {
    pub fn parse<S: Into<String>>(msg: S) -> Self {
        Error::Parse(msg.into())
    }

    pub fn config<S: Into<String>>(msg: S) -> Self {
        Error::Config(msg.into())
    }

    pub fn invalid_attendance(attended: u32, conducted: u32) -> Self {
        Error::InvalidAttendance {
            attended,
            conducted,
        }
    }
}
