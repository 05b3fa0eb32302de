use std::fmt;

use crate::core::attendance::percentage;
use crate::errors::{Error, Result};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Course {
    pub name: String,
    pub attended: u32,
    pub conducted: u32,
}

impl Course {
    /// Build a course, rejecting names the store can't hold and
    /// attendance above the conducted count.
    pub fn new(name: impl Into<String>, attended: u32, conducted: u32) -> Result<Self> {
        let name = name.into();
        validate_name(&name)?;
        validate_counts(attended, conducted)?;
        Ok(Self {
            name,
            attended,
            conducted,
        })
    }

    pub fn modify(&mut self, attended: u32, conducted: u32) -> Result<&Self> {
        validate_counts(attended, conducted)?;
        self.attended = attended;
        self.conducted = conducted;
        Ok(self)
    }

    pub fn percentage(&self) -> Option<f64> {
        percentage(self.attended, self.conducted)
    }

    pub fn has_classes(&self) -> bool {
        self.conducted > 0
    }
}

impl fmt::Display for Course {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Course(name='{}', attended={}, conducted={})",
            self.name, self.attended, self.conducted
        )
    }
}

pub fn validate_name(name: &str) -> Result<()> {
    if name.is_empty() || name.chars().any(char::is_whitespace) {
        return Err(Error::InvalidCourseName(name.to_string()));
    }
    Ok(())
}

pub fn validate_counts(attended: u32, conducted: u32) -> Result<()> {
    if attended > conducted {
        return Err(Error::invalid_attendance(attended, conducted));
    }
    Ok(())
}
