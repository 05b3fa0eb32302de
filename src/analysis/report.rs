use crate::core::attendance::{Thresholds, percentage, percentage_of, required_future_classes};
use crate::core::models::Course;
use crate::core::types::Status;
use crate::errors::{Error, Result};

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Standing {
    /// No classes conducted; excluded from every aggregate.
    NotApplicable,
    Assessed {
        percentage: f64,
        status: Status,
        required_classes: u32,
    },
}

#[derive(Debug, Clone, PartialEq)]
pub struct CourseReport {
    pub name: String,
    pub attended: u32,
    pub conducted: u32,
    pub standing: Standing,
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct SemesterSummary {
    /// Every course, including ones with nothing conducted.
    pub total_courses: usize,
    pub total_attended: u64,
    pub total_conducted: u64,
    pub percentage: Option<f64>,
    pub safe: usize,
    pub warning: usize,
    pub critical: usize,
    pub eligible: bool,
}

#[derive(Debug, Clone, PartialEq)]
pub struct SemesterReport {
    pub courses: Vec<CourseReport>,
    pub summary: SemesterSummary,
}

pub fn report(courses: &[Course], thresholds: &Thresholds) -> Result<SemesterReport> {
    if courses.is_empty() {
        return Err(Error::NoCourses);
    }

    let mut summary = SemesterSummary {
        total_courses: courses.len(),
        ..SemesterSummary::default()
    };

    let rows = courses
        .iter()
        .map(|c| {
            let standing = assess(c, thresholds);
            if let Standing::Assessed { status, .. } = standing {
                summary.total_attended += u64::from(c.attended);
                summary.total_conducted += u64::from(c.conducted);
                match status {
                    Status::Safe => summary.safe += 1,
                    Status::Warning => summary.warning += 1,
                    Status::Critical => summary.critical += 1,
                }
            }
            CourseReport {
                name: c.name.clone(),
                attended: c.attended,
                conducted: c.conducted,
                standing,
            }
        })
        .collect();

    // Totals are summed in u64 so many large courses can't overflow.
    summary.percentage = percentage_of(summary.total_attended, summary.total_conducted);
    summary.eligible = summary
        .percentage
        .is_some_and(|pct| thresholds.eligibility().is_met(pct));

    Ok(SemesterReport {
        courses: rows,
        summary,
    })
}

fn assess(course: &Course, thresholds: &Thresholds) -> Standing {
    match percentage(course.attended, course.conducted) {
        Some(pct) => Standing::Assessed {
            percentage: pct,
            status: thresholds.classify(pct),
            required_classes: required_future_classes(
                course.attended,
                course.conducted,
                thresholds.eligibility(),
            ),
        },
        None => Standing::NotApplicable,
    }
}
