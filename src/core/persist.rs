use crate::core::models::Course;
use crate::errors::Result;
use std::fmt::Write as _;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

/// Where and why a best-effort load stopped reading.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Truncation {
    /// 1-based number of the record that failed to parse.
    pub record: usize,
    pub reason: String,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct LoadedCourses {
    pub courses: Vec<Course>,
    pub truncated: Option<Truncation>,
}

pub fn save_courses(courses: &[Course], path: &Path) -> Result<PathBuf> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)?;
        }
    }

    fs::write(path, render_courses(courses))?;
    Ok(path.to_path_buf())
}

/// Read the store at `path`. A missing file is an empty course list.
pub fn load_courses(path: &Path) -> Result<LoadedCourses> {
    match fs::read_to_string(path) {
        Ok(contents) => Ok(parse_courses(&contents)),
        Err(err) if err.kind() == ErrorKind::NotFound => Ok(LoadedCourses::default()),
        Err(err) => Err(err.into()),
    }
}

pub fn render_courses(courses: &[Course]) -> String {
    let mut out = String::new();
    for c in courses {
        let _ = writeln!(out, "{} {} {}", c.name, c.attended, c.conducted);
    }
    out
}

/// Read whitespace-separated `name attended conducted` triples until the
/// input ends or a triple fails to parse. Everything from the first bad
/// triple onward is dropped.
pub fn parse_courses(text: &str) -> LoadedCourses {
    let mut tokens = text.split_whitespace();
    let mut courses = Vec::new();

    while let Some(name) = tokens.next() {
        let record = courses.len() + 1;
        match parse_record(name, tokens.next(), tokens.next()) {
            Ok(course) => courses.push(course),
            Err(reason) => {
                return LoadedCourses {
                    courses,
                    truncated: Some(Truncation { record, reason }),
                };
            }
        }
    }

    LoadedCourses {
        courses,
        truncated: None,
    }
}

fn parse_record(
    name: &str,
    attended: Option<&str>,
    conducted: Option<&str>,
) -> std::result::Result<Course, String> {
    let (Some(attended), Some(conducted)) = (attended, conducted) else {
        return Err(format!("incomplete record for '{name}'"));
    };
    let attended = parse_count(attended, "attended")?;
    let conducted = parse_count(conducted, "conducted")?;
    Course::new(name, attended, conducted).map_err(|e| e.to_string())
}

fn parse_count(token: &str, field: &str) -> std::result::Result<u32, String> {
    token
        .parse::<u32>()
        .map_err(|_| format!("'{token}' is not a valid {field} count"))
}
