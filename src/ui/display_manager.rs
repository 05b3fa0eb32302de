use crate::analysis::{CourseReport, Forecast, SemesterReport, SemesterSummary, Standing};
use crate::config::Config;
use crate::core::repository::CourseRepository;
use crate::core::types::{NOT_APPLICABLE, Status};
use crate::logging::{LogTarget, Logger};
use crate::ui::ansi::{FG_GREEN, FG_RED, FG_YELLOW, STYLE_RESET};
use crate::ui::table_printer::{Column, TablePrinter};
use std::io::{self, Write};

const COURSE_LIST_COLUMNS: [Column<'static>; 4] = [
    Column::right("NO"),
    Column::left("COURSE"),
    Column::right("ATTENDED"),
    Column::right("CONDUCTED"),
];

const REPORT_COLUMNS: [Column<'static>; 5] = [
    Column::left("COURSE"),
    Column::right("ATTENDANCE"),
    Column::right("PERCENT"),
    Column::left("STATUS"),
    Column::right("REQUIRED"),
];

const SUMMARY_COLUMNS: [Column<'static>; 2] = [Column::left("METRIC"), Column::left("VALUE")];

const CONFIG_COLUMNS: [Column<'static>; 3] = [
    Column::left("KEY"),
    Column::left("DESCRIPTION"),
    Column::left("VALUE"),
];

/// Turns core results into text. `colored` controls status highlighting.
#[derive(Debug, Clone)]
pub struct DisplayManager {
    pub printer: TablePrinter,
    colored: bool,
}

impl Default for DisplayManager {
    fn default() -> Self {
        Self::new()
    }
}

impl DisplayManager {
    pub fn new() -> Self {
        Self {
            printer: TablePrinter::new(),
            colored: true,
        }
    }

    pub fn plain() -> Self {
        Self {
            printer: TablePrinter::new(),
            colored: false,
        }
    }

    pub fn render_course_list<W: Write + ?Sized>(
        &self,
        courses: &CourseRepository,
        out: &mut W,
    ) -> io::Result<()> {
        let rows: Vec<Vec<String>> = courses
            .iter()
            .enumerate()
            .map(|(i, c)| {
                vec![
                    (i + 1).to_string(),
                    c.name.clone(),
                    c.attended.to_string(),
                    c.conducted.to_string(),
                ]
            })
            .collect();
        self.printer.render_table(
            "Courses",
            &COURSE_LIST_COLUMNS,
            &rows,
            Some("No courses available."),
            out,
        )
    }

    pub fn render_report<W: Write + ?Sized>(
        &self,
        report: &SemesterReport,
        out: &mut W,
    ) -> io::Result<()> {
        let rows: Vec<Vec<String>> = report.courses.iter().map(|c| self.report_row(c)).collect();
        self.printer.render_table(
            "Course Attendance Report",
            &REPORT_COLUMNS,
            &rows,
            None,
            out,
        )?;
        writeln!(out)?;
        self.printer.render_table(
            "Semester Summary",
            &SUMMARY_COLUMNS,
            &self.summary_rows(&report.summary),
            None,
            out,
        )
    }

    pub fn render_config<W: Write + ?Sized>(&self, config: &Config, out: &mut W) -> io::Result<()> {
        let rows: Vec<Vec<String>> = config
            .rows()
            .into_iter()
            .map(|(k, d, v)| vec![k, d, v])
            .collect();
        self.printer
            .render_table("Config", &CONFIG_COLUMNS, &rows, None, out)
    }

    pub fn format_forecast(&self, name: &str, forecast: &Forecast) -> String {
        match forecast {
            Forecast::NotApplicable => format!("{name}: {NOT_APPLICABLE}"),
            Forecast::Projected {
                percentage,
                eligible,
            } => {
                let verdict = if *eligible {
                    self.paint(Status::Safe, "Eligible")
                } else {
                    self.paint(Status::Critical, "Not Eligible")
                };
                format!(
                    "{name}: Expected Attendance: {} ({verdict})",
                    format_percent(*percentage)
                )
            }
        }
    }

    pub fn display_course_list(&self, courses: &CourseRepository, logger: &Logger) {
        self.emit(&mut io::stdout(), "course list", logger, |out| {
            self.render_course_list(courses, out)
        });
    }

    pub fn display_report(&self, report: &SemesterReport, logger: &Logger) {
        self.emit(&mut io::stdout(), "report", logger, |out| {
            self.render_report(report, out)
        });
    }

    pub fn display_config(&self, config: &Config, logger: &Logger) {
        self.emit(&mut io::stdout(), "config", logger, |out| {
            self.render_config(config, out)
        });
    }

    /// Render into `out`, warning through `logger` if the write fails.
    pub fn emit<W, F>(&self, out: &mut W, what: &str, logger: &Logger, render: F)
    where
        W: Write + ?Sized,
        F: FnOnce(&mut W) -> io::Result<()>,
    {
        if let Err(err) = render(&mut *out).and_then(|()| out.flush()) {
            logger.warn(
                format!("Could not print the {what}: {err}"),
                LogTarget::ConsoleAndFile,
            );
        }
    }

    fn report_row(&self, course: &CourseReport) -> Vec<String> {
        let attendance = format!("{}/{}", course.attended, course.conducted);
        match course.standing {
            Standing::NotApplicable => vec![
                course.name.clone(),
                attendance,
                NOT_APPLICABLE.to_string(),
                NOT_APPLICABLE.to_string(),
                "-".to_string(),
            ],
            Standing::Assessed {
                percentage,
                status,
                required_classes,
            } => vec![
                course.name.clone(),
                attendance,
                format_percent(percentage),
                self.paint(status, status.as_ref()),
                required_classes.to_string(),
            ],
        }
    }

    fn summary_rows(&self, s: &SemesterSummary) -> Vec<Vec<String>> {
        let overall = s
            .percentage
            .map(format_percent)
            .unwrap_or_else(|| NOT_APPLICABLE.to_string());
        let verdict = if s.eligible {
            self.paint(Status::Safe, "ELIGIBLE FOR EXAMS")
        } else {
            self.paint(Status::Critical, "NOT ELIGIBLE FOR EXAMS")
        };
        vec![
            vec!["Total Courses".into(), s.total_courses.to_string()],
            vec![
                "Overall Attendance".into(),
                format!("{overall} ({}/{})", s.total_attended, s.total_conducted),
            ],
            vec!["Safe".into(), s.safe.to_string()],
            vec!["Warning".into(), s.warning.to_string()],
            vec!["Critical".into(), s.critical.to_string()],
            vec!["Semester Status".into(), verdict],
        ]
    }

    fn paint(&self, status: Status, text: &str) -> String {
        if !self.colored {
            return text.to_string();
        }
        let color = match status {
            Status::Safe => FG_GREEN,
            Status::Warning => FG_YELLOW,
            Status::Critical => FG_RED,
        };
        format!("{color}{text}{STYLE_RESET}")
    }
}

pub fn format_percent(p: f64) -> String {
    format!("{p:.2}%")
}
