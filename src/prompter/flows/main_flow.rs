use std::str::FromStr;

use strum::IntoEnumIterator;

use crate::analysis::{Forecast, forecast, report};
use crate::core::context::AppContext;
use crate::core::models::validate_name;
use crate::errors::{Error, Result};
use crate::logging::{LogTarget, Logger};
use crate::prompter::models::{Flow, FlowCtrl, MenuOption, MenuState};
use crate::ui::chrome::UiChrome;
use crate::ui::display_manager::DisplayManager;

pub struct MainFlow<'a> {
    ctx: &'a mut AppContext,
    dm: DisplayManager,
    chrome: UiChrome,
    state: MenuState,
    logger: Logger,
}

impl<'a> MainFlow<'a> {
    pub fn new(ctx: &'a mut AppContext) -> Self {
        let logger = ctx.logger.clone();
        Self {
            ctx,
            dm: DisplayManager::new(),
            chrome: UiChrome::new(),
            state: MenuState::Menu,
            logger,
        }
    }

    #[cfg(test)]
    pub(crate) fn state(&self) -> MenuState {
        self.state.clone()
    }
}

impl<'a> Flow for MainFlow<'a> {
    fn render(&mut self) -> Result<()> {
        self.print_startup();
        match &self.state {
            MenuState::Menu => {
                self.print_menu();
                self.chrome.print_prompt("Enter option: ");
            }
            MenuState::AddName => self.chrome.print_prompt("Enter course name: "),
            MenuState::AddAttended { .. } => self.chrome.print_prompt("Enter classes attended: "),
            MenuState::AddConducted { .. } => {
                self.chrome.print_prompt("Enter total classes conducted: ")
            }
            MenuState::ModifySelect => {
                self.dm.display_course_list(&self.ctx.courses, &self.logger);
                self.chrome.print_prompt("Select course number: ");
            }
            MenuState::ModifyAttended { .. } => {
                self.chrome.print_prompt("Enter updated attended classes: ")
            }
            MenuState::ModifyConducted { .. } => {
                self.chrome.print_prompt("Enter updated total classes: ")
            }
            MenuState::RemoveSelect => {
                self.dm.display_course_list(&self.ctx.courses, &self.logger);
                self.chrome.print_prompt("Select course to remove: ");
            }
            MenuState::Predict { position } => {
                let name = self.ctx.courses.as_slice()[*position].name.clone();
                self.chrome
                    .print_prompt(&format!("Future classes for {name}: "));
            }
        }
        Ok(())
    }

    fn handle_input(&mut self, input: &str) -> Result<FlowCtrl> {
        self.chrome.finish_prompt();
        let line = input.trim();
        let state = std::mem::replace(&mut self.state, MenuState::Menu);

        self.state = match state {
            MenuState::Menu => return Ok(self.handle_menu(line)),
            MenuState::AddName => self.handle_add_name(line),
            MenuState::AddAttended { name } => match parse_count(line) {
                Ok(attended) => MenuState::AddConducted { name, attended },
                Err(err) => self.fail("Add", err),
            },
            MenuState::AddConducted { name, attended } => {
                self.handle_add_conducted(name, attended, line)
            }
            MenuState::ModifySelect => match self.select(line) {
                Ok(index) => MenuState::ModifyAttended { index },
                Err(err) => self.fail("Modify", err),
            },
            MenuState::ModifyAttended { index } => match parse_count(line) {
                Ok(attended) => MenuState::ModifyConducted { index, attended },
                Err(err) => self.fail("Modify", err),
            },
            MenuState::ModifyConducted { index, attended } => {
                self.handle_modify_conducted(index, attended, line)
            }
            MenuState::RemoveSelect => self.handle_remove(line),
            MenuState::Predict { position } => self.handle_predict(position, line),
        };
        Ok(FlowCtrl::Continue)
    }
}

impl<'a> MainFlow<'a> {
    fn print_startup(&mut self) {
        if self.ctx.startup_displayed {
            return;
        }
        self.chrome.print_banner();
        println!();
        println!("Data file: {}", self.ctx.data_path.display());
        println!("Config path: {}", self.ctx.config.path().display());
        println!("Logs path: {}", self.ctx.logs_dir.display());
        println!("Courses loaded: {}", self.ctx.courses.len());
        println!();
        self.dm.display_config(&self.ctx.config, &self.logger);
        self.ctx.startup_displayed = true;
    }

    fn print_menu(&self) {
        println!();
        println!("===== ATTENDANCE MANAGEMENT SYSTEM =====");
        for option in MenuOption::iter() {
            println!("{}. {}", option.number(), option);
        }
    }

    fn handle_menu(&mut self, line: &str) -> FlowCtrl {
        let Ok(option) = MenuOption::from_str(line) else {
            self.logger.warn("Invalid option.", LogTarget::ConsoleOnly);
            return FlowCtrl::Continue;
        };

        self.state = match option {
            MenuOption::Add => MenuState::AddName,
            MenuOption::Modify => self.require_courses(MenuState::ModifySelect, "No courses available."),
            MenuOption::Remove => self.require_courses(MenuState::RemoveSelect, "No courses to remove."),
            MenuOption::Predict => {
                if self.ctx.courses.is_empty() {
                    self.logger.info("No courses available.", LogTarget::ConsoleOnly);
                    MenuState::Menu
                } else {
                    println!("--- Attendance Forecast ---");
                    self.next_prediction(0)
                }
            }
            MenuOption::Report => {
                self.show_report();
                MenuState::Menu
            }
            MenuOption::Exit => return self.save_and_exit(),
        };
        FlowCtrl::Continue
    }

    fn require_courses(&self, next: MenuState, empty_msg: &str) -> MenuState {
        if self.ctx.courses.is_empty() {
            self.logger.info(empty_msg, LogTarget::ConsoleOnly);
            MenuState::Menu
        } else {
            next
        }
    }

    fn handle_add_name(&self, line: &str) -> MenuState {
        match validate_name(line) {
            Ok(()) => MenuState::AddAttended {
                name: line.to_string(),
            },
            Err(err) => self.fail("Add", err),
        }
    }

    fn handle_add_conducted(&mut self, name: String, attended: u32, line: &str) -> MenuState {
        let added = parse_count(line)
            .and_then(|conducted| self.ctx.courses.add(name, attended, conducted).cloned());
        match added {
            Ok(course) => {
                self.logger
                    .info("Course added successfully.", LogTarget::ConsoleOnly);
                self.logger
                    .info(format!("Added {course}"), LogTarget::FileOnly);
                MenuState::Menu
            }
            Err(err) => self.fail("Add", err),
        }
    }

    fn handle_modify_conducted(&mut self, index: usize, attended: u32, line: &str) -> MenuState {
        let updated = parse_count(line)
            .and_then(|conducted| self.ctx.courses.modify(index, attended, conducted).cloned());
        match updated {
            Ok(course) => {
                self.logger
                    .info("Course attendance updated.", LogTarget::ConsoleOnly);
                self.logger
                    .info(format!("Modified #{index}: {course}"), LogTarget::FileOnly);
                MenuState::Menu
            }
            Err(err) => self.fail("Modify", err),
        }
    }

    fn handle_remove(&mut self, line: &str) -> MenuState {
        match self.select(line).and_then(|index| self.ctx.courses.remove(index)) {
            Ok(course) => {
                self.logger
                    .info("Course removed successfully.", LogTarget::ConsoleOnly);
                self.logger
                    .info(format!("Removed {course}"), LogTarget::FileOnly);
            }
            Err(err) => {
                self.fail("Remove", err);
            }
        }
        MenuState::Menu
    }

    fn handle_predict(&mut self, position: usize, line: &str) -> MenuState {
        let future = match parse_count(line) {
            Ok(n) => n,
            Err(err) => return self.fail("Predict", err),
        };
        let course = &self.ctx.courses.as_slice()[position];
        let projected = forecast(course, future, self.ctx.config.thresholds().eligibility());
        println!("{}", self.dm.format_forecast(&course.name, &projected));
        self.next_prediction(position + 1)
    }

    /// Print `N/A` for courses with nothing conducted, starting at `from`,
    /// and stop at the next course that can be forecast.
    fn next_prediction(&self, from: usize) -> MenuState {
        let courses = self.ctx.courses.as_slice();
        for (position, course) in courses.iter().enumerate().skip(from) {
            if course.has_classes() {
                return MenuState::Predict { position };
            }
            println!(
                "{}",
                self.dm
                    .format_forecast(&course.name, &Forecast::NotApplicable)
            );
        }
        MenuState::Menu
    }

    fn show_report(&self) {
        match report(self.ctx.courses.as_slice(), &self.ctx.config.thresholds()) {
            Ok(r) => {
                self.dm.display_report(&r, &self.logger);
                self.logger.info(
                    format!(
                        "Report generated: {} course(s), eligible={}",
                        r.summary.total_courses, r.summary.eligible
                    ),
                    LogTarget::FileOnly,
                );
            }
            Err(Error::NoCourses) => {
                self.logger
                    .info(Error::NoCourses.to_string(), LogTarget::ConsoleOnly);
            }
            Err(err) => {
                self.fail("Report", err);
            }
        }
    }

    fn save_and_exit(&mut self) -> FlowCtrl {
        match self.ctx.save() {
            Ok(_) => {
                self.logger.info(
                    "Data saved successfully. Exiting...",
                    LogTarget::ConsoleOnly,
                );
                FlowCtrl::Finish
            }
            Err(err) => {
                self.logger.error(
                    format!("Save failed. {err} Choose Exit again to retry."),
                    LogTarget::ConsoleAndFile,
                );
                FlowCtrl::Continue
            }
        }
    }

    fn select(&self, line: &str) -> Result<usize> {
        let index = line
            .parse::<usize>()
            .map_err(|_| Error::parse(format!("'{line}' is not a course number.")))?;
        self.ctx.courses.get(index)?;
        Ok(index)
    }

    /// Report a failed step and fall back to the menu.
    fn fail(&self, action: &str, err: Error) -> MenuState {
        self.logger
            .error(format!("{action} failed. {err}"), LogTarget::ConsoleAndFile);
        MenuState::Menu
    }
}

/// Read a class count typed by the user.
pub fn parse_count(line: &str) -> Result<u32> {
    let trimmed = line.trim();
    match trimmed.parse::<i64>() {
        Ok(v) if v < 0 => Err(Error::parse(format!(
            "'{trimmed}' is negative; class counts start at 0."
        ))),
        Ok(v) => u32::try_from(v).map_err(|_| Error::parse(format!("'{trimmed}' is too large."))),
        Err(_) => Err(Error::parse(format!("'{trimmed}' is not a whole number."))),
    }
}
