use crate::config::Config;
use crate::core::cli::CliArgs;
use crate::core::persist::{load_courses, save_courses};
use crate::core::repository::CourseRepository;

use crate::errors::Result;
use crate::logging::{LogTarget, Logger};
use std::path::PathBuf;

#[derive(Debug)]
pub struct AppContext {
    pub config: Config,
    pub courses: CourseRepository,
    pub logger: Logger,
    pub startup_displayed: bool,
    pub data_path: PathBuf,
    pub logs_dir: PathBuf,
}

impl AppContext {
    pub fn from_cli(args: CliArgs) -> Result<Self> {
        let mut config = Config::load_from(&args.config_path)?;

        let logger = Logger::new();
        logger.set_log_dir(&args.logs_dir);
        logger.set_file_logging_enabled(config.file_logging_enabled());

        for (key, value) in &args.settings {
            config.set(key, value)?;
            if let Some((key, old, new)) = config.take_last_change() {
                logger.set_file_logging_enabled(config.file_logging_enabled());
                logger.info(
                    format!("Config '{key}' updated: '{old}' -> '{new}'"),
                    LogTarget::FileOnly,
                );
            }
        }

        let data_path = args
            .data_path
            .unwrap_or_else(|| config.data_file().to_path_buf());

        let mut ctx = Self {
            config,
            courses: CourseRepository::new(),
            logger,
            startup_displayed: false,
            data_path,
            logs_dir: args.logs_dir,
        };
        ctx.load()?;
        Ok(ctx)
    }

    /// Replace the in-memory courses with whatever the store holds.
    pub fn load(&mut self) -> Result<()> {
        let loaded = load_courses(&self.data_path)?;
        if let Some(cut) = &loaded.truncated {
            self.logger.warn(
                format!(
                    "Stopped reading '{}' at record {}: {}. Later records were ignored.",
                    self.data_path.display(),
                    cut.record,
                    cut.reason
                ),
                LogTarget::ConsoleAndFile,
            );
        }
        self.logger.info(
            format!(
                "Loaded {} course(s) from '{}'.",
                loaded.courses.len(),
                self.data_path.display()
            ),
            LogTarget::FileOnly,
        );
        self.courses.replace_all(loaded.courses);
        Ok(())
    }

    pub fn save(&self) -> Result<PathBuf> {
        let path = save_courses(self.courses.as_slice(), &self.data_path)?;
        self.logger.info(
            format!(
                "Saved {} course(s) to '{}'.",
                self.courses.len(),
                path.display()
            ),
            LogTarget::FileOnly,
        );
        Ok(path)
    }
}
