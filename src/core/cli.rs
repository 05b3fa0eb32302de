use std::path::PathBuf;

pub const USAGE: &str =
    "Usage: attendit [--config PATH] [--data PATH] [--logs DIR] [--set KEY=VALUE]...";

#[derive(Debug, Clone, PartialEq)]
pub struct CliArgs {
    pub config_path: PathBuf,
    /// Overrides the config's data file for this session only.
    pub data_path: Option<PathBuf>,
    pub logs_dir: PathBuf,
    /// `KEY=VALUE` pairs written to the config before the session starts.
    pub settings: Vec<(String, String)>,
}

impl CliArgs {
    pub fn from_env() -> Result<Self, String> {
        Self::from_args(std::env::args().skip(1))
    }

    pub fn from_args<I>(mut args: I) -> Result<Self, String>
    where
        I: Iterator<Item = String>,
    {
        let mut parsed = Self::defaults();
        while let Some(arg) = args.next() {
            match arg.as_str() {
                "--config" => {
                    parsed.config_path = Self::next_path(&mut args, "--config")?;
                }
                "--data" => {
                    parsed.data_path = Some(Self::next_path(&mut args, "--data")?);
                }
                "--logs" => {
                    parsed.logs_dir = Self::next_path(&mut args, "--logs")?;
                }
                "--set" => {
                    let raw = Self::next_value(&mut args, "--set")?;
                    parsed.settings.push(Self::split_setting(&raw)?);
                }
                _ => return Err(format!("Unknown argument: {arg}\n{USAGE}")),
            }
        }
        Ok(parsed)
    }

    fn next_value<I>(args: &mut I, flag: &str) -> Result<String, String>
    where
        I: Iterator<Item = String>,
    {
        args.next()
            .ok_or_else(|| format!("Missing value for {flag}\n{USAGE}"))
    }

    fn next_path<I>(args: &mut I, flag: &str) -> Result<PathBuf, String>
    where
        I: Iterator<Item = String>,
    {
        Self::next_value(args, flag).map(PathBuf::from)
    }

    fn split_setting(raw: &str) -> Result<(String, String), String> {
        match raw.split_once('=') {
            Some((key, value)) if !key.trim().is_empty() => {
                Ok((key.trim().to_string(), value.trim().to_string()))
            }
            _ => Err(format!("Expected KEY=VALUE for --set, got '{raw}'")),
        }
    }

    fn defaults() -> Self {
        Self {
            config_path: PathBuf::from("config.json"),
            data_path: None,
            logs_dir: PathBuf::from("logs"),
            settings: Vec::new(),
        }
    }
}
