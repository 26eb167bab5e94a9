use crate::TrackerError;
use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum OutputFormat {
    /// One summary line per package.
    #[default]
    Text,
    /// One JSON report object per line.
    Json,
}

impl FromStr for OutputFormat {
    type Err = TrackerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "text" => Ok(OutputFormat::Text),
            "json" => Ok(OutputFormat::Json),
            other => Err(TrackerError::Config(format!(
                "unsupported output format {other:?} (expected \"text\" or \"json\")"
            ))),
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            OutputFormat::Text => "text",
            OutputFormat::Json => "json",
        })
    }
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct Config {
    pub output: OutputFormat,
    /// JSON file with sensor packages; the demo batch is used when unset.
    pub input: Option<PathBuf>,
}

impl Config {
    pub fn from_env() -> Result<Self, TrackerError> {
        Self::from_env_with(|k| std::env::var(k).ok())
    }

    /// Read configuration values through `get` instead of the process
    /// environment, so tests never touch global state.
    pub fn from_env_with<F>(mut get: F) -> Result<Self, TrackerError>
    where
        F: FnMut(&str) -> Option<String>,
    {
        let output = match get("FITNESS_TRACKER_OUTPUT") {
            Some(raw) => raw.parse()?,
            None => OutputFormat::default(),
        };
        let input = get("FITNESS_TRACKER_INPUT")
            .filter(|p| !p.trim().is_empty())
            .map(PathBuf::from);
        Ok(Self { output, input })
    }
}
