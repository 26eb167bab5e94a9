use crate::error::CliResult;
use fitness_tracker::{OutputFormat, Report};

/// Render one report as a single output line.
pub fn render(report: &Report, format: OutputFormat) -> CliResult<String> {
    Ok(match format {
        OutputFormat::Text => report.message(),
        OutputFormat::Json => serde_json::to_string(report)?,
    })
}
