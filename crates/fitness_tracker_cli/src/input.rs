//! Loading sensor packages from files or stdin.

use crate::error::{CliError, CliResult};
use fitness_tracker::SensorPackage;
use std::io::Read;
use std::path::Path;

/// Read a JSON array of sensor packages. `-` means stdin.
pub fn load_packages(path: &Path) -> CliResult<Vec<SensorPackage>> {
    let text = if path == Path::new("-") {
        let mut buf = String::new();
        std::io::stdin().read_to_string(&mut buf)?;
        buf
    } else {
        std::fs::read_to_string(path).map_err(|source| CliError::Read {
            path: path.to_path_buf(),
            source,
        })?
    };
    parse_packages(&text)
}

pub fn parse_packages(text: &str) -> CliResult<Vec<SensorPackage>> {
    let packages: Vec<SensorPackage> = serde_json::from_str(text)?;
    tracing::debug!(count = packages.len(), "loaded sensor packages");
    Ok(packages)
}
