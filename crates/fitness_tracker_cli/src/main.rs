mod args;
mod error;
mod input;
mod output;

use args::Cli;
use clap::Parser;
use error::{CliError, CliResult};
use fitness_tracker::{Config, SensorPackage, demo_packages, process_batch};
use std::io::Write;

fn main() -> anyhow::Result<()> {
    // Logs go to stderr so stdout carries only reports. Filter from
    // `FITNESS_TRACKER_LOG_LEVEL`, falling back to `RUST_LOG`, default `warn`.
    let log_env = std::env::var("FITNESS_TRACKER_LOG_LEVEL")
        .or_else(|_| std::env::var("RUST_LOG"))
        .unwrap_or_else(|_| "warn".to_string());
    let env_filter = tracing_subscriber::EnvFilter::try_new(&log_env)
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .compact()
        .with_writer(std::io::stderr)
        .with_ansi(false)
        .with_target(false)
        .with_env_filter(env_filter)
        .init();
    tracing::debug!(%log_env, "fitness-tracker: log filter");

    let cli = Cli::parse();
    if cli.schema {
        let schema = schemars::schema_for!(Vec<SensorPackage>);
        println!("{}", serde_json::to_string_pretty(&schema)?);
        return Ok(());
    }

    let config = cli.apply_to(Config::from_env()?);
    tracing::debug!(output = %config.output, input = ?config.input, "fitness-tracker: configuration");

    run(&config)?;
    Ok(())
}

fn run(config: &Config) -> CliResult<()> {
    let packages = match &config.input {
        Some(path) => input::load_packages(path)?,
        None => {
            tracing::info!("no input configured; processing demo packages");
            demo_packages()
        }
    };

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    let failed = write_reports(&packages, config, &mut out)?;
    out.flush()?;

    if failed > 0 {
        return Err(CliError::PackagesFailed {
            failed,
            total: packages.len(),
        });
    }
    Ok(())
}

/// Write one line per successful package and return the number of failures.
fn write_reports<W: Write>(
    packages: &[SensorPackage],
    config: &Config,
    out: &mut W,
) -> CliResult<usize> {
    let mut failed = 0;
    for (index, (package, result)) in packages.iter().zip(process_batch(packages)).enumerate() {
        match result {
            Ok(report) => writeln!(out, "{}", output::render(&report, config.output)?)?,
            Err(e) => {
                failed += 1;
                tracing::warn!(index, code = %package.workout_type, error = %e, "skipping sensor package");
                eprintln!("package #{index} ({}): {e}", package.workout_type);
            }
        }
    }
    Ok(failed)
}
