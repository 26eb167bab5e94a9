use clap::Parser;
use fitness_tracker::{Config, OutputFormat};
use std::path::PathBuf;

#[derive(Debug, Parser)]
#[command(name = "fitness-tracker")]
#[command(about = "Compute distance, speed and calories from training sensor packages", long_about = None)]
#[command(version)]
pub struct Cli {
    /// JSON file with sensor packages (`-` reads stdin). Defaults to the demo batch.
    #[arg(long, short)]
    pub input: Option<PathBuf>,

    /// Output format: text or json.
    #[arg(long, short)]
    pub format: Option<OutputFormat>,

    /// Print the JSON Schema of the input packages and exit.
    #[arg(long)]
    pub schema: bool,
}

impl Cli {
    /// Command-line flags take precedence over environment configuration.
    pub fn apply_to(&self, mut config: Config) -> Config {
        if let Some(input) = &self.input {
            config.input = Some(input.clone());
        }
        if let Some(format) = self.format {
            config.output = format;
        }
        config
    }
}
