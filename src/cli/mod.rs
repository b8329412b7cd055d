//! Command-line interface for gngen.
//!
//! # Commands
//!
//! - `generate` - write the manifest and one build file per dependency
//! - `show` - print a single generated build file (or the manifest) to stdout
//! - `deps` - list the dependencies in a build-info file
//!
//! # Global Options
//!
//! - `--verbose` - enable debug logging
//! - `--quiet` - only log errors and skip the summary
//! - `--config` - path to a configuration file
//!
//! # Example
//!
//! ```bash
//! gngen deps --input conanbuildinfo.json
//! gngen show --input conanbuildinfo.json gtest
//! gngen generate --input conanbuildinfo.json --output-dir third_party
//! ```

mod deps;
mod generate;
mod show;


use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

/// Runtime configuration derived from the global flags.
#[derive(Debug, Clone, Default)]
pub struct CliConfig {
    /// `EnvFilter` directive used when `RUST_LOG` is not set
    pub log_level: String,

    /// Suppress non-error output
    pub quiet: bool,

    pub config_path: Option<PathBuf>,
}

impl CliConfig {
    #[must_use]
    pub fn new() -> Self {
        Self {
            log_level: "info".to_string(),
            ..Self::default()
        }
    }

    /// Install the global tracing subscriber.
    ///
    /// `RUST_LOG` takes precedence over the level chosen by the flags. Calling
    /// this twice is harmless; the second subscriber is discarded.
    pub fn init_logging(&self) {
        let filter = if std::env::var("RUST_LOG").is_ok() {
            EnvFilter::from_default_env()
        } else {
            EnvFilter::new(&self.log_level)
        };

        let _ = tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_writer(std::io::stderr)
            .try_init();
    }
}

#[derive(Parser)]
#[command(
    name = "gngen",
    about = "Generate GN build declarations for resolved C/C++ dependencies",
    version,
    long_about = "gngen reads the build metadata of resolved dependencies (include paths, \
                  defines, flags and libraries) and writes one BUILD.gn per dependency \
                  exposing them as GN configs and groups."
)]
pub struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Enable debug logging
    #[arg(short, long, global = true, conflicts_with = "quiet")]
    verbose: bool,

    /// Only report errors
    #[arg(short, long, global = true)]
    quiet: bool,

    /// Path to a configuration file
    #[arg(short, long, global = true, value_name = "PATH")]
    config: Option<PathBuf>,
}

#[derive(Subcommand)]
enum Commands {
    /// Write build files for every dependency
    Generate(generate::GenerateCommand),

    /// Print one generated build file to stdout
    Show(show::ShowCommand),

    /// List dependencies and the GN labels they expose
    Deps(deps::DepsCommand),
}

impl Cli {
    /// Execute the parsed command, initialising logging from the global flags.
    pub async fn execute(self) -> Result<()> {
        let config = self.build_config();
        config.init_logging();
        self.execute_with_config(config).await
    }

    pub fn build_config(&self) -> CliConfig {
        let log_level = if self.verbose {
            "debug"
        } else if self.quiet {
            "error"
        } else {
            "info"
        };

        CliConfig {
            log_level: log_level.to_string(),
            quiet: self.quiet,
            config_path: self.config.clone(),
        }
    }

    /// Execute with an explicit configuration; does not touch logging.
    pub async fn execute_with_config(self, config: CliConfig) -> Result<()> {
        match self.command {
            Commands::Generate(cmd) => cmd.execute(&config).await,
            Commands::Show(cmd) => cmd.execute().await,
            Commands::Deps(cmd) => cmd.execute(&config).await,
        }
    }
}
