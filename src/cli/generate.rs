//! `gngen generate`: write the manifest and one build file per dependency.
//!
//! Settings come from the loaded [`GeneratorConfig`]; the flags below override
//! them for a single run.

use anyhow::{Context, Result};
use clap::Args;
use colored::Colorize;
use std::path::PathBuf;

use super::CliConfig;
use crate::config::GeneratorConfig;
use crate::core::GnGenError;
use crate::dependency::BuildInfo;
use crate::output::{GenerationReport, OutputLayout, WriteOptions, write_all};

#[derive(Args, Debug)]
pub struct GenerateCommand {
    /// Build-info file (`.json` or `.toml`)
    #[arg(short, long, value_name = "FILE")]
    input: PathBuf,

    /// Directory receiving the generated tree
    #[arg(short, long, value_name = "DIR")]
    output_dir: Option<PathBuf>,

    /// Only generate these dependencies (repeatable)
    #[arg(long = "only", value_name = "DEP")]
    only: Vec<String>,

    /// Maximum number of dependencies written concurrently
    #[arg(long, value_name = "NUM")]
    max_parallel: Option<usize>,

    /// Do not write the root manifest
    #[arg(long)]
    no_manifest: bool,

    /// List the files that would be written without writing them
    #[arg(long)]
    dry_run: bool,
}

impl GenerateCommand {
    pub async fn execute(self, cli: &CliConfig) -> Result<()> {
        let config = GeneratorConfig::load(cli.config_path.as_deref()).await?;
        let report = self.run(config).await?;

        if !cli.quiet {
            print_report(&report);
        }
        Ok(())
    }

    /// Generate with an already loaded configuration.
    pub async fn run(self, mut config: GeneratorConfig) -> Result<GenerationReport> {
        self.apply_overrides(&mut config)?;

        let build_info = BuildInfo::load(&self.input)
            .with_context(|| format!("Failed to load build info from {}", self.input.display()))?
            .select(&self.only)?;

        tracing::info!(
            target: "cli",
            "Generating {} dependencies into {}",
            build_info.len(),
            config.output_dir.display()
        );

        let layout = OutputLayout::new(config.output_dir, config.build_file_name);
        let options = WriteOptions {
            max_parallel: config.max_parallel,
            write_manifest: config.write_manifest,
            dry_run: self.dry_run,
        };
        write_all(&build_info, &layout, options).await
    }

    fn apply_overrides(&self, config: &mut GeneratorConfig) -> Result<(), GnGenError> {
        if let Some(dir) = &self.output_dir {
            config.output_dir.clone_from(dir);
        }
        if let Some(max_parallel) = self.max_parallel {
            config.max_parallel = max_parallel;
        }
        if self.no_manifest {
            config.write_manifest = false;
        }
        config.validate()
    }
}

fn print_report(report: &GenerationReport) {
    if report.dry_run {
        println!("{}", "Dry run, nothing written:".yellow().bold());
        for path in report.paths() {
            println!("  {}", path.display());
        }
        return;
    }

    for path in report.paths() {
        println!("  {} {}", "wrote".green(), path.display());
    }
    println!(
        "\n{} {} build files ({} dependencies)",
        "Generated".green().bold(),
        report.len(),
        report.dependency_files.len()
    );
}
