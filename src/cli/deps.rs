//! `gngen deps`: list dependencies and the GN labels they expose.

use anyhow::Result;
use clap::Args;
use colored::Colorize;
use std::path::PathBuf;

use super::CliConfig;
use crate::dependency::BuildInfo;
use crate::generator::exposed_configs;

#[derive(Args, Debug)]
pub struct DepsCommand {
    /// Build-info file (`.json` or `.toml`)
    #[arg(short, long, value_name = "FILE")]
    input: PathBuf,
}

impl DepsCommand {
    pub async fn execute(self, cli: &CliConfig) -> Result<()> {
        let build_info = BuildInfo::load(&self.input)?;
        for line in format_listing(&build_info, cli.quiet) {
            println!("{line}");
        }
        Ok(())
    }
}

/// One line per dependency: `name (N libs): label, label, ...`.
///
/// `plain` drops the color and the label list, leaving just the names.
fn format_listing(build_info: &BuildInfo, plain: bool) -> Vec<String> {
    build_info
        .dependencies()
        .map(|(name, dep)| {
            if plain {
                return name.to_string();
            }
            let labels: Vec<String> = exposed_configs(dep).into_iter().map(|c| c.label).collect();
            let libs = match dep.libs.len() {
                1 => "1 lib".to_string(),
                n => format!("{n} libs"),
            };
            format!("{} ({libs}): {}", name.bold(), labels.join(", "))
        })
        .collect()
}
