//! `gngen show`: print a generated build file without writing anything.

use anyhow::{Context, Result};
use clap::Args;
use std::io::{self, Write};
use std::path::PathBuf;

use crate::core::GnGenError;
use crate::dependency::BuildInfo;
use crate::generator::{build_declarations, render_manifest};
use crate::gn::{IoSink, Printer, Render};

#[derive(Args, Debug)]
pub struct ShowCommand {
    /// Build-info file (`.json` or `.toml`)
    #[arg(short, long, value_name = "FILE")]
    input: PathBuf,

    /// Dependency to print; prints the manifest when omitted
    #[arg(value_name = "DEP")]
    dependency: Option<String>,
}

impl ShowCommand {
    pub async fn execute(self) -> Result<()> {
        let stdout = io::stdout();
        self.write_to(stdout.lock())
    }

    /// Render into `out`, streaming declarations as they are produced.
    pub fn write_to<W: Write>(&self, mut out: W) -> Result<()> {
        let build_info = BuildInfo::load(&self.input)?;

        let Some(name) = &self.dependency else {
            out.write_all(render_manifest().as_bytes())?;
            out.flush()?;
            return Ok(());
        };

        let dep = build_info.get(name).ok_or_else(|| GnGenError::DependencyNotFound {
            name: name.clone(),
        })?;

        let mut sink = IoSink::new(out);
        let rendered = build_declarations(dep).render_to(&mut Printer::new(&mut sink));
        if let Some(err) = sink.take_error() {
            return Err(err).context("Failed to write to stdout");
        }
        rendered.map_err(|_| anyhow::anyhow!("Failed to render build file for '{name}'"))?;
        sink.into_inner().context("Failed to flush stdout")?;
        Ok(())
    }
}
