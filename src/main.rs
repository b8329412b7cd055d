//! gngen CLI entry point
//!
//! Parses arguments, runs the selected command and reports failures through
//! [`user_friendly_error`] with a non-zero exit status.

use anyhow::Result;
use clap::Parser;
use gngen_cli::cli;
use gngen_cli::core::error::user_friendly_error;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = cli::Cli::parse();

    #[cfg(windows)]
    colored::control::set_virtual_terminal(true).ok();

    match cli.execute().await {
        Ok(()) => Ok(()),
        Err(e) => {
            let error_ctx = user_friendly_error(e);
            error_ctx.display();
            std::process::exit(1);
        }
    }
}
