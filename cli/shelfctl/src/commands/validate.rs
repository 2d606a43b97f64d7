//! Validate command: check a format file for configuration errors.

use std::path::PathBuf;

use anyhow::{bail, Result};
use clap::Args;
use colored::Colorize;

use shelfmark_format::validate;

use crate::output::print_success;

#[derive(Debug, Args)]
pub struct ValidateArgs {
    /// Path to a format JSON file.
    file: PathBuf,
}

pub fn run(args: ValidateArgs) -> Result<()> {
    let format = super::load_format(&args.file)?;
    let errors = validate(&format);

    if errors.is_empty() {
        print_success(&format!(
            "{} element(s), no validation errors.",
            format.len()
        ));
        return Ok(());
    }

    for error in &errors {
        eprintln!("  {} {}", "-".red(), error);
    }
    bail!("format has {} validation error(s)", errors.len());
}
