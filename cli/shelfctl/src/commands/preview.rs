//! Preview command: compose a sample identifier from a format file.

use std::path::PathBuf;

use anyhow::Result;
use chrono::NaiveDate;
use clap::Args;
use colored::Colorize;

use shelfmark_compose::{compose, ComposeContext};
use shelfmark_format::{validate, TokenKind};

use crate::output::print_warning;

#[derive(Debug, Args)]
pub struct PreviewArgs {
    /// Path to a format JSON file.
    file: PathBuf,

    /// Sample field value for fieldReference tokens, repeatable (key=value).
    #[arg(long = "field", value_parser = super::parse_field)]
    fields: Vec<(String, String)>,

    /// Compose for this date instead of today (YYYY-MM-DD).
    #[arg(long)]
    date: Option<NaiveDate>,

    /// Use the local time zone's date instead of UTC.
    #[arg(long)]
    local: bool,
}

pub fn run(args: PreviewArgs) -> Result<()> {
    let format = super::load_format(&args.file)?;

    let mut ctx = if args.local {
        ComposeContext::preview_local()
    } else {
        ComposeContext::preview()
    };
    if let Some(date) = args.date {
        ctx = ctx.with_date(date);
    }
    ctx = ctx.with_fields(args.fields);

    println!("{}", compose(&format, &ctx));

    if format.contains_kind(TokenKind::Sequence) {
        eprintln!(
            "{}",
            "Note: sequence shows a placeholder value; real values are allocated at mint."
                .dimmed()
        );
    }

    if !format.enabled {
        eprintln!(
            "{}",
            "Note: this format is disabled; records fall back to the default scheme.".dimmed()
        );
    }

    // A preview with warnings is still useful mid-edit.
    for error in validate(&format) {
        print_warning(&error.to_string());
    }

    Ok(())
}
