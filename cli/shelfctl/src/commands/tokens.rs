//! Tokens command: show the palette of available token kinds.

use anyhow::Result;
use clap::Args;
use colored::Colorize;

use shelfmark_format::{defaults_for, label, TokenKind};

#[derive(Debug, Args)]
pub struct TokensArgs {
    /// Print defaults as raw JSON for scripting.
    #[arg(long)]
    json: bool,
}

pub fn run(args: TokensArgs) -> Result<()> {
    if args.json {
        let palette: Vec<serde_json::Value> = TokenKind::ALL
            .iter()
            .map(|&kind| {
                serde_json::json!({
                    "label": label(kind),
                    "defaults": defaults_for(kind),
                })
            })
            .collect();
        println!("{}", serde_json::to_string_pretty(&palette)?);
        return Ok(());
    }

    for kind in TokenKind::ALL {
        let defaults = serde_json::to_string(&defaults_for(kind))?;
        println!(
            "{:<16} {:<24} {}",
            kind.to_string().bold(),
            label(kind),
            defaults.dimmed()
        );
    }

    Ok(())
}
