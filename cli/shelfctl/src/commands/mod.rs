//! CLI commands.

mod auth;
mod mint;
mod preview;
mod tokens;
mod validate;

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};

use shelfmark_client::ApiClient;
use shelfmark_format::IdentifierFormat;

use crate::config::{Config, Credentials};

/// shelfmark CLI - Preview, validate, and mint inventory record identifiers.
#[derive(Debug, Parser)]
#[command(name = "shelfmark")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Manage the saved API token.
    Auth(auth::AuthCommand),

    /// Compose a preview identifier from a format file.
    Preview(preview::PreviewArgs),

    /// Check a format file for validation errors.
    Validate(validate::ValidateArgs),

    /// List the token palette with per-kind defaults.
    Tokens(tokens::TokensArgs),

    /// Mint a real identifier through the backend.
    Mint(mint::MintArgs),
}

impl Cli {
    pub async fn run(self) -> Result<()> {
        match self.command {
            Commands::Auth(cmd) => cmd.run(),
            Commands::Preview(args) => preview::run(args),
            Commands::Validate(args) => validate::run(args),
            Commands::Tokens(args) => tokens::run(args),
            Commands::Mint(args) => mint::run(args).await,
        }
    }
}

/// Builds an API client from the saved config and credentials.
pub(crate) fn api_client() -> Result<ApiClient> {
    let config = Config::load()?;
    let credentials = Credentials::load()?;

    let client = ApiClient::new(
        config.api_url(),
        credentials.as_ref().map(|c| c.token.as_str()),
    )?;
    Ok(client)
}

/// Reads an identifier format from a JSON file.
pub(crate) fn load_format(path: &Path) -> Result<IdentifierFormat> {
    let contents = fs::read_to_string(path)
        .with_context(|| format!("Failed to read format from {:?}", path))?;

    serde_json::from_str(&contents)
        .with_context(|| format!("Failed to parse format from {:?}", path))
}

/// Parses a repeated `--field key=value` argument.
pub(crate) fn parse_field(s: &str) -> Result<(String, String), String> {
    s.split_once('=')
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .ok_or_else(|| format!("expected key=value, got '{s}'"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_field() {
        assert_eq!(
            parse_field("brand=Acme").unwrap(),
            ("brand".to_string(), "Acme".to_string())
        );
        // Only the first '=' splits; values may contain more.
        assert_eq!(
            parse_field("note=a=b").unwrap(),
            ("note".to_string(), "a=b".to_string())
        );
        assert!(parse_field("no-separator").is_err());
    }
}
