//! Auth commands: token storage for the backend API.

use anyhow::Result;
use clap::{Args, Subcommand};

use crate::config::{Config, Credentials};
use crate::output::{print_info, print_success};

/// Auth commands.
#[derive(Debug, Args)]
pub struct AuthCommand {
    #[command(subcommand)]
    command: AuthSubcommand,
}

#[derive(Debug, Subcommand)]
enum AuthSubcommand {
    /// Save an API token for the backend.
    SetToken(SetTokenArgs),

    /// Remove the saved token.
    Logout,

    /// Show the configured endpoint and whether a token is saved.
    Status,
}

#[derive(Debug, Args)]
struct SetTokenArgs {
    /// The bearer token to save.
    token: String,
}

impl AuthCommand {
    pub fn run(self) -> Result<()> {
        match self.command {
            AuthSubcommand::SetToken(args) => set_token(args),
            AuthSubcommand::Logout => logout(),
            AuthSubcommand::Status => status(),
        }
    }
}

fn set_token(args: SetTokenArgs) -> Result<()> {
    Credentials::new(args.token).save()?;
    print_success("Token saved.");
    Ok(())
}

fn logout() -> Result<()> {
    Credentials::delete()?;
    print_success("Token removed.");
    Ok(())
}

fn status() -> Result<()> {
    let config = Config::load()?;
    print_info(&format!("API endpoint: {}", config.api_url()));

    match Credentials::load()? {
        Some(_) => print_info("Token: saved"),
        None => print_info("Token: not set"),
    }

    Ok(())
}
