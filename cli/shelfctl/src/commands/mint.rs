//! Mint command: produce a real identifier through the backend.

use std::collections::BTreeMap;
use std::path::PathBuf;

use anyhow::Result;
use clap::Args;

use shelfmark_format::InventoryId;

#[derive(Debug, Args)]
pub struct MintArgs {
    /// Inventory ID (inv_…).
    #[arg(long, env = "SHELFMARK_INVENTORY")]
    inventory: InventoryId,

    /// Mint from a local format file instead of the stored format.
    #[arg(long)]
    file: Option<PathBuf>,

    /// Field value of the record being identified, repeatable (key=value).
    #[arg(long = "field", value_parser = super::parse_field)]
    fields: Vec<(String, String)>,
}

pub async fn run(args: MintArgs) -> Result<()> {
    let client = super::api_client()?;

    let format = match &args.file {
        Some(path) => super::load_format(path)?,
        None => client.fetch_format(&args.inventory).await?,
    };

    let fields: BTreeMap<String, String> = args.fields.into_iter().collect();
    let identifier = client
        .mint_identifier(&args.inventory, &format, fields)
        .await?;

    println!("{identifier}");
    Ok(())
}
