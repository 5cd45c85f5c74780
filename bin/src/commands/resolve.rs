//! Resolve command implementation.

use anyhow::{Context, Result};
use suimon_lib::prelude::*;

/// Look up the category and kind code of a station's data item.
pub(crate) async fn resolve(config: ClientConfig, station: &str, item: &str) -> Result<()> {
    let client = PortalClient::new(config).context("Failed to create HTTP client")?;
    let resolution = resolve_kind(&client, &StationId::new(station), item).await;

    match resolution.category {
        Some(category) => println!("Category: {category} ({})", category.search_endpoint()),
        None => println!("Category: not found"),
    }
    match resolution.kind {
        Some(kind) => println!("Kind:     {kind}"),
        None => println!("Kind:     no item named {item:?}"),
    }

    if let (Some(category), Some(kind)) = (resolution.category, resolution.kind) {
        match KindRegistry::global().get(category, kind) {
            Some(strategy) => println!(
                "\nDownload with: suimon download {station} --category {category} --kind {kind} ({strategy})"
            ),
            None => println!("\nThis kind is not downloadable."),
        }
    }

    Ok(())
}
