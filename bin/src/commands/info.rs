//! Info command implementation.
//!
//! This module shows a station's header, identity and availability grid.

use anyhow::{Context, Result};
use suimon_lib::prelude::*;

use crate::display::{print_availability, print_identity};

/// Show what the portal's detail page says about a station's data kind.
pub(crate) async fn show_info(
    config: ClientConfig,
    station: &str,
    category: DataCategory,
    kind: KindCode,
    json: bool,
) -> Result<()> {
    let client = PortalClient::new(config).context("Failed to create HTTP client")?;
    let session = StationSession::new(client, category, StationId::new(station), kind);
    let snapshot = session.snapshot().await;

    if json {
        println!("{}", serde_json::to_string_pretty(snapshot)?);
        return Ok(());
    }

    println!(
        "{}",
        snapshot.header.as_deref().unwrap_or("Header not found")
    );
    println!();
    print_identity(&snapshot.identity);
    println!("Endpoint:     {}", category.search_endpoint());
    match KindRegistry::global().get(category, kind) {
        Some(strategy) => println!("Kind:         {kind} ({strategy})"),
        None => println!("Kind:         {kind} (not downloadable)"),
    }

    println!();
    print_availability(&snapshot.availability);

    let years = snapshot.availability.available_years();
    if !years.is_empty() {
        println!("\nAvailable years: {}", years.join(", "));
    }

    Ok(())
}
