//! Kinds command implementation.
//!
//! This module prints the dispatch table of downloadable kinds.

use anyhow::Result;
use suimon_lib::prelude::*;

/// List downloadable kinds, optionally for one category.
pub(crate) fn list_kinds(category: Option<DataCategory>) -> Result<()> {
    let registry = KindRegistry::global();
    let entries = match category {
        Some(category) => registry.by_category(category),
        None => registry.all(),
    };

    if entries.is_empty() {
        println!("No downloadable kinds.");
        return Ok(());
    }

    println!("{:<16} {:<6} {:<16} {:<10}", "ENDPOINT", "KIND", "STRATEGY", "FILES");
    println!("{}", "-".repeat(52));

    for entry in &entries {
        let files = match entry.strategy.naming() {
            FileNaming::YearMonth => "YYYY_MM.dat",
            FileNaming::Year => "YYYY.dat",
            FileNaming::Span => "S-E.dat",
        };
        println!(
            "{:<16} {:<6} {:<16} {:<10}",
            entry.category.search_endpoint(),
            entry.kind,
            entry.strategy,
            files
        );
    }

    println!("\nTotal: {} kinds", entries.len());
    Ok(())
}
