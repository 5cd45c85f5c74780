//! Display utilities for the suimon CLI.

use indicatif::{ProgressBar, ProgressStyle};
use suimon_lib::prelude::*;

/// Glyph for a year with data.
const PRESENT: char = '■';

/// Glyph for a year without data.
const ABSENT: char = '·';

/// Prints the availability grid, one row per decade.
pub(crate) fn print_availability(record: &AvailabilityRecord) {
    if record.is_empty() {
        println!("No availability table found.");
        return;
    }

    print!("{:<8}", "DECADE");
    for digit in 0..10 {
        print!(" {digit}");
    }
    println!();
    println!("{}", "-".repeat(28));

    for row in record.by_decade() {
        print!("{:<8}", format!("{}x", row.prefix));
        for cell in row.cells {
            let glyph = match cell {
                Presence::Present => PRESENT,
                Presence::Absent => ABSENT,
            };
            print!(" {glyph}");
        }
        println!();
    }
}

/// Prints the three identity fields.
pub(crate) fn print_identity(identity: &StationIdentity) {
    println!("Station:      {}", identity.station());
    println!("Water system: {}", identity.water_system());
    println!("River:        {}", identity.river());
}

/// Creates the per-step progress bar, hidden in quiet mode.
pub(crate) fn step_progress(len: usize, quiet: bool) -> ProgressBar {
    if quiet {
        return ProgressBar::hidden();
    }

    let pb = ProgressBar::new(len as u64);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} files ({percent}%) {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_bar())
            .progress_chars("=>-"),
    );
    pb
}
