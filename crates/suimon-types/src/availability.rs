//! Per-year data availability parsed from the portal's decade grid.

use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// Whether the portal holds data for a year.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Presence {
    /// Data exists (`ari`).
    Present,
    /// No data (`nashi`).
    #[default]
    Absent,
}

impl Presence {
    /// Returns true for [`Presence::Present`].
    #[must_use]
    pub const fn is_present(&self) -> bool {
        matches!(self, Self::Present)
    }
}

/// Presence of data for one calendar year.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct YearAvailability {
    /// Four-digit year, formed from the decade prefix and the column digit.
    pub year: String,
    /// Whether data exists for the year.
    pub presence: Presence,
}

impl YearAvailability {
    /// Creates an entry.
    #[must_use]
    pub fn new(year: impl Into<String>, presence: Presence) -> Self {
        Self {
            year: year.into(),
            presence,
        }
    }
}

/// One decade of the availability grid, indexed by the year's last digit.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DecadeRow {
    /// Decade prefix (e.g. `"201"` for 2010-2019).
    pub prefix: String,
    /// Presence per last digit; years missing from the page are absent.
    pub cells: [Presence; 10],
}

/// Ordered availability entries for a station and kind.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AvailabilityRecord {
    entries: Vec<YearAvailability>,
}

impl AvailabilityRecord {
    /// Creates a record from parsed entries, keeping page order.
    #[must_use]
    pub const fn new(entries: Vec<YearAvailability>) -> Self {
        Self { entries }
    }

    /// Returns all entries.
    #[must_use]
    pub fn entries(&self) -> &[YearAvailability] {
        &self.entries
    }

    /// Returns true if the page produced no entries.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Returns the number of entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns the years marked present, in page order.
    #[must_use]
    pub fn available_years(&self) -> Vec<String> {
        self.entries
            .iter()
            .filter(|e| e.presence.is_present())
            .map(|e| e.year.clone())
            .collect()
    }

    /// Returns true if every year in `start..=end` is marked present.
    ///
    /// An empty record covers nothing, so any range fails against it.
    #[must_use]
    pub fn covers(&self, start: i32, end: i32) -> bool {
        let available: HashSet<&str> = self
            .entries
            .iter()
            .filter(|e| e.presence.is_present())
            .map(|e| e.year.as_str())
            .collect();

        (start..=end).all(|year| available.contains(year.to_string().as_str()))
    }

    /// Groups entries into decade rows, in order of first appearance.
    #[must_use]
    pub fn by_decade(&self) -> Vec<DecadeRow> {
        let mut rows: Vec<DecadeRow> = Vec::new();

        for entry in &self.entries {
            let Some((prefix, digit)) = split_year(&entry.year) else {
                continue;
            };
            let index = match rows.iter().position(|r| r.prefix == prefix) {
                Some(i) => i,
                None => {
                    rows.push(DecadeRow {
                        prefix: prefix.to_string(),
                        cells: [Presence::Absent; 10],
                    });
                    rows.len() - 1
                }
            };
            rows[index].cells[digit] = entry.presence;
        }

        rows
    }
}

fn split_year(year: &str) -> Option<(&str, usize)> {
    let (prefix, last) = year.split_at_checked(year.len().checked_sub(1)?)?;
    let digit = last.parse::<usize>().ok()?;
    Some((prefix, digit))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(present: &[&str], absent: &[&str]) -> AvailabilityRecord {
        let mut entries: Vec<_> = present
            .iter()
            .map(|y| YearAvailability::new(*y, Presence::Present))
            .collect();
        entries.extend(absent.iter().map(|y| YearAvailability::new(*y, Presence::Absent)));
        AvailabilityRecord::new(entries)
    }

    #[test]
    fn test_available_years() {
        let rec = record(&["2018", "2019"], &["2017"]);
        assert_eq!(rec.available_years(), vec!["2018", "2019"]);
        assert_eq!(rec.len(), 3);
    }

    #[test]
    fn test_covers_all_present() {
        let rec = record(&["2017", "2018", "2019", "2020"], &[]);
        assert!(rec.covers(2017, 2020));
        assert!(rec.covers(2019, 2019));
    }

    #[test]
    fn test_covers_rejects_gap() {
        let rec = record(&["2017", "2019", "2020"], &["2018"]);
        assert!(!rec.covers(2017, 2020));
        assert!(rec.covers(2019, 2020));
    }

    #[test]
    fn test_covers_rejects_missing_year() {
        let rec = record(&["2019"], &[]);
        assert!(!rec.covers(2019, 2021));
        assert!(!AvailabilityRecord::default().covers(2019, 2019));
    }

    #[test]
    fn test_by_decade() {
        let rec = record(&["2010", "2013", "2021"], &["2011"]);
        let rows = rec.by_decade();

        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].prefix, "201");
        assert_eq!(rows[0].cells[0], Presence::Present);
        assert_eq!(rows[0].cells[1], Presence::Absent);
        assert_eq!(rows[0].cells[3], Presence::Present);
        assert_eq!(rows[1].prefix, "202");
        assert_eq!(rows[1].cells[1], Presence::Present);
    }
}
