//! Compile-time table of downloadable kinds.

use std::collections::HashMap;
use std::sync::OnceLock;

use suimon_types::{DataCategory, KindCode, Strategy};

/// One row of the dispatch table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KindEntry {
    /// Data family.
    pub category: DataCategory,
    /// Kind code within the family.
    pub kind: KindCode,
    /// How the portal wants this kind queried.
    pub strategy: Strategy,
}

impl KindEntry {
    const fn new(category: DataCategory, kind: u32, strategy: Strategy) -> Self {
        Self {
            category,
            kind: KindCode::new(kind),
            strategy,
        }
    }
}

impl std::fmt::Display for KindEntry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} kind {}: {}", self.category, self.kind, self.strategy)
    }
}

// Water kinds 5-8 are the same queries as 1-4 against a second gauge series.
const TABLE: &[KindEntry] = &[
    KindEntry::new(DataCategory::Rain, 1, Strategy::MONTHLY_EXACT),
    KindEntry::new(DataCategory::Rain, 2, Strategy::MONTHLY_PADDED),
    KindEntry::new(DataCategory::Rain, 3, Strategy::YEARLY),
    KindEntry::new(DataCategory::Rain, 4, Strategy::PERIOD),
    KindEntry::new(DataCategory::Water, 1, Strategy::MONTHLY_EXACT),
    KindEntry::new(DataCategory::Water, 2, Strategy::MONTHLY_PADDED),
    KindEntry::new(DataCategory::Water, 3, Strategy::YEARLY),
    KindEntry::new(DataCategory::Water, 4, Strategy::PERIOD),
    KindEntry::new(DataCategory::Water, 5, Strategy::MONTHLY_EXACT),
    KindEntry::new(DataCategory::Water, 6, Strategy::MONTHLY_PADDED),
    KindEntry::new(DataCategory::Water, 7, Strategy::YEARLY),
    KindEntry::new(DataCategory::Water, 8, Strategy::PERIOD),
];

/// Global registry instance.
static REGISTRY: OnceLock<KindRegistry> = OnceLock::new();

/// Lookup of download strategies by category and kind.
#[derive(Debug)]
pub struct KindRegistry {
    entries: HashMap<(DataCategory, KindCode), KindEntry>,
}

impl KindRegistry {
    /// Returns the global registry.
    ///
    /// The registry is built lazily on first access.
    #[must_use]
    pub fn global() -> &'static Self {
        REGISTRY.get_or_init(Self::load)
    }

    fn load() -> Self {
        let entries = TABLE
            .iter()
            .map(|entry| ((entry.category, entry.kind), *entry))
            .collect();
        Self { entries }
    }

    /// Looks up the strategy for a pair, or `None` if it is unsupported.
    #[must_use]
    pub fn get(&self, category: DataCategory, kind: KindCode) -> Option<Strategy> {
        self.entry(category, kind).map(|e| e.strategy)
    }

    /// Looks up the full table row for a pair.
    #[must_use]
    pub fn entry(&self, category: DataCategory, kind: KindCode) -> Option<&KindEntry> {
        self.entries.get(&(category, kind))
    }

    /// Returns every row, ordered by category then kind.
    #[must_use]
    pub fn all(&self) -> Vec<&KindEntry> {
        let mut rows: Vec<&KindEntry> = self.entries.values().collect();
        rows.sort_by_key(|e| (e.category, e.kind));
        rows
    }

    /// Returns the rows of one category, ordered by kind.
    #[must_use]
    pub fn by_category(&self, category: DataCategory) -> Vec<&KindEntry> {
        self.all()
            .into_iter()
            .filter(|e| e.category == category)
            .collect()
    }

    /// Returns the number of supported pairs.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if no pair is supported.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
