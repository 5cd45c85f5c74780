//! Per-station session over the detail page.

use scraper::Html;
use serde::{Deserialize, Serialize};
use suimon_types::{AvailabilityRecord, DataCategory, KindCode, StationId, StationIdentity};
use tokio::sync::OnceCell;
use tracing::{debug, warn};

use crate::{PortalClient, parse, url};

/// Everything read from one station detail page.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct DetailSnapshot {
    /// Page title, if present.
    pub header: Option<String>,
    /// Station identity; fields default to `Unknown`.
    pub identity: StationIdentity,
    /// Decade-grid availability.
    pub availability: AvailabilityRecord,
}

impl DetailSnapshot {
    /// Parses a decoded detail page.
    #[must_use]
    pub fn parse(html: &str) -> Self {
        let document = Html::parse_document(html);
        Self {
            header: parse::parse_header(&document),
            identity: parse::parse_station_identity(&document),
            availability: parse::parse_availability(&document),
        }
    }
}

/// Accessors over one station's detail page for one data kind.
///
/// The page is fetched on first access and shared by every accessor for the
/// life of the session. A failed fetch is remembered too: the accessors then
/// report no header, no availability and an unknown identity.
#[derive(Debug)]
pub struct StationSession {
    client: PortalClient,
    category: DataCategory,
    station_id: StationId,
    kind: KindCode,
    detail: OnceCell<DetailSnapshot>,
}

impl StationSession {
    /// Creates a session; nothing is fetched until an accessor is called.
    #[must_use]
    pub fn new(
        client: PortalClient,
        category: DataCategory,
        station_id: StationId,
        kind: KindCode,
    ) -> Self {
        Self {
            client,
            category,
            station_id,
            kind,
            detail: OnceCell::new(),
        }
    }

    /// Returns the station identifier.
    #[must_use]
    pub const fn station_id(&self) -> &StationId {
        &self.station_id
    }

    /// Returns the data category.
    #[must_use]
    pub const fn category(&self) -> DataCategory {
        self.category
    }

    /// Returns the kind code.
    #[must_use]
    pub const fn kind(&self) -> KindCode {
        self.kind
    }

    /// Returns the client the session fetches with.
    #[must_use]
    pub const fn client(&self) -> &PortalClient {
        &self.client
    }

    /// Returns the parsed detail page, fetching it on first call.
    pub async fn snapshot(&self) -> &DetailSnapshot {
        self.detail
            .get_or_init(|| async {
                let url = url::detail_url(
                    &self.client.config().base_url,
                    self.category,
                    &self.station_id,
                    self.kind,
                );
                match self.client.get_page(&url).await {
                    Ok(html) => {
                        let snapshot = DetailSnapshot::parse(&html);
                        debug!(
                            station = %self.station_id,
                            years = snapshot.availability.len(),
                            "read detail page"
                        );
                        snapshot
                    }
                    Err(e) => {
                        warn!(station = %self.station_id, error = %e, "detail page unavailable");
                        DetailSnapshot::default()
                    }
                }
            })
            .await
    }

    /// Returns the page title, or `None` if the page or element is missing.
    pub async fn fetch_header_value(&self) -> Option<String> {
        self.snapshot().await.header.clone()
    }

    /// Returns the availability grid.
    pub async fn fetch_table_data(&self) -> AvailabilityRecord {
        self.snapshot().await.availability.clone()
    }

    /// Returns the years with data, in page order.
    pub async fn filter_years(&self) -> Vec<String> {
        self.snapshot().await.availability.available_years()
    }

    /// Returns the station identity.
    pub async fn fetch_station_data(&self) -> StationIdentity {
        let identity = self.snapshot().await.identity.clone();
        if identity.is_unknown() {
            warn!(station = %self.station_id, "station identity not found, using Unknown");
        }
        identity
    }

    /// Returns true only if every year in `start..=end` has data.
    pub async fn validate_range(&self, start: i32, end: i32) -> bool {
        let ok = self.snapshot().await.availability.covers(start, end);
        if !ok {
            warn!(station = %self.station_id, start, end, "range not fully available");
        }
        ok
    }
}
