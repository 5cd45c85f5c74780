//! Category and kind lookup from a station's site-info page.

use scraper::Html;
use serde::{Deserialize, Serialize};
use suimon_types::{DataCategory, KindCode, StationId};
use tracing::warn;

use crate::{PortalClient, parse, url};

/// What the site-info page says about a station's data item.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct KindResolution {
    /// Category of the first data link on the page.
    pub category: Option<DataCategory>,
    /// Kind code linked by the item's image.
    pub kind: Option<KindCode>,
}

impl KindResolution {
    /// Parses a decoded site-info page.
    #[must_use]
    pub fn parse(html: &str, item_name: &str) -> Self {
        let document = Html::parse_document(html);
        Self {
            category: parse::detect_category(&document),
            kind: parse::find_kind(&document, item_name),
        }
    }
}

/// Looks up the category and kind code for the item labelled `item_name`.
///
/// A transport failure yields an empty resolution.
pub async fn resolve_kind(
    client: &PortalClient,
    station_id: &StationId,
    item_name: &str,
) -> KindResolution {
    let url = url::site_info_url(&client.config().base_url, station_id);
    match client.get_page(&url).await {
        Ok(html) => KindResolution::parse(&html, item_name),
        Err(e) => {
            warn!(station = %station_id, error = %e, "site info unavailable");
            KindResolution::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolution_parse() {
        let html = r#"
            <a href="SrchWaterData.exe?ID=1&KIND=2&PAGE=0"><img alt="日水位"></a>
            <a href="SrchWaterData.exe?ID=1&KIND=1&PAGE=0"><img alt="時刻水位"></a>
        "#;
        let resolution = KindResolution::parse(html, "時刻水位");
        assert_eq!(resolution.category, Some(DataCategory::Water));
        assert_eq!(resolution.kind, Some(KindCode::new(1)));

        assert_eq!(KindResolution::parse(html, "雨量").kind, None);
    }
}
