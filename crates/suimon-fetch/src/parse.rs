//! Extraction of portal data from decoded HTML.
//!
//! Every function here is total: markup that does not match yields `None`,
//! an empty record or the [`UNKNOWN`](suimon_types::UNKNOWN) identity.

use scraper::{ElementRef, Html, Selector};
use std::sync::LazyLock;
use suimon_types::{
    AvailabilityRecord, DataCategory, DownloadToken, KindCode, Presence, StationIdentity,
    YearAvailability,
};

/// Background colour of the cell that labels a decade row.
pub const DECADE_BGCOLOR: &str = "#FFFFCC";

/// Image whose presence marks a year with data.
const PRESENT_IMAGE: &str = "ari.gif";

fn selector(css: &'static str) -> Selector {
    Selector::parse(css).unwrap_or_else(|_| unreachable!("invalid selector: {css}"))
}

static HEADER: LazyLock<Selector> = LazyLock::new(|| selector(r#"font[size="+2"]"#));
static ROW: LazyLock<Selector> = LazyLock::new(|| selector("tr"));
static CELL: LazyLock<Selector> = LazyLock::new(|| selector("td"));
static IMG: LazyLock<Selector> = LazyLock::new(|| selector("img"));
static ALT_IMG: LazyLock<Selector> = LazyLock::new(|| selector("img[alt]"));
static IDENTITY_TABLE: LazyLock<Selector> = LazyLock::new(|| selector(r#"table[border="1"]"#));
static TOKEN_LINK: LazyLock<Selector> =
    LazyLock::new(|| selector(r#"a[href][target="_blank"]"#));
static LINK: LazyLock<Selector> = LazyLock::new(|| selector("a[href]"));

/// Concatenates an element's text nodes, each trimmed.
fn text_of(element: ElementRef<'_>) -> String {
    element.text().map(str::trim).collect()
}

/// Returns the page title shown in the first `<font size="+2">`.
#[must_use]
pub fn parse_header(document: &Html) -> Option<String> {
    document.select(&HEADER).next().map(text_of)
}

/// Reads the decade grid of a station detail page.
///
/// In each row, the first cell coloured [`DECADE_BGCOLOR`] holds the decade
/// prefix and the next ten cells hold years 0-9. A cell showing `ari.gif` is
/// present; any other image, or no image at all, is absent. Every digit of a
/// decade row yields one entry.
#[must_use]
pub fn parse_availability(document: &Html) -> AvailabilityRecord {
    let mut entries = Vec::new();

    for row in document.select(&ROW) {
        let cells: Vec<ElementRef<'_>> = row.select(&CELL).collect();
        let Some(header) = cells.iter().position(|cell| {
            cell.value()
                .attr("bgcolor")
                .is_some_and(|c| c.eq_ignore_ascii_case(DECADE_BGCOLOR))
        }) else {
            continue;
        };

        let prefix = text_of(cells[header]).replace('*', "");
        let years = &cells[header + 1..];
        for digit in 0..10 {
            let presence = years
                .get(digit)
                .map_or(Presence::Absent, |cell| cell_presence(*cell));
            entries.push(YearAvailability::new(format!("{prefix}{digit}"), presence));
        }
    }

    AvailabilityRecord::new(entries)
}

fn cell_presence(cell: ElementRef<'_>) -> Presence {
    let present = cell.select(&IMG).any(|img| {
        img.value()
            .attr("src")
            .is_some_and(|src| src.contains(PRESENT_IMAGE))
    });
    if present { Presence::Present } else { Presence::Absent }
}

/// Reads the station, water-system and river names from the identity table.
///
/// Uses the first `table[border="1"]`; after its header row, the first row
/// with exactly four cells holds `[_, station, water_system, river]`.
#[must_use]
pub fn parse_station_identity(document: &Html) -> StationIdentity {
    let Some(table) = document.select(&IDENTITY_TABLE).next() else {
        return StationIdentity::unknown();
    };

    table
        .select(&ROW)
        .skip(1)
        .map(|row| row.select(&CELL).collect::<Vec<_>>())
        .find(|cells| cells.len() == 4)
        .map_or_else(StationIdentity::unknown, |cells| {
            StationIdentity::new(text_of(cells[2]), text_of(cells[3]), text_of(cells[1]))
        })
}

/// Finds the download token on a query result page.
#[must_use]
pub fn extract_token(document: &Html) -> Option<DownloadToken> {
    document
        .select(&TOKEN_LINK)
        .next()
        .and_then(|a| a.value().attr("href"))
        .and_then(token_from_href)
}

/// Takes the last path segment of `href` without its extension.
///
/// # Example
///
/// ```
/// use suimon_fetch::parse::token_from_href;
///
/// let token = token_from_href("/dat/dload/tmp/12345.dat").unwrap();
/// assert_eq!(token.as_str(), "12345");
/// ```
#[must_use]
pub fn token_from_href(href: &str) -> Option<DownloadToken> {
    let file = href.rsplit('/').next()?;
    let stem = file.split('.').next()?;
    (!stem.is_empty()).then(|| DownloadToken::new(stem))
}

/// Returns the category of the first link naming a search endpoint.
#[must_use]
pub fn detect_category(document: &Html) -> Option<DataCategory> {
    document
        .select(&LINK)
        .filter_map(|a| a.value().attr("href"))
        .find_map(|href| {
            DataCategory::all()
                .iter()
                .copied()
                .find(|category| href.contains(&category.search_endpoint()))
        })
}

/// Finds the kind code linked by the image labelled `item_name`.
///
/// The image must sit inside an anchor whose `href` carries `KIND=<digits>`.
#[must_use]
pub fn find_kind(document: &Html, item_name: &str) -> Option<KindCode> {
    document
        .select(&ALT_IMG)
        .filter(|img| img.value().attr("alt") == Some(item_name))
        .find_map(|img| {
            img.ancestors()
                .filter_map(ElementRef::wrap)
                .find(|el| el.value().name() == "a")
                .and_then(|a| a.value().attr("href"))
                .and_then(kind_from_href)
        })
}

fn kind_from_href(href: &str) -> Option<KindCode> {
    href.match_indices("KIND=").find_map(|(i, key)| {
        let rest = &href[i + key.len()..];
        let len = rest.bytes().take_while(u8::is_ascii_digit).count();
        rest[..len].parse::<u32>().ok().map(KindCode::new)
    })
}
