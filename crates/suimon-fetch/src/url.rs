//! River portal URL construction.

use suimon_types::{DataCategory, DownloadRequest, DownloadToken, KindCode, StationId};

/// Base URL of the portal's CGI programs.
pub const BASE_URL: &str = "http://www1.river.go.jp/cgi-bin";

/// Host serving prepared data files.
pub const DATA_HOST: &str = "http://www1.river.go.jp";

/// Builds the station detail page URL, which carries the availability grid.
///
/// URL format: `{base}/Srch{Stem}.exe?ID={id}&KIND={kind}&PAGE=0`
///
/// # Example
///
/// ```
/// use suimon_fetch::url::{BASE_URL, detail_url};
/// use suimon_types::{DataCategory, KindCode, StationId};
///
/// let url = detail_url(BASE_URL, DataCategory::Rain, &StationId::new("102011282220010"), KindCode::new(1));
/// assert_eq!(url, "http://www1.river.go.jp/cgi-bin/SrchRainData.exe?ID=102011282220010&KIND=1&PAGE=0");
/// ```
#[must_use]
pub fn detail_url(base: &str, category: DataCategory, id: &StationId, kind: KindCode) -> String {
    format!(
        "{}/{}.exe?ID={}&KIND={}&PAGE=0",
        base.trim_end_matches('/'),
        category.search_endpoint(),
        id,
        kind
    )
}

/// Builds the query URL whose response links the prepared data file.
///
/// URL format:
/// `{base}/Dsp{Stem}.exe?KIND={kind}&ID={id}&BGNDATE={YYYYMMDD}&ENDDATE={YYYYMMDD}&KAWABOU=NO`
#[must_use]
pub fn query_url(base: &str, request: &DownloadRequest) -> String {
    format!(
        "{}/{}.exe?KIND={}&ID={}&BGNDATE={}&ENDDATE={}&KAWABOU=NO",
        base.trim_end_matches('/'),
        request.category.display_endpoint(),
        request.kind,
        request.station_id,
        request.begin,
        request.end
    )
}

/// Builds the URL that redeems a download token.
#[must_use]
pub fn download_url(data_host: &str, token: &DownloadToken) -> String {
    format!(
        "{}/dat/dload/download/{}.dat",
        data_host.trim_end_matches('/'),
        token
    )
}

/// Builds the station's site-info page URL.
#[must_use]
pub fn site_info_url(base: &str, id: &StationId) -> String {
    format!("{}/SiteInfo.exe?ID={}", base.trim_end_matches('/'), id)
}
