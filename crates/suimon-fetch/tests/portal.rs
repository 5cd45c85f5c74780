//! Session and exchange against a local fake portal.

use encoding_rs::SHIFT_JIS;
use suimon_fetch::testing::{FakePortal, euc_page as euc};
use suimon_fetch::{PortalClient, StationSession, resolve_kind};
use suimon_types::{DataCategory, DownloadRequest, KindCode, RequestSpan, StationId, WireDate};

const DETAIL: &str = r##"<html><body>
<font size="+2">八斗島 年雨量</font>
<table border="1">
<tr><th>番号</th><th>観測所名</th><th>水系名</th><th>河川名</th></tr>
<tr><td>1</td><td>八斗島</td><td>利根川</td><td>利根川</td></tr>
</table>
<table><tr>
<td bgcolor="#FFFFCC">201*</td>
<td><img src="nashi.gif"></td><td><img src="nashi.gif"></td><td><img src="nashi.gif"></td>
<td><img src="nashi.gif"></td><td><img src="nashi.gif"></td><td><img src="ari.gif"></td>
<td><img src="ari.gif"></td><td><img src="ari.gif"></td><td><img src="nashi.gif"></td>
<td><img src="ari.gif"></td>
</tr></table>
</body></html>"##;

fn client(portal: &FakePortal) -> PortalClient {
    PortalClient::new(portal.config()).unwrap()
}

fn yearly(year: i32) -> DownloadRequest {
    DownloadRequest {
        station_id: StationId::new("ST1"),
        category: DataCategory::Rain,
        kind: KindCode::new(3),
        span: RequestSpan::Year { year },
        begin: WireDate::new(year, 1, 31),
        end: WireDate::new(year, 12, 31),
    }
}

#[tokio::test]
async fn test_session_reads_detail_page_once() {
    let portal = FakePortal::serve(vec![(
        "/cgi-bin/SrchRainData.exe?ID=ST1&KIND=3&PAGE=0".into(),
        euc(DETAIL),
    )])
    .await
    .unwrap();

    let session = StationSession::new(
        client(&portal),
        DataCategory::Rain,
        StationId::new("ST1"),
        KindCode::new(3),
    );

    assert_eq!(session.fetch_header_value().await.as_deref(), Some("八斗島 年雨量"));
    let identity = session.fetch_station_data().await;
    assert_eq!(identity.station(), "八斗島");
    assert_eq!(identity.water_system(), "利根川");
    assert_eq!(
        session.filter_years().await,
        vec!["2015", "2016", "2017", "2019"]
    );
    assert!(session.validate_range(2015, 2017).await);
    assert!(!session.validate_range(2017, 2019).await);
    assert!(!session.validate_range(2019, 2020).await);

    assert_eq!(portal.requests().len(), 1);
}

#[tokio::test]
async fn test_execute_request_exchanges_token() {
    let payload = "観測所,八斗島\r\n2019,1234.5\r\n";
    let portal = FakePortal::serve(vec![
        (
            "/cgi-bin/DspRainData.exe?KIND=3&ID=ST1&BGNDATE=20190131&ENDDATE=20191231&KAWABOU=NO"
                .into(),
            euc(r#"<a href="/dat/dload/tmp/98765.dat" target="_blank">ダウンロード</a>"#),
        ),
        (
            "/cgi-bin/DspRainData.exe".into(),
            euc("<p>データがありません</p>"),
        ),
        (
            "/dat/dload/download/98765.dat".into(),
            SHIFT_JIS.encode(payload).0.into_owned(),
        ),
    ])
    .await
    .unwrap();
    let client = client(&portal);

    let bytes = client.execute_request(&yearly(2019)).await.unwrap();
    assert_eq!(bytes.as_deref(), Some(payload.as_bytes()));

    let none = client.execute_request(&yearly(2018)).await.unwrap();
    assert_eq!(none, None);

    let paths = portal.requests();
    assert_eq!(paths.len(), 3);
    assert_eq!(paths[1], "/dat/dload/download/98765.dat");
}

#[tokio::test]
async fn test_execute_request_reports_status() {
    let portal = FakePortal::serve(Vec::new()).await.unwrap();
    let result = client(&portal).execute_request(&yearly(2019)).await;
    assert!(result.is_err());
}

#[tokio::test]
async fn test_resolve_kind() {
    let portal = FakePortal::serve(vec![(
        "/cgi-bin/SiteInfo.exe?ID=ST1".into(),
        euc(r#"<a href="SrchRainData.exe?ID=ST1&KIND=3&PAGE=0"><img alt="年雨量"></a>"#),
    )])
    .await
    .unwrap();
    let client = client(&portal);

    let resolution = resolve_kind(&client, &StationId::new("ST1"), "年雨量").await;
    assert_eq!(resolution.category, Some(DataCategory::Rain));
    assert_eq!(resolution.kind, Some(KindCode::new(3)));

    let missing = resolve_kind(&client, &StationId::new("ST2"), "年雨量").await;
    assert_eq!(missing.category, None);
}
