//! Full download against a local fake portal.

use encoding_rs::SHIFT_JIS;
use suimon_fetch::testing::{FakePortal, euc_page as euc};
use suimon_lib::prelude::*;
use tempfile::TempDir;

fn grid_row(prefix: &str, present: [bool; 10]) -> String {
    let cells: String = present
        .iter()
        .map(|p| {
            let img = if *p { "ari.gif" } else { "nashi.gif" };
            format!(r#"<td><img src="/img/{img}"></td>"#)
        })
        .collect();
    format!(r##"<tr><td bgcolor="#FFFFCC">{prefix}*</td>{cells}</tr>"##)
}

fn detail_page() -> String {
    let mut d202 = [false; 10];
    d202[0] = true;
    format!(
        r#"<html><body>
        <font size="+2">八斗島 時刻雨量</font>
        <table border="1">
        <tr><th>番号</th><th>観測所名</th><th>水系名</th><th>河川名</th></tr>
        <tr><td>1</td><td>八斗島</td><td>利根川</td><td>烏川</td></tr>
        </table>
        <table>{}{}</table>
        </body></html>"#,
        grid_row("201", [true; 10]),
        grid_row("202", d202),
    )
}

fn month_query(begin: &str, end: &str) -> String {
    format!(
        "/cgi-bin/DspRainData.exe?KIND=1&ID=ST1&BGNDATE={begin}&ENDDATE={end}&KAWABOU=NO"
    )
}

fn token_page(token: &str) -> Vec<u8> {
    euc(&format!(
        r#"<a href="/dat/dload/tmp/{token}.dat" target="_blank">ダウンロード</a>"#
    ))
}

fn payload(label: &str) -> String {
    format!("八斗島,{label}\r\n")
}

async fn portal() -> FakePortal {
    FakePortal::serve(vec![
        (
            "/cgi-bin/SrchRainData.exe?ID=ST1&KIND=1&PAGE=0".into(),
            euc(&detail_page()),
        ),
        (month_query("20191101", "20191130"), token_page("t201911")),
        (month_query("20191201", "20191231"), token_page("t201912")),
        (month_query("20200201", "20200229"), token_page("t202002")),
        (
            "/cgi-bin/DspRainData.exe".into(),
            euc("<p>該当データなし</p>"),
        ),
        (
            "/dat/dload/download/t201911.dat".into(),
            SHIFT_JIS.encode(&payload("2019/11")).0.into_owned(),
        ),
        (
            "/dat/dload/download/t201912.dat".into(),
            SHIFT_JIS.encode(&payload("2019/12")).0.into_owned(),
        ),
        (
            "/dat/dload/download/t202002.dat".into(),
            SHIFT_JIS.encode(&payload("2020/02")).0.into_owned(),
        ),
    ])
    .await
    .unwrap()
}

fn pipeline(portal: &FakePortal, root: &std::path::Path) -> DownloadPipeline {
    let client = PortalClient::new(portal.config()).unwrap();
    DownloadPipeline::new(client, Materializer::new(root))
}

#[tokio::test]
async fn test_monthly_download_end_to_end() {
    let server = portal().await;
    let tmp = TempDir::new().unwrap();
    let pipeline = pipeline(&server, tmp.path());

    let plan = pipeline
        .prepare(
            DataCategory::Rain,
            StationId::new("ST1"),
            KindCode::new(1),
            "2019/11",
            "2020/02",
        )
        .await
        .unwrap();
    assert_eq!(plan.len(), 4);
    assert_eq!(plan.identity.river(), "烏川");

    let mut reports = Vec::new();
    let summary = pipeline
        .execute(plan, |step| reports.push(step.clone()))
        .await;

    assert_eq!(summary.written.len(), 3);
    assert_eq!(summary.no_data, 1);
    assert_eq!(summary.failed, 0);
    assert_eq!(reports.len(), 4);
    assert_eq!(reports[2].status, StepStatus::NoData);

    let dir = tmp.path().join("SrchRainData_1_利根川_烏川_八斗島");
    let november = std::fs::read_to_string(dir.join("2019_11.dat")).unwrap();
    assert_eq!(november, payload("2019/11"));
    assert!(dir.join("2019_12.dat").exists());
    assert!(!dir.join("2020_01.dat").exists());
    assert!(dir.join("2020_02.dat").exists());
}

#[tokio::test]
async fn test_rerun_is_byte_identical() {
    let server = portal().await;
    let tmp = TempDir::new().unwrap();
    let pipeline = pipeline(&server, tmp.path());

    let run = || {
        pipeline.run(
            DataCategory::Rain,
            StationId::new("ST1"),
            KindCode::new(1),
            "2019/11",
            "2019/12",
            |_| {},
        )
    };

    let first = run().await.unwrap();
    let before: Vec<Vec<u8>> = first
        .written
        .iter()
        .map(|p| std::fs::read(p).unwrap())
        .collect();
    let second = run().await.unwrap();
    let after: Vec<Vec<u8>> = second
        .written
        .iter()
        .map(|p| std::fs::read(p).unwrap())
        .collect();

    assert_eq!(first.written, second.written);
    assert_eq!(before, after);
}

#[tokio::test]
async fn test_unavailable_range_downloads_nothing() {
    let server = portal().await;
    let tmp = TempDir::new().unwrap();
    let pipeline = pipeline(&server, tmp.path());

    let err = pipeline
        .prepare(
            DataCategory::Rain,
            StationId::new("ST1"),
            KindCode::new(1),
            "2020/01",
            "2021/03",
        )
        .await
        .unwrap_err();

    assert!(matches!(
        err,
        SuimonError::RangeUnavailable {
            start: 2020,
            end: 2021
        }
    ));
    assert_eq!(std::fs::read_dir(tmp.path()).unwrap().count(), 0);
}
