use mymarketnews_api::{Client, ClientConfig, Error, Market, Report};
use serde_json::json;
use wiremock::matchers::{body_json, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn load_fixture(name: &str) -> String {
    std::fs::read_to_string(format!("tests/fixtures/{}", name)).unwrap()
}

fn config(server: &MockServer) -> ClientConfig {
    ClientConfig::default().with_base_url(&server.uri())
}

#[tokio::test]
async fn report_fetches_on_construction() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/services/v1.2/reports/2466"))
        .respond_with(ResponseTemplate::new(200).set_body_string(load_fixture("report_2466.json")))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = Client::for_reports(config(&mock_server), Some("test-key")).unwrap();
    let report = Report::fetch(client, "2466").await.unwrap();

    assert_eq!(report.slug_id(), "2466");
    assert_eq!(report.to_string(), "Report(slug_id=2466)");
    assert!(report.url().ends_with("/services/v1.2/reports/2466"));
    assert_eq!(report.data()["reportSection"], "Report Detail");
    assert_eq!(report.table().len(), 3);
}

#[tokio::test]
async fn report_construction_fails_on_remote_error() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/services/v1.2/reports/2466"))
        .respond_with(ResponseTemplate::new(401).set_body_string("Unauthorized"))
        .mount(&mock_server)
        .await;

    let client = Client::for_reports(config(&mock_server), Some("bad-key")).unwrap();
    let err = Report::fetch(client, "2466").await.unwrap_err();
    assert!(matches!(err, Error::RemoteRequest { status: 401, .. }));
}

#[tokio::test]
async fn failed_set_slug_id_keeps_previous_report() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/services/v1.2/reports/2466"))
        .respond_with(ResponseTemplate::new(200).set_body_string(load_fixture("report_2466.json")))
        .mount(&mock_server)
        .await;
    Mock::given(method("GET"))
        .and(path("/services/v1.2/reports/1095"))
        .respond_with(ResponseTemplate::new(404).set_body_string("Not Found"))
        .mount(&mock_server)
        .await;

    let client = Client::for_reports(config(&mock_server), Some("test-key")).unwrap();
    let mut report = Report::fetch(client, "2466").await.unwrap();
    let before = report.data().clone();

    let err = report.set_slug_id("1095").await.unwrap_err();
    assert!(matches!(err, Error::RemoteRequest { status: 404, .. }));
    assert_eq!(report.slug_id(), "2466");
    assert_eq!(report.data(), &before);
}

#[tokio::test]
async fn set_slug_id_replaces_data() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/services/v1.2/reports/2466"))
        .respond_with(ResponseTemplate::new(200).set_body_string(load_fixture("report_2466.json")))
        .mount(&mock_server)
        .await;
    Mock::given(method("GET"))
        .and(path("/services/v1.2/reports/1095"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "results": [{"report_begin_date": "07/28/2021", "commodity": "Apples"}]
        })))
        .mount(&mock_server)
        .await;

    let client = Client::for_reports(config(&mock_server), Some("test-key")).unwrap();
    let mut report = Report::fetch(client, "2466").await.unwrap();
    report.set_slug_id("1095").await.unwrap();

    assert_eq!(report.slug_id(), "1095");
    assert_eq!(report.table().len(), 1);
    assert_eq!(report.table().get(0, "commodity"), Some(&json!("Apples")));
}

#[tokio::test]
async fn market_end_to_end_posts_once_with_begin_date_only() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/get_external_api/result"))
        .and(body_json(json!({
            "MT": "/3/",
            "COMD": "Lettuce, Green Leaf",
            "CLASS": "All",
            "REGN": "National",
            "ORGC": "No",
            "DATE": ["07/01/2021"]
        })))
        .respond_with(ResponseTemplate::new(200).set_body_string(load_fixture("market_results.json")))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = Client::for_market(config(&mock_server)).unwrap();
    let mut market = Market::builder()
        .commodity("LETTUCE, GREEN LEAF")
        .region("National")
        .class("All")
        .organic("No")
        .begin_date("07/01/2021")
        .build(client)
        .unwrap();

    market.refresh_data().await.unwrap();
    assert_eq!(market.data().len(), 2);
    assert_eq!(
        market.data().get(1, "weighted_avg_price"),
        Some(&json!(19.1))
    );
}

#[tokio::test]
async fn failed_market_refresh_keeps_previous_rows() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/get_external_api/result"))
        .respond_with(ResponseTemplate::new(200).set_body_string(load_fixture("market_results.json")))
        .up_to_n_times(1)
        .mount(&mock_server)
        .await;
    Mock::given(method("POST"))
        .and(path("/get_external_api/result"))
        .respond_with(ResponseTemplate::new(500).set_body_string("Internal Server Error"))
        .mount(&mock_server)
        .await;

    let client = Client::for_market(config(&mock_server)).unwrap();
    let mut market = Market::builder()
        .commodity("apples")
        .build(client)
        .unwrap();

    market.refresh_data().await.unwrap();
    let before = market.data().clone();
    assert_eq!(before.len(), 2);

    let err = market.refresh_data().await.unwrap_err();
    assert!(matches!(err, Error::RemoteRequest { status: 500, .. }));
    assert_eq!(market.data(), &before);
}

#[tokio::test]
async fn refresh_replaces_rows_wholesale() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/get_external_api/result"))
        .respond_with(ResponseTemplate::new(200).set_body_string(load_fixture("market_results.json")))
        .up_to_n_times(1)
        .mount(&mock_server)
        .await;
    Mock::given(method("POST"))
        .and(path("/get_external_api/result"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"results": []})))
        .mount(&mock_server)
        .await;

    let client = Client::for_market(config(&mock_server)).unwrap();
    let mut market = Market::new(client);
    market.refresh_data().await.unwrap();
    assert_eq!(market.data().len(), 2);

    market.refresh_data().await.unwrap();
    assert!(market.data().is_empty());
}
