use mymarketnews_api::{ApiMode, ApiRequest, ClientConfig, MarketQuery, Query, ReportQuery};
use serde_json::json;

fn config() -> ClientConfig {
    ClientConfig::from_toml_str(
        r#"
        report_base_url = "http://localhost:9000/services/v1.2/reports/"
        market_base_url = "http://localhost:9000/get_external_api/result"
        "#,
    )
    .unwrap()
}

#[test]
fn report_request_uses_configured_base() {
    let request: ApiRequest = ReportQuery::new("2466")
        .with_begin_date("07/01/2021")
        .into();
    assert_eq!(request.mode(), ApiMode::Report);

    let built = request.build(&config()).unwrap();
    assert_eq!(
        built.url,
        "http://localhost:9000/services/v1.2/reports/2466?q=report_begin_date=07/01/2021"
    );
    assert!(built.payload.is_none());
}

#[test]
fn market_request_carries_payload() {
    let request: ApiRequest = MarketQuery::default()
        .with_commodity("hemp seed")
        .with_class("hemp")
        .with_organic("all")
        .into();
    assert_eq!(request.mode(), ApiMode::Market);

    let built = request.build(&config()).unwrap();
    assert_eq!(built.url, "http://localhost:9000/get_external_api/result");
    assert_eq!(
        built.payload,
        Some(json!({"MT": "/3/", "COMD": "Hemp Seed", "CLASS": "Hemp", "ORGC": "All"}))
    );
}

#[test]
fn invalid_organic_flag_fails_before_sending() {
    let request: ApiRequest = MarketQuery::default().with_organic("maybe").into();
    assert!(request.build(&config()).is_err());
}
