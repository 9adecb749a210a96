//! Fetch stage integration tests against a mock catalog endpoint

use std::path::PathBuf;
use std::time::Duration;

use rust_decimal_macros::dec;
use serde_json::json;
use url::Url;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use salespipe::catalog::{validate_products, CatalogClient};
use salespipe::config::PipelineConfig;
use salespipe::errors::{FetchError, MalformedRecordError};
use salespipe::report::aggregate_sales;

fn config_for(server: &MockServer) -> PipelineConfig {
    PipelineConfig {
        endpoint: Url::parse(&format!("{}/products", server.uri())).unwrap(),
        output_dir: PathBuf::from("/tmp/unused"),
        request_timeout: Duration::from_secs(5),
    }
}

fn catalog_body() -> serde_json::Value {
    json!([
        {
            "id": 1,
            "title": "Backpack",
            "price": 10.0,
            "category": "a",
            "rating": { "rate": 3.9, "count": 2 }
        },
        {
            "id": 2,
            "title": "Shirt",
            "price": 5.0,
            "category": "a",
            "rating": { "rate": 4.1, "count": 1 }
        },
        {
            "id": 3,
            "title": "Ring",
            "price": 3.0,
            "category": "b",
            "rating": { "rate": 4.7, "count": 4 }
        }
    ])
}

#[tokio::test]
async fn fetches_and_decodes_catalog_array() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/products"))
        .respond_with(ResponseTemplate::new(200).set_body_json(catalog_body()))
        .mount(&server)
        .await;

    let client = CatalogClient::new(&config_for(&server)).unwrap();
    let raw = client.fetch_products().await.unwrap();
    let records = validate_products(raw).unwrap();

    assert_eq!(records.len(), 3);
    assert_eq!(records[0].category, "a");
    assert_eq!(records[2].count, 4);
}

#[tokio::test]
async fn fetched_records_aggregate_to_expected_totals() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/products"))
        .respond_with(ResponseTemplate::new(200).set_body_json(catalog_body()))
        .mount(&server)
        .await;

    let client = CatalogClient::new(&config_for(&server)).unwrap();
    let records = validate_products(client.fetch_products().await.unwrap()).unwrap();
    let summaries = aggregate_sales(&records);

    assert_eq!(summaries.len(), 2);
    assert_eq!(summaries[0].category, "a");
    assert_eq!(summaries[0].total_items_sold, 3);
    assert_eq!(summaries[0].total_revenue, dec!(25));
    assert_eq!(summaries[1].category, "b");
    assert_eq!(summaries[1].total_items_sold, 4);
    assert_eq!(summaries[1].total_revenue, dec!(12));

    let input_count: u64 = records.iter().map(|r| r.count).sum();
    let output_count: u64 = summaries.iter().map(|s| s.total_items_sold).sum();
    assert_eq!(input_count, output_count);
}

#[tokio::test]
async fn non_2xx_status_is_fetch_error() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/products"))
        .respond_with(ResponseTemplate::new(500).set_body_string("upstream down"))
        .mount(&server)
        .await;

    let client = CatalogClient::new(&config_for(&server)).unwrap();
    let err = client.fetch_products().await.unwrap_err();

    match err {
        FetchError::Status { status, body } => {
            assert_eq!(status.as_u16(), 500);
            assert!(body.contains("upstream down"));
        }
        other => panic!("expected FetchError::Status, got {:?}", other),
    }
}

#[tokio::test]
async fn invalid_json_body_is_fetch_error() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/products"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html>not json</html>"))
        .mount(&server)
        .await;

    let client = CatalogClient::new(&config_for(&server)).unwrap();
    let err = client.fetch_products().await.unwrap_err();
    assert!(matches!(err, FetchError::Decode(_)));
}

#[tokio::test]
async fn non_array_body_is_fetch_error() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/products"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "products": [] })))
        .mount(&server)
        .await;

    let client = CatalogClient::new(&config_for(&server)).unwrap();
    let err = client.fetch_products().await.unwrap_err();
    assert!(matches!(err, FetchError::Decode(_)));
}

#[tokio::test]
async fn slow_endpoint_times_out_as_fetch_error() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/products"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!([]))
                .set_delay(Duration::from_secs(2)),
        )
        .mount(&server)
        .await;

    let mut config = config_for(&server);
    config.request_timeout = Duration::from_millis(100);

    let client = CatalogClient::new(&config).unwrap();
    let err = client.fetch_products().await.unwrap_err();

    match err {
        FetchError::Http(e) => assert!(e.is_timeout()),
        other => panic!("expected FetchError::Http, got {:?}", other),
    }
}

#[tokio::test]
async fn record_missing_rating_count_is_malformed() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/products"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            {
                "id": 1,
                "title": "Backpack",
                "price": 10.0,
                "category": "a",
                "rating": { "rate": 3.9, "count": 2 }
            },
            {
                "id": 9,
                "title": "Shirt",
                "price": 5.0,
                "category": "a",
                "rating": { "rate": 4.1 }
            }
        ])))
        .mount(&server)
        .await;

    let client = CatalogClient::new(&config_for(&server)).unwrap();
    let raw = client.fetch_products().await.unwrap();
    let err = validate_products(raw).unwrap_err();

    assert!(matches!(
        err,
        MalformedRecordError::MissingRatingCount { .. }
    ));
    assert!(err.to_string().contains("id 9"));
}
