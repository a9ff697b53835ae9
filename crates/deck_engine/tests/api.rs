use std::sync::Arc;

use deck_core::{DogImage, Quote, Sentiment};
use deck_engine::{ApiClient, Endpoints, FailureKind, FetchSettings, ReqwestFetcher};
use pretty_assertions::assert_eq;
use serde_json::json;
use wiremock::matchers::{method, path, path_regex, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn client_for(server: &MockServer, api_key: &str) -> ApiClient {
    let base = server.uri();
    let endpoints = Endpoints {
        dog_ceo: format!("{base}/dogceo/api"),
        dog_api: format!("{base}/thedogapi/v1"),
        zen_quotes: format!("{base}/zen/api"),
        polygon: format!("{base}/polygon"),
        tradestie: format!("{base}/tradestie/api/v1"),
    };
    let fetcher = ReqwestFetcher::new(FetchSettings::default()).expect("client builds");
    ApiClient::new(Arc::new(fetcher), endpoints, api_key)
}

#[tokio::test]
async fn random_dog_image_reads_message_url() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/dogceo/api/breeds/image/random"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "message": "https://images.dog.ceo/breeds/pug/pug_1.jpg",
            "status": "success"
        })))
        .mount(&server)
        .await;

    let image = client_for(&server, "").random_dog_image().await.unwrap();
    assert_eq!(
        image,
        DogImage::new("https://images.dog.ceo/breeds/pug/pug_1.jpg")
    );
    assert_eq!(image.alt, "Random Dog");
}

#[tokio::test]
async fn breed_names_are_the_message_keys() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/dogceo/api/breeds/list/all"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "message": {"beagle": [], "bulldog": ["boston", "french"], "affenpinscher": []},
            "status": "success"
        })))
        .mount(&server)
        .await;

    let names = client_for(&server, "").breed_names().await.unwrap();
    assert_eq!(names, vec!["affenpinscher", "beagle", "bulldog"]);
}

#[tokio::test]
async fn breed_search_sends_query_and_keeps_optional_fields() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/thedogapi/v1/breeds/search"))
        .and(query_param("q", "beagle"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            {
                "name": "Beagle",
                "temperament": "Amiable, Even Tempered",
                "bred_for": "Rabbit, hare hunting",
                "life_span": "13 - 16 years"
            },
            {"name": "Beagle Mix"}
        ])))
        .mount(&server)
        .await;

    let profiles = client_for(&server, "").breed_search("beagle").await.unwrap();
    assert_eq!(profiles.len(), 2);
    assert_eq!(
        profiles[0].temperament.as_deref(),
        Some("Amiable, Even Tempered")
    );
    assert_eq!(profiles[0].life().min.as_deref(), Some("13"));
    assert_eq!(profiles[1].temperament, None);
    assert_eq!(profiles[1].life().max_label(), "N/A");
}

#[tokio::test]
async fn random_quotes_map_q_and_a() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/zen/api/random"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            {"q": "Stay hungry.", "a": "Steve Jobs", "h": "<blockquote>...</blockquote>"}
        ])))
        .mount(&server)
        .await;

    let quotes = client_for(&server, "").random_quotes().await.unwrap();
    assert_eq!(
        quotes,
        vec![Quote {
            text: "Stay hungry.".to_string(),
            author: "Steve Jobs".to_string(),
        }]
    );
}

#[tokio::test]
async fn stock_series_requests_daily_range_with_key() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path_regex(
            r"^/polygon/v2/aggs/ticker/AAPL/range/1/day/\d{4}-\d{2}-\d{2}/\d{4}-\d{2}-\d{2}$",
        ))
        .and(query_param("apiKey", "secret"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "ticker": "AAPL",
            "status": "OK",
            "results": [
                {"t": 1_704_153_600_000_i64, "c": 185.64, "o": 187.15},
                {"t": 1_704_240_000_000_i64, "c": 184.25, "o": 184.22}
            ]
        })))
        .mount(&server)
        .await;

    let series = client_for(&server, "secret")
        .stock_series("AAPL", 30)
        .await
        .unwrap();
    assert!(series.is_chartable());
    assert_eq!(series.points.len(), 2);
    assert_eq!(series.points[0].timestamp_ms, 1_704_153_600_000);
    assert_eq!(series.points[1].close, 184.25);
}

#[tokio::test]
async fn stock_series_rejected_key_is_http_failure() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path_regex(r"^/polygon/v2/aggs/ticker/"))
        .respond_with(ResponseTemplate::new(401).set_body_json(json!({
            "status": "ERROR",
            "error": "Unknown API Key"
        })))
        .mount(&server)
        .await;

    let err = client_for(&server, "bad")
        .stock_series("AAPL", 7)
        .await
        .unwrap_err();
    assert_eq!(err.kind, FailureKind::HttpStatus(401));
}

#[tokio::test]
async fn reddit_stocks_decode_sentiment() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/tradestie/api/v1/apps/reddit"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            {"no_of_comments": 250, "sentiment": "Bullish", "sentiment_score": 0.2, "ticker": "GME"},
            {"no_of_comments": 120, "sentiment": "Bearish", "sentiment_score": -0.1, "ticker": "AMC"}
        ])))
        .mount(&server)
        .await;

    let stocks = client_for(&server, "").reddit_stocks().await.unwrap();
    assert_eq!(stocks.len(), 2);
    assert_eq!(stocks[0].ticker, "GME");
    assert_eq!(stocks[0].comments, 250);
    assert_eq!(stocks[0].sentiment, Sentiment::Bullish);
    assert_eq!(stocks[1].sentiment, Sentiment::Bearish);
}

#[tokio::test]
async fn unexpected_shape_is_malformed() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/zen/api/random"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"error": "rate limited"})))
        .mount(&server)
        .await;

    let err = client_for(&server, "").random_quotes().await.unwrap_err();
    assert_eq!(err.kind, FailureKind::Malformed);
}
