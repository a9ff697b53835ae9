use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::time::Duration;

use deck_engine::{
    BatchResult, EngineConfig, EngineEvent, EngineHandle, EngineRequest, Endpoints, FailureKind,
    FetchError, Fetcher,
};
use serde_json::json;

/// Serves dog.ceo-shaped payloads after a fixed delay.
struct SlowDogFetcher {
    delay: Duration,
    calls: AtomicUsize,
}

#[async_trait::async_trait]
impl Fetcher for SlowDogFetcher {
    async fn get_json(&self, url: &str) -> Result<serde_json::Value, FetchError> {
        let call = self.calls.fetch_add(1, Ordering::SeqCst);
        tokio::time::sleep(self.delay).await;
        if url.ends_with("/breeds/list/all") {
            return Ok(json!({"message": {"pug": []}, "status": "success"}));
        }
        if url.contains("/reddit") {
            return Err(FetchError::new(FailureKind::HttpStatus(503), "unavailable"));
        }
        Ok(json!({"message": format!("https://img.test/{call}.jpg"), "status": "success"}))
    }
}

fn start_engine(delay: Duration) -> (EngineHandle, Arc<SlowDogFetcher>) {
    let fetcher = Arc::new(SlowDogFetcher {
        delay,
        calls: AtomicUsize::new(0),
    });
    let config = EngineConfig {
        endpoints: Endpoints {
            dog_ceo: "http://dogs.test/api".to_string(),
            tradestie: "http://stocks.test/api/v1".to_string(),
            ..Endpoints::default()
        },
        ..EngineConfig::default()
    };
    let engine = EngineHandle::with_fetcher(config, fetcher.clone()).expect("engine starts");
    (engine, fetcher)
}

#[test]
fn dog_batch_arrives_as_one_event() {
    let (engine, _) = start_engine(Duration::from_millis(5));
    engine.request(EngineRequest::DogImages { count: 3 });

    match engine.recv_timeout(Duration::from_secs(5)) {
        Some(EngineEvent::DogImagesLoaded(BatchResult::AllSucceeded(images))) => {
            assert_eq!(images.len(), 3);
        }
        other => panic!("unexpected event {other:?}"),
    }
}

#[test]
fn newer_dog_batch_supersedes_older_one() {
    let (engine, _) = start_engine(Duration::from_millis(200));
    engine.request(EngineRequest::DogImages { count: 2 });
    engine.request(EngineRequest::DogImages { count: 4 });

    match engine.recv_timeout(Duration::from_secs(5)) {
        Some(EngineEvent::DogImagesLoaded(BatchResult::AllSucceeded(images))) => {
            assert_eq!(images.len(), 4);
        }
        other => panic!("unexpected event {other:?}"),
    }
    assert!(engine.recv_timeout(Duration::from_millis(400)).is_none());
}

#[test]
fn breed_list_and_reddit_failure_are_reported() {
    let (engine, fetcher) = start_engine(Duration::from_millis(1));
    engine.request(EngineRequest::Breeds);
    engine.request(EngineRequest::RedditStocks { limit: 5 });

    let mut events = Vec::new();
    while events.len() < 2 {
        match engine.recv_timeout(Duration::from_secs(5)) {
            Some(event) => events.push(event),
            None => panic!("timed out with {events:?}"),
        }
    }

    assert!(events.contains(&EngineEvent::BreedsLoaded(Ok(vec!["pug".to_string()]))));
    assert!(events.iter().any(|event| matches!(
        event,
        EngineEvent::RedditStocksLoaded(Err(err)) if err.kind == FailureKind::HttpStatus(503)
    )));
    assert_eq!(fetcher.calls.load(Ordering::SeqCst), 2);
}
