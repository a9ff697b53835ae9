use std::sync::{mpsc, Arc};
use std::thread;
use std::time::Duration;

use deck_logging::{deck_debug, deck_info, deck_warn};
use tokio_util::sync::CancellationToken;

use crate::api::{ApiClient, Endpoints};
use crate::batch::{BatchFetchRenderer, BatchResult};
use crate::fetch::{FetchSettings, Fetcher, ReqwestFetcher};
use crate::{EngineEvent, FetchError};

/// One unit of IO work, mirroring the fetch effects emitted by the core.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EngineRequest {
    Quote,
    DogImages { count: usize },
    Breeds,
    BreedInfo { breed: String },
    StockSeries { ticker: String, days: u32 },
    RedditStocks { limit: usize },
}

#[derive(Debug, Clone, Default)]
pub struct EngineConfig {
    pub fetch: FetchSettings,
    pub endpoints: Endpoints,
    pub polygon_api_key: String,
    pub max_in_flight: Option<usize>,
}

#[derive(Debug, thiserror::Error)]
pub enum EngineError {
    #[error("failed to start engine runtime: {0}")]
    Runtime(#[from] std::io::Error),
    #[error("failed to build http client: {0}")]
    Client(#[from] FetchError),
}

pub struct EngineHandle {
    cmd_tx: mpsc::Sender<EngineRequest>,
    event_rx: mpsc::Receiver<EngineEvent>,
}

impl EngineHandle {
    pub fn new(config: EngineConfig) -> Result<Self, EngineError> {
        let fetcher = Arc::new(ReqwestFetcher::new(config.fetch.clone())?);
        Self::with_fetcher(config, fetcher)
    }

    /// Starts the engine thread around an existing fetcher; `config.fetch` is ignored.
    pub fn with_fetcher(
        config: EngineConfig,
        fetcher: Arc<dyn Fetcher>,
    ) -> Result<Self, EngineError> {
        let (cmd_tx, cmd_rx) = mpsc::channel::<EngineRequest>();
        let (event_tx, event_rx) = mpsc::channel();
        let api = ApiClient::new(fetcher, config.endpoints, config.polygon_api_key);
        let renderer = BatchFetchRenderer::with_max_in_flight(config.max_in_flight);
        let runtime = tokio::runtime::Builder::new_multi_thread()
            .enable_all()
            .thread_name("deck-engine-worker")
            .build()?;

        thread::Builder::new()
            .name("deck-engine".to_string())
            .spawn(move || {
                let mut dog_batch: Option<CancellationToken> = None;
                while let Ok(request) = cmd_rx.recv() {
                    let token = CancellationToken::new();
                    if matches!(request, EngineRequest::DogImages { .. }) {
                        if let Some(previous) = dog_batch.replace(token.clone()) {
                            previous.cancel();
                        }
                    }
                    let api = api.clone();
                    let event_tx = event_tx.clone();
                    runtime.spawn(async move {
                        if let Some(event) = handle_request(&api, renderer, request, &token).await
                        {
                            let _ = event_tx.send(event);
                        }
                    });
                }
                deck_info!("Engine command channel closed; shutting down");
            })?;

        Ok(Self { cmd_tx, event_rx })
    }

    pub fn request(&self, request: EngineRequest) {
        deck_debug!("Engine request {:?}", request);
        if self.cmd_tx.send(request).is_err() {
            deck_warn!("Engine thread is gone; request dropped");
        }
    }

    pub fn try_recv(&self) -> Option<EngineEvent> {
        self.event_rx.try_recv().ok()
    }

    pub fn recv_timeout(&self, timeout: Duration) -> Option<EngineEvent> {
        self.event_rx.recv_timeout(timeout).ok()
    }
}

async fn handle_request(
    api: &ApiClient,
    renderer: BatchFetchRenderer,
    request: EngineRequest,
    token: &CancellationToken,
) -> Option<EngineEvent> {
    let event = match request {
        EngineRequest::Quote => EngineEvent::QuoteLoaded(api.random_quotes().await),
        EngineRequest::DogImages { count } => {
            let result = renderer
                .collect(count, move |_| api.random_dog_image(), token)
                .await;
            if let BatchResult::AnyFailed(err) = &result {
                if err.is_cancelled() {
                    deck_debug!("Dog image batch superseded");
                    return None;
                }
            }
            EngineEvent::DogImagesLoaded(result)
        }
        EngineRequest::Breeds => EngineEvent::BreedsLoaded(api.breed_names().await),
        EngineRequest::BreedInfo { breed } => {
            let result = api.breed_search(&breed).await;
            EngineEvent::BreedInfoLoaded { breed, result }
        }
        EngineRequest::StockSeries { ticker, days } => {
            let result = api.stock_series(&ticker, days).await;
            EngineEvent::StockSeriesLoaded {
                ticker,
                days,
                result,
            }
        }
        EngineRequest::RedditStocks { limit } => {
            let result = api.reddit_stocks().await.map(|mut stocks| {
                stocks.truncate(limit);
                stocks
            });
            EngineEvent::RedditStocksLoaded(result)
        }
    };
    Some(event)
}
