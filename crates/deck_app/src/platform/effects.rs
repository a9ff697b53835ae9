use deck_core::{Effect, Msg};
use deck_engine::{EngineEvent, EngineHandle, EngineRequest, FetchError};
use deck_logging::{deck_info, deck_warn};

pub struct EffectRunner {
    engine: EngineHandle,
}

impl EffectRunner {
    pub fn new(engine: EngineHandle) -> Self {
        Self { engine }
    }

    /// Forwards fetch effects to the engine and returns alert texts for display.
    pub fn run(&self, effects: Vec<Effect>) -> Vec<String> {
        let mut alerts = Vec::new();
        for effect in effects {
            match effect {
                Effect::Alert(text) => alerts.push(text),
                Effect::ListeningChanged { active } => {
                    deck_info!("Voice recognition {}", if active { "started" } else { "stopped" });
                }
                other => {
                    if let Some(request) = engine_request(other) {
                        self.engine.request(request);
                    }
                }
            }
        }
        alerts
    }

    /// Completed engine work, converted into core messages.
    pub fn drain_events(&self) -> Vec<Msg> {
        std::iter::from_fn(|| self.engine.try_recv())
            .map(engine_event_to_msg)
            .collect()
    }
}

pub fn engine_request(effect: Effect) -> Option<EngineRequest> {
    match effect {
        Effect::FetchQuote => Some(EngineRequest::Quote),
        Effect::FetchDogImages { count } => Some(EngineRequest::DogImages { count }),
        Effect::FetchBreeds => Some(EngineRequest::Breeds),
        Effect::FetchBreedInfo { breed } => Some(EngineRequest::BreedInfo { breed }),
        Effect::FetchStockSeries { ticker, days } => {
            Some(EngineRequest::StockSeries { ticker, days })
        }
        Effect::FetchRedditStocks { limit } => Some(EngineRequest::RedditStocks { limit }),
        Effect::ListeningChanged { .. } | Effect::Alert(_) => None,
    }
}

pub fn engine_event_to_msg(event: EngineEvent) -> Msg {
    match event {
        EngineEvent::QuoteLoaded(result) => Msg::QuoteLoaded(describe(result)),
        EngineEvent::DogImagesLoaded(batch) => Msg::DogImagesLoaded(describe(batch.into_result())),
        EngineEvent::BreedsLoaded(result) => Msg::BreedsLoaded(describe(result)),
        EngineEvent::BreedInfoLoaded { breed, result } => Msg::BreedInfoLoaded {
            breed,
            result: describe(result),
        },
        EngineEvent::StockSeriesLoaded {
            ticker,
            days,
            result,
        } => Msg::StockSeriesLoaded {
            ticker,
            days,
            result: describe(result),
        },
        EngineEvent::RedditStocksLoaded(result) => Msg::RedditStocksLoaded(describe(result)),
    }
}

fn describe<T>(result: Result<T, FetchError>) -> Result<T, String> {
    result.map_err(|err| {
        deck_warn!("Fetch failed ({:?}): {}", err.class(), err);
        err.to_string()
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use deck_core::{DogImage, Quote, StockSeries};
    use deck_engine::{BatchResult, FailureKind};
    use pretty_assertions::assert_eq;

    #[test]
    fn alerts_and_listening_do_not_reach_the_engine() {
        assert_eq!(engine_request(Effect::Alert("hi".into())), None);
        assert_eq!(
            engine_request(Effect::ListeningChanged { active: true }),
            None
        );
    }

    #[test]
    fn fetch_effects_map_one_to_one() {
        assert_eq!(
            engine_request(Effect::FetchStockSeries {
                ticker: "MSFT".into(),
                days: 7
            }),
            Some(EngineRequest::StockSeries {
                ticker: "MSFT".into(),
                days: 7
            })
        );
        assert_eq!(
            engine_request(Effect::FetchDogImages { count: 10 }),
            Some(EngineRequest::DogImages { count: 10 })
        );
    }

    #[test]
    fn failed_batch_becomes_error_text() {
        let event = EngineEvent::DogImagesLoaded(BatchResult::AnyFailed(FetchError::new(
            FailureKind::HttpStatus(500),
            "Internal Server Error",
        )));
        assert_eq!(
            engine_event_to_msg(event),
            Msg::DogImagesLoaded(Err(
                "http status 500: Internal Server Error".to_string()
            ))
        );
    }

    #[test]
    fn successful_events_keep_payloads() {
        let event = EngineEvent::DogImagesLoaded(BatchResult::AllSucceeded(vec![DogImage::new(
            "https://img/1.jpg",
        )]));
        assert_eq!(
            engine_event_to_msg(event),
            Msg::DogImagesLoaded(Ok(vec![DogImage::new("https://img/1.jpg")]))
        );

        let quote = Quote::fallback();
        assert_eq!(
            engine_event_to_msg(EngineEvent::QuoteLoaded(Ok(vec![quote.clone()]))),
            Msg::QuoteLoaded(Ok(vec![quote]))
        );
    }

    #[test]
    fn stock_series_event_keeps_requested_range() {
        let series = StockSeries {
            status: "OK".into(),
            points: Vec::new(),
        };
        let event = EngineEvent::StockSeriesLoaded {
            ticker: "AAPL".into(),
            days: 7,
            result: Ok(series.clone()),
        };
        assert_eq!(
            engine_event_to_msg(event),
            Msg::StockSeriesLoaded {
                ticker: "AAPL".into(),
                days: 7,
                result: Ok(series),
            }
        );
    }
}
