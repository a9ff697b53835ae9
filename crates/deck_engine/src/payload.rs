//! Upstream JSON shapes and their conversion into `deck_core` payloads.

use std::collections::BTreeMap;

use deck_core::{BreedProfile, DogImage, PricePoint, Quote, RedditStock, Sentiment, StockSeries};
use serde::de::DeserializeOwned;
use serde::Deserialize;

use crate::FetchError;

const DOG_CEO_SUCCESS: &str = "success";

pub(crate) fn decode<T: DeserializeOwned>(value: serde_json::Value) -> Result<T, FetchError> {
    serde_json::from_value(value).map_err(FetchError::malformed)
}

#[derive(Debug, Deserialize)]
pub(crate) struct RandomImagePayload {
    message: String,
    status: String,
}

impl RandomImagePayload {
    pub(crate) fn into_image(self) -> Result<DogImage, FetchError> {
        if self.status != DOG_CEO_SUCCESS {
            return Err(FetchError::malformed(format!(
                "dog.ceo status {}",
                self.status
            )));
        }
        Ok(DogImage::new(self.message))
    }
}

/// `message` maps breed name to sub-breeds; only the keys are used.
#[derive(Debug, Deserialize)]
pub(crate) struct BreedListPayload {
    message: BTreeMap<String, serde_json::Value>,
    status: String,
}

impl BreedListPayload {
    pub(crate) fn into_names(self) -> Result<Vec<String>, FetchError> {
        if self.status != DOG_CEO_SUCCESS {
            return Err(FetchError::malformed(format!(
                "dog.ceo status {}",
                self.status
            )));
        }
        Ok(self.message.into_keys().collect())
    }
}

#[derive(Debug, Deserialize)]
pub(crate) struct BreedSearchEntry {
    #[serde(default)]
    temperament: Option<String>,
    #[serde(default)]
    bred_for: Option<String>,
    #[serde(default)]
    life_span: Option<String>,
}

impl From<BreedSearchEntry> for BreedProfile {
    fn from(entry: BreedSearchEntry) -> Self {
        BreedProfile {
            temperament: entry.temperament,
            bred_for: entry.bred_for,
            life_span: entry.life_span,
        }
    }
}

#[derive(Debug, Deserialize)]
pub(crate) struct QuoteEntry {
    q: String,
    a: String,
}

impl From<QuoteEntry> for Quote {
    fn from(entry: QuoteEntry) -> Self {
        Quote {
            text: entry.q,
            author: entry.a,
        }
    }
}

#[derive(Debug, Deserialize)]
pub(crate) struct AggregatesPayload {
    status: String,
    #[serde(default)]
    results: Vec<AggregateBar>,
}

#[derive(Debug, Deserialize)]
struct AggregateBar {
    t: i64,
    c: f64,
}

impl From<AggregatesPayload> for StockSeries {
    fn from(payload: AggregatesPayload) -> Self {
        StockSeries {
            status: payload.status,
            points: payload
                .results
                .into_iter()
                .map(|bar| PricePoint {
                    timestamp_ms: bar.t,
                    close: bar.c,
                })
                .collect(),
        }
    }
}

#[derive(Debug, Deserialize)]
pub(crate) struct RedditEntry {
    ticker: String,
    no_of_comments: u64,
    #[serde(default)]
    sentiment: String,
}

impl From<RedditEntry> for RedditStock {
    fn from(entry: RedditEntry) -> Self {
        RedditStock {
            ticker: entry.ticker,
            comments: entry.no_of_comments,
            sentiment: Sentiment::from_label(&entry.sentiment),
        }
    }
}
