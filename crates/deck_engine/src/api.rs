use std::sync::Arc;

use chrono::{Days, NaiveDate, Utc};
use deck_core::{BreedProfile, DogImage, Quote, RedditStock, StockSeries};
use deck_logging::deck_debug;
use serde::Deserialize;
use url::Url;

use crate::fetch::Fetcher;
use crate::payload::{
    decode, AggregatesPayload, BreedListPayload, BreedSearchEntry, QuoteEntry, RandomImagePayload,
    RedditEntry,
};
use crate::{FailureKind, FetchError};

/// Base URLs of the upstream services, without trailing path segments.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Endpoints {
    pub dog_ceo: String,
    pub dog_api: String,
    pub zen_quotes: String,
    pub polygon: String,
    pub tradestie: String,
}

impl Default for Endpoints {
    fn default() -> Self {
        Self {
            dog_ceo: "https://dog.ceo/api".to_string(),
            dog_api: "https://api.thedogapi.com/v1".to_string(),
            zen_quotes: "https://zenquotes.io/api".to_string(),
            polygon: "https://api.polygon.io".to_string(),
            tradestie: "https://tradestie.com/api/v1".to_string(),
        }
    }
}

/// Appends `segments` to `base` and sets `query`; segments are percent-encoded.
pub fn endpoint_url(
    base: &str,
    segments: &[&str],
    query: &[(&str, &str)],
) -> Result<Url, FetchError> {
    let mut url =
        Url::parse(base).map_err(|err| FetchError::new(FailureKind::InvalidUrl, err.to_string()))?;
    url.path_segments_mut()
        .map_err(|_| FetchError::new(FailureKind::InvalidUrl, format!("{base} cannot be a base")))?
        .pop_if_empty()
        .extend(segments);
    if !query.is_empty() {
        url.query_pairs_mut().extend_pairs(query);
    }
    Ok(url)
}

/// Inclusive `YYYY-MM-DD` range ending at `end` and starting `days` earlier.
pub fn date_range(end: NaiveDate, days: u32) -> (String, String) {
    let start = end
        .checked_sub_days(Days::new(u64::from(days)))
        .unwrap_or(NaiveDate::MIN);
    (
        start.format("%Y-%m-%d").to_string(),
        end.format("%Y-%m-%d").to_string(),
    )
}

#[derive(Clone)]
pub struct ApiClient {
    fetcher: Arc<dyn Fetcher>,
    endpoints: Endpoints,
    polygon_api_key: String,
}

impl ApiClient {
    pub fn new(
        fetcher: Arc<dyn Fetcher>,
        endpoints: Endpoints,
        polygon_api_key: impl Into<String>,
    ) -> Self {
        Self {
            fetcher,
            endpoints,
            polygon_api_key: polygon_api_key.into(),
        }
    }

    pub fn endpoints(&self) -> &Endpoints {
        &self.endpoints
    }

    async fn get(&self, url: Url) -> Result<serde_json::Value, FetchError> {
        deck_debug!("GET {}", redact(&url));
        self.fetcher.get_json(url.as_str()).await
    }

    pub async fn random_dog_image(&self) -> Result<DogImage, FetchError> {
        let url = endpoint_url(&self.endpoints.dog_ceo, &["breeds", "image", "random"], &[])?;
        decode::<RandomImagePayload>(self.get(url).await?)?.into_image()
    }

    pub async fn breed_names(&self) -> Result<Vec<String>, FetchError> {
        let url = endpoint_url(&self.endpoints.dog_ceo, &["breeds", "list", "all"], &[])?;
        decode::<BreedListPayload>(self.get(url).await?)?.into_names()
    }

    pub async fn breed_search(&self, breed: &str) -> Result<Vec<BreedProfile>, FetchError> {
        let url = endpoint_url(&self.endpoints.dog_api, &["breeds", "search"], &[("q", breed)])?;
        let entries: Vec<BreedSearchEntry> = decode(self.get(url).await?)?;
        Ok(entries.into_iter().map(BreedProfile::from).collect())
    }

    pub async fn random_quotes(&self) -> Result<Vec<Quote>, FetchError> {
        let url = endpoint_url(&self.endpoints.zen_quotes, &["random"], &[])?;
        let entries: Vec<QuoteEntry> = decode(self.get(url).await?)?;
        Ok(entries.into_iter().map(Quote::from).collect())
    }

    /// Daily aggregates for the last `days` days up to today (UTC).
    pub async fn stock_series(&self, ticker: &str, days: u32) -> Result<StockSeries, FetchError> {
        let (start, end) = date_range(Utc::now().date_naive(), days);
        let url = endpoint_url(
            &self.endpoints.polygon,
            &[
                "v2",
                "aggs",
                "ticker",
                ticker,
                "range",
                "1",
                "day",
                start.as_str(),
                end.as_str(),
            ],
            &[("apiKey", self.polygon_api_key.as_str())],
        )?;
        let payload: AggregatesPayload = decode(self.get(url).await?)?;
        Ok(StockSeries::from(payload))
    }

    pub async fn reddit_stocks(&self) -> Result<Vec<RedditStock>, FetchError> {
        let url = endpoint_url(&self.endpoints.tradestie, &["apps", "reddit"], &[])?;
        let entries: Vec<RedditEntry> = decode(self.get(url).await?)?;
        Ok(entries.into_iter().map(RedditStock::from).collect())
    }
}

fn redact(url: &Url) -> String {
    let mut shown = url.clone();
    if shown.query_pairs().any(|(key, _)| key == "apiKey") {
        let pairs: Vec<(String, String)> = shown
            .query_pairs()
            .map(|(key, value)| {
                let value = if key == "apiKey" {
                    "***".to_string()
                } else {
                    value.into_owned()
                };
                (key.into_owned(), value)
            })
            .collect();
        shown.query_pairs_mut().clear().extend_pairs(pairs);
    }
    shown.to_string()
}
