use crate::{DogImage, Page, Quote, Sentiment};

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct CarouselView {
    pub slides: Vec<DogImage>,
    pub current: Option<usize>,
    pub loading: bool,
    pub fallback: Option<String>,
    pub delay_ms: u64,
    pub transition_ms: u64,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BreedButtonView {
    pub breed: String,
    pub label: String,
    pub selected: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BreedDetails {
    pub temperament: String,
    pub bred_for: Option<String>,
    pub min_life: String,
    pub max_life: String,
}

/// Breed information panel; `details` is absent for "not found" and error headings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BreedPanel {
    pub heading: String,
    pub details: Option<BreedDetails>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ChartView {
    pub title: String,
    pub series_label: String,
    pub labels: Vec<String>,
    pub prices: Vec<f64>,
    /// Lowest and highest close.
    pub range: Option<(f64, f64)>,
    pub generation: u64,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RedditRowView {
    pub ticker: String,
    pub link: String,
    pub comments: u64,
    pub sentiment: Sentiment,
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct AppViewModel {
    pub page: Page,
    pub listening: bool,
    pub background: Option<String>,
    pub quote: Option<Quote>,
    pub quote_loading: bool,
    pub carousel: CarouselView,
    pub breeds: Vec<BreedButtonView>,
    pub breeds_fallback: Option<String>,
    pub breed_panel: Option<BreedPanel>,
    pub ticker_input: String,
    pub range_days: u32,
    pub chart: Option<ChartView>,
    pub chart_loading: bool,
    pub reddit_rows: Vec<RedditRowView>,
    pub reddit_fallback: Option<String>,
    pub dirty: bool,
}
