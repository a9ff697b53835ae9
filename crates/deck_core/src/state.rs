use std::time::Duration;

use crate::carousel::{Carousel, DEFAULT_DELAY, DEFAULT_TRANSITION};
use crate::chart::ChartSlot;
use crate::command::CommandTable;
use crate::surface::ContentRegion;
use crate::view_model::{
    AppViewModel, BreedButtonView, BreedPanel, CarouselView, ChartView, RedditRowView,
};
use crate::{capitalize, Page, Quote, RedditStock};

pub const DOG_IMAGES_FALLBACK: &str = "Error loading dog images. Please try again later.";
pub const BREEDS_FALLBACK: &str = "Error loading dog breeds. Please try again later.";
pub const REDDIT_FALLBACK: &str = "Failed to load Reddit stocks data. Please refresh the page.";
pub const DEFAULT_RANGE_DAYS: u32 = 30;

/// Tunables supplied by the application configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CoreSettings {
    pub dog_batch_size: usize,
    pub reddit_limit: usize,
    pub carousel_delay: Duration,
    pub carousel_transition: Duration,
}

impl Default for CoreSettings {
    fn default() -> Self {
        Self {
            dog_batch_size: 10,
            reddit_limit: 5,
            carousel_delay: DEFAULT_DELAY,
            carousel_transition: DEFAULT_TRANSITION,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Default)]
pub(crate) struct HomeState {
    pub(crate) quote: Option<Quote>,
    pub(crate) loading: bool,
}

#[derive(Debug, Clone, PartialEq, Default)]
pub(crate) struct DogsState {
    pub(crate) carousel: Carousel,
    pub(crate) breeds: ContentRegion<String>,
    pub(crate) selected_breed: Option<String>,
    pub(crate) panel: Option<BreedPanel>,
}

/// Lookup whose series has not arrived yet. Only a result for this exact
/// ticker and range is charted.
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct PendingLookup {
    pub(crate) ticker: String,
    pub(crate) days: u32,
}

impl PendingLookup {
    pub(crate) fn matches(&self, ticker: &str, days: u32) -> bool {
        self.ticker == ticker && self.days == days
    }
}

#[derive(Debug, Clone, PartialEq)]
pub(crate) struct StocksState {
    pub(crate) ticker_input: String,
    pub(crate) range_days: u32,
    pub(crate) pending: Option<PendingLookup>,
    pub(crate) chart: ChartSlot,
    pub(crate) reddit: ContentRegion<RedditStock>,
}

impl Default for StocksState {
    fn default() -> Self {
        Self {
            ticker_input: String::new(),
            range_days: DEFAULT_RANGE_DAYS,
            pending: None,
            chart: ChartSlot::default(),
            reddit: ContentRegion::Empty,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct AppState {
    pub(crate) settings: CoreSettings,
    pub(crate) page: Page,
    pub(crate) listening: bool,
    pub(crate) background: Option<String>,
    pub(crate) commands: CommandTable,
    pub(crate) home: HomeState,
    pub(crate) dogs: DogsState,
    pub(crate) stocks: StocksState,
    dirty: bool,
}

impl Default for AppState {
    fn default() -> Self {
        Self::with_settings(CoreSettings::default())
    }
}

impl AppState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_settings(settings: CoreSettings) -> Self {
        let dogs = DogsState {
            carousel: Carousel::new(settings.carousel_delay, settings.carousel_transition),
            ..DogsState::default()
        };
        Self {
            settings,
            page: Page::Home,
            listening: false,
            background: None,
            commands: CommandTable::for_page(Page::Home),
            home: HomeState::default(),
            dogs,
            stocks: StocksState::default(),
            dirty: false,
        }
    }

    pub fn page(&self) -> Page {
        self.page
    }

    pub fn is_listening(&self) -> bool {
        self.listening
    }

    pub fn settings(&self) -> &CoreSettings {
        &self.settings
    }

    pub fn view(&self) -> AppViewModel {
        let carousel = &self.dogs.carousel;
        AppViewModel {
            page: self.page,
            listening: self.listening,
            background: self.background.clone(),
            quote: self.home.quote.clone(),
            quote_loading: self.home.loading,
            carousel: CarouselView {
                slides: carousel.slides().items().to_vec(),
                current: carousel.current_index(),
                loading: carousel.slides().is_loading(),
                fallback: carousel.slides().fallback().map(ToOwned::to_owned),
                delay_ms: carousel.delay().as_millis() as u64,
                transition_ms: carousel.transition().as_millis() as u64,
            },
            breeds: self
                .dogs
                .breeds
                .items()
                .iter()
                .map(|breed| BreedButtonView {
                    breed: breed.clone(),
                    label: capitalize(breed),
                    selected: self.dogs.selected_breed.as_deref() == Some(breed.as_str()),
                })
                .collect(),
            breeds_fallback: self.dogs.breeds.fallback().map(ToOwned::to_owned),
            breed_panel: self.dogs.panel.clone(),
            ticker_input: self.stocks.ticker_input.clone(),
            range_days: self.stocks.range_days,
            chart: self.stocks.chart.current().map(|chart| ChartView {
                title: chart.title(),
                series_label: chart.series_label(),
                labels: chart.data.labels.clone(),
                prices: chart.data.prices.clone(),
                range: chart.data.min_max(),
                generation: self.stocks.chart.generation(),
            }),
            chart_loading: self.stocks.chart.is_loading(),
            reddit_rows: self
                .stocks
                .reddit
                .items()
                .iter()
                .map(|stock| RedditRowView {
                    ticker: stock.ticker.clone(),
                    link: stock.quote_link(),
                    comments: stock.comments,
                    sentiment: stock.sentiment,
                })
                .collect(),
            reddit_fallback: self.stocks.reddit.fallback().map(ToOwned::to_owned),
            dirty: self.dirty,
        }
    }

    /// Returns whether anything changed since the last call and resets the flag.
    pub fn consume_dirty(&mut self) -> bool {
        std::mem::take(&mut self.dirty)
    }

    pub(crate) fn mark_dirty(&mut self) {
        self.dirty = true;
    }
}
