use std::time::Duration;

/// Failed loads carry only a description; pages show their own fallback text.
pub type LoadResult<T> = Result<T, String>;

#[derive(Debug, Clone, PartialEq)]
pub enum Msg {
    /// User opened a page (startup, `open` command or voice navigation).
    PageOpened(crate::Page),
    /// User clicked Turn On / Turn Off Audio.
    ListeningToggled(bool),
    /// Recognizer (or the typed stand-in) produced an utterance.
    UtteranceHeard(String),
    /// User clicked a breed button.
    BreedClicked(String),
    /// User edited the ticker input box.
    TickerInputChanged(String),
    /// User picked a time range in days.
    RangeSelected(u32),
    /// User clicked Lookup.
    LookupClicked,
    /// User asked to reload the current page's main content.
    RefreshClicked,
    /// User skipped to the next carousel slide.
    NextSlideClicked,
    /// UI/render tick carrying the time since the previous tick.
    Tick(Duration),
    /// Engine results.
    QuoteLoaded(LoadResult<Vec<crate::Quote>>),
    DogImagesLoaded(LoadResult<Vec<crate::DogImage>>),
    BreedsLoaded(LoadResult<Vec<String>>),
    BreedInfoLoaded {
        breed: String,
        result: LoadResult<Vec<crate::BreedProfile>>,
    },
    StockSeriesLoaded {
        ticker: String,
        days: u32,
        result: LoadResult<crate::StockSeries>,
    },
    RedditStocksLoaded(LoadResult<Vec<crate::RedditStock>>),
}
