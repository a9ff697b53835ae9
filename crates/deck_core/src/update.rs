use deck_logging::{deck_debug, deck_info, deck_warn};

use crate::command::{CommandAction, CommandError, CommandTable, VoiceCommand};
use crate::state::{PendingLookup, BREEDS_FALLBACK, DEFAULT_RANGE_DAYS, DOG_IMAGES_FALLBACK, REDDIT_FALLBACK};
use crate::surface::RenderSurface;
use crate::view_model::{BreedDetails, BreedPanel};
use crate::{
    capitalize, match_label, AppState, BreedProfile, Chart, ChartData, Effect, Msg, Page, Quote,
};

/// Pure update function: applies a message to state and returns any effects.
pub fn update(mut state: AppState, msg: Msg) -> (AppState, Vec<Effect>) {
    let effects = match msg {
        Msg::PageOpened(page) => open_page(&mut state, page),
        Msg::ListeningToggled(active) => {
            state.listening = active;
            state.mark_dirty();
            vec![
                Effect::ListeningChanged { active },
                Effect::Alert(listening_notice(state.page, active).to_string()),
            ]
        }
        Msg::UtteranceHeard(utterance) => {
            if !state.listening {
                deck_debug!("Ignoring utterance while not listening: {}", utterance);
                return (state, Vec::new());
            }
            match state.commands.dispatch(&utterance) {
                Some(command) => {
                    deck_info!("Voice command {:?} from \"{}\"", command.action, utterance);
                    apply_command(&mut state, command)
                }
                None => {
                    deck_debug!("No command pattern matched \"{}\"", utterance);
                    Vec::new()
                }
            }
        }
        Msg::BreedClicked(breed) => {
            let known = state.dogs.breeds.items().iter().any(|b| *b == breed);
            if state.page != Page::Dogs || !known {
                deck_debug!("Ignoring click on unknown breed \"{}\"", breed);
                return (state, Vec::new());
            }
            select_breed(&mut state, breed)
        }
        Msg::TickerInputChanged(text) => {
            state.stocks.ticker_input = text;
            state.mark_dirty();
            Vec::new()
        }
        Msg::RangeSelected(days) => {
            state.stocks.range_days = days;
            state.mark_dirty();
            Vec::new()
        }
        Msg::LookupClicked => submit_lookup(&mut state),
        Msg::RefreshClicked => refresh_page(&mut state),
        Msg::NextSlideClicked => {
            if state.dogs.carousel.advance() {
                state.mark_dirty();
            }
            Vec::new()
        }
        Msg::Tick(elapsed) => {
            if state.dogs.carousel.tick(elapsed) {
                state.mark_dirty();
            }
            Vec::new()
        }
        Msg::QuoteLoaded(result) => {
            state.home.loading = false;
            match result {
                Ok(quotes) => {
                    if let Some(first) = quotes.into_iter().next() {
                        state.home.quote = Some(first);
                    }
                }
                Err(err) => {
                    deck_warn!("Error fetching quote: {}", err);
                    state.home.quote = Some(Quote::fallback());
                }
            }
            state.mark_dirty();
            Vec::new()
        }
        Msg::DogImagesLoaded(result) => {
            match result {
                Ok(images) => state.dogs.carousel.replace_all(images),
                Err(err) => {
                    deck_warn!("Error fetching dog images: {}", err);
                    state.dogs.carousel.show_fallback(DOG_IMAGES_FALLBACK);
                }
            }
            state.mark_dirty();
            Vec::new()
        }
        Msg::BreedsLoaded(result) => {
            match result {
                Ok(breeds) => state.dogs.breeds.replace_all(breeds),
                Err(err) => {
                    deck_warn!("Error fetching dog breeds: {}", err);
                    state.dogs.breeds.show_fallback(BREEDS_FALLBACK);
                }
            }
            state.mark_dirty();
            Vec::new()
        }
        Msg::BreedInfoLoaded { breed, result } => {
            if state.dogs.selected_breed.as_deref() != Some(breed.as_str()) {
                deck_debug!("Dropping stale breed info for {}", breed);
                return (state, Vec::new());
            }
            state.dogs.panel = Some(breed_panel(&breed, result));
            state.mark_dirty();
            Vec::new()
        }
        Msg::StockSeriesLoaded {
            ticker,
            days,
            result,
        } => {
            let current = state.stocks.pending.as_ref();
            if !current.is_some_and(|p| p.matches(&ticker, days)) {
                deck_debug!("Dropping stale stock series for {} ({} days)", ticker, days);
                return (state, Vec::new());
            }
            state.stocks.pending = None;
            state.stocks.chart.set_loading(false);
            state.mark_dirty();
            match result {
                Ok(series) if series.is_chartable() => {
                    let data = ChartData::from_points(&series.points);
                    state.stocks.chart.replace(Chart::new(ticker, data));
                    Vec::new()
                }
                Ok(series) => {
                    deck_info!("No chart data for {} (status {})", ticker, series.status);
                    vec![Effect::Alert(format!(
                        "No data found for {ticker} in the selected time range."
                    ))]
                }
                Err(err) => {
                    deck_warn!("Error fetching stock data for {}: {}", ticker, err);
                    vec![Effect::Alert(
                        "Failed to fetch stock data. Please try again.".to_string(),
                    )]
                }
            }
        }
        Msg::RedditStocksLoaded(result) => {
            match result {
                Ok(stocks) => {
                    let limit = state.settings.reddit_limit;
                    state
                        .stocks
                        .reddit
                        .replace_all(stocks.into_iter().take(limit).collect());
                }
                Err(err) => {
                    deck_warn!("Error fetching Reddit stocks: {}", err);
                    state.stocks.reddit.show_fallback(REDDIT_FALLBACK);
                }
            }
            state.mark_dirty();
            Vec::new()
        }
    };

    (state, effects)
}

fn open_page(state: &mut AppState, page: Page) -> Vec<Effect> {
    deck_info!("Opening page {}", page);
    state.page = page;
    state.background = None;
    state.commands = CommandTable::for_page(page);
    state.mark_dirty();
    match page {
        Page::Home => load_quote(state),
        Page::Dogs => {
            state.dogs.selected_breed = None;
            state.dogs.panel = None;
            state.dogs.breeds.begin_loading();
            let mut effects = load_dog_images(state);
            effects.push(Effect::FetchBreeds);
            effects
        }
        Page::Stocks => {
            state.stocks.pending = None;
            state.stocks.chart.clear();
            load_reddit(state)
        }
    }
}

fn listening_notice(page: Page, active: bool) -> &'static str {
    match (page, active) {
        (Page::Dogs, true) => "Voice commands are now active!",
        (Page::Dogs, false) => "Voice commands have been turned off.",
        (_, true) => "Audio commands are now active.",
        (_, false) => "Audio commands are now turned off.",
    }
}

fn refresh_page(state: &mut AppState) -> Vec<Effect> {
    state.mark_dirty();
    match state.page {
        Page::Home => load_quote(state),
        Page::Dogs => load_dog_images(state),
        Page::Stocks => load_reddit(state),
    }
}

fn load_quote(state: &mut AppState) -> Vec<Effect> {
    state.home.loading = true;
    vec![Effect::FetchQuote]
}

fn load_dog_images(state: &mut AppState) -> Vec<Effect> {
    state.dogs.carousel.begin_loading();
    vec![Effect::FetchDogImages {
        count: state.settings.dog_batch_size,
    }]
}

fn load_reddit(state: &mut AppState) -> Vec<Effect> {
    state.stocks.reddit.begin_loading();
    vec![Effect::FetchRedditStocks {
        limit: state.settings.reddit_limit,
    }]
}

fn select_breed(state: &mut AppState, breed: String) -> Vec<Effect> {
    state.dogs.selected_breed = Some(breed.clone());
    state.mark_dirty();
    vec![Effect::FetchBreedInfo { breed }]
}

fn submit_lookup(state: &mut AppState) -> Vec<Effect> {
    let ticker = state.stocks.ticker_input.trim().to_uppercase();
    if ticker.is_empty() {
        return vec![Effect::Alert("Please enter a stock ticker".to_string())];
    }
    let days = state.stocks.range_days;
    if days == 0 {
        return vec![Effect::Alert(
            "Please choose a time range of at least one day".to_string(),
        )];
    }
    state.stocks.ticker_input = ticker.clone();
    state.stocks.pending = Some(PendingLookup {
        ticker: ticker.clone(),
        days,
    });
    state.stocks.chart.set_loading(true);
    state.mark_dirty();
    vec![Effect::FetchStockSeries { ticker, days }]
}

fn apply_command(state: &mut AppState, command: VoiceCommand) -> Vec<Effect> {
    let capture = command.capture().unwrap_or_default().to_string();
    match command.action {
        CommandAction::Greet => vec![Effect::Alert("Hello World".to_string())],
        CommandAction::ChangeColor => {
            state.background = Some(capture);
            state.mark_dirty();
            Vec::new()
        }
        CommandAction::Navigate => match Page::from_spoken(&capture) {
            Some(page) => open_page(state, page),
            None => vec![Effect::Alert(format!(
                "Sorry, the page \"{capture}\" is not available."
            ))],
        },
        CommandAction::LoadBreed => {
            let found = match_label(&capture, state.dogs.breeds.items()).map(ToOwned::to_owned);
            match found {
                Some(breed) => select_breed(state, breed),
                None => vec![Effect::Alert(CommandError::NoMatch(capture).to_string())],
            }
        }
        CommandAction::LookupStock => {
            state.stocks.ticker_input = capture.to_uppercase();
            state.stocks.range_days = DEFAULT_RANGE_DAYS;
            submit_lookup(state)
        }
    }
}

fn breed_panel(breed: &str, result: Result<Vec<BreedProfile>, String>) -> BreedPanel {
    let name = capitalize(breed);
    match result {
        Ok(profiles) => match profiles.into_iter().next() {
            Some(profile) => {
                let life = profile.life();
                BreedPanel {
                    heading: name,
                    details: Some(BreedDetails {
                        temperament: profile
                            .temperament
                            .filter(|t| !t.is_empty())
                            .unwrap_or_else(|| {
                                "No temperament information available.".to_string()
                            }),
                        bred_for: profile
                            .bred_for
                            .filter(|b| !b.is_empty())
                            .map(|b| format!("Bred for: {b}")),
                        min_life: life.min_label(),
                        max_life: life.max_label(),
                    }),
                }
            }
            None => BreedPanel {
                heading: format!("No information found for {name}"),
                details: None,
            },
        },
        Err(err) => {
            deck_warn!("Error loading breed info for {}: {}", breed, err);
            BreedPanel {
                heading: format!("Error loading information for {name}"),
                details: None,
            }
        }
    }
}
