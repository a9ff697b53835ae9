//! Fetchdeck core: pure page state machine, command dispatch and view-model helpers.
mod carousel;
mod chart;
mod command;
mod effect;
mod matcher;
mod model;
mod msg;
mod page;
mod state;
mod surface;
mod update;
mod view_model;

pub use carousel::Carousel;
pub use chart::{Chart, ChartData, ChartSlot};
pub use command::{CommandAction, CommandError, CommandPattern, CommandTable, VoiceCommand};
pub use effect::Effect;
pub use matcher::match_label;
pub use model::{
    capitalize, BreedProfile, DogImage, LifeSpan, PricePoint, Quote, RedditStock, Sentiment,
    StockSeries, DOG_IMAGE_ALT, NOT_AVAILABLE,
};
pub use msg::{LoadResult, Msg};
pub use page::{Page, UnknownPage};
pub use state::{
    AppState, CoreSettings, BREEDS_FALLBACK, DEFAULT_RANGE_DAYS, DOG_IMAGES_FALLBACK,
    REDDIT_FALLBACK,
};
pub use surface::{ContentRegion, RenderSurface};
pub use update::update;
pub use view_model::{
    AppViewModel, BreedButtonView, BreedDetails, BreedPanel, CarouselView, ChartView,
    RedditRowView,
};
