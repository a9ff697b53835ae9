#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    FetchQuote,
    FetchDogImages { count: usize },
    FetchBreeds,
    FetchBreedInfo { breed: String },
    FetchStockSeries { ticker: String, days: u32 },
    FetchRedditStocks { limit: usize },
    ListeningChanged { active: bool },
    Alert(String),
}
