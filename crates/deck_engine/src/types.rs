use std::fmt;

use deck_core::{BreedProfile, DogImage, Quote, RedditStock, StockSeries};

use crate::batch::BatchResult;

#[derive(Debug, Clone, PartialEq)]
pub enum EngineEvent {
    QuoteLoaded(Result<Vec<Quote>, FetchError>),
    DogImagesLoaded(BatchResult<DogImage>),
    BreedsLoaded(Result<Vec<String>, FetchError>),
    BreedInfoLoaded {
        breed: String,
        result: Result<Vec<BreedProfile>, FetchError>,
    },
    StockSeriesLoaded {
        ticker: String,
        days: u32,
        result: Result<StockSeries, FetchError>,
    },
    RedditStocksLoaded(Result<Vec<RedditStock>, FetchError>),
}

/// Single failure type handed to callers; `kind` keeps the detail for logs.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{kind}: {message}")]
pub struct FetchError {
    pub kind: FailureKind,
    pub message: String,
}

impl FetchError {
    pub fn new(kind: FailureKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }

    pub(crate) fn malformed(message: impl fmt::Display) -> Self {
        Self::new(FailureKind::Malformed, message.to_string())
    }

    pub fn class(&self) -> ErrorClass {
        self.kind.class()
    }

    pub fn is_cancelled(&self) -> bool {
        self.kind == FailureKind::Cancelled
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FailureKind {
    InvalidUrl,
    HttpStatus(u16),
    Timeout,
    RedirectLimitExceeded,
    TooLarge { max_bytes: u64, actual: Option<u64> },
    UnsupportedContentType { content_type: String },
    Malformed,
    Cancelled,
    InvalidBatchSize,
    Network,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorClass {
    /// Host unreachable, DNS, timeouts.
    Transport,
    /// Non-success status or unusable body.
    Response,
    /// The work was cancelled or never valid to start.
    Aborted,
}

impl FailureKind {
    pub fn class(&self) -> ErrorClass {
        match self {
            FailureKind::InvalidUrl
            | FailureKind::Timeout
            | FailureKind::RedirectLimitExceeded
            | FailureKind::Network => ErrorClass::Transport,
            FailureKind::HttpStatus(_)
            | FailureKind::TooLarge { .. }
            | FailureKind::UnsupportedContentType { .. }
            | FailureKind::Malformed => ErrorClass::Response,
            FailureKind::Cancelled | FailureKind::InvalidBatchSize => ErrorClass::Aborted,
        }
    }
}

impl fmt::Display for FailureKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FailureKind::InvalidUrl => write!(f, "invalid url"),
            FailureKind::HttpStatus(code) => write!(f, "http status {code}"),
            FailureKind::Timeout => write!(f, "timeout"),
            FailureKind::RedirectLimitExceeded => write!(f, "redirect limit exceeded"),
            FailureKind::TooLarge { max_bytes, actual } => {
                write!(f, "response too large (max {max_bytes}, actual {actual:?})")
            }
            FailureKind::UnsupportedContentType { content_type } => {
                write!(f, "unsupported content type {content_type}")
            }
            FailureKind::Malformed => write!(f, "malformed payload"),
            FailureKind::Cancelled => write!(f, "cancelled"),
            FailureKind::InvalidBatchSize => write!(f, "invalid batch size"),
            FailureKind::Network => write!(f, "network error"),
        }
    }
}
