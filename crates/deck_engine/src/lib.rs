//! Fetchdeck engine: HTTP fetching, upstream API clients and batch rendering.
mod api;
mod batch;
mod engine;
mod fetch;
mod payload;
mod types;

pub use api::{date_range, endpoint_url, ApiClient, Endpoints};
pub use batch::{BatchFetchRenderer, BatchResult};
pub use engine::{EngineConfig, EngineError, EngineHandle, EngineRequest};
pub use fetch::{FetchSettings, Fetcher, ReqwestFetcher};
pub use types::{EngineEvent, ErrorClass, FailureKind, FetchError};
