//! Fan-out/fan-in fetching with all-or-nothing rendering.
//!
//! A batch launches one fetch per index, joins them, and yields either every
//! item in index order or the first error observed. Each task runs under a
//! child [`CancellationToken`]; the first failure cancels the siblings that are
//! still in flight, and cancelling the caller's token ends the whole batch.

use std::future::Future;

use deck_core::RenderSurface;
use deck_logging::{deck_debug, deck_warn};
use futures_util::stream::{self, StreamExt};
use tokio_util::sync::CancellationToken;

use crate::{FailureKind, FetchError};

#[derive(Debug, Clone, PartialEq)]
pub enum BatchResult<T> {
    AllSucceeded(Vec<T>),
    AnyFailed(FetchError),
}

impl<T> BatchResult<T> {
    pub fn into_result(self) -> Result<Vec<T>, FetchError> {
        match self {
            BatchResult::AllSucceeded(items) => Ok(items),
            BatchResult::AnyFailed(err) => Err(err),
        }
    }

    pub fn is_success(&self) -> bool {
        matches!(self, BatchResult::AllSucceeded(_))
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BatchFetchRenderer {
    max_in_flight: Option<usize>,
}

impl BatchFetchRenderer {
    /// Launches every task of a batch at once.
    pub fn new() -> Self {
        Self::default()
    }

    /// Keeps at most `limit` fetches in flight; `None` means uncapped.
    pub fn with_max_in_flight(limit: Option<usize>) -> Self {
        Self {
            max_in_flight: limit,
        }
    }

    /// Runs `n` fetches concurrently and joins them.
    pub async fn collect<T, F, Fut>(
        &self,
        n: usize,
        fetch_one: F,
        cancel: &CancellationToken,
    ) -> BatchResult<T>
    where
        F: Fn(usize) -> Fut,
        Fut: Future<Output = Result<T, FetchError>>,
    {
        if n == 0 {
            return BatchResult::AnyFailed(FetchError::new(
                FailureKind::InvalidBatchSize,
                "batch size must be positive",
            ));
        }

        let batch_token = cancel.child_token();
        let limit = self.max_in_flight.unwrap_or(n).clamp(1, n);
        deck_debug!("Batch start size={} in_flight={}", n, limit);

        let mut pending = stream::iter(0..n)
            .map(|index| {
                let token = batch_token.child_token();
                let fetch = fetch_one(index);
                async move {
                    let result = tokio::select! {
                        biased;
                        _ = token.cancelled() => {
                            Err(FetchError::new(FailureKind::Cancelled, "batch cancelled"))
                        }
                        result = fetch => result,
                    };
                    (index, result)
                }
            })
            .buffer_unordered(limit);

        let mut slots: Vec<Option<T>> = (0..n).map(|_| None).collect();
        while let Some((index, result)) = pending.next().await {
            match result {
                Ok(item) => slots[index] = Some(item),
                Err(err) => {
                    batch_token.cancel();
                    deck_warn!(
                        "Batch task {} failed ({:?}): {}; discarding batch of {}",
                        index,
                        err.class(),
                        err,
                        n
                    );
                    return BatchResult::AnyFailed(err);
                }
            }
        }

        deck_debug!("Batch complete size={}", n);
        BatchResult::AllSucceeded(slots.into_iter().flatten().collect())
    }

    /// Callback form: exactly one of `on_success` / `on_failure` is invoked, once.
    pub async fn run<T, F, Fut, S, E>(&self, n: usize, fetch_one: F, on_success: S, on_failure: E)
    where
        F: Fn(usize) -> Fut,
        Fut: Future<Output = Result<T, FetchError>>,
        S: FnOnce(Vec<T>),
        E: FnOnce(FetchError),
    {
        let never_cancelled = CancellationToken::new();
        match self.collect(n, fetch_one, &never_cancelled).await {
            BatchResult::AllSucceeded(items) => on_success(items),
            BatchResult::AnyFailed(err) => on_failure(err),
        }
    }

    /// Renders a batch into `surface`, touching it exactly once.
    ///
    /// Returns whether the items (rather than `fallback`) were rendered.
    pub async fn render_into<T, F, Fut, R>(
        &self,
        surface: &mut R,
        n: usize,
        fetch_one: F,
        fallback: &str,
    ) -> bool
    where
        F: Fn(usize) -> Fut,
        Fut: Future<Output = Result<T, FetchError>>,
        R: RenderSurface<T> + ?Sized,
    {
        let never_cancelled = CancellationToken::new();
        match self.collect(n, fetch_one, &never_cancelled).await {
            BatchResult::AllSucceeded(items) => {
                surface.replace_all(items);
                true
            }
            BatchResult::AnyFailed(_) => {
                surface.show_fallback(fallback);
                false
            }
        }
    }
}
