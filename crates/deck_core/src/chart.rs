use chrono::DateTime;
use deck_logging::deck_debug;

use crate::PricePoint;

#[derive(Debug, Clone, PartialEq, Default)]
pub struct ChartData {
    pub labels: Vec<String>,
    pub prices: Vec<f64>,
}

impl ChartData {
    /// Closing price per day, labelled `MM/DD/YYYY` in UTC.
    pub fn from_points(points: &[PricePoint]) -> Self {
        let mut data = ChartData::default();
        for point in points {
            let Some(when) = DateTime::from_timestamp_millis(point.timestamp_ms) else {
                continue;
            };
            data.labels.push(when.format("%m/%d/%Y").to_string());
            data.prices.push(point.close);
        }
        data
    }

    pub fn len(&self) -> usize {
        self.prices.len()
    }

    pub fn min_max(&self) -> Option<(f64, f64)> {
        let mut iter = self.prices.iter().copied();
        let first = iter.next()?;
        Some(iter.fold((first, first), |(lo, hi), p| (lo.min(p), hi.max(p))))
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Chart {
    pub ticker: String,
    pub data: ChartData,
}

impl Chart {
    pub fn new(ticker: impl Into<String>, data: ChartData) -> Self {
        Self {
            ticker: ticker.into(),
            data,
        }
    }

    pub fn title(&self) -> String {
        format!("{} Stock Price Chart", self.ticker)
    }

    pub fn series_label(&self) -> String {
        format!("{} Stock Price", self.ticker)
    }
}

/// Owner of the single chart instance on the stocks page.
///
/// Every render destroys the previous chart before the new one takes its place.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ChartSlot {
    current: Option<Chart>,
    generation: u64,
    loading: bool,
}

impl ChartSlot {
    pub fn current(&self) -> Option<&Chart> {
        self.current.as_ref()
    }

    /// Number of charts created in this slot so far.
    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn set_loading(&mut self, loading: bool) {
        self.loading = loading;
    }

    /// Drops the current chart and any loading marker. The generation count is kept.
    pub fn clear(&mut self) {
        if let Some(previous) = self.current.take() {
            deck_debug!(
                "Destroying chart generation={} ticker={}",
                self.generation,
                previous.ticker
            );
        }
        self.loading = false;
    }

    pub fn replace(&mut self, chart: Chart) {
        if let Some(previous) = self.current.take() {
            deck_debug!(
                "Destroying chart generation={} ticker={}",
                self.generation,
                previous.ticker
            );
        }
        self.generation += 1;
        deck_debug!(
            "Creating chart generation={} ticker={} points={}",
            self.generation,
            chart.ticker,
            chart.data.len()
        );
        self.current = Some(chart);
    }
}
