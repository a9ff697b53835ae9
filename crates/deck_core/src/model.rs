//! Payloads produced by the engine and rendered by the pages.

use std::fmt;

pub const DOG_IMAGE_ALT: &str = "Random Dog";
pub const NOT_AVAILABLE: &str = "N/A";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DogImage {
    pub url: String,
    pub alt: String,
}

impl DogImage {
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            alt: DOG_IMAGE_ALT.to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct BreedProfile {
    pub temperament: Option<String>,
    pub bred_for: Option<String>,
    pub life_span: Option<String>,
}

impl BreedProfile {
    pub fn life(&self) -> LifeSpan {
        self.life_span
            .as_deref()
            .and_then(LifeSpan::parse)
            .unwrap_or_default()
    }
}

/// Minimum and maximum life expectancy in years, as displayed on the breed panel.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct LifeSpan {
    pub min: Option<String>,
    pub max: Option<String>,
}

impl LifeSpan {
    /// Extracts the first `<digits> - <digits>` run, e.g. `"10 - 12 years"`.
    pub fn parse(raw: &str) -> Option<Self> {
        let bytes = raw.as_bytes();
        let mut start = 0;
        while start < bytes.len() {
            if !bytes[start].is_ascii_digit() {
                start += 1;
                continue;
            }
            let (min, after_min) = take_digits(raw, start);
            let mut cursor = skip_whitespace(bytes, after_min);
            if bytes.get(cursor) == Some(&b'-') {
                cursor = skip_whitespace(bytes, cursor + 1);
                if bytes.get(cursor).is_some_and(u8::is_ascii_digit) {
                    let (max, _) = take_digits(raw, cursor);
                    return Some(Self {
                        min: Some(min.to_string()),
                        max: Some(max.to_string()),
                    });
                }
            }
            start = after_min;
        }
        None
    }

    pub fn min_label(&self) -> String {
        label(self.min.as_deref())
    }

    pub fn max_label(&self) -> String {
        label(self.max.as_deref())
    }
}

fn take_digits(raw: &str, start: usize) -> (&str, usize) {
    let end = raw[start..]
        .find(|c: char| !c.is_ascii_digit())
        .map_or(raw.len(), |offset| start + offset);
    (&raw[start..end], end)
}

fn skip_whitespace(bytes: &[u8], mut idx: usize) -> usize {
    while bytes.get(idx).is_some_and(u8::is_ascii_whitespace) {
        idx += 1;
    }
    idx
}

fn label(years: Option<&str>) -> String {
    years.unwrap_or(NOT_AVAILABLE).to_string()
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Quote {
    pub text: String,
    pub author: String,
}

impl Quote {
    pub fn fallback() -> Self {
        Self {
            text: "The best way to predict the future is to create it.".to_string(),
            author: "Abraham Lincoln".to_string(),
        }
    }
}

/// One daily aggregate; `timestamp_ms` is the UNIX epoch in milliseconds.
#[derive(Debug, Clone, PartialEq)]
pub struct PricePoint {
    pub timestamp_ms: i64,
    pub close: f64,
}

/// Aggregates response as returned upstream; only `"OK"` with points is chartable.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct StockSeries {
    pub status: String,
    pub points: Vec<PricePoint>,
}

impl StockSeries {
    pub fn is_chartable(&self) -> bool {
        self.status == "OK" && !self.points.is_empty()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Sentiment {
    Bullish,
    Bearish,
    Neutral,
}

impl Sentiment {
    /// Only the exact upstream spellings count; anything else is neutral.
    pub fn from_label(label: &str) -> Self {
        match label {
            "Bullish" => Sentiment::Bullish,
            "Bearish" => Sentiment::Bearish,
            _ => Sentiment::Neutral,
        }
    }

    pub fn icon(self) -> Option<char> {
        match self {
            Sentiment::Bullish => Some('\u{1F53A}'),
            Sentiment::Bearish => Some('\u{1F53B}'),
            Sentiment::Neutral => None,
        }
    }
}

impl fmt::Display for Sentiment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Sentiment::Bullish => write!(f, "Bullish"),
            Sentiment::Bearish => write!(f, "Bearish"),
            Sentiment::Neutral => write!(f, "Neutral"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RedditStock {
    pub ticker: String,
    pub comments: u64,
    pub sentiment: Sentiment,
}

impl RedditStock {
    pub fn quote_link(&self) -> String {
        format!("https://finance.yahoo.com/quote/{}", self.ticker)
    }
}

/// Upper-cases the first character, leaving the rest untouched.
pub fn capitalize(text: &str) -> String {
    let mut chars = text.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn life_span_parses_range_with_spaces() {
        let life = LifeSpan::parse("10 - 12 years").unwrap();
        assert_eq!(life.min.as_deref(), Some("10"));
        assert_eq!(life.max.as_deref(), Some("12"));
    }

    #[test]
    fn life_span_parses_compact_range_after_prefix() {
        let life = LifeSpan::parse("about 8-9 years").unwrap();
        assert_eq!((life.min_label(), life.max_label()), ("8".into(), "9".into()));
    }

    #[test]
    fn life_span_keeps_digits_too_large_for_integers() {
        let life = LifeSpan::parse("99999999999 - 99999999999 years").unwrap();
        assert_eq!(life.min_label(), "99999999999");
        assert_eq!(life.max_label(), "99999999999");
    }

    #[test]
    fn life_span_without_range_is_none() {
        assert_eq!(LifeSpan::parse("12 years"), None);
        assert_eq!(LifeSpan::parse(""), None);
    }

    #[test]
    fn missing_life_span_renders_not_available() {
        let life = BreedProfile::default().life();
        assert_eq!(life.min_label(), "N/A");
        assert_eq!(life.max_label(), "N/A");
    }

    #[test]
    fn capitalize_handles_empty_and_unicode() {
        assert_eq!(capitalize("beagle"), "Beagle");
        assert_eq!(capitalize(""), "");
        assert_eq!(capitalize("ñandu"), "Ñandu");
    }

    #[test]
    fn sentiment_is_exact_match_only() {
        assert_eq!(Sentiment::from_label("Bullish"), Sentiment::Bullish);
        assert_eq!(Sentiment::from_label("bullish"), Sentiment::Neutral);
        assert_eq!(Sentiment::from_label("Bearish").icon(), Some('\u{1F53B}'));
    }
}
