use deck_core::{AppViewModel, BreedPanel, CarouselView, ChartView, Page, RedditRowView};

use super::constants::*;

/// Renders the current page as plain text lines.
pub fn render(view: &AppViewModel) -> Vec<String> {
    let mut lines = vec![header(view)];
    match view.page {
        Page::Home => render_home(view, &mut lines),
        Page::Dogs => render_dogs(view, &mut lines),
        Page::Stocks => render_stocks(view, &mut lines),
    }
    lines
}

fn header(view: &AppViewModel) -> String {
    let tabs = Page::ALL
        .iter()
        .map(|page| {
            if *page == view.page {
                format!("[{page}]")
            } else {
                page.to_string()
            }
        })
        .collect::<Vec<_>>()
        .join(" | ");
    let mut text = format!("== Fetchdeck == {tabs}");
    if view.listening {
        text.push_str("  (listening)");
    }
    if let Some(color) = &view.background {
        text.push_str(&format!("  background: {color}"));
    }
    text
}

fn render_home(view: &AppViewModel, lines: &mut Vec<String>) {
    match &view.quote {
        Some(quote) => {
            lines.push(format!("\"{}\"", quote.text));
            lines.push(format!("— {}", quote.author));
        }
        None if view.quote_loading => lines.push("Loading quote...".to_string()),
        None => {}
    }
}

fn render_dogs(view: &AppViewModel, lines: &mut Vec<String>) {
    render_carousel(&view.carousel, lines);

    lines.push(String::new());
    match &view.breeds_fallback {
        Some(message) => lines.push(message.clone()),
        None if view.breeds.is_empty() => lines.push("Loading breeds...".to_string()),
        None => {
            let labels: Vec<String> = view
                .breeds
                .iter()
                .map(|button| {
                    if button.selected {
                        format!("[{}]", button.label)
                    } else {
                        button.label.clone()
                    }
                })
                .collect();
            lines.push("Breeds:".to_string());
            lines.extend(wrap(&labels, LINE_WIDTH));
        }
    }

    if let Some(panel) = &view.breed_panel {
        lines.push(String::new());
        render_breed_panel(panel, lines);
    }
}

fn render_carousel(carousel: &CarouselView, lines: &mut Vec<String>) {
    if let Some(message) = &carousel.fallback {
        lines.push(message.clone());
        return;
    }
    if carousel.loading {
        lines.push("Loading dog images...".to_string());
        return;
    }
    if let Some(index) = carousel.current {
        if let Some(slide) = carousel.slides.get(index) {
            lines.push(format!(
                "Slide {}/{}: {} ({})",
                index + 1,
                carousel.slides.len(),
                slide.url,
                slide.alt
            ));
            lines.push(format!(
                "next slide every {:.1}s, transition {:.1}s",
                carousel.delay_ms as f64 / 1000.0,
                carousel.transition_ms as f64 / 1000.0
            ));
        }
    }
}

fn render_breed_panel(panel: &BreedPanel, lines: &mut Vec<String>) {
    lines.push(panel.heading.clone());
    if let Some(details) = &panel.details {
        lines.push(details.temperament.clone());
        if let Some(bred_for) = &details.bred_for {
            lines.push(bred_for.clone());
        }
        lines.push(format!("Min Life: {} years", details.min_life));
        lines.push(format!("Max Life: {} years", details.max_life));
    }
}

fn render_stocks(view: &AppViewModel, lines: &mut Vec<String>) {
    lines.push(format!(
        "Ticker: {}  Range: {} days",
        if view.ticker_input.is_empty() {
            "-"
        } else {
            view.ticker_input.as_str()
        },
        view.range_days
    ));

    if view.chart_loading {
        lines.push("Loading chart...".to_string());
    } else if let Some(chart) = &view.chart {
        render_chart(chart, lines);
    }

    lines.push(String::new());
    lines.push(format!(
        "{:<tw$}{:>cw$}  {:<sw$}",
        "Ticker",
        "Comments",
        "Sentiment",
        tw = TICKER_COLUMN,
        cw = COMMENTS_COLUMN,
        sw = SENTIMENT_COLUMN
    ));
    match &view.reddit_fallback {
        Some(message) => lines.push(message.clone()),
        None => lines.extend(view.reddit_rows.iter().map(format_reddit_row)),
    }
}

fn render_chart(chart: &ChartView, lines: &mut Vec<String>) {
    lines.push(chart.title.clone());
    lines.push(format!("{}: {}", chart.series_label, sparkline(&chart.prices, LINE_WIDTH)));
    let first_last = chart.labels.first().zip(chart.labels.last());
    if let (Some((first, last)), Some((low, high))) = (first_last, chart.range) {
        lines.push(format!("{first} .. {last}  low ${low:.2}  high ${high:.2}"));
    }
}

fn format_reddit_row(row: &RedditRowView) -> String {
    let sentiment = match row.sentiment.icon() {
        Some(icon) => format!("{icon} {}", row.sentiment),
        None => row.sentiment.to_string(),
    };
    format!(
        "{:<tw$}{:>cw$}  {:<sw$}{}",
        row.ticker,
        row.comments,
        sentiment,
        row.link,
        tw = TICKER_COLUMN,
        cw = COMMENTS_COLUMN,
        sw = SENTIMENT_COLUMN
    )
}

/// Scales `values` onto block characters, sampling down to at most `width` cells.
fn sparkline(values: &[f64], width: usize) -> String {
    if values.is_empty() || width == 0 {
        return String::new();
    }
    let cells = values.len().min(width);
    let sampled: Vec<f64> = (0..cells).map(|i| values[i * values.len() / cells]).collect();
    let low = sampled.iter().copied().fold(f64::INFINITY, f64::min);
    let high = sampled.iter().copied().fold(f64::NEG_INFINITY, f64::max);
    let top = SPARK_LEVELS.len() - 1;
    sampled
        .iter()
        .map(|value| {
            if high > low {
                let level = ((value - low) / (high - low) * top as f64).round() as usize;
                SPARK_LEVELS[level.min(top)]
            } else {
                SPARK_LEVELS[top / 2]
            }
        })
        .collect()
}

fn wrap(words: &[String], width: usize) -> Vec<String> {
    let mut lines = Vec::new();
    let mut current = String::new();
    for word in words {
        if !current.is_empty() && current.chars().count() + 2 + word.chars().count() > width {
            lines.push(std::mem::take(&mut current));
        }
        if !current.is_empty() {
            current.push_str(", ");
        }
        current.push_str(word);
    }
    if !current.is_empty() {
        lines.push(current);
    }
    lines
}
