//! Line commands read from stdin.

use deck_core::{Msg, Page};

pub const HELP: &str = "\
Commands:
  open <home|dogs|stocks>   switch page
  listen on|off             toggle voice commands
  say <utterance>           feed an utterance to the voice dispatcher
  click <breed>             show breed information
  lookup <ticker> [days]    chart a ticker over the last N days
  refresh                   reload the current page
  next                      advance the dog carousel
  help                      show this text
  quit                      exit";

#[derive(Debug, Clone, PartialEq)]
pub enum Input {
    Messages(Vec<Msg>),
    Help,
    Quit,
}

pub fn parse_input(line: &str) -> Result<Input, String> {
    let line = line.trim();
    let (verb, rest) = match line.split_once(char::is_whitespace) {
        Some((verb, rest)) => (verb, rest.trim()),
        None => (line, ""),
    };

    let single = |msg: Msg| Ok(Input::Messages(vec![msg]));
    match verb.to_lowercase().as_str() {
        "" => Ok(Input::Messages(Vec::new())),
        "open" => rest
            .parse::<Page>()
            .map(|page| Input::Messages(vec![Msg::PageOpened(page)]))
            .map_err(|err| err.to_string()),
        "listen" => match rest.to_lowercase().as_str() {
            "on" => single(Msg::ListeningToggled(true)),
            "off" => single(Msg::ListeningToggled(false)),
            _ => Err("usage: listen on|off".to_string()),
        },
        "say" if !rest.is_empty() => single(Msg::UtteranceHeard(rest.to_string())),
        "click" if !rest.is_empty() => single(Msg::BreedClicked(rest.to_lowercase())),
        "lookup" => parse_lookup(rest),
        "refresh" => single(Msg::RefreshClicked),
        "next" => single(Msg::NextSlideClicked),
        "help" => Ok(Input::Help),
        "quit" | "exit" => Ok(Input::Quit),
        other => Err(format!("unknown command \"{other}\"; type help")),
    }
}

fn parse_lookup(rest: &str) -> Result<Input, String> {
    let mut parts = rest.split_whitespace();
    let ticker = parts
        .next()
        .ok_or_else(|| "usage: lookup <ticker> [days]".to_string())?;
    let mut messages = vec![Msg::TickerInputChanged(ticker.to_string())];
    if let Some(days) = parts.next() {
        let days = days
            .parse::<u32>()
            .map_err(|_| format!("\"{days}\" is not a number of days"))?;
        messages.push(Msg::RangeSelected(days));
    }
    messages.push(Msg::LookupClicked);
    Ok(Input::Messages(messages))
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn open_accepts_any_case() {
        assert_eq!(
            parse_input("open Dogs"),
            Ok(Input::Messages(vec![Msg::PageOpened(Page::Dogs)]))
        );
        assert!(parse_input("open kittens").is_err());
    }

    #[test]
    fn lookup_with_days_sets_range_before_submitting() {
        assert_eq!(
            parse_input("lookup aapl 90"),
            Ok(Input::Messages(vec![
                Msg::TickerInputChanged("aapl".to_string()),
                Msg::RangeSelected(90),
                Msg::LookupClicked,
            ]))
        );
    }

    #[test]
    fn lookup_without_days_keeps_current_range() {
        assert_eq!(
            parse_input("lookup msft"),
            Ok(Input::Messages(vec![
                Msg::TickerInputChanged("msft".to_string()),
                Msg::LookupClicked,
            ]))
        );
        assert!(parse_input("lookup msft soon").is_err());
        assert!(parse_input("lookup").is_err());
    }

    #[test]
    fn say_keeps_utterance_text() {
        assert_eq!(
            parse_input("say  Navigate to Stocks "),
            Ok(Input::Messages(vec![Msg::UtteranceHeard(
                "Navigate to Stocks".to_string()
            )]))
        );
        assert!(parse_input("say").is_err());
    }

    #[test]
    fn control_words() {
        assert_eq!(parse_input("quit"), Ok(Input::Quit));
        assert_eq!(parse_input("HELP"), Ok(Input::Help));
        assert_eq!(parse_input("   "), Ok(Input::Messages(Vec::new())));
        assert_eq!(
            parse_input("listen on"),
            Ok(Input::Messages(vec![Msg::ListeningToggled(true)]))
        );
        assert!(parse_input("dance").is_err());
    }
}
