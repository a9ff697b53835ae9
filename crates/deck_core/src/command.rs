//! Phrase pattern table for voice commands.
//!
//! Patterns are space-separated words. `*name` captures one or more words and
//! `:name` captures exactly one. Literal words compare case-insensitively,
//! captures keep the casing of the utterance, and the whole utterance must be
//! consumed for a pattern to match.

use crate::Page;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommandAction {
    Greet,
    ChangeColor,
    Navigate,
    LoadBreed,
    LookupStock,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VoiceCommand {
    pub action: CommandAction,
    pub captures: Vec<String>,
}

impl VoiceCommand {
    pub fn capture(&self) -> Option<&str> {
        self.captures.first().map(String::as_str)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CommandError {
    #[error("Sorry, could not find breed \"{0}\"")]
    NoMatch(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
enum Segment {
    Word(String),
    One,
    Rest,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandPattern {
    phrase: String,
    segments: Vec<Segment>,
    action: CommandAction,
}

impl CommandPattern {
    pub fn new(phrase: &str, action: CommandAction) -> Self {
        let segments = phrase
            .split_whitespace()
            .map(|word| {
                if word.starts_with('*') {
                    Segment::Rest
                } else if word.starts_with(':') {
                    Segment::One
                } else {
                    Segment::Word(word.to_lowercase())
                }
            })
            .collect();
        Self {
            phrase: phrase.to_string(),
            segments,
            action,
        }
    }

    pub fn phrase(&self) -> &str {
        &self.phrase
    }

    pub fn action(&self) -> CommandAction {
        self.action
    }

    fn matches(&self, words: &[&str]) -> Option<Vec<String>> {
        let mut captures = Vec::new();
        match_segments(&self.segments, words, &mut captures).then_some(captures)
    }
}

fn match_segments(segments: &[Segment], words: &[&str], captures: &mut Vec<String>) -> bool {
    let Some((segment, rest)) = segments.split_first() else {
        return words.is_empty();
    };
    match segment {
        Segment::Word(expected) => match words.split_first() {
            Some((word, remaining)) if word.to_lowercase() == *expected => {
                match_segments(rest, remaining, captures)
            }
            _ => false,
        },
        Segment::One => match words.split_first() {
            Some((word, remaining)) => {
                captures.push((*word).to_string());
                if match_segments(rest, remaining, captures) {
                    true
                } else {
                    captures.pop();
                    false
                }
            }
            None => false,
        },
        // Shortest capture first so later literals still get a chance to match.
        Segment::Rest => {
            for take in 1..=words.len() {
                captures.push(words[..take].join(" "));
                if match_segments(rest, &words[take..], captures) {
                    return true;
                }
                captures.pop();
            }
            false
        }
    }
}

/// Ordered dispatch table; the first matching pattern wins.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct CommandTable {
    patterns: Vec<CommandPattern>,
}

impl CommandTable {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, phrase: &str, action: CommandAction) -> Self {
        self.patterns.push(CommandPattern::new(phrase, action));
        self
    }

    pub fn for_page(page: Page) -> Self {
        let table = Self::new()
            .with("hello", CommandAction::Greet)
            .with("change the color to *color", CommandAction::ChangeColor)
            .with("navigate to *page", CommandAction::Navigate);
        match page {
            Page::Home => table,
            Page::Dogs => table.with("load dog breed *breed", CommandAction::LoadBreed),
            Page::Stocks => table.with("lookup *stock", CommandAction::LookupStock),
        }
    }

    pub fn patterns(&self) -> &[CommandPattern] {
        &self.patterns
    }

    pub fn dispatch(&self, utterance: &str) -> Option<VoiceCommand> {
        let words: Vec<&str> = utterance.split_whitespace().collect();
        if words.is_empty() {
            return None;
        }
        self.patterns.iter().find_map(|pattern| {
            pattern.matches(&words).map(|captures| VoiceCommand {
                action: pattern.action,
                captures,
            })
        })
    }
}
