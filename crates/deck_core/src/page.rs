use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Hash)]
pub enum Page {
    #[default]
    Home,
    Dogs,
    Stocks,
}

impl Page {
    pub const ALL: [Page; 3] = [Page::Home, Page::Dogs, Page::Stocks];

    pub fn name(self) -> &'static str {
        match self {
            Page::Home => "home",
            Page::Dogs => "dogs",
            Page::Stocks => "stocks",
        }
    }

    /// Case-insensitive lookup of a spoken page name.
    pub fn from_spoken(name: &str) -> Option<Self> {
        let lowered = name.trim().to_lowercase();
        Self::ALL.into_iter().find(|page| page.name() == lowered)
    }
}

impl fmt::Display for Page {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown page \"{0}\"")]
pub struct UnknownPage(pub String);

impl FromStr for Page {
    type Err = UnknownPage;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_spoken(s).ok_or_else(|| UnknownPage(s.to_string()))
    }
}
