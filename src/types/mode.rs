use std::fmt;
use std::str::FromStr;

/// Which entity kind the search and filter UI currently targets.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum DiscoverMode {
    #[default]
    Clubs,
    Vendors,
    Requests,
}

impl DiscoverMode {
    pub const ALL: [DiscoverMode; 3] = [Self::Clubs, Self::Vendors, Self::Requests];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Clubs => "clubs",
            Self::Vendors => "vendors",
            Self::Requests => "requests",
        }
    }
}

impl fmt::Display for DiscoverMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for DiscoverMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        Self::ALL
            .into_iter()
            .find(|m| m.as_str().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| format!("expected one of clubs, vendors, requests; got `{wanted}`"))
    }
}
