use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Season filter gating which catalog items are eligible for an outfit
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Season {
    #[default]
    Spring,
    Summer,
    Fall,
    Winter,
}

impl Season {
    /// All seasons in selector order
    pub const ALL: [Season; 4] = [Season::Spring, Season::Summer, Season::Fall, Season::Winter];

    pub fn as_str(&self) -> &'static str {
        match self {
            Season::Spring => "spring",
            Season::Summer => "summer",
            Season::Fall => "fall",
            Season::Winter => "winter",
        }
    }

    pub fn icon(&self) -> &'static str {
        match self {
            Season::Spring => "🌿",
            Season::Summer => "☀",
            Season::Fall => "☁",
            Season::Winter => "❄",
        }
    }

    /// Next season in selector order, wrapping around
    pub fn next(&self) -> Season {
        match self {
            Season::Spring => Season::Summer,
            Season::Summer => Season::Fall,
            Season::Fall => Season::Winter,
            Season::Winter => Season::Spring,
        }
    }

    /// Previous season in selector order, wrapping around
    pub fn previous(&self) -> Season {
        match self {
            Season::Spring => Season::Winter,
            Season::Summer => Season::Spring,
            Season::Fall => Season::Summer,
            Season::Winter => Season::Fall,
        }
    }
}

impl fmt::Display for Season {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown season '{0}' (expected spring, summer, fall or winter)")]
pub struct ParseSeasonError(pub String);

impl FromStr for Season {
    type Err = ParseSeasonError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "spring" => Ok(Season::Spring),
            "summer" => Ok(Season::Summer),
            "fall" | "autumn" => Ok(Season::Fall),
            "winter" => Ok(Season::Winter),
            _ => Err(ParseSeasonError(s.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_spring() {
        assert_eq!(Season::default(), Season::Spring);
    }

    #[test]
    fn test_parse_is_case_insensitive() {
        assert_eq!("Summer".parse::<Season>(), Ok(Season::Summer));
        assert_eq!("autumn".parse::<Season>(), Ok(Season::Fall));
        assert!("monsoon".parse::<Season>().is_err());
    }

    #[test]
    fn test_next_and_previous_cycle() {
        for season in Season::ALL {
            assert_eq!(season.next().previous(), season);
        }
        assert_eq!(Season::Winter.next(), Season::Spring);
    }

    #[test]
    fn test_serializes_lowercase() {
        let json = serde_json::to_string(&Season::Fall).unwrap();
        assert_eq!(json, "\"fall\"");
    }
}
