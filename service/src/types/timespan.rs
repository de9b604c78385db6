use crate::Error;
use serde::{Deserialize, Serialize};
use std::{fmt, str::FromStr};

/// Lookback window for pool stats. Variant order is the display order, so
/// the derived `Ord` ranks shorter windows below longer ones.
#[derive(
    Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Default,
)]
pub enum Timespan {
    #[serde(rename = "24h")]
    Day1,
    #[serde(rename = "3d")]
    Day3,
    #[default]
    #[serde(rename = "1w")]
    Week1,
    #[serde(rename = "1m")]
    Month1,
    #[serde(rename = "3m")]
    Month3,
    #[serde(rename = "6m")]
    Month6,
    #[serde(rename = "1y")]
    Year1,
    #[serde(rename = "2y")]
    Year2,
    #[serde(rename = "3y")]
    Year3,
    #[serde(rename = "all")]
    All,
}

impl Timespan {
    pub const ALL: [Timespan; 10] = [
        Timespan::Day1,
        Timespan::Day3,
        Timespan::Week1,
        Timespan::Month1,
        Timespan::Month3,
        Timespan::Month6,
        Timespan::Year1,
        Timespan::Year2,
        Timespan::Year3,
        Timespan::All,
    ];

    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Timespan::Day1 => "24h",
            Timespan::Day3 => "3d",
            Timespan::Week1 => "1w",
            Timespan::Month1 => "1m",
            Timespan::Month3 => "3m",
            Timespan::Month6 => "6m",
            Timespan::Year1 => "1y",
            Timespan::Year2 => "2y",
            Timespan::Year3 => "3y",
            Timespan::All => "all",
        }
    }
}

impl fmt::Display for Timespan {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Timespan {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(match s {
            "24h" => Timespan::Day1,
            "3d" => Timespan::Day3,
            "1w" => Timespan::Week1,
            "1m" => Timespan::Month1,
            "3m" => Timespan::Month3,
            "6m" => Timespan::Month6,
            "1y" => Timespan::Year1,
            "2y" => Timespan::Year2,
            "3y" => Timespan::Year3,
            "all" => Timespan::All,
            _ => return Err(Error::UnknownTimespan(s.to_owned())),
        })
    }
}
