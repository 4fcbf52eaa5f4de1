//! Country record structures

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::GeoQuizError;

/// Continent a country belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Continent {
    Europe,
    Africa,
    Asia,
    #[serde(rename = "North America")]
    NorthAmerica,
    #[serde(rename = "South America")]
    SouthAmerica,
    Oceania,
}

impl Continent {
    /// All continents in declaration order
    pub const ALL: [Continent; 6] = [
        Continent::Europe,
        Continent::Africa,
        Continent::Asia,
        Continent::NorthAmerica,
        Continent::SouthAmerica,
        Continent::Oceania,
    ];

    /// Display name, identical to the serialized form
    pub fn as_str(&self) -> &'static str {
        match self {
            Continent::Europe => "Europe",
            Continent::Africa => "Africa",
            Continent::Asia => "Asia",
            Continent::NorthAmerica => "North America",
            Continent::SouthAmerica => "South America",
            Continent::Oceania => "Oceania",
        }
    }
}

impl fmt::Display for Continent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Continent {
    type Err = GeoQuizError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Continent::ALL
            .iter()
            .copied()
            .find(|c| c.as_str() == s)
            .ok_or_else(|| GeoQuizError::InvalidContinent(s.to_string()))
    }
}

/// Immutable country record. Identity is `code`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Country {
    pub code: String,
    pub name: String,
    pub capital: String,
    pub continent: Continent,
    pub population: u64,
    pub area_km2: f64,
    /// Path of the flag image shown to the player
    #[serde(rename = "flagSvgPath")]
    pub flag_svg_path: String,
}
