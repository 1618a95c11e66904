//! Row types for the medal schema
//!
//! Plain data carriers matching the Country and GoldMedal tables, the two
//! fixed text domains (season, gender), and the small typed rows the
//! aggregate queries decode into.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::validation::ValidationError;

/// One row of the Country table
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, sqlx::FromRow)]
pub struct Country {
    pub name: String,
    pub code: String,
    pub gdp: Option<i32>,
    pub population: Option<i32>,
}

/// One row of the GoldMedal table: one medal awarded to one athlete in one
/// event
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, sqlx::FromRow)]
pub struct GoldMedal {
    pub id: i32,
    pub year: i32,
    pub city: String,
    pub season: String,
    pub name: String,
    pub country: String,
    pub gender: String,
    pub sport: String,
    pub discipline: String,
    pub event: String,
}

/// Season domain of GoldMedal.season
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Season {
    Summer,
    Winter,
}

impl Season {
    pub fn as_str(&self) -> &'static str {
        match self {
            Season::Summer => "Summer",
            Season::Winter => "Winter",
        }
    }
}

impl FromStr for Season {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Summer" => Ok(Season::Summer),
            "Winter" => Ok(Season::Winter),
            _ => Err(ValidationError::UnknownValue {
                domain: "season",
                value: s.to_string(),
                expected: "Summer, Winter",
            }),
        }
    }
}

impl fmt::Display for Season {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Gender domain of GoldMedal.gender
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Gender {
    Men,
    Women,
}

impl Gender {
    pub fn as_str(&self) -> &'static str {
        match self {
            Gender::Men => "Men",
            Gender::Women => "Women",
        }
    }
}

impl FromStr for Gender {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Men" => Ok(Gender::Men),
            "Women" => Ok(Gender::Women),
            _ => Err(ValidationError::UnknownValue {
                domain: "gender",
                value: s.to_string(),
                expected: "Men, Women",
            }),
        }
    }
}

impl fmt::Display for Gender {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Top athlete for a country: name and medal count
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, sqlx::FromRow)]
pub struct AthleteTally {
    pub name: String,
    pub count: i64,
}

/// Best year for a country: year and medal count
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, sqlx::FromRow)]
pub struct YearTally {
    pub year: i32,
    pub count: i64,
}

/// Best text-keyed group (discipline, sport, or event) for a country
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GroupTally {
    pub value: String,
    pub count: i64,
}

/// Per-sport breakdown row: medal count and integer percentage of the
/// country's total
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, sqlx::FromRow)]
pub struct SportTally {
    pub sport: String,
    pub count: i64,
    pub percent: i64,
}
