//! Validation module
//!
//! Closed allow-lists for every identifier a caller can influence. Sort
//! fields arrive as free-form strings at the API boundary; they only reach
//! SQL text after parsing into one of the enums below, so an unknown or
//! malicious field name fails here instead of altering the emitted query.

use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Validation errors for caller-supplied identifiers and domain values
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// Sort field is not in the allow-list for the operation
    #[error("unknown sort field '{field}' (allowed: {allowed})")]
    UnknownField {
        field: String,
        allowed: &'static str,
    },
    /// Value is outside a fixed domain such as season or gender
    #[error("unknown {domain} value '{value}' (expected one of: {expected})")]
    UnknownValue {
        domain: &'static str,
        value: String,
        expected: &'static str,
    },
}

/// Sortable columns of the GoldMedal table
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MedalField {
    Id,
    Year,
    City,
    Season,
    Name,
    Country,
    Gender,
    Sport,
    Discipline,
    Event,
}

impl MedalField {
    const ALLOWED: &'static str =
        "id, year, city, season, name, country, gender, sport, discipline, event";

    /// Column name as it appears in the GoldMedal DDL
    pub fn as_str(&self) -> &'static str {
        match self {
            MedalField::Id => "id",
            MedalField::Year => "year",
            MedalField::City => "city",
            MedalField::Season => "season",
            MedalField::Name => "name",
            MedalField::Country => "country",
            MedalField::Gender => "gender",
            MedalField::Sport => "sport",
            MedalField::Discipline => "discipline",
            MedalField::Event => "event",
        }
    }
}

impl FromStr for MedalField {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "id" => Ok(MedalField::Id),
            "year" => Ok(MedalField::Year),
            "city" => Ok(MedalField::City),
            "season" => Ok(MedalField::Season),
            "name" => Ok(MedalField::Name),
            "country" => Ok(MedalField::Country),
            "gender" => Ok(MedalField::Gender),
            "sport" => Ok(MedalField::Sport),
            "discipline" => Ok(MedalField::Discipline),
            "event" => Ok(MedalField::Event),
            _ => Err(ValidationError::UnknownField {
                field: s.to_string(),
                allowed: Self::ALLOWED,
            }),
        }
    }
}

impl fmt::Display for MedalField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Sortable columns of the per-sport breakdown (`sport` plus the two
/// computed aliases)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SportField {
    Sport,
    Count,
    Percent,
}

impl SportField {
    const ALLOWED: &'static str = "sport, count, percent";

    /// Column or alias name as it appears in the breakdown select list
    pub fn as_str(&self) -> &'static str {
        match self {
            SportField::Sport => "sport",
            SportField::Count => "count",
            SportField::Percent => "percent",
        }
    }
}

impl FromStr for SportField {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "sport" => Ok(SportField::Sport),
            "count" => Ok(SportField::Count),
            "percent" => Ok(SportField::Percent),
            _ => Err(ValidationError::UnknownField {
                field: s.to_string(),
                allowed: Self::ALLOWED,
            }),
        }
    }
}

impl fmt::Display for SportField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_medal_field_accepts_every_column() {
        let columns = [
            "id",
            "year",
            "city",
            "season",
            "name",
            "country",
            "gender",
            "sport",
            "discipline",
            "event",
        ];

        for column in columns {
            let field: MedalField = column.parse().unwrap();
            assert_eq!(field.as_str(), column);
        }
    }

    #[test]
    fn test_medal_field_rejects_unknown_names() {
        for bad in ["medal", "YEAR", "year ", "", "year; DROP TABLE GoldMedal"] {
            let result = MedalField::from_str(bad);
            assert!(
                matches!(result, Err(ValidationError::UnknownField { .. })),
                "should reject: {:?}",
                bad
            );
        }
    }

    #[test]
    fn test_medal_field_error_names_the_allow_list() {
        let err = MedalField::from_str("points").unwrap_err();
        match err {
            ValidationError::UnknownField { field, allowed } => {
                assert_eq!(field, "points");
                assert!(allowed.contains("discipline"));
            }
            other => panic!("unexpected error: {:?}", other),
        }
    }

    #[test]
    fn test_sport_field_allow_list() {
        assert_eq!(SportField::from_str("sport").unwrap(), SportField::Sport);
        assert_eq!(SportField::from_str("count").unwrap(), SportField::Count);
        assert_eq!(
            SportField::from_str("percent").unwrap(),
            SportField::Percent
        );

        // Medal columns are not sortable in the sport breakdown
        assert!(SportField::from_str("year").is_err());
        assert!(SportField::from_str("name").is_err());
    }

    #[test]
    fn test_display_matches_column_names() {
        assert_eq!(format!("{}", MedalField::Discipline), "discipline");
        assert_eq!(format!("{}", SportField::Percent), "percent");
    }
}
