//! Convenience re-exports for common usage

pub use crate::config::{AppConfig, ConfigError, DatabaseConfig};
pub use crate::errors::GoldMedalError;
pub use crate::models::{
    AthleteTally, Country, Gender, GoldMedal, GroupTally, Season, SportTally, YearTally,
};
pub use crate::query::{
    best_by, best_discipline, best_event, best_sport, best_year, gold_medal_count,
    medalist_count, men_medalist_count, most_medaled_athlete, most_summer_wins,
    most_winter_wins, ordered_medals, ordered_sports, women_medalist_count, BestGroup,
    SortOrder, SqlQuery,
};
pub use crate::schema;
pub use crate::store::MedalStore;
pub use crate::validation::{MedalField, SportField, ValidationError};
