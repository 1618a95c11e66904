//! Best-X aggregations
//!
//! All six best-X questions share one shape: group the country's medals by a
//! column, count per group, return the group with the highest count. The
//! shape lives in [`best_by`]; the public operations are thin wrappers that
//! fix the grouping column and season filter.

use super::SqlQuery;
use crate::models::Season;

/// Grouping key for a best-X aggregation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BestGroup {
    Year,
    Discipline,
    Sport,
    Event,
}

impl BestGroup {
    /// Column name in the GoldMedal table
    pub fn column(&self) -> &'static str {
        match self {
            BestGroup::Year => "year",
            BestGroup::Discipline => "discipline",
            BestGroup::Sport => "sport",
            BestGroup::Event => "event",
        }
    }
}

/// The group (by `group` column, optionally filtered to a season) with the
/// most medals for the country, as (group value, count)
///
/// The result has at most one row; a country with no matching medals yields
/// zero rows. Ties at the maximum are broken by the executor.
pub fn best_by(country: &str, group: BestGroup, season: Option<Season>) -> SqlQuery {
    let column = group.column();

    let mut binds = vec![country.to_string()];
    let season_filter = match season {
        Some(season) => {
            binds.push(season.as_str().to_string());
            " AND season = $2"
        }
        None => "",
    };

    let sql = format!(
        "WITH grouped AS (\
             SELECT {column}, COUNT(*) AS count FROM GoldMedal \
             WHERE country = $1{season_filter} \
             GROUP BY {column}\
         ) \
         SELECT {column}, count FROM grouped \
         ORDER BY count DESC \
         LIMIT 1"
    );

    SqlQuery::new(sql, binds)
}

/// The year the country won the most Summer medals, with that count
pub fn most_summer_wins(country: &str) -> SqlQuery {
    best_by(country, BestGroup::Year, Some(Season::Summer))
}

/// The year the country won the most Winter medals, with that count
pub fn most_winter_wins(country: &str) -> SqlQuery {
    best_by(country, BestGroup::Year, Some(Season::Winter))
}

/// The year the country won the most medals overall, with that count
pub fn best_year(country: &str) -> SqlQuery {
    best_by(country, BestGroup::Year, None)
}

/// The discipline the country won the most medals in, with that count
pub fn best_discipline(country: &str) -> SqlQuery {
    best_by(country, BestGroup::Discipline, None)
}

/// The sport the country won the most medals in, with that count
pub fn best_sport(country: &str) -> SqlQuery {
    best_by(country, BestGroup::Sport, None)
}

/// The event the country won the most medals in, with that count
pub fn best_event(country: &str) -> SqlQuery {
    best_by(country, BestGroup::Event, None)
}
