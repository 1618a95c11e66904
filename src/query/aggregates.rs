//! Single-row aggregate queries
//!
//! Counts and the top-athlete lookup for one country. The country value is
//! always `$1`; it never appears in the SQL text itself.

use super::SqlQuery;
use crate::models::Gender;

/// Total number of gold medals won by the country
pub fn gold_medal_count(country: &str) -> SqlQuery {
    SqlQuery::new(
        "SELECT COUNT(*) AS count FROM GoldMedal WHERE country = $1",
        vec![country.to_string()],
    )
}

/// Number of distinct medal-winning athletes of the given gender
///
/// Medals are grouped by athlete name first and the groups are counted, so
/// an athlete with several medals counts once.
pub fn medalist_count(country: &str, gender: Gender) -> SqlQuery {
    SqlQuery::new(
        "WITH medalists AS (\
             SELECT name FROM GoldMedal \
             WHERE country = $1 AND gender = $2 \
             GROUP BY name\
         ) \
         SELECT COUNT(*) AS count FROM medalists",
        vec![country.to_string(), gender.as_str().to_string()],
    )
}

/// Number of distinct male medalists for the country
pub fn men_medalist_count(country: &str) -> SqlQuery {
    medalist_count(country, Gender::Men)
}

/// Number of distinct female medalists for the country
pub fn women_medalist_count(country: &str) -> SqlQuery {
    medalist_count(country, Gender::Women)
}

/// The athlete with the most medals for the country, as (name, count)
///
/// Ties at the top count are broken by the executor; no secondary sort key
/// is emitted.
pub fn most_medaled_athlete(country: &str) -> SqlQuery {
    SqlQuery::new(
        "SELECT name, COUNT(*) AS count FROM GoldMedal \
         WHERE country = $1 \
         GROUP BY name \
         ORDER BY count DESC \
         LIMIT 1",
        vec![country.to_string()],
    )
}
