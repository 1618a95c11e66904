//! Listing queries with optional validated ordering
//!
//! Unlike the aggregates, these take a caller-supplied sort field. The field
//! is an identifier, so it cannot be bound as a parameter; it is parsed
//! against the per-operation allow-list instead and only the enum's own
//! column text reaches the SQL.

use std::str::FromStr;

use super::{SortOrder, SqlQuery};
use crate::validation::{MedalField, SportField, ValidationError};

fn order_clause(column: &str, order: SortOrder) -> String {
    format!(" ORDER BY {} {}", column, order.to_sql())
}

/// All medal rows for the country
///
/// With `field` given, rows are ordered by that GoldMedal column, ascending
/// iff `ascending`. Without it no ORDER BY is emitted and row order is up to
/// the executor.
pub fn ordered_medals(
    country: &str,
    field: Option<&str>,
    ascending: bool,
) -> Result<SqlQuery, ValidationError> {
    let mut sql = String::from("SELECT * FROM GoldMedal WHERE country = $1");

    if let Some(field) = field {
        let field = MedalField::from_str(field)?;
        sql.push_str(&order_clause(
            field.as_str(),
            SortOrder::from_ascending(ascending),
        ));
    }

    Ok(SqlQuery::new(sql, vec![country.to_string()]))
}

/// Per-sport medal counts for the country, with each sport's integer share
/// of the country's total
///
/// `percent` is `count * 100 / total` under SQL integer division, so it
/// truncates. Sortable by `sport`, `count`, or `percent`. The country binds
/// twice: once for the total subquery, once for the outer filter.
pub fn ordered_sports(
    country: &str,
    field: Option<&str>,
    ascending: bool,
) -> Result<SqlQuery, ValidationError> {
    let mut sql = String::from(
        "SELECT sport, COUNT(*) AS count, \
         COUNT(*) * 100 / (SELECT COUNT(*) FROM GoldMedal WHERE country = $1) AS percent \
         FROM GoldMedal \
         WHERE country = $2 \
         GROUP BY sport",
    );

    if let Some(field) = field {
        let field = SportField::from_str(field)?;
        sql.push_str(&order_clause(
            field.as_str(),
            SortOrder::from_ascending(ascending),
        ));
    }

    Ok(SqlQuery::new(
        sql,
        vec![country.to_string(), country.to_string()],
    ))
}
