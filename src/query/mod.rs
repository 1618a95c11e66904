//! Query construction
//!
//! One pure function per analytical question. Each returns a [`SqlQuery`]:
//! PostgreSQL text with `$n` placeholders plus the bind values in placeholder
//! order. Nothing here touches a connection.

pub mod aggregates;
pub mod best;
pub mod listing;
pub mod ordering;


pub use aggregates::{
    gold_medal_count, medalist_count, men_medalist_count, most_medaled_athlete,
    women_medalist_count,
};
pub use best::{
    best_by, best_discipline, best_event, best_sport, best_year, most_summer_wins,
    most_winter_wins, BestGroup,
};
pub use listing::{ordered_medals, ordered_sports};
pub use ordering::SortOrder;

/// A built SQL statement plus its positional bind values
///
/// `binds[0]` fills `$1`, `binds[1]` fills `$2`, and so on. Every value in
/// this schema that a caller can supply is text, so binds are plain strings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SqlQuery {
    sql: String,
    binds: Vec<String>,
}

impl SqlQuery {
    pub fn new(sql: impl Into<String>, binds: Vec<String>) -> Self {
        Self {
            sql: sql.into(),
            binds,
        }
    }

    /// The SQL text with `$n` placeholders
    pub fn sql(&self) -> &str {
        &self.sql
    }

    /// The bind values, in placeholder order
    pub fn binds(&self) -> &[String] {
        &self.binds
    }
}
