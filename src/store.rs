//! Typed PostgreSQL execution for the built queries
//!
//! [`MedalStore`] is the executor side of the crate: it owns a connection
//! pool, bootstraps the schema, and runs each query from [`crate::query`] by
//! binding its values positionally and decoding the rows into the types in
//! [`crate::models`]. Execution failures surface unchanged as
//! [`GoldMedalError::Database`]; there is no retry logic.

use sqlx::postgres::{PgArguments, PgPoolOptions, PgRow};
use sqlx::query::{Query, QueryAs};
use sqlx::{PgPool, Postgres, Row};
use std::time::Duration;

use crate::config::DatabaseConfig;
use crate::debug_log;
use crate::errors::GoldMedalError;
use crate::models::{AthleteTally, Gender, GoldMedal, GroupTally, SportTally, YearTally};
use crate::query::{aggregates, best, best::BestGroup, listing, SqlQuery};
use crate::schema;

fn bind_query(query: &SqlQuery) -> Query<'_, Postgres, PgArguments> {
    let mut prepared = sqlx::query(query.sql());
    for value in query.binds() {
        prepared = prepared.bind(value.as_str());
    }
    prepared
}

fn bind_query_as<T>(query: &SqlQuery) -> QueryAs<'_, Postgres, T, PgArguments>
where
    T: for<'r> sqlx::FromRow<'r, PgRow>,
{
    let mut prepared = sqlx::query_as::<_, T>(query.sql());
    for value in query.binds() {
        prepared = prepared.bind(value.as_str());
    }
    prepared
}

/// Medal store backed by a PostgreSQL pool
#[derive(Debug, Clone)]
pub struct MedalStore {
    pool: PgPool,
}

impl MedalStore {
    /// Connect a new pool from configuration
    pub async fn connect(config: &DatabaseConfig) -> Result<Self, GoldMedalError> {
        config.validate()?;

        let mut pool_options = PgPoolOptions::new()
            .max_connections(config.max_connections)
            .min_connections(config.min_connections)
            .acquire_timeout(Duration::from_secs(config.connection_timeout_seconds))
            .idle_timeout(Duration::from_secs(config.idle_timeout_seconds));

        // Set max lifetime if specified
        if config.max_lifetime_seconds > 0 {
            pool_options =
                pool_options.max_lifetime(Duration::from_secs(config.max_lifetime_seconds));
        }

        let pool = pool_options.connect(&config.connection_string()).await?;

        Ok(Self { pool })
    }

    /// Wrap an existing pool
    pub fn with_pool(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Get database pool reference
    pub fn pool(&self) -> &PgPool {
        &self.pool
    }

    /// Create the Country and GoldMedal tables
    ///
    /// The DDL carries no IF NOT EXISTS: running against a schema that
    /// already has the tables fails with the executor's conflict error.
    pub async fn ensure_schema(&self) -> Result<(), GoldMedalError> {
        for ddl in [
            schema::create_country_table(),
            schema::create_gold_medal_table(),
        ] {
            debug_log!("executing DDL: {}", ddl);
            sqlx::query(ddl).execute(&self.pool).await?;
        }
        Ok(())
    }

    /// Drop both tables if present, then create them fresh
    pub async fn recreate_schema(&self) -> Result<(), GoldMedalError> {
        for ddl in [
            schema::drop_gold_medal_table(),
            schema::drop_country_table(),
        ] {
            debug_log!("executing DDL: {}", ddl);
            sqlx::query(&ddl).execute(&self.pool).await?;
        }
        self.ensure_schema().await
    }

    /// Total gold medals won by the country (0 for an unknown country)
    pub async fn gold_medal_count(&self, country: &str) -> Result<i64, GoldMedalError> {
        self.fetch_count(aggregates::gold_medal_count(country)).await
    }

    /// Distinct medal-winning athletes of the given gender
    pub async fn medalist_count(
        &self,
        country: &str,
        gender: Gender,
    ) -> Result<i64, GoldMedalError> {
        self.fetch_count(aggregates::medalist_count(country, gender))
            .await
    }

    /// Distinct male medalists for the country
    pub async fn men_medalist_count(&self, country: &str) -> Result<i64, GoldMedalError> {
        self.medalist_count(country, Gender::Men).await
    }

    /// Distinct female medalists for the country
    pub async fn women_medalist_count(&self, country: &str) -> Result<i64, GoldMedalError> {
        self.medalist_count(country, Gender::Women).await
    }

    /// The country's most-medaled athlete, or None if it has no medals
    pub async fn most_medaled_athlete(
        &self,
        country: &str,
    ) -> Result<Option<AthleteTally>, GoldMedalError> {
        let query = aggregates::most_medaled_athlete(country);
        debug_log!("executing: {}", query.sql());

        let row = bind_query_as::<AthleteTally>(&query)
            .fetch_optional(&self.pool)
            .await?;
        Ok(row)
    }

    /// The country's best Summer year and its medal count
    pub async fn most_summer_wins(
        &self,
        country: &str,
    ) -> Result<Option<YearTally>, GoldMedalError> {
        self.fetch_year_tally(best::most_summer_wins(country)).await
    }

    /// The country's best Winter year and its medal count
    pub async fn most_winter_wins(
        &self,
        country: &str,
    ) -> Result<Option<YearTally>, GoldMedalError> {
        self.fetch_year_tally(best::most_winter_wins(country)).await
    }

    /// The country's best year across both seasons
    pub async fn best_year(&self, country: &str) -> Result<Option<YearTally>, GoldMedalError> {
        self.fetch_year_tally(best::best_year(country)).await
    }

    /// The discipline the country has won the most medals in
    pub async fn best_discipline(
        &self,
        country: &str,
    ) -> Result<Option<GroupTally>, GoldMedalError> {
        self.fetch_best(best::best_discipline(country), BestGroup::Discipline)
            .await
    }

    /// The sport the country has won the most medals in
    pub async fn best_sport(&self, country: &str) -> Result<Option<GroupTally>, GoldMedalError> {
        self.fetch_best(best::best_sport(country), BestGroup::Sport)
            .await
    }

    /// The event the country has won the most medals in
    pub async fn best_event(&self, country: &str) -> Result<Option<GroupTally>, GoldMedalError> {
        self.fetch_best(best::best_event(country), BestGroup::Event)
            .await
    }

    /// All medal rows for the country, optionally ordered by a GoldMedal
    /// column
    pub async fn ordered_medals(
        &self,
        country: &str,
        field: Option<&str>,
        ascending: bool,
    ) -> Result<Vec<GoldMedal>, GoldMedalError> {
        let query = listing::ordered_medals(country, field, ascending)?;
        debug_log!("executing: {}", query.sql());

        let rows = bind_query_as::<GoldMedal>(&query)
            .fetch_all(&self.pool)
            .await?;
        Ok(rows)
    }

    /// Per-sport medal counts and integer percentages for the country,
    /// optionally ordered by sport, count, or percent
    pub async fn ordered_sports(
        &self,
        country: &str,
        field: Option<&str>,
        ascending: bool,
    ) -> Result<Vec<SportTally>, GoldMedalError> {
        let query = listing::ordered_sports(country, field, ascending)?;
        debug_log!("executing: {}", query.sql());

        let rows = bind_query_as::<SportTally>(&query)
            .fetch_all(&self.pool)
            .await?;
        Ok(rows)
    }

    async fn fetch_count(&self, query: SqlQuery) -> Result<i64, GoldMedalError> {
        debug_log!("executing: {}", query.sql());

        let row = bind_query(&query).fetch_one(&self.pool).await?;
        Ok(row.try_get("count")?)
    }

    async fn fetch_year_tally(
        &self,
        query: SqlQuery,
    ) -> Result<Option<YearTally>, GoldMedalError> {
        debug_log!("executing: {}", query.sql());

        let row = bind_query_as::<YearTally>(&query)
            .fetch_optional(&self.pool)
            .await?;
        Ok(row)
    }

    // The grouped column's name varies per query, so the row is decoded by
    // hand instead of through FromRow
    async fn fetch_best(
        &self,
        query: SqlQuery,
        group: BestGroup,
    ) -> Result<Option<GroupTally>, GoldMedalError> {
        debug_log!("executing: {}", query.sql());

        let row = bind_query(&query).fetch_optional(&self.pool).await?;
        match row {
            Some(row) => Ok(Some(GroupTally {
                value: row.try_get(group.column())?,
                count: row.try_get("count")?,
            })),
            None => Ok(None),
        }
    }
}
