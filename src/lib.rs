//! # goldmedal
//!
//! SQL query construction and a typed PostgreSQL store for Olympic
//! gold-medal analytics.
//!
//! The crate has two layers:
//!
//! - [`schema`] and [`query`] are pure: each function turns primitive inputs
//!   (a country, an optional sort field, a direction) into a [`SqlQuery`] —
//!   SQL text with `$n` placeholders plus its positional bind values. No
//!   I/O, no state; equal inputs always produce equal output.
//! - [`store::MedalStore`] executes those queries against PostgreSQL and
//!   decodes the rows into the typed results in [`models`].
//!
//! Caller-supplied *values* (the country name) always travel as bind
//! parameters. Caller-supplied *identifiers* (ORDER BY fields) are checked
//! against the closed allow-lists in [`validation`] and rejected otherwise.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use goldmedal::{DatabaseConfig, MedalStore};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), goldmedal::GoldMedalError> {
//!     let config = DatabaseConfig::new(
//!         "localhost".to_string(), 5432, "olympics".to_string(),
//!         "postgres".to_string(), "password".to_string(),
//!         1, 5, 30, 600, 3600,
//!     );
//!
//!     let store = MedalStore::connect(&config).await?;
//!     store.ensure_schema().await?;
//!
//!     let total = store.gold_medal_count("USA").await?;
//!     println!("USA gold medals: {}", total);
//!
//!     if let Some(best) = store.best_sport("USA").await? {
//!         println!("Best sport: {} ({} medals)", best.value, best.count);
//!     }
//!
//!     for row in store.ordered_sports("USA", Some("count"), false).await? {
//!         println!("{}: {} ({}%)", row.sport, row.count, row.percent);
//!     }
//!
//!     Ok(())
//! }
//! ```

/// Conditional debug logging macros
/// These macros only compile in code when the `debug-logging` feature is enabled
#[cfg(feature = "debug-logging")]
#[macro_export]
macro_rules! debug_log {
    ($($arg:tt)*) => {
        tracing::debug!($($arg)*)
    };
}

#[cfg(not(feature = "debug-logging"))]
#[macro_export]
macro_rules! debug_log {
    ($($arg:tt)*) => {};
}

#[cfg(feature = "debug-logging")]
#[macro_export]
macro_rules! trace_log {
    ($($arg:tt)*) => {
        tracing::trace!($($arg)*)
    };
}

#[cfg(not(feature = "debug-logging"))]
#[macro_export]
macro_rules! trace_log {
    ($($arg:tt)*) => {};
}

pub mod config;
pub mod errors;
pub mod models;
pub mod prelude;
pub mod query;
pub mod schema;
pub mod store;
pub mod validation;

// Re-export the main public types for convenience
pub use config::{AppConfig, ConfigError, DatabaseConfig};
pub use errors::GoldMedalError;
pub use models::{Country, Gender, GoldMedal, Season};
pub use query::{SortOrder, SqlQuery};
pub use store::MedalStore;
pub use validation::{MedalField, SportField, ValidationError};

// Re-export external dependencies used in the public API
pub use sqlx;

pub type DbPool = sqlx::PgPool;
