//! DDL for the medal schema
//!
//! Table definitions are fixed text: the query builders in [`crate::query`]
//! assume exactly these table and column names. Both names are emitted
//! unquoted, so PostgreSQL identifier folding applies the same way to the
//! DDL and to every query built against it.

pub const COUNTRY_TABLE: &str = "Country";
pub const GOLD_MEDAL_TABLE: &str = "GoldMedal";

/// DDL creating the Country table
pub fn create_country_table() -> &'static str {
    "CREATE TABLE Country (\n    \
         name TEXT NOT NULL,\n    \
         code TEXT NOT NULL,\n    \
         gdp INTEGER,\n    \
         population INTEGER\n\
     )"
}

/// DDL creating the GoldMedal table, one row per medal awarded
pub fn create_gold_medal_table() -> &'static str {
    "CREATE TABLE GoldMedal (\n    \
         id INTEGER PRIMARY KEY,\n    \
         year INTEGER NOT NULL,\n    \
         city TEXT NOT NULL,\n    \
         season TEXT NOT NULL,\n    \
         name TEXT NOT NULL,\n    \
         country TEXT NOT NULL,\n    \
         gender TEXT NOT NULL,\n    \
         sport TEXT NOT NULL,\n    \
         discipline TEXT NOT NULL,\n    \
         event TEXT NOT NULL\n\
     )"
}

/// DDL dropping the Country table
pub fn drop_country_table() -> String {
    format!("DROP TABLE IF EXISTS {}", COUNTRY_TABLE)
}

/// DDL dropping the GoldMedal table
pub fn drop_gold_medal_table() -> String {
    format!("DROP TABLE IF EXISTS {}", GOLD_MEDAL_TABLE)
}
