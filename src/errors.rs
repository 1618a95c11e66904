//! Error types for the goldmedal crate
//!
//! This module contains all error types that can be returned by goldmedal operations.

use thiserror::Error;

use crate::config::ConfigError;
use crate::validation::ValidationError;

#[derive(Error, Debug)]
pub enum GoldMedalError {
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),

    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),
}
