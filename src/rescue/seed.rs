//! Seed dataset loading
//!
//! The catalog is filled once at startup, either from the dataset compiled
//! into the binary or from a JSON file with the same shape.

use super::models::Animal;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Dataset shipped with the server.
const DEFAULT_SEED: &str = include_str!("../../data/animals.json");

/// Failures while reading a seed dataset.
#[derive(Debug, Error)]
pub enum SeedError {
    /// The seed file could not be read.
    #[error("failed to read seed file {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The seed document is not a JSON array of animals.
    #[error("invalid seed data: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Parses a JSON array of animal records.
pub fn parse_animals(json: &str) -> Result<Vec<Animal>, SeedError> {
    Ok(serde_json::from_str(json)?)
}

/// The built-in dataset.
pub fn default_animals() -> Result<Vec<Animal>, SeedError> {
    parse_animals(DEFAULT_SEED)
}

/// Reads a dataset from `path`.
pub async fn load_animals(path: &Path) -> Result<Vec<Animal>, SeedError> {
    let json = tokio::fs::read_to_string(path)
        .await
        .map_err(|source| SeedError::Read {
            path: path.to_path_buf(),
            source,
        })?;
    parse_animals(&json)
}
