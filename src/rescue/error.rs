//! Error types for catalog lookups and adoption.

use thiserror::Error;

/// Business-state failures reported by the catalog.
///
/// None of these are fatal: the store stays usable after any of them.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum CatalogError {
    /// No animal carries the requested identifier.
    #[error("no animal found with id '{0}'")]
    NotFound(String),

    /// The animal has already been adopted.
    #[error("animal '{0}' has already been adopted")]
    AlreadyAdopted(String),

    /// The seed dataset lists the same identifier twice.
    #[error("duplicate animal id '{0}' in seed dataset")]
    DuplicateId(String),
}

/// Result type for catalog operations.
pub type CatalogResult<T> = Result<T, CatalogError>;
