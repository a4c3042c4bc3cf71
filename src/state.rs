//! Application State
//!
//! The state shared by every request handler: one rescue service over one
//! catalog for the whole process.

use crate::rescue::{
    seed::{self, SeedError},
    service::DEFAULT_PICKUP_LOCATION,
    Animal, CatalogError, CatalogStore, RescueService,
};
use mockable::DefaultClock;
use std::sync::Arc;
use thiserror::Error;

/// Shared application state that can be safely passed between threads
pub type SharedState = Arc<AppState>;

/// Failures while building the application state.
#[derive(Debug, Error)]
pub enum StateError {
    #[error(transparent)]
    Seed(#[from] SeedError),
    #[error(transparent)]
    Catalog(#[from] CatalogError),
}

/// Core application state
pub struct AppState {
    /// Catalog queries and adoption
    pub rescue: RescueService,
}

impl AppState {
    /// Wraps an already-built service.
    pub fn new(rescue: RescueService) -> Self {
        Self { rescue }
    }

    /// Builds a catalog from `animals` backed by the system clock.
    pub fn from_animals(
        animals: Vec<Animal>,
        pickup_location: impl Into<String>,
    ) -> Result<Self, CatalogError> {
        let store = CatalogStore::new(animals)?;
        log::info!("Catalog loaded with {} animal(s)", store.all_animals().len());

        Ok(Self::new(RescueService::new(
            Arc::new(store),
            Arc::new(DefaultClock),
            pickup_location,
        )))
    }

    /// Builds a catalog from the built-in seed dataset.
    pub fn with_default_catalog() -> Result<Self, StateError> {
        let animals = seed::default_animals()?;
        Ok(Self::from_animals(animals, DEFAULT_PICKUP_LOCATION)?)
    }
}
