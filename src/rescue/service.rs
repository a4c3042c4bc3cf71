//! Rescue Service
//!
//! Caller-facing query and adoption operations layered on the
//! [`CatalogStore`]. Not-found and already-adopted are ordinary outcomes and
//! come back as `None` or `Err` values, never as panics.

use super::error::CatalogResult;
use super::models::{AdoptionCertificate, Animal};
use super::store::CatalogStore;
use log::{debug, info, warn};
use mockable::Clock;
use std::sync::Arc;

/// Pickup location stamped on certificates when none is configured.
pub const DEFAULT_PICKUP_LOCATION: &str = "123 Main St, Anytown, USA";

/// Query and adoption API over a shared catalog.
#[derive(Clone)]
pub struct RescueService {
    store: Arc<CatalogStore>,
    clock: Arc<dyn Clock + Send + Sync>,
    pickup_location: String,
}

impl RescueService {
    /// Creates a service over `store`, stamping certificates with `clock`.
    pub fn new(
        store: Arc<CatalogStore>,
        clock: Arc<dyn Clock + Send + Sync>,
        pickup_location: impl Into<String>,
    ) -> Self {
        Self {
            store,
            clock,
            pickup_location: pickup_location.into(),
        }
    }

    /// Animals still available for adoption, in catalog order.
    pub fn list_animals(&self) -> Vec<Animal> {
        self.store
            .all_animals()
            .into_iter()
            .filter(|animal| !animal.adopted)
            .collect()
    }

    /// Looks an animal up by id, whether or not it has been adopted.
    pub fn get_animal_by_id(&self, id: &str) -> Option<Animal> {
        self.store.find_by_id(id)
    }

    /// Looks an animal up by name, ignoring case. First match wins.
    pub fn get_animal_by_name(&self, name: &str) -> Option<Animal> {
        let found = self.store.find_by_name(name);
        debug!(
            "get_animal_by_name: {} -> {:?}",
            name,
            found.as_ref().map(|animal| animal.id.as_str())
        );
        found
    }

    /// Adopts the animal with `id` and issues a certificate.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::NotFound`] for an unknown id and
    /// [`CatalogError::AlreadyAdopted`] when someone got there first. No
    /// record changes in either case.
    ///
    /// [`CatalogError::NotFound`]: super::error::CatalogError::NotFound
    /// [`CatalogError::AlreadyAdopted`]: super::error::CatalogError::AlreadyAdopted
    pub fn adopt_animal(&self, id: &str) -> CatalogResult<AdoptionCertificate> {
        if let Err(err) = self.store.mark_adopted(id) {
            warn!("Adoption refused: {}", err);
            return Err(err);
        }

        let certificate = AdoptionCertificate {
            animal_id: id.to_owned(),
            timestamp: self.clock.utc(),
            pickup_location: self.pickup_location.clone(),
        };
        info!(
            "Adopted {} at {}, pickup at {}",
            certificate.animal_id, certificate.timestamp, certificate.pickup_location
        );

        Ok(certificate)
    }
}
