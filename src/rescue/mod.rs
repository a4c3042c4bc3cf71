//! Animal Rescue Domain Module
//!
//! This module contains the animal catalog and the adoption logic:
//! - Domain models (Animal, AdoptionCertificate)
//! - The catalog store that owns the records
//! - The rescue service callers talk to
//! - Seed dataset loading

pub mod error;
pub mod models;
pub mod seed;
pub mod service;
pub mod store;

// Re-export commonly used types for convenience
pub use error::{CatalogError, CatalogResult};
pub use models::{AdoptionCertificate, Animal};
pub use service::RescueService;
pub use store::CatalogStore;

#[cfg(test)]
pub(crate) mod fixtures {
    use super::models::{Animal, EnergyLevel, Gender, Size};
    use chrono::NaiveDate;

    /// A plain available animal with the given id and name.
    pub fn animal(id: &str, name: &str) -> Animal {
        Animal {
            id: id.to_owned(),
            name: name.to_owned(),
            species: "dog".to_owned(),
            breed: "Mixed".to_owned(),
            age: 3,
            gender: Gender::Male,
            size: Size::Medium,
            color: "brown".to_owned(),
            description: "Test animal".to_owned(),
            vaccinated: true,
            spayed_neutered: true,
            good_with_kids: true,
            good_with_pets: true,
            energy_level: EnergyLevel::Medium,
            adoption_fee: 200,
            date_arrived: NaiveDate::from_ymd_opt(2024, 1, 1).expect("valid date"),
            adopted: false,
        }
    }
}
