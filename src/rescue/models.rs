//! Animal Rescue Domain Models
//!
//! This module contains the records held by the catalog and the receipt
//! handed out when an adoption succeeds.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

// =============================================================================
// Attribute Enums
// =============================================================================

/// Sex of an animal
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Gender {
    Male,
    Female,
}

/// Body size bucket
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Size {
    Small,
    Medium,
    Large,
}

/// How much exercise and attention the animal needs
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum EnergyLevel {
    Low,
    Medium,
    High,
}

// =============================================================================
// Catalog Records
// =============================================================================

/// A single rescue animal.
///
/// `id` is assigned when the seed dataset is loaded and never changes. The
/// only mutable field is `adopted`, and only [`CatalogStore::mark_adopted`]
/// writes it.
///
/// [`CatalogStore::mark_adopted`]: super::store::CatalogStore::mark_adopted
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Animal {
    pub id: String,
    pub name: String,
    pub species: String,
    pub breed: String,
    /// Age in whole years
    pub age: u32,
    pub gender: Gender,
    pub size: Size,
    pub color: String,
    pub description: String,
    pub vaccinated: bool,
    pub spayed_neutered: bool,
    pub good_with_kids: bool,
    pub good_with_pets: bool,
    pub energy_level: EnergyLevel,
    /// Fee in whole dollars
    pub adoption_fee: u32,
    pub date_arrived: NaiveDate,

    /// Set once when the animal is adopted
    #[serde(default)]
    pub adopted: bool,
}

/// Proof of a completed adoption, returned to the caller and not retained.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct AdoptionCertificate {
    /// Identifier of the animal adopted in this call
    pub animal_id: String,

    /// Instant the adoption went through
    pub timestamp: DateTime<Utc>,

    /// Where the new owner collects the animal
    pub pickup_location: String,
}
