//! Catalog Store
//!
//! Holds the authoritative in-memory list of animals for the lifetime of the
//! process. Records keep their seed order. The `adopted` flag is the only
//! field that ever changes, and it only goes from `false` to `true`.

use super::error::{CatalogError, CatalogResult};
use super::models::Animal;
use std::{
    collections::HashMap,
    sync::{PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard},
};

/// In-memory animal catalog shared by every request.
///
/// Reads take the shared lock; adoption takes the exclusive lock so the
/// check-then-set in [`CatalogStore::mark_adopted`] is indivisible.
#[derive(Debug)]
pub struct CatalogStore {
    animals: RwLock<Vec<Animal>>,

    /// Position of each id in `animals`. Built once; ids never change.
    index: HashMap<String, usize>,
}

impl CatalogStore {
    /// Builds the store from a seed dataset.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::DuplicateId`] if two records share an id.
    pub fn new(animals: Vec<Animal>) -> CatalogResult<Self> {
        let mut index = HashMap::with_capacity(animals.len());
        for (position, animal) in animals.iter().enumerate() {
            if index.insert(animal.id.clone(), position).is_some() {
                return Err(CatalogError::DuplicateId(animal.id.clone()));
            }
        }

        Ok(Self {
            animals: RwLock::new(animals),
            index,
        })
    }

    /// Every animal in seed order, adopted ones included.
    pub fn all_animals(&self) -> Vec<Animal> {
        self.read().clone()
    }

    /// Looks an animal up by its exact id.
    pub fn find_by_id(&self, id: &str) -> Option<Animal> {
        let position = *self.index.get(id)?;
        self.read().get(position).cloned()
    }

    /// Looks an animal up by name, ignoring case.
    ///
    /// Names are not unique. When several animals share a name the first one
    /// in catalog order wins.
    pub fn find_by_name(&self, name: &str) -> Option<Animal> {
        let wanted = name.to_lowercase();
        self.read()
            .iter()
            .find(|animal| animal.name.to_lowercase() == wanted)
            .cloned()
    }

    /// Flips the animal's `adopted` flag from `false` to `true`.
    ///
    /// This is the single write path for `adopted`; only the rescue service
    /// calls it.
    ///
    /// # Errors
    ///
    /// * [`CatalogError::NotFound`] if no animal has this id.
    /// * [`CatalogError::AlreadyAdopted`] if the flag is already set.
    pub(super) fn mark_adopted(&self, id: &str) -> CatalogResult<()> {
        let position = *self
            .index
            .get(id)
            .ok_or_else(|| CatalogError::NotFound(id.to_owned()))?;

        let mut animals = self.write();
        let animal = animals
            .get_mut(position)
            .ok_or_else(|| CatalogError::NotFound(id.to_owned()))?;

        if animal.adopted {
            return Err(CatalogError::AlreadyAdopted(id.to_owned()));
        }
        animal.adopted = true;
        Ok(())
    }

    // A poisoned lock cannot leave a record half-written: the only mutation
    // is a single boolean store.
    fn read(&self) -> RwLockReadGuard<'_, Vec<Animal>> {
        self.animals.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write(&self) -> RwLockWriteGuard<'_, Vec<Animal>> {
        self.animals.write().unwrap_or_else(PoisonError::into_inner)
    }
}
