//! In-memory store, used with `--in-memory` and throughout the tests.

use super::observers::ObserverRegistry;
use super::{NewPet, Observer, Pet, PetId, PetStore, StoreError, Subscription};
use parking_lot::RwLock;
use std::sync::Arc;

pub struct MemoryStore {
    pets: RwLock<Vec<Pet>>,
    observers: Arc<ObserverRegistry>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self {
            pets: RwLock::new(Vec::new()),
            observers: ObserverRegistry::new(),
        }
    }

    /// Pre-populated store. Ids are assigned here, as on `create`.
    pub fn with_pets(drafts: impl IntoIterator<Item = NewPet>) -> Self {
        let pets = drafts
            .into_iter()
            .map(|draft| Pet {
                id: PetId::generate(),
                name: draft.name,
                kind: draft.kind,
                age: draft.age,
            })
            .collect();
        Self {
            pets: RwLock::new(pets),
            observers: ObserverRegistry::new(),
        }
    }

    fn emit(&self) {
        let snapshot = self.pets.read().clone();
        self.observers.notify(&snapshot);
    }
}

impl Default for MemoryStore {
    fn default() -> Self {
        Self::new()
    }
}

impl PetStore for MemoryStore {
    fn create(&self, draft: NewPet) -> Result<Pet, StoreError> {
        let pet = Pet {
            id: PetId::generate(),
            name: draft.name,
            kind: draft.kind,
            age: draft.age,
        };
        self.pets.write().push(pet.clone());
        self.emit();
        Ok(pet)
    }

    fn delete(&self, id: &PetId) -> Result<Option<Pet>, StoreError> {
        let removed = {
            let mut pets = self.pets.write();
            pets.iter()
                .position(|pet| &pet.id == id)
                .map(|index| pets.remove(index))
        };
        if removed.is_some() {
            self.emit();
        }
        Ok(removed)
    }

    fn snapshot(&self) -> Vec<Pet> {
        self.pets.read().clone()
    }

    fn observe(&self, observer: Observer) -> Subscription {
        let current = self.snapshot();
        self.observers.subscribe(observer, &current)
    }
}
