//! Pet record store.
//!
//! The store owns the authoritative, insertion-ordered collection of pet
//! records. Consumers read it through [`PetStore::snapshot`] and react to
//! changes through [`PetStore::observe`], which hands back an unsubscribe
//! handle scoped to the observer's lifetime.

mod json;
mod memory;
mod observers;

pub use json::JsonStore;
pub use memory::MemoryStore;
pub use observers::Subscription;

use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::PathBuf;
use thiserror::Error;
use uuid::Uuid;

/// Stable identifier assigned by the store on creation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PetId(Uuid);

impl PetId {
    pub(crate) fn generate() -> Self {
        Self(Uuid::new_v4())
    }
}

impl fmt::Display for PetId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// One pet record as held by the store.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Pet {
    pub id: PetId,
    pub name: String,
    #[serde(rename = "type")]
    pub kind: String,
    pub age: u32,
}

/// A validated record-to-be. The store assigns the id.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewPet {
    pub name: String,
    pub kind: String,
    pub age: u32,
}

/// Callback invoked with the full snapshot after every store change.
///
/// Observers run on the mutating thread and must not call back into the
/// store's subscription surface.
pub type Observer = Box<dyn Fn(&[Pet]) + Send + Sync>;

/// Minimum surface the screen layer needs from a record store.
pub trait PetStore: Send + Sync {
    /// Create a record, assigning its id. Observers see the new snapshot
    /// before this returns.
    fn create(&self, draft: NewPet) -> Result<Pet, StoreError>;

    /// Remove a record by id. Returns the removed record, or `Ok(None)`
    /// when the id is absent; deleting twice is a no-op the second time.
    fn delete(&self, id: &PetId) -> Result<Option<Pet>, StoreError>;

    /// Current collection in insertion order.
    fn snapshot(&self) -> Vec<Pet>;

    /// Register an observer. The callback fires once with the current
    /// snapshot before this returns, then after every change. Dropping the
    /// returned [`Subscription`] releases the observer; no callback runs
    /// after that.
    fn observe(&self, observer: Observer) -> Subscription;
}

/// Errors that can occur while reading or persisting pet data.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("Failed to read pet data '{path}': {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse pet data '{path}': {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("Failed to encode pet data: {source}")]
    Encode {
        #[source]
        source: serde_json::Error,
    },

    #[error("Failed to write pet data '{path}': {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Pet data '{path}' is already in use by another process")]
    Locked { path: PathBuf },
}
