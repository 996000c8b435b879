//! JSON-file-backed store.
//!
//! The data file holds one JSON array of pet records. Mutations persist
//! write-ahead: the candidate snapshot goes to disk (temp file + rename)
//! before the in-memory collection is updated, so a failed write leaves
//! both the file and the collection as they were.

use super::observers::ObserverRegistry;
use super::{NewPet, Observer, Pet, PetId, PetStore, StoreError, Subscription};
use fs2::FileExt;
use parking_lot::RwLock;
use std::fs::{self, File, OpenOptions};
use std::path::{Path, PathBuf};
use std::sync::Arc;

pub struct JsonStore {
    path: PathBuf,
    pets: RwLock<Vec<Pet>>,
    observers: Arc<ObserverRegistry>,
    /// Held open for the store's lifetime; the advisory lock lives on a
    /// sidecar file so it survives the temp-file rename of the data file.
    _lock_file: File,
}

impl JsonStore {
    /// Open (or start) the collection at `path`, taking an exclusive lock.
    pub fn open(path: impl Into<PathBuf>) -> Result<Self, StoreError> {
        let path = path.into();
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent).map_err(|source| StoreError::Write {
                    path: parent.to_path_buf(),
                    source,
                })?;
            }
        }

        let lock_path = lock_path_for(&path);
        let lock_file = OpenOptions::new()
            .create(true)
            .write(true)
            .open(&lock_path)
            .map_err(|source| StoreError::Write {
                path: lock_path.clone(),
                source,
            })?;
        lock_file.try_lock_exclusive().map_err(|source| {
            if source.kind() == fs2::lock_contended_error().kind() {
                StoreError::Locked { path: path.clone() }
            } else {
                StoreError::Read {
                    path: lock_path.clone(),
                    source,
                }
            }
        })?;

        let pets = if path.exists() {
            let content = fs::read_to_string(&path).map_err(|source| StoreError::Read {
                path: path.clone(),
                source,
            })?;
            if content.trim().is_empty() {
                Vec::new()
            } else {
                serde_json::from_str(&content).map_err(|source| StoreError::Parse {
                    path: path.clone(),
                    source,
                })?
            }
        } else {
            Vec::new()
        };

        tracing::info!(path = %path.display(), records = pets.len(), "pet store opened");

        Ok(Self {
            path,
            pets: RwLock::new(pets),
            observers: ObserverRegistry::new(),
            _lock_file: lock_file,
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn persist(&self, pets: &[Pet]) -> Result<(), StoreError> {
        let json = serde_json::to_string_pretty(pets)
            .map_err(|source| StoreError::Encode { source })?;
        let tmp = self.path.with_extension("json.tmp");
        fs::write(&tmp, json).map_err(|source| StoreError::Write {
            path: tmp.clone(),
            source,
        })?;
        fs::rename(&tmp, &self.path).map_err(|source| StoreError::Write {
            path: self.path.clone(),
            source,
        })
    }
}

impl PetStore for JsonStore {
    fn create(&self, draft: NewPet) -> Result<Pet, StoreError> {
        let pet = Pet {
            id: PetId::generate(),
            name: draft.name,
            kind: draft.kind,
            age: draft.age,
        };
        let snapshot = {
            let mut pets = self.pets.write();
            let mut candidate = pets.clone();
            candidate.push(pet.clone());
            self.persist(&candidate)?;
            *pets = candidate;
            pets.clone()
        };
        self.observers.notify(&snapshot);
        Ok(pet)
    }

    fn delete(&self, id: &PetId) -> Result<Option<Pet>, StoreError> {
        let (removed, snapshot) = {
            let mut pets = self.pets.write();
            let Some(index) = pets.iter().position(|pet| &pet.id == id) else {
                return Ok(None);
            };
            let mut candidate = pets.clone();
            let removed = candidate.remove(index);
            self.persist(&candidate)?;
            *pets = candidate;
            (removed, pets.clone())
        };
        self.observers.notify(&snapshot);
        Ok(Some(removed))
    }

    fn snapshot(&self) -> Vec<Pet> {
        self.pets.read().clone()
    }

    fn observe(&self, observer: Observer) -> Subscription {
        let current = self.snapshot();
        self.observers.subscribe(observer, &current)
    }
}

fn lock_path_for(path: &Path) -> PathBuf {
    let mut name = path.file_name().map(|n| n.to_os_string()).unwrap_or_default();
    name.push(".lock");
    path.with_file_name(name)
}
