//! View-model between the pet store and the screen.
//!
//! Holds no record state of its own: reads pass through to the store, and
//! mutations delegate to it. Failures become advisory notices on a
//! single-consumer stream the screen drains once per emission.

use crate::store::{NewPet, Observer, Pet, PetId, PetStore, Subscription};
use std::sync::mpsc::{channel, Receiver, Sender};
use std::sync::Arc;

pub struct PetViewModel {
    store: Arc<dyn PetStore>,
    notice_tx: Sender<String>,
    notice_rx: Receiver<String>,
}

impl PetViewModel {
    pub fn new(store: Arc<dyn PetStore>) -> Self {
        let (notice_tx, notice_rx) = channel();
        Self {
            store,
            notice_tx,
            notice_rx,
        }
    }

    /// Current store snapshot, insertion order.
    pub fn pets(&self) -> Vec<Pet> {
        self.store.snapshot()
    }

    /// Pass-through to the store's observer registration.
    pub fn observe(&self, observer: Observer) -> Subscription {
        self.store.observe(observer)
    }

    /// Create a record. Callers observe the outcome only through the
    /// record stream and, on failure, the notice stream.
    pub fn add_pet(&self, draft: NewPet) {
        match self.store.create(draft) {
            Ok(pet) => {
                tracing::debug!(name = %pet.name, id = %pet.id, "pet created");
            }
            Err(err) => {
                tracing::warn!(error = %err, "pet create failed");
                self.push_notice(format!("Could not add pet: {err}"));
            }
        }
    }

    /// Delete by id. An absent id is a no-op; an actual removal produces
    /// a "Removed <name>" notice.
    pub fn delete_pet(&self, id: &PetId) {
        match self.store.delete(id) {
            Ok(Some(pet)) => {
                tracing::debug!(name = %pet.name, id = %pet.id, "pet removed");
                self.push_notice(format!("Removed {}", pet.name));
            }
            Ok(None) => {
                tracing::debug!(%id, "delete of unknown pet id ignored");
            }
            Err(err) => {
                tracing::warn!(error = %err, "pet delete failed");
                self.push_notice(format!("Could not remove pet: {err}"));
            }
        }
    }

    /// Drain pending notices. Each message is returned exactly once.
    pub fn drain_notices(&self) -> Vec<String> {
        self.notice_rx.try_iter().collect()
    }

    fn push_notice(&self, message: String) {
        let _ = self.notice_tx.send(message);
    }
}
