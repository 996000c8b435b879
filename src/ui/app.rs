use std::collections::VecDeque;

use crate::store::{Pet, Subscription};
use crate::ui::mvi::Reducer;
use crate::ui::pets::{filter_pets, PetsIntent, PetsReducer, PetsScreenState};
use crate::ui::snackbar::{SnackbarIntent, SnackbarReducer, SnackbarState};
use crate::viewmodel::PetViewModel;

/// Generic MVI dispatch: takes current state, runs reducer, stores result.
macro_rules! dispatch_mvi {
    ($self:expr, $field:ident, $reducer:ty, $intent:expr) => {
        $self.$field = <$reducer>::reduce(std::mem::take(&mut $self.$field), $intent);
    };
}

pub struct App {
    should_quit: bool,
    viewmodel: PetViewModel,
    /// Read-through cache of the latest store snapshot.
    pets: Vec<Pet>,
    /// Screen state (MVI pattern).
    screen: PetsScreenState,
    /// Snackbar state (MVI pattern).
    snackbar: SnackbarState,
    snackbar_ticks: u16,
    /// Notices waiting for the snackbar to become free.
    pending_notices: VecDeque<String>,
    /// Store subscription held for the screen's lifetime (resource,
    /// managed outside MVI). Dropped with the app, releasing the observer.
    subscription: Option<Subscription>,
}

impl App {
    pub fn new(viewmodel: PetViewModel, snackbar_ticks: u16) -> Self {
        let pets = viewmodel.pets();
        Self {
            should_quit: false,
            viewmodel,
            pets,
            screen: PetsScreenState::default(),
            snackbar: SnackbarState::default(),
            snackbar_ticks,
            pending_notices: VecDeque::new(),
            subscription: None,
        }
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    pub fn request_quit(&mut self) {
        self.should_quit = true;
    }

    pub fn screen(&self) -> &PetsScreenState {
        &self.screen
    }

    pub fn snackbar(&self) -> &SnackbarState {
        &self.snackbar
    }

    pub fn pets(&self) -> &[Pet] {
        &self.pets
    }

    pub fn dialog_open(&self) -> bool {
        self.screen.dialog_open
    }

    /// Rows currently displayed for the active search.
    pub fn displayed(&self) -> Vec<&Pet> {
        filter_pets(&self.pets, &self.screen.search)
    }

    /// Register the store observer that wakes the event loop. The
    /// subscription lives as long as the app; dropping the app releases it.
    pub fn attach_subscription(&mut self, subscription: Subscription) {
        self.subscription = Some(subscription);
    }

    /// Re-read the snapshot after a store change and keep the selection
    /// inside the displayed list.
    pub fn refresh_pets(&mut self) {
        self.pets = self.viewmodel.pets();
        let displayed = self.displayed().len();
        self.dispatch_pets(PetsIntent::ClampSelection { displayed });
    }

    pub fn on_tick(&mut self) {
        for notice in self.viewmodel.drain_notices() {
            self.pending_notices.push_back(notice);
        }
        self.dispatch_snackbar(SnackbarIntent::Tick);
        if !self.snackbar.is_visible() {
            if let Some(message) = self.pending_notices.pop_front() {
                let ticks = self.snackbar_ticks;
                self.dispatch_snackbar(SnackbarIntent::Show { message, ticks });
            }
        }
    }

    pub fn select_up(&mut self) {
        self.dispatch_pets(PetsIntent::SelectUp);
    }

    pub fn select_down(&mut self) {
        let displayed = self.displayed().len();
        self.dispatch_pets(PetsIntent::SelectDown { displayed });
    }

    /// Validate the draft and hand it to the store. An invalid draft keeps
    /// the dialog open and surfaces the reason instead of being dropped.
    pub fn submit_draft(&mut self) {
        match self.screen.draft.validate() {
            Ok(new_pet) => {
                self.viewmodel.add_pet(new_pet);
                self.dispatch_pets(PetsIntent::SubmitAccepted);
            }
            Err(err) => {
                self.pending_notices.push_back(err.user_message().to_string());
            }
        }
    }

    /// Delete the selected row, if any. The new snapshot arrives back
    /// through the store subscription.
    pub fn remove_selected(&mut self) {
        let Some(pet_id) = self
            .displayed()
            .get(self.screen.selected)
            .map(|pet| pet.id)
        else {
            return;
        };
        self.viewmodel.delete_pet(&pet_id);
    }

    pub fn dispatch_pets(&mut self, intent: PetsIntent) {
        dispatch_mvi!(self, screen, PetsReducer, intent);
    }

    fn dispatch_snackbar(&mut self, intent: SnackbarIntent) {
        dispatch_mvi!(self, snackbar, SnackbarReducer, intent);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::{MemoryStore, NewPet, PetStore};
    use std::sync::Arc;

    fn draft(name: &str, kind: &str, age: u32) -> NewPet {
        NewPet {
            name: name.to_string(),
            kind: kind.to_string(),
            age,
        }
    }

    fn make_app(drafts: Vec<NewPet>) -> (App, Arc<MemoryStore>) {
        let store = Arc::new(MemoryStore::with_pets(drafts));
        let viewmodel = PetViewModel::new(Arc::clone(&store) as Arc<dyn PetStore>);
        let mut app = App::new(viewmodel, 4);
        app.refresh_pets();
        (app, store)
    }

    // -- submit flow -------------------------------------------------------

    #[test]
    fn valid_submit_creates_record_and_closes_dialog() {
        let (mut app, store) = make_app(vec![]);
        app.dispatch_pets(PetsIntent::OpenDialog);
        for ch in "Rex".chars() {
            app.dispatch_pets(PetsIntent::DraftInput(ch));
        }
        app.dispatch_pets(PetsIntent::FocusNext);
        for ch in "Dog".chars() {
            app.dispatch_pets(PetsIntent::DraftInput(ch));
        }
        app.dispatch_pets(PetsIntent::FocusNext);
        app.dispatch_pets(PetsIntent::DraftInput('3'));

        app.submit_draft();

        let snapshot = store.snapshot();
        assert_eq!(snapshot.len(), 1);
        assert_eq!(snapshot[0].name, "Rex");
        assert!(!app.dialog_open());
        assert!(app.screen().draft.name.is_empty());
    }

    #[test]
    fn invalid_submit_keeps_dialog_open_and_queues_notice() {
        let (mut app, store) = make_app(vec![]);
        app.dispatch_pets(PetsIntent::OpenDialog);
        app.submit_draft();

        assert!(store.snapshot().is_empty());
        assert!(app.dialog_open());
        app.on_tick();
        assert_eq!(app.snackbar().message(), Some("Name is required"));
    }

    // -- remove flow -------------------------------------------------------

    #[test]
    fn remove_selected_deletes_displayed_row() {
        let (mut app, store) = make_app(vec![draft("Hotdog", "Dog", 4)]);
        // Empty search matches "dog cat" literally, so search for the row.
        for ch in "hot".chars() {
            app.dispatch_pets(PetsIntent::SearchInput(ch));
        }
        assert_eq!(app.displayed().len(), 1);

        app.remove_selected();
        app.refresh_pets();

        assert!(store.snapshot().is_empty());
        assert_eq!(app.displayed().len(), 0);
    }

    #[test]
    fn remove_with_no_displayed_rows_is_noop() {
        let (mut app, store) = make_app(vec![draft("Fido", "Dog", 2)]);
        // Empty search, "dog cat" matches nothing: nothing displayed.
        assert!(app.displayed().is_empty());
        app.remove_selected();
        assert_eq!(store.snapshot().len(), 1);
    }

    // -- snackbar queue ----------------------------------------------------

    #[test]
    fn notices_display_one_at_a_time() {
        let (mut app, _store) = make_app(vec![draft("Catrick", "Cat", 1)]);
        for ch in "catr".chars() {
            app.dispatch_pets(PetsIntent::SearchInput(ch));
        }
        app.remove_selected();
        app.refresh_pets();

        app.on_tick();
        assert_eq!(app.snackbar().message(), Some("Removed Catrick"));
    }

    #[test]
    fn snapshot_refresh_clamps_selection() {
        let (mut app, _store) = make_app(vec![
            draft("Catalina", "Cat", 2),
            draft("Catrick", "Cat", 1),
        ]);
        for ch in "cat".chars() {
            app.dispatch_pets(PetsIntent::SearchInput(ch));
        }
        app.select_down();
        assert_eq!(app.screen().selected, 1);

        app.remove_selected();
        app.refresh_pets();
        assert_eq!(app.screen().selected, 0);
    }
}
