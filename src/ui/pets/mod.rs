//! The pets screen: reactive list, live search, add dialog.

mod dialog;
mod filter;
mod intent;
mod list;
mod reducer;
mod state;

pub use dialog::render_add_dialog;
pub use filter::{effective_query, filter_pets, DEFAULT_SEARCH_TERMS};
pub use intent::PetsIntent;
pub use list::pet_row;
pub use reducer::PetsReducer;
pub use state::{DraftError, DraftField, PetDraft, PetsScreenState};
