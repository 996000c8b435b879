use crate::ui::mvi::Reducer;
use crate::ui::pets::intent::PetsIntent;
use crate::ui::pets::state::{DraftField, PetDraft, PetsScreenState};

pub struct PetsReducer;

impl Reducer for PetsReducer {
    type State = PetsScreenState;
    type Intent = PetsIntent;

    fn reduce(mut state: Self::State, intent: Self::Intent) -> Self::State {
        match intent {
            PetsIntent::SearchInput(ch) => {
                if !state.dialog_open {
                    state.search.push(ch);
                    state.selected = 0;
                }
                state
            }
            PetsIntent::SearchBackspace => {
                if !state.dialog_open {
                    state.search.pop();
                    state.selected = 0;
                }
                state
            }
            PetsIntent::ClearSearch => {
                state.search.clear();
                state.selected = 0;
                state
            }
            PetsIntent::SelectUp => {
                state.selected = state.selected.saturating_sub(1);
                state
            }
            PetsIntent::SelectDown { displayed } => {
                state.selected = (state.selected + 1).min(displayed.saturating_sub(1));
                state
            }
            PetsIntent::ClampSelection { displayed } => {
                state.selected = state.selected.min(displayed.saturating_sub(1));
                state
            }
            PetsIntent::OpenDialog => {
                state.dialog_open = true;
                state.focused = DraftField::Name;
                state
            }
            PetsIntent::CloseDialog => {
                state.dialog_open = false;
                state
            }
            PetsIntent::FocusNext => {
                if state.dialog_open {
                    state.focused = state.focused.next();
                }
                state
            }
            PetsIntent::FocusPrev => {
                if state.dialog_open {
                    state.focused = state.focused.prev();
                }
                state
            }
            PetsIntent::DraftInput(ch) => {
                if state.dialog_open {
                    state.draft.field_mut(state.focused).push(ch);
                }
                state
            }
            PetsIntent::DraftBackspace => {
                if state.dialog_open {
                    state.draft.field_mut(state.focused).pop();
                }
                state
            }
            PetsIntent::SubmitAccepted => {
                state.draft = PetDraft::default();
                state.focused = DraftField::Name;
                state.dialog_open = false;
                state
            }
        }
    }
}
