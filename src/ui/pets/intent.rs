use crate::ui::mvi::Intent;

#[derive(Debug, Clone)]
pub enum PetsIntent {
    /// Printable character typed into the search box.
    SearchInput(char),
    SearchBackspace,
    ClearSearch,
    SelectUp,
    SelectDown { displayed: usize },
    /// Keep the selection inside the currently displayed list.
    ClampSelection { displayed: usize },
    /// Opening does not clear the draft; a cancelled draft survives.
    OpenDialog,
    CloseDialog,
    FocusNext,
    FocusPrev,
    /// Printable character typed into the focused draft field.
    DraftInput(char),
    DraftBackspace,
    /// The validated draft was handed to the store: clear it and close.
    SubmitAccepted,
}

impl Intent for PetsIntent {}
