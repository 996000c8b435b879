use crate::ui::app::App;
use crate::ui::pets::PetsIntent;
use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

pub fn handle_key(app: &mut App, key: KeyEvent) {
    if key.kind != KeyEventKind::Press {
        return;
    }

    if is_ctrl_char(key, 'q') {
        app.request_quit();
        return;
    }

    if app.dialog_open() {
        handle_dialog_key(app, key);
    } else {
        handle_list_key(app, key);
    }
}

fn handle_dialog_key(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Esc => app.dispatch_pets(PetsIntent::CloseDialog),
        KeyCode::Enter => app.submit_draft(),
        KeyCode::Tab | KeyCode::Down => app.dispatch_pets(PetsIntent::FocusNext),
        KeyCode::BackTab | KeyCode::Up => app.dispatch_pets(PetsIntent::FocusPrev),
        KeyCode::Backspace => app.dispatch_pets(PetsIntent::DraftBackspace),
        KeyCode::Char(ch) if !key.modifiers.contains(KeyModifiers::CONTROL) => {
            app.dispatch_pets(PetsIntent::DraftInput(ch));
        }
        _ => {}
    }
}

fn handle_list_key(app: &mut App, key: KeyEvent) {
    if is_ctrl_char(key, 'n') {
        app.dispatch_pets(PetsIntent::OpenDialog);
        return;
    }
    if is_ctrl_char(key, 'u') {
        app.dispatch_pets(PetsIntent::ClearSearch);
        return;
    }
    match key.code {
        KeyCode::Up => app.select_up(),
        KeyCode::Down => app.select_down(),
        KeyCode::Delete => app.remove_selected(),
        KeyCode::Backspace => app.dispatch_pets(PetsIntent::SearchBackspace),
        KeyCode::Esc => {
            // Esc clears an active search; a second Esc quits.
            if app.screen().search.is_empty() {
                app.request_quit();
            } else {
                app.dispatch_pets(PetsIntent::ClearSearch);
            }
        }
        KeyCode::Char(ch) if !key.modifiers.contains(KeyModifiers::CONTROL) => {
            app.dispatch_pets(PetsIntent::SearchInput(ch));
        }
        _ => {}
    }
}

fn is_ctrl_char(key: KeyEvent, needle: char) -> bool {
    matches!(key.code, KeyCode::Char(ch) if ch.eq_ignore_ascii_case(&needle))
        && key.modifiers.contains(KeyModifiers::CONTROL)
}
