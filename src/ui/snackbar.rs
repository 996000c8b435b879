//! One-shot advisory messages, shown briefly near the bottom of the screen.
//!
//! The app queues drained view-model notices and shows them one at a time;
//! a message is displayed exactly once and expires after a fixed number of
//! ticks.

use ratatui::layout::Rect;
use ratatui::style::Style;
use ratatui::text::Line;
use ratatui::widgets::{Block, Borders, Clear, Paragraph};
use ratatui::Frame;

use crate::ui::mvi::{Intent, Reducer, UiState};
use crate::ui::theme::{HEADER_TEXT, POPUP_BORDER};

#[derive(Debug, Clone, PartialEq, Default)]
pub enum SnackbarState {
    #[default]
    Hidden,
    Visible {
        message: String,
        remaining_ticks: u16,
    },
}

impl UiState for SnackbarState {}

impl SnackbarState {
    pub fn is_visible(&self) -> bool {
        !matches!(self, Self::Hidden)
    }

    pub fn message(&self) -> Option<&str> {
        match self {
            Self::Visible { message, .. } => Some(message),
            Self::Hidden => None,
        }
    }
}

#[derive(Debug, Clone)]
pub enum SnackbarIntent {
    Show { message: String, ticks: u16 },
    Tick,
    Dismiss,
}

impl Intent for SnackbarIntent {}

pub struct SnackbarReducer;

impl Reducer for SnackbarReducer {
    type State = SnackbarState;
    type Intent = SnackbarIntent;

    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State {
        match intent {
            SnackbarIntent::Show { message, ticks } => SnackbarState::Visible {
                message,
                remaining_ticks: ticks.max(1),
            },
            SnackbarIntent::Tick => match state {
                SnackbarState::Visible {
                    message,
                    remaining_ticks,
                } if remaining_ticks > 1 => SnackbarState::Visible {
                    message,
                    remaining_ticks: remaining_ticks - 1,
                },
                _ => SnackbarState::Hidden,
            },
            SnackbarIntent::Dismiss => SnackbarState::Hidden,
        }
    }
}

/// Render the snackbar overlay just above the footer.
pub fn render_snackbar(frame: &mut Frame, state: &SnackbarState) {
    let Some(message) = state.message() else {
        return;
    };

    let area = frame.area();
    let width = (message.chars().count() as u16 + 4).min(area.width);
    if width == 0 || area.height < 4 {
        return;
    }
    let rect = Rect {
        x: area.x + (area.width - width) / 2,
        y: area.y + area.height.saturating_sub(4),
        width,
        height: 3,
    };

    frame.render_widget(Clear, rect);
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(POPUP_BORDER));
    let paragraph = Paragraph::new(Line::styled(
        format!(" {message} "),
        Style::default().fg(HEADER_TEXT),
    ))
    .block(block);
    frame.render_widget(paragraph, rect);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hidden_is_default() {
        assert_eq!(SnackbarState::default(), SnackbarState::Hidden);
    }

    #[test]
    fn show_replaces_current_message() {
        let state = SnackbarReducer::reduce(
            SnackbarState::Visible {
                message: "old".into(),
                remaining_ticks: 5,
            },
            SnackbarIntent::Show {
                message: "new".into(),
                ticks: 8,
            },
        );
        assert_eq!(state.message(), Some("new"));
    }

    #[test]
    fn tick_counts_down_then_hides() {
        let mut state = SnackbarState::Visible {
            message: "bye".into(),
            remaining_ticks: 2,
        };
        state = SnackbarReducer::reduce(state, SnackbarIntent::Tick);
        assert!(state.is_visible());
        state = SnackbarReducer::reduce(state, SnackbarIntent::Tick);
        assert!(!state.is_visible());
    }

    #[test]
    fn tick_on_hidden_stays_hidden() {
        let state = SnackbarReducer::reduce(SnackbarState::Hidden, SnackbarIntent::Tick);
        assert!(!state.is_visible());
    }

    #[test]
    fn show_with_zero_ticks_still_displays_once() {
        let state = SnackbarReducer::reduce(
            SnackbarState::Hidden,
            SnackbarIntent::Show {
                message: "blink".into(),
                ticks: 0,
            },
        );
        assert!(state.is_visible());
    }

    #[test]
    fn dismiss_hides() {
        let state = SnackbarReducer::reduce(
            SnackbarState::Visible {
                message: "x".into(),
                remaining_ticks: 9,
            },
            SnackbarIntent::Dismiss,
        );
        assert!(!state.is_visible());
    }
}
