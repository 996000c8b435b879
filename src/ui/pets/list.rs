//! Row rendering for one pet record.

use crate::store::Pet;
use crate::ui::theme::{ACTIVE_HIGHLIGHT, HEADER_TEXT, LIST_SECONDARY};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};

/// Render one pet as a list row. Pure presentation: no state, no
/// validation; removal is handled by the caller via the selection.
pub fn pet_row(pet: &Pet, selected: bool) -> Line<'static> {
    let marker = if selected { "▸ " } else { "  " };
    let line = Line::from(vec![
        Span::styled(marker.to_string(), Style::default().fg(HEADER_TEXT)),
        Span::styled(
            format!("{:<24}", pet.name),
            Style::default().fg(HEADER_TEXT),
        ),
        Span::styled(
            format!("{:<14}", pet.kind),
            Style::default().fg(LIST_SECONDARY),
        ),
        Span::styled(
            format!("{:>3} yr", pet.age),
            Style::default().fg(LIST_SECONDARY),
        ),
    ]);
    if selected {
        line.style(
            Style::default()
                .bg(ACTIVE_HIGHLIGHT)
                .add_modifier(Modifier::BOLD),
        )
    } else {
        line
    }
}
