//! Dialog rendering for the add-pet form.

use ratatui::layout::Alignment;
use ratatui::style::Style;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Paragraph};
use ratatui::Frame;

use crate::ui::layout::centered_rect_by_size;
use crate::ui::pets::state::{DraftField, PetsScreenState};
use crate::ui::theme::{ACCENT, HEADER_TEXT, LIST_SECONDARY, POPUP_BORDER};

const DIALOG_WIDTH: u16 = 44;
const DIALOG_HEIGHT: u16 = 9;

/// Render the add-pet dialog overlay on top of the list.
pub fn render_add_dialog(frame: &mut Frame, state: &PetsScreenState) {
    if !state.dialog_open {
        return;
    }

    let area = centered_rect_by_size(DIALOG_WIDTH, DIALOG_HEIGHT, frame.area());
    frame.render_widget(Clear, area);

    let block = Block::default()
        .title(" Add Pet ")
        .title_alignment(Alignment::Center)
        .borders(Borders::ALL)
        .border_style(Style::default().fg(POPUP_BORDER));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let mut lines = vec![Line::from("")];
    for field in DraftField::ALL {
        let focused = field == state.focused;
        let label_style = if focused {
            Style::default().fg(ACCENT)
        } else {
            Style::default().fg(LIST_SECONDARY)
        };
        let mut spans = vec![
            Span::styled(format!("  {:>5}: ", field.label()), label_style),
            Span::styled(
                state.draft.field(field).to_string(),
                Style::default().fg(HEADER_TEXT),
            ),
        ];
        if focused {
            spans.push(Span::styled("▏", Style::default().fg(ACCENT)));
        }
        lines.push(Line::from(spans));
    }
    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled(
        "  Enter: Save   Tab: Next field   Esc: Cancel",
        Style::default().fg(LIST_SECONDARY),
    )));

    frame.render_widget(Paragraph::new(lines), inner);
}
