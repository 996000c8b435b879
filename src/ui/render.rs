use crate::ui::app::App;
use crate::ui::layout::layout_regions;
use crate::ui::pets::{pet_row, render_add_dialog};
use crate::ui::snackbar::render_snackbar;
use crate::ui::theme::{ACCENT, GLOBAL_BORDER, HEADER_TEXT, LIST_SECONDARY};
use ratatui::layout::{Alignment, Constraint, Direction, Layout, Rect};
use ratatui::style::Style;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};
use ratatui::Frame;

pub fn draw(frame: &mut Frame<'_>, app: &App) {
    let (header, body, footer) = layout_regions(frame.area());

    render_header(frame, header, app);
    render_body(frame, body, app);
    render_footer(frame, footer);

    render_add_dialog(frame, app.screen());
    render_snackbar(frame, app.snackbar());
}

fn render_header(frame: &mut Frame, area: Rect, app: &App) {
    let shown = app.displayed().len();
    let total = app.pets().len();
    let line = Line::from(vec![
        Span::styled(" Pawbook ", Style::default().fg(ACCENT)),
        Span::styled(
            format!(" {shown} of {total} shown"),
            Style::default().fg(LIST_SECONDARY),
        ),
    ]);
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(GLOBAL_BORDER));
    frame.render_widget(Paragraph::new(line).block(block), area);
}

fn render_body(frame: &mut Frame, area: Rect, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(3), Constraint::Min(0)])
        .split(area);

    render_search(frame, chunks[0], app);
    render_list(frame, chunks[1], app);
}

fn render_search(frame: &mut Frame, area: Rect, app: &App) {
    let search = &app.screen().search;
    let mut spans = vec![Span::styled(
        search.clone(),
        Style::default().fg(HEADER_TEXT),
    )];
    if !app.dialog_open() {
        spans.push(Span::styled("▏", Style::default().fg(ACCENT)));
    }
    if search.is_empty() {
        spans.push(Span::styled(
            "Search pets...",
            Style::default().fg(LIST_SECONDARY),
        ));
    }
    let block = Block::default()
        .title(" Search ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(GLOBAL_BORDER));
    frame.render_widget(Paragraph::new(Line::from(spans)).block(block), area);
}

fn render_list(frame: &mut Frame, area: Rect, app: &App) {
    let displayed = app.displayed();
    let block = Block::default()
        .title(" Pets ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(GLOBAL_BORDER));

    if displayed.is_empty() {
        let placeholder = Paragraph::new("No pets found.")
            .alignment(Alignment::Center)
            .style(Style::default().fg(LIST_SECONDARY))
            .block(block);
        frame.render_widget(placeholder, area);
        return;
    }

    let selected = app.screen().selected;
    let rows = area.height.saturating_sub(2) as usize;
    // Scroll just enough to keep the selected row in view.
    let offset = if rows == 0 {
        0
    } else {
        selected.saturating_sub(rows - 1)
    };
    let lines: Vec<Line> = displayed
        .iter()
        .enumerate()
        .skip(offset)
        .take(rows.max(1))
        .map(|(index, pet)| pet_row(pet, index == selected))
        .collect();

    frame.render_widget(Paragraph::new(lines).block(block), area);
}

fn render_footer(frame: &mut Frame, area: Rect) {
    let hints = Line::from(Span::styled(
        " Type to search   ↑/↓ Select   Ctrl+N Add   Del Remove   Ctrl+Q Quit",
        Style::default().fg(LIST_SECONDARY),
    ));
    frame.render_widget(Paragraph::new(hints), area);
}
