use crate::ui::detail::state::DetailState;
use crate::ui::theme::{GLOBAL_BORDER, HEADER_TEXT, HERB_GREEN, MUTED_TEXT, STATUS_ERROR};
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph, Wrap};
use ratatui::Frame;

/// Draws the detail page. `error` is the activation failure, if any.
pub fn render_detail(frame: &mut Frame<'_>, area: Rect, state: &DetailState, error: Option<&str>) {
    let mut lines = Vec::new();

    if let Some(error) = error {
        lines.push(Line::from(Span::styled(
            format!("Could not open this entry: {error}"),
            Style::default().fg(STATUS_ERROR),
        )));
        lines.push(Line::from(""));
    }

    if let Some(entry) = state.entry() {
        lines.push(Line::from(Span::styled(
            entry.name.clone(),
            Style::default().fg(HERB_GREEN).add_modifier(Modifier::BOLD),
        )));
        lines.push(Line::from(Span::styled(
            entry.desc.clone(),
            Style::default().fg(HEADER_TEXT),
        )));
        lines.push(Line::from(vec![
            Span::styled("Image: ", Style::default().fg(MUTED_TEXT)),
            Span::styled(entry.image.clone(), Style::default().fg(MUTED_TEXT)),
        ]));
        lines.push(Line::from(""));
        lines.push(Line::from(Span::styled(
            entry.detail.clone(),
            Style::default().fg(HEADER_TEXT),
        )));
    }

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(GLOBAL_BORDER));
    let widget = Paragraph::new(lines)
        .block(block)
        .wrap(Wrap { trim: false });
    frame.render_widget(widget, area);
}
