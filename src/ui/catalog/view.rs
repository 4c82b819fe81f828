use crate::ui::catalog::state::CatalogState;
use crate::ui::theme::{ACTIVE_HIGHLIGHT, GLOBAL_BORDER, HEADER_TEXT, HERB_GREEN, MUTED_TEXT};
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};
use ratatui::Frame;

/// Lines per entry: name, summary, image path, blank separator.
const ROWS_PER_ENTRY: usize = 4;

pub fn render_catalog(frame: &mut Frame<'_>, area: Rect, state: &CatalogState) {
    let mut lines = Vec::with_capacity(state.catalog.len() * ROWS_PER_ENTRY);

    for (idx, entry) in state.catalog.iter().enumerate() {
        let focused = idx == state.focused;
        let marker = if focused { "▶ " } else { "  " };

        let mut name_line = Line::from(vec![
            Span::styled(marker, Style::default().fg(HERB_GREEN)),
            Span::styled(
                entry.name.clone(),
                Style::default()
                    .fg(HEADER_TEXT)
                    .add_modifier(Modifier::BOLD),
            ),
        ]);
        let mut desc_line = Line::from(vec![
            Span::raw("    "),
            Span::styled(entry.desc.clone(), Style::default().fg(HEADER_TEXT)),
        ]);
        let mut image_line = Line::from(vec![
            Span::raw("    "),
            Span::styled(entry.image.clone(), Style::default().fg(MUTED_TEXT)),
        ]);

        if focused {
            let highlight = Style::default().bg(ACTIVE_HIGHLIGHT);
            name_line = name_line.style(highlight);
            desc_line = desc_line.style(highlight);
            image_line = image_line.style(highlight);
        }

        lines.extend([name_line, desc_line, image_line, Line::from("")]);
    }

    // Keep the focused entry on screen when the body is short.
    let visible_rows = area.height.saturating_sub(2) as usize;
    let focused_bottom = (state.focused + 1) * ROWS_PER_ENTRY;
    let scroll = focused_bottom.saturating_sub(visible_rows);

    let block = Block::default()
        .title(Span::styled(" Herbs ", Style::default().fg(HERB_GREEN)))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(GLOBAL_BORDER));
    let widget = Paragraph::new(lines)
        .block(block)
        .scroll((u16::try_from(scroll).unwrap_or(u16::MAX), 0));
    frame.render_widget(widget, area);
}
