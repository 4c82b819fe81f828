use crate::ui::app::Page;
use crate::ui::theme::{GLOBAL_BORDER, HEADER_TEXT, STATUS_ERROR};
use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};

const VERSION: &str = env!("CARGO_PKG_VERSION");

pub struct Footer<'a> {
    page: Page,
    notice: Option<&'a str>,
}

impl<'a> Footer<'a> {
    pub fn new(page: Page, notice: Option<&'a str>) -> Self {
        Self { page, notice }
    }

    fn hints(&self) -> &'static str {
        match self.page {
            Page::Catalog => " ↑/↓: Move │ 1-9: Jump │ Enter: Open │ q: Quit",
            Page::Detail => " Esc: Back │ q: Quit",
        }
    }

    pub fn widget(&self, area: Rect) -> Paragraph<'static> {
        let text_style = Style::default().fg(HEADER_TEXT).add_modifier(Modifier::DIM);
        let (left, left_style) = match self.notice {
            Some(notice) => (format!(" {notice}"), Style::default().fg(STATUS_ERROR)),
            None => (self.hints().to_string(), text_style),
        };
        let version = format!("v{} ", VERSION);

        // Unicode-aware: count chars, not bytes.
        let content_width = area.width.saturating_sub(2) as usize;
        let padding = content_width
            .saturating_sub(left.chars().count())
            .saturating_sub(version.chars().count());

        let line = Line::from(vec![
            Span::styled(left, left_style),
            Span::styled(" ".repeat(padding), text_style),
            Span::styled(version, text_style),
        ]);

        Paragraph::new(line).alignment(Alignment::Left).block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(GLOBAL_BORDER)),
        )
    }
}
