use crate::ui::app::{App, Page};
use crate::ui::catalog::CatalogIntent;
use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

pub fn handle_key(app: &mut App, key: KeyEvent) {
    if key.kind != KeyEventKind::Press {
        return;
    }

    if is_ctrl_char(key, 'c') || key.code == KeyCode::Char('q') {
        app.request_quit();
        return;
    }

    match app.page() {
        Page::Catalog => handle_catalog_key(app, key),
        Page::Detail => handle_detail_key(app, key),
    }
}

fn handle_catalog_key(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Up | KeyCode::Char('k') => app.dispatch_catalog(CatalogIntent::MoveUp),
        KeyCode::Down | KeyCode::Char('j') | KeyCode::Tab => {
            app.dispatch_catalog(CatalogIntent::MoveDown)
        }
        KeyCode::Home | KeyCode::Char('g') => app.dispatch_catalog(CatalogIntent::First),
        KeyCode::End | KeyCode::Char('G') => app.dispatch_catalog(CatalogIntent::Last),
        KeyCode::Char(c) if c.is_ascii_digit() => {
            if let Some(id) = c.to_digit(10) {
                app.dispatch_catalog(CatalogIntent::FocusId(id));
            }
        }
        KeyCode::Enter | KeyCode::Right | KeyCode::Char('l') => app.select_focused(),
        KeyCode::Esc => app.request_quit(),
        _ => {}
    }
}

fn handle_detail_key(app: &mut App, key: KeyEvent) {
    if matches!(
        key.code,
        KeyCode::Esc | KeyCode::Backspace | KeyCode::Left | KeyCode::Char('h')
    ) {
        app.go_back();
    }
}

fn is_ctrl_char(key: KeyEvent, ch: char) -> bool {
    key.modifiers.contains(KeyModifiers::CONTROL)
        && matches!(key.code, KeyCode::Char(c) if c.eq_ignore_ascii_case(&ch))
}
