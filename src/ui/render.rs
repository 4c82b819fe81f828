use crate::ui::app::{App, Page};
use crate::ui::catalog::render_catalog;
use crate::ui::detail::{render_detail, DetailState};
use crate::ui::footer::Footer;
use crate::ui::header::Header;
use crate::ui::layout::layout_regions;
use ratatui::widgets::Clear;
use ratatui::Frame;

pub fn draw(frame: &mut Frame<'_>, app: &App) {
    let (header, body, footer) = layout_regions(frame.area(), app.show_footer());

    frame.render_widget(Header::new(app.title()).widget(), header);
    frame.render_widget(Clear, body);

    match app.page() {
        Page::Catalog => render_catalog(frame, body, app.catalog_screen().state()),
        Page::Detail => {
            let uninitialized = DetailState::default();
            let state = app
                .detail_screen()
                .map_or(&uninitialized, |screen| screen.state());
            render_detail(frame, body, state, app.detail_error());
        }
    }

    if app.show_footer() {
        let widget = Footer::new(app.page(), app.notice()).widget(footer);
        frame.render_widget(widget, footer);
    }
}
