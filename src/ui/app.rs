use crate::catalog::Catalog;
use crate::shell::{CommandQueue, NavigationRequest, Route, ShellCommand};
use crate::ui::catalog::{CatalogIntent, CatalogScreen};
use crate::ui::detail::DetailScreen;

/// Title shown while the catalog page is on top.
pub const CATALOG_TITLE: &str = "Herbal Catalog";

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Page {
    Catalog,
    Detail,
}

/// An open detail page and the activation error it reported, if any.
#[derive(Debug)]
struct DetailPage {
    screen: DetailScreen,
    error: Option<String>,
}

/// The terminal host: owns both screens and applies their shell requests.
pub struct App {
    should_quit: bool,
    catalog: CatalogScreen,
    /// Pushed on top of the catalog by a `Route::Detail` navigation.
    detail: Option<DetailPage>,
    title: String,
    shell: CommandQueue,
    show_footer: bool,
    notice: Option<String>,
}

impl App {
    pub fn new(catalog: Catalog, show_footer: bool) -> Self {
        Self {
            should_quit: false,
            catalog: CatalogScreen::new(catalog),
            detail: None,
            title: CATALOG_TITLE.to_string(),
            shell: CommandQueue::new(),
            show_footer,
            notice: None,
        }
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    pub fn request_quit(&mut self) {
        self.should_quit = true;
    }

    pub fn page(&self) -> Page {
        if self.detail.is_some() {
            Page::Detail
        } else {
            Page::Catalog
        }
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn show_footer(&self) -> bool {
        self.show_footer
    }

    /// Last host-level failure worth showing in the footer.
    pub fn notice(&self) -> Option<&str> {
        self.notice.as_deref()
    }

    pub fn catalog_screen(&self) -> &CatalogScreen {
        &self.catalog
    }

    pub fn detail_screen(&self) -> Option<&DetailScreen> {
        self.detail.as_ref().map(|page| &page.screen)
    }

    pub fn detail_error(&self) -> Option<&str> {
        self.detail.as_ref().and_then(|page| page.error.as_deref())
    }

    pub fn dispatch_catalog(&mut self, intent: CatalogIntent) {
        self.catalog.dispatch(intent);
    }

    /// Selects the focused catalog row and follows the resulting navigation.
    pub fn select_focused(&mut self) {
        self.notice = None;
        if let Err(err) = self.catalog.select_focused(&mut self.shell) {
            tracing::error!(error = %err, "Selection failed");
            self.notice = Some(err.to_string());
        }
        self.apply_shell_commands();
    }

    /// Closes the detail page, if one is open.
    pub fn go_back(&mut self) {
        if self.detail.take().is_some() {
            tracing::debug!("Returned to catalog");
            self.title = CATALOG_TITLE.to_string();
        }
    }

    fn apply_shell_commands(&mut self) {
        // Activation may queue more commands, so drain until quiet.
        loop {
            let commands = self.shell.drain();
            if commands.is_empty() {
                break;
            }
            for command in commands {
                match command {
                    ShellCommand::Navigate(request) => self.open(request),
                    ShellCommand::SetTitle(title) => self.title = title,
                }
            }
        }
    }

    fn open(&mut self, request: NavigationRequest) {
        tracing::info!(url = %request.to_url(), "Navigating");
        match request.route {
            Route::Catalog => self.go_back(),
            Route::Detail => {
                let mut screen = DetailScreen::new();
                let error = match screen.on_activate(&request.params, &mut self.shell) {
                    Ok(()) => None,
                    Err(err) => {
                        tracing::error!(error = %err, "Detail activation failed");
                        Some(err.to_string())
                    }
                };
                self.detail = Some(DetailPage { screen, error });
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_on_catalog_with_default_title() {
        let app = App::new(Catalog::builtin(), true);
        assert_eq!(app.page(), Page::Catalog);
        assert_eq!(app.title(), CATALOG_TITLE);
        assert!(app.detail_screen().is_none());
    }

    #[test]
    fn back_on_catalog_is_a_no_op() {
        let mut app = App::new(Catalog::builtin(), true);
        app.go_back();
        assert_eq!(app.page(), Page::Catalog);
        assert_eq!(app.title(), CATALOG_TITLE);
    }
}
