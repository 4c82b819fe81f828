use crate::catalog::{encode, Catalog, CatalogEntry, EncodeError};
use crate::shell::{HostShell, NavigationParams, Route, DATA_PARAM};
use crate::ui::catalog::intent::CatalogIntent;
use crate::ui::catalog::reducer::CatalogReducer;
use crate::ui::catalog::state::CatalogState;
use crate::ui::mvi::Reducer;

#[derive(Debug, Default)]
pub struct CatalogScreen {
    state: CatalogState,
}

impl CatalogScreen {
    /// Takes ownership of the catalog for the lifetime of the screen.
    pub fn new(catalog: Catalog) -> Self {
        Self {
            state: CatalogState::new(catalog),
        }
    }

    pub fn state(&self) -> &CatalogState {
        &self.state
    }

    pub fn catalog(&self) -> &Catalog {
        &self.state.catalog
    }

    pub fn dispatch(&mut self, intent: CatalogIntent) {
        self.state = CatalogReducer::reduce(std::mem::take(&mut self.state), intent);
    }

    /// Encodes `entry` and asks the shell to open the detail page with it.
    ///
    /// Nothing is sent to the shell if encoding fails.
    pub fn select_entry(
        &self,
        entry: &CatalogEntry,
        shell: &mut dyn HostShell,
    ) -> Result<(), EncodeError> {
        let encoded = encode(entry)?;
        let mut params = NavigationParams::new();
        params.insert(DATA_PARAM.to_string(), encoded);

        tracing::info!(id = entry.id, name = %entry.name, "Opening catalog entry");
        shell.navigate(Route::Detail, params);
        Ok(())
    }

    /// Selects the focused row, if there is one.
    pub fn select_focused(&self, shell: &mut dyn HostShell) -> Result<(), EncodeError> {
        match self.state.focused_entry() {
            Some(entry) => self.select_entry(entry, shell),
            None => Ok(()),
        }
    }
}
