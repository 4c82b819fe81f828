use crate::catalog::{Catalog, CatalogEntry};
use crate::ui::mvi::UiState;

/// The catalog plus the focused row.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct CatalogState {
    pub catalog: Catalog,
    pub focused: usize,
}

impl UiState for CatalogState {}

impl CatalogState {
    pub fn new(catalog: Catalog) -> Self {
        Self {
            catalog,
            focused: 0,
        }
    }

    pub fn focused_entry(&self) -> Option<&CatalogEntry> {
        self.catalog.entries().get(self.focused)
    }
}
