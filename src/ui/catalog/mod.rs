//! The list screen: owns the catalog and turns a selection into navigation.

mod intent;
mod reducer;
mod screen;
mod state;
mod view;

pub use intent::CatalogIntent;
pub use reducer::CatalogReducer;
pub use screen::CatalogScreen;
pub use state::CatalogState;
pub use view::render_catalog;
