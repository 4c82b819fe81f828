//! The detail screen: decodes one entry at activation and displays it.

mod intent;
mod reducer;
mod screen;
mod state;
mod view;

pub use intent::DetailIntent;
pub use reducer::DetailReducer;
pub use screen::{ActivationError, DetailScreen};
pub use state::DetailState;
pub use view::render_detail;
