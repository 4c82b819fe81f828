//! Model-View-Intent primitives shared by both screens.
//!
//! ```text
//! key press ──→ Intent ──→ Reducer ──→ State ──→ view
//!     ↑                                          │
//!     └──────────────────────────────────────────┘
//! ```
//!
//! Reducers are pure. Anything that reaches outside a screen (navigation,
//! title changes) goes through the host shell instead.

mod intent;
mod reducer;
mod state;

pub use intent::Intent;
pub use reducer::Reducer;
pub use state::UiState;
