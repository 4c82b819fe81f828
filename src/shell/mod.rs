//! The host shell seam.
//!
//! Screens never touch the terminal or each other. They issue one-way
//! requests to a [`HostShell`]: navigate somewhere, or change the visible
//! title. Nothing is returned and nothing is awaited.

mod queue;
mod route;

pub use queue::{CommandQueue, ShellCommand};
pub use route::{NavigationParams, NavigationRequest, Route, DATA_PARAM};

/// Capability the hosting runtime hands to each screen callback.
pub trait HostShell {
    /// Asks the host to open `route` with the given query parameters.
    fn navigate(&mut self, route: Route, params: NavigationParams);

    /// Asks the host to show `title` in its title bar.
    fn set_title(&mut self, title: &str);
}
