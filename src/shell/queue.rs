use crate::shell::route::{NavigationParams, NavigationRequest, Route};
use crate::shell::HostShell;

/// A host-shell request, recorded for the host to apply later.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ShellCommand {
    Navigate(NavigationRequest),
    SetTitle(String),
}

/// [`HostShell`] that records requests instead of acting on them.
///
/// The terminal app drains it after each screen callback; tests inspect it
/// directly.
#[derive(Debug, Default)]
pub struct CommandQueue {
    commands: Vec<ShellCommand>,
}

impl CommandQueue {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn commands(&self) -> &[ShellCommand] {
        &self.commands
    }

    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }

    /// Takes every pending command, oldest first.
    pub fn drain(&mut self) -> Vec<ShellCommand> {
        std::mem::take(&mut self.commands)
    }

    /// Last title requested, if any.
    pub fn last_title(&self) -> Option<&str> {
        self.commands.iter().rev().find_map(|command| match command {
            ShellCommand::SetTitle(title) => Some(title.as_str()),
            ShellCommand::Navigate(_) => None,
        })
    }

    /// Last navigation requested, if any.
    pub fn last_navigation(&self) -> Option<&NavigationRequest> {
        self.commands.iter().rev().find_map(|command| match command {
            ShellCommand::Navigate(request) => Some(request),
            ShellCommand::SetTitle(_) => None,
        })
    }
}

impl HostShell for CommandQueue {
    fn navigate(&mut self, route: Route, params: NavigationParams) {
        tracing::debug!(%route, params = params.len(), "Navigation requested");
        self.commands
            .push(ShellCommand::Navigate(NavigationRequest::new(route, params)));
    }

    fn set_title(&mut self, title: &str) {
        tracing::debug!(title, "Title change requested");
        self.commands.push(ShellCommand::SetTitle(title.to_string()));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn records_in_order_and_drains() {
        let mut queue = CommandQueue::new();
        queue.set_title("one");
        queue.navigate(Route::Catalog, NavigationParams::new());
        queue.set_title("two");

        assert_eq!(queue.last_title(), Some("two"));
        assert_eq!(queue.last_navigation().unwrap().route, Route::Catalog);

        let drained = queue.drain();
        assert_eq!(drained.len(), 3);
        assert_eq!(drained[0], ShellCommand::SetTitle("one".to_string()));
        assert!(queue.is_empty());
    }
}
