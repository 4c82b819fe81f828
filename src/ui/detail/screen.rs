use thiserror::Error;

use crate::catalog::{decode, DecodeError};
use crate::shell::{HostShell, NavigationParams, DATA_PARAM};
use crate::ui::detail::intent::DetailIntent;
use crate::ui::detail::reducer::DetailReducer;
use crate::ui::detail::state::DetailState;
use crate::ui::mvi::Reducer;

#[derive(Debug, Error)]
pub enum ActivationError {
    #[error("Failed to decode navigation data: {0}")]
    Decode(#[from] DecodeError),

    #[error("Detail screen was already activated")]
    AlreadyActivated,
}

#[derive(Debug, Default)]
pub struct DetailScreen {
    state: DetailState,
}

impl DetailScreen {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> &DetailState {
        &self.state
    }

    /// Runs the one-shot activation with the parameters the page was opened
    /// with.
    ///
    /// - no `data`, or an empty one: stays empty, no title request, `Ok`.
    /// - valid `data`: displays the entry and requests its name as title.
    /// - invalid `data`: stays empty, no title request, `Err`.
    pub fn on_activate(
        &mut self,
        params: &NavigationParams,
        shell: &mut dyn HostShell,
    ) -> Result<(), ActivationError> {
        if self.state.is_activated() {
            return Err(ActivationError::AlreadyActivated);
        }

        // An empty value counts as no value.
        let Some(raw) = params.get(DATA_PARAM).filter(|raw| !raw.is_empty()) else {
            tracing::debug!("Detail activated without data");
            self.dispatch(DetailIntent::ShowNothing);
            return Ok(());
        };

        match decode(raw) {
            Ok(entry) => {
                tracing::info!(id = entry.id, name = %entry.name, "Showing catalog entry");
                let title = entry.name.clone();
                self.dispatch(DetailIntent::Show(entry));
                shell.set_title(&title);
                Ok(())
            }
            Err(err) => {
                self.dispatch(DetailIntent::ShowNothing);
                Err(err.into())
            }
        }
    }

    fn dispatch(&mut self, intent: DetailIntent) {
        self.state = DetailReducer::reduce(std::mem::take(&mut self.state), intent);
    }
}
