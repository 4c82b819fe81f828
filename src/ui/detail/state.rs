use crate::catalog::CatalogEntry;
use crate::ui::mvi::UiState;

/// `Uninitialized` until activation, then `Empty` or `Displaying` for good.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum DetailState {
    #[default]
    Uninitialized,
    Empty,
    Displaying(CatalogEntry),
}

impl UiState for DetailState {}

impl DetailState {
    pub fn is_activated(&self) -> bool {
        !matches!(self, Self::Uninitialized)
    }

    /// True when nothing is on display, before or after activation.
    pub fn is_empty(&self) -> bool {
        !matches!(self, Self::Displaying(_))
    }

    pub fn entry(&self) -> Option<&CatalogEntry> {
        match self {
            Self::Displaying(entry) => Some(entry),
            Self::Uninitialized | Self::Empty => None,
        }
    }
}
