use crate::catalog::CatalogEntry;
use crate::ui::mvi::Intent;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DetailIntent {
    /// Activation delivered a decoded entry.
    Show(CatalogEntry),
    /// Activation carried no entry, or one that failed to decode.
    ShowNothing,
}

impl Intent for DetailIntent {}
