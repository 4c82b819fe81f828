use crate::ui::mvi::Intent;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CatalogIntent {
    /// Focus the previous row, wrapping to the last.
    MoveUp,
    /// Focus the next row, wrapping to the first.
    MoveDown,
    First,
    Last,
    /// Focus the row holding this entry id. Unknown ids are ignored.
    FocusId(u32),
}

impl Intent for CatalogIntent {}
