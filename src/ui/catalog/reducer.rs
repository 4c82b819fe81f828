use crate::ui::catalog::intent::CatalogIntent;
use crate::ui::catalog::state::CatalogState;
use crate::ui::mvi::Reducer;

pub struct CatalogReducer;

impl Reducer for CatalogReducer {
    type State = CatalogState;
    type Intent = CatalogIntent;

    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State {
        let len = state.catalog.len();
        if len == 0 {
            return state;
        }

        let focused = match intent {
            CatalogIntent::MoveUp => {
                if state.focused == 0 {
                    len - 1
                } else {
                    state.focused - 1
                }
            }
            CatalogIntent::MoveDown => {
                if state.focused + 1 >= len {
                    0
                } else {
                    state.focused + 1
                }
            }
            CatalogIntent::First => 0,
            CatalogIntent::Last => len - 1,
            CatalogIntent::FocusId(id) => state
                .catalog
                .iter()
                .position(|entry| entry.id == id)
                .unwrap_or(state.focused),
        };

        CatalogState { focused, ..state }
    }
}
