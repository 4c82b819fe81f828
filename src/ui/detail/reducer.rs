use crate::ui::detail::intent::DetailIntent;
use crate::ui::detail::state::DetailState;
use crate::ui::mvi::Reducer;

pub struct DetailReducer;

impl Reducer for DetailReducer {
    type State = DetailState;
    type Intent = DetailIntent;

    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State {
        match state {
            DetailState::Uninitialized => match intent {
                DetailIntent::Show(entry) => DetailState::Displaying(entry),
                DetailIntent::ShowNothing => DetailState::Empty,
            },
            // Terminal once activated.
            other => other,
        }
    }
}
