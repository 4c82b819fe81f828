use herbal_catalog::catalog::{Catalog, CatalogEntry};
use herbal_catalog::ui::catalog::{CatalogIntent, CatalogReducer, CatalogState};
use herbal_catalog::ui::mvi::Reducer;

fn state_at(focused: usize) -> CatalogState {
    CatalogState {
        catalog: Catalog::builtin(),
        focused,
    }
}

#[test]
fn default_state_focuses_first_builtin_entry() {
    let state = CatalogState::default();
    assert_eq!(state.focused, 0);
    assert_eq!(state.focused_entry().unwrap().id, 1);
}

#[test]
fn move_down_advances() {
    let state = CatalogReducer::reduce(state_at(0), CatalogIntent::MoveDown);
    assert_eq!(state.focused, 1);
}

#[test]
fn move_down_wraps_to_first() {
    let state = CatalogReducer::reduce(state_at(2), CatalogIntent::MoveDown);
    assert_eq!(state.focused, 0);
}

#[test]
fn move_up_wraps_to_last() {
    let state = CatalogReducer::reduce(state_at(0), CatalogIntent::MoveUp);
    assert_eq!(state.focused, 2);
}

#[test]
fn first_and_last_jump() {
    let state = CatalogReducer::reduce(state_at(1), CatalogIntent::Last);
    assert_eq!(state.focused, 2);
    let state = CatalogReducer::reduce(state, CatalogIntent::First);
    assert_eq!(state.focused, 0);
}

#[test]
fn focus_id_finds_row_and_ignores_unknown_ids() {
    let state = CatalogReducer::reduce(state_at(0), CatalogIntent::FocusId(3));
    assert_eq!(state.focused, 2);

    let state = CatalogReducer::reduce(state, CatalogIntent::FocusId(9));
    assert_eq!(state.focused, 2);
}

#[test]
fn reducer_never_touches_the_catalog() {
    let before = state_at(1);
    let after = CatalogReducer::reduce(before.clone(), CatalogIntent::MoveDown);
    assert_eq!(after.catalog, before.catalog);
}

#[test]
fn single_entry_catalog_stays_put() {
    let catalog = Catalog::new(vec![CatalogEntry::new(
        5,
        "Basil",
        "Sweet",
        "/images/basil.png",
        "Leafy.",
    )])
    .unwrap();
    let state = CatalogState::new(catalog);

    let state = CatalogReducer::reduce(state, CatalogIntent::MoveDown);
    assert_eq!(state.focused, 0);
    let state = CatalogReducer::reduce(state, CatalogIntent::MoveUp);
    assert_eq!(state.focused, 0);
}
