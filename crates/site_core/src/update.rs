use crate::content::Listable;
use crate::filter::PageSize;
use crate::{Effect, ListMsg, ListState};

/// Fresh list state on page one, plus the image loads for that first page.
pub fn init<T: Listable>(items: &[T], page_size: PageSize) -> (ListState<'_, T>, Vec<Effect>) {
    let state = ListState::new(items, page_size);
    let effects = load_images(&state);
    (state, effects)
}

/// Pure update function: applies a message to state and returns any effects.
pub fn update<'a, T: Listable>(
    mut state: ListState<'a, T>,
    msg: ListMsg<T::Category>,
) -> (ListState<'a, T>, Vec<Effect>) {
    let before = visible_keys(&state);

    match msg {
        ListMsg::SearchChanged(term) => {
            state.set_search_term(term);
        }
        ListMsg::SearchCleared => {
            state.set_search_term(String::new());
        }
        ListMsg::CategorySelected(category) => {
            state.set_category(category);
        }
        ListMsg::PageSelected(page) => {
            state.set_page(page);
        }
        ListMsg::NextPage => {
            let next = state.current_page().saturating_add(1);
            state.set_page(next);
        }
        ListMsg::PreviousPage => {
            let previous = state.current_page().saturating_sub(1);
            state.set_page(previous);
        }
        ListMsg::NoOp => {}
    }
    state.enforce_page_bounds();

    if visible_keys(&state) == before {
        return (state, Vec::new());
    }
    let effects = load_images(&state);
    (state, effects)
}

fn load_images<T: Listable>(state: &ListState<'_, T>) -> Vec<Effect> {
    let images: Vec<_> = state
        .visible()
        .iter()
        .filter_map(|item| item.image())
        .collect();
    if images.is_empty() {
        Vec::new()
    } else {
        vec![Effect::LoadImages(images)]
    }
}

fn visible_keys<'a, T: Listable>(state: &ListState<'a, T>) -> Vec<&'a str> {
    state.visible().into_iter().map(|item| item.key()).collect()
}
