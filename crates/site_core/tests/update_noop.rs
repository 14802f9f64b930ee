mod common;

use site_core::{update, ListMsg, ListState, PageSize};

#[test]
fn update_is_noop() {
    let items = common::numbered(4);
    let state = ListState::new(&items, PageSize::new(2));
    let (next, effects) = update(state.clone(), ListMsg::NoOp);

    assert_eq!(state, next);
    assert!(effects.is_empty());
}
