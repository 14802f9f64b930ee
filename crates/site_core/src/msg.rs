use crate::filter::CategoryFilter;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ListMsg<C> {
    /// User typed in the search box.
    SearchChanged(String),
    /// User clicked the clear button next to the search box.
    SearchCleared,
    /// User clicked a filter chip.
    CategorySelected(CategoryFilter<C>),
    /// User clicked a numbered page button.
    PageSelected(usize),
    NextPage,
    PreviousPage,
    /// Fallback for placeholder wiring.
    NoOp,
}
