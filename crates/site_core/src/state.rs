use crate::content::Listable;
use crate::filter::{
    clamp_page, filter_and_paginate, filter_items, max_page, CategoryFilter, FilterState, PageSize,
};
use crate::view_model::ListViewModel;

/// Local state of one list view over an immutable slice of records.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListState<'a, T: Listable> {
    items: &'a [T],
    page_size: PageSize,
    filter: FilterState<T::Category>,
    dirty: bool,
}

impl<'a, T: Listable> ListState<'a, T> {
    pub fn new(items: &'a [T], page_size: PageSize) -> Self {
        Self {
            items,
            page_size,
            filter: FilterState::default(),
            dirty: false,
        }
    }

    pub fn items(&self) -> &'a [T] {
        self.items
    }

    pub fn page_size(&self) -> PageSize {
        self.page_size
    }

    pub fn filter_state(&self) -> &FilterState<T::Category> {
        &self.filter
    }

    pub fn search_term(&self) -> &str {
        &self.filter.search_term
    }

    pub fn category(&self) -> CategoryFilter<T::Category> {
        self.filter.category
    }

    pub fn current_page(&self) -> usize {
        self.filter.current_page
    }

    pub fn filtered(&self) -> Vec<&'a T> {
        filter_items(self.items, &self.filter)
    }

    pub fn filtered_count(&self) -> usize {
        self.filtered().len()
    }

    pub fn max_page(&self) -> usize {
        max_page(self.filtered_count(), self.page_size)
    }

    pub fn visible(&self) -> Vec<&'a T> {
        filter_and_paginate(self.items, &self.filter, self.page_size).items
    }

    pub fn view(&self) -> ListViewModel<'a, T> {
        ListViewModel::build(
            filter_and_paginate(self.items, &self.filter, self.page_size),
            &self.filter,
            self.dirty,
        )
    }

    /// Returns whether a re-render is pending and clears the flag.
    pub fn consume_dirty(&mut self) -> bool {
        std::mem::take(&mut self.dirty)
    }

    pub(crate) fn set_search_term(&mut self, term: String) -> bool {
        if self.filter.search_term == term {
            return false;
        }
        self.filter.search_term = term;
        self.reset_page();
        true
    }

    pub(crate) fn set_category(&mut self, category: CategoryFilter<T::Category>) -> bool {
        if self.filter.category == category {
            return false;
        }
        self.filter.category = category;
        self.reset_page();
        true
    }

    pub(crate) fn set_page(&mut self, page: usize) -> bool {
        let page = clamp_page(page, self.filtered_count(), self.page_size);
        if self.filter.current_page == page {
            return false;
        }
        self.filter.current_page = page;
        self.dirty = true;
        true
    }

    /// Pulls a stale page back into range. Returns whether it had to move.
    pub(crate) fn enforce_page_bounds(&mut self) -> bool {
        let clamped = clamp_page(self.filter.current_page, self.filtered_count(), self.page_size);
        if clamped == self.filter.current_page {
            return false;
        }
        self.filter.current_page = 1;
        self.dirty = true;
        true
    }

    fn reset_page(&mut self) {
        self.filter.current_page = 1;
        self.dirty = true;
    }
}
