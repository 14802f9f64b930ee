use std::fmt;
use std::num::NonZeroUsize;
use std::str::FromStr;

use crate::content::{Listable, ParseCategoryError};

pub const ALL_FILTER: &str = "all";

/// Category selector: either everything or one exact category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CategoryFilter<C> {
    #[default]
    All,
    Only(C),
}

impl<C: Copy + Eq> CategoryFilter<C> {
    pub fn accepts(&self, category: C) -> bool {
        match self {
            CategoryFilter::All => true,
            CategoryFilter::Only(wanted) => *wanted == category,
        }
    }

    pub fn is_all(&self) -> bool {
        matches!(self, CategoryFilter::All)
    }
}

impl<C: fmt::Display> fmt::Display for CategoryFilter<C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CategoryFilter::All => f.write_str(ALL_FILTER),
            CategoryFilter::Only(category) => category.fmt(f),
        }
    }
}

impl<C: FromStr<Err = ParseCategoryError>> FromStr for CategoryFilter<C> {
    type Err = ParseCategoryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.trim().eq_ignore_ascii_case(ALL_FILTER) {
            Ok(CategoryFilter::All)
        } else {
            s.parse().map(CategoryFilter::Only)
        }
    }
}

/// Search text, category selector and 1-based page of one list view.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilterState<C> {
    pub search_term: String,
    pub category: CategoryFilter<C>,
    pub current_page: usize,
}

impl<C> Default for FilterState<C> {
    fn default() -> Self {
        Self {
            search_term: String::new(),
            category: CategoryFilter::All,
            current_page: 1,
        }
    }
}

impl<C> FilterState<C> {
    pub fn new(search_term: impl Into<String>, category: CategoryFilter<C>, page: usize) -> Self {
        Self {
            search_term: search_term.into(),
            category,
            current_page: page,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageSize(NonZeroUsize);

impl PageSize {
    /// Zero is bumped to one.
    pub fn new(size: usize) -> Self {
        Self(NonZeroUsize::new(size).unwrap_or(NonZeroUsize::MIN))
    }

    pub fn get(self) -> usize {
        self.0.get()
    }
}

impl Default for PageSize {
    fn default() -> Self {
        Self::new(6)
    }
}

/// One computed page of a filtered list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageResult<'a, T> {
    pub items: Vec<&'a T>,
    pub filtered_count: usize,
    pub page: usize,
    pub total_pages: usize,
}

pub fn matches<T: Listable>(item: &T, state: &FilterState<T::Category>) -> bool {
    if !state.category.accepts(item.category()) {
        return false;
    }
    if state.search_term.is_empty() {
        return true;
    }
    let needle = state.search_term.to_lowercase();
    item.searchable_fields()
        .iter()
        .any(|field| field.to_lowercase().contains(&needle))
}

/// Filtered items in their original order.
pub fn filter_items<'a, T: Listable>(items: &'a [T], state: &FilterState<T::Category>) -> Vec<&'a T> {
    items.iter().filter(|item| matches(*item, state)).collect()
}

pub fn total_pages(count: usize, page_size: PageSize) -> usize {
    count.div_ceil(page_size.get())
}

/// Highest page the view may sit on; an empty list still has page 1.
pub fn max_page(count: usize, page_size: PageSize) -> usize {
    total_pages(count, page_size).max(1)
}

pub fn clamp_page(page: usize, count: usize, page_size: PageSize) -> usize {
    page.clamp(1, max_page(count, page_size))
}

/// Slice `[(page-1)*size, page*size)` clamped to bounds; page 0 behaves like page 1.
pub fn page_slice<T>(filtered: &[T], page: usize, page_size: PageSize) -> &[T] {
    let size = page_size.get();
    let start = page.saturating_sub(1).saturating_mul(size).min(filtered.len());
    let end = start.saturating_add(size).min(filtered.len());
    &filtered[start..end]
}

pub fn filter_and_paginate<'a, T: Listable>(
    items: &'a [T],
    state: &FilterState<T::Category>,
    page_size: PageSize,
) -> PageResult<'a, T> {
    let filtered = filter_items(items, state);
    let page = state.current_page.max(1);
    PageResult {
        items: page_slice(&filtered, page, page_size).to_vec(),
        filtered_count: filtered.len(),
        page,
        total_pages: total_pages(filtered.len(), page_size),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn page_size_never_zero() {
        assert_eq!(PageSize::new(0).get(), 1);
        assert_eq!(PageSize::new(8).get(), 8);
    }

    #[test]
    fn slice_clamps_to_bounds() {
        let data = [1, 2, 3, 4, 5];
        let size = PageSize::new(2);
        assert_eq!(page_slice(&data, 1, size), &[1, 2]);
        assert_eq!(page_slice(&data, 3, size), &[5]);
        assert!(page_slice(&data, 4, size).is_empty());
        assert!(page_slice(&data, usize::MAX, size).is_empty());
    }

    #[test]
    fn max_page_is_at_least_one() {
        assert_eq!(total_pages(0, PageSize::new(6)), 0);
        assert_eq!(max_page(0, PageSize::new(6)), 1);
        assert_eq!(max_page(13, PageSize::new(6)), 3);
        assert_eq!(clamp_page(9, 13, PageSize::new(6)), 3);
        assert_eq!(clamp_page(0, 13, PageSize::new(6)), 1);
    }
}
