use std::fmt;

use crate::content::Listable;
use crate::filter::{CategoryFilter, FilterState, PageResult};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListViewModel<'a, T> {
    pub items: Vec<&'a T>,
    pub filtered_count: usize,
    pub current_page: usize,
    pub total_pages: usize,
    pub search_term: String,
    /// `all` or the selected category.
    pub filter: String,
    /// Present only when the filtered set is empty.
    pub empty_message: Option<String>,
    /// Present only when there is more than one page.
    pub pager: Option<PagerView>,
    pub dirty: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PagerView {
    pub current_page: usize,
    pub total_pages: usize,
    pub prev_disabled: bool,
    pub next_disabled: bool,
    pub buttons: Vec<PagerButton>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PagerButton {
    Page { number: usize, active: bool },
    Ellipsis,
}

impl<'a, T: Listable> ListViewModel<'a, T> {
    pub(crate) fn build(
        page: PageResult<'a, T>,
        filter: &FilterState<T::Category>,
        dirty: bool,
    ) -> Self {
        let empty_message = (page.filtered_count == 0)
            .then(|| no_results_message(T::NOUN, &filter.search_term, &filter.category));
        let pager = (page.total_pages > 1).then(|| pager_view(page.page, page.total_pages));
        Self {
            items: page.items,
            filtered_count: page.filtered_count,
            current_page: page.page,
            total_pages: page.total_pages,
            search_term: filter.search_term.clone(),
            filter: filter.category.to_string(),
            empty_message,
            pager,
            dirty,
        }
    }
}

/// Message shown in place of an empty list, echoing the active query.
pub fn no_results_message<C: fmt::Display>(
    noun: &str,
    search_term: &str,
    filter: &CategoryFilter<C>,
) -> String {
    match (search_term.is_empty(), filter) {
        (false, CategoryFilter::Only(category)) => format!(
            "No {category} {noun} found matching \"{search_term}\". Try a different search or filter."
        ),
        (false, CategoryFilter::All) => {
            format!("No {noun} found matching \"{search_term}\". Try a different search term.")
        }
        (true, CategoryFilter::Only(category)) => format!("No {category} {noun} available."),
        (true, CategoryFilter::All) => format!("No {noun} available."),
    }
}

/// First, last and the neighbours of the current page; one ellipsis per gap.
pub fn pager_view(current_page: usize, total_pages: usize) -> PagerView {
    let mut buttons = Vec::new();
    for number in 1..=total_pages {
        let near = number + 1 >= current_page && number <= current_page + 1;
        if number == 1 || number == total_pages || near {
            buttons.push(PagerButton::Page {
                number,
                active: number == current_page,
            });
        } else if (number + 2 == current_page && number > 1)
            || (number == current_page + 2 && number < total_pages)
        {
            buttons.push(PagerButton::Ellipsis);
        }
    }
    PagerView {
        current_page,
        total_pages,
        prev_disabled: current_page <= 1,
        next_disabled: current_page >= total_pages,
        buttons,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn numbers(view: &PagerView) -> Vec<Option<usize>> {
        view.buttons
            .iter()
            .map(|b| match b {
                PagerButton::Page { number, .. } => Some(*number),
                PagerButton::Ellipsis => None,
            })
            .collect()
    }

    #[test]
    fn pager_shows_all_pages_when_short() {
        let view = pager_view(2, 3);
        assert_eq!(numbers(&view), vec![Some(1), Some(2), Some(3)]);
        assert!(!view.prev_disabled);
        assert!(!view.next_disabled);
    }

    #[test]
    fn pager_elides_far_pages() {
        let view = pager_view(5, 9);
        assert_eq!(
            numbers(&view),
            vec![Some(1), None, Some(4), Some(5), Some(6), None, Some(9)]
        );
    }

    #[test]
    fn pager_edges_disable_arrows() {
        let first = pager_view(1, 4);
        assert!(first.prev_disabled);
        assert_eq!(numbers(&first), vec![Some(1), Some(2), None, Some(4)]);
        let last = pager_view(4, 4);
        assert!(last.next_disabled);
        assert_eq!(numbers(&last), vec![Some(1), None, Some(3), Some(4)]);
    }
}
