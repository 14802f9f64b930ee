mod common;

use common::{init_logging, keys, numbered, Item};
use pretty_assertions::assert_eq;
use site_core::{
    filter_and_paginate, CategoryFilter, EventCategory, FilterState, PageSize,
};

#[test]
fn sixteen_items_split_into_two_pages_of_eight() {
    init_logging();
    let items = numbered(16);
    let size = PageSize::new(8);

    let page1 = filter_and_paginate(&items, &FilterState::new("", CategoryFilter::All, 1), size);
    let page2 = filter_and_paginate(&items, &FilterState::new("", CategoryFilter::All, 2), size);
    let page3 = filter_and_paginate(&items, &FilterState::new("", CategoryFilter::All, 3), size);

    let expected1: Vec<String> = (1..=8).map(|n| format!("item-{n}")).collect();
    let expected2: Vec<String> = (9..=16).map(|n| format!("item-{n}")).collect();
    assert_eq!(keys(&page1.items), expected1);
    assert_eq!(keys(&page2.items), expected2);
    assert!(page3.items.is_empty());
    assert_eq!(page1.total_pages, 2);
    assert_eq!(page3.total_pages, 2);
    assert_eq!(page3.filtered_count, 16);
}

#[test]
fn page_length_matches_formula() {
    init_logging();
    for count in [0usize, 1, 5, 6, 7, 13, 18] {
        let items = numbered(count);
        for size in [1usize, 6, 8] {
            for page in 1..=5usize {
                let result = filter_and_paginate(
                    &items,
                    &FilterState::new("", CategoryFilter::All, page),
                    PageSize::new(size),
                );
                let expected = size.min(count.saturating_sub((page - 1) * size));
                assert_eq!(result.items.len(), expected, "count={count} size={size} page={page}");
            }
        }
    }
}

#[test]
fn search_is_case_insensitive_substring() {
    init_logging();
    let items = vec![
        Item::new("e101", "Epilepsy 101: Diagnosis dan Tatalaksana Epilepsi", EventCategory::Past),
        Item::new("stroke", "Seminar Stroke", EventCategory::Past),
    ];
    for query in ["epilepsy", "EPILEPSY", "ePiLePsY 101"] {
        let result = filter_and_paginate(
            &items,
            &FilterState::new(query, CategoryFilter::All, 1),
            PageSize::new(6),
        );
        assert_eq!(keys(&result.items), vec!["e101"], "query {query}");
    }
}

#[test]
fn search_covers_every_searchable_field() {
    init_logging();
    let items = vec![
        Item::new("a", "Workshop", EventCategory::Past).at("Bandung, Indonesia"),
        Item::new("b", "Bandung Brain Fair", EventCategory::Future),
        Item::new("c", "Summit", EventCategory::Future).at("Surabaya"),
    ];
    let result = filter_and_paginate(
        &items,
        &FilterState::new("bandung", CategoryFilter::All, 1),
        PageSize::new(6),
    );
    assert_eq!(keys(&result.items), vec!["a", "b"]);
}

#[test]
fn category_and_search_must_both_match() {
    init_logging();
    let items = vec![
        Item::new("a", "Brain Week", EventCategory::Present),
        Item::new("b", "Brain Expo", EventCategory::Past),
        Item::new("c", "Stroke Day", EventCategory::Present),
    ];
    let present = CategoryFilter::Only(EventCategory::Present);

    let result = filter_and_paginate(&items, &FilterState::new("brain", present, 1), PageSize::new(6));
    assert_eq!(keys(&result.items), vec!["a"]);

    let result = filter_and_paginate(&items, &FilterState::new("", present, 1), PageSize::new(6));
    assert_eq!(keys(&result.items), vec!["a", "c"]);
}

#[test]
fn filtering_preserves_store_order() {
    init_logging();
    let items = vec![
        Item::new("z", "Zeta talk", EventCategory::Past),
        Item::new("a", "Alpha talk", EventCategory::Past),
        Item::new("m", "Mu talk", EventCategory::Past),
    ];
    let result = filter_and_paginate(
        &items,
        &FilterState::new("talk", CategoryFilter::All, 1),
        PageSize::new(6),
    );
    assert_eq!(keys(&result.items), vec!["z", "a", "m"]);
}

#[test]
fn same_inputs_give_same_output() {
    init_logging();
    let items = numbered(13);
    let state = FilterState::new("item 1", CategoryFilter::Only(EventCategory::Past), 2);
    let first = filter_and_paginate(&items, &state, PageSize::new(3));
    let second = filter_and_paginate(&items, &state, PageSize::new(3));
    assert_eq!(first, second);
    // "item 1", "item 10".."item 13" => 5 matches, page 2 of 3-per-page holds the last two.
    assert_eq!(keys(&first.items), vec!["item-12", "item-13"]);
}

#[test]
fn filter_strings_round_trip_through_display() {
    let parsed: CategoryFilter<EventCategory> = "ALL".parse().unwrap();
    assert_eq!(parsed, CategoryFilter::All);
    let parsed: CategoryFilter<EventCategory> = "future".parse().unwrap();
    assert_eq!(parsed, CategoryFilter::Only(EventCategory::Future));
    assert_eq!(parsed.to_string(), "future");
    assert!("someday".parse::<CategoryFilter<EventCategory>>().is_err());
}
