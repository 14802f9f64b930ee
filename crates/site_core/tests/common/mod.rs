#![allow(dead_code)]

use std::sync::Once;

use site_core::{EventCategory, FallbackAsset, ImageRef, Listable};

pub fn init_logging() {
    static INIT: Once = Once::new();
    INIT.call_once(site_logging::initialize_for_tests);
}

/// Minimal listable record so tests control the data set exactly.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Item {
    pub key: String,
    pub title: String,
    pub location: String,
    pub category: EventCategory,
}

impl Item {
    pub fn new(key: &str, title: &str, category: EventCategory) -> Self {
        Self {
            key: key.to_string(),
            title: title.to_string(),
            location: String::new(),
            category,
        }
    }

    pub fn at(mut self, location: &str) -> Self {
        self.location = location.to_string();
        self
    }
}

impl Listable for Item {
    type Category = EventCategory;
    const NOUN: &'static str = "events";

    fn key(&self) -> &str {
        &self.key
    }

    fn category(&self) -> EventCategory {
        self.category
    }

    fn searchable_fields(&self) -> Vec<&str> {
        vec![self.title.as_str(), self.location.as_str()]
    }

    fn image(&self) -> Option<ImageRef> {
        Some(ImageRef::new(
            format!("/images/{}.png", self.key),
            FallbackAsset::Event,
        ))
    }

    fn categories() -> &'static [EventCategory] {
        EventCategory::ALL
    }
}

/// `count` past items keyed `item-1..=item-count`.
pub fn numbered(count: usize) -> Vec<Item> {
    (1..=count)
        .map(|n| Item::new(&format!("item-{n}"), &format!("Item {n}"), EventCategory::Past))
        .collect()
}

pub fn keys<'a>(items: &[&'a Item]) -> Vec<&'a str> {
    items.iter().map(|item| item.key.as_str()).collect()
}
