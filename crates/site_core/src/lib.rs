//! Site core: hardcoded content store and the pure list/image state machines.
mod content;
mod date;
mod effect;
mod filter;
mod image;
mod msg;
mod state;
mod store;
mod update;
mod view_model;

pub use content::{
    Event, EventCategory, Listable, ParseCategoryError, Publication, PublicationKind,
    Registration, ScheduleItem, Speaker, TeamMember, Video, VideoPlatform, FACEBOOK_THUMBNAIL,
};
pub use date::format_long_date;
pub use effect::Effect;
pub use filter::{
    clamp_page, filter_and_paginate, filter_items, matches, max_page, page_slice, total_pages,
    CategoryFilter, FilterState, PageResult, PageSize, ALL_FILTER,
};
pub use image::{FallbackAsset, ImageRef, ImageSlot, ImageState};
pub use msg::ListMsg;
pub use state::ListState;
pub use store::{find_event, related_events, EVENTS, PUBLICATIONS, TEAM, VIDEOS};
pub use update::{init, update};
pub use view_model::{no_results_message, pager_view, ListViewModel, PagerButton, PagerView};
