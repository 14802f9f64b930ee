use std::str::FromStr;

use anyhow::{anyhow, bail, Context};
use site_core::{
    find_event, init, related_events, update, CategoryFilter, ListMsg, PageSize, EVENTS,
    PUBLICATIONS, VIDEOS,
};
use site_engine::{BuildEvent, BuildSummary, EngineHandle, SiteSettings, RELATED_EVENT_LIMIT};
use site_logging::{site_debug, site_info, site_warn};

use crate::cli::SectionArg;
use crate::terminal::{format_event, format_list, TextLine};

/// Hands the build to the engine thread and follows its events to completion.
pub fn run_build(settings: SiteSettings) -> anyhow::Result<BuildSummary> {
    let engine = EngineHandle::new();
    site_info!(
        "starting build into {} (remote image checks {})",
        settings.output_dir.display(),
        if settings.probe.check_remote { "on" } else { "off" }
    );
    engine.start_build(settings);

    while let Some(event) = engine.recv() {
        match event {
            BuildEvent::StageChanged(stage) => site_info!("stage: {stage:?}"),
            BuildEvent::PageWritten { route, bytes } => site_debug!("wrote {route} ({bytes} bytes)"),
            BuildEvent::ImageFellBack(record) => {
                site_warn!("{} -> {}: {}", record.src, record.fallback, record.reason)
            }
            BuildEvent::Completed(result) => return result.map_err(|err| anyhow!(err)),
        }
    }
    bail!("engine stopped before the build completed")
}

/// Drives a fresh list state with search, then category, then page.
pub fn run_list(
    settings: &SiteSettings,
    section: SectionArg,
    search: &str,
    category: &str,
    page: usize,
) -> anyhow::Result<String> {
    match section {
        SectionArg::Events => list_page(
            "Events",
            EVENTS,
            settings.events_page_size,
            search,
            category,
            page,
        ),
        SectionArg::Videos => list_page(
            "Videos",
            VIDEOS,
            settings.videos_page_size,
            search,
            category,
            page,
        ),
        SectionArg::Publications => list_page(
            "Publications",
            PUBLICATIONS,
            settings.publications_page_size,
            search,
            category,
            page,
        ),
    }
}

fn list_page<T: TextLine>(
    title: &str,
    items: &[T],
    page_size: usize,
    search: &str,
    category: &str,
    page: usize,
) -> anyhow::Result<String> {
    let filter = CategoryFilter::<T::Category>::from_str(category)
        .with_context(|| format!("invalid --category for {}", T::NOUN))?;

    let (mut state, effects) = init(items, PageSize::new(page_size));
    for effect in effects {
        site_debug!("effect: {effect:?}");
    }
    for msg in [
        ListMsg::SearchChanged(search.to_string()),
        ListMsg::CategorySelected(filter),
        ListMsg::PageSelected(page),
    ] {
        let (next, effects) = update(state, msg);
        for effect in effects {
            site_debug!("effect: {effect:?}");
        }
        state = next;
    }
    if state.current_page() != page {
        site_info!("page {} is out of range, showing page {}", page, state.current_page());
    }
    Ok(format_list(title, &state.view()))
}

pub fn run_show(id: &str) -> anyhow::Result<String> {
    let event = find_event(id).ok_or_else(|| anyhow!("event '{id}' not found"))?;
    let related = related_events(EVENTS, event, RELATED_EVENT_LIMIT);
    Ok(format_event(event, &related))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn list_applies_search_category_then_page() {
        let settings = SiteSettings::default();
        let text = run_list(&settings, SectionArg::Events, "", "past", 2).unwrap();
        assert!(text.starts_with("Events: 8 matching, filter past, page 2 of 2\n"));
        assert_eq!(text.lines().filter(|line| line.starts_with("  [past]")).count(), 2);
    }

    #[test]
    fn list_clamps_out_of_range_pages() {
        let settings = SiteSettings::default();
        let text = run_list(&settings, SectionArg::Videos, "", "all", 9).unwrap();
        assert!(text.starts_with("Videos: 16 matching, filter all, page 2 of 2\n"));
    }

    #[test]
    fn list_rejects_unknown_categories() {
        let settings = SiteSettings::default();
        let err = run_list(&settings, SectionArg::Publications, "", "podcast", 1).unwrap_err();
        assert!(format!("{err:#}").contains("unknown publication kind 'podcast'"));
    }

    #[test]
    fn show_reports_missing_events() {
        let err = run_show("no-such-event").unwrap_err();
        assert_eq!(err.to_string(), "event 'no-such-event' not found");
        assert!(run_show("brain-health-expo").is_ok());
    }
}
