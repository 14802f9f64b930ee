use std::collections::BTreeSet;
use std::path::PathBuf;

use site_core::{
    related_events, update, CategoryFilter, Event, EventCategory, FallbackAsset, ImageRef,
    Listable, ListMsg, ListState, PageSize, EVENTS, PUBLICATIONS, TEAM, VIDEOS,
};
use site_logging::{site_debug, site_info, site_warn};

use crate::images::probe_images;
use crate::manifest::write_manifest;
use crate::persist::{ensure_output_dir, AtomicFileWriter};
use crate::probe::{ImageProbe, ProbeSettings};
use crate::render::{
    render_event, render_home, render_list, render_not_found, Card, RenderContext,
};
use crate::routes::{
    event_route, is_reserved, list_route, route_file, Section, HOME_ROUTE, NOT_FOUND_FILE,
};
use crate::{BuildError, BuildEvent, BuildSummary, PageRecord, Stage};

pub const RELATED_EVENT_LIMIT: usize = 3;
pub const HOME_UPCOMING_LIMIT: usize = 3;

#[derive(Debug, Clone)]
pub struct SiteSettings {
    pub site_name: String,
    pub base_url: String,
    pub output_dir: PathBuf,
    pub events_page_size: usize,
    pub videos_page_size: usize,
    pub publications_page_size: usize,
    pub probe: ProbeSettings,
}

impl Default for SiteSettings {
    fn default() -> Self {
        Self {
            site_name: "Neuroscience Society".to_string(),
            base_url: "https://example.org/".to_string(),
            output_dir: PathBuf::from("public"),
            events_page_size: 6,
            videos_page_size: 8,
            publications_page_size: 10,
            probe: ProbeSettings::default(),
        }
    }
}

pub trait ProgressSink: Send + Sync {
    fn emit(&self, event: BuildEvent);
}

pub struct ChannelProgressSink {
    tx: std::sync::mpsc::Sender<BuildEvent>,
}

impl ChannelProgressSink {
    pub fn new(tx: std::sync::mpsc::Sender<BuildEvent>) -> Self {
        Self { tx }
    }
}

impl ProgressSink for ChannelProgressSink {
    fn emit(&self, event: BuildEvent) {
        let _ = self.tx.send(event);
    }
}

/// Every image source any page can show.
pub fn collect_images() -> Vec<ImageRef> {
    let mut images: Vec<ImageRef> = EVENTS.iter().filter_map(Listable::image).collect();
    images.extend(EVENTS.iter().flat_map(|event| {
        event
            .gallery
            .iter()
            .map(|src| ImageRef::new(*src, FallbackAsset::Event))
    }));
    images.extend(VIDEOS.iter().filter_map(Listable::image));
    images.extend(PUBLICATIONS.iter().filter_map(Listable::image));
    images
}

/// Builds the whole site into `settings.output_dir`. Does not emit `Completed`.
pub async fn build_site(
    settings: &SiteSettings,
    probe: &dyn ImageProbe,
    sink: &dyn ProgressSink,
) -> Result<BuildSummary, BuildError> {
    sink.emit(BuildEvent::StageChanged(Stage::Preparing));
    check_event_ids(EVENTS)?;
    ensure_output_dir(&settings.output_dir)?;
    site_info!("building site into {}", settings.output_dir.display());

    sink.emit(BuildEvent::StageChanged(Stage::ProbingImages));
    let images = probe_images(probe, collect_images(), settings.probe.concurrency).await;
    let fallbacks = images.fallbacks();
    for record in &fallbacks {
        sink.emit(BuildEvent::ImageFellBack(record.clone()));
    }
    site_info!(
        "checked {} image sources, {} fell back",
        images.checked(),
        fallbacks.len()
    );

    sink.emit(BuildEvent::StageChanged(Stage::Rendering));
    let ctx = RenderContext {
        site_name: &settings.site_name,
        base_url: &settings.base_url,
        images: &images,
    };
    let mut pages = PageSink::new(AtomicFileWriter::new(settings.output_dir.clone()), sink);

    let upcoming: Vec<&Event> = EVENTS
        .iter()
        .filter(|event| event.category == EventCategory::Future)
        .take(HOME_UPCOMING_LIMIT)
        .collect();
    pages.write(HOME_ROUTE, &render_home(&ctx, TEAM, &upcoming))?;

    write_section(&mut pages, &ctx, Section::Events, EVENTS, settings.events_page_size)?;
    write_section(&mut pages, &ctx, Section::Videos, VIDEOS, settings.videos_page_size)?;
    write_section(
        &mut pages,
        &ctx,
        Section::Publications,
        PUBLICATIONS,
        settings.publications_page_size,
    )?;

    for event in EVENTS {
        let related = related_events(EVENTS, event, RELATED_EVENT_LIMIT);
        pages.write(&event_route(event.id), &render_event(&ctx, event, &related))?;
    }

    pages.write_file("/404.html", NOT_FOUND_FILE, &render_not_found(&ctx))?;
    let records = pages.finish();

    sink.emit(BuildEvent::StageChanged(Stage::WritingManifest));
    let manifest_path = write_manifest(&settings.output_dir, &records, &fallbacks)?;

    sink.emit(BuildEvent::StageChanged(Stage::Done));
    site_info!("wrote {} pages", records.len());
    Ok(BuildSummary {
        output_dir: settings.output_dir.clone(),
        pages: records,
        fallbacks,
        images_checked: images.checked(),
        manifest_path,
    })
}

/// Event ids become path segments under `/events/`, next to the list routes.
pub fn check_event_ids(events: &[Event]) -> Result<(), BuildError> {
    let mut seen = BTreeSet::new();
    for event in events {
        if is_reserved(event.id) {
            return Err(BuildError::ReservedRoute(event.id.to_string()));
        }
        let route = event_route(event.id);
        if !seen.insert(route.clone()) {
            return Err(BuildError::DuplicateRoute(route));
        }
    }
    Ok(())
}

/// Renders every category filter and page of one section.
///
/// Pages are reached by feeding `PageSelected` through the list update loop,
/// so every written page is one the state machine can actually land on.
fn write_section<T: Card>(
    pages: &mut PageSink<'_>,
    ctx: &RenderContext<'_>,
    section: Section,
    items: &[T],
    page_size: usize,
) -> Result<(), BuildError> {
    let filters = std::iter::once(CategoryFilter::All)
        .chain(T::categories().iter().copied().map(CategoryFilter::Only));

    for filter in filters {
        let (mut state, _) = update(
            ListState::new(items, PageSize::new(page_size)),
            ListMsg::CategorySelected(filter),
        );
        let mut page = 1;
        loop {
            if state.current_page() != page {
                site_warn!(
                    "{} {}: page {} clamped to {}",
                    section.slug(),
                    filter,
                    page,
                    state.current_page()
                );
                break;
            }
            let route = list_route(section, &filter, page);
            pages.write(&route, &render_list(ctx, section, &state))?;
            site_debug!("{route}: {} items", state.visible().len());

            if page >= state.max_page() {
                break;
            }
            page += 1;
            let (next, _) = update(state, ListMsg::PageSelected(page));
            state = next;
        }
    }
    Ok(())
}

struct PageSink<'a> {
    writer: AtomicFileWriter,
    sink: &'a dyn ProgressSink,
    records: Vec<PageRecord>,
    routes: BTreeSet<String>,
}

impl<'a> PageSink<'a> {
    fn new(writer: AtomicFileWriter, sink: &'a dyn ProgressSink) -> Self {
        Self {
            writer,
            sink,
            records: Vec::new(),
            routes: BTreeSet::new(),
        }
    }

    fn write(&mut self, route: &str, html: &str) -> Result<(), BuildError> {
        self.write_file(route, &route_file(route), html)
    }

    fn write_file(&mut self, route: &str, file: &str, html: &str) -> Result<(), BuildError> {
        if !self.routes.insert(route.to_string()) {
            return Err(BuildError::DuplicateRoute(route.to_string()));
        }
        let path = self.writer.write(file, html)?;
        let bytes = html.len() as u64;
        self.sink.emit(BuildEvent::PageWritten {
            route: route.to_string(),
            bytes,
        });
        self.records.push(PageRecord {
            route: route.to_string(),
            path,
            bytes,
        });
        Ok(())
    }

    fn finish(self) -> Vec<PageRecord> {
        self.records
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn store_ids_are_routable() {
        assert!(check_event_ids(EVENTS).is_ok());
    }

    #[test]
    fn image_list_covers_cards_and_galleries() {
        let images = collect_images();
        assert!(images.iter().any(|image| image.src.starts_with("https://img.youtube.com/")));
        let gallery_total: usize = EVENTS.iter().map(|event| event.gallery.len()).sum();
        assert!(images.len() >= EVENTS.len() + gallery_total + VIDEOS.len());
        assert!(images
            .iter()
            .all(|image| image.asset != FallbackAsset::Generic));
    }
}
