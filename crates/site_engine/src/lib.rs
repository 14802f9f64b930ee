//! Site engine: image probing, HTML rendering and the static build pipeline.
mod engine;
mod images;
mod manifest;
mod persist;
mod probe;
mod render;
mod routes;
mod site;
mod types;

pub use engine::EngineHandle;
pub use images::{probe_images, ImageTable};
pub use manifest::{manifest_json, write_manifest};
pub use persist::{ensure_output_dir, AtomicFileWriter, PersistError};
pub use probe::{ImageProbe, ProbeSettings, ReqwestProbe};
pub use render::{
    filter_chips, html_escape, render_event, render_home, render_img, render_list,
    render_not_found, share_links, Card, FilterChip, RenderContext, NO_RELATED_EVENTS,
};
pub use routes::{
    absolute_url, event_route, is_reserved, list_route, route_file, sanitize_segment, Section,
    HOME_ROUTE, MANIFEST_FILE, NOT_FOUND_FILE, RESERVED_SEGMENTS,
};
pub use site::{
    build_site, check_event_ids, collect_images, ChannelProgressSink,
    ProgressSink, SiteSettings, HOME_UPCOMING_LIMIT, RELATED_EVENT_LIMIT,
};
pub use types::{
    BuildError, BuildEvent, BuildSummary, FallbackRecord, PageRecord, ProbeError, ProbeFailure,
    Stage,
};
