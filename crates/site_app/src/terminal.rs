//! Plain-text rendering of list pages, event details and build results.

use std::fmt::Write;

use site_core::{
    format_long_date, Event, Listable, ListViewModel, PagerButton, PagerView, Publication, Video,
};
use scraper::{ElementRef, Html, Node, Selector};
use site_engine::{BuildSummary, NO_RELATED_EVENTS};

/// One line per list item.
pub trait TextLine: Listable {
    fn text_line(&self) -> String;
}

impl TextLine for Event {
    fn text_line(&self) -> String {
        format!(
            "[{}] {} | {} | {} ({})",
            self.category,
            self.title,
            format_long_date(self.date),
            self.location,
            self.id
        )
    }
}

impl TextLine for Video {
    fn text_line(&self) -> String {
        match self.watch_url() {
            Some(url) => format!("[{}] {} <{}>", self.platform, self.title, url),
            None => format!("[{}] {}", self.platform, self.title),
        }
    }
}

impl TextLine for Publication {
    fn text_line(&self) -> String {
        format!("[{}] {} <{}>", self.kind, self.title, self.link)
    }
}

pub fn format_list<T: TextLine>(title: &str, view: &ListViewModel<'_, T>) -> String {
    let mut out = String::new();
    let _ = writeln!(
        out,
        "{title}: {} matching, filter {}, page {} of {}",
        view.filtered_count, view.filter, view.current_page, view.total_pages
    );
    if !view.search_term.is_empty() {
        let _ = writeln!(out, "search: \"{}\"", view.search_term);
    }
    if let Some(message) = &view.empty_message {
        let _ = writeln!(out, "{message}");
        return out;
    }
    for item in &view.items {
        let _ = writeln!(out, "  {}", item.text_line());
    }
    if let Some(pager) = &view.pager {
        let _ = writeln!(out, "{}", format_pager(pager));
    }
    out
}

/// `< 1 ... 4 [5] 6 ... 9 >`, with disabled arrows left out.
pub fn format_pager(pager: &PagerView) -> String {
    let mut parts = Vec::new();
    if !pager.prev_disabled {
        parts.push("<".to_string());
    }
    for button in &pager.buttons {
        parts.push(match button {
            PagerButton::Page { number, active: true } => format!("[{number}]"),
            PagerButton::Page { number, active: false } => number.to_string(),
            PagerButton::Ellipsis => "...".to_string(),
        });
    }
    if !pager.next_disabled {
        parts.push(">".to_string());
    }
    parts.join(" ")
}

pub fn format_event(event: &Event, related: &[&Event]) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "{}", event.title);
    let _ = writeln!(
        out,
        "{} | {} | {}",
        format_long_date(event.date),
        event.location,
        event.category.label()
    );
    let _ = writeln!(out);
    let _ = writeln!(out, "{}", strip_tags(event.full_description));

    if !event.schedule.is_empty() {
        let _ = writeln!(out, "\nSchedule");
        for item in event.schedule {
            let _ = writeln!(out, "  {}  {}", item.time, item.activity);
        }
    }
    if !event.speakers.is_empty() {
        let _ = writeln!(out, "\nSpeakers");
        for speaker in event.speakers {
            let _ = writeln!(
                out,
                "  {}, {}: {}",
                speaker.name, speaker.affiliation, speaker.topic
            );
        }
    }
    if let Some(registration) = event.open_registration() {
        let _ = writeln!(out, "\nRegistration");
        let _ = writeln!(
            out,
            "  deadline {} | fee {}",
            format_long_date(registration.deadline),
            registration.fee
        );
        if let Some(spots) = registration.limited_spots {
            let _ = writeln!(out, "  limited to {spots} participants");
        }
        let _ = writeln!(out, "  {}", registration.link);
    }

    let _ = writeln!(out, "\nRelated events");
    if related.is_empty() {
        let _ = writeln!(out, "  {NO_RELATED_EVENTS}");
    }
    for other in related {
        let _ = writeln!(out, "  {}", other.text_line());
    }
    out
}

pub fn format_summary(summary: &BuildSummary) -> String {
    let mut out = format!(
        "Built {} pages into {} ({} images checked, {} fell back)\n",
        summary.pages.len(),
        summary.output_dir.display(),
        summary.images_checked,
        summary.fallbacks.len()
    );
    for record in &summary.fallbacks {
        let _ = writeln!(out, "  {} -> {} ({})", record.src, record.fallback, record.reason);
    }
    let _ = writeln!(out, "Manifest: {}", summary.manifest_path.display());
    out
}

const BLOCK_SELECTOR: &str = "p, li, h2, h3, h4, blockquote";

/// Plain text of trusted HTML, one line per block element.
fn strip_tags(html: &str) -> String {
    let fragment = Html::parse_fragment(html);
    let root = fragment.root_element();
    let mut blocks = Vec::new();
    if let Ok(selector) = Selector::parse(BLOCK_SELECTOR) {
        for block in fragment.select(&selector) {
            let nested = block
                .ancestors()
                .filter_map(ElementRef::wrap)
                .any(|parent| selector.matches(&parent));
            if !nested {
                blocks.push(block_text(block));
            }
        }
    }
    if blocks.is_empty() {
        blocks.push(block_text(root));
    }
    blocks
        .iter()
        .flat_map(|block| block.lines())
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .collect::<Vec<_>>()
        .join("\n")
}

/// Entity-decoded text under `element`; `<br>` becomes a line break.
fn block_text(element: ElementRef<'_>) -> String {
    let mut text = String::new();
    for node in element.descendants() {
        match node.value() {
            Node::Text(chunk) => text.push_str(chunk),
            Node::Element(tag) if tag.name() == "br" => text.push('\n'),
            _ => {}
        }
    }
    text
}
