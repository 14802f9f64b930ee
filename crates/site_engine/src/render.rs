//! HTML rendering for every page of the site.
//!
//! Pages are plain `format!` templates inside a shared shell. Every dynamic
//! string goes through [`html_escape`] except an event's `full_description`,
//! which is trusted markup from the content store.

use site_core::{
    format_long_date, filter_items, CategoryFilter, Event, FilterState, ImageRef, ImageSlot,
    Listable, ListState, PagerButton, Publication, TeamMember, Video, FallbackAsset,
};

use crate::images::ImageTable;
use crate::routes::{absolute_url, event_route, list_route, Section, HOME_ROUTE};

pub const NO_RELATED_EVENTS: &str = "No related events found.";

pub struct RenderContext<'a> {
    pub site_name: &'a str,
    pub base_url: &'a str,
    pub images: &'a ImageTable,
}

pub fn html_escape(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#39;")
}

/// `<img>` for one slot. While the slot is on its original source the tag
/// carries a one-shot `onerror` that swaps to the placeholder and disarms itself.
pub fn render_img(slot: &ImageSlot, class: &str) -> String {
    let onerror = if slot.is_fallback() {
        String::new()
    } else {
        format!(
            " onerror=\"this.onerror=null;this.src='{}'\"",
            html_escape(slot.fallback_src())
        )
    };
    format!(
        "<img class=\"{class}\" src=\"{src}\" alt=\"{alt}\" loading=\"lazy\" data-fallback=\"{fallback}\"{onerror}>",
        src = html_escape(slot.current_src()),
        alt = html_escape(slot.alt()),
        fallback = html_escape(slot.fallback_src()),
    )
}

fn page_shell(ctx: &RenderContext<'_>, title: &str, route: &str, body: &str) -> String {
    let nav: String = Section::ALL
        .iter()
        .map(|section| {
            format!(
                "<a href=\"{}\">{}</a>",
                list_route::<&str>(*section, &CategoryFilter::All, 1),
                section.title()
            )
        })
        .collect::<Vec<_>>()
        .join("\n      ");
    let site = html_escape(ctx.site_name);
    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
  <meta charset="utf-8">
  <meta name="viewport" content="width=device-width, initial-scale=1">
  <title>{title} | {site}</title>
  <link rel="canonical" href="{canonical}">
</head>
<body>
  <header class="site-header">
    <a class="brand" href="{home}">{site}</a>
    <nav>
      {nav}
    </nav>
  </header>
  <main>
{body}
  </main>
  <footer class="site-footer">
    <p>&copy; {site}</p>
  </footer>
</body>
</html>
"#,
        title = html_escape(title),
        canonical = html_escape(&absolute_url(ctx.base_url, route)),
        home = HOME_ROUTE,
    )
}

pub fn render_home(ctx: &RenderContext<'_>, team: &[TeamMember], upcoming: &[&Event]) -> String {
    let sections: String = Section::ALL
        .iter()
        .map(|section| {
            format!(
                "      <li><a href=\"{}\">{}</a></li>\n",
                list_route::<&str>(*section, &CategoryFilter::All, 1),
                section.title()
            )
        })
        .collect();
    let upcoming_html = if upcoming.is_empty() {
        "    <p class=\"empty\">No events available.</p>\n".to_string()
    } else {
        let cards: String = upcoming.iter().map(|event| event.card(ctx)).collect();
        format!("    <div class=\"grid\">\n{cards}    </div>\n")
    };
    let members: String = team
        .iter()
        .map(|member| {
            format!(
                "      <article class=\"member\">\n        <div class=\"avatar\">{initials}</div>\n        <h3>{name}</h3>\n        <p class=\"role\">{role}</p>\n        <p>{bio}</p>\n      </article>\n",
                initials = html_escape(&member.initials()),
                name = html_escape(member.name),
                role = html_escape(member.role),
                bio = html_escape(member.bio),
            )
        })
        .collect();
    let body = format!(
        "  <section class=\"hero\">\n    <h1>{site}</h1>\n    <ul class=\"sections\">\n{sections}    </ul>\n  </section>\n  <section class=\"upcoming\">\n    <h2>Upcoming Events</h2>\n{upcoming_html}  </section>\n  <section class=\"team\">\n    <h2>Our Team</h2>\n    <div class=\"grid\">\n{members}    </div>\n  </section>\n",
        site = html_escape(ctx.site_name),
    );
    page_shell(ctx, "Home", HOME_ROUTE, &body)
}

/// Card markup for one list item.
pub trait Card: Listable {
    fn card(&self, ctx: &RenderContext<'_>) -> String;
}

impl Card for Event {
    fn card(&self, ctx: &RenderContext<'_>) -> String {
        let image = ImageRef::new(self.image_url, FallbackAsset::Event);
        let slot = ctx.images.slot(&image, self.title);
        format!(
            "      <article class=\"card event\" data-key=\"{id}\">\n        {img}\n        <span class=\"badge {category}\">{label}</span>\n        <h3><a href=\"{href}\">{title}</a></h3>\n        <p class=\"meta\">{date} &middot; {location}</p>\n        <p>{description}</p>\n      </article>\n",
            id = html_escape(self.id),
            img = render_img(&slot, "card-image"),
            category = self.category,
            label = self.category.label(),
            href = event_route(self.id),
            title = html_escape(self.title),
            date = html_escape(&format_long_date(self.date)),
            location = html_escape(self.location),
            description = html_escape(self.description),
        )
    }
}

impl Card for Video {
    fn card(&self, ctx: &RenderContext<'_>) -> String {
        let image = ImageRef::new(self.thumbnail_url(), FallbackAsset::Video);
        let slot = ctx.images.slot(&image, self.title);
        let title = match self.watch_url() {
            Some(url) => format!(
                "<a href=\"{}\" target=\"_blank\" rel=\"noopener noreferrer\">{}</a>",
                html_escape(&url),
                html_escape(self.title)
            ),
            None => html_escape(self.title),
        };
        format!(
            "      <article class=\"card video\" data-key=\"{key}\">\n        {img}\n        <span class=\"badge {platform}\">{label}</span>\n        <h3>{title}</h3>\n      </article>\n",
            key = html_escape(self.key()),
            img = render_img(&slot, "thumbnail"),
            platform = self.platform,
            label = self.platform.label(),
        )
    }
}

impl Card for Publication {
    fn card(&self, _ctx: &RenderContext<'_>) -> String {
        format!(
            "      <article class=\"card publication\" data-key=\"{key}\">\n        <span class=\"badge {kind}\">{label}</span>\n        <h3><a href=\"{link}\" target=\"_blank\" rel=\"noopener noreferrer\">{title}</a></h3>\n        <p>{description}</p>\n      </article>\n",
            key = html_escape(self.key()),
            kind = self.kind,
            label = self.kind.label(),
            link = html_escape(self.link),
            title = html_escape(self.title),
            description = html_escape(self.description),
        )
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilterChip {
    pub label: String,
    pub href: String,
    pub count: usize,
    pub active: bool,
}

/// Category chips with the number of items each would show under the current search.
pub fn filter_chips<T: Listable>(section: Section, state: &ListState<'_, T>) -> Vec<FilterChip> {
    let active = state.category();
    let count_for = |category: CategoryFilter<T::Category>| {
        let probe = FilterState::new(state.search_term(), category, 1);
        filter_items(state.items(), &probe).len()
    };

    let mut chips = vec![FilterChip {
        label: "All".to_string(),
        href: list_route(section, &CategoryFilter::<T::Category>::All, 1),
        count: count_for(CategoryFilter::All),
        active: active.is_all(),
    }];
    for category in T::categories() {
        let filter = CategoryFilter::Only(*category);
        chips.push(FilterChip {
            label: category.to_string(),
            href: list_route(section, &filter, 1),
            count: count_for(filter),
            active: active == filter,
        });
    }
    chips
}

pub fn render_list<T: Card>(
    ctx: &RenderContext<'_>,
    section: Section,
    state: &ListState<'_, T>,
) -> String {
    let view = state.view();
    let route = list_route(section, &state.category(), view.current_page);

    let chips: String = filter_chips(section, state)
        .into_iter()
        .map(|chip| {
            let class = if chip.active { "chip active" } else { "chip" };
            format!(
                "      <a class=\"{class}\" href=\"{}\">{} <span class=\"count\">{}</span></a>\n",
                chip.href,
                html_escape(&chip.label),
                chip.count
            )
        })
        .collect();

    let content = match &view.empty_message {
        Some(message) => format!("    <p class=\"empty\">{}</p>\n", html_escape(message)),
        None => {
            let cards: String = view.items.iter().map(|item| item.card(ctx)).collect();
            format!("    <div class=\"grid\">\n{cards}    </div>\n")
        }
    };

    let pager = view
        .pager
        .as_ref()
        .map(|pager| {
            let category = state.category();
            let link = |page: usize, label: &str, disabled: bool| {
                if disabled {
                    format!("<span class=\"disabled\">{label}</span>")
                } else {
                    format!("<a href=\"{}\">{label}</a>", list_route(section, &category, page))
                }
            };
            let mut parts = vec![link(
                pager.current_page.saturating_sub(1),
                "&laquo; Previous",
                pager.prev_disabled,
            )];
            for button in &pager.buttons {
                parts.push(match button {
                    PagerButton::Page { number, active: true } => {
                        format!("<span class=\"current\" aria-current=\"page\">{number}</span>")
                    }
                    PagerButton::Page { number, active: false } => {
                        link(*number, &number.to_string(), false)
                    }
                    PagerButton::Ellipsis => "<span class=\"ellipsis\">&hellip;</span>".to_string(),
                });
            }
            parts.push(link(
                pager.current_page + 1,
                "Next &raquo;",
                pager.next_disabled,
            ));
            format!("    <nav class=\"pager\">\n      {}\n    </nav>\n", parts.join("\n      "))
        })
        .unwrap_or_default();

    let body = format!(
        "  <section class=\"list {slug}\">\n    <h1>{title}</h1>\n    <div class=\"filters\">\n{chips}    </div>\n{content}{pager}  </section>\n",
        slug = section.slug(),
        title = section.title(),
    );
    let title = if view.current_page > 1 {
        format!("{} (page {})", section.title(), view.current_page)
    } else {
        section.title().to_string()
    };
    page_shell(ctx, &title, &route, &body)
}

/// Share targets for a page, percent-encoded.
pub fn share_links(page_url: &str, title: &str) -> Vec<(&'static str, String)> {
    let query = |pairs: &[(&str, &str)]| {
        let mut serializer = url::form_urlencoded::Serializer::new(String::new());
        for (key, value) in pairs {
            serializer.append_pair(key, value);
        }
        serializer.finish()
    };
    let encode = |value: &str| {
        url::form_urlencoded::byte_serialize(value.as_bytes())
            .collect::<String>()
            .replace('+', "%20")
    };
    vec![
        (
            "Twitter",
            format!(
                "https://twitter.com/intent/tweet?{}",
                query(&[("url", page_url), ("text", title)])
            ),
        ),
        (
            "Facebook",
            format!(
                "https://www.facebook.com/sharer/sharer.php?{}",
                query(&[("u", page_url)])
            ),
        ),
        (
            "LinkedIn",
            format!(
                "https://www.linkedin.com/sharing/share-offsite/?{}",
                query(&[("url", page_url)])
            ),
        ),
        (
            "Email",
            format!(
                "mailto:?subject={}&body={}",
                encode(title),
                encode(&format!("Check out this event: {page_url}"))
            ),
        ),
    ]
}

pub fn render_event(ctx: &RenderContext<'_>, event: &Event, related: &[&Event]) -> String {
    let route = event_route(event.id);
    let hero = ctx
        .images
        .slot(&ImageRef::new(event.image_url, FallbackAsset::Event), event.title);

    let mut body = format!(
        "  <article class=\"event-detail\">\n    <p><a href=\"{back}\">&larr; Back to events</a></p>\n    {img}\n    <span class=\"badge {category}\">{label}</span>\n    <h1>{title}</h1>\n    <p class=\"meta\"><time datetime=\"{raw_date}\">{date}</time> &middot; {location}</p>\n    <div class=\"description\">\n{description}\n    </div>\n",
        back = list_route::<&str>(Section::Events, &CategoryFilter::All, 1),
        img = render_img(&hero, "hero-image"),
        category = event.category,
        label = event.category.label(),
        title = html_escape(event.title),
        raw_date = html_escape(event.date),
        date = html_escape(&format_long_date(event.date)),
        location = html_escape(event.location),
        description = event.full_description,
    );

    if !event.schedule.is_empty() {
        let rows: String = event
            .schedule
            .iter()
            .map(|item| {
                format!(
                    "        <li><span class=\"time\">{}</span> {}</li>\n",
                    html_escape(item.time),
                    html_escape(item.activity)
                )
            })
            .collect();
        body.push_str(&format!(
            "    <section class=\"schedule\">\n      <h2>Schedule</h2>\n      <ul>\n{rows}      </ul>\n    </section>\n"
        ));
    }

    if !event.speakers.is_empty() {
        let speakers: String = event
            .speakers
            .iter()
            .map(|speaker| {
                format!(
                    "        <li><strong>{}</strong>, {}<br><em>{}</em></li>\n",
                    html_escape(speaker.name),
                    html_escape(speaker.affiliation),
                    html_escape(speaker.topic)
                )
            })
            .collect();
        body.push_str(&format!(
            "    <section class=\"speakers\">\n      <h2>Speakers</h2>\n      <ul>\n{speakers}      </ul>\n    </section>\n"
        ));
    }

    if !event.gallery.is_empty() {
        let images: String = event
            .gallery
            .iter()
            .enumerate()
            .map(|(index, src)| {
                let alt = format!("{} photo {}", event.title, index + 1);
                let slot = ctx
                    .images
                    .slot(&ImageRef::new(*src, FallbackAsset::Event), &alt);
                format!("        {}\n", render_img(&slot, "gallery-image"))
            })
            .collect();
        body.push_str(&format!(
            "    <section class=\"gallery\">\n      <h2>Gallery</h2>\n      <div class=\"grid\">\n{images}      </div>\n    </section>\n"
        ));
    }

    if let Some(registration) = event.open_registration() {
        let spots = registration
            .limited_spots
            .map(|spots| format!("      <p class=\"spots\">Limited to {spots} participants</p>\n"))
            .unwrap_or_default();
        body.push_str(&format!(
            "    <section class=\"registration\">\n      <h2>Registration</h2>\n      <p>Deadline: {deadline}</p>\n      <p>Fee: {fee}</p>\n{spots}      <a class=\"button\" href=\"{link}\">Register Now</a>\n    </section>\n",
            deadline = html_escape(&format_long_date(registration.deadline)),
            fee = html_escape(registration.fee),
            link = html_escape(registration.link),
        ));
    }

    let page_url = absolute_url(ctx.base_url, &route);
    let shares: String = share_links(&page_url, event.title)
        .into_iter()
        .map(|(label, href)| {
            format!(
                "      <a class=\"share {}\" href=\"{}\" target=\"_blank\" rel=\"noopener noreferrer\">{label}</a>\n",
                label.to_ascii_lowercase(),
                html_escape(&href)
            )
        })
        .collect();
    body.push_str(&format!(
        "    <section class=\"share\">\n      <h2>Share</h2>\n{shares}    </section>\n"
    ));

    let related_html = if related.is_empty() {
        format!("      <p class=\"empty\">{NO_RELATED_EVENTS}</p>\n")
    } else {
        let cards: String = related.iter().map(|other| other.card(ctx)).collect();
        format!("      <div class=\"grid\">\n{cards}      </div>\n")
    };
    body.push_str(&format!(
        "    <section class=\"related\">\n      <h2>Related Events</h2>\n{related_html}    </section>\n  </article>\n"
    ));

    page_shell(ctx, event.title, &route, &body)
}

pub fn render_not_found(ctx: &RenderContext<'_>) -> String {
    let body = format!(
        "  <section class=\"not-found\">\n    <h1>Page not found</h1>\n    <p>The page you are looking for does not exist.</p>\n    <p><a href=\"{HOME_ROUTE}\">Return home</a></p>\n  </section>\n"
    );
    page_shell(ctx, "Not found", "/404.html", &body)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn escapes_markup_and_quotes() {
        assert_eq!(
            html_escape("<a href=\"x\">Tom & Jerry's</a>"),
            "&lt;a href=&quot;x&quot;&gt;Tom &amp; Jerry&#39;s&lt;/a&gt;"
        );
    }

    #[test]
    fn fallback_image_has_no_error_handler() {
        let mut slot = ImageSlot::new("/images/a.png", "A", FallbackAsset::Event);
        assert!(render_img(&slot, "x").contains("onerror=\"this.onerror=null;"));
        slot.on_load_error();
        let html = render_img(&slot, "x");
        assert!(html.contains("src=\"/images/event-placeholder.svg\""));
        assert!(!html.contains("onerror"));
    }
}
