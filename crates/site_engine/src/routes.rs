//! URL layout of the generated site and the files that back each route.

use site_core::CategoryFilter;

pub const HOME_ROUTE: &str = "/";
pub const NOT_FOUND_FILE: &str = "404.html";
pub const MANIFEST_FILE: &str = "manifest.json";

/// Path segments that list routes use after the section.
pub const RESERVED_SEGMENTS: &[&str] = &["page", "filter"];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Section {
    Events,
    Videos,
    Publications,
}

impl Section {
    pub const ALL: [Section; 3] = [Section::Events, Section::Videos, Section::Publications];

    pub fn slug(self) -> &'static str {
        match self {
            Section::Events => "events",
            Section::Videos => "videos",
            Section::Publications => "publications",
        }
    }

    pub fn title(self) -> &'static str {
        match self {
            Section::Events => "Events",
            Section::Videos => "Videos",
            Section::Publications => "Publications",
        }
    }
}

impl std::str::FromStr for Section {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Section::ALL
            .into_iter()
            .find(|section| section.slug().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| format!("unknown section '{s}'"))
    }
}

/// `/{section}/`, `/{section}/page/{n}/`, `/{section}/filter/{cat}/` or both.
pub fn list_route<C: std::fmt::Display>(
    section: Section,
    filter: &CategoryFilter<C>,
    page: usize,
) -> String {
    let mut route = format!("/{}/", section.slug());
    if let CategoryFilter::Only(category) = filter {
        route.push_str(&format!("filter/{}/", sanitize_segment(&category.to_string())));
    }
    if page > 1 {
        route.push_str(&format!("page/{page}/"));
    }
    route
}

pub fn event_route(id: &str) -> String {
    format!("/events/{}/", sanitize_segment(id))
}

/// Output file, relative to the site root, that serves `route`.
pub fn route_file(route: &str) -> String {
    let trimmed = route.trim_matches('/');
    if trimmed.is_empty() {
        "index.html".to_string()
    } else {
        format!("{trimmed}/index.html")
    }
}

pub fn is_reserved(id: &str) -> bool {
    let segment = sanitize_segment(id);
    RESERVED_SEGMENTS.iter().any(|r| r.eq_ignore_ascii_case(&segment))
}

/// Lowercase, path-safe segment: unsafe characters become `-`, runs collapse.
pub fn sanitize_segment(input: &str) -> String {
    let mut cleaned = String::with_capacity(input.len());
    let mut prev_dash = false;
    for c in input.trim().chars() {
        if c.is_ascii_alphanumeric() || c == '_' {
            cleaned.push(c.to_ascii_lowercase());
            prev_dash = false;
        } else if !prev_dash {
            cleaned.push('-');
            prev_dash = true;
        }
    }
    let cleaned = cleaned.trim_matches('-').to_string();
    if cleaned.is_empty() {
        "untitled".to_string()
    } else {
        cleaned
    }
}

/// Joins a site-relative route or asset path onto the base URL.
pub fn absolute_url(base_url: &str, route: &str) -> String {
    match url::Url::parse(base_url).and_then(|base| base.join(route)) {
        Ok(joined) => joined.to_string(),
        Err(_) => format!("{}{}", base_url.trim_end_matches('/'), route),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn collapses_unsafe_characters() {
        assert_eq!(sanitize_segment("  Brain / Health: Expo!! "), "brain-health-expo");
        assert_eq!(sanitize_segment("../.."), "untitled");
    }
}
