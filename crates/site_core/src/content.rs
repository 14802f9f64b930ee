use std::fmt;
use std::str::FromStr;

use thiserror::Error;

use crate::image::{FallbackAsset, ImageRef};

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown {kind} '{value}'")]
pub struct ParseCategoryError {
    pub kind: &'static str,
    pub value: String,
}

/// A record that can be shown in a filterable, paginated list.
pub trait Listable {
    type Category: 'static + Copy + Eq + fmt::Debug + fmt::Display + FromStr<Err = ParseCategoryError>;

    /// Plural noun used in counts and empty-state messages.
    const NOUN: &'static str;

    fn key(&self) -> &str;
    fn category(&self) -> Self::Category;
    /// Text fields the search term is matched against.
    fn searchable_fields(&self) -> Vec<&str>;
    fn image(&self) -> Option<ImageRef>;

    /// Every category value, in chip order.
    fn categories() -> &'static [Self::Category];
}

macro_rules! category_enum {
    ($name:ident, $kind:literal, { $($variant:ident => $text:literal),+ $(,)? }) => {
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        pub enum $name {
            $($variant),+
        }

        impl $name {
            pub const ALL: &'static [$name] = &[$($name::$variant),+];

            pub fn as_str(self) -> &'static str {
                match self {
                    $($name::$variant => $text),+
                }
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl FromStr for $name {
            type Err = ParseCategoryError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                let trimmed = s.trim();
                $(
                    if trimmed.eq_ignore_ascii_case($text) {
                        return Ok($name::$variant);
                    }
                )+
                Err(ParseCategoryError {
                    kind: $kind,
                    value: s.to_string(),
                })
            }
        }
    };
}

category_enum!(EventCategory, "event category", {
    Past => "past",
    Present => "present",
    Future => "future",
});

category_enum!(VideoPlatform, "video platform", {
    Youtube => "youtube",
    Facebook => "facebook",
});

category_enum!(PublicationKind, "publication kind", {
    Research => "research",
    Ebook => "ebook",
});

impl EventCategory {
    /// Capitalized badge label, e.g. `Future`.
    pub fn label(self) -> &'static str {
        match self {
            EventCategory::Past => "Past",
            EventCategory::Present => "Present",
            EventCategory::Future => "Future",
        }
    }
}

impl VideoPlatform {
    pub fn label(self) -> &'static str {
        match self {
            VideoPlatform::Youtube => "YouTube",
            VideoPlatform::Facebook => "Facebook",
        }
    }
}

impl PublicationKind {
    pub fn label(self) -> &'static str {
        match self {
            PublicationKind::Research => "Research",
            PublicationKind::Ebook => "E-Book",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScheduleItem {
    pub time: &'static str,
    pub activity: &'static str,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Speaker {
    pub name: &'static str,
    pub affiliation: &'static str,
    pub topic: &'static str,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Registration {
    pub deadline: &'static str,
    pub fee: &'static str,
    pub link: &'static str,
    pub limited_spots: Option<u32>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Event {
    pub id: &'static str,
    pub title: &'static str,
    pub date: &'static str,
    pub location: &'static str,
    pub description: &'static str,
    pub image_url: &'static str,
    pub category: EventCategory,
    /// Trusted HTML authored alongside the literal data.
    pub full_description: &'static str,
    pub schedule: &'static [ScheduleItem],
    pub speakers: &'static [Speaker],
    pub gallery: &'static [&'static str],
    pub registration: Option<Registration>,
}

impl Event {
    /// Registration is only offered for upcoming events.
    pub fn open_registration(&self) -> Option<&Registration> {
        match self.category {
            EventCategory::Future => self.registration.as_ref(),
            EventCategory::Past | EventCategory::Present => None,
        }
    }
}

impl Listable for Event {
    type Category = EventCategory;
    const NOUN: &'static str = "events";

    fn key(&self) -> &str {
        self.id
    }

    fn category(&self) -> EventCategory {
        self.category
    }

    fn searchable_fields(&self) -> Vec<&str> {
        vec![self.title, self.description, self.location]
    }

    fn image(&self) -> Option<ImageRef> {
        Some(ImageRef::new(self.image_url, FallbackAsset::Event))
    }

    fn categories() -> &'static [EventCategory] {
        EventCategory::ALL
    }
}

pub const FACEBOOK_THUMBNAIL: &str = "/images/facebook-video-placeholder.svg";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Video {
    pub title: &'static str,
    pub video_id: Option<&'static str>,
    pub platform: VideoPlatform,
}

impl Video {
    pub fn watch_url(&self) -> Option<String> {
        let id = self.video_id?;
        Some(match self.platform {
            VideoPlatform::Youtube => format!("https://www.youtube.com/watch?v={id}"),
            VideoPlatform::Facebook => format!("https://fb.watch/{id}/"),
        })
    }

    /// Facebook thumbnails need an authenticated API, so they use a local asset.
    pub fn thumbnail_url(&self) -> String {
        match (self.platform, self.video_id) {
            (VideoPlatform::Youtube, Some(id)) => {
                format!("https://img.youtube.com/vi/{id}/hqdefault.jpg")
            }
            _ => FACEBOOK_THUMBNAIL.to_string(),
        }
    }
}

impl Listable for Video {
    type Category = VideoPlatform;
    const NOUN: &'static str = "videos";

    fn key(&self) -> &str {
        self.video_id.unwrap_or(self.title)
    }

    fn category(&self) -> VideoPlatform {
        self.platform
    }

    fn searchable_fields(&self) -> Vec<&str> {
        vec![self.title]
    }

    fn image(&self) -> Option<ImageRef> {
        Some(ImageRef::new(self.thumbnail_url(), FallbackAsset::Video))
    }

    fn categories() -> &'static [VideoPlatform] {
        VideoPlatform::ALL
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Publication {
    pub title: &'static str,
    pub description: &'static str,
    pub link: &'static str,
    pub kind: PublicationKind,
}

impl Listable for Publication {
    type Category = PublicationKind;
    const NOUN: &'static str = "publications";

    fn key(&self) -> &str {
        self.title
    }

    fn category(&self) -> PublicationKind {
        self.kind
    }

    fn searchable_fields(&self) -> Vec<&str> {
        vec![self.title, self.description]
    }

    fn image(&self) -> Option<ImageRef> {
        None
    }

    fn categories() -> &'static [PublicationKind] {
        PublicationKind::ALL
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TeamMember {
    pub name: &'static str,
    pub role: &'static str,
    pub bio: &'static str,
}

impl TeamMember {
    pub fn initials(&self) -> String {
        self.name
            .split_whitespace()
            .filter_map(|word| word.chars().next())
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn categories_parse_case_insensitively() {
        assert_eq!("Future".parse::<EventCategory>(), Ok(EventCategory::Future));
        assert_eq!(" youtube ".parse::<VideoPlatform>(), Ok(VideoPlatform::Youtube));
        let err = "podcast".parse::<PublicationKind>().unwrap_err();
        assert_eq!(err.to_string(), "unknown publication kind 'podcast'");
    }

    #[test]
    fn video_without_id_uses_title_key_and_local_thumbnail() {
        let video = Video {
            title: "Untitled talk",
            video_id: None,
            platform: VideoPlatform::Youtube,
        };
        assert_eq!(video.key(), "Untitled talk");
        assert_eq!(video.watch_url(), None);
        assert_eq!(video.thumbnail_url(), FACEBOOK_THUMBNAIL);
    }

    #[test]
    fn initials_take_first_char_of_each_word() {
        let member = TeamMember {
            name: "Maya Putri, M.Sc.",
            role: "",
            bio: "",
        };
        assert_eq!(member.initials(), "MPM");
    }
}
