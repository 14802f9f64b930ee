//! One-shot image fallback.
//!
//! An [`ImageSlot`] starts on its original source and moves to a fixed local
//! placeholder the first time a load error is reported. The move is final:
//! later errors are ignored and nothing ever switches back.

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FallbackAsset {
    Event,
    Video,
    /// Reserved for images outside the event and video kinds; nothing in the
    /// content store uses it yet.
    Generic,
}

impl FallbackAsset {
    pub fn path(self) -> &'static str {
        match self {
            FallbackAsset::Event => "/images/event-placeholder.svg",
            FallbackAsset::Video => "/images/video-placeholder.svg",
            FallbackAsset::Generic => "/images/placeholder.svg",
        }
    }
}

/// An image a list item wants displayed, with the placeholder to use on failure.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ImageRef {
    pub src: String,
    pub asset: FallbackAsset,
}

impl ImageRef {
    pub fn new(src: impl Into<String>, asset: FallbackAsset) -> Self {
        Self {
            src: src.into(),
            asset,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ImageState {
    Original,
    Fallback,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageSlot {
    original: String,
    alt: String,
    asset: FallbackAsset,
    state: ImageState,
}

impl ImageSlot {
    pub fn new(src: impl Into<String>, alt: impl Into<String>, asset: FallbackAsset) -> Self {
        Self {
            original: src.into(),
            alt: alt.into(),
            asset,
            state: ImageState::Original,
        }
    }

    pub fn from_ref(image: &ImageRef, alt: impl Into<String>) -> Self {
        Self::new(image.src.clone(), alt, image.asset)
    }

    pub fn current_src(&self) -> &str {
        match self.state {
            ImageState::Original => &self.original,
            ImageState::Fallback => self.asset.path(),
        }
    }

    pub fn original_src(&self) -> &str {
        &self.original
    }

    pub fn fallback_src(&self) -> &'static str {
        self.asset.path()
    }

    pub fn alt(&self) -> &str {
        &self.alt
    }

    pub fn state(&self) -> ImageState {
        self.state
    }

    pub fn is_fallback(&self) -> bool {
        self.state == ImageState::Fallback
    }

    /// Applies a load-error signal. Returns `true` only for the transition itself.
    pub fn on_load_error(&mut self) -> bool {
        match self.state {
            ImageState::Original => {
                self.state = ImageState::Fallback;
                true
            }
            ImageState::Fallback => false,
        }
    }
}
