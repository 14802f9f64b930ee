use std::fmt;
use std::path::PathBuf;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stage {
    Preparing,
    ProbingImages,
    Rendering,
    WritingManifest,
    Done,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BuildEvent {
    StageChanged(Stage),
    PageWritten { route: String, bytes: u64 },
    ImageFellBack(FallbackRecord),
    Completed(Result<BuildSummary, String>),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageRecord {
    pub route: String,
    pub path: PathBuf,
    pub bytes: u64,
}

/// An image source that failed its probe, and what replaced it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FallbackRecord {
    pub src: String,
    pub fallback: String,
    pub reason: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BuildSummary {
    pub output_dir: PathBuf,
    pub pages: Vec<PageRecord>,
    pub fallbacks: Vec<FallbackRecord>,
    pub images_checked: usize,
    pub manifest_path: PathBuf,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProbeError {
    pub kind: ProbeFailure,
    pub message: String,
}

impl ProbeError {
    pub fn new(kind: ProbeFailure, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

impl fmt::Display for ProbeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.kind, self.message)
    }
}

impl std::error::Error for ProbeError {}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProbeFailure {
    InvalidSource,
    HttpStatus(u16),
    Timeout,
    RedirectLimitExceeded,
    UnsupportedContentType { content_type: String },
    MissingAsset { path: PathBuf },
    Network,
}

impl fmt::Display for ProbeFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ProbeFailure::InvalidSource => write!(f, "invalid image source"),
            ProbeFailure::HttpStatus(code) => write!(f, "http status {code}"),
            ProbeFailure::Timeout => write!(f, "timeout"),
            ProbeFailure::RedirectLimitExceeded => write!(f, "redirect limit exceeded"),
            ProbeFailure::UnsupportedContentType { content_type } => {
                write!(f, "unsupported content type {content_type}")
            }
            ProbeFailure::MissingAsset { path } => write!(f, "missing asset {}", path.display()),
            ProbeFailure::Network => write!(f, "network error"),
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum BuildError {
    #[error("persist error: {0}")]
    Persist(#[from] crate::PersistError),
    #[error("event id '{0}' collides with a reserved route segment")]
    ReservedRoute(String),
    #[error("duplicate route {0}")]
    DuplicateRoute(String),
    #[error("manifest encoding failed: {0}")]
    Manifest(#[from] serde_json::Error),
    #[error("engine runtime unavailable: {0}")]
    Runtime(String),
}
