use std::path::{Path, PathBuf};
use std::time::Duration;

use reqwest::header::CONTENT_TYPE;
use url::Url;

use crate::{ProbeError, ProbeFailure};

#[derive(Debug, Clone)]
pub struct ProbeSettings {
    /// When false, remote sources are assumed reachable and no request is made.
    pub check_remote: bool,
    /// Directory that local `/images/...` paths resolve against.
    pub assets_dir: Option<PathBuf>,
    pub connect_timeout: Duration,
    pub request_timeout: Duration,
    pub redirect_limit: usize,
    pub concurrency: usize,
}

impl Default for ProbeSettings {
    fn default() -> Self {
        Self {
            check_remote: true,
            assets_dir: None,
            connect_timeout: Duration::from_secs(5),
            request_timeout: Duration::from_secs(10),
            redirect_limit: 5,
            concurrency: 8,
        }
    }
}

/// Stand-in for the image delivery host: an `Err` is the load-error signal.
#[async_trait::async_trait]
pub trait ImageProbe: Send + Sync {
    async fn probe(&self, src: &str) -> Result<(), ProbeError>;
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum SourceKind {
    Remote(Url),
    Local(String),
}

pub(crate) fn classify(src: &str) -> Result<SourceKind, ProbeError> {
    let trimmed = src.trim();
    if trimmed.is_empty() {
        return Err(ProbeError::new(ProbeFailure::InvalidSource, "empty source"));
    }
    if trimmed.starts_with('/') && !trimmed.starts_with("//") {
        return Ok(SourceKind::Local(trimmed.to_string()));
    }
    let url = Url::parse(trimmed)
        .map_err(|err| ProbeError::new(ProbeFailure::InvalidSource, err.to_string()))?;
    match url.scheme() {
        "http" | "https" => Ok(SourceKind::Remote(url)),
        other => Err(ProbeError::new(
            ProbeFailure::InvalidSource,
            format!("unsupported scheme {other}"),
        )),
    }
}

#[derive(Debug, Clone)]
pub struct ReqwestProbe {
    settings: ProbeSettings,
}

impl ReqwestProbe {
    pub fn new(settings: ProbeSettings) -> Self {
        Self { settings }
    }

    fn build_client(&self) -> Result<reqwest::Client, ProbeError> {
        let redirect_limit = self.settings.redirect_limit;
        // `previous` holds every URL already requested, the original included.
        let policy = reqwest::redirect::Policy::custom(move |attempt| {
            if attempt.previous().len() > redirect_limit {
                attempt.error("redirect limit exceeded")
            } else {
                attempt.follow()
            }
        });

        reqwest::Client::builder()
            .connect_timeout(self.settings.connect_timeout)
            .timeout(self.settings.request_timeout)
            .redirect(policy)
            .build()
            .map_err(|err| ProbeError::new(ProbeFailure::Network, err.to_string()))
    }

    fn check_local(&self, path: &str) -> Result<(), ProbeError> {
        let Some(root) = self.settings.assets_dir.as_deref() else {
            return Ok(());
        };
        let resolved = resolve_asset(root, path);
        if resolved.is_file() {
            Ok(())
        } else {
            Err(ProbeError::new(
                ProbeFailure::MissingAsset { path: resolved },
                "asset not found",
            ))
        }
    }

    async fn check_remote(&self, url: Url) -> Result<(), ProbeError> {
        let client = self.build_client()?;
        let response = client.get(url).send().await.map_err(map_reqwest_error)?;

        let status = response.status();
        if !status.is_success() {
            return Err(ProbeError::new(
                ProbeFailure::HttpStatus(status.as_u16()),
                status.to_string(),
            ));
        }

        let content_type = response
            .headers()
            .get(CONTENT_TYPE)
            .and_then(|value| value.to_str().ok())
            .map(|value| value.to_string());
        if let Some(ct) = content_type.as_deref() {
            if !is_image_content_type(ct) {
                return Err(ProbeError::new(
                    ProbeFailure::UnsupportedContentType {
                        content_type: ct.to_string(),
                    },
                    "not an image",
                ));
            }
        }
        Ok(())
    }
}

#[async_trait::async_trait]
impl ImageProbe for ReqwestProbe {
    async fn probe(&self, src: &str) -> Result<(), ProbeError> {
        match classify(src)? {
            SourceKind::Local(path) => self.check_local(&path),
            SourceKind::Remote(url) => {
                if self.settings.check_remote {
                    self.check_remote(url).await
                } else {
                    Ok(())
                }
            }
        }
    }
}

/// `/images/a.png` under `root`, ignoring any query string and `..` segments.
pub(crate) fn resolve_asset(root: &Path, path: &str) -> PathBuf {
    let path = path.split(['?', '#']).next().unwrap_or(path);
    path.split('/')
        .filter(|segment| !segment.is_empty() && *segment != "." && *segment != "..")
        .fold(root.to_path_buf(), |acc, segment| acc.join(segment))
}

fn is_image_content_type(content_type: &str) -> bool {
    let ct = content_type.split(';').next().unwrap_or(content_type).trim();
    ct.len() > "image/".len() && ct[..6].eq_ignore_ascii_case("image/")
}

fn map_reqwest_error(err: reqwest::Error) -> ProbeError {
    if err.is_timeout() {
        return ProbeError::new(ProbeFailure::Timeout, err.to_string());
    }
    if err.is_redirect() {
        return ProbeError::new(ProbeFailure::RedirectLimitExceeded, err.to_string());
    }
    ProbeError::new(ProbeFailure::Network, err.to_string())
}
