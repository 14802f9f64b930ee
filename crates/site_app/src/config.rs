use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use anyhow::Context;
use serde::Deserialize;
use site_engine::{ProbeSettings, SiteSettings};

/// On-disk shape of `site.ron`. Every field is optional.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct ConfigFile {
    pub site_name: String,
    pub base_url: String,
    pub output_dir: PathBuf,
    pub events_page_size: usize,
    pub videos_page_size: usize,
    pub publications_page_size: usize,
    pub assets_dir: Option<PathBuf>,
    pub check_remote_images: bool,
    pub connect_timeout_secs: u64,
    pub request_timeout_secs: u64,
    pub redirect_limit: usize,
    pub probe_concurrency: usize,
    pub log_level: String,
}

impl Default for ConfigFile {
    fn default() -> Self {
        let site = SiteSettings::default();
        Self {
            site_name: site.site_name,
            base_url: site.base_url,
            output_dir: site.output_dir,
            events_page_size: site.events_page_size,
            videos_page_size: site.videos_page_size,
            publications_page_size: site.publications_page_size,
            assets_dir: site.probe.assets_dir,
            check_remote_images: site.probe.check_remote,
            connect_timeout_secs: site.probe.connect_timeout.as_secs(),
            request_timeout_secs: site.probe.request_timeout.as_secs(),
            redirect_limit: site.probe.redirect_limit,
            probe_concurrency: site.probe.concurrency,
            log_level: "info".to_string(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigSource {
    File,
    Defaults,
}

/// Reads `path`, falling back to defaults only when the file does not exist.
pub fn load_config(path: &Path) -> anyhow::Result<(ConfigFile, ConfigSource)> {
    let content = match fs::read_to_string(path) {
        Ok(text) => text,
        Err(err) if err.kind() == std::io::ErrorKind::NotFound => {
            return Ok((ConfigFile::default(), ConfigSource::Defaults));
        }
        Err(err) => {
            return Err(err).with_context(|| format!("reading config {}", path.display()));
        }
    };
    let config = ron::from_str(&content)
        .with_context(|| format!("parsing config {}", path.display()))?;
    Ok((config, ConfigSource::File))
}

impl ConfigFile {
    pub fn into_settings(self) -> SiteSettings {
        SiteSettings {
            site_name: self.site_name,
            base_url: self.base_url,
            output_dir: self.output_dir,
            events_page_size: self.events_page_size,
            videos_page_size: self.videos_page_size,
            publications_page_size: self.publications_page_size,
            probe: ProbeSettings {
                check_remote: self.check_remote_images,
                assets_dir: self.assets_dir,
                connect_timeout: Duration::from_secs(self.connect_timeout_secs),
                request_timeout: Duration::from_secs(self.request_timeout_secs),
                redirect_limit: self.redirect_limit,
                concurrency: self.probe_concurrency,
            },
        }
    }
}

/// Command-line flags win over the file.
pub fn apply_build_overrides(settings: &mut SiteSettings, out: Option<PathBuf>, offline: bool) {
    if let Some(out) = out {
        settings.output_dir = out;
    }
    if offline {
        settings.probe.check_remote = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn missing_file_yields_defaults() {
        let temp = TempDir::new().unwrap();
        let (config, source) = load_config(&temp.path().join("site.ron")).unwrap();
        assert_eq!(source, ConfigSource::Defaults);
        assert_eq!(config, ConfigFile::default());
        assert_eq!(config.events_page_size, 6);
        assert_eq!(config.videos_page_size, 8);
    }

    #[test]
    fn partial_file_keeps_other_defaults() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("site.ron");
        fs::write(&path, "(site_name: \"Brain Club\", events_page_size: 4)").unwrap();

        let (config, source) = load_config(&path).unwrap();
        assert_eq!(source, ConfigSource::File);
        let settings = config.into_settings();
        assert_eq!(settings.site_name, "Brain Club");
        assert_eq!(settings.events_page_size, 4);
        assert_eq!(settings.publications_page_size, 10);
        assert!(settings.probe.check_remote);
    }

    #[test]
    fn malformed_file_is_an_error() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("site.ron");
        fs::write(&path, "(site_name: 42").unwrap();
        let err = load_config(&path).unwrap_err();
        assert!(err.to_string().contains("parsing config"));
    }

    #[test]
    fn flags_override_file() {
        let mut settings = ConfigFile::default().into_settings();
        apply_build_overrides(&mut settings, Some(PathBuf::from("dist")), true);
        assert_eq!(settings.output_dir, PathBuf::from("dist"));
        assert!(!settings.probe.check_remote);
    }
}
