use std::collections::{BTreeMap, BTreeSet};

use futures_util::{stream, StreamExt};
use site_core::{ImageRef, ImageSlot};
use site_logging::{site_debug, site_warn};

use crate::probe::ImageProbe;
use crate::FallbackRecord;

/// Probe outcome per unique image source, consulted when slots are rendered.
#[derive(Debug, Clone, Default)]
pub struct ImageTable {
    failures: BTreeMap<String, FallbackRecord>,
    checked: usize,
}

impl ImageTable {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record_failure(&mut self, image: &ImageRef, reason: impl Into<String>) {
        self.failures
            .entry(image.src.clone())
            .or_insert_with(|| FallbackRecord {
                src: image.src.clone(),
                fallback: image.asset.path().to_string(),
                reason: reason.into(),
            });
    }

    pub fn is_failed(&self, src: &str) -> bool {
        self.failures.contains_key(src)
    }

    pub fn checked(&self) -> usize {
        self.checked
    }

    /// Fallbacks ordered by source.
    pub fn fallbacks(&self) -> Vec<FallbackRecord> {
        self.failures.values().cloned().collect()
    }

    /// A fresh slot for one rendered `<img>`; already on its placeholder if the source failed.
    pub fn slot(&self, image: &ImageRef, alt: &str) -> ImageSlot {
        let mut slot = ImageSlot::from_ref(image, alt);
        if self.is_failed(&image.src) {
            slot.on_load_error();
        }
        slot
    }
}

/// Probes every distinct source once, at most `concurrency` at a time.
pub async fn probe_images(
    probe: &dyn ImageProbe,
    images: impl IntoIterator<Item = ImageRef>,
    concurrency: usize,
) -> ImageTable {
    let mut seen = BTreeSet::new();
    let unique: Vec<ImageRef> = images
        .into_iter()
        .filter(|image| seen.insert(image.src.clone()))
        .collect();

    let results: Vec<_> = stream::iter(unique)
        .map(|image| async move {
            let result = probe.probe(&image.src).await;
            (image, result)
        })
        .buffer_unordered(concurrency.max(1))
        .collect()
        .await;

    let mut table = ImageTable::new();
    table.checked = results.len();
    for (image, result) in results {
        match result {
            Ok(()) => site_debug!("image ok: {}", image.src),
            Err(err) => {
                site_warn!(
                    "image failed, using {}: {} ({})",
                    image.asset.path(),
                    image.src,
                    err
                );
                table.record_failure(&image, err.to_string());
            }
        }
    }
    table
}

#[cfg(test)]
mod tests {
    use super::*;
    use site_core::FallbackAsset;

    #[test]
    fn failed_sources_yield_fallback_slots() {
        let bad = ImageRef::new("/images/missing.png", FallbackAsset::Event);
        let good = ImageRef::new("/images/ok.png", FallbackAsset::Event);
        let mut table = ImageTable::new();
        table.record_failure(&bad, "missing asset");
        table.record_failure(&bad, "second report ignored");

        let slot = table.slot(&bad, "Bad");
        assert!(slot.is_fallback());
        assert_eq!(slot.current_src(), "/images/event-placeholder.svg");
        assert!(!table.slot(&good, "Good").is_fallback());

        let fallbacks = table.fallbacks();
        assert_eq!(fallbacks.len(), 1);
        assert_eq!(fallbacks[0].reason, "missing asset");
    }
}
