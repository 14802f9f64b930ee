#![allow(dead_code)]

use std::collections::BTreeSet;
use std::sync::{Mutex, Once};

use site_engine::{BuildEvent, ImageProbe, ProbeError, ProbeFailure, ProgressSink};

pub fn init_logging() {
    static INIT: Once = Once::new();
    INIT.call_once(site_logging::initialize_for_tests);
}

/// Fails exactly the listed sources with a 404 and accepts everything else.
pub struct FakeProbe {
    failing: BTreeSet<String>,
    seen: Mutex<Vec<String>>,
}

impl FakeProbe {
    pub fn failing(sources: &[&str]) -> Self {
        Self {
            failing: sources.iter().map(|s| s.to_string()).collect(),
            seen: Mutex::new(Vec::new()),
        }
    }

    pub fn seen(&self) -> Vec<String> {
        self.seen.lock().unwrap().clone()
    }
}

#[async_trait::async_trait]
impl ImageProbe for FakeProbe {
    async fn probe(&self, src: &str) -> Result<(), ProbeError> {
        self.seen.lock().unwrap().push(src.to_string());
        if self.failing.contains(src) {
            Err(ProbeError::new(ProbeFailure::HttpStatus(404), "Not Found"))
        } else {
            Ok(())
        }
    }
}

#[derive(Default)]
pub struct TestSink {
    events: Mutex<Vec<BuildEvent>>,
}

impl TestSink {
    pub fn take(&self) -> Vec<BuildEvent> {
        self.events.lock().unwrap().drain(..).collect()
    }
}

impl ProgressSink for TestSink {
    fn emit(&self, event: BuildEvent) {
        self.events.lock().unwrap().push(event);
    }
}
