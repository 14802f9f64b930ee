use std::sync::{mpsc, Arc};
use std::thread;

use site_logging::{site_error, site_info};

use crate::probe::{ImageProbe, ReqwestProbe};
use crate::site::{build_site, ChannelProgressSink, SiteSettings};
use crate::{BuildError, BuildEvent};

enum EngineCommand {
    Build(SiteSettings),
}

/// Runs builds on a background thread that owns a tokio runtime.
pub struct EngineHandle {
    cmd_tx: mpsc::Sender<EngineCommand>,
    event_rx: mpsc::Receiver<BuildEvent>,
}

impl EngineHandle {
    pub fn new() -> Self {
        Self::with_probe_factory(|settings| {
            Arc::new(ReqwestProbe::new(settings.probe.clone())) as Arc<dyn ImageProbe>
        })
    }

    /// `factory` builds the probe for each build from that build's settings.
    pub fn with_probe_factory<F>(factory: F) -> Self
    where
        F: Fn(&SiteSettings) -> Arc<dyn ImageProbe> + Send + 'static,
    {
        let (cmd_tx, cmd_rx) = mpsc::channel();
        let (event_tx, event_rx) = mpsc::channel();

        thread::spawn(move || {
            let runtime = match tokio::runtime::Runtime::new() {
                Ok(runtime) => runtime,
                Err(err) => {
                    site_error!("engine runtime failed to start: {err}");
                    while let Ok(EngineCommand::Build(_)) = cmd_rx.recv() {
                        let error = BuildError::Runtime(err.to_string());
                        let _ = event_tx.send(BuildEvent::Completed(Err(error.to_string())));
                    }
                    return;
                }
            };
            while let Ok(command) = cmd_rx.recv() {
                match command {
                    EngineCommand::Build(settings) => {
                        let probe = factory(&settings);
                        let sink = ChannelProgressSink::new(event_tx.clone());
                        let result =
                            runtime.block_on(build_site(&settings, probe.as_ref(), &sink));
                        let outcome = match result {
                            Ok(summary) => {
                                site_info!("build finished: {} pages", summary.pages.len());
                                Ok(summary)
                            }
                            Err(err) => {
                                site_error!("build failed: {err}");
                                Err(err.to_string())
                            }
                        };
                        let _ = event_tx.send(BuildEvent::Completed(outcome));
                    }
                }
            }
        });

        Self { cmd_tx, event_rx }
    }

    pub fn start_build(&self, settings: SiteSettings) {
        let _ = self.cmd_tx.send(EngineCommand::Build(settings));
    }

    pub fn try_recv(&self) -> Option<BuildEvent> {
        self.event_rx.try_recv().ok()
    }

    /// Blocks until the next event; `None` once the engine thread is gone.
    pub fn recv(&self) -> Option<BuildEvent> {
        self.event_rx.recv().ok()
    }
}

impl Default for EngineHandle {
    fn default() -> Self {
        Self::new()
    }
}
