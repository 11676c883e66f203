//! Viewer application
//!
//! Owns the session, the backend and the surface, and routes UI events to
//! the flows.

use tracing::{debug, warn};

use crate::api::ReportBackend;
use crate::config::Config;
use crate::download::Download;
use crate::flows::chat::{send_message, ChatOutcome};
use crate::flows::upload::{submit_upload, UploadOptions, UploadOutcome};
use crate::render::{CommonMarkRenderer, MarkdownRenderer};
use crate::session::SessionState;
use crate::ui::{Surface, Tab, UiEvent};

/// What handling an event amounted to
#[derive(Debug, Clone, PartialEq)]
pub enum Outcome {
    Upload(UploadOutcome),
    Chat(ChatOutcome),
    TabChanged(Tab),
    Downloaded,
    Ignored,
}

pub struct App<B, S> {
    session: SessionState,
    backend: B,
    surface: S,
    renderer: Box<dyn MarkdownRenderer>,
    upload_options: UploadOptions,
}

impl<B: ReportBackend, S: Surface> App<B, S> {
    pub fn new(backend: B, surface: S, config: &Config) -> Self {
        Self::with_session(SessionState::new(), backend, surface, config)
    }

    pub fn with_session(session: SessionState, backend: B, surface: S, config: &Config) -> Self {
        Self {
            session,
            backend,
            surface,
            renderer: Box::new(CommonMarkRenderer::new(config.max_markdown_bytes)),
            upload_options: UploadOptions {
                max_upload_bytes: config.max_upload_bytes,
                asset_base: config.asset_base().to_string(),
            },
        }
    }

    pub fn with_renderer(mut self, renderer: Box<dyn MarkdownRenderer>) -> Self {
        self.renderer = renderer;
        self
    }

    pub fn session(&self) -> &SessionState {
        &self.session
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }

    pub fn surface_mut(&mut self) -> &mut S {
        &mut self.surface
    }

    pub fn backend(&self) -> &B {
        &self.backend
    }

    pub async fn handle(&mut self, event: UiEvent) -> Outcome {
        debug!(event = event.name(), "handling ui event");
        match event {
            UiEvent::UploadSubmitted(file) => {
                let outcome = submit_upload(
                    &mut self.session,
                    &self.backend,
                    &mut self.surface,
                    file,
                    &self.upload_options,
                )
                .await;
                Outcome::Upload(outcome)
            }
            UiEvent::SendClicked => Outcome::Chat(self.send().await),
            UiEvent::KeyPressed(key) if key.submits_message() => Outcome::Chat(self.send().await),
            UiEvent::KeyPressed(_) => Outcome::Ignored,
            UiEvent::TabClicked(tab) => {
                self.surface.activate_tab(tab);
                Outcome::TabChanged(tab)
            }
            UiEvent::DownloadClicked => {
                if self.download() {
                    Outcome::Downloaded
                } else {
                    Outcome::Ignored
                }
            }
        }
    }

    async fn send(&mut self) -> ChatOutcome {
        send_message(
            &mut self.session,
            &self.backend,
            &mut self.surface,
            &*self.renderer,
        )
        .await
    }

    /// Offer the current report as `blood_report.json`; no-op without a report
    fn download(&mut self) -> bool {
        let Some(report) = self.session.report() else {
            return false;
        };
        match Download::from_report(report) {
            Ok(download) => {
                self.surface.offer_download(download);
                true
            }
            Err(e) => {
                warn!(error = %e, "could not serialize report");
                self.surface.alert(&format!("Error: {}", e));
                false
            }
        }
    }
}
