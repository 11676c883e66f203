//! Session state
//!
//! Holds the current report, the chat transcript and the session id for one
//! viewer session. Nothing here is persisted.

use rand::Rng;

use crate::models::{ChatMessage, Report};

const SESSION_ID_PREFIX: &str = "session_";
const SESSION_ID_LEN: usize = 9;
const BASE36: &[u8] = b"0123456789abcdefghijklmnopqrstuvwxyz";

/// Generate an opaque session id such as `session_k3j9x0a1b`
///
/// Only needs to be unique within a running viewer, not unguessable.
pub fn generate_session_id() -> String {
    let mut rng = rand::thread_rng();
    let suffix: String = (0..SESSION_ID_LEN)
        .map(|_| BASE36[rng.gen_range(0..BASE36.len())] as char)
        .collect();
    format!("{}{}", SESSION_ID_PREFIX, suffix)
}

#[derive(Debug, Clone)]
pub struct SessionState {
    current_report: Option<Report>,
    session_id: String,
    chat_history: Vec<ChatMessage>,
}

impl SessionState {
    pub fn new() -> Self {
        Self::with_session_id(generate_session_id())
    }

    pub fn with_session_id(session_id: impl Into<String>) -> Self {
        Self {
            current_report: None,
            session_id: session_id.into(),
            chat_history: Vec::new(),
        }
    }

    pub fn report(&self) -> Option<&Report> {
        self.current_report.as_ref()
    }

    pub fn has_report(&self) -> bool {
        self.current_report.is_some()
    }

    /// Replace the report and drop the transcript that belonged to the old one
    pub fn set_report(&mut self, report: Report) {
        self.current_report = Some(report);
        self.chat_history.clear();
    }

    pub fn append_chat_message(&mut self, message: ChatMessage) {
        self.chat_history.push(message);
    }

    pub fn chat_history(&self) -> &[ChatMessage] {
        &self.chat_history
    }

    pub fn session_id(&self) -> &str {
        &self.session_id
    }
}

impl Default for SessionState {
    fn default() -> Self {
        Self::new()
    }
}
