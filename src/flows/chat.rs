//! Chat flow
//!
//! A send is split in two: [`prepare_send`] validates the input, appends the
//! user's message right away and builds the request; [`complete_send`]
//! appends whatever came back. [`send_message`] runs both around the
//! backend call.

use tracing::{info, warn};

use crate::api::{ApiResult, ChatRequest, ReportBackend};
use crate::models::ChatMessage;
use crate::render::{message_view, MarkdownRenderer};
use crate::session::SessionState;
use crate::ui::Surface;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChatOutcome {
    /// Empty input or no report loaded; nothing changed
    NotSent,
    Replied,
    /// A system error message was appended instead of a reply
    Failed,
}

/// Append to both the transcript and the chat region
pub fn append_message(
    session: &mut SessionState,
    surface: &mut dyn Surface,
    renderer: &dyn MarkdownRenderer,
    message: ChatMessage,
) {
    surface.append_chat_entry(message_view(renderer, &message));
    session.append_chat_message(message);
}

/// Returns `None` (and touches nothing) when the input is blank or no report
/// is loaded.
pub fn prepare_send(
    session: &mut SessionState,
    surface: &mut dyn Surface,
    renderer: &dyn MarkdownRenderer,
) -> Option<ChatRequest> {
    let message = surface.message_input().trim().to_string();
    if message.is_empty() {
        return None;
    }
    let report = session.report()?.clone();
    let role = surface.selected_role();

    append_message(session, surface, renderer, ChatMessage::user(message.clone()));
    surface.set_message_input("");

    Some(ChatRequest {
        message,
        role,
        report,
        session_id: session.session_id().to_string(),
    })
}

/// Append the backend's answer, or a system error message
///
/// Nothing stops a second send while an earlier one is still waiting, and
/// replies land in arrival order, which can differ from send order. Whether a
/// newer send should cancel an older one is undecided, so the race is left
/// as is.
pub fn complete_send(
    session: &mut SessionState,
    surface: &mut dyn Surface,
    renderer: &dyn MarkdownRenderer,
    result: ApiResult<String>,
) -> ChatOutcome {
    match result {
        Ok(reply) => {
            append_message(session, surface, renderer, ChatMessage::assistant(reply));
            ChatOutcome::Replied
        }
        Err(e) => {
            warn!(error = %e, session_id = %session.session_id(), "chat request failed");
            append_message(
                session,
                surface,
                renderer,
                ChatMessage::system(format!("Error: {}", e)),
            );
            ChatOutcome::Failed
        }
    }
}

pub async fn send_message(
    session: &mut SessionState,
    backend: &dyn ReportBackend,
    surface: &mut dyn Surface,
    renderer: &dyn MarkdownRenderer,
) -> ChatOutcome {
    let Some(request) = prepare_send(session, surface, renderer) else {
        return ChatOutcome::NotSent;
    };

    info!(session_id = %request.session_id, role = %request.role, "sending chat message");
    let result = backend.chat(&request).await;
    complete_send(session, surface, renderer, result)
}
