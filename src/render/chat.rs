//! Chat transcript entries

use crate::models::ChatMessage;
use crate::render::markdown::{format_message, MarkdownRenderer};
use crate::render::text::html_escape;

/// Markup for one transcript entry
pub fn message_view(renderer: &dyn MarkdownRenderer, message: &ChatMessage) -> String {
    format!(
        "<div class=\"message message-{css}\">\
         <div class=\"message-header\"><strong>{sender}</strong>\
         <span class=\"message-time\">{time}</span></div>\
         <div class=\"message-content\">{content}</div></div>\n",
        css = message.sender.css_name(),
        sender = html_escape(message.sender.display_name()),
        time = html_escape(&message.time_label()),
        content = format_message(renderer, &message.content),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render::markdown::CommonMarkRenderer;

    #[test]
    fn test_message_view() {
        let message = ChatMessage::assistant("Your *LDL* is high.");
        let html = message_view(&CommonMarkRenderer::default(), &message);
        assert!(html.starts_with("<div class=\"message message-assistant\">"));
        assert!(html.contains("<strong>Assistant</strong>"));
        assert!(html.contains(&message.time_label()));
        assert!(html.contains("<em>LDL</em>"));
    }

    #[test]
    fn test_user_message_class() {
        let html = message_view(&CommonMarkRenderer::default(), &ChatMessage::user("hi"));
        assert!(html.contains("message-you"));
        assert!(html.contains("<strong>You</strong>"));
    }
}
