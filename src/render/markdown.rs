//! Markdown rendering for chat messages
//!
//! Chat content is CommonMark. It is converted to HTML and sanitized before it
//! reaches the surface; if conversion fails the escaped source text is shown.

use pulldown_cmark::{html, Options, Parser};
use thiserror::Error;
use tracing::warn;

use crate::render::text::html_escape;

/// Default cap on markdown input size
pub const DEFAULT_MAX_MARKDOWN_BYTES: usize = 256 * 1024;

#[derive(Debug, Error, PartialEq)]
pub enum RenderError {
    #[error("markdown input is {size} bytes, limit is {limit}")]
    TooLarge { size: usize, limit: usize },

    #[error("markdown rendering failed: {0}")]
    Failed(String),
}

pub trait MarkdownRenderer: Send + Sync {
    fn to_html(&self, markdown: &str) -> Result<String, RenderError>;
}

/// pulldown-cmark with tables and strikethrough, sanitized with ammonia
#[derive(Debug, Clone)]
pub struct CommonMarkRenderer {
    max_input_bytes: usize,
}

impl CommonMarkRenderer {
    pub fn new(max_input_bytes: usize) -> Self {
        Self { max_input_bytes }
    }
}

impl Default for CommonMarkRenderer {
    fn default() -> Self {
        Self::new(DEFAULT_MAX_MARKDOWN_BYTES)
    }
}

impl MarkdownRenderer for CommonMarkRenderer {
    fn to_html(&self, markdown: &str) -> Result<String, RenderError> {
        if markdown.len() > self.max_input_bytes {
            return Err(RenderError::TooLarge {
                size: markdown.len(),
                limit: self.max_input_bytes,
            });
        }

        let mut options = Options::empty();
        options.insert(Options::ENABLE_TABLES);
        options.insert(Options::ENABLE_STRIKETHROUGH);

        let mut unsafe_html = String::with_capacity(markdown.len() * 3 / 2);
        html::push_html(&mut unsafe_html, Parser::new_ext(markdown, options));

        Ok(ammonia::clean(&unsafe_html))
    }
}

/// Render message content, falling back to the escaped raw text
pub fn format_message(renderer: &dyn MarkdownRenderer, content: &str) -> String {
    match renderer.to_html(content) {
        Ok(html) => html,
        Err(e) => {
            warn!(error = %e, "showing chat message as plain text");
            format!("<p>{}</p>", html_escape(content))
        }
    }
}
