//! Render pipeline
//!
//! Pure data-to-markup transforms. Every function here takes models and
//! returns HTML strings; writing them anywhere is the surface's job.

pub mod chat;
pub mod insights;
pub mod markdown;
pub mod page;
pub mod plots;
pub mod tables;
pub mod text;

pub use chat::message_view;
pub use insights::insights_view;
pub use markdown::{format_message, CommonMarkRenderer, MarkdownRenderer, RenderError};
pub use plots::{plot_refs, plots_view, PlotRef};
pub use tables::report_view;
pub use text::{format_label, html_escape};
