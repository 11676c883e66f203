//! Bloodwork Library
//!
//! Client for a blood report analysis backend: uploads lab reports, renders
//! the results, plots and insights as HTML, and chats about the report.

pub mod api;
pub mod app;
pub mod build_info;
pub mod config;
pub mod download;
pub mod flows;
pub mod models;
pub mod render;
pub mod session;
pub mod ui;

pub use app::{App, Outcome};
pub use config::Config;
pub use session::SessionState;
