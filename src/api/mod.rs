//! Backend API module
//!
//! Talks to the report analysis backend (`/upload`, `/chat`).

pub mod client;
pub mod file;
pub mod wire;

pub use client::{ApiError, ApiResult, HttpBackend, ReportBackend};
pub use file::UploadFile;
pub use wire::{ChatRequest, UploadResponse};
