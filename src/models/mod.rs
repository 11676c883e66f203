//! Data models
//!
//! Report, insight and chat types exchanged with the backend.

mod chat;
mod insights;
mod report;

pub use chat::{ChatMessage, Sender};
pub use insights::{Insights, ParameterInsight};
pub use report::{LabResult, Report, STATUS_NORMAL};
