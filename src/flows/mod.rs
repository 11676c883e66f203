//! User-facing flows: upload and chat

pub mod chat;
pub mod upload;

pub use chat::{complete_send, prepare_send, send_message, ChatOutcome};
pub use upload::{submit_upload, UploadOptions, UploadOutcome, NO_FILE_MESSAGE};
