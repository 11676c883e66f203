//! Files selected for upload

use std::path::Path;

use crate::api::ApiResult;

/// A file picked by the user, held in memory until it is uploaded
#[derive(Debug, Clone, PartialEq)]
pub struct UploadFile {
    pub file_name: String,
    pub mime_type: String,
    pub bytes: Vec<u8>,
}

impl UploadFile {
    pub fn new(file_name: impl Into<String>, bytes: Vec<u8>) -> Self {
        let file_name = file_name.into();
        let mime_type = mime_for(&file_name).to_string();
        Self {
            file_name,
            mime_type,
            bytes,
        }
    }

    /// Read a file from disk
    pub async fn from_path(path: impl AsRef<Path>) -> ApiResult<Self> {
        let path = path.as_ref();
        let bytes = tokio::fs::read(path).await?;
        let file_name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| "upload".to_string());
        Ok(Self::new(file_name, bytes))
    }

    pub fn len(&self) -> u64 {
        self.bytes.len() as u64
    }

    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }
}

/// Guess a MIME type from the file extension
pub fn mime_for(file_name: &str) -> &'static str {
    let ext = file_name
        .rsplit_once('.')
        .map(|(_, ext)| ext.to_lowercase())
        .unwrap_or_default();
    match ext.as_str() {
        "pdf" => "application/pdf",
        "png" => "image/png",
        "jpg" | "jpeg" => "image/jpeg",
        "txt" => "text/plain",
        "json" => "application/json",
        _ => "application/octet-stream",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mime_for() {
        assert_eq!(mime_for("report.pdf"), "application/pdf");
        assert_eq!(mime_for("scan.JPG"), "image/jpeg");
        assert_eq!(mime_for("scan.png"), "image/png");
        assert_eq!(mime_for("notes"), "application/octet-stream");
    }

    #[tokio::test]
    async fn test_from_path() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("cbc.pdf");
        std::fs::write(&path, b"%PDF-1.4").unwrap();

        let file = UploadFile::from_path(&path).await.unwrap();
        assert_eq!(file.file_name, "cbc.pdf");
        assert_eq!(file.mime_type, "application/pdf");
        assert_eq!(file.len(), 8);
    }

    #[tokio::test]
    async fn test_from_missing_path_is_io_error() {
        let result = UploadFile::from_path("/definitely/not/here.pdf").await;
        assert!(matches!(result, Err(crate::api::ApiError::Io(_))));
    }
}
