//! Common types used across the widget.
//!
//! # Categories
//!
//! - **File Types** - the chosen file and its metadata
//! - **UI Types** - notices and the derived widget state
//! - **API Types** - upload endpoint response

use serde::{Deserialize, Serialize};

// =============================================================================
// File Types
// =============================================================================

/// Metadata of a user-chosen file.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FileInfo {
    /// File name as reported by the browser
    pub name: String,
    /// Size in bytes
    pub size_bytes: u64,
    /// Media type as reported by the browser (may be empty)
    pub mime_type: String,
}

impl FileInfo {
    pub fn new(name: impl Into<String>, size_bytes: u64, mime_type: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            size_bytes,
            mime_type: mime_type.into(),
        }
    }

    /// Reads metadata off a browser `File`.
    pub fn from_file(file: &web_sys::File) -> Self {
        Self {
            name: file.name(),
            size_bytes: file.size().max(0.0) as u64,
            mime_type: file.type_(),
        }
    }
}

/// The current selection: metadata plus the platform blob that gets uploaded.
///
/// In the browser `B` is a `web_sys::File`.
#[derive(Clone, Debug, PartialEq)]
pub struct SelectedFile<B> {
    pub info: FileInfo,
    pub blob: B,
}

impl<B> SelectedFile<B> {
    pub fn new(info: FileInfo, blob: B) -> Self {
        Self { info, blob }
    }
}

impl SelectedFile<web_sys::File> {
    pub fn from_browser(file: web_sys::File) -> Self {
        Self {
            info: FileInfo::from_file(&file),
            blob: file,
        }
    }
}

/// Generation counter for submissions.
///
/// Any continuation holding an id older than the widget's current one is stale.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct AttemptId(u64);

impl AttemptId {
    pub fn next(self) -> Self {
        AttemptId(self.0 + 1)
    }

    pub fn value(self) -> u64 {
        self.0
    }
}

// =============================================================================
// UI Types
// =============================================================================

/// The single message line under the form.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Notice {
    Success(String),
    Error(String),
}

/// How the latest submission ended.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum UploadOutcome {
    Succeeded,
    Failed,
}

/// Derived widget state, never stored.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum UploadUiState {
    /// Nothing chosen, drop zone visible
    Idle,
    /// A valid file is waiting to be submitted
    FileChosen,
    /// Request in flight or response settling
    Uploading,
    /// Success message shown, auto-clear pending
    Succeeded,
    /// Last submission failed, selection kept
    Failed,
}

impl UploadUiState {
    /// Get CSS class for styling.
    pub fn css_class(&self) -> &'static str {
        match self {
            UploadUiState::Idle => "state-idle",
            UploadUiState::FileChosen => "state-chosen",
            UploadUiState::Uploading => "state-uploading",
            UploadUiState::Succeeded => "state-succeeded",
            UploadUiState::Failed => "state-failed",
        }
    }
}

// =============================================================================
// API Response Types
// =============================================================================

/// Response from `POST /upload`.
///
/// Only `success` decides the branch; the HTTP status is not consulted.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct UploadResponse {
    /// Missing is treated as failure
    #[serde(default)]
    pub success: bool,
    /// Human readable reason
    #[serde(default)]
    pub message: Option<String>,
    /// Machine readable code, e.g. `validation_error`
    #[serde(default)]
    pub error: Option<String>,
    /// Present on success
    #[serde(default)]
    pub data: Option<UploadData>,
}

/// Details of a stored upload.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct UploadData {
    /// Name echoed back by the server
    #[serde(default)]
    pub original_filename: Option<String>,
    /// Stored object name
    #[serde(default)]
    pub filename: Option<String>,
    #[serde(default)]
    pub s3_key: Option<String>,
    #[serde(default)]
    pub bucket: Option<String>,
}

impl UploadResponse {
    /// Name to show in the success message.
    pub fn uploaded_name<'a>(&'a self, local_name: &'a str) -> &'a str {
        self.data
            .as_ref()
            .and_then(|d| d.original_filename.as_deref())
            .filter(|n| !n.is_empty())
            .unwrap_or(local_name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_success_response_deserialization() {
        let json = r#"{
            "success": true,
            "message": "File uploaded successfully",
            "data": {
                "filename": "20240101_120000_ab12cd34.pdf",
                "original_filename": "report.pdf",
                "s3_key": "uploads/20240101_120000_ab12cd34.pdf",
                "bucket": "source-pdf"
            }
        }"#;

        let response: UploadResponse = serde_json::from_str(json).unwrap();
        assert!(response.success);
        assert_eq!(response.uploaded_name("local.pdf"), "report.pdf");
        assert_eq!(
            response.data.unwrap().s3_key.as_deref(),
            Some("uploads/20240101_120000_ab12cd34.pdf")
        );
    }

    #[test]
    fn test_failure_response_deserialization() {
        let json = r#"{"success": false, "error": "validation_error", "message": "File is empty"}"#;
        let response: UploadResponse = serde_json::from_str(json).unwrap();
        assert!(!response.success);
        assert_eq!(response.error.as_deref(), Some("validation_error"));
        assert_eq!(response.message.as_deref(), Some("File is empty"));
    }

    #[test]
    fn test_missing_success_is_failure() {
        let response: UploadResponse = serde_json::from_str("{}").unwrap();
        assert!(!response.success);
        assert!(response.data.is_none());
    }

    #[test]
    fn test_data_without_original_filename() {
        for json in [
            r#"{"success": true, "data": {}}"#,
            r#"{"success": true, "data": {"original_filename": null}}"#,
        ] {
            let response: UploadResponse = serde_json::from_str(json).unwrap();
            assert!(response.success);
            assert_eq!(response.uploaded_name("local.pdf"), "local.pdf");
        }
    }

    #[test]
    fn test_uploaded_name_falls_back_to_local() {
        let response = UploadResponse {
            success: true,
            ..Default::default()
        };
        assert_eq!(response.uploaded_name("local.pdf"), "local.pdf");
    }

    #[test]
    fn test_attempt_ids_increase() {
        let first = AttemptId::default();
        let second = first.next();
        assert!(second > first);
        assert_eq!(second.value(), 1);
    }
}
