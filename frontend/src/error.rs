//! Error types for the upload widget.
//!
//! - [`ValidationError`] - client-side checks on the chosen file
//! - [`TransportError`] - the request did not produce a readable reply
//! - [`UploadError`] - everything a submission can end with
//!
//! The `Display` text of each variant is what the user sees.

use thiserror::Error;

// =============================================================================
// Validation Errors
// =============================================================================

/// A file rejected before any network activity.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// Media type is not exactly `application/pdf`.
    #[error("Please select a PDF file only.")]
    WrongType,

    /// Larger than the 10 MiB ceiling.
    #[error("File is too large. Maximum allowed size: 10MB.")]
    TooLarge,

    /// Zero bytes.
    #[error("File is empty.")]
    Empty,
}

// =============================================================================
// Transport Errors
// =============================================================================

/// The request could not be completed or its body could not be read.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum TransportError {
    /// Building the multipart body failed.
    #[error("Failed to build request: {0}")]
    Request(String),

    /// The request never completed.
    #[error("HTTP request failed: {0}")]
    Network(String),

    /// A reply arrived but was not the expected JSON.
    #[error("Failed to parse response: {0}")]
    InvalidBody(String),
}

impl From<serde_json::Error> for TransportError {
    fn from(err: serde_json::Error) -> Self {
        TransportError::InvalidBody(err.to_string())
    }
}

// =============================================================================
// Upload Errors (top-level)
// =============================================================================

/// Generic message shown when the server gives no reason.
pub const FALLBACK_UPLOAD_ERROR: &str = "Error uploading file.";

/// Generic message shown for transport failures.
pub const CONNECTION_ERROR: &str = "Connection error. Please try again.";

/// Every way a selection or submission can fail.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum UploadError {
    /// Rejected by client-side validation.
    #[error("{0}")]
    Validation(#[from] ValidationError),

    /// The server answered and reported failure.
    #[error("{message}")]
    Application {
        message: String,
        code: Option<String>,
    },

    /// No usable answer from the server.
    #[error("Connection error. Please try again.")]
    Transport(#[from] TransportError),
}

impl UploadError {
    /// Builds an application error, falling back to the generic message.
    pub fn application(message: Option<String>, code: Option<String>) -> Self {
        let message = message
            .filter(|m| !m.is_empty())
            .unwrap_or_else(|| FALLBACK_UPLOAD_ERROR.to_string());
        UploadError::Application { message, code }
    }

    /// Whether the progress bar should disappear with this error.
    pub fn hides_progress(&self) -> bool {
        matches!(self, UploadError::Transport(_))
    }
}

/// Result type for upload operations.
pub type UploadResult<T> = Result<T, UploadError>;
