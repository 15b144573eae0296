//! Application configuration.
//!
//! Centralized configuration for the PDF upload widget.
//! Everything is fixed at compile time; there is no environment layer.

/// Upload endpoint, relative to the page origin.
pub const UPLOAD_ENDPOINT: &str = "/upload";

/// Multipart field name carrying the file.
pub const UPLOAD_FIELD: &str = "file";

/// The only accepted media type.
pub const PDF_MIME_TYPE: &str = "application/pdf";

/// Hint passed to the picker's `accept` attribute.
pub const PICKER_ACCEPT: &str = ".pdf,application/pdf";

/// Maximum file size for upload (in bytes).
///
/// 10 MiB limit.
pub const MAX_FILE_SIZE: u64 = 10 * 1024 * 1024;

/// Interval between simulated progress ticks.
pub const PROGRESS_TICK_MS: u32 = 200;

/// Upper bound of a single simulated progress step (exclusive).
pub const PROGRESS_MAX_STEP: f64 = 15.0;

/// Simulated progress never goes past this before the server answers.
pub const PROGRESS_CAP: f64 = 90.0;

/// Pause after the response so the bar is seen at 100%.
pub const SETTLE_DELAY_MS: u32 = 500;

/// How long the success message stays before the selection is cleared.
pub const CLEAR_DELAY_MS: u32 = 3000;

/// Timings and limits used by the upload workflows.
#[derive(Clone, Debug, PartialEq)]
pub struct UploadConfig {
    pub endpoint: String,
    pub progress_tick_ms: u32,
    pub progress_max_step: f64,
    pub progress_cap: f64,
    pub settle_delay_ms: u32,
    pub clear_delay_ms: u32,
}

impl Default for UploadConfig {
    fn default() -> Self {
        Self {
            endpoint: UPLOAD_ENDPOINT.to_string(),
            progress_tick_ms: PROGRESS_TICK_MS,
            progress_max_step: PROGRESS_MAX_STEP,
            progress_cap: PROGRESS_CAP,
            settle_delay_ms: SETTLE_DELAY_MS,
            clear_delay_ms: CLEAR_DELAY_MS,
        }
    }
}

impl UploadConfig {
    /// Upper bound for a random progress step.
    ///
    /// Values that would make an empty sampling range fall back to
    /// [`PROGRESS_MAX_STEP`].
    pub fn progress_step_bound(&self) -> f64 {
        if self.progress_max_step.is_finite() && self.progress_max_step > 0.0 {
            self.progress_max_step
        } else {
            PROGRESS_MAX_STEP
        }
    }
}
