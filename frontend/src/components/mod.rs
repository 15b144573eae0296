//! UI components for the upload page.
//!
//! - [`UploadWidget`] - the form; owns the widget state and wires events
//! - [`DropZone`] - drag & drop target with the browse button
//! - [`SelectedFileCard`] - name, size and remove control of the selection
//! - [`ProgressSection`] - simulated progress bar
//! - [`StatusMessages`] - success and error lines
//!
//! Element ids (`dropZone`, `fileInput`, `uploadBtn`, ...) are stable so the
//! page stylesheet and end-to-end tests can target them.

mod upload;
mod drop_zone;
mod file_card;
mod progress;
mod messages;

pub use upload::*;
pub use drop_zone::*;
pub use file_card::*;
pub use progress::*;
pub use messages::*;

/// Inline style toggling an element between `display_as` and hidden.
pub(crate) fn display(visible: bool, display_as: &str) -> String {
    if visible {
        format!("display: {};", display_as)
    } else {
        "display: none;".to_string()
    }
}

/// First of `count` indexed items; the rest are ignored.
///
/// Works on a `FileList` through `|i| files.get(i)`.
pub(crate) fn first_of<T>(count: u32, get: impl Fn(u32) -> Option<T>) -> Option<T> {
    if count == 0 {
        return None;
    }
    if count > 1 {
        log::debug!("Got {} files, keeping the first", count);
    }
    get(0)
}
