//! Drag & drop target.
//!
//! Dragging over toggles the `drag-over` class; dropping forwards the first
//! file and ignores the rest. Clicking anywhere opens the picker.

use leptos::*;
use web_sys::{DragEvent, File, MouseEvent};

use super::{display, first_of};
use crate::state::WidgetState;

#[component]
pub fn DropZone(
    state: RwSignal<WidgetState<File>>,
    /// Receives the first dropped file
    on_file: Callback<File>,
    /// Opens the platform file picker
    on_browse: Callback<()>,
) -> impl IntoView {
    let on_dragover = move |ev: DragEvent| {
        ev.prevent_default();
        if !state.with_untracked(|s| s.drag_active()) {
            state.update(|s| s.set_drag_active(true));
        }
    };

    let on_dragleave = move |ev: DragEvent| {
        ev.prevent_default();
        if state.with_untracked(|s| s.drag_active()) {
            state.update(|s| s.set_drag_active(false));
        }
    };

    let on_drop = move |ev: DragEvent| {
        ev.prevent_default();
        state.update(|s| s.set_drag_active(false));

        let first = ev
            .data_transfer()
            .and_then(|dt| dt.files())
            .and_then(|files| first_of(files.length(), |i| files.get(i)));
        if let Some(file) = first {
            on_file.call(file);
        }
    };

    let on_browse_click = move |ev: MouseEvent| {
        // The zone itself also opens the picker.
        ev.stop_propagation();
        on_browse.call(());
    };

    view! {
        <div
            class="drop-zone"
            id="dropZone"
            class:drag-over=move || state.with(|s| s.drag_active())
            style=move || display(!state.with(|s| s.has_selection()), "block")
            on:dragover=on_dragover
            on:dragleave=on_dragleave
            on:drop=on_drop
            on:click=move |_| on_browse.call(())
        >
            <div class="drop-icon">"📄"</div>
            <div class="drop-text">"Drag your PDF here"</div>
            <div class="drop-hint">"or"</div>
            <button type="button" class="browse-btn" id="browseBtn" on:click=on_browse_click>
                "Browse files"
            </button>
            <div class="drop-hint">"PDF only, up to 10MB"</div>
        </div>
    }
}
