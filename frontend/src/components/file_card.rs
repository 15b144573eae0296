use leptos::*;
use web_sys::File;

use super::display;
use crate::state::WidgetState;

/// Shows the chosen file with a control to drop it.
#[component]
pub fn SelectedFileCard(
    state: RwSignal<WidgetState<File>>,
    on_remove: Callback<()>,
) -> impl IntoView {
    view! {
        <div
            class="file-selected"
            id="fileSelected"
            style=move || display(state.with(|s| s.has_selection()), "block")
        >
            <div class="file-info">
                <span class="file-icon">"📄"</span>
                <div class="file-details">
                    <span class="file-name" id="fileName">
                        {move || state.with(|s| s.selected_name())}
                    </span>
                    <span class="file-size" id="fileSize">
                        {move || state.with(|s| s.selected_size())}
                    </span>
                </div>
            </div>
            <button
                type="button"
                class="remove-file"
                id="removeFile"
                title="Remove file"
                on:click=move |_| on_remove.call(())
            >
                "✕"
            </button>
        </div>
    }
}
