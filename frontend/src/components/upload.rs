//! PDF upload form with drag & drop support.
//!
//! Owns the [`WidgetState`] and turns DOM events into state transitions.
//! Submitting spawns the upload workflow on the UI thread.

use leptos::*;
use web_sys::{Event, File, HtmlInputElement, SubmitEvent};

use super::{display, first_of, DropZone, ProgressSection, SelectedFileCard, StatusMessages};
use crate::config::{UploadConfig, PICKER_ACCEPT};
use crate::services::{BrowserClock, HttpTransport};
use crate::state::WidgetState;
use crate::types::SelectedFile;
use crate::workflow::{run_upload, Completion};

#[component]
pub fn UploadWidget(
    /// Timings and endpoint; defaults to the compiled-in configuration
    #[prop(optional)]
    config: Option<UploadConfig>,
) -> impl IntoView {
    let config = config.unwrap_or_default();
    let state = create_rw_signal(WidgetState::<File>::new());
    let file_input = create_node_ref::<html::Input>();

    // Reset the picker whenever the selection goes away, so picking the
    // same file again still fires `change`.
    let has_selection = create_memo(move |_| state.with(|s| s.has_selection()));
    create_effect(move |_| {
        if !has_selection.get() {
            if let Some(input) = file_input.get_untracked() {
                input.set_value("");
            }
        }
    });

    on_cleanup(|| log::debug!("Upload widget unmounted, pending follow-ups dropped"));

    let open_picker = Callback::new(move |_: ()| {
        if let Some(input) = file_input.get_untracked() {
            input.click();
        }
    });

    let select_file = Callback::new(move |file: File| {
        state.update(|s| {
            // Rejections surface as the error message.
            let _ = s.select_file(SelectedFile::from_browser(file));
        });
    });

    let clear_selection = Callback::new(move |_: ()| {
        log::info!("Selection removed");
        state.update(|s| s.clear_selection());
    });

    let on_file_change = move |ev: Event| {
        let input: HtmlInputElement = event_target(&ev);
        if let Some(file) = input
            .files()
            .and_then(|files| first_of(files.length(), |i| files.get(i)))
        {
            select_file.call(file);
        }
    };

    let on_submit = move |ev: SubmitEvent| {
        ev.prevent_default();
        let config = config.clone();
        spawn_local(async move {
            let transport = HttpTransport::new(config.endpoint.clone());
            let completion =
                run_upload(state, transport, BrowserClock, rand::thread_rng(), config).await;
            match completion {
                None => log::debug!("Submit ignored: nothing to upload"),
                Some(Completion::Abandoned) => log::debug!("Upload abandoned"),
                Some(_) => {}
            }
        });
    };

    let is_loading = move || state.with(|s| s.is_loading());

    view! {
        <div class=move || format!("upload-widget {}", state.with(|s| s.ui_state().css_class()))>
            <form id="uploadForm" class="upload-form" on:submit=on_submit>
                <DropZone state=state on_file=select_file on_browse=open_picker/>

                <input
                    type="file"
                    id="fileInput"
                    accept=PICKER_ACCEPT
                    style="display:none"
                    node_ref=file_input
                    on:change=on_file_change
                />

                <SelectedFileCard state=state on_remove=clear_selection/>

                <ProgressSection state=state/>

                <button
                    type="submit"
                    class="upload-btn"
                    id="uploadBtn"
                    disabled=move || !state.with(|s| s.can_submit())
                >
                    <span class="upload-btn-text" style=move || display(!is_loading(), "block")>
                        "Upload PDF"
                    </span>
                    <span class="upload-btn-loading" style=move || display(is_loading(), "flex")>
                        <span class="spinner"></span>
                        "Uploading..."
                    </span>
                </button>
            </form>

            <StatusMessages state=state/>
        </div>
    }
}
