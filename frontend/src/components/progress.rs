use leptos::*;
use web_sys::File;

use super::display;
use crate::state::WidgetState;

#[component]
pub fn ProgressSection(state: RwSignal<WidgetState<File>>) -> impl IntoView {
    let bar_style = move || {
        state.with(|s| {
            s.progress()
                .map(|p| p.bar_style())
                .unwrap_or_else(|| "width: 0%;".to_string())
        })
    };
    let label = move || {
        state.with(|s| {
            s.progress()
                .map(|p| p.label())
                .unwrap_or_else(|| "0%".to_string())
        })
    };

    view! {
        <div
            class="progress-container"
            id="progressContainer"
            style=move || display(state.with(|s| s.progress_visible()), "block")
        >
            <div class="progress-bar">
                <div class="progress-fill" id="progressFill" style=bar_style></div>
            </div>
            <div class="progress-text" id="progressText">{label}</div>
        </div>
    }
}
