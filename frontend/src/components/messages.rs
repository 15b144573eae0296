use leptos::*;
use web_sys::File;

use super::display;
use crate::state::WidgetState;

/// Success and error lines; at most one is visible.
#[component]
pub fn StatusMessages(state: RwSignal<WidgetState<File>>) -> impl IntoView {
    let success = move || state.with(|s| s.success_message());
    let error = move || state.with(|s| s.error_message());

    view! {
        <div
            class="message success-message"
            id="successMessage"
            style=move || display(success().is_some(), "block")
        >
            {move || success().unwrap_or_default()}
        </div>
        <div
            class="message error-message"
            id="errorMessage"
            style=move || display(error().is_some(), "block")
        >
            {move || error().unwrap_or_default()}
        </div>
    }
}
