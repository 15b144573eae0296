//! PDF Upload - Frontend Rust/Leptos Application
//!
//! A WebAssembly widget for choosing a single PDF, validating it in the
//! browser and sending it to `POST /upload`.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  UploadWidget (components)                                   │
//! │  ├── DropZone / file picker ──▶ WidgetState::select_file     │
//! │  ├── SelectedFileCard       ──▶ WidgetState::clear_selection │
//! │  ├── ProgressSection                                         │
//! │  └── StatusMessages                                          │
//! ├─────────────────────────────────────────────────────────────┤
//! │  workflow::run_upload                                        │
//! │  ├── run_progress   (Clock)                                  │
//! │  └── run_submission (UploadTransport, Clock)                 │
//! ├─────────────────────────────────────────────────────────────┤
//! │  services: HttpTransport (gloo-net), BrowserClock (gloo)     │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! # Modules
//!
//! - [`config`] - Endpoint, limits and timings
//! - [`error`] - Validation, transport and upload errors
//! - [`types`] - File metadata, UI state, API response
//! - [`format`] - Human readable file sizes
//! - [`validation`] - Client-side file checks
//! - [`progress`] - Simulated progress model
//! - [`state`] - Widget state machine
//! - [`workflow`] - Async submission and progress tasks
//! - [`services`] - Browser implementations of the workflow seams
//! - [`components`] - Leptos views

use leptos::*;
use leptos_meta::{provide_meta_context, Title};
use leptos_router::*;

// =============================================================================
// Module declarations
// =============================================================================

pub mod config;
pub mod error;
pub mod types;
pub mod format;
pub mod validation;
pub mod progress;
pub mod state;
pub mod workflow;
pub mod services;
pub mod components;

// =============================================================================
// Re-exports
// =============================================================================

// Configuration
pub use config::*;

// Errors
pub use error::{TransportError, UploadError, UploadResult, ValidationError};

// Types
pub use types::{
    AttemptId, FileInfo, Notice, SelectedFile, UploadData, UploadOutcome, UploadResponse,
    UploadUiState,
};

// Core
pub use format::format_file_size;
pub use validation::validate_file;
pub use progress::{SimulatedProgress, Tick};
pub use state::{Settled, StateHandle, Submission, WidgetState};
pub use workflow::{run_upload, Clock, Completion, UploadTransport};

// Components
pub use components::*;

// Services
pub use services::*;

// =============================================================================
// Application Entry Point
// =============================================================================

/// Installs logging and mounts the page. Call once.
pub fn mount() {
    // Setup panic hook for better error messages
    console_error_panic_hook::set_once();

    // Setup console logging
    _ = console_log::init_with_level(log::Level::Debug);

    log::info!("📄 PDF Upload - Starting Leptos App");

    mount_to_body(|| view! { <App/> });
}

#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    view! {
        <Title text="PDF Upload"/>
        <Router>
            <main>
                <Routes>
                    <Route path="/" view=UploadPage/>
                </Routes>
            </main>
        </Router>
    }
}

#[component]
fn UploadPage() -> impl IntoView {
    view! {
        <div class="container">
            <div class="hero">
                <h1 class="hero-title">"PDF Upload"</h1>
                <p class="hero-subtitle">
                    "Send a PDF document for processing. One file at a time, up to 10MB."
                </p>
            </div>
            <UploadWidget/>
        </div>
    }
}
