//! Upload workflows.
//!
//! A submission runs two cooperative tasks on the UI thread:
//!
//! ```text
//! begin_submit ──┬── run_progress   tick every 200 ms, stop at 90% or when stale
//!                └── run_submission POST ─▶ 100% ─▶ 500 ms ─▶ message ─▶ 3000 ms ─▶ clear
//! ```
//!
//! Both are generic over a [`Clock`] and an [`UploadTransport`] so they run in
//! the browser (see [`crate::services`]) and in native tests alike. Every
//! state write goes through a [`StateHandle`] and is keyed by the attempt id,
//! so a torn-down widget or a superseded attempt ends the task.

use futures::future::{join, LocalBoxFuture};
use rand::Rng;

use crate::config::UploadConfig;
use crate::error::{TransportError, UploadError};
use crate::state::{Settled, StateHandle, Submission};
use crate::types::{AttemptId, UploadResponse};

/// Source of delays.
pub trait Clock: Clone + 'static {
    fn sleep(&self, ms: u32) -> LocalBoxFuture<'static, ()>;
}

/// Sends the selected blob to the upload endpoint.
pub trait UploadTransport<B>: 'static {
    fn upload(&self, blob: &B) -> LocalBoxFuture<'static, Result<UploadResponse, TransportError>>;
}

/// How a submission ended.
#[derive(Clone, Debug, PartialEq)]
pub enum Completion {
    Succeeded(UploadResponse),
    Failed(UploadError),
    /// The widget moved on (new selection, removal, teardown) before the end.
    Abandoned,
}

/// Starts a submission if one is possible and drives it to the end.
///
/// Returns `None` when nothing is selected or an upload is already running.
pub async fn run_upload<B, H, T, C, R>(
    handle: H,
    transport: T,
    clock: C,
    mut rng: R,
    config: UploadConfig,
) -> Option<Completion>
where
    B: Clone + 'static,
    H: StateHandle<B>,
    T: UploadTransport<B>,
    C: Clock,
    R: Rng,
{
    let submission = handle.apply(|s| s.begin_submit()).flatten()?;
    log::info!(
        "📤 Uploading {} (attempt {})",
        submission.file_name,
        submission.attempt.value()
    );

    let attempt = submission.attempt;
    let (_, completion) = join(
        run_progress(&handle, attempt, &clock, &mut rng, &config),
        run_submission(&handle, submission, &transport, &clock, &config),
    )
    .await;
    Some(completion)
}

/// Simulated progress for one attempt.
pub async fn run_progress<B, H, C, R>(
    handle: &H,
    attempt: AttemptId,
    clock: &C,
    rng: &mut R,
    config: &UploadConfig,
) where
    B: Clone + 'static,
    H: StateHandle<B>,
    C: Clock,
    R: Rng,
{
    loop {
        clock.sleep(config.progress_tick_ms).await;
        let step = rng.gen_range(0.0..config.progress_step_bound());
        let tick = handle.apply(|s| s.advance_progress(attempt, step, config.progress_cap));
        match tick {
            Some(tick) if tick.keeps_running() => continue,
            _ => break,
        }
    }
    log::debug!("Progress ticker for attempt {} stopped", attempt.value());
}

/// Performs the request and walks the reply through its delayed follow-ups.
pub async fn run_submission<B, H, T, C>(
    handle: &H,
    submission: Submission<B>,
    transport: &T,
    clock: &C,
    config: &UploadConfig,
) -> Completion
where
    B: Clone + 'static,
    H: StateHandle<B>,
    T: UploadTransport<B>,
    C: Clock,
{
    let attempt = submission.attempt;

    let response = match transport.upload(&submission.blob).await {
        Ok(response) => response,
        Err(err) => {
            log::error!("❌ Upload failed: {}", err);
            let err = UploadError::from(err);
            return match handle.apply(|s| s.transport_failed(attempt, &err)) {
                Some(true) => Completion::Failed(err),
                _ => Completion::Abandoned,
            };
        }
    };

    if handle.apply(|s| s.response_arrived(attempt)) != Some(true) {
        log::debug!("Reply for stale attempt {} dropped", attempt.value());
        return Completion::Abandoned;
    }

    clock.sleep(config.settle_delay_ms).await;

    match handle.apply(|s| s.settle_response(attempt, &response)).flatten() {
        Some(Settled::ScheduleClear) => {
            log::info!("✅ Upload successful: {}", response.uploaded_name(&submission.file_name));
            clock.sleep(config.clear_delay_ms).await;
            if handle.apply(|s| s.finish_success(attempt)) == Some(true) {
                log::info!("Selection cleared after upload");
            }
            Completion::Succeeded(response)
        }
        Some(Settled::Done) => {
            let err = UploadError::application(response.message.clone(), response.error.clone());
            log::warn!(
                "Server rejected upload ({}): {}",
                response.error.as_deref().unwrap_or("no code"),
                err
            );
            Completion::Failed(err)
        }
        None => Completion::Abandoned,
    }
}
