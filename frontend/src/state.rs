//! Widget state machine.
//!
//! [`WidgetState`] owns the selection and everything visible around it.
//! Views read it, event handlers and async workflows mutate it through the
//! transition methods below. Continuations carry the [`AttemptId`] they were
//! started with and are refused once the widget moved on.

use leptos::{RwSignal, SignalUpdate};

use crate::error::{UploadError, ValidationError};
use crate::format::format_file_size;
use crate::progress::{SimulatedProgress, Tick};
use crate::types::{AttemptId, Notice, SelectedFile, UploadOutcome, UploadResponse, UploadUiState};
use crate::validation::validate_file;

/// What a successful `begin_submit` hands to the upload workflow.
#[derive(Clone, Debug, PartialEq)]
pub struct Submission<B> {
    pub attempt: AttemptId,
    pub file_name: String,
    pub blob: B,
}

/// Next step after the settle delay.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Settled {
    /// Success shown; clear the selection after the follow-up delay.
    ScheduleClear,
    /// Error shown; nothing left to do.
    Done,
}

#[derive(Clone, Debug)]
pub struct WidgetState<B> {
    selected: Option<SelectedFile<B>>,
    attempt: AttemptId,
    in_flight: bool,
    progress: Option<SimulatedProgress>,
    notice: Option<Notice>,
    outcome: Option<UploadOutcome>,
    drag_active: bool,
}

impl<B> Default for WidgetState<B> {
    fn default() -> Self {
        Self {
            selected: None,
            attempt: AttemptId::default(),
            in_flight: false,
            progress: None,
            notice: None,
            outcome: None,
            drag_active: false,
        }
    }
}

impl<B: Clone> WidgetState<B> {
    pub fn new() -> Self {
        Self::default()
    }

    // -------------------------------------------------------------------------
    // Read side
    // -------------------------------------------------------------------------

    pub fn selected(&self) -> Option<&SelectedFile<B>> {
        self.selected.as_ref()
    }

    pub fn has_selection(&self) -> bool {
        self.selected.is_some()
    }

    pub fn selected_name(&self) -> String {
        self.selected
            .as_ref()
            .map(|f| f.info.name.clone())
            .unwrap_or_default()
    }

    pub fn selected_size(&self) -> String {
        self.selected
            .as_ref()
            .map(|f| format_file_size(f.info.size_bytes))
            .unwrap_or_default()
    }

    pub fn attempt(&self) -> AttemptId {
        self.attempt
    }

    pub fn is_in_flight(&self) -> bool {
        self.in_flight
    }

    pub fn can_submit(&self) -> bool {
        self.selected.is_some() && !self.in_flight
    }

    /// The submit button shows its spinner instead of its label.
    pub fn is_loading(&self) -> bool {
        self.in_flight
    }

    pub fn drag_active(&self) -> bool {
        self.drag_active
    }

    pub fn progress(&self) -> Option<&SimulatedProgress> {
        self.progress.as_ref()
    }

    pub fn progress_visible(&self) -> bool {
        self.progress.is_some()
    }

    pub fn notice(&self) -> Option<&Notice> {
        self.notice.as_ref()
    }

    pub fn success_message(&self) -> Option<String> {
        match &self.notice {
            Some(Notice::Success(msg)) => Some(msg.clone()),
            _ => None,
        }
    }

    pub fn error_message(&self) -> Option<String> {
        match &self.notice {
            Some(Notice::Error(msg)) => Some(msg.clone()),
            _ => None,
        }
    }

    pub fn ui_state(&self) -> UploadUiState {
        if self.outcome == Some(UploadOutcome::Succeeded) {
            return UploadUiState::Succeeded;
        }
        if self.in_flight {
            return UploadUiState::Uploading;
        }
        match (&self.selected, self.outcome) {
            (None, _) => UploadUiState::Idle,
            (Some(_), Some(UploadOutcome::Failed)) => UploadUiState::Failed,
            (Some(_), _) => UploadUiState::FileChosen,
        }
    }

    // -------------------------------------------------------------------------
    // User events
    // -------------------------------------------------------------------------

    pub fn set_drag_active(&mut self, active: bool) {
        self.drag_active = active;
    }

    /// Validates and stores a file. On rejection the previous selection stays.
    pub fn select_file(&mut self, file: SelectedFile<B>) -> Result<(), ValidationError> {
        if let Err(err) = validate_file(&file.info) {
            log::warn!("Rejected {:?}: {}", file.info.name, err);
            self.notice = Some(Notice::Error(err.to_string()));
            return Err(err);
        }

        log::info!(
            "📄 Selected {} ({})",
            file.info.name,
            format_file_size(file.info.size_bytes)
        );
        self.supersede();
        self.selected = Some(file);
        Ok(())
    }

    /// Back to the initial, empty widget.
    pub fn clear_selection(&mut self) {
        self.supersede();
        self.selected = None;
        self.drag_active = false;
    }

    /// Starts an attempt. `None` when nothing is selected or one is running.
    pub fn begin_submit(&mut self) -> Option<Submission<B>> {
        if self.in_flight {
            return None;
        }
        let file = self.selected.as_ref()?;
        let submission = Submission {
            attempt: self.attempt.next(),
            file_name: file.info.name.clone(),
            blob: file.blob.clone(),
        };

        self.attempt = submission.attempt;
        self.in_flight = true;
        self.progress = Some(SimulatedProgress::start(submission.attempt));
        self.notice = None;
        self.outcome = None;
        Some(submission)
    }

    // -------------------------------------------------------------------------
    // Workflow continuations
    // -------------------------------------------------------------------------

    pub fn is_current(&self, attempt: AttemptId) -> bool {
        self.attempt == attempt && self.in_flight
    }

    pub fn advance_progress(&mut self, attempt: AttemptId, step: f64, cap: f64) -> Tick {
        if !self.is_current(attempt) {
            return Tick::Stale;
        }
        match self.progress.as_mut() {
            Some(progress) => progress.tick(attempt, step, cap),
            None => Tick::Stale,
        }
    }

    /// A JSON reply arrived. Returns `false` if the attempt is stale.
    pub fn response_arrived(&mut self, attempt: AttemptId) -> bool {
        if !self.is_current(attempt) {
            return false;
        }
        if let Some(progress) = self.progress.as_mut() {
            progress.complete();
        }
        true
    }

    /// Shows the outcome of a reply once the settle delay elapsed.
    pub fn settle_response(&mut self, attempt: AttemptId, response: &UploadResponse) -> Option<Settled> {
        if !self.is_current(attempt) {
            return None;
        }

        if response.success {
            let name = response.uploaded_name(&self.selected_name()).to_string();
            self.notice = Some(Notice::Success(format!(
                "File \"{}\" uploaded successfully!",
                name
            )));
            self.outcome = Some(UploadOutcome::Succeeded);
            Some(Settled::ScheduleClear)
        } else {
            let err = UploadError::application(response.message.clone(), response.error.clone());
            self.fail(&err);
            Some(Settled::Done)
        }
    }

    /// The request never produced a usable reply.
    pub fn transport_failed(&mut self, attempt: AttemptId, err: &UploadError) -> bool {
        if !self.is_current(attempt) {
            return false;
        }
        self.fail(err);
        true
    }

    /// Auto-clear after a success. Ignored if the user already moved on.
    pub fn finish_success(&mut self, attempt: AttemptId) -> bool {
        if !self.is_current(attempt) || self.outcome != Some(UploadOutcome::Succeeded) {
            return false;
        }
        self.clear_selection();
        true
    }

    fn fail(&mut self, err: &UploadError) {
        self.notice = Some(Notice::Error(err.to_string()));
        self.outcome = Some(UploadOutcome::Failed);
        self.in_flight = false;
        if err.hides_progress() {
            self.progress = None;
        }
    }

    /// Drops everything tied to the current attempt and invalidates its continuations.
    fn supersede(&mut self) {
        self.attempt = self.attempt.next();
        self.in_flight = false;
        self.progress = None;
        self.notice = None;
        self.outcome = None;
    }
}

// =============================================================================
// State handles
// =============================================================================

/// Shared access to a live [`WidgetState`].
///
/// Async workflows hold a handle instead of the state itself. `apply` returns
/// `None` once the widget has been torn down, which ends the workflow.
pub trait StateHandle<B>: Clone + 'static {
    fn apply<R>(&self, f: impl FnOnce(&mut WidgetState<B>) -> R) -> Option<R>;
}

impl<B: 'static> StateHandle<B> for RwSignal<WidgetState<B>> {
    fn apply<R>(&self, f: impl FnOnce(&mut WidgetState<B>) -> R) -> Option<R> {
        self.try_update(f)
    }
}


#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{MAX_FILE_SIZE, PDF_MIME_TYPE, PROGRESS_CAP};
    use crate::error::{TransportError, CONNECTION_ERROR};
    use crate::types::{FileInfo, UploadData};

    fn file(name: &str, size: u64, mime: &str) -> SelectedFile<()> {
        SelectedFile::new(FileInfo::new(name, size, mime), ())
    }

    fn report() -> SelectedFile<()> {
        file("report.pdf", 2 * 1024 * 1024, PDF_MIME_TYPE)
    }

    fn chosen() -> WidgetState<()> {
        let mut state = WidgetState::new();
        state.select_file(report()).unwrap();
        state
    }

    #[test]
    fn test_initial_state() {
        let state: WidgetState<()> = WidgetState::new();
        assert_eq!(state.ui_state(), UploadUiState::Idle);
        assert!(!state.can_submit());
        assert!(!state.progress_visible());
        assert!(state.notice().is_none());
    }

    #[test]
    fn test_select_valid_pdf() {
        let state = chosen();
        assert_eq!(state.ui_state(), UploadUiState::FileChosen);
        assert!(state.can_submit());
        assert_eq!(state.selected_name(), "report.pdf");
        assert_eq!(state.selected_size(), "2 MB");
        assert!(state.notice().is_none());
    }

    #[test]
    fn test_select_accepts_size_bounds() {
        for size in [1, MAX_FILE_SIZE] {
            let mut state = WidgetState::new();
            assert!(state.select_file(file("a.pdf", size, PDF_MIME_TYPE)).is_ok());
            assert!(state.can_submit());
        }
    }

    #[test]
    fn test_rejection_keeps_previous_selection() {
        let mut state = chosen();

        let err = state.select_file(file("notes.txt", 10, "text/plain")).unwrap_err();
        assert_eq!(err, ValidationError::WrongType);
        assert_eq!(state.selected_name(), "report.pdf");
        assert_eq!(state.error_message(), Some(ValidationError::WrongType.to_string()));
        assert!(state.can_submit());
    }

    #[test]
    fn test_rejection_without_selection() {
        let mut state: WidgetState<()> = WidgetState::new();

        let err = state
            .select_file(file("huge.pdf", MAX_FILE_SIZE + 1, PDF_MIME_TYPE))
            .unwrap_err();
        assert_eq!(err, ValidationError::TooLarge);
        assert!(!state.has_selection());

        let err = state.select_file(file("empty.pdf", 0, PDF_MIME_TYPE)).unwrap_err();
        assert_eq!(err, ValidationError::Empty);
        assert_eq!(state.error_message(), Some(ValidationError::Empty.to_string()));
        assert_eq!(state.ui_state(), UploadUiState::Idle);
    }

    #[test]
    fn test_valid_selection_clears_message() {
        let mut state: WidgetState<()> = WidgetState::new();
        let _ = state.select_file(file("empty.pdf", 0, PDF_MIME_TYPE));
        assert!(state.notice().is_some());

        state.select_file(report()).unwrap();
        assert!(state.notice().is_none());
    }

    #[test]
    fn test_submit_without_selection_is_noop() {
        let mut state: WidgetState<()> = WidgetState::new();
        let before = state.attempt();
        assert!(state.begin_submit().is_none());
        assert_eq!(state.attempt(), before);
        assert!(!state.progress_visible());
    }

    #[test]
    fn test_begin_submit() {
        let mut state = chosen();
        let submission = state.begin_submit().unwrap();

        assert_eq!(submission.file_name, "report.pdf");
        assert_eq!(submission.attempt, state.attempt());
        assert_eq!(state.ui_state(), UploadUiState::Uploading);
        assert!(state.is_loading());
        assert!(!state.can_submit());
        assert_eq!(state.progress().map(|p| p.label()), Some("0%".to_string()));

        // Single upload in flight.
        assert!(state.begin_submit().is_none());
    }

    #[test]
    fn test_success_flow() {
        let mut state = chosen();
        let submission = state.begin_submit().unwrap();
        let response = UploadResponse {
            success: true,
            data: Some(UploadData {
                original_filename: Some("report.pdf".into()),
                ..Default::default()
            }),
            ..Default::default()
        };

        assert!(state.response_arrived(submission.attempt));
        assert_eq!(state.progress().map(|p| p.percent()), Some(100.0));
        assert_eq!(
            state.settle_response(submission.attempt, &response),
            Some(Settled::ScheduleClear)
        );
        assert!(state.success_message().unwrap().contains("report.pdf"));
        assert_eq!(state.ui_state(), UploadUiState::Succeeded);
        assert!(!state.can_submit());

        assert!(state.finish_success(submission.attempt));
        assert!(!state.has_selection());
        assert_eq!(state.ui_state(), UploadUiState::Idle);
    }

    #[test]
    fn test_application_failure_keeps_selection() {
        let mut state = chosen();
        let submission = state.begin_submit().unwrap();
        let response = UploadResponse {
            success: false,
            message: Some("quota exceeded".into()),
            ..Default::default()
        };

        state.response_arrived(submission.attempt);
        assert_eq!(state.settle_response(submission.attempt, &response), Some(Settled::Done));
        assert_eq!(state.error_message().as_deref(), Some("quota exceeded"));
        assert_eq!(state.selected_name(), "report.pdf");
        assert!(state.can_submit());
        assert!(!state.is_loading());
        assert_eq!(state.ui_state(), UploadUiState::Failed);
    }

    #[test]
    fn test_transport_failure_hides_progress() {
        let mut state = chosen();
        let submission = state.begin_submit().unwrap();
        let err: UploadError = TransportError::Network("offline".into()).into();

        assert!(state.transport_failed(submission.attempt, &err));
        assert_eq!(state.error_message().as_deref(), Some(CONNECTION_ERROR));
        assert!(!state.progress_visible());
        assert!(state.can_submit());
        assert!(state.has_selection());
    }

    #[test]
    fn test_clear_selection_from_any_state() {
        let mut uploading = chosen();
        uploading.begin_submit();
        let mut failed = chosen();
        let s = failed.begin_submit().unwrap();
        failed.transport_failed(s.attempt, &TransportError::Network("x".into()).into());
        let mut rejected: WidgetState<()> = WidgetState::new();
        let _ = rejected.select_file(file("a.txt", 1, "text/plain"));

        for mut state in [WidgetState::new(), chosen(), uploading, failed, rejected] {
            state.set_drag_active(true);
            state.clear_selection();
            assert!(!state.has_selection());
            assert!(!state.can_submit());
            assert!(!state.is_loading());
            assert!(!state.progress_visible());
            assert!(state.notice().is_none());
            assert!(!state.drag_active());
            assert_eq!(state.ui_state(), UploadUiState::Idle);
        }
    }

    #[test]
    fn test_stale_attempt_is_ignored() {
        let mut state = chosen();
        let first = state.begin_submit().unwrap();
        state.clear_selection();
        state.select_file(report()).unwrap();
        let second = state.begin_submit().unwrap();

        assert_eq!(state.advance_progress(first.attempt, 50.0, PROGRESS_CAP), Tick::Stale);
        assert!(!state.response_arrived(first.attempt));
        assert!(!state.finish_success(first.attempt));
        assert_eq!(state.progress().map(|p| p.percent()), Some(0.0));
        assert!(state.is_current(second.attempt));
    }

    #[test]
    fn test_auto_clear_skipped_after_new_selection() {
        let mut state = chosen();
        let submission = state.begin_submit().unwrap();
        state.response_arrived(submission.attempt);
        state.settle_response(
            submission.attempt,
            &UploadResponse {
                success: true,
                ..Default::default()
            },
        );

        state.select_file(file("other.pdf", 10, PDF_MIME_TYPE)).unwrap();
        assert!(!state.finish_success(submission.attempt));
        assert_eq!(state.selected_name(), "other.pdf");
    }

    #[test]
    fn test_progress_capped_before_response() {
        let mut state = chosen();
        let submission = state.begin_submit().unwrap();
        let mut last = Tick::Advanced(0.0);
        for _ in 0..20 {
            last = state.advance_progress(submission.attempt, 14.0, PROGRESS_CAP);
            assert!(state.progress().unwrap().percent() <= PROGRESS_CAP);
            if !last.keeps_running() {
                break;
            }
        }
        assert_eq!(last, Tick::Capped(PROGRESS_CAP));
    }
}
