//! Processing session
//!
//! A [`Session`] is owned by whoever hosts the stamping workflow. It holds
//! the uploaded file, the working configuration and the last result, and it
//! moves through [`SessionState`] only via [`transition`].

use folio_stamp::{CancelToken, ConfigUpdate, FolioConfig, FolioError};
use std::fmt;
use thiserror::Error;

/// How far into the file header the `%PDF-` marker may appear
const HEADER_SEARCH_LIMIT: usize = 1024;

#[derive(Error, Debug)]
pub enum SessionError {
    #[error("Cannot {event} while {state}")]
    InvalidTransition {
        state: SessionState,
        event: SessionEvent,
    },
    #[error("Rejected file: {0}")]
    InvalidFile(String),
    #[error(transparent)]
    Stamp(#[from] FolioError),
}

pub type Result<T> = std::result::Result<T, SessionError>;

/// Aggregate status of the workflow
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionState {
    /// No file yet
    Idle,
    /// File accepted, configuration currently invalid
    Configuring,
    /// File and configuration both usable
    Ready,
    Processing,
    /// Stamped output is available
    Completed,
    /// The last run failed; the message is kept until cleared
    Failed,
}

impl fmt::Display for SessionState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            SessionState::Idle => "idle",
            SessionState::Configuring => "configuring",
            SessionState::Ready => "ready",
            SessionState::Processing => "processing",
            SessionState::Completed => "completed",
            SessionState::Failed => "failed",
        };
        f.write_str(name)
    }
}

/// Inputs to the transition table
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionEvent {
    FileAccepted { config_valid: bool },
    FileRejected,
    ConfigChanged { valid: bool },
    Start,
    Progress,
    Finished,
    Failed,
    Cancel,
    ClearError,
    Restart,
    Reset,
}

impl fmt::Display for SessionEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            SessionEvent::FileAccepted { .. } => "accept a file",
            SessionEvent::FileRejected => "reject a file",
            SessionEvent::ConfigChanged { .. } => "change the configuration",
            SessionEvent::Start => "start processing",
            SessionEvent::Progress => "report progress",
            SessionEvent::Finished => "finish processing",
            SessionEvent::Failed => "fail processing",
            SessionEvent::Cancel => "cancel processing",
            SessionEvent::ClearError => "clear the error",
            SessionEvent::Restart => "restart",
            SessionEvent::Reset => "reset",
        };
        f.write_str(name)
    }
}

/// The session transition table. `None` means the event is not allowed.
pub fn transition(state: SessionState, event: SessionEvent) -> Option<SessionState> {
    use SessionEvent as E;
    use SessionState as S;

    let configured = |valid: bool| if valid { S::Ready } else { S::Configuring };

    match (state, event) {
        (S::Idle | S::Configuring | S::Ready, E::FileAccepted { config_valid }) => {
            Some(configured(config_valid))
        }
        (S::Idle | S::Configuring | S::Ready, E::FileRejected) => Some(S::Idle),

        // Configuration can be edited before a file arrives
        (S::Idle, E::ConfigChanged { .. }) => Some(S::Idle),
        (S::Configuring | S::Ready, E::ConfigChanged { valid }) => Some(configured(valid)),

        (S::Ready, E::Start) => Some(S::Processing),
        (S::Processing, E::Progress) => Some(S::Processing),
        (S::Processing, E::Finished) => Some(S::Completed),
        (S::Processing, E::Failed) => Some(S::Failed),
        (S::Processing, E::Cancel) => Some(S::Ready),

        (S::Failed, E::ClearError) => Some(S::Ready),
        (S::Completed, E::Restart) => Some(S::Idle),
        (S::Idle | S::Configuring | S::Ready | S::Completed | S::Failed, E::Reset) => Some(S::Idle),

        _ => None,
    }
}

/// A file accepted into the session
#[derive(Debug, Clone)]
pub struct SessionFile {
    pub name: String,
    pub bytes: Vec<u8>,
    pub page_count: usize,
}

/// Work handed to whatever runs the stamping engine
#[derive(Debug, Clone)]
pub struct ProcessingJob {
    pub id: u64,
    pub pdf_bytes: Vec<u8>,
    pub config: FolioConfig,
    pub cancel: CancelToken,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Progress {
    pub current: usize,
    pub total: usize,
}

/// What happened to a finished job's result
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum JobOutcome {
    Completed,
    Failed,
    Cancelled,
    /// The job was superseded or cancelled earlier; its result was dropped
    Stale,
}

pub struct Session {
    state: SessionState,
    config: FolioConfig,
    config_issue: Option<String>,
    file: Option<SessionFile>,
    progress: Progress,
    error: Option<String>,
    output: Option<Vec<u8>>,
    active_job: Option<(u64, CancelToken)>,
    next_job_id: u64,
}

impl Session {
    pub fn new(config: FolioConfig) -> Self {
        let config_issue = config.validate().err().map(|e| e.to_string());
        Self {
            state: SessionState::Idle,
            config,
            config_issue,
            file: None,
            progress: Progress::default(),
            error: None,
            output: None,
            active_job: None,
            next_job_id: 1,
        }
    }

    pub fn state(&self) -> SessionState {
        self.state
    }

    pub fn config(&self) -> &FolioConfig {
        &self.config
    }

    /// Why the current configuration cannot be used, if it cannot
    pub fn config_issue(&self) -> Option<&str> {
        self.config_issue.as_deref()
    }

    pub fn file(&self) -> Option<&SessionFile> {
        self.file.as_ref()
    }

    pub fn progress(&self) -> Progress {
        self.progress
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn output(&self) -> Option<&[u8]> {
        self.output.as_deref()
    }

    /// Hand the stamped output to the caller, leaving the session completed
    pub fn take_output(&mut self) -> Option<Vec<u8>> {
        self.output.take()
    }

    fn fire(&mut self, event: SessionEvent) -> Result<SessionState> {
        let next = transition(self.state, event).ok_or(SessionError::InvalidTransition {
            state: self.state,
            event,
        })?;
        if next != self.state {
            log::debug!("Session {} -> {} on {}", self.state, next, event);
        }
        self.state = next;
        Ok(next)
    }

    fn ensure(&self, event: SessionEvent) -> Result<()> {
        match transition(self.state, event) {
            Some(_) => Ok(()),
            None => Err(SessionError::InvalidTransition {
                state: self.state,
                event,
            }),
        }
    }

    /// Accept a PDF into the session, replacing any earlier file.
    ///
    /// Returns the page count. A rejected file clears the previous one.
    pub fn load_file(&mut self, name: impl Into<String>, bytes: Vec<u8>) -> Result<usize> {
        self.ensure(SessionEvent::FileAccepted { config_valid: true })?;
        let name = name.into();

        match inspect_pdf(&bytes) {
            Ok(page_count) => {
                log::info!("Accepted {} with {} page(s)", name, page_count);
                self.file = Some(SessionFile {
                    name,
                    bytes,
                    page_count,
                });
                self.error = None;
                self.output = None;
                self.fire(SessionEvent::FileAccepted {
                    config_valid: self.config_issue.is_none(),
                })?;
                Ok(page_count)
            }
            Err(message) => {
                log::warn!("Rejected {}: {}", name, message);
                self.file = None;
                self.error = Some(message.clone());
                self.fire(SessionEvent::FileRejected)?;
                Err(SessionError::InvalidFile(message))
            }
        }
    }

    /// Apply a configuration change and revalidate.
    ///
    /// Invalid values are kept so they can be corrected; they only block
    /// processing.
    pub fn update_config(&mut self, update: ConfigUpdate) -> Result<()> {
        self.ensure(SessionEvent::ConfigChanged { valid: true })?;

        // Empty section updates change nothing
        let is_noop = match &update {
            ConfigUpdate::Position(u) => u.is_empty(),
            ConfigUpdate::Appearance(u) => u.is_empty(),
            ConfigUpdate::Numbering(u) => u.is_empty(),
            ConfigUpdate::Reset => false,
        };
        if is_noop {
            return Ok(());
        }

        self.config.apply(update);
        self.config_issue = self.config.validate().err().map(|e| e.to_string());
        if let Some(issue) = &self.config_issue {
            log::debug!("Configuration not usable: {}", issue);
        }
        self.fire(SessionEvent::ConfigChanged {
            valid: self.config_issue.is_none(),
        })?;
        Ok(())
    }

    /// Replace the whole configuration, e.g. one loaded from disk
    pub fn replace_config(&mut self, config: FolioConfig) -> Result<()> {
        self.ensure(SessionEvent::ConfigChanged { valid: true })?;
        self.config = config;
        self.config_issue = self.config.validate().err().map(|e| e.to_string());
        self.fire(SessionEvent::ConfigChanged {
            valid: self.config_issue.is_none(),
        })?;
        Ok(())
    }

    /// Move to processing and return the job to run
    pub fn begin_processing(&mut self) -> Result<ProcessingJob> {
        self.ensure(SessionEvent::Start)?;
        let file = self.file.as_ref().ok_or(SessionError::InvalidTransition {
            state: self.state,
            event: SessionEvent::Start,
        })?;

        let id = self.next_job_id;
        self.next_job_id += 1;
        let cancel = CancelToken::new();
        let job = ProcessingJob {
            id,
            pdf_bytes: file.bytes.clone(),
            config: self.config.clone(),
            cancel: cancel.clone(),
        };

        self.progress = Progress {
            current: 0,
            total: file.page_count,
        };
        self.error = None;
        self.output = None;
        self.active_job = Some((id, cancel));
        self.fire(SessionEvent::Start)?;
        Ok(job)
    }

    fn is_active(&self, job_id: u64) -> bool {
        self.state == SessionState::Processing
            && self.active_job.as_ref().is_some_and(|(id, _)| *id == job_id)
    }

    /// Record per-page progress. Returns false if the job is no longer current.
    pub fn report_progress(&mut self, job_id: u64, current: usize, total: usize) -> bool {
        if !self.is_active(job_id) {
            return false;
        }
        self.progress = Progress { current, total };
        self.state = transition(self.state, SessionEvent::Progress).unwrap_or(self.state);
        true
    }

    /// Record a job's result
    pub fn finish(&mut self, job_id: u64, result: folio_stamp::Result<Vec<u8>>) -> Result<JobOutcome> {
        if !self.is_active(job_id) {
            log::debug!("Dropping result of stale job {}", job_id);
            return Ok(JobOutcome::Stale);
        }
        self.active_job = None;

        match result {
            Ok(bytes) => {
                log::info!("Stamping finished ({} bytes)", bytes.len());
                self.output = Some(bytes);
                self.fire(SessionEvent::Finished)?;
                Ok(JobOutcome::Completed)
            }
            Err(FolioError::Cancelled) => {
                self.fire(SessionEvent::Cancel)?;
                Ok(JobOutcome::Cancelled)
            }
            Err(e) => {
                log::error!("Stamping failed: {}", e);
                self.error = Some(e.to_string());
                self.fire(SessionEvent::Failed)?;
                Ok(JobOutcome::Failed)
            }
        }
    }

    /// Stop the running job and return to ready
    pub fn cancel(&mut self) -> Result<()> {
        self.fire(SessionEvent::Cancel)?;
        if let Some((_, cancel)) = self.active_job.take() {
            cancel.cancel();
        }
        self.progress = Progress::default();
        Ok(())
    }

    pub fn clear_error(&mut self) -> Result<()> {
        self.fire(SessionEvent::ClearError)?;
        self.error = None;
        Ok(())
    }

    /// Start over after a completed run, keeping the configuration
    pub fn restart(&mut self) -> Result<()> {
        self.fire(SessionEvent::Restart)?;
        self.clear_document();
        Ok(())
    }

    /// Drop the file, result and error, keeping the configuration
    pub fn reset(&mut self) -> Result<()> {
        self.fire(SessionEvent::Reset)?;
        self.clear_document();
        Ok(())
    }

    fn clear_document(&mut self) {
        self.file = None;
        self.output = None;
        self.error = None;
        self.progress = Progress::default();
    }
}

/// Check that `bytes` look like a readable PDF and count its pages
fn inspect_pdf(bytes: &[u8]) -> std::result::Result<usize, String> {
    let head = &bytes[..bytes.len().min(HEADER_SEARCH_LIMIT)];
    if !head.windows(5).any(|w| w == b"%PDF-") {
        return Err("The file must be a valid PDF".to_string());
    }
    let doc = folio_stamp::stamp::load_document(bytes).map_err(|e| e.to_string())?;
    Ok(doc.get_pages().len())
}

#[cfg(test)]
mod tests {
    use super::*;
    use SessionEvent as E;
    use SessionState as S;

    #[test]
    fn test_happy_path_transitions() {
        let mut state = S::Idle;
        for (event, expected) in [
            (E::FileAccepted { config_valid: true }, S::Ready),
            (E::ConfigChanged { valid: false }, S::Configuring),
            (E::ConfigChanged { valid: true }, S::Ready),
            (E::Start, S::Processing),
            (E::Progress, S::Processing),
            (E::Finished, S::Completed),
            (E::Restart, S::Idle),
        ] {
            state = transition(state, event).unwrap();
            assert_eq!(state, expected, "after {:?}", event);
        }
    }

    #[test]
    fn test_failure_and_recovery() {
        assert_eq!(transition(S::Processing, E::Failed), Some(S::Failed));
        assert_eq!(transition(S::Failed, E::ClearError), Some(S::Ready));
        assert_eq!(transition(S::Failed, E::Reset), Some(S::Idle));
        assert_eq!(transition(S::Processing, E::Cancel), Some(S::Ready));
    }

    #[test]
    fn test_invalid_events_are_rejected() {
        for (state, event) in [
            (S::Idle, E::Start),
            (S::Configuring, E::Start),
            (S::Processing, E::Start),
            (S::Processing, E::Reset),
            (S::Processing, E::ConfigChanged { valid: true }),
            (S::Processing, E::FileAccepted { config_valid: true }),
            (S::Ready, E::Finished),
            (S::Ready, E::Cancel),
            (S::Completed, E::Start),
            (S::Completed, E::ConfigChanged { valid: true }),
            (S::Failed, E::Start),
            (S::Idle, E::ClearError),
            (S::Ready, E::Restart),
        ] {
            assert_eq!(transition(state, event), None, "{:?} on {:?}", event, state);
        }
    }

    #[test]
    fn test_config_edits_before_upload_stay_idle() {
        assert_eq!(transition(S::Idle, E::ConfigChanged { valid: false }), Some(S::Idle));
        assert_eq!(transition(S::Idle, E::ConfigChanged { valid: true }), Some(S::Idle));
    }

    #[test]
    fn test_non_pdf_is_rejected() {
        let mut session = Session::new(FolioConfig::default());
        let result = session.load_file("notes.txt", b"hello".to_vec());
        assert!(matches!(result, Err(SessionError::InvalidFile(_))));
        assert_eq!(session.state(), S::Idle);
        assert!(session.error().is_some());
        assert!(session.file().is_none());
    }

    #[test]
    fn test_start_without_file_is_rejected() {
        let mut session = Session::new(FolioConfig::default());
        assert!(matches!(
            session.begin_processing(),
            Err(SessionError::InvalidTransition {
                state: S::Idle,
                event: E::Start
            })
        ));
    }

    #[test]
    fn test_invalid_initial_config_is_reported() {
        let mut config = FolioConfig::default();
        config.appearance.font_size = 200.0;
        let session = Session::new(config);
        assert!(session.config_issue().unwrap().contains("Font size"));
    }
}
