use std::path::PathBuf;

mod session;
mod worker;

pub use session::{
    JobOutcome, ProcessingJob, Progress, Result, Session, SessionError, SessionEvent, SessionFile,
    SessionState, transition,
};
pub use worker::worker_task;

// Re-export types from the stamping crate
pub use folio_stamp::{ConfigUpdate, FolioConfig, PageGeometry, PreviewOverlay};

/// Commands sent from the host to the worker
#[derive(Debug)]
pub enum SessionCommand {
    LoadFile {
        name: String,
        bytes: Vec<u8>,
    },
    LoadPath {
        path: PathBuf,
    },
    UpdateConfig {
        update: ConfigUpdate,
    },
    LoadConfig {
        path: PathBuf,
    },
    StartProcessing {
        /// Fixed seed for reproducible jitter
        seed: Option<u64>,
    },
    CancelProcessing,
    /// Overlay for one page of the loaded file, as a viewer would draw it
    Preview {
        page_px: PageGeometry,
        page_number: usize,
        zoom: f64,
    },
    ClearError,
    RestartAfterComplete,
    Reset,
}

/// Updates sent from the worker to the host
#[derive(Debug, Clone)]
pub enum SessionUpdate {
    StateChanged {
        state: SessionState,
    },
    FileLoaded {
        name: String,
        page_count: usize,
    },
    ConfigChanged {
        config: FolioConfig,
        /// Why the configuration cannot be used yet, if it cannot
        issue: Option<String>,
    },
    Progress {
        current: usize,
        total: usize,
    },
    Completed {
        pdf_bytes: Vec<u8>,
    },
    Cancelled,
    PreviewReady {
        overlay: PreviewOverlay,
    },
    Error {
        message: String,
    },
}
