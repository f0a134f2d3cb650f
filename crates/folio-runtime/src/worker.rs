use crate::session::{JobOutcome, ProcessingJob, Session, SessionError};
use crate::{SessionCommand, SessionUpdate};
use folio_stamp::random::ThreadRandom;
use folio_stamp::{FolioConfig, PageGeometry, preview_overlay, stamp_pdf_with_progress};
use tokio::sync::mpsc;

/// Messages from running jobs back into the worker loop
enum JobEvent {
    Progress {
        job_id: u64,
        current: usize,
        total: usize,
    },
    Done {
        job_id: u64,
        result: folio_stamp::Result<Vec<u8>>,
    },
}

/// Async worker task that owns a [`Session`] and drives it from commands.
///
/// Stamping runs on a separate task so cancel commands are handled while a
/// document is being processed. The worker exits when the command channel
/// closes, cancelling any running job.
pub async fn worker_task(
    mut command_rx: mpsc::UnboundedReceiver<SessionCommand>,
    update_tx: mpsc::UnboundedSender<SessionUpdate>,
    config: FolioConfig,
) {
    let mut session = Session::new(config);
    let (job_tx, mut job_rx) = mpsc::unbounded_channel();

    loop {
        tokio::select! {
            cmd = command_rx.recv() => match cmd {
                Some(cmd) => process_command(cmd, &mut session, &job_tx, &update_tx).await,
                None => break,
            },
            Some(event) = job_rx.recv() => handle_job_event(event, &mut session, &update_tx),
        }
    }

    if session.cancel().is_ok() {
        log::debug!("Cancelled running job on shutdown");
    }
}

async fn process_command(
    cmd: SessionCommand,
    session: &mut Session,
    job_tx: &mpsc::UnboundedSender<JobEvent>,
    update_tx: &mpsc::UnboundedSender<SessionUpdate>,
) {
    let before = session.state();

    let result = match cmd {
        SessionCommand::LoadFile { name, bytes } => handle_load_file(session, name, bytes, update_tx),
        SessionCommand::LoadPath { path } => match folio_stamp::load_pdf_bytes(&path).await {
            Ok(bytes) => {
                let name = path
                    .file_name()
                    .map(|n| n.to_string_lossy().into_owned())
                    .unwrap_or_else(|| path.display().to_string());
                handle_load_file(session, name, bytes, update_tx)
            }
            Err(e) => Err(e.into()),
        },
        SessionCommand::UpdateConfig { update } => session
            .update_config(update)
            .map(|_| send_config(session, update_tx)),
        SessionCommand::LoadConfig { path } => match FolioConfig::load(&path).await {
            Ok(config) => {
                log::info!("Loaded configuration from {}", path.display());
                session
                    .replace_config(config)
                    .map(|_| send_config(session, update_tx))
            }
            Err(e) => Err(e.into()),
        },
        SessionCommand::StartProcessing { seed } => session.begin_processing().map(|job| {
            let _ = update_tx.send(SessionUpdate::Progress {
                current: 0,
                total: session.progress().total,
            });
            spawn_job(job, seed, job_tx.clone());
        }),
        SessionCommand::CancelProcessing => session.cancel().map(|_| {
            log::info!("Processing cancelled");
            let _ = update_tx.send(SessionUpdate::Cancelled);
        }),
        SessionCommand::Preview {
            page_px,
            page_number,
            zoom,
        } => {
            handle_preview(session, page_px, page_number, zoom, update_tx);
            Ok(())
        }
        SessionCommand::ClearError => session.clear_error(),
        SessionCommand::RestartAfterComplete => session.restart(),
        SessionCommand::Reset => session.reset(),
    };

    if let Err(e) = result {
        let _ = update_tx.send(SessionUpdate::Error {
            message: e.to_string(),
        });
    }

    notify_state_change(before, session, update_tx);
}

fn handle_load_file(
    session: &mut Session,
    name: String,
    bytes: Vec<u8>,
    update_tx: &mpsc::UnboundedSender<SessionUpdate>,
) -> Result<(), SessionError> {
    let page_count = session.load_file(name.clone(), bytes)?;
    let _ = update_tx.send(SessionUpdate::FileLoaded { name, page_count });
    Ok(())
}

fn handle_preview(
    session: &Session,
    page_px: PageGeometry,
    page_number: usize,
    zoom: f64,
    update_tx: &mpsc::UnboundedSender<SessionUpdate>,
) {
    let total_pages = session.file().map(|f| f.page_count).unwrap_or(1);
    let overlay = preview_overlay(
        session.config(),
        page_px,
        page_number,
        total_pages,
        zoom,
        &mut ThreadRandom::new(),
    );
    let _ = update_tx.send(SessionUpdate::PreviewReady { overlay });
}

fn send_config(session: &Session, update_tx: &mpsc::UnboundedSender<SessionUpdate>) {
    let _ = update_tx.send(SessionUpdate::ConfigChanged {
        config: session.config().clone(),
        issue: session.config_issue().map(str::to_string),
    });
}

fn spawn_job(job: ProcessingJob, seed: Option<u64>, job_tx: mpsc::UnboundedSender<JobEvent>) {
    let job_id = job.id;
    let progress_tx = job_tx.clone();
    log::info!("Starting job {}", job_id);

    tokio::spawn(async move {
        let result = stamp_pdf_with_progress(
            job.pdf_bytes,
            job.config,
            seed,
            job.cancel,
            move |current, total| {
                let _ = progress_tx.send(JobEvent::Progress {
                    job_id,
                    current,
                    total,
                });
            },
        )
        .await;
        let _ = job_tx.send(JobEvent::Done { job_id, result });
    });
}

fn handle_job_event(
    event: JobEvent,
    session: &mut Session,
    update_tx: &mpsc::UnboundedSender<SessionUpdate>,
) {
    let before = session.state();

    match event {
        JobEvent::Progress {
            job_id,
            current,
            total,
        } => {
            if session.report_progress(job_id, current, total) {
                let _ = update_tx.send(SessionUpdate::Progress { current, total });
            }
        }
        JobEvent::Done { job_id, result } => match session.finish(job_id, result) {
            Ok(JobOutcome::Completed) => {
                if let Some(bytes) = session.output() {
                    let _ = update_tx.send(SessionUpdate::Completed {
                        pdf_bytes: bytes.to_vec(),
                    });
                }
            }
            Ok(JobOutcome::Failed) => {
                let message = session.error().unwrap_or("Unknown error").to_string();
                let _ = update_tx.send(SessionUpdate::Error { message });
            }
            Ok(JobOutcome::Cancelled) => {
                let _ = update_tx.send(SessionUpdate::Cancelled);
            }
            Ok(JobOutcome::Stale) => {}
            Err(e) => {
                let _ = update_tx.send(SessionUpdate::Error {
                    message: e.to_string(),
                });
            }
        },
    }

    notify_state_change(before, session, update_tx);
}

fn notify_state_change(
    before: crate::SessionState,
    session: &Session,
    update_tx: &mpsc::UnboundedSender<SessionUpdate>,
) {
    if session.state() != before {
        let _ = update_tx.send(SessionUpdate::StateChanged {
            state: session.state(),
        });
    }
}
