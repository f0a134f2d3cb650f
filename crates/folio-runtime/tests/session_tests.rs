use folio_runtime::*;
use folio_stamp::{AppearanceUpdate, FolioError, NumberingUpdate};
use lopdf::{Dictionary, Document, Object, Stream};
use tokio::sync::mpsc;

fn create_test_pdf(num_pages: usize) -> Vec<u8> {
    let mut doc = Document::with_version("1.7");
    let pages_id = doc.new_object_id();

    let mut kids = Vec::new();
    for _ in 0..num_pages {
        let content_id = doc.add_object(Stream::new(Dictionary::new(), b"q Q".to_vec()));
        let page_id = doc.add_object(Dictionary::from_iter(vec![
            ("Type", Object::Name(b"Page".to_vec())),
            ("Parent", Object::Reference(pages_id)),
            (
                "MediaBox",
                Object::Array(vec![
                    Object::Integer(0),
                    Object::Integer(0),
                    Object::Integer(612),
                    Object::Integer(792),
                ]),
            ),
            ("Contents", Object::Reference(content_id)),
        ]));
        kids.push(Object::Reference(page_id));
    }

    doc.objects.insert(
        pages_id,
        Object::Dictionary(Dictionary::from_iter(vec![
            ("Type", Object::Name(b"Pages".to_vec())),
            ("Kids", Object::Array(kids)),
            ("Count", Object::Integer(num_pages as i64)),
        ])),
    );
    let catalog_id = doc.add_object(Dictionary::from_iter(vec![
        ("Type", Object::Name(b"Catalog".to_vec())),
        ("Pages", Object::Reference(pages_id)),
    ]));
    doc.trailer.set("Root", catalog_id);

    let mut bytes = Vec::new();
    doc.save_to(&mut bytes).unwrap();
    bytes
}

fn ready_session(pages: usize) -> Session {
    let mut session = Session::new(FolioConfig::default());
    assert_eq!(session.load_file("input.pdf", create_test_pdf(pages)).unwrap(), pages);
    assert_eq!(session.state(), SessionState::Ready);
    session
}

#[test]
fn test_full_run_completes() {
    let mut session = ready_session(3);
    let job = session.begin_processing().unwrap();
    assert_eq!(session.state(), SessionState::Processing);
    assert_eq!(session.progress().total, 3);

    let output = folio_stamp::stamp_document(&job.pdf_bytes, &job.config).unwrap();
    assert!(session.report_progress(job.id, 3, 3));
    assert_eq!(session.finish(job.id, Ok(output)).unwrap(), JobOutcome::Completed);

    assert_eq!(session.state(), SessionState::Completed);
    let stamped = session.take_output().unwrap();
    assert_eq!(Document::load_mem(&stamped).unwrap().get_pages().len(), 3);

    session.restart().unwrap();
    assert_eq!(session.state(), SessionState::Idle);
    assert!(session.file().is_none());
}

#[test]
fn test_invalid_config_blocks_processing() {
    let mut session = ready_session(1);
    session
        .update_config(ConfigUpdate::Appearance(AppearanceUpdate {
            font_size: Some(100.0),
            ..Default::default()
        }))
        .unwrap();
    assert_eq!(session.state(), SessionState::Configuring);
    assert!(session.config_issue().is_some());
    assert!(matches!(
        session.begin_processing(),
        Err(SessionError::InvalidTransition { .. })
    ));

    session
        .update_config(ConfigUpdate::Appearance(AppearanceUpdate {
            font_size: Some(24.0),
            ..Default::default()
        }))
        .unwrap();
    assert_eq!(session.state(), SessionState::Ready);
    assert_eq!(session.config().appearance.font_size, 24.0);
}

#[test]
fn test_empty_update_changes_nothing() {
    let mut session = ready_session(1);
    session
        .update_config(ConfigUpdate::Numbering(NumberingUpdate::default()))
        .unwrap();
    assert_eq!(session.config(), &FolioConfig::default());
    assert_eq!(session.state(), SessionState::Ready);
}

#[test]
fn test_cancel_returns_to_ready_and_drops_late_result() {
    let mut session = ready_session(2);
    let job = session.begin_processing().unwrap();

    session.cancel().unwrap();
    assert_eq!(session.state(), SessionState::Ready);
    assert!(job.cancel.is_cancelled());

    assert!(!session.report_progress(job.id, 1, 2));
    assert_eq!(
        session.finish(job.id, Err(FolioError::Cancelled)).unwrap(),
        JobOutcome::Stale
    );
    assert_eq!(session.state(), SessionState::Ready);
}

#[test]
fn test_failure_keeps_message_until_cleared() {
    let mut session = ready_session(1);
    let job = session.begin_processing().unwrap();

    let outcome = session
        .finish(job.id, Err(FolioError::Render("broken font".into())))
        .unwrap();
    assert_eq!(outcome, JobOutcome::Failed);
    assert_eq!(session.state(), SessionState::Failed);
    assert!(session.error().unwrap().contains("broken font"));

    session.clear_error().unwrap();
    assert_eq!(session.state(), SessionState::Ready);
    assert!(session.error().is_none());
}

#[test]
fn test_processing_rejects_other_events() {
    let mut session = ready_session(1);
    let _job = session.begin_processing().unwrap();

    assert!(session.reset().is_err());
    assert!(session.load_file("other.pdf", create_test_pdf(1)).is_err());
    assert!(session.update_config(ConfigUpdate::Reset).is_err());
    assert!(session.clear_error().is_err());
    assert_eq!(session.state(), SessionState::Processing);
}

#[test]
fn test_busy_session_refuses_to_accept_a_file() {
    let mut session = ready_session(1);
    let job = session.begin_processing().unwrap();

    let err = session.load_file("other.pdf", create_test_pdf(1)).unwrap_err();
    assert_eq!(err.to_string(), "Cannot accept a file while processing");

    session.finish(job.id, Ok(create_test_pdf(1))).unwrap();
    assert_eq!(session.state(), SessionState::Completed);
    let err = session.load_file("other.pdf", create_test_pdf(1)).unwrap_err();
    assert!(err.to_string().contains("accept a file"), "{}", err);
}

#[test]
fn test_rejected_upload_clears_previous_file() {
    let mut session = ready_session(2);
    assert!(matches!(
        session.load_file("picture.png", vec![0x89, b'P', b'N', b'G']),
        Err(SessionError::InvalidFile(_))
    ));
    assert_eq!(session.state(), SessionState::Idle);
    assert!(session.file().is_none());
}

#[test]
fn test_truncated_pdf_is_rejected() {
    let mut session = Session::new(FolioConfig::default());
    let mut bytes = create_test_pdf(2);
    bytes.truncate(40);
    assert!(matches!(
        session.load_file("cut.pdf", bytes),
        Err(SessionError::InvalidFile(_))
    ));
}

async fn next_update(rx: &mut mpsc::UnboundedReceiver<SessionUpdate>) -> SessionUpdate {
    rx.recv().await.expect("worker stopped sending updates")
}

#[tokio::test]
async fn test_worker_processes_file() {
    let (command_tx, command_rx) = mpsc::unbounded_channel();
    let (update_tx, mut update_rx) = mpsc::unbounded_channel();
    let worker = tokio::spawn(worker_task(command_rx, update_tx, FolioConfig::default()));

    command_tx
        .send(SessionCommand::LoadFile {
            name: "input.pdf".to_string(),
            bytes: create_test_pdf(3),
        })
        .unwrap();
    command_tx
        .send(SessionCommand::StartProcessing { seed: Some(9) })
        .unwrap();

    let mut progress = Vec::new();
    let pdf_bytes = loop {
        match next_update(&mut update_rx).await {
            SessionUpdate::FileLoaded { page_count, .. } => assert_eq!(page_count, 3),
            SessionUpdate::Progress { current, total } => progress.push((current, total)),
            SessionUpdate::Completed { pdf_bytes } => break pdf_bytes,
            SessionUpdate::Error { message } => panic!("unexpected error: {}", message),
            _ => {}
        }
    };

    assert_eq!(progress, vec![(0, 3), (1, 3), (2, 3), (3, 3)]);
    assert_eq!(Document::load_mem(&pdf_bytes).unwrap().get_pages().len(), 3);

    match next_update(&mut update_rx).await {
        SessionUpdate::StateChanged { state } => assert_eq!(state, SessionState::Completed),
        other => panic!("expected state change, got {:?}", other),
    }

    drop(command_tx);
    worker.await.unwrap();
}

#[tokio::test]
async fn test_worker_reports_invalid_commands() {
    let (command_tx, command_rx) = mpsc::unbounded_channel();
    let (update_tx, mut update_rx) = mpsc::unbounded_channel();
    let worker = tokio::spawn(worker_task(command_rx, update_tx, FolioConfig::default()));

    command_tx
        .send(SessionCommand::StartProcessing { seed: None })
        .unwrap();
    match next_update(&mut update_rx).await {
        SessionUpdate::Error { message } => assert!(message.contains("start processing")),
        other => panic!("expected error, got {:?}", other),
    }

    drop(command_tx);
    worker.await.unwrap();
}

#[tokio::test]
async fn test_worker_preview_uses_page_count() {
    let (command_tx, command_rx) = mpsc::unbounded_channel();
    let (update_tx, mut update_rx) = mpsc::unbounded_channel();
    let worker = tokio::spawn(worker_task(command_rx, update_tx, FolioConfig::default()));

    command_tx
        .send(SessionCommand::LoadFile {
            name: "input.pdf".to_string(),
            bytes: create_test_pdf(4),
        })
        .unwrap();
    command_tx
        .send(SessionCommand::UpdateConfig {
            update: ConfigUpdate::Numbering(NumberingUpdate {
                direction: Some(folio_stamp::Direction::Last),
                ..Default::default()
            }),
        })
        .unwrap();
    command_tx
        .send(SessionCommand::Preview {
            page_px: PageGeometry::new(612.0, 792.0).points_to_pixels(),
            page_number: 1,
            zoom: 1.0,
        })
        .unwrap();

    let overlay = loop {
        if let SessionUpdate::PreviewReady { overlay } = next_update(&mut update_rx).await {
            break overlay;
        }
    };
    assert_eq!(overlay.label.primary(), "000004");

    drop(command_tx);
    worker.await.unwrap();
}

#[tokio::test]
async fn test_worker_loads_config_file() {
    use tempfile::tempdir;

    let dir = tempdir().unwrap();
    let path = dir.path().join("folio.json");
    let mut config = FolioConfig::default();
    config.numbering.start_number = 77;
    config.save(&path).await.unwrap();

    let (command_tx, command_rx) = mpsc::unbounded_channel();
    let (update_tx, mut update_rx) = mpsc::unbounded_channel();
    let worker = tokio::spawn(worker_task(command_rx, update_tx, FolioConfig::default()));

    command_tx.send(SessionCommand::LoadConfig { path }).unwrap();
    match next_update(&mut update_rx).await {
        SessionUpdate::ConfigChanged { config, issue } => {
            assert_eq!(config.numbering.start_number, 77);
            assert!(issue.is_none());
        }
        other => panic!("expected config change, got {:?}", other),
    }

    drop(command_tx);
    worker.await.unwrap();
}
