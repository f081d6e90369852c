/// End-to-end scan session tests.
///
/// A gated service holds every scan until the test releases it, which lets
/// the tests decide exactly when, and in which order, worker replies reach
/// the session. Replies are real messages from real worker threads.
use crossbeam_channel::{Receiver, Sender};
use parking_lot::Mutex;
use std::collections::HashMap;
use std::sync::Arc;
use std::time::{Duration, Instant};
use volumetrik_core::error::ServiceError;
use volumetrik_core::layout::LayoutEntry;
use volumetrik_core::model::{BrowseListing, Entry, Snapshot};
use volumetrik_core::service::{CancelFlag, DashboardService};
use volumetrik_core::session::{ScanSession, SessionEvent};
use volumetrik_core::settings::Settings;

// ── Helpers ──────────────────────────────────────────────────────────────────

/// Blocks each scan until [`GatedService::release`] is called for its path.
///
/// Like a remote server, it ignores the cancel flag: a superseded scan still
/// produces a successful reply, just late.
#[derive(Default)]
struct GatedService {
    gates: Mutex<HashMap<String, (Sender<()>, Receiver<()>)>>,
}

impl GatedService {
    fn gate(&self, path: &str) -> (Sender<()>, Receiver<()>) {
        self.gates
            .lock()
            .entry(path.to_string())
            .or_insert_with(crossbeam_channel::unbounded)
            .clone()
    }

    fn release(&self, path: &str) {
        self.gate(path).0.send(()).unwrap();
    }
}

impl DashboardService for GatedService {
    fn scan(&self, path: &str, _cancel: &CancelFlag) -> Result<Snapshot, ServiceError> {
        let (_, rx) = self.gate(path);
        rx.recv_timeout(Duration::from_secs(30))
            .map_err(|_| ServiceError::Network("gate never opened".into()))?;
        if path.starts_with("/fail") {
            return Err(ServiceError::Remote {
                status: 500,
                message: "Error scanning path".into(),
            });
        }
        Ok(Snapshot {
            current_path: path.to_string(),
            parent_path: Some("/".into()),
            entries: vec![Entry::file("f.bin", format!("{path}/f.bin"), 42, 0)],
            ..Default::default()
        })
    }

    fn browse(&self, _: &str) -> Result<BrowseListing, ServiceError> {
        Ok(BrowseListing::default())
    }
    fn load_settings(&self) -> Result<Settings, ServiceError> {
        Ok(Settings::default())
    }
    fn save_settings(&self, _: &Settings) -> Result<(), ServiceError> {
        Ok(())
    }
    fn load_layout(&self) -> Result<Option<Vec<LayoutEntry>>, ServiceError> {
        Ok(None)
    }
    fn save_layout(&self, _: &[LayoutEntry]) -> Result<(), ServiceError> {
        Ok(())
    }
}

fn setup() -> (Arc<GatedService>, ScanSession) {
    let service = Arc::new(GatedService::default());
    let session = ScanSession::new(service.clone());
    (service, session)
}

/// Process replies until `done` holds, collecting events. Panics after 30 s.
fn pump_until(
    session: &mut ScanSession,
    mut done: impl FnMut(&ScanSession) -> bool,
) -> Vec<SessionEvent> {
    let deadline = Instant::now() + Duration::from_secs(30);
    let mut events = Vec::new();
    while !done(session) {
        assert!(
            Instant::now() < deadline,
            "session did not reach the expected state within 30 seconds"
        );
        events.extend(session.process_replies());
        std::thread::sleep(Duration::from_millis(5));
    }
    events
}

fn current_path(session: &ScanSession) -> Option<&str> {
    session.snapshot().map(|s| s.current_path.as_str())
}

// ── Tests ────────────────────────────────────────────────────────────────────

#[test]
fn late_reply_of_superseded_scan_is_discarded() {
    let (service, mut session) = setup();
    session.start("/old").unwrap();
    session.start("/new").unwrap();

    service.release("/new");
    let events = pump_until(&mut session, |s| !s.is_busy());
    assert!(matches!(&events[..], [SessionEvent::Completed { path }] if path == "/new"));
    assert_eq!(current_path(&session), Some("/new"));

    // The superseded scan finishes only now.
    service.release("/old");
    let events = pump_until(&mut session, |s| s.stale_replies_discarded() == 1);
    assert!(events.is_empty(), "stale reply produced events: {events:?}");
    assert_eq!(current_path(&session), Some("/new"));
}

#[test]
fn superseded_reply_arriving_first_is_discarded() {
    let (service, mut session) = setup();
    session.start("/old").unwrap();
    session.start("/new").unwrap();

    service.release("/old");
    pump_until(&mut session, |s| s.stale_replies_discarded() == 1);
    assert!(session.is_busy());
    assert!(session.snapshot().is_none());

    service.release("/new");
    pump_until(&mut session, |s| !s.is_busy());
    assert_eq!(current_path(&session), Some("/new"));
}

#[test]
fn stopping_the_only_scan_clears_busy_and_keeps_snapshot() {
    let (service, mut session) = setup();
    session.start("/first").unwrap();
    service.release("/first");
    pump_until(&mut session, |s| !s.is_busy());

    session.start("/second").unwrap();
    assert!(session.is_busy());
    let event = session.stop();
    assert!(matches!(
        event,
        Some(SessionEvent::Cancelled { ref path, user_initiated: true }) if path == "/second"
    ));
    assert!(!session.is_busy());

    service.release("/second");
    pump_until(&mut session, |s| s.stale_replies_discarded() == 1);
    assert_eq!(current_path(&session), Some("/first"));
}

#[test]
fn failure_keeps_last_good_snapshot() {
    let (service, mut session) = setup();
    session.start("/good").unwrap();
    service.release("/good");
    pump_until(&mut session, |s| !s.is_busy());

    session.start("/fail").unwrap();
    service.release("/fail");
    let events = pump_until(&mut session, |s| !s.is_busy());
    match &events[..] {
        [SessionEvent::Failed { path, error }] => {
            assert_eq!(path, "/fail");
            assert!(matches!(error, ServiceError::Remote { status: 500, .. }));
        }
        other => panic!("unexpected events: {other:?}"),
    }
    assert_eq!(current_path(&session), Some("/good"));
}

/// Rapid repeated clicks on the same directory: last start wins, every
/// earlier reply is dropped, and the session always ends idle.
#[test]
fn repeated_start_on_same_path_restarts() {
    let (service, mut session) = setup();
    let mut last = 0;
    for _ in 0..5 {
        last = session.start("/same").unwrap();
    }
    assert_eq!(last, 5);

    for _ in 0..5 {
        service.release("/same");
    }
    let events = pump_until(&mut session, |s| {
        !s.is_busy() && s.stale_replies_discarded() == 4
    });
    let completed = events
        .iter()
        .filter(|e| matches!(e, SessionEvent::Completed { .. }))
        .count();
    assert_eq!(completed, 1);
    assert_eq!(current_path(&session), Some("/same"));
}
