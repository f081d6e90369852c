/// Scan session — the lifecycle of one directory snapshot.
///
/// `start()` hands the scan to a named worker thread and returns at once.
/// The worker reports back over a channel that the UI thread drains once
/// per frame in [`ScanSession::process_replies`]. Every request carries a
/// generation number; a reply is applied only if its generation is the one
/// currently in flight, so a superseded or stopped scan can never overwrite
/// a newer snapshot no matter when its reply arrives.
use crate::analysis::{sort_entries, SortState};
use crate::error::{ServiceError, ValidationError};
use crate::model::Snapshot;
use crate::service::{CancelFlag, DashboardService};
use crossbeam_channel::{Receiver, Sender};
use std::any::Any;
use std::panic::{self, AssertUnwindSafe};
use std::sync::Arc;
use std::thread;
use tracing::{debug, info, warn};

/// Name given to the scan worker thread.
pub const WORKER_THREAD_NAME: &str = "volumetrik-scan";

/// Terminal outcome of one scan, reported by [`ScanSession::process_replies`]
/// or [`ScanSession::stop`].
#[derive(Debug)]
pub enum SessionEvent {
    /// A new snapshot replaced the previous one.
    Completed { path: String },
    /// The scan failed; the previous snapshot is untouched.
    Failed { path: String, error: ServiceError },
    /// The scan was cancelled before it produced a result.
    Cancelled { path: String, user_initiated: bool },
}

/// Worker → session message.
struct ScanReply {
    generation: u64,
    path: String,
    result: Result<Snapshot, ServiceError>,
}

struct InFlight {
    generation: u64,
    path: String,
    cancel: CancelFlag,
}

pub struct ScanSession {
    service: Arc<dyn DashboardService>,
    snapshot: Option<Snapshot>,
    generation: u64,
    in_flight: Option<InFlight>,
    reply_tx: Sender<ScanReply>,
    reply_rx: Receiver<ScanReply>,
    stale_discarded: u64,
}

impl ScanSession {
    pub fn new(service: Arc<dyn DashboardService>) -> Self {
        let (reply_tx, reply_rx) = crossbeam_channel::unbounded();
        Self {
            service,
            snapshot: None,
            generation: 0,
            in_flight: None,
            reply_tx,
            reply_rx,
            stale_discarded: 0,
        }
    }

    /// Begin scanning `path`, cancelling whatever scan is in flight.
    ///
    /// Returns the generation of the new request. An empty path is rejected
    /// without touching the session.
    pub fn start(&mut self, path: &str) -> Result<u64, ValidationError> {
        let path = path.trim();
        if path.is_empty() {
            return Err(ValidationError::EmptyPath);
        }

        if let Some(previous) = self.in_flight.take() {
            previous.cancel.cancel();
            debug!(
                generation = previous.generation,
                path = %previous.path,
                "Superseding in-flight scan"
            );
        }

        self.generation += 1;
        let generation = self.generation;
        let cancel = CancelFlag::new();

        let service = Arc::clone(&self.service);
        let tx = self.reply_tx.clone();
        let worker_path = path.to_string();
        let worker_cancel = cancel.clone();

        let spawned = thread::Builder::new()
            .name(WORKER_THREAD_NAME.into())
            .spawn(move || {
                let scan = AssertUnwindSafe(|| service.scan(&worker_path, &worker_cancel));
                let result = panic::catch_unwind(scan)
                    .unwrap_or_else(|payload| Err(ServiceError::Worker(panic_message(&*payload))));
                // The session may already be gone.
                let _ = tx.send(ScanReply {
                    generation,
                    path: worker_path,
                    result,
                });
            });

        if let Err(e) = spawned {
            warn!("Failed to spawn scan thread: {e}");
            let _ = self.reply_tx.send(ScanReply {
                generation,
                path: path.to_string(),
                result: Err(ServiceError::Worker(e.to_string())),
            });
        }

        self.in_flight = Some(InFlight {
            generation,
            path: path.to_string(),
            cancel,
        });
        info!(path, generation, "Scan started");
        Ok(generation)
    }

    /// Cancel the in-flight scan, if any. Its reply will be discarded.
    pub fn stop(&mut self) -> Option<SessionEvent> {
        let flight = self.in_flight.take()?;
        flight.cancel.cancel();
        info!(path = %flight.path, generation = flight.generation, "Scan stopped");
        Some(SessionEvent::Cancelled {
            path: flight.path,
            user_initiated: true,
        })
    }

    /// Drain worker replies and apply the one belonging to the in-flight
    /// request. Called once per frame.
    pub fn process_replies(&mut self) -> Vec<SessionEvent> {
        let mut events = Vec::new();

        while let Ok(reply) = self.reply_rx.try_recv() {
            let is_current = self
                .in_flight
                .as_ref()
                .is_some_and(|f| f.generation == reply.generation);
            if !is_current {
                self.stale_discarded += 1;
                debug!(
                    generation = reply.generation,
                    path = %reply.path,
                    "Discarding stale scan reply"
                );
                continue;
            }

            self.in_flight = None;
            match reply.result {
                Ok(snapshot) => {
                    info!(
                        path = %reply.path,
                        entries = snapshot.entries.len(),
                        "Scan complete"
                    );
                    self.snapshot = Some(snapshot);
                    events.push(SessionEvent::Completed { path: reply.path });
                }
                Err(e) if e.is_cancelled() => {
                    events.push(SessionEvent::Cancelled {
                        path: reply.path,
                        user_initiated: false,
                    });
                }
                Err(error) => {
                    warn!(path = %reply.path, "Scan failed: {error}");
                    events.push(SessionEvent::Failed {
                        path: reply.path,
                        error,
                    });
                }
            }
        }

        events
    }

    /// True while a scan is in flight. Display only: correctness never
    /// depends on it.
    pub fn is_busy(&self) -> bool {
        self.in_flight.is_some()
    }

    pub fn in_flight_path(&self) -> Option<&str> {
        self.in_flight.as_ref().map(|f| f.path.as_str())
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn snapshot(&self) -> Option<&Snapshot> {
        self.snapshot.as_ref()
    }

    /// Re-order the held snapshot's entries in place.
    pub fn sort_entries(&mut self, sort: SortState) {
        if let Some(snapshot) = self.snapshot.as_mut() {
            sort_entries(&mut snapshot.entries, sort);
        }
    }

    /// Replies dropped because they belonged to a superseded or stopped scan.
    pub fn stale_replies_discarded(&self) -> u64 {
        self.stale_discarded
    }

    pub fn service(&self) -> &Arc<dyn DashboardService> {
        &self.service
    }
}

impl Drop for ScanSession {
    fn drop(&mut self) {
        if let Some(flight) = self.in_flight.take() {
            flight.cancel.cancel();
        }
    }
}

fn panic_message(payload: &(dyn Any + Send)) -> String {
    if let Some(s) = payload.downcast_ref::<&str>() {
        (*s).to_string()
    } else if let Some(s) = payload.downcast_ref::<String>() {
        s.clone()
    } else {
        "scan worker panicked".to_string()
    }
}
