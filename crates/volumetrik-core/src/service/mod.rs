/// The backend boundary — everything the dashboard needs from a scanner and
/// a settings store.
///
/// Two implementations exist: [`LocalService`] scans the local filesystem
/// in-process, [`HttpService`] talks to a running Volumetrik server.
pub mod http;
pub mod local;

pub use http::HttpService;
pub use local::LocalService;

use crate::error::ServiceError;
use crate::layout::LayoutEntry;
use crate::model::{BrowseListing, Snapshot};
use crate::settings::Settings;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

/// Cooperative cancellation signal shared between a session and the worker
/// running its scan.
#[derive(Clone, Debug, Default)]
pub struct CancelFlag {
    inner: Arc<AtomicBool>,
}

impl CancelFlag {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn cancel(&self) {
        self.inner.store(true, Ordering::Relaxed);
    }

    pub fn is_cancelled(&self) -> bool {
        self.inner.load(Ordering::Relaxed)
    }

    /// `Err(Cancelled)` once the flag is raised, for use with `?`.
    pub fn check(&self) -> Result<(), ServiceError> {
        if self.is_cancelled() {
            Err(ServiceError::Cancelled)
        } else {
            Ok(())
        }
    }
}

/// Operations the dashboard core consumes.
///
/// `scan` runs on the worker thread; all other calls are made synchronously
/// from the UI thread.
pub trait DashboardService: Send + Sync {
    /// Snapshot of `path` and its immediate children.
    ///
    /// Implementations should poll `cancel` and return
    /// [`ServiceError::Cancelled`] as soon as practical.
    fn scan(&self, path: &str, cancel: &CancelFlag) -> Result<Snapshot, ServiceError>;

    /// Directory-only listing of `path`. An empty path lists the
    /// filesystem root.
    fn browse(&self, path: &str) -> Result<BrowseListing, ServiceError>;

    fn load_settings(&self) -> Result<Settings, ServiceError>;

    fn save_settings(&self, settings: &Settings) -> Result<(), ServiceError>;

    fn load_layout(&self) -> Result<Option<Vec<LayoutEntry>>, ServiceError>;

    /// Store `entries`. An empty slice asks the service to restore its
    /// default layout.
    fn save_layout(&self, entries: &[LayoutEntry]) -> Result<(), ServiceError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cancel_flag_is_shared_between_clones() {
        let flag = CancelFlag::new();
        let worker_side = flag.clone();
        assert!(worker_side.check().is_ok());
        flag.cancel();
        assert!(worker_side.is_cancelled());
        assert!(worker_side.check().unwrap_err().is_cancelled());
    }
}
