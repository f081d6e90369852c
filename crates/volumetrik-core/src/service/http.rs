/// Remote service — talks to a running Volumetrik server over its JSON API.
///
/// Requests are blocking; the scan runs on the session's worker thread and
/// everything else is a short call from the UI thread. A server cannot be
/// told to stop scanning, so cancellation only suppresses the response.
use super::{CancelFlag, DashboardService};
use crate::error::ServiceError;
use crate::layout::LayoutEntry;
use crate::model::{BrowseListing, Entry, Snapshot};
use crate::settings::Settings;
use reqwest::blocking::{Client, Response};
use serde::Deserialize;
use std::time::Duration;
use tracing::debug;

pub struct HttpService {
    base_url: String,
    client: Client,
}

/// Body of `GET /api/scan`.
#[derive(Debug, Deserialize)]
struct ScanResponse {
    parent: Option<String>,
    current: String,
    files: Vec<Entry>,
    #[serde(default)]
    disk_total: Option<u64>,
    #[serde(default)]
    disk_available: Option<u64>,
}

impl From<ScanResponse> for Snapshot {
    fn from(response: ScanResponse) -> Self {
        Self {
            current_path: response.current,
            parent_path: response.parent.filter(|p| !p.is_empty()),
            entries: response.files,
            disk_total: response.disk_total,
            disk_available: response.disk_available,
        }
    }
}

impl HttpService {
    pub fn new(base_url: &str, timeout: Duration) -> Result<Self, ServiceError> {
        let client = Client::builder().timeout(timeout).build()?;
        Ok(Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            client,
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, endpoint: &str) -> String {
        format!("{}/api/{endpoint}", self.base_url)
    }
}

/// Turn a non-success status into [`ServiceError::Remote`], keeping the
/// body as the message.
fn check(response: Response) -> Result<Response, ServiceError> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }
    let message = response.text().unwrap_or_default();
    Err(ServiceError::Remote {
        status: status.as_u16(),
        message: message.trim().trim_matches('"').to_string(),
    })
}

impl DashboardService for HttpService {
    fn scan(&self, path: &str, cancel: &CancelFlag) -> Result<Snapshot, ServiceError> {
        cancel.check()?;
        debug!(path, "Requesting remote scan");
        let response = self
            .client
            .get(self.url("scan"))
            .query(&[("path", path)])
            .send()?;
        let body: ScanResponse = check(response)?.json()?;
        cancel.check()?;
        Ok(body.into())
    }

    fn browse(&self, path: &str) -> Result<BrowseListing, ServiceError> {
        let response = self
            .client
            .get(self.url("browse"))
            .query(&[("path", path)])
            .send()?;
        let mut listing: BrowseListing = check(response)?.json()?;
        listing.parent = listing.parent.filter(|p| !p.is_empty());
        Ok(listing)
    }

    fn load_settings(&self) -> Result<Settings, ServiceError> {
        let response = self.client.get(self.url("settings")).send()?;
        Ok(check(response)?.json()?)
    }

    fn save_settings(&self, settings: &Settings) -> Result<(), ServiceError> {
        let response = self
            .client
            .post(self.url("settings"))
            .json(settings)
            .send()?;
        check(response)?;
        Ok(())
    }

    fn load_layout(&self) -> Result<Option<Vec<LayoutEntry>>, ServiceError> {
        Ok(self.load_settings()?.layout)
    }

    fn save_layout(&self, entries: &[LayoutEntry]) -> Result<(), ServiceError> {
        let response = self
            .client
            .post(self.url("layout"))
            .json(entries)
            .send()?;
        check(response)?;
        Ok(())
    }
}
