/// In-process service — scans the local filesystem and keeps the settings
/// document in a JSON file.
///
/// A scan is a single parallel `jwalk` traversal of the target. Every
/// descendant file is attributed to the immediate child of the target it
/// lives under, so one walk yields both the child list and the recursive
/// size and file count of every child directory.
use super::{CancelFlag, DashboardService};
use crate::error::ServiceError;
use crate::layout::{default_layout, LayoutEntry};
use crate::model::{BrowseListing, Entry, Snapshot};
use crate::settings::Settings;
use parking_lot::Mutex;
use std::collections::HashMap;
use std::ffi::OsString;
use std::fs;
use std::path::{Path, PathBuf};
use std::time::{Instant, SystemTime};
use sysinfo::Disks;
use tracing::{debug, info, warn};

/// Default location of the settings document, relative to the working
/// directory.
pub const DEFAULT_SETTINGS_PATH: &str = "settings/settings.json";

/// Walk entries between two cancellation checks.
const CANCEL_CHECK_INTERVAL: u64 = 1_000;

pub struct LocalService {
    settings_path: PathBuf,
    settings: Mutex<Settings>,
}

impl LocalService {
    /// Create a service backed by the settings file at `settings_path`.
    ///
    /// The file is read once here. A missing or unreadable file yields the
    /// default settings; nothing is written until the first save.
    pub fn new(settings_path: impl Into<PathBuf>) -> Self {
        let settings_path = settings_path.into();
        let settings = read_settings(&settings_path);
        Self {
            settings_path,
            settings: Mutex::new(settings),
        }
    }

    pub fn settings_path(&self) -> &Path {
        &self.settings_path
    }
}

impl DashboardService for LocalService {
    fn scan(&self, path: &str, cancel: &CancelFlag) -> Result<Snapshot, ServiceError> {
        let start = Instant::now();
        let root = resolve(path)?;
        let entries = scan_children(&root, cancel)?;
        let (disk_total, disk_available) = disk_totals(&root);

        let snapshot = Snapshot {
            current_path: display_path(&root),
            parent_path: root.parent().map(display_path),
            entries,
            disk_total,
            disk_available,
        };
        info!(
            path = %snapshot.current_path,
            children = snapshot.entries.len(),
            files = snapshot.total_files(),
            elapsed_ms = start.elapsed().as_millis() as u64,
            "Local scan complete"
        );
        Ok(snapshot)
    }

    fn browse(&self, path: &str) -> Result<BrowseListing, ServiceError> {
        let target = if path.trim().is_empty() {
            filesystem_root()
        } else {
            PathBuf::from(path.trim())
        };

        let mut directories: Vec<String> = fs::read_dir(&target)
            .map_err(|e| ServiceError::io(target.to_string_lossy(), e))?
            .flatten()
            .filter(|entry| entry.file_type().is_ok_and(|t| t.is_dir()))
            .map(|entry| entry.file_name().to_string_lossy().into_owned())
            .collect();
        directories.sort_by_key(|name| name.to_lowercase());

        Ok(BrowseListing {
            current: display_path(&target),
            parent: target.parent().map(display_path),
            directories,
        })
    }

    fn load_settings(&self) -> Result<Settings, ServiceError> {
        Ok(self.settings.lock().clone())
    }

    fn save_settings(&self, settings: &Settings) -> Result<(), ServiceError> {
        let mut current = self.settings.lock();
        write_settings(&self.settings_path, settings)?;
        *current = settings.clone();
        Ok(())
    }

    fn load_layout(&self) -> Result<Option<Vec<LayoutEntry>>, ServiceError> {
        Ok(self.settings.lock().layout.clone())
    }

    fn save_layout(&self, entries: &[LayoutEntry]) -> Result<(), ServiceError> {
        let mut current = self.settings.lock();
        let mut next = current.clone();
        next.layout = Some(if entries.is_empty() {
            default_layout()
        } else {
            entries.to_vec()
        });
        write_settings(&self.settings_path, &next)?;
        *current = next;
        Ok(())
    }
}

// ── Scanning ───────────────────────────────────────────────────────

/// Canonicalise `path` and make sure it is a readable directory.
fn resolve(path: &str) -> Result<PathBuf, ServiceError> {
    let path = path.trim();
    let root = fs::canonicalize(path).map_err(|e| ServiceError::io(path, e))?;
    // Surfaces permission errors before the walk starts.
    fs::read_dir(&root).map_err(|e| ServiceError::io(path, e))?;
    Ok(root)
}

/// One entry per immediate child of `root`, directories carrying the
/// recursive totals of everything beneath them.
fn scan_children(root: &Path, cancel: &CancelFlag) -> Result<Vec<Entry>, ServiceError> {
    let mut entries: Vec<Entry> = Vec::new();
    let mut top_level: HashMap<OsString, usize> = HashMap::new();
    let mut visited: u64 = 0;
    let mut errors: u64 = 0;

    let walker = jwalk::WalkDir::new(root)
        .min_depth(1)
        .skip_hidden(false)
        .follow_links(false)
        .parallelism(jwalk::Parallelism::RayonNewPool(num_cpus::get()));

    for entry_result in walker {
        visited += 1;
        if visited % CANCEL_CHECK_INTERVAL == 0 {
            cancel.check()?;
        }

        let entry = match entry_result {
            Ok(e) => e,
            Err(err) => {
                errors += 1;
                debug!("Skipping unreadable entry: {err}");
                continue;
            }
        };

        let file_type = entry.file_type();
        if file_type.is_symlink() {
            continue;
        }
        let path = entry.path();

        if entry.depth == 1 {
            let metadata = fs::symlink_metadata(&path).ok();
            let modified = metadata.as_ref().map_or(0, modified_secs);
            let name = entry.file_name().to_string_lossy().into_owned();
            let child = if file_type.is_dir() {
                Entry::dir(name, display_path(&path), 0, 0, modified)
            } else {
                let size = metadata.as_ref().map_or(0, |m| m.len());
                Entry::file(name, display_path(&path), size, modified)
            };
            top_level.insert(entry.file_name().to_os_string(), entries.len());
            entries.push(child);
            continue;
        }

        if file_type.is_dir() {
            continue;
        }

        let owner = path
            .strip_prefix(root)
            .ok()
            .and_then(|rel| rel.components().next())
            .and_then(|top| top_level.get(top.as_os_str()).copied());
        let Some(owner) = owner else {
            continue;
        };
        let size = fs::symlink_metadata(&path).map_or(0, |m| m.len());
        let child = &mut entries[owner];
        child.size += size;
        child.file_count += 1;
    }

    cancel.check()?;
    if errors > 0 {
        warn!(errors, root = %root.display(), "Some entries could not be read");
    }
    Ok(entries)
}

fn modified_secs(metadata: &fs::Metadata) -> u64 {
    metadata
        .modified()
        .ok()
        .and_then(|t| t.duration_since(SystemTime::UNIX_EPOCH).ok())
        .map_or(0, |d| d.as_secs())
}

/// Capacity of the disk holding `path`: the mount point with the longest
/// matching prefix, else the first disk reported.
fn disk_totals(path: &Path) -> (Option<u64>, Option<u64>) {
    let disks = Disks::new_with_refreshed_list();
    let best = disks
        .list()
        .iter()
        .filter(|disk| path.starts_with(disk.mount_point()))
        .max_by_key(|disk| disk.mount_point().as_os_str().len())
        .or_else(|| disks.list().first());

    match best {
        Some(disk) => {
            let total = disk.total_space();
            (Some(total), Some(disk.available_space().min(total)))
        }
        None => (None, None),
    }
}

fn filesystem_root() -> PathBuf {
    if cfg!(windows) {
        PathBuf::from("C:\\")
    } else {
        PathBuf::from("/")
    }
}

/// Path as shown to the user, without the Windows verbatim prefix that
/// `canonicalize` adds.
fn display_path(path: &Path) -> String {
    let text = path.to_string_lossy();
    match text.strip_prefix(r"\\?\") {
        Some(stripped) => stripped.to_string(),
        None => text.into_owned(),
    }
}

// ── Settings file ──────────────────────────────────────────────────

fn read_settings(path: &Path) -> Settings {
    let content = match fs::read_to_string(path) {
        Ok(c) => c,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
            debug!(path = %path.display(), "No settings file, using defaults");
            return Settings::default();
        }
        Err(e) => {
            warn!(path = %path.display(), "Cannot read settings file: {e}");
            return Settings::default();
        }
    };
    match serde_json::from_str(&content) {
        Ok(settings) => settings,
        Err(e) => {
            warn!(path = %path.display(), "Cannot parse settings file: {e}");
            Settings::default()
        }
    }
}

fn write_settings(path: &Path, settings: &Settings) -> Result<(), ServiceError> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent).map_err(|e| ServiceError::io(parent.to_string_lossy(), e))?;
    }
    let content = serde_json::to_string_pretty(settings)?;
    fs::write(path, content).map_err(|e| ServiceError::io(path.to_string_lossy(), e))?;
    debug!(path = %path.display(), "Settings written");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_path_strips_verbatim_prefix() {
        assert_eq!(display_path(Path::new(r"\\?\C:\Users")), r"C:\Users");
        assert_eq!(display_path(Path::new("/home/user")), "/home/user");
    }

    #[test]
    fn unparseable_settings_fall_back_to_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("settings.json");
        fs::write(&path, "{ not json").unwrap();
        assert_eq!(read_settings(&path), Settings::default());
    }

    #[test]
    fn missing_settings_file_is_not_created_on_load() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("settings.json");
        let service = LocalService::new(&path);
        assert_eq!(service.load_settings().unwrap(), Settings::default());
        assert!(!path.exists());
    }
}
