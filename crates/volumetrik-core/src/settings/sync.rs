/// Settings synchronisation — the editable draft behind the settings dialog.
///
/// The committed document is what the service last confirmed; the draft
/// is what the dialog edits. Saving pushes the whole draft as one document.
/// Nothing about the draft changes on a failed save, so the user can retry
/// without re-entering anything.
use super::{Appearance, MonitoredPathRule, Settings, ThresholdType};
use crate::error::{PersistenceError, ServiceError, ValidationError};
use crate::i18n::Locale;
use crate::layout::LayoutEntry;
use crate::service::DashboardService;
use tracing::{debug, info, warn};

#[derive(Debug, Clone, Default)]
pub struct SettingsSync {
    committed: Settings,
    draft: Settings,
    locale: Locale,
}

impl SettingsSync {
    pub fn new() -> Self {
        Self::default()
    }

    /// Fetch the document, replacing both the committed copy and the draft.
    ///
    /// Called at startup and every time the settings dialog opens. On
    /// failure everything stays as it was.
    pub fn load(&mut self, service: &dyn DashboardService) -> Result<(), ServiceError> {
        let settings = service.load_settings()?;
        if settings.monitoring.legacy_upgraded {
            info!(
                paths = settings.monitoring.paths.len(),
                "Upgraded legacy monitored paths; changes apply on next save"
            );
        }
        self.locale = Locale::from_code(&settings.language);
        self.committed = settings.clone();
        self.draft = settings;
        Ok(())
    }

    /// Locale of the committed document. Changes only on a successful save
    /// or load.
    pub fn locale(&self) -> Locale {
        self.locale
    }

    pub fn committed(&self) -> &Settings {
        &self.committed
    }

    pub fn draft(&self) -> &Settings {
        &self.draft
    }

    /// Direct access for form fields that need no validation
    /// (language, toggles, alert credentials, interval).
    pub fn draft_mut(&mut self) -> &mut Settings {
        &mut self.draft
    }

    pub fn rules(&self) -> &[MonitoredPathRule] {
        &self.draft.monitoring.paths
    }

    /// True while the draft holds legacy paths that were upgraded on load
    /// but not yet saved.
    pub fn has_pending_upgrade(&self) -> bool {
        self.draft.monitoring.legacy_upgraded
    }

    /// Discard draft edits.
    pub fn revert(&mut self) {
        self.draft = self.committed.clone();
    }

    pub fn add_monitored_path(
        &mut self,
        path: &str,
        threshold_type: ThresholdType,
        threshold_value: f64,
    ) -> Result<(), ValidationError> {
        let path = path.trim();
        if path.is_empty() {
            return Err(ValidationError::EmptyPath);
        }
        if !threshold_value.is_finite() {
            return Err(ValidationError::InvalidThreshold);
        }
        let rules = &mut self.draft.monitoring.paths;
        if rules.iter().any(|r| r.path == path) {
            return Err(ValidationError::DuplicatePath(path.to_string()));
        }
        rules.push(MonitoredPathRule {
            path: path.to_string(),
            threshold_type,
            threshold_value,
        });
        Ok(())
    }

    pub fn remove_monitored_path(
        &mut self,
        index: usize,
    ) -> Result<MonitoredPathRule, ValidationError> {
        let rules = &mut self.draft.monitoring.paths;
        if index >= rules.len() {
            return Err(ValidationError::NoSuchRule(index));
        }
        Ok(rules.remove(index))
    }

    /// Push the draft, together with the current widget layout, as one
    /// document. On success it becomes the committed copy and its language
    /// the active locale.
    pub fn save(
        &mut self,
        service: &dyn DashboardService,
        layout: Option<Vec<LayoutEntry>>,
    ) -> Result<(), PersistenceError> {
        let mut document = self.draft.clone();
        document.layout = layout;
        document.monitoring.legacy_upgraded = false;

        if let Err(e) = service.save_settings(&document) {
            warn!("Saving settings failed: {e}");
            return Err(PersistenceError::settings(e));
        }

        self.locale = Locale::from_code(&document.language);
        self.draft = document.clone();
        self.committed = document;
        info!(language = self.locale.code(), "Settings saved");
        Ok(())
    }

    /// Persist a palette or theme change on its own, without the rest of
    /// the draft.
    ///
    /// The draft always picks up `appearance`. While a legacy upgrade is
    /// pending nothing is written: the next explicit save carries it.
    pub fn save_appearance(
        &mut self,
        service: &dyn DashboardService,
        appearance: Appearance,
        layout: Option<Vec<LayoutEntry>>,
    ) -> Result<(), PersistenceError> {
        self.draft.appearance = appearance.clone();
        if self.committed.monitoring.legacy_upgraded {
            debug!("Appearance kept in the draft until the legacy upgrade is saved");
            return Ok(());
        }

        let mut document = self.committed.clone();
        document.appearance = appearance;
        document.layout = layout;
        if let Err(e) = service.save_settings(&document) {
            warn!("Saving appearance failed: {e}");
            return Err(PersistenceError::settings(e));
        }
        self.committed = document;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sync_with_rules(paths: &[&str]) -> SettingsSync {
        let mut sync = SettingsSync::new();
        sync.draft.monitoring.paths.clear();
        for path in paths {
            sync.add_monitored_path(path, ThresholdType::MaxUsed, 10.0)
                .unwrap();
        }
        sync
    }

    #[test]
    fn duplicate_path_is_rejected_and_list_unchanged() {
        let mut sync = sync_with_rules(&["/data", "/home"]);
        let err = sync
            .add_monitored_path("/data", ThresholdType::MinRemaining, 5.0)
            .unwrap_err();
        assert_eq!(err, ValidationError::DuplicatePath("/data".into()));
        assert_eq!(sync.rules().len(), 2);
    }

    #[test]
    fn duplicate_check_is_exact() {
        let mut sync = sync_with_rules(&["/data"]);
        sync.add_monitored_path("/Data", ThresholdType::MaxUsed, 1.0)
            .unwrap();
        sync.add_monitored_path("/data/", ThresholdType::MaxUsed, 1.0)
            .unwrap();
        assert_eq!(sync.rules().len(), 3);
    }

    #[test]
    fn empty_path_and_bad_threshold_are_rejected() {
        let mut sync = sync_with_rules(&[]);
        assert_eq!(
            sync.add_monitored_path("   ", ThresholdType::MaxUsed, 1.0),
            Err(ValidationError::EmptyPath)
        );
        assert_eq!(
            sync.add_monitored_path("/x", ThresholdType::MaxUsed, f64::NAN),
            Err(ValidationError::InvalidThreshold)
        );
        assert_eq!(
            sync.add_monitored_path("/x", ThresholdType::MaxUsed, f64::INFINITY),
            Err(ValidationError::InvalidThreshold)
        );
        assert!(sync.rules().is_empty());
    }

    #[test]
    fn paths_are_trimmed() {
        let mut sync = sync_with_rules(&["  /srv  "]);
        assert_eq!(sync.rules()[0].path, "/srv");
        assert!(matches!(
            sync.add_monitored_path("/srv", ThresholdType::MaxUsed, 1.0),
            Err(ValidationError::DuplicatePath(_))
        ));
    }

    #[test]
    fn remove_by_index() {
        let mut sync = sync_with_rules(&["/a", "/b", "/c"]);
        let removed = sync.remove_monitored_path(1).unwrap();
        assert_eq!(removed.path, "/b");
        assert_eq!(sync.remove_monitored_path(5), Err(ValidationError::NoSuchRule(5)));
        assert_eq!(sync.rules().len(), 2);
    }

    #[test]
    fn revert_discards_draft_edits() {
        let mut sync = SettingsSync::new();
        sync.draft_mut().language = "es".into();
        sync.revert();
        assert_eq!(sync.draft().language, "en");
        assert_eq!(sync.locale(), Locale::En);
    }
}
