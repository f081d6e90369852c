/// Settings document — monitoring rules, alert channels, locale, chart
/// appearance, and the stored widget layout.
///
/// The JSON shape is shared with the Volumetrik server: field names are
/// `snake_case` and layout entries carry their widget id as `id`. Older
/// documents stored monitored paths as bare strings next to a global
/// `threshold_gb`; those are upgraded in memory when read.
pub mod sync;

pub use sync::SettingsSync;

use crate::layout::{default_layout, LayoutEntry};
use crate::view::{Palette, ThemeMode};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// Threshold applied to paths stored without one.
pub const LEGACY_THRESHOLD_GB: f64 = 100.0;

pub const DEFAULT_CHECK_INTERVAL_MINUTES: u64 = 60;

// ── Document ───────────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub language: String,
    pub monitoring: MonitoringConfig,
    pub alerts: AlertConfig,
    pub appearance: Appearance,
    pub layout: Option<Vec<LayoutEntry>>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            language: "en".to_string(),
            monitoring: MonitoringConfig::default(),
            alerts: AlertConfig::default(),
            appearance: Appearance::default(),
            layout: Some(default_layout()),
        }
    }
}

/// Chart palette and light/dark theme, stored by id. Unknown ids read back
/// as the defaults.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Appearance {
    pub palette: String,
    pub theme: String,
}

impl Default for Appearance {
    fn default() -> Self {
        Self::new(Palette::default(), ThemeMode::default())
    }
}

impl Appearance {
    pub fn new(palette: Palette, theme: ThemeMode) -> Self {
        Self {
            palette: palette.id().to_string(),
            theme: theme.id().to_string(),
        }
    }

    pub fn palette(&self) -> Palette {
        Palette::from_id(&self.palette).unwrap_or_default()
    }

    pub fn theme(&self) -> ThemeMode {
        ThemeMode::from_id(&self.theme).unwrap_or_default()
    }
}

/// When a monitored path counts as over its threshold.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ThresholdType {
    /// Alert once the directory grows beyond the threshold.
    MaxUsed,
    /// Alert once free space on its disk drops below the threshold.
    MinRemaining,
}

impl ThresholdType {
    pub const ALL: [ThresholdType; 2] = [ThresholdType::MaxUsed, ThresholdType::MinRemaining];
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MonitoredPathRule {
    pub path: String,
    pub threshold_type: ThresholdType,
    /// Gigabytes.
    pub threshold_value: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(from = "MonitoringWire")]
pub struct MonitoringConfig {
    pub enabled: bool,
    pub paths: Vec<MonitoredPathRule>,
    pub check_interval_minutes: u64,
    /// Set when `paths` was read in the legacy bare-string form.
    #[serde(skip)]
    pub legacy_upgraded: bool,
}

impl Default for MonitoringConfig {
    fn default() -> Self {
        Self {
            enabled: false,
            paths: vec![MonitoredPathRule {
                path: "/".to_string(),
                threshold_type: ThresholdType::MaxUsed,
                threshold_value: LEGACY_THRESHOLD_GB,
            }],
            check_interval_minutes: DEFAULT_CHECK_INTERVAL_MINUTES,
            legacy_upgraded: false,
        }
    }
}

/// Alert delivery settings. Every channel is optional.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AlertConfig {
    pub enabled: bool,
    pub custom_message: Option<String>,
    pub telegram_bot_token: Option<String>,
    pub telegram_chat_id: Option<String>,
    pub webhook_url: Option<String>,
    pub pushover_user_key: Option<String>,
    pub pushover_api_token: Option<String>,
    pub gotify_url: Option<String>,
    pub gotify_token: Option<String>,
    pub slack_webhook_url: Option<String>,
    pub discord_webhook_url: Option<String>,
    pub teams_webhook_url: Option<String>,
    pub ntfy_url: Option<String>,
    pub ntfy_token: Option<String>,
}

// ── Legacy upgrade ─────────────────────────────────────────────────

/// Accepts both the current and the legacy `monitoring` shape.
#[derive(Deserialize)]
struct MonitoringWire {
    #[serde(default)]
    enabled: bool,
    #[serde(default)]
    paths: Option<PathsWire>,
    #[serde(default = "default_interval")]
    check_interval_minutes: u64,
    #[serde(default)]
    threshold_gb: Option<f64>,
}

#[derive(Deserialize)]
#[serde(untagged)]
enum PathsWire {
    Rules(Vec<MonitoredPathRule>),
    Legacy(Vec<String>),
}

fn default_interval() -> u64 {
    DEFAULT_CHECK_INTERVAL_MINUTES
}

impl From<MonitoringWire> for MonitoringConfig {
    fn from(wire: MonitoringWire) -> Self {
        let (paths, legacy_upgraded) = match wire.paths {
            None => (Vec::new(), false),
            Some(PathsWire::Rules(rules)) => (rules, false),
            Some(PathsWire::Legacy(paths)) => {
                let threshold = wire
                    .threshold_gb
                    .filter(|v| v.is_finite())
                    .unwrap_or(LEGACY_THRESHOLD_GB);
                let mut seen = HashSet::new();
                let rules = paths
                    .into_iter()
                    .filter(|path| seen.insert(path.clone()))
                    .map(|path| MonitoredPathRule {
                        path,
                        threshold_type: ThresholdType::MaxUsed,
                        threshold_value: threshold,
                    })
                    .collect();
                (rules, true)
            }
        };
        Self {
            enabled: wire.enabled,
            paths,
            check_interval_minutes: wire.check_interval_minutes,
            legacy_upgraded,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_a_fresh_install() {
        let settings = Settings::default();
        assert_eq!(settings.language, "en");
        assert!(!settings.monitoring.enabled);
        assert_eq!(settings.monitoring.paths.len(), 1);
        assert_eq!(settings.monitoring.paths[0].path, "/");
        assert_eq!(settings.monitoring.check_interval_minutes, 60);
        assert!(!settings.alerts.enabled);
        assert_eq!(settings.layout, Some(default_layout()));
    }

    #[test]
    fn current_document_round_trips() {
        let mut settings = Settings::default();
        settings.language = "de".into();
        settings.alerts.ntfy_url = Some("https://ntfy.sh/disk".into());
        settings.monitoring.paths.push(MonitoredPathRule {
            path: "/srv".into(),
            threshold_type: ThresholdType::MinRemaining,
            threshold_value: 12.5,
        });

        let json = serde_json::to_string_pretty(&settings).unwrap();
        assert!(json.contains("\"MinRemaining\""));
        assert!(!json.contains("legacy_upgraded"));
        let back: Settings = serde_json::from_str(&json).unwrap();
        assert_eq!(back, settings);
    }

    #[test]
    fn legacy_paths_are_upgraded_with_global_threshold() {
        let json = r#"{
            "language": "fr",
            "monitoring": {
                "enabled": true,
                "paths": ["/data", "/home"],
                "threshold_gb": 250.0,
                "check_interval_minutes": 15
            }
        }"#;
        let settings: Settings = serde_json::from_str(json).unwrap();
        let monitoring = &settings.monitoring;
        assert!(monitoring.legacy_upgraded);
        assert_eq!(monitoring.check_interval_minutes, 15);
        assert_eq!(monitoring.paths.len(), 2);
        assert!(monitoring
            .paths
            .iter()
            .all(|r| r.threshold_type == ThresholdType::MaxUsed && r.threshold_value == 250.0));
    }

    #[test]
    fn legacy_paths_without_threshold_default_to_100_gb() {
        let json = r#"{ "monitoring": { "paths": ["/data"] } }"#;
        let settings: Settings = serde_json::from_str(json).unwrap();
        assert_eq!(settings.monitoring.paths[0].threshold_value, LEGACY_THRESHOLD_GB);
        assert_eq!(settings.monitoring.check_interval_minutes, 60);
    }

    #[test]
    fn legacy_duplicates_keep_first_occurrence() {
        let json = r#"{ "monitoring": { "paths": ["/a", "/b", "/a", "/b", "/c"] } }"#;
        let settings: Settings = serde_json::from_str(json).unwrap();
        let paths: Vec<_> = settings
            .monitoring
            .paths
            .iter()
            .map(|r| r.path.as_str())
            .collect();
        assert_eq!(paths, vec!["/a", "/b", "/c"]);
        assert!(settings.monitoring.legacy_upgraded);
    }

    #[test]
    fn appearance_falls_back_on_unknown_ids() {
        let json = r#"{ "appearance": { "palette": "purple", "theme": "sepia" } }"#;
        let settings: Settings = serde_json::from_str(json).unwrap();
        assert_eq!(settings.appearance.palette(), Palette::Royal);
        assert_eq!(settings.appearance.theme(), ThemeMode::Dark);

        let missing: Settings = serde_json::from_str("{}").unwrap();
        assert_eq!(missing.appearance, Appearance::default());
    }

    #[test]
    fn partial_document_fills_defaults() {
        let settings: Settings = serde_json::from_str(r#"{ "language": "it" }"#).unwrap();
        assert_eq!(settings.language, "it");
        assert_eq!(settings.monitoring, MonitoringConfig::default());
        assert!(settings.layout.is_some());
    }
}
