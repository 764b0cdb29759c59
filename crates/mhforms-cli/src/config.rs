use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use mhforms_core::models::category::SectionId;
use mhforms_core::models::lookback::Lookback;
use mhforms_extract::medication::DEFAULT_LOOKBACK_MONTHS;
use mhforms_narrative::DEFAULT_EVIDENCE_HEADER;
use mhforms_sections::section::SectionSpec;
use serde::{Deserialize, Serialize};

/// Current config version. Bump this when adding fields or changing shape.
/// Each bump requires a corresponding entry in [`migrate`].
pub const CURRENT_VERSION: u32 = 1;

/// Missing fields take their defaults, so a hand-written partial file loads.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct MhformsConfig {
    /// Schema version. A file without one is treated as the current version.
    pub config_version: u32,
    /// Header line above the selected-evidence appendix.
    pub evidence_header: String,
    pub medication_lookback_months: u32,
    /// Overrides every section's own false-positive setting when set.
    pub filter_false_positives: Option<bool>,
    /// Per-section window overrides, keyed by section id.
    pub section_windows: BTreeMap<SectionId, Lookback>,
}

impl Default for MhformsConfig {
    fn default() -> Self {
        Self {
            config_version: CURRENT_VERSION,
            evidence_header: DEFAULT_EVIDENCE_HEADER.to_string(),
            medication_lookback_months: DEFAULT_LOOKBACK_MONTHS,
            filter_false_positives: None,
            section_windows: BTreeMap::new(),
        }
    }
}

impl MhformsConfig {
    /// Apply the configured overrides to a form's section list.
    pub fn apply_to_sections(&self, sections: &[SectionSpec]) -> Vec<SectionSpec> {
        sections
            .iter()
            .cloned()
            .map(|mut section| {
                if let Some(window) = self.section_windows.get(&section.id) {
                    section.window = Some(*window);
                }
                if let Some(filter) = self.filter_false_positives {
                    section.filter_false_positives = filter;
                }
                section
            })
            .collect()
    }
}

fn config_dir() -> eyre::Result<PathBuf> {
    let base = dirs::config_dir().ok_or_else(|| eyre::eyre!("no config directory found"))?;
    Ok(base.join("mhforms"))
}

pub fn config_path() -> eyre::Result<PathBuf> {
    Ok(config_dir()?.join("config.json"))
}

/// Load the config from its default location, or defaults when none exists.
pub fn load_config() -> eyre::Result<MhformsConfig> {
    let path = config_path()?;
    if !path.exists() {
        tracing::debug!(path = %path.display(), "no config file, using defaults");
        return Ok(MhformsConfig::default());
    }
    load_config_from(&path)
}

pub fn load_config_from(path: &Path) -> eyre::Result<MhformsConfig> {
    let contents = std::fs::read_to_string(path)
        .map_err(|e| eyre::eyre!("failed to read config at {}: {e}", path.display()))?;

    // Parse as raw JSON so we can run migrations before deserializing.
    let json: serde_json::Value = serde_json::from_str(&contents)?;
    let on_disk_version = json
        .get("config_version")
        .and_then(|v| v.as_u64())
        .unwrap_or(u64::from(CURRENT_VERSION)) as u32;

    let migrated = migrate(json, on_disk_version)?;
    let config: MhformsConfig = serde_json::from_value(migrated)?;
    Ok(config)
}

/// Run sequential migrations from `from_version` up to [`CURRENT_VERSION`].
///
/// Each migration is a pure transform on the raw JSON value. Version 1 is
/// the first released shape, so there are none yet.
pub fn migrate(mut json: serde_json::Value, from_version: u32) -> eyre::Result<serde_json::Value> {
    if from_version > CURRENT_VERSION {
        return Err(eyre::eyre!(
            "config_version {from_version} is newer than this build supports ({CURRENT_VERSION}). \
             Please update mhforms."
        ));
    }

    let obj = json
        .as_object_mut()
        .ok_or_else(|| eyre::eyre!("config is not a JSON object"))?;

    if from_version < CURRENT_VERSION {
        tracing::info!(from_version, "stamping config with version {CURRENT_VERSION}");
    }
    obj.insert(
        "config_version".to_string(),
        serde_json::Value::Number(CURRENT_VERSION.into()),
    );
    Ok(json)
}

pub fn save_config(config: &MhformsConfig) -> eyre::Result<PathBuf> {
    let path = config_path()?;
    save_config_to(&path, config)?;
    Ok(path)
}

pub fn save_config_to(path: &Path, config: &MhformsConfig) -> eyre::Result<()> {
    let dir = path
        .parent()
        .ok_or_else(|| eyre::eyre!("config path has no parent: {}", path.display()))?;
    std::fs::create_dir_all(dir)?;

    // Always write the current version, regardless of what was loaded.
    let mut stamped = config.clone();
    stamped.config_version = CURRENT_VERSION;

    let json = serde_json::to_string_pretty(&stamped)?;

    // Write to a temp file then rename for atomicity
    let tmp_path = path.with_extension("json.tmp");
    std::fs::write(&tmp_path, json.as_bytes())?;

    // Set restrictive permissions on Unix before renaming
    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        std::fs::set_permissions(&tmp_path, std::fs::Permissions::from_mode(0o600))?;
    }

    std::fs::rename(&tmp_path, path)?;

    tracing::info!(path = %path.display(), "config saved");
    Ok(())
}

pub fn delete_config() -> eyre::Result<()> {
    let path = config_path()?;
    if path.exists() {
        std::fs::remove_file(&path)?;
        tracing::info!(path = %path.display(), "config deleted");
    }
    Ok(())
}
