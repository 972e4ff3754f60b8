use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// Current config version. Bump this when adding fields or changing shape.
/// Each bump requires a corresponding entry in [`migrate`].
const CURRENT_VERSION: u32 = 1;

/// Default lower bound on selected symptoms before batch diagnosis runs.
const DEFAULT_MIN_BATCH_SYMPTOMS: u32 = 4;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DorsiaConfig {
    /// Schema version. Missing or 0 = pre-versioned config.
    #[serde(default)]
    pub config_version: u32,
    /// Batch diagnosis refuses to run below this many selected symptoms.
    /// Added in v1; older configs are backfilled by [`migrate`].
    #[serde(default = "default_min_batch_symptoms")]
    pub min_batch_symptoms: u32,
    pub created_at: jiff::Timestamp,
}

fn default_min_batch_symptoms() -> u32 {
    DEFAULT_MIN_BATCH_SYMPTOMS
}

impl Default for DorsiaConfig {
    fn default() -> Self {
        Self {
            config_version: CURRENT_VERSION,
            min_batch_symptoms: DEFAULT_MIN_BATCH_SYMPTOMS,
            created_at: jiff::Timestamp::now(),
        }
    }
}

fn config_dir() -> eyre::Result<PathBuf> {
    let base = dirs::config_dir().ok_or_else(|| eyre::eyre!("no config directory found"))?;
    Ok(base.join("com.dorsia.desktop"))
}

fn config_path() -> eyre::Result<PathBuf> {
    Ok(config_dir()?.join("config.json"))
}

pub fn has_config() -> bool {
    config_path().map(|p| p.exists()).unwrap_or(false)
}

pub fn load_config() -> eyre::Result<DorsiaConfig> {
    let path = config_path()?;
    let contents = std::fs::read_to_string(&path)
        .map_err(|e| eyre::eyre!("failed to read config at {}: {e}", path.display()))?;

    // Parse as raw JSON so we can run migrations before deserializing.
    let json: serde_json::Value = serde_json::from_str(&contents)?;
    let on_disk_version = json
        .get("config_version")
        .and_then(|v| v.as_u64())
        .unwrap_or(0) as u32;

    let migrated = migrate(json, on_disk_version)?;
    let config: DorsiaConfig = serde_json::from_value(migrated)?;
    Ok(config)
}

/// Load the saved config, or start from defaults when none exists yet.
pub fn load_or_default() -> eyre::Result<DorsiaConfig> {
    if has_config() {
        load_config()
    } else {
        Ok(DorsiaConfig::default())
    }
}

/// Run sequential migrations from `from_version` up to [`CURRENT_VERSION`].
///
/// Each migration is a pure transform on the raw JSON value; nothing here
/// touches the filesystem.
fn migrate(mut json: serde_json::Value, from_version: u32) -> eyre::Result<serde_json::Value> {
    if from_version > CURRENT_VERSION {
        return Err(eyre::eyre!(
            "config_version {from_version} is newer than this build supports ({CURRENT_VERSION}). \
             Please update Dorsia."
        ));
    }

    // v0 → v1: add min_batch_symptoms with the stock default
    if from_version < 1 {
        let obj = json
            .as_object_mut()
            .ok_or_else(|| eyre::eyre!("config is not a JSON object"))?;
        obj.entry("min_batch_symptoms")
            .or_insert(serde_json::Value::Number(DEFAULT_MIN_BATCH_SYMPTOMS.into()));
        obj.insert(
            "config_version".to_string(),
            serde_json::Value::Number(1.into()),
        );
        tracing::info!("migrated config v0 → v1 (added min_batch_symptoms)");
    }

    // Future migrations go here:
    // if from_version < 2 { ... }

    Ok(json)
}

pub fn save_config(config: &DorsiaConfig) -> eyre::Result<()> {
    let dir = config_dir()?;
    std::fs::create_dir_all(&dir)?;

    // Always write the current version, regardless of what was loaded.
    let mut stamped = config.clone();
    stamped.config_version = CURRENT_VERSION;

    let path = dir.join("config.json");
    let json = serde_json::to_string_pretty(&stamped)?;

    // Write to a temp file then rename for atomicity
    let tmp_path = dir.join("config.json.tmp");
    std::fs::write(&tmp_path, json.as_bytes())?;

    // Set restrictive permissions on Unix before renaming
    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        std::fs::set_permissions(&tmp_path, std::fs::Permissions::from_mode(0o600))?;
    }

    std::fs::rename(&tmp_path, &path)?;

    tracing::info!(path = %path.display(), "config saved");
    Ok(())
}
