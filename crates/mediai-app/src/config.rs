use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

/// Current config version. Bump this when adding fields or changing shape.
/// Each bump requires a corresponding entry in [`migrate`].
const CURRENT_VERSION: u32 = 1;

const APP_DIR: &str = "com.mediai.app";

/// Overrides the config file location.
pub const CONFIG_PATH_ENV: &str = "MEDIAI_CONFIG";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AppConfig {
    /// Schema version. Missing or 0 = pre-versioned config.
    #[serde(default)]
    pub config_version: u32,
    /// Where client-local storage lives. Defaults to the platform data dir.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data_dir: Option<PathBuf>,
    /// Optional JSON rule table replacing the built-in assistant rules.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub responder_config: Option<PathBuf>,
    /// Pause before an assistant reply is shown. Added in v1.
    pub chat_reply_delay_ms: u64,
    /// Pause before an analysis result is shown. Added in v1.
    pub analysis_delay_ms: u64,
    #[serde(default = "default_log_filter")]
    pub log_filter: String,
    #[serde(default)]
    pub log_format: LogFormat,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LogFormat {
    #[default]
    Text,
    Json,
}

fn default_log_filter() -> String {
    "info".to_string()
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            config_version: CURRENT_VERSION,
            data_dir: None,
            responder_config: None,
            chat_reply_delay_ms: 500,
            analysis_delay_ms: 3000,
            log_filter: default_log_filter(),
            log_format: LogFormat::Text,
        }
    }
}

impl AppConfig {
    /// Resolved storage directory.
    pub fn resolve_data_dir(&self) -> eyre::Result<PathBuf> {
        match &self.data_dir {
            Some(dir) => Ok(dir.clone()),
            None => {
                let base =
                    dirs::data_dir().ok_or_else(|| eyre::eyre!("no data directory found"))?;
                Ok(base.join(APP_DIR))
            }
        }
    }
}

fn config_dir() -> eyre::Result<PathBuf> {
    let base = dirs::config_dir().ok_or_else(|| eyre::eyre!("no config directory found"))?;
    Ok(base.join(APP_DIR))
}

/// `$MEDIAI_CONFIG` if set, else `<config dir>/com.mediai.app/config.json`.
pub fn config_path() -> eyre::Result<PathBuf> {
    if let Some(path) = std::env::var_os(CONFIG_PATH_ENV) {
        return Ok(PathBuf::from(path));
    }
    Ok(config_dir()?.join("config.json"))
}

/// Load the config from [`config_path`], or defaults when no file exists.
pub fn load_config() -> eyre::Result<AppConfig> {
    let path = config_path()?;
    if !path.exists() {
        tracing::debug!(path = %path.display(), "no config file, using defaults");
        return Ok(AppConfig::default());
    }
    load_config_from(&path)
}

pub fn load_config_from(path: &Path) -> eyre::Result<AppConfig> {
    let contents = std::fs::read_to_string(path)
        .map_err(|e| eyre::eyre!("failed to read config at {}: {e}", path.display()))?;

    // Parse as raw JSON so we can run migrations before deserializing.
    let json: serde_json::Value = serde_json::from_str(&contents)?;
    let on_disk_version = json
        .get("config_version")
        .and_then(|v| v.as_u64())
        .unwrap_or(0) as u32;

    let migrated = migrate(json, on_disk_version)?;
    let config: AppConfig = serde_json::from_value(migrated)?;
    Ok(config)
}

/// Run sequential migrations from `from_version` up to [`CURRENT_VERSION`].
///
/// Each migration is a pure transform on the raw JSON value.
fn migrate(mut json: serde_json::Value, from_version: u32) -> eyre::Result<serde_json::Value> {
    if from_version > CURRENT_VERSION {
        return Err(eyre::eyre!(
            "config_version {from_version} is newer than this build supports ({CURRENT_VERSION}). \
             Please update Medi AI."
        ));
    }

    // v0 → v1: add the display delays
    if from_version < 1 {
        let obj = json
            .as_object_mut()
            .ok_or_else(|| eyre::eyre!("config is not a JSON object"))?;
        obj.entry("chat_reply_delay_ms")
            .or_insert(serde_json::Value::Number(500.into()));
        obj.entry("analysis_delay_ms")
            .or_insert(serde_json::Value::Number(3000.into()));
        obj.insert(
            "config_version".to_string(),
            serde_json::Value::Number(1.into()),
        );
        tracing::info!("migrated config v0 → v1 (added display delays)");
    }

    Ok(json)
}

pub fn save_config_to(config: &AppConfig, path: &Path) -> eyre::Result<()> {
    if let Some(dir) = path.parent() {
        std::fs::create_dir_all(dir)?;
    }

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
