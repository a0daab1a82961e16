//! Shell configuration embedded from `shell.toml` at build time.

use leptos::logging;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::model::AppKind;

include!(concat!(env!("OUT_DIR"), "/shell_config_generated.rs"));

pub const SHELL_CONFIG_SCHEMA_VERSION: u32 = 1;
pub const DEFAULT_TASKBAR_HEIGHT_PX: i32 = 38;

#[derive(Debug, Error)]
pub enum ShellConfigError {
    #[error("shell config is not valid JSON: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("shell config schema mismatch: expected {expected} found {found}")]
    SchemaMismatch { expected: u32, found: u32 },
    #[error("taskbar height must be positive, got {0}")]
    InvalidTaskbarHeight(i32),
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShellConfig {
    pub schema_version: u32,
    pub taskbar_height_px: i32,
    pub desktop_icons: Vec<AppKind>,
    #[serde(default)]
    pub boot_open: Vec<AppKind>,
}

impl Default for ShellConfig {
    fn default() -> Self {
        Self {
            schema_version: SHELL_CONFIG_SCHEMA_VERSION,
            taskbar_height_px: DEFAULT_TASKBAR_HEIGHT_PX,
            desktop_icons: AppKind::ALL.to_vec(),
            boot_open: Vec::new(),
        }
    }
}

impl ShellConfig {
    pub fn from_json(raw: &str) -> Result<Self, ShellConfigError> {
        let config: Self = serde_json::from_str(raw)?;
        if config.schema_version != SHELL_CONFIG_SCHEMA_VERSION {
            return Err(ShellConfigError::SchemaMismatch {
                expected: SHELL_CONFIG_SCHEMA_VERSION,
                found: config.schema_version,
            });
        }
        if config.taskbar_height_px <= 0 {
            return Err(ShellConfigError::InvalidTaskbarHeight(
                config.taskbar_height_px,
            ));
        }
        Ok(config)
    }

    /// Loads the embedded config, falling back to defaults when it cannot be used.
    pub fn load() -> Self {
        match Self::from_json(SHELL_CONFIG_JSON) {
            Ok(config) => config,
            Err(err) => {
                logging::warn!("shell config rejected, using defaults: {err}");
                Self::default()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn embedded_config_parses() {
        let config = ShellConfig::from_json(SHELL_CONFIG_JSON).expect("embedded config");
        assert_eq!(config.schema_version, SHELL_CONFIG_SCHEMA_VERSION);
        assert!(config.taskbar_height_px > 0);
        assert!(!config.desktop_icons.is_empty());
    }

    #[test]
    fn app_keys_deserialize_into_kinds() {
        let config = ShellConfig::from_json(
            r#"{
                "schema_version": 1,
                "taskbar_height_px": 40,
                "desktop_icons": ["tasks", "other-app"],
                "boot_open": ["calculator"]
            }"#,
        )
        .expect("config");
        assert_eq!(config.desktop_icons, vec![AppKind::Tasks, AppKind::OtherApp]);
        assert_eq!(config.boot_open, vec![AppKind::Calculator]);
    }

    #[test]
    fn boot_open_defaults_to_empty() {
        let config = ShellConfig::from_json(
            r#"{"schema_version": 1, "taskbar_height_px": 38, "desktop_icons": []}"#,
        )
        .expect("config");
        assert!(config.boot_open.is_empty());
    }

    #[test]
    fn rejects_schema_mismatch_and_bad_height() {
        let err = ShellConfig::from_json(
            r#"{"schema_version": 2, "taskbar_height_px": 38, "desktop_icons": []}"#,
        )
        .expect_err("schema mismatch");
        assert!(matches!(
            err,
            ShellConfigError::SchemaMismatch {
                expected: 1,
                found: 2
            }
        ));

        let err = ShellConfig::from_json(
            r#"{"schema_version": 1, "taskbar_height_px": 0, "desktop_icons": []}"#,
        )
        .expect_err("bad height");
        assert!(matches!(err, ShellConfigError::InvalidTaskbarHeight(0)));
    }

    #[test]
    fn rejects_unknown_app_key() {
        let err = ShellConfig::from_json(
            r#"{"schema_version": 1, "taskbar_height_px": 38, "desktop_icons": ["paint"]}"#,
        )
        .expect_err("unknown key");
        assert!(matches!(err, ShellConfigError::Parse(_)));
    }
}
