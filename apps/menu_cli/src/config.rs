use std::{
    fs,
    path::{Path, PathBuf},
};

use anyhow::Context;
use serde::Deserialize;

pub const DEFAULT_CONFIG_PATH: &str = "menu.toml";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub screen_title: String,
    pub currency_symbol: String,
    pub log_filter: String,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            screen_title: "Christoffel's Food Menu".into(),
            currency_symbol: "$".into(),
            log_filter: "warn".into(),
        }
    }
}

#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
struct FileSettings {
    screen_title: Option<String>,
    currency_symbol: Option<String>,
    log_filter: Option<String>,
}

/// Defaults, then the settings file, then `MENU__*` environment variables.
///
/// An explicit `path` must exist and parse; without one, `menu.toml` in the
/// working directory is read only if present.
pub fn load_settings(path: Option<&Path>) -> anyhow::Result<Settings> {
    let mut settings = Settings::default();

    let (path, required) = match path {
        Some(path) => (path.to_path_buf(), true),
        None => (PathBuf::from(DEFAULT_CONFIG_PATH), false),
    };
    if required || path.exists() {
        apply_file(&mut settings, &path)?;
    }

    apply_env_overrides(&mut settings, |key| std::env::var(key).ok());
    Ok(settings)
}

fn apply_file(settings: &mut Settings, path: &Path) -> anyhow::Result<()> {
    let raw = fs::read_to_string(path)
        .with_context(|| format!("failed to read settings file '{}'", path.display()))?;
    let file_cfg: FileSettings = toml::from_str(&raw)
        .with_context(|| format!("failed to parse settings file '{}'", path.display()))?;

    if let Some(v) = file_cfg.screen_title {
        settings.screen_title = v;
    }
    if let Some(v) = file_cfg.currency_symbol {
        settings.currency_symbol = v;
    }
    if let Some(v) = file_cfg.log_filter {
        settings.log_filter = v;
    }
    Ok(())
}

pub fn apply_env_overrides(settings: &mut Settings, var: impl Fn(&str) -> Option<String>) {
    if let Some(v) = var("MENU__SCREEN_TITLE") {
        settings.screen_title = v;
    }
    if let Some(v) = var("MENU__CURRENCY_SYMBOL") {
        settings.currency_symbol = v;
    }
    if let Some(v) = var("MENU__LOG_FILTER") {
        settings.log_filter = v;
    }
}

#[cfg(test)]
#[path = "tests/config_tests.rs"]
mod tests;
