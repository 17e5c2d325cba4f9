use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

pub const DEFAULT_REFRESH_INTERVAL_MS: u64 = 5000;
pub const MIN_REFRESH_INTERVAL_MS: u64 = 250;
pub const DEFAULT_TERMINAL_APP: &str = "Terminal";

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct AppConfig {
    pub refresh_interval_ms: u64,
    /// Explicit tmux binary path; empty means discover at runtime.
    pub tmux_path: String,
    /// Terminal application targeted by the attach automation script.
    pub terminal_app: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            refresh_interval_ms: DEFAULT_REFRESH_INTERVAL_MS,
            tmux_path: String::new(),
            terminal_app: DEFAULT_TERMINAL_APP.to_string(),
        }
    }
}

#[derive(Clone, Debug, Default, Deserialize)]
struct PartialAppConfig {
    refresh_interval_ms: Option<u64>,
    tmux_path: Option<String>,
    terminal_app: Option<String>,
}

impl AppConfig {
    pub fn load_from_path(path: &Path) -> Result<Self, String> {
        if !path.exists() {
            let defaults = Self::default();
            defaults.save_to_path(path)?;
            return Ok(defaults);
        }
        let raw = fs::read_to_string(path)
            .map_err(|err| format!("failed reading config {:?}: {err}", path))?;
        let partial: PartialAppConfig = serde_json::from_str(&raw)
            .map_err(|err| format!("failed parsing config {:?}: {err}", path))?;
        Ok(Self::default().merged(partial))
    }

    pub fn save_to_path(&self, path: &Path) -> Result<(), String> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)
                .map_err(|err| format!("failed creating config directory {:?}: {err}", parent))?;
        }
        let raw = serde_json::to_string_pretty(self)
            .map_err(|err| format!("failed serializing config: {err}"))?;
        fs::write(path, raw).map_err(|err| format!("failed writing config {:?}: {err}", path))?;
        Ok(())
    }

    fn merged(mut self, partial: PartialAppConfig) -> Self {
        if let Some(value) = partial.refresh_interval_ms {
            self.refresh_interval_ms = value;
        }
        if let Some(value) = partial.tmux_path {
            self.tmux_path = value;
        }
        if let Some(value) = partial.terminal_app
            && !value.trim().is_empty()
        {
            self.terminal_app = value;
        }
        self.refresh_interval_ms = self.refresh_interval_ms.max(MIN_REFRESH_INTERVAL_MS);
        self
    }

    pub fn refresh_interval_ms(&self) -> u64 {
        self.refresh_interval_ms.max(MIN_REFRESH_INTERVAL_MS)
    }
}

pub fn default_config_path() -> PathBuf {
    config_root_dir().join("settings.json")
}

fn config_root_dir() -> PathBuf {
    if let Ok(home) = std::env::var("HOME") {
        return PathBuf::from(home).join(".config").join("muxmenu");
    }
    PathBuf::from(".config").join("muxmenu")
}
