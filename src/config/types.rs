use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Root configuration container.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub storage: StorageConfig,
    #[serde(default)]
    pub ui: UiConfig,
}

/// Where pet records live on disk.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct StorageConfig {
    /// Path to the pet data file. Defaults to the platform data dir.
    #[serde(default)]
    pub data_file: Option<PathBuf>,
}

impl StorageConfig {
    pub fn resolved_data_file(&self) -> PathBuf {
        self.data_file.clone().unwrap_or_else(default_data_file)
    }
}

/// Presentation knobs.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UiConfig {
    /// UI tick interval in milliseconds.
    #[serde(default = "default_tick_rate_ms")]
    pub tick_rate_ms: u64,
    /// How many ticks a snackbar message stays on screen.
    #[serde(default = "default_snackbar_ticks")]
    pub snackbar_ticks: u16,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            tick_rate_ms: default_tick_rate_ms(),
            snackbar_ticks: default_snackbar_ticks(),
        }
    }
}

fn default_tick_rate_ms() -> u64 {
    250
}

fn default_snackbar_ticks() -> u16 {
    12
}

fn default_data_file() -> PathBuf {
    let data_dir = dirs::data_dir().unwrap_or_else(|| PathBuf::from("."));
    data_dir.join("pawbook").join("pets.json")
}
