use anyhow::Context;
use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;
use tracing::{info, warn};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Replacement lexicon CSV; the embedded lexicon is used when unset
    pub lexicon_path: Option<PathBuf>,
    /// Seconds between quote changes
    pub quote_interval_secs: u64,
    /// Milliseconds between fade-in steps of the result panel
    pub fade_step_ms: u64,
    /// Event polling timeout in milliseconds
    pub tick_rate_ms: u64,
    pub show_splash: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            lexicon_path: None,
            quote_interval_secs: 10,
            fade_step_ms: 50,
            tick_rate_ms: 50,
            show_splash: true,
        }
    }
}

impl Config {
    pub fn config_dir() -> Option<PathBuf> {
        let home = env::var("HOME").ok()?;
        Some(PathBuf::from(home).join(".sentiment-tui"))
    }

    fn config_path() -> Option<PathBuf> {
        Self::config_dir().map(|dir| dir.join("config.json"))
    }

    /// Load the saved config, seeding the file with defaults on first start.
    ///
    /// A file that exists but cannot be read or parsed is left untouched and
    /// the defaults are used for this run.
    pub fn load_or_seed() -> Config {
        match Self::config_path() {
            Some(path) => Self::load_or_seed_at(&path),
            None => {
                warn!("HOME is not set, using default config");
                Config::default()
            }
        }
    }

    fn load_or_seed_at(path: &Path) -> Config {
        match Self::load_from(path) {
            Ok(Some(config)) => {
                info!(path = %path.display(), "config loaded");
                config
            }
            Ok(None) => {
                let config = Config::default();
                match config.save_to(path) {
                    Ok(()) => info!(path = %path.display(), "default config written"),
                    Err(err) => warn!(error = %format!("{:#}", err), "could not write default config"),
                }
                config
            }
            Err(err) => {
                warn!(error = %format!("{:#}", err), "invalid config, using defaults");
                Config::default()
            }
        }
    }

    /// `Ok(None)` when there is no config file yet
    fn load_from(path: &Path) -> anyhow::Result<Option<Config>> {
        if !path.exists() {
            return Ok(None);
        }

        let contents = fs::read_to_string(path)
            .with_context(|| format!("Failed to read {}", path.display()))?;
        let config = Self::from_json(&contents)
            .with_context(|| format!("Failed to parse {}", path.display()))?;
        Ok(Some(config))
    }

    fn from_json(contents: &str) -> serde_json::Result<Config> {
        serde_json::from_str(contents)
    }

    /// Save the config to disk
    fn save_to(&self, path: &Path) -> anyhow::Result<()> {
        // Create config directory if it doesn't exist
        if let Some(dir) = path.parent() {
            if !dir.exists() {
                fs::create_dir_all(dir)?;
            }
        }

        let contents = serde_json::to_string_pretty(self)?;
        fs::write(path, contents)?;

        Ok(())
    }

    pub fn quote_interval(&self) -> Duration {
        Duration::from_secs(self.quote_interval_secs.max(1))
    }

    pub fn fade_step(&self) -> Duration {
        Duration::from_millis(self.fade_step_ms)
    }

    pub fn tick_rate(&self) -> Duration {
        Duration::from_millis(self.tick_rate_ms.max(1))
    }
}
