use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use anyhow::Context;
use serde::{Deserialize, Serialize};
use tkp_core::DEFAULT_QUERY;
use tkp_engine::{AtomicFileWriter, GeneratorSettings};

use super::logging::LogDestination;

pub const CONFIG_FILENAME: &str = "auto_tkp.ron";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub generator: GeneratorConfig,
    pub downloads: DownloadsConfig,
    /// Text the request box starts with.
    pub initial_query: String,
    pub log_destination: LogDestination,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            generator: GeneratorConfig::default(),
            downloads: DownloadsConfig::default(),
            initial_query: DEFAULT_QUERY.to_string(),
            log_destination: LogDestination::default(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GeneratorConfig {
    pub endpoint: String,
    pub connect_timeout_secs: u64,
    pub request_timeout_secs: u64,
    pub max_response_bytes: u64,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        let settings = GeneratorSettings::default();
        Self {
            endpoint: settings.endpoint,
            connect_timeout_secs: settings.connect_timeout.as_secs(),
            request_timeout_secs: settings.request_timeout.as_secs(),
            max_response_bytes: settings.max_bytes,
        }
    }
}

impl GeneratorConfig {
    pub fn settings(&self) -> GeneratorSettings {
        GeneratorSettings {
            endpoint: self.endpoint.clone(),
            connect_timeout: Duration::from_secs(self.connect_timeout_secs),
            request_timeout: Duration::from_secs(self.request_timeout_secs),
            max_bytes: self.max_response_bytes,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DownloadsConfig {
    /// Where documents are saved when no dialog is shown.
    pub directory: PathBuf,
    /// Show a save dialog for every document instead.
    pub ask_where_to_save: bool,
}

impl Default for DownloadsConfig {
    fn default() -> Self {
        Self {
            directory: PathBuf::from("downloads"),
            ask_where_to_save: false,
        }
    }
}

/// Reads `{dir}/auto_tkp.ron`, writing the defaults there first if it does not exist.
///
/// Runs before logging is up, so it reports through its return value only.
pub fn load_or_create(dir: &Path) -> anyhow::Result<(AppConfig, ConfigSource)> {
    let path = dir.join(CONFIG_FILENAME);
    let content = match fs::read_to_string(&path) {
        Ok(text) => text,
        Err(err) if err.kind() == std::io::ErrorKind::NotFound => {
            let config = AppConfig::default();
            save(dir, &config)?;
            return Ok((config, ConfigSource::CreatedDefault(path)));
        }
        Err(err) => {
            return Err(err).with_context(|| format!("failed to read config {}", path.display()))
        }
    };

    let config = ron::from_str(&content)
        .with_context(|| format!("failed to parse config {}", path.display()))?;
    Ok((config, ConfigSource::Loaded(path)))
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigSource {
    Loaded(PathBuf),
    CreatedDefault(PathBuf),
}

fn save(dir: &Path, config: &AppConfig) -> anyhow::Result<()> {
    let content = ron::ser::to_string_pretty(config, ron::ser::PrettyConfig::new())
        .context("failed to serialize default config")?;
    AtomicFileWriter::new(dir.to_path_buf())
        .write(CONFIG_FILENAME, content.as_bytes())
        .with_context(|| format!("failed to write default config into {}", dir.display()))?;
    Ok(())
}
