use crate::settings::Settings;
use color_eyre::Result;
use directories::ProjectDirs;
use eyre::Context as _;
use serde_json::Value;
use std::{
    env,
    fs,
    path::PathBuf,
};

const SETTINGS_FILE: &str = "settings.json";

/// Persistence boundary for the single settings slot. Implementations
/// hold one serialized blob; what is inside the blob is owned entirely
/// by [`load`] and [`save`].
pub trait SettingsStore {
    fn read(&self) -> Option<String>;
    fn write(&mut self, blob: &str) -> Result<()>;
}

/// Reads and normalizes the stored settings. Fails soft: an absent slot
/// or a blob that does not parse both yield the full defaults, nothing
/// propagates past this boundary.
pub fn load(store: &impl SettingsStore) -> Settings {
    let raw = store
        .read()
        .and_then(|blob| match serde_json::from_str::<Value>(&blob) {
            Ok(value) => Some(value),
            Err(error) => {
                debug!(%error, "Stored settings blob is not valid JSON, using defaults");
                None
            }
        })
        .unwrap_or(Value::Null);
    Settings::normalize(&raw)
}

/// Serializes the complete settings value and overwrites the slot. No
/// partial update; merging only ever happens on the read side.
pub fn save(store: &mut impl SettingsStore, settings: &Settings) -> Result<()> {
    let blob = serde_json::to_string(settings).context("Failed to serialize settings")?;
    store.write(&blob)?;
    debug!("Settings saved");
    Ok(())
}

lazy_static::lazy_static! {
    static ref PROJECT_NAME: String = env!("CARGO_CRATE_NAME").to_uppercase().to_string();
    static ref CONFIG_FOLDER: Option<PathBuf> = env::var(format!("{}_CONFIG", PROJECT_NAME.clone()))
        .ok()
        .map(PathBuf::from);
}

pub fn get_config_dir() -> PathBuf {
    let directory = if let Some(s) = CONFIG_FOLDER.clone() {
        s
    } else if let Some(proj_dirs) = project_directory() {
        proj_dirs.config_local_dir().to_path_buf()
    } else {
        PathBuf::from(".").join(".config")
    };
    directory
}

fn project_directory() -> Option<ProjectDirs> {
    ProjectDirs::from("", "", env!("CARGO_PKG_NAME"))
}

/// Stores the settings blob as a JSON file in the platform config
/// directory (overridable via the `<CRATE>_CONFIG` environment variable).
#[derive(Debug, Clone)]
pub struct FileStore {
    config_dir: PathBuf,
}

impl FileStore {
    pub fn new() -> Self {
        Self {
            config_dir: get_config_dir(),
        }
    }

    pub fn with_dir(config_dir: impl Into<PathBuf>) -> Self {
        Self {
            config_dir: config_dir.into(),
        }
    }

    fn path(&self) -> PathBuf {
        self.config_dir.join(SETTINGS_FILE)
    }
}

impl Default for FileStore {
    fn default() -> Self {
        Self::new()
    }
}

impl SettingsStore for FileStore {
    fn read(&self) -> Option<String> {
        fs::read_to_string(self.path()).ok()
    }

    fn write(&mut self, blob: &str) -> Result<()> {
        fs::create_dir_all(&self.config_dir).context("Failed to create config directory")?;
        let path = self.path();
        fs::write(&path, blob).wrap_err_with(|| format!("Failed to write settings to {:?}", path))
    }
}

/// In-memory store, mainly for tests and embedding.
#[derive(Debug, Default, Clone)]
pub struct MemoryStore {
    blob: Option<String>,
}

impl SettingsStore for MemoryStore {
    fn read(&self) -> Option<String> {
        self.blob.clone()
    }

    fn write(&mut self, blob: &str) -> Result<()> {
        self.blob = Some(blob.to_string());
        Ok(())
    }
}
