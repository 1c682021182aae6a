use crate::errors::{AppError, AppResult};
use crate::ui::messages::success;
use serde::{Deserialize, Serialize};
use serde_yaml::Value;
use std::fs;
use std::path::{Path, PathBuf};

const APP_DIR: &str = ".lapkes";
const CONFIG_FILE: &str = "lapkes.conf";
const DATABASE_FILE: &str = "lapkes.sqlite";

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    #[serde(default = "default_database")]
    pub database: String,
    #[serde(default = "default_items_per_page")]
    pub items_per_page: usize,
    /// Connectivity; the global `--offline` flag overrides it.
    #[serde(default = "default_true")]
    pub online: bool,
    /// Flush the sync queue after every change while online.
    #[serde(default = "default_true")]
    pub auto_sync: bool,
    /// Simulated network latency per synchronized item.
    #[serde(default = "default_sync_delay")]
    pub sync_delay_ms: u64,
}

/// Fields every configuration file is expected to carry.
pub const CONFIG_FIELDS: [&str; 5] = [
    "database",
    "items_per_page",
    "online",
    "auto_sync",
    "sync_delay_ms",
];

fn default_database() -> String {
    Config::database_file().to_string_lossy().to_string()
}
fn default_items_per_page() -> usize {
    crate::core::crud::DEFAULT_ITEMS_PER_PAGE
}
fn default_true() -> bool {
    true
}
fn default_sync_delay() -> u64 {
    300
}

impl Default for Config {
    fn default() -> Self {
        Self {
            database: default_database(),
            items_per_page: default_items_per_page(),
            online: true,
            auto_sync: true,
            sync_delay_ms: default_sync_delay(),
        }
    }
}

impl Config {
    /// Standard configuration directory (`~/.lapkes`).
    pub fn config_dir() -> PathBuf {
        dirs::home_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(APP_DIR)
    }

    pub fn config_file() -> PathBuf {
        Self::config_dir().join(CONFIG_FILE)
    }

    pub fn database_file() -> PathBuf {
        Self::config_dir().join(DATABASE_FILE)
    }

    /// Load the configuration file; defaults when it does not exist.
    pub fn load() -> AppResult<Self> {
        Self::load_from(&Self::config_file())
    }

    pub fn load_from(path: &Path) -> AppResult<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(path)?;
        serde_yaml::from_str(&content)
            .map_err(|e| AppError::Config(format!("cannot parse {}: {}", path.display(), e)))
    }

    pub fn to_yaml(&self) -> AppResult<String> {
        serde_yaml::to_string(self).map_err(|e| AppError::Config(e.to_string()))
    }

    /// Names of the expected fields absent from the file at `path`.
    pub fn missing_fields(path: &Path) -> AppResult<Vec<&'static str>> {
        let content = fs::read_to_string(path)?;
        let yaml: Value = serde_yaml::from_str(&content)
            .map_err(|e| AppError::Config(format!("cannot parse {}: {}", path.display(), e)))?;

        let Some(map) = yaml.as_mapping() else {
            return Ok(CONFIG_FIELDS.to_vec());
        };

        Ok(CONFIG_FIELDS
            .iter()
            .copied()
            .filter(|f| !map.contains_key(Value::String((*f).to_string())))
            .collect())
    }

    /// Database path given on the command line; relative names live in the
    /// configuration directory.
    pub fn resolve_database(name: &str) -> PathBuf {
        let p = Path::new(name);
        if p.is_absolute() {
            p.to_path_buf()
        } else {
            Self::config_dir().join(p)
        }
    }

    /// Create the configuration directory, the configuration file and an
    /// empty database file.
    ///
    /// In test mode the configuration file is left untouched and only the
    /// database file is created. Returns the database path.
    pub fn init_all(custom_db: Option<&str>, is_test: bool) -> AppResult<PathBuf> {
        let dir = Self::config_dir();

        let db_path = match custom_db {
            Some(name) => Self::resolve_database(name),
            None => dir.join(DATABASE_FILE),
        };

        if !is_test {
            fs::create_dir_all(&dir)?;
            let config = Config {
                database: db_path.to_string_lossy().to_string(),
                ..Config::default()
            };
            fs::write(Self::config_file(), config.to_yaml()?)?;
            success(format!("Config file: {}", Self::config_file().display()));
        }

        if let Some(parent) = db_path.parent()
            && !parent.as_os_str().is_empty()
        {
            fs::create_dir_all(parent)?;
        }
        if !db_path.exists() {
            fs::File::create(&db_path)?;
        }

        Ok(db_path)
    }
}
