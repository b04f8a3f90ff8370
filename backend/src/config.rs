//! Dashboard configuration file support.
//!
//! Settings are read from a `dashboard.toml` file when one is found, fall back
//! to built-in defaults otherwise, and are finally overridden by environment
//! variables.
//!
//! ```toml
//! [dataset]
//! csv_path = "export.csv"
//!
//! [images]
//! directory = "./resources/"
//! extension = "JPG"
//!
//! [server]
//! port = 8050
//!
//! [parks]
//! Br = "Braswell Park"
//! ```

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::env;
use std::fs;
use std::path::{Path, PathBuf};

/// Errors while reading configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to read config file {path}: {source}")]
    Read {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse config file {path}: {source}")]
    Parse {
        path: String,
        #[source]
        source: toml::de::Error,
    },

    #[error("Invalid value for {key}: {value}")]
    InvalidValue { key: String, value: String },
}

/// Full dashboard configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DashboardConfig {
    #[serde(default)]
    pub dataset: DatasetSettings,
    #[serde(default)]
    pub images: ImageSettings,
    #[serde(default)]
    pub server: ServerSettings,
    #[serde(default)]
    pub dashboard: DashboardSettings,
    /// Park code to display name. Merged over the built-in names.
    #[serde(default)]
    pub parks: BTreeMap<String, String>,
}

/// Input file settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DatasetSettings {
    #[serde(default = "default_csv_path")]
    pub csv_path: PathBuf,
}

/// Snapshot directory settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ImageSettings {
    #[serde(default = "default_image_directory")]
    pub directory: PathBuf,
    /// Case-sensitive file extension, without the dot
    #[serde(default = "default_image_extension")]
    pub extension: String,
    /// URL prefix; must start and end with `/`
    #[serde(default = "default_image_route")]
    pub route: String,
    #[serde(default = "default_placeholder_image")]
    pub default_image: String,
}

/// HTTP listener settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerSettings {
    #[serde(default = "default_host")]
    pub host: String,
    #[serde(default = "default_port")]
    pub port: u16,
}

/// Presentation defaults.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DashboardSettings {
    #[serde(default = "default_title")]
    pub title: String,
    /// Date used for both range bounds when no park/camera is selected
    #[serde(default = "default_initial_date")]
    pub initial_date: NaiveDate,
}

fn default_csv_path() -> PathBuf {
    PathBuf::from("export.csv")
}

fn default_image_directory() -> PathBuf {
    PathBuf::from("./resources/")
}

fn default_image_extension() -> String {
    "JPG".to_string()
}

fn default_image_route() -> String {
    "/static/".to_string()
}

fn default_placeholder_image() -> String {
    "default_image.JPG".to_string()
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    8050
}

fn default_title() -> String {
    "Health Matters Dashboard".to_string()
}

fn default_initial_date() -> NaiveDate {
    NaiveDate::from_ymd_opt(2017, 6, 1).unwrap_or_default()
}

/// Display names of the surveyed parks.
pub fn default_park_names() -> BTreeMap<String, String> {
    [
        ("Br", "Braswell Park"),
        ("Cl", "Clark Park"),
        ("Ga", "Garysburg Community Park"),
        ("Ri", "River FallsPark"),
        ("Ve", "Veterans Memorial Park"),
        ("Wo", "Woodland Park"),
        ("Pl", "Tarboro Parking Lot Project"),
        ("4H", "4-H Rural Life Center"),
    ]
    .into_iter()
    .map(|(code, name)| (code.to_string(), name.to_string()))
    .collect()
}

impl Default for DatasetSettings {
    fn default() -> Self {
        Self {
            csv_path: default_csv_path(),
        }
    }
}

impl Default for ImageSettings {
    fn default() -> Self {
        Self {
            directory: default_image_directory(),
            extension: default_image_extension(),
            route: default_image_route(),
            default_image: default_placeholder_image(),
        }
    }
}

impl Default for ServerSettings {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
        }
    }
}

impl Default for DashboardSettings {
    fn default() -> Self {
        Self {
            title: default_title(),
            initial_date: default_initial_date(),
        }
    }
}

impl DashboardConfig {
    /// Load configuration from a TOML file.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let display = path.as_ref().display().to_string();
        let content = fs::read_to_string(path.as_ref()).map_err(|source| ConfigError::Read {
            path: display.clone(),
            source,
        })?;
        Self::from_toml_str(&content).map_err(|source| ConfigError::Parse {
            path: display,
            source,
        })
    }

    /// Parse configuration from TOML text.
    pub fn from_toml_str(content: &str) -> Result<Self, toml::de::Error> {
        let mut config: DashboardConfig = toml::from_str(content)?;
        let mut parks = default_park_names();
        parks.append(&mut config.parks);
        config.parks = parks;
        Ok(config)
    }

    /// Load configuration from the default location.
    ///
    /// Searches for `dashboard.toml` in:
    /// 1. Current directory
    /// 2. `backend/` directory
    /// 3. Parent directory
    ///
    /// Returns `Ok(None)` when no file exists.
    pub fn from_default_location() -> Result<Option<Self>, ConfigError> {
        let search_paths = [
            PathBuf::from("dashboard.toml"),
            PathBuf::from("backend/dashboard.toml"),
            PathBuf::from("../dashboard.toml"),
        ];

        for path in search_paths {
            if path.exists() {
                return Self::from_file(&path).map(Some);
            }
        }
        Ok(None)
    }

    /// Resolve the effective configuration.
    ///
    /// `DASHBOARD_CONFIG` names an explicit file; otherwise the default
    /// locations are searched, then built-in defaults are used. Environment
    /// overrides are applied last.
    pub fn load() -> Result<Self, ConfigError> {
        let base = match env::var("DASHBOARD_CONFIG") {
            Ok(path) => Self::from_file(path)?,
            Err(_) => match Self::from_default_location()? {
                Some(config) => config,
                None => Self::with_defaults(),
            },
        };
        base.apply_env_overrides()
    }

    /// Built-in defaults, including the known park names.
    pub fn with_defaults() -> Self {
        Self {
            parks: default_park_names(),
            ..Default::default()
        }
    }

    /// Apply environment variable overrides.
    ///
    /// # Environment Variables
    /// - `DASHBOARD_CSV`: input file path
    /// - `DASHBOARD_IMAGES`: image directory
    /// - `HOST`: listen host
    /// - `PORT`: listen port
    pub fn apply_env_overrides(mut self) -> Result<Self, ConfigError> {
        if let Ok(path) = env::var("DASHBOARD_CSV") {
            self.dataset.csv_path = PathBuf::from(path);
        }
        if let Ok(dir) = env::var("DASHBOARD_IMAGES") {
            self.images.directory = PathBuf::from(dir);
        }
        if let Ok(host) = env::var("HOST") {
            self.server.host = host;
        }
        if let Ok(port) = env::var("PORT") {
            self.server.port = port.parse().map_err(|_| ConfigError::InvalidValue {
                key: "PORT".to_string(),
                value: port.clone(),
            })?;
        }
        Ok(self)
    }
}
