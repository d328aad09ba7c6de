use crate::models::coordinate::Coordinate;
use crate::ui::messages::warning;
use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::io::{self, Write};
use std::path::PathBuf;

/// Effective configuration: YAML file plus environment overrides.
///
/// The geofence defaults match the university the bot was written for; the
/// token is only relevant to the external messaging transport and is never
/// read by the core itself.
#[derive(Debug, Serialize, Deserialize)]
pub struct Config {
    pub data_dir: String,
    #[serde(default = "default_center_lat")]
    pub center_lat: f64,
    #[serde(default = "default_center_lon")]
    pub center_lon: f64,
    #[serde(default = "default_radius")]
    pub allowed_radius_m: f64,
    #[serde(default)]
    pub bot_token: Option<String>,
}

fn default_center_lat() -> f64 {
    41.351376
}
fn default_center_lon() -> f64 {
    69.221844
}
fn default_radius() -> f64 {
    100.0
}

impl Default for Config {
    fn default() -> Self {
        Self {
            data_dir: Self::data_dir_default().to_string_lossy().to_string(),
            center_lat: default_center_lat(),
            center_lon: default_center_lon(),
            allowed_radius_m: default_radius(),
            bot_token: None,
        }
    }
}

impl Config {
    /// Return the standard configuration directory depending on the platform
    pub fn config_dir() -> PathBuf {
        if cfg!(target_os = "windows") {
            let appdata = env::var("APPDATA").unwrap_or_else(|_| ".".to_string());
            PathBuf::from(appdata).join("attendo")
        } else {
            let home = dirs::home_dir().unwrap_or_else(|| PathBuf::from("."));
            home.join(".attendo")
        }
    }

    /// Return the full path of the config file
    pub fn config_file() -> PathBuf {
        Self::config_dir().join("attendo.conf")
    }

    /// Default location of the two persisted records
    pub fn data_dir_default() -> PathBuf {
        Self::config_dir().join("data")
    }

    /// Resolve a data-dir override: absolute paths are used as is, relative
    /// ones live under the config directory, never the process cwd.
    pub fn resolve_data_dir(custom: &str) -> PathBuf {
        let p = PathBuf::from(custom);
        if p.is_absolute() {
            p
        } else {
            Self::config_dir().join(p)
        }
    }

    pub fn center(&self) -> Coordinate {
        Coordinate::new(self.center_lat, self.center_lon)
    }

    /// Load configuration from file (or defaults if missing), then apply
    /// environment overrides. A malformed file falls back to defaults with
    /// a warning rather than aborting.
    pub fn load() -> Self {
        let path = Self::config_file();

        let mut cfg = if path.exists() {
            match fs::read_to_string(&path) {
                Ok(content) => match serde_yaml::from_str(&content) {
                    Ok(cfg) => cfg,
                    Err(e) => {
                        warning(format!(
                            "Ignoring unreadable config file {}: {}",
                            path.display(),
                            e
                        ));
                        Config::default()
                    }
                },
                Err(e) => {
                    warning(format!(
                        "Ignoring unreadable config file {}: {}",
                        path.display(),
                        e
                    ));
                    Config::default()
                }
            }
        } else {
            Config::default()
        };

        cfg.apply_env_overrides();
        cfg
    }

    fn apply_env_overrides(&mut self) {
        if let Ok(token) = env::var("ATTENDO_TOKEN") {
            self.bot_token = Some(token);
        }
        if let Some(lat) = env_f64("ATTENDO_CENTER_LAT") {
            self.center_lat = lat;
        }
        if let Some(lon) = env_f64("ATTENDO_CENTER_LON") {
            self.center_lon = lon;
        }
        if let Some(radius) = env_f64("ATTENDO_RADIUS_M") {
            self.allowed_radius_m = radius;
        }
        if let Ok(dir) = env::var("ATTENDO_DATA_DIR") {
            self.data_dir = dir;
        }
    }

    /// Initialize the configuration directory and file. In test mode the
    /// config file is left alone so test runs never touch the real setup.
    pub fn init_all(custom_data_dir: Option<String>, is_test: bool) -> io::Result<()> {
        let dir = Self::config_dir();

        let data_dir = match custom_data_dir {
            Some(custom) => Self::resolve_data_dir(&custom),
            None => Self::data_dir_default(),
        };

        let config = Config {
            data_dir: data_dir.to_string_lossy().to_string(),
            ..Config::default()
        };

        if !is_test {
            fs::create_dir_all(&dir)?;
            let yaml = serde_yaml::to_string(&config)
                .map_err(|e| io::Error::other(e.to_string()))?;
            let mut file = fs::File::create(Self::config_file())?;
            file.write_all(yaml.as_bytes())?;
        }

        fs::create_dir_all(&data_dir)?;

        Ok(())
    }
}

fn env_f64(key: &str) -> Option<f64> {
    env::var(key).ok().and_then(|v| v.parse::<f64>().ok())
}
