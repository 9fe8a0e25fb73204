use crate::errors::{AppError, AppResult};
use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::io::Write;
use std::path::PathBuf;

#[derive(Debug, Serialize, Deserialize)]
pub struct Config {
    /// Path of the CSV sheet file holding the set log.
    pub sheet: String,
    /// Weight unit assumed when a row has none.
    #[serde(default = "default_unit")]
    pub default_unit: String,
    #[serde(default = "default_separator_char")]
    pub separator_char: String,
}

fn default_unit() -> String {
    crate::core::codec::DEFAULT_UNIT.to_string()
}
fn default_separator_char() -> String {
    "-".to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            sheet: Self::sheet_file().to_string_lossy().to_string(),
            default_unit: default_unit(),
            separator_char: default_separator_char(),
        }
    }
}

impl Config {
    /// Return the standard configuration directory depending on the platform
    pub fn config_dir() -> PathBuf {
        if cfg!(target_os = "windows") {
            let appdata = env::var("APPDATA").unwrap_or_else(|_| ".".to_string());
            PathBuf::from(appdata).join("rsetlogger")
        } else {
            let home = env::var("HOME").unwrap_or_else(|_| ".".to_string());
            PathBuf::from(home).join(".rsetlogger")
        }
    }

    /// Return the full path of the config file
    pub fn config_file() -> PathBuf {
        Self::config_dir().join("rsetlogger.conf")
    }

    /// Return the full path of the set-log sheet file
    pub fn sheet_file() -> PathBuf {
        Self::config_dir().join("set_log.csv")
    }

    /// Load configuration from file, or return defaults if not found
    pub fn load() -> AppResult<Self> {
        let path = Self::config_file();
        if path.exists() {
            let content = fs::read_to_string(&path)?;
            serde_yaml::from_str(&content).map_err(|e| AppError::Config(e.to_string()))
        } else {
            Ok(Config::default())
        }
    }

    /// Initialize configuration file and sheet file with its header row.
    pub fn init_all(custom_sheet: Option<String>, is_test: bool) -> AppResult<()> {
        let dir = Self::config_dir();
        fs::create_dir_all(&dir)?;

        // Sheet path: user provided (with ~ expanded) or default
        let sheet_path = if let Some(name) = custom_sheet {
            let p = crate::utils::path::expand_tilde(&name);
            if p.is_absolute() { p } else { dir.join(p) }
        } else {
            Self::sheet_file()
        };

        let config = Config {
            sheet: sheet_path.to_string_lossy().to_string(),
            default_unit: default_unit(),
            separator_char: default_separator_char(),
        };

        // Write config file
        if !is_test {
            let yaml = serde_yaml::to_string(&config)
                .map_err(|e| AppError::Config(e.to_string()))?;
            let mut file = fs::File::create(Self::config_file())?;
            file.write_all(yaml.as_bytes())?;
            println!("✅ Config file: {:?}", Self::config_file());
        }

        // Create the sheet with its canonical header if not exists
        crate::store::CsvSheet::create(&config.sheet)?;
        println!("✅ Sheet:       {:?}", sheet_path);

        Ok(())
    }
}
