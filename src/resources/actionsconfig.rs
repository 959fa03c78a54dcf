//! Diagnostics and demo configuration.
//!
//! Settings are read from an INI file. Missing keys keep their defaults, and
//! a missing file leaves the whole configuration at defaults.
//!
//! # Configuration File Format
//!
//! ```ini
//! [diagnostics]
//! log_level = info
//! show_event_log = true
//!
//! [demo]
//! raises = 3
//! ```

use configparser::ini::Ini;
use log::{LevelFilter, info};
use std::path::PathBuf;

const DEFAULT_LOG_LEVEL: LevelFilter = LevelFilter::Info;
const DEFAULT_SHOW_EVENT_LOG: bool = true;
const DEFAULT_RAISES: u32 = 3;
const DEFAULT_CONFIG_PATH: &str = "./gameaction.ini";

#[derive(Debug, Clone)]
pub struct ActionsConfig {
    /// Maximum level passed to the logger.
    pub log_level: LevelFilter,
    /// Print the event log when the demo exits.
    pub show_event_log: bool,
    /// How many times the demo raises each action.
    pub raises: u32,
    /// Path to the configuration file.
    pub config_path: PathBuf,
}

impl Default for ActionsConfig {
    fn default() -> Self {
        Self::new()
    }
}

impl ActionsConfig {
    pub fn new() -> Self {
        Self {
            log_level: DEFAULT_LOG_LEVEL,
            show_event_log: DEFAULT_SHOW_EVENT_LOG,
            raises: DEFAULT_RAISES,
            config_path: PathBuf::from(DEFAULT_CONFIG_PATH),
        }
    }

    pub fn with_path(path: impl Into<PathBuf>) -> Self {
        Self {
            config_path: path.into(),
            ..Self::new()
        }
    }

    /// Load configuration from the INI file.
    ///
    /// Returns an error if the file cannot be read or a value is malformed.
    pub fn load_from_file(&mut self) -> Result<(), String> {
        let mut config = Ini::new();
        config
            .load(&self.config_path)
            .map_err(|e| format!("Failed to load config file: {}", e))?;

        // [diagnostics] section
        if let Some(level) = config.get("diagnostics", "log_level") {
            self.log_level = level
                .parse()
                .map_err(|_| format!("Invalid log_level '{}'", level))?;
        }
        if let Some(show) = config.getbool("diagnostics", "show_event_log")? {
            self.show_event_log = show;
        }

        // [demo] section
        if let Some(raises) = config.getuint("demo", "raises")? {
            self.raises = u32::try_from(raises)
                .map_err(|_| format!("raises out of range: {}", raises))?;
        }

        info!(
            "Loaded config: log_level={}, show_event_log={}, raises={}",
            self.log_level, self.show_event_log, self.raises
        );

        Ok(())
    }

    /// Save configuration to the INI file, creating it if needed.
    pub fn save_to_file(&self) -> Result<(), String> {
        let mut config = Ini::new();

        config.set(
            "diagnostics",
            "log_level",
            Some(self.log_level.to_string().to_lowercase()),
        );
        config.set(
            "diagnostics",
            "show_event_log",
            Some(self.show_event_log.to_string()),
        );
        config.set("demo", "raises", Some(self.raises.to_string()));

        config
            .write(&self.config_path)
            .map_err(|e| format!("Failed to save config file: {}", e))?;

        info!("Saved config to {:?}", self.config_path);

        Ok(())
    }
}
