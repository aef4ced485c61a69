//! Configuration management.
//!
//! TOML settings file with `[logging]` and `[output]` sections. Every field
//! has a default, so a partial or empty file is valid.
//!
//! # Example
//!
//! ```no_run
//! use extchap_core::config::ConfigManager;
//!
//! let mut config = ConfigManager::new(".config/extchap.toml");
//! config.load_or_create().unwrap();
//! println!("Log level: {:?}", config.settings().logging.level);
//! ```

mod manager;
mod settings;

pub use manager::{ConfigError, ConfigManager, ConfigResult};
pub use settings::{LoggingSettings, OutputSettings, Settings};
