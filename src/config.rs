//! Application Configuration
//!
//! Built once in `main` and carried by `AppContext`.

use rolling_logger::LoggerConfig;

use crate::dates::DateLocale;

/// localStorage keys
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StorageKeys {
    pub dark_mode: &'static str,
    pub font_size: &'static str,
    pub entries: &'static str,
}

impl Default for StorageKeys {
    fn default() -> Self {
        Self {
            dark_mode: "darkMode",
            font_size: "fontSize",
            entries: "diaryEntries",
        }
    }
}

/// App-wide settings
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AppConfig {
    pub keys: StorageKeys,
    /// Characters of content shown in a list row before the ellipsis
    pub preview_chars: usize,
    pub locale: DateLocale,
    pub logger: LoggerConfig,
    /// Recent log lines shown under a load error
    pub error_log_lines: usize,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            keys: StorageKeys::default(),
            preview_chars: 50,
            locale: DateLocale::Korean,
            logger: LoggerConfig::default(),
            error_log_lines: 5,
        }
    }
}
