use log::{Level, LevelFilter};
use std::str::FromStr;

/// Local storage key holding the saved-date list.
pub const STORAGE_KEY: &str = "datesave-saved-dates";

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct StudioConfig {
    pub storage_key: &'static str,
    pub log_level: LevelFilter,
}

impl Default for StudioConfig {
    fn default() -> Self {
        Self {
            storage_key: STORAGE_KEY,
            log_level: default_level(),
        }
    }
}

impl StudioConfig {
    /// `DATESAVE_LOG` is read when the bundle is compiled; there is no runtime environment in the browser.
    pub fn from_build_env() -> Self {
        Self {
            log_level: parse_level(option_env!("DATESAVE_LOG")),
            ..Self::default()
        }
    }

    /// Most verbose level the console logger should print; `None` when logging is off.
    pub fn console_level(&self) -> Option<Level> {
        self.log_level.to_level()
    }
}

pub fn parse_level(raw: Option<&str>) -> LevelFilter {
    raw.and_then(|raw| LevelFilter::from_str(raw.trim()).ok())
        .unwrap_or_else(default_level)
}

fn default_level() -> LevelFilter {
    if cfg!(debug_assertions) {
        LevelFilter::Debug
    } else {
        LevelFilter::Info
    }
}
