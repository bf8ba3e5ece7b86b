use std::path::PathBuf;

use bookmatch_core::SwipeSettings;
use bookmatch_store::LatencySettings;
use log::LevelFilter;

use super::logging::LogDestination;

const STATE_DIRNAME: &str = ".bookmatch";

/// Settings for one run of the terminal front end.
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Holds the saved-books entry and the log file.
    pub state_dir: PathBuf,
    pub log_destination: LogDestination,
    pub log_level: LevelFilter,
    /// Fixed shuffle seed; `None` draws one from the OS.
    pub seed: Option<u64>,
    pub latency: LatencySettings,
    pub swipe: SwipeSettings,
}

impl Default for AppConfig {
    fn default() -> Self {
        let state_dir = std::env::current_dir()
            .unwrap_or_else(|_| PathBuf::from("."))
            .join(STATE_DIRNAME);
        Self {
            state_dir,
            log_destination: LogDestination::File,
            log_level: LevelFilter::Info,
            seed: None,
            latency: LatencySettings::default(),
            swipe: SwipeSettings::default(),
        }
    }
}
