// Application state module
// Shared, read-only state handed to every request

use super::types::Config;
use crate::data::MockData;

/// Application state
///
/// Built once before the listener starts and never mutated afterwards,
/// so it is shared behind an `Arc` without any locking.
pub struct AppState {
    pub config: Config,
    pub data: MockData,
}

impl AppState {
    pub fn new(config: &Config, data: MockData) -> Self {
        Self {
            config: config.clone(),
            data,
        }
    }

    /// Whether access log lines should be written
    pub const fn access_log(&self) -> bool {
        self.config.logging.access_log
    }
}
