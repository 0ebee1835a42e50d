use serde::{Deserialize, Serialize};
use tracing::Level;

use crate::modal::ModalDefaults;

pub const DEFAULT_TOAST_MILLIS: u32 = 4000;
pub const MAX_TOAST_SECONDS: u32 = 3600;

// DashboardConfig
//
// per-browser settings, kept in local storage by the webapp.  every field has a default
// so a missing or partially written entry still yields a usable config.
#[derive(Clone, Debug, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct DashboardConfig {
    pub log_level: String,
    pub toast_millis: u32,
    pub modal: ModalDefaults,
}

impl Default for DashboardConfig {
    fn default() -> Self {
        DashboardConfig {
            log_level: String::from("info"),
            toast_millis: DEFAULT_TOAST_MILLIS,
            modal: ModalDefaults::default(),
        }
    }
}

impl DashboardConfig {
    pub fn level(&self) -> Level {
        self.log_level.parse().unwrap_or(Level::INFO)
    }

    pub fn toast_seconds(&self) -> u32 {
        self.toast_millis / 1000
    }

    // the settings page takes whole seconds straight from a number input
    pub fn set_toast_seconds(&mut self, seconds: u32) {
        self.toast_millis = seconds.clamp(1, MAX_TOAST_SECONDS) * 1000;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::modal::Size;

    #[test]
    fn partial_config_keeps_defaults() {
        let config: DashboardConfig =
            serde_json::from_str(r#"{"modal": {"cancel_text": "Close"}}"#).unwrap();

        assert_eq!(config.toast_millis, DEFAULT_TOAST_MILLIS);
        assert_eq!(config.modal.cancel_text, "Close");
        assert_eq!(config.modal.confirm_text, "Confirm");
        assert_eq!(config.modal.size, Size::Lg);
    }

    #[test]
    fn log_level_parses_or_falls_back() {
        let mut config = DashboardConfig::default();
        assert_eq!(config.level(), Level::INFO);

        config.log_level = String::from("debug");
        assert_eq!(config.level(), Level::DEBUG);

        config.log_level = String::from("chatty");
        assert_eq!(config.level(), Level::INFO);
    }

    #[test]
    fn toast_seconds_are_clamped() {
        let mut config = DashboardConfig::default();

        config.set_toast_seconds(0);
        assert_eq!(config.toast_millis, 1000);

        config.set_toast_seconds(7);
        assert_eq!(config.toast_seconds(), 7);

        config.set_toast_seconds(u32::MAX);
        assert_eq!(config.toast_millis, MAX_TOAST_SECONDS * 1000);
    }
}
