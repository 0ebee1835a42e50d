use dioxus::prelude::*;

use crate::common::storage::{get_local_storage, has_local_storage, set_local_storage};
use common::config::DashboardConfig;

const CONFIG_KEY: &str = "config";

pub static CONFIG: GlobalSignal<DashboardConfig> = Signal::global(load_config);

// read the stored config, falling back to defaults if there is none or it is unreadable
//
// this runs before the logger exists, so failures only reach the browser console
pub fn load_config() -> DashboardConfig {
    if !has_local_storage(CONFIG_KEY) {
        return DashboardConfig::default();
    }

    get_local_storage(CONFIG_KEY).unwrap_or_default()
}

pub fn store_config(config: &DashboardConfig) {
    set_local_storage(CONFIG_KEY, config);
}
