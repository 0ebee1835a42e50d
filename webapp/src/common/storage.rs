use gloo_console::error as console_error;
use gloo_storage::{LocalStorage, Storage};

use serde::{Deserialize, Serialize};

pub fn set_local_storage<T>(key: &str, value: T)
where
    T: Serialize,
{
    let key = format!("dashboard_{}", key);

    LocalStorage::set(key.clone(), value)
        .unwrap_or_else(|err| console_error!(format!("Failed to set local storage {key}: {err}")))
}

pub fn get_local_storage<T>(key: &str) -> anyhow::Result<T>
where
    T: for<'a> Deserialize<'a>,
{
    let key = format!("dashboard_{}", key);

    LocalStorage::get(key.clone()).map_err(|err| {
        console_error!(format!("Failed to fetch local storage {key}: {err}"));
        anyhow::Error::msg("Local storage failure, see console log")
    })
}

// a missing key is the normal first-visit case and not worth a console error
pub fn has_local_storage(key: &str) -> bool {
    LocalStorage::raw()
        .get_item(&format!("dashboard_{}", key))
        .ok()
        .flatten()
        .is_some()
}
