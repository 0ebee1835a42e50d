// the browser-free half of the dashboard
//
// everything in here is plain data and state transitions so that it can be unit tested
// on the host; the webapp crate wraps it in signals and components
pub mod config;
pub mod form;
pub mod modal;

use chrono::{Local, TimeZone};

pub fn local_time(secs: i64) -> String {
    match Local.timestamp_opt(secs, 0).single() {
        Some(dt) => dt.format("%Y-%m-%d %H:%M").to_string(),
        None => String::from("invalid timestamp"),
    }
}
