pub mod config;
pub mod storage;
pub mod style;
pub mod toast;
