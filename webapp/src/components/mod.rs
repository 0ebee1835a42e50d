pub mod actions;
pub mod navigation;
pub mod search_bar;
