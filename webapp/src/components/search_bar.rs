use dioxus::prelude::*;

use crate::common::storage::set_local_storage;

#[derive(Clone, PartialEq, Props)]
pub struct SearchBarProps {
    search_signal: Signal<String>,
    storage_key: &'static str,
    placeholder: &'static str,
    #[props(default)]
    status: String,
    #[props(default)]
    action_button: Option<Element>,
}

// the last filter is kept in local storage so the page comes back the way it was left
#[component]
pub fn SearchBar(props: SearchBarProps) -> Element {
    let mut search_signal = props.search_signal;
    let storage_key = props.storage_key;
    let placeholder = props.placeholder;
    let status = props.status.clone();

    rsx! {
        div { class: "search-bar",
            form {
                class: "search-form",
                onsubmit: move |event| {
                    event.prevent_default();
                    let filter = match event.values().get("search_filter") {
                        Some(val) => val.as_value(),
                        None => String::from(""),
                    };
                    search_signal.set(filter.clone());
                    set_local_storage(storage_key, filter);
                },
                input {
                    class: "form-input",
                    name: "search_filter",
                    r#type: "text",
                    placeholder: "{placeholder}",
                    value: "{search_signal()}",
                }
                button { class: "btn btn-primary", r#type: "submit", "Search" }
            }

            if !status.is_empty() {
                span { class: "search-status", "{status}" }
            }

            if let Some(action_button) = props.action_button {
                div { class: "search-actions", {action_button} }
            }
        }
    }
}
