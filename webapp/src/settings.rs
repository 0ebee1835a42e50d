use dioxus::prelude::*;

use crate::{
    common::{
        config::{CONFIG, store_config},
        toast::notify_success,
    },
    modal::{MODAL_STACK, close_modal, open_confirm_modal, open_legacy_modal, open_modal},
};
use common::{
    config::DashboardConfig,
    modal::{ConfirmOptions, Layout, LegacyModalConfig, ModalConfig, Size, Variant},
};

const LOG_LEVELS: [&str; 5] = ["error", "warn", "info", "debug", "trace"];
const SIZES: [&str; 6] = ["sm", "md", "lg", "xl", "2xl", "full"];
const VARIANTS: [&str; 3] = ["info", "warning", "danger"];

// the preview goes through the string-keyed config on purpose, since that is the shape
// the select boxes produce anyway
fn preview_config(config: &DashboardConfig) -> LegacyModalConfig {
    LegacyModalConfig {
        layout: Some(String::from("default")),
        title: Some(String::from("Dialog preview")),
        size: Some(config.modal.size.key().to_owned()),
        variant: Some(match config.modal.variant {
            Variant::Danger => String::from("danger"),
            Variant::Warning => String::from("warning"),
            Variant::Info => String::from("info"),
        }),
        confirm_text: Some(config.modal.confirm_text.clone()),
        cancel_text: Some(config.modal.cancel_text.clone()),
        ..Default::default()
    }
}

// a custom dialog draws every button itself, including the one that stacks another
// dialog on top of it
fn open_stack_preview() {
    open_modal(
        ModalConfig::new(Layout::Custom)
            .title("Stacked dialogs")
            .size(Size::Md)
            .content(rsx! {
                p { "Dialogs opened from here stack on top of this one.  Escape and backdrop clicks only ever close the top dialog." }
                div { class: "confirmation-buttons",
                    button { class: "btn btn-secondary", onclick: move |_| close_modal(), "Close" }
                    button {
                        class: "btn btn-primary",
                        onclick: move |_| {
                            open_confirm_modal(
                                ConfirmOptions::new("Second dialog", "Confirming closes only this dialog.")
                                    .on_confirm(|| notify_success("Confirmed")),
                            );
                        },
                        "Open another"
                    }
                }
            }),
    );
}

#[component]
pub fn Settings() -> Element {
    let mut draft = use_signal(|| CONFIG.peek().clone());

    let save = move |_| {
        let config = draft();

        store_config(&config);
        MODAL_STACK.with_mut(|stack| stack.set_defaults(config.modal.clone()));
        *CONFIG.write() = config;

        notify_success("Settings saved.  A new log level takes effect after a reload.");
    };

    let reset = move |_| {
        open_confirm_modal(
            ConfirmOptions::new(
                "Reset settings",
                "Put every setting back to its default?  Nothing is stored until you save.",
            )
            .on_confirm(move || {
                let mut draft = draft;
                draft.set(DashboardConfig::default());
            })
            .confirm_text("Reset")
            .variant(Variant::Warning),
        );
    };

    let current = draft();
    let toast_seconds = current.toast_seconds();

    rsx! {
        div { class: "page",
            div { class: "page-header",
                h1 { class: "page-title", "Settings" }
            }

            div { class: "section",
                h2 { class: "section-title", "General" }
                div { class: "form-group",
                    label { class: "form-label", "Log level" }
                    select {
                        class: "form-select",
                        onchange: move |evt| draft.with_mut(|d| d.log_level = evt.value()),
                        for level in LOG_LEVELS {
                            option {
                                value: level,
                                selected: current.log_level == level,
                                "{level}"
                            }
                        }
                    }
                }
                div { class: "form-group",
                    label { class: "form-label", "Notification time (seconds)" }
                    input {
                        class: "form-input",
                        r#type: "number",
                        min: "1",
                        value: "{toast_seconds}",
                        onchange: move |evt| {
                            if let Ok(seconds) = evt.value().parse::<u32>() {
                                draft.with_mut(|d| d.set_toast_seconds(seconds));
                            }
                        },
                    }
                }
            }

            div { class: "section",
                h2 { class: "section-title", "Dialogs" }
                div { class: "form-group",
                    label { class: "form-label", "Confirm button" }
                    input {
                        class: "form-input",
                        r#type: "text",
                        value: "{current.modal.confirm_text}",
                        oninput: move |evt| draft.with_mut(|d| d.modal.confirm_text = evt.value()),
                    }
                }
                div { class: "form-group",
                    label { class: "form-label", "Cancel button" }
                    input {
                        class: "form-input",
                        r#type: "text",
                        value: "{current.modal.cancel_text}",
                        oninput: move |evt| draft.with_mut(|d| d.modal.cancel_text = evt.value()),
                    }
                }
                div { class: "form-group",
                    label { class: "form-label", "Size" }
                    select {
                        class: "form-select",
                        onchange: move |evt| draft.with_mut(|d| d.modal.size = Size::parse(&evt.value())),
                        for size in SIZES {
                            option {
                                value: size,
                                selected: current.modal.size.key() == size,
                                "{size}"
                            }
                        }
                    }
                }
                div { class: "form-group",
                    label { class: "form-label", "Style" }
                    select {
                        class: "form-select",
                        onchange: move |evt| draft.with_mut(|d| d.modal.variant = Variant::parse(&evt.value())),
                        for variant in VARIANTS {
                            option {
                                value: variant,
                                selected: current.modal.variant == Variant::parse(variant),
                                "{variant}"
                            }
                        }
                    }
                }
                div { class: "row-actions",
                    button {
                        class: "btn btn-secondary",
                        onclick: move |_| {
                            open_legacy_modal(preview_config(&draft.peek()));
                        },
                        "Preview"
                    }
                    button {
                        class: "btn btn-secondary",
                        onclick: move |_| open_stack_preview(),
                        "Preview stacking"
                    }
                }
            }

            div { class: "page-header section",
                button { class: "btn btn-secondary", onclick: reset, "Reset" }
                button { class: "btn btn-primary", onclick: save, "Save" }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn preview_carries_the_draft_defaults() {
        let mut config = DashboardConfig::default();
        config.modal.size = Size::TwoXl;
        config.modal.variant = Variant::Warning;
        config.modal.confirm_text = String::from("OK");

        let modal: ModalConfig<()> = preview_config(&config).into();

        assert_eq!(modal.layout, Layout::Passthrough);
        assert_eq!(modal.size, Some(Size::TwoXl));
        assert_eq!(modal.variant, Some(Variant::Warning));
        assert_eq!(modal.confirm_text.as_deref(), Some("OK"));
    }
}
