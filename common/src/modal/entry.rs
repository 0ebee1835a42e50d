use std::{fmt, rc::Rc};

use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::modal::layout::Layout;

pub type Callback = Rc<dyn Fn()>;

pub type DataCallback = Rc<dyn Fn(serde_json::Value)>;

const ID_SUFFIX_LEN: usize = 6;
const ID_ALPHABET: &[u8] = b"0123456789abcdefghijklmnopqrstuvwxyz";

// ModalId
//
// opaque key for one open dialog, used for keyed rendering and for the submit bridge.
// the timestamp keeps ids ordered for humans reading logs, the suffix makes collisions
// between dialogs opened in the same millisecond unlikely (the stack re-rolls anyway)
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ModalId(String);

impl ModalId {
    pub fn generate() -> Self {
        let mut rng = rand::rng();
        let suffix: String = (0..ID_SUFFIX_LEN)
            .map(|_| ID_ALPHABET[rng.random_range(0..ID_ALPHABET.len())] as char)
            .collect();

        ModalId(format!(
            "modal-{}-{}",
            chrono::Utc::now().timestamp_millis(),
            suffix
        ))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ModalId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Deserialize, Serialize)]
pub enum Size {
    #[serde(rename = "sm")]
    Sm,
    #[serde(rename = "md")]
    Md,
    #[default]
    #[serde(rename = "lg")]
    Lg,
    #[serde(rename = "xl")]
    Xl,
    #[serde(rename = "2xl")]
    TwoXl,
    #[serde(rename = "full")]
    Full,
}

impl Size {
    // anything we don't recognize renders as a large dialog
    pub fn parse(value: &str) -> Self {
        match value {
            "sm" => Size::Sm,
            "md" => Size::Md,
            "lg" => Size::Lg,
            "xl" => Size::Xl,
            "2xl" => Size::TwoXl,
            "full" => Size::Full,
            _ => Size::Lg,
        }
    }

    pub fn key(&self) -> &'static str {
        match self {
            Size::Sm => "sm",
            Size::Md => "md",
            Size::Lg => "lg",
            Size::Xl => "xl",
            Size::TwoXl => "2xl",
            Size::Full => "full",
        }
    }

    pub fn class(&self) -> &'static str {
        match self {
            Size::Sm => "modal-size-sm",
            Size::Md => "modal-size-md",
            Size::Lg => "modal-size-lg",
            Size::Xl => "modal-size-xl",
            Size::TwoXl => "modal-size-2xl",
            Size::Full => "modal-size-full",
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Variant {
    Danger,
    Warning,
    #[default]
    Info,
}

impl Variant {
    pub fn parse(value: &str) -> Self {
        match value {
            "danger" => Variant::Danger,
            "warning" => Variant::Warning,
            _ => Variant::Info,
        }
    }

    pub fn class(&self) -> &'static str {
        match self {
            Variant::Danger => "variant-danger",
            Variant::Warning => "variant-warning",
            Variant::Info => "variant-info",
        }
    }
}

// the part of the modal behavior that is user-configurable
//
// these are the values an entry gets when the caller leaves the field empty
#[derive(Clone, Debug, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct ModalDefaults {
    pub confirm_text: String,
    pub cancel_text: String,
    pub size: Size,
    pub variant: Variant,
}

impl Default for ModalDefaults {
    fn default() -> Self {
        ModalDefaults {
            confirm_text: String::from("Confirm"),
            cancel_text: String::from("Cancel"),
            size: Size::Lg,
            variant: Variant::Info,
        }
    }
}

// ModalConfig
//
// what a caller hands to open(); every field is optional and resolve() fills in the
// blanks.  C is whatever the host renders, and is only used by the custom and
// passthrough layouts.
pub struct ModalConfig<C> {
    pub layout: Layout,
    pub title: Option<String>,
    pub content: Option<C>,
    pub size: Option<Size>,
    pub variant: Option<Variant>,
    pub on_confirm: Option<Callback>,
    pub on_close: Option<Callback>,
    pub on_cancel: Option<Callback>,
    pub on_data_received: Option<DataCallback>,
    pub show_confirm_button: Option<bool>,
    pub show_cancel_button: Option<bool>,
    pub confirm_text: Option<String>,
    pub cancel_text: Option<String>,
    pub close_on_backdrop_click: Option<bool>,
    pub close_on_escape: Option<bool>,
}

impl<C> Default for ModalConfig<C> {
    fn default() -> Self {
        ModalConfig {
            layout: Layout::default(),
            title: None,
            content: None,
            size: None,
            variant: None,
            on_confirm: None,
            on_close: None,
            on_cancel: None,
            on_data_received: None,
            show_confirm_button: None,
            show_cancel_button: None,
            confirm_text: None,
            cancel_text: None,
            close_on_backdrop_click: None,
            close_on_escape: None,
        }
    }
}

impl<C> ModalConfig<C> {
    pub fn new(layout: Layout) -> Self {
        ModalConfig {
            layout,
            ..Default::default()
        }
    }

    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn content(mut self, content: C) -> Self {
        self.content = Some(content);
        self
    }

    pub fn size(mut self, size: Size) -> Self {
        self.size = Some(size);
        self
    }

    pub fn variant(mut self, variant: Variant) -> Self {
        self.variant = Some(variant);
        self
    }

    pub fn on_confirm(mut self, f: impl Fn() + 'static) -> Self {
        self.on_confirm = Some(Rc::new(f));
        self
    }

    pub fn on_close(mut self, f: impl Fn() + 'static) -> Self {
        self.on_close = Some(Rc::new(f));
        self
    }

    pub fn on_cancel(mut self, f: impl Fn() + 'static) -> Self {
        self.on_cancel = Some(Rc::new(f));
        self
    }

    pub fn on_data_received(mut self, f: impl Fn(serde_json::Value) + 'static) -> Self {
        self.on_data_received = Some(Rc::new(f));
        self
    }

    pub fn buttons(mut self, confirm: bool, cancel: bool) -> Self {
        self.show_confirm_button = Some(confirm);
        self.show_cancel_button = Some(cancel);
        self
    }

    pub fn confirm_text(mut self, text: impl Into<String>) -> Self {
        self.confirm_text = Some(text.into());
        self
    }

    pub fn cancel_text(mut self, text: impl Into<String>) -> Self {
        self.cancel_text = Some(text.into());
        self
    }

    pub fn close_on_backdrop_click(mut self, enabled: bool) -> Self {
        self.close_on_backdrop_click = Some(enabled);
        self
    }

    pub fn close_on_escape(mut self, enabled: bool) -> Self {
        self.close_on_escape = Some(enabled);
        self
    }

    // collapse every default into a fully-populated entry so that nothing downstream
    // has to know what the fallbacks are
    pub(crate) fn resolve(self, id: ModalId, defaults: &ModalDefaults) -> ModalEntry<C> {
        ModalEntry {
            id,
            layout: self.layout,
            title: self.title,
            content: self.content,
            size: self.size.unwrap_or(defaults.size),
            variant: self.variant.unwrap_or(defaults.variant),
            on_confirm: self.on_confirm,
            on_close: self.on_close,
            on_cancel: self.on_cancel,
            on_data_received: self.on_data_received,
            show_confirm_button: self.show_confirm_button.unwrap_or(true),
            show_cancel_button: self.show_cancel_button.unwrap_or(true),
            confirm_text: self
                .confirm_text
                .unwrap_or_else(|| defaults.confirm_text.clone()),
            cancel_text: self
                .cancel_text
                .unwrap_or_else(|| defaults.cancel_text.clone()),
            close_on_backdrop_click: self.close_on_backdrop_click.unwrap_or(true),
            close_on_escape: self.close_on_escape.unwrap_or(true),
        }
    }
}

// LegacyModalConfig
//
// the untyped shape that older pages and saved dashboards still produce, with string
// keys for the layout, size and variant and an opaque data bag.  nothing in here can
// fail to convert; unknown values land on their defaults.
#[derive(Clone, Debug, Default, Deserialize, Serialize)]
#[serde(default, rename_all = "camelCase")]
pub struct LegacyModalConfig {
    pub layout: Option<String>,
    pub title: Option<String>,
    pub data: serde_json::Value,
    pub size: Option<String>,
    pub variant: Option<String>,
    pub show_confirm_button: Option<bool>,
    pub show_cancel_button: Option<bool>,
    pub confirm_text: Option<String>,
    pub cancel_text: Option<String>,
    pub close_on_backdrop_click: Option<bool>,
    pub close_on_escape: Option<bool>,
}

impl<C> From<LegacyModalConfig> for ModalConfig<C> {
    fn from(legacy: LegacyModalConfig) -> Self {
        let layout = match legacy.layout.as_deref() {
            Some(key) => Layout::from_key(key, legacy.data),
            None => Layout::Passthrough,
        };

        ModalConfig {
            layout,
            title: legacy.title,
            size: legacy.size.as_deref().map(Size::parse),
            variant: legacy.variant.as_deref().map(Variant::parse),
            show_confirm_button: legacy.show_confirm_button,
            show_cancel_button: legacy.show_cancel_button,
            confirm_text: legacy.confirm_text,
            cancel_text: legacy.cancel_text,
            close_on_backdrop_click: legacy.close_on_backdrop_click,
            close_on_escape: legacy.close_on_escape,
            ..Default::default()
        }
    }
}

// ModalEntry
//
// one open dialog.  entries are only built by ModalStack::open() and never change
// afterwards, so all fields are private and exposed through accessors.
pub struct ModalEntry<C> {
    id: ModalId,
    layout: Layout,
    title: Option<String>,
    content: Option<C>,
    size: Size,
    variant: Variant,
    on_confirm: Option<Callback>,
    on_close: Option<Callback>,
    on_cancel: Option<Callback>,
    on_data_received: Option<DataCallback>,
    show_confirm_button: bool,
    show_cancel_button: bool,
    confirm_text: String,
    cancel_text: String,
    close_on_backdrop_click: bool,
    close_on_escape: bool,
}

impl<C> ModalEntry<C> {
    pub fn id(&self) -> &ModalId {
        &self.id
    }

    pub fn layout(&self) -> &Layout {
        &self.layout
    }

    pub fn title(&self) -> Option<&str> {
        self.title.as_deref()
    }

    pub fn content(&self) -> Option<&C> {
        self.content.as_ref()
    }

    pub fn size(&self) -> Size {
        self.size
    }

    pub fn variant(&self) -> Variant {
        self.variant
    }

    pub fn on_confirm(&self) -> Option<Callback> {
        self.on_confirm.clone()
    }

    pub fn on_close(&self) -> Option<Callback> {
        self.on_close.clone()
    }

    pub fn on_cancel(&self) -> Option<Callback> {
        self.on_cancel.clone()
    }

    pub fn on_data_received(&self) -> Option<DataCallback> {
        self.on_data_received.clone()
    }

    pub fn show_confirm_button(&self) -> bool {
        self.show_confirm_button
    }

    pub fn show_cancel_button(&self) -> bool {
        self.show_cancel_button
    }

    pub fn confirm_text(&self) -> &str {
        &self.confirm_text
    }

    pub fn cancel_text(&self) -> &str {
        &self.cancel_text
    }

    pub fn close_on_backdrop_click(&self) -> bool {
        self.close_on_backdrop_click
    }

    pub fn close_on_escape(&self) -> bool {
        self.close_on_escape
    }
}

impl<C> fmt::Debug for ModalEntry<C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ModalEntry")
            .field("id", &self.id)
            .field("layout", &self.layout.key())
            .field("title", &self.title)
            .field("size", &self.size)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unknown_size_falls_back_to_large() {
        assert_eq!(Size::parse("huge"), Size::Lg);
        assert_eq!(Size::parse(""), Size::Lg);
        assert_eq!(Size::parse("2xl"), Size::TwoXl);
        assert_eq!(Size::parse("huge").class(), "modal-size-lg");
    }

    #[test]
    fn unknown_variant_falls_back_to_info() {
        assert_eq!(Variant::parse("danger"), Variant::Danger);
        assert_eq!(Variant::parse("catastrophic"), Variant::Info);
    }

    #[test]
    fn resolve_applies_every_default() {
        let id = ModalId::generate();
        let entry = ModalConfig::<()>::default().resolve(id.clone(), &ModalDefaults::default());

        assert_eq!(entry.id(), &id);
        assert_eq!(entry.layout(), &Layout::Passthrough);
        assert_eq!(entry.title(), None);
        assert_eq!(entry.size(), Size::Lg);
        assert_eq!(entry.variant(), Variant::Info);
        assert!(entry.show_confirm_button());
        assert!(entry.show_cancel_button());
        assert_eq!(entry.confirm_text(), "Confirm");
        assert_eq!(entry.cancel_text(), "Cancel");
        assert!(entry.close_on_backdrop_click());
        assert!(entry.close_on_escape());
        assert!(entry.on_confirm().is_none());
    }

    #[test]
    fn resolve_prefers_configured_defaults() {
        let defaults = ModalDefaults {
            confirm_text: String::from("Bestätigen"),
            cancel_text: String::from("Abbrechen"),
            size: Size::Md,
            variant: Variant::Warning,
        };

        let entry = ModalConfig::<()>::new(Layout::Custom)
            .cancel_text("Back")
            .resolve(ModalId::generate(), &defaults);

        assert_eq!(entry.confirm_text(), "Bestätigen");
        assert_eq!(entry.cancel_text(), "Back");
        assert_eq!(entry.size(), Size::Md);
        assert_eq!(entry.variant(), Variant::Warning);
    }

    #[test]
    fn legacy_config_degrades_to_defaults() {
        let legacy: LegacyModalConfig = serde_json::from_str(
            r#"{"layout": "doesNotExist", "size": "gigantic", "variant": "loud", "title": "Hi"}"#,
        )
        .unwrap();

        let entry = ModalConfig::<()>::from(legacy)
            .resolve(ModalId::generate(), &ModalDefaults::default());

        assert_eq!(entry.layout(), &Layout::Passthrough);
        assert_eq!(entry.size(), Size::Lg);
        assert_eq!(entry.variant(), Variant::Info);
        assert_eq!(entry.title(), Some("Hi"));
    }

    #[test]
    fn ids_have_the_expected_shape() {
        let id = ModalId::generate();
        let parts: Vec<&str> = id.as_str().split('-').collect();

        assert_eq!(parts.len(), 3);
        assert_eq!(parts[0], "modal");
        assert!(parts[1].parse::<i64>().is_ok());
        assert_eq!(parts[2].len(), ID_SUFFIX_LEN);
    }

    #[test]
    fn defaults_deserialize_from_partial_config() {
        let defaults: ModalDefaults = serde_json::from_str(r#"{"size": "sm"}"#).unwrap();

        assert_eq!(defaults.size, Size::Sm);
        assert_eq!(defaults.confirm_text, "Confirm");
    }
}
