// the global modal stack
//
// any page or layout can push a dialog onto the stack, dialogs stack on top of each
// other, and only the topmost one reacts to escape, backdrop clicks and its buttons.
// the stack itself never fails and never awaits; layouts own their save logic.
mod bridge;
mod confirm;
mod entry;
mod event;
mod layout;
mod scroll;
mod stack;
mod view;

pub use bridge::{SubmitBridge, SubmitFn};
pub use confirm::{ConfirmOptions, confirm_config, legacy_config};
pub use entry::{
    Callback, DataCallback, LegacyModalConfig, ModalConfig, ModalDefaults, ModalEntry, ModalId,
    Size, Variant,
};
pub use event::{ModalEvent, Reaction};
pub use layout::Layout;
pub use scroll::{BodyOverflow, ScrollLock};
pub use stack::ModalStack;
pub use view::{BASE_Z_INDEX, EntryView, Z_INDEX_STEP};
