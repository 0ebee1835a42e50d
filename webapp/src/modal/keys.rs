use futures::channel::mpsc::UnboundedSender;
use tracing::warn;
use wasm_bindgen::{JsCast, closure::Closure};
use web_sys::{Document, KeyboardEvent};

// EscapeListener
//
// a keydown listener on the whole document that forwards escape presses to the host.
// the host installs a fresh one for every new top entry and dropping it unbinds it, so
// there is never more than one and it never outlives the entry it was bound for.
pub struct EscapeListener {
    document: Document,
    closure: Closure<dyn FnMut(KeyboardEvent)>,
}

impl EscapeListener {
    pub fn install(escapes: UnboundedSender<()>) -> Option<Self> {
        let document = web_sys::window()?.document()?;

        let closure = Closure::<dyn FnMut(KeyboardEvent)>::new(move |event: KeyboardEvent| {
            if event.key() == "Escape" {
                let _ = escapes.unbounded_send(());
            }
        });

        if let Err(err) =
            document.add_event_listener_with_callback("keydown", closure.as_ref().unchecked_ref())
        {
            warn!({ error = ?err }, "failed to bind escape key");
            return None;
        }

        Some(EscapeListener { document, closure })
    }
}

impl Drop for EscapeListener {
    fn drop(&mut self) {
        let _ = self
            .document
            .remove_event_listener_with_callback("keydown", self.closure.as_ref().unchecked_ref());
    }
}
