use tracing::warn;
use web_sys::HtmlElement;

use common::modal::BodyOverflow;

// the document <body>, whose inline overflow style is what the scroll lock toggles
pub struct DocumentBody(HtmlElement);

impl DocumentBody {
    pub fn current() -> Option<Self> {
        web_sys::window()?.document()?.body().map(DocumentBody)
    }
}

impl BodyOverflow for DocumentBody {
    fn overflow(&self) -> String {
        self.0
            .style()
            .get_property_value("overflow")
            .unwrap_or_default()
    }

    fn set_overflow(&mut self, value: &str) {
        if let Err(err) = self.0.style().set_property("overflow", value) {
            warn!({ error = ?err }, "failed to set body overflow");
        }
    }
}
