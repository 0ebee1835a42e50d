use serde::{Deserialize, de::DeserializeOwned};
use tracing::warn;

use api::{admin::Admin, app::App, category::Category, client::ClientUuid, plan::Plan};

// Layout
//
// the content a dialog hosts, along with the data that content needs.  the host maps
// each variant to a component with an exhaustive match, so adding a layout here is a
// compile error until the host knows how to render it.
#[derive(Clone, Debug, Default, PartialEq)]
pub enum Layout {
    // renders the entry content (if any) above the generic footer
    #[default]
    Passthrough,
    Confirm {
        message: String,
    },
    // renders the entry content and nothing else, the caller wires every interaction
    Custom,
    // None creates a new record, Some edits the existing one
    AdminForm(Option<Admin>),
    PlanForm(Option<Plan>),
    CategoryForm(Option<Category>),
    AppForm(Option<App>),
    BroadcastForm,
    ClientDevices(ClientUuid),
}

#[derive(Deserialize)]
struct ConfirmData {
    #[serde(default)]
    message: String,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct ClientDevicesData {
    client_uuid: ClientUuid,
}

impl Layout {
    // map a string key from an untyped config onto a layout
    //
    // unknown keys, and data that doesn't match the layout's payload, both fall back
    // to the passthrough layout rather than failing
    pub fn from_key(key: &str, data: serde_json::Value) -> Self {
        let layout = match key {
            "confirmAction" | "confirm" => {
                parse_payload::<ConfirmData>(data).map(|confirm| Layout::Confirm {
                    message: confirm.map(|v| v.message).unwrap_or_default(),
                })
            }
            "default" => Some(Layout::Passthrough),
            "custom" => Some(Layout::Custom),
            "adminForm" => parse_payload(data).map(Layout::AdminForm),
            "planForm" => parse_payload(data).map(Layout::PlanForm),
            "categoryForm" => parse_payload(data).map(Layout::CategoryForm),
            "appForm" => parse_payload(data).map(Layout::AppForm),
            "broadcastForm" => Some(Layout::BroadcastForm),
            "clientDevices" => parse_payload::<ClientDevicesData>(data)
                .flatten()
                .map(|v| Layout::ClientDevices(v.client_uuid)),
            _ => {
                warn!({ layout = key }, "unknown modal layout, using passthrough");
                return Layout::Passthrough;
            }
        };

        layout.unwrap_or_else(|| {
            warn!({ layout = key }, "modal data does not match layout, using passthrough");
            Layout::Passthrough
        })
    }

    pub fn key(&self) -> &'static str {
        match self {
            Layout::Passthrough => "default",
            Layout::Confirm { .. } => "confirmAction",
            Layout::Custom => "custom",
            Layout::AdminForm(_) => "adminForm",
            Layout::PlanForm(_) => "planForm",
            Layout::CategoryForm(_) => "categoryForm",
            Layout::AppForm(_) => "appForm",
            Layout::BroadcastForm => "broadcastForm",
            Layout::ClientDevices(_) => "clientDevices",
        }
    }

    // layouts that render their own buttons, in which case the host never draws the
    // generic footer for them
    pub fn owns_footer(&self) -> bool {
        matches!(self, Layout::Confirm { .. } | Layout::Custom)
    }
}

// null means "no payload", anything else has to deserialize cleanly
//
// the outer None is a mismatch, the inner None is an absent payload
fn parse_payload<T: DeserializeOwned>(data: serde_json::Value) -> Option<Option<T>> {
    if data.is_null() {
        return Some(None);
    }

    serde_json::from_value(data).ok().map(Some)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn confirm_aliases_resolve_to_the_same_layout() {
        let message = json!({"message": "Delete this plan?"});

        assert_eq!(
            Layout::from_key("confirm", message.clone()),
            Layout::from_key("confirmAction", message)
        );
        assert_eq!(
            Layout::from_key("confirm", serde_json::Value::Null),
            Layout::Confirm {
                message: String::new()
            }
        );
    }

    #[test]
    fn unknown_key_is_passthrough() {
        assert_eq!(
            Layout::from_key("fancyWizard", json!({"step": 1})),
            Layout::Passthrough
        );
    }

    #[test]
    fn mismatched_payload_is_passthrough() {
        assert_eq!(
            Layout::from_key("planForm", json!("not a plan")),
            Layout::Passthrough
        );
        assert_eq!(
            Layout::from_key("clientDevices", serde_json::Value::Null),
            Layout::Passthrough
        );
    }

    #[test]
    fn typed_payloads_are_parsed() {
        let layout = Layout::from_key(
            "planForm",
            json!({
                "plan_uuid": 7,
                "name": "Family",
                "price_cents": 999,
                "duration_days": 30,
                "device_limit": 5,
                "active": true
            }),
        );

        match layout {
            Layout::PlanForm(Some(plan)) => {
                assert_eq!(plan.plan_uuid, 7);
                assert_eq!(plan.name, "Family");
            }
            other => panic!("unexpected layout {other:?}"),
        }

        assert_eq!(
            Layout::from_key("adminForm", serde_json::Value::Null),
            Layout::AdminForm(None)
        );
        assert_eq!(
            Layout::from_key("clientDevices", json!({"clientUuid": 12})),
            Layout::ClientDevices(12)
        );
    }

    #[test]
    fn keys_read_back_for_payload_free_layouts() {
        for layout in [
            Layout::Passthrough,
            Layout::Custom,
            Layout::BroadcastForm,
            Layout::CategoryForm(None),
        ] {
            assert_eq!(
                Layout::from_key(layout.key(), serde_json::Value::Null),
                layout
            );
        }
    }

    #[test]
    fn only_confirm_and_custom_own_their_footer() {
        assert!(Layout::Confirm {
            message: String::new()
        }
        .owns_footer());
        assert!(Layout::Custom.owns_footer());
        assert!(!Layout::Passthrough.owns_footer());
        assert!(!Layout::PlanForm(None).owns_footer());
        assert!(!Layout::ClientDevices(3).owns_footer());
    }
}
