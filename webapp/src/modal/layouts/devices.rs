use dioxus::prelude::*;

use crate::{
    common::toast::{notify_error, notify_success},
    modal::open_confirm_modal,
};
use api::{
    client::ClientUuid,
    device::{
        Device, ListDevicesReq, SetDeviceLockedReq, UnlinkDeviceReq, list_devices,
        set_device_locked, unlink_device,
    },
};
use common::{
    local_time,
    modal::{ConfirmOptions, Variant},
};

#[derive(Clone, PartialEq, Props)]
pub struct ClientDevicesLayoutProps {
    client_uuid: ClientUuid,
}

// ClientDevicesLayout
//
// lists the devices linked to one client.  unlinking a device stacks a confirmation
// dialog on top of this one.
#[component]
pub fn ClientDevicesLayout(props: ClientDevicesLayoutProps) -> Element {
    let client_uuid = props.client_uuid;
    let update_signal = use_signal(|| ());

    let devices = use_resource(move || async move {
        update_signal.read();
        list_devices(&ListDevicesReq { client_uuid })
            .await
            .map(|resp| resp.devices)
    });

    let devices = devices.read();
    match &*devices {
        Some(Ok(devices)) if devices.is_empty() => rsx! {
            p { class: "status-message", "This client has no linked devices." }
        },
        Some(Ok(devices)) => rsx! {
            table { class: "data-table",
                thead {
                    tr {
                        th { "Name" }
                        th { "Platform" }
                        th { "Last seen" }
                        th { "Status" }
                        th {}
                    }
                }
                tbody {
                    for device in devices.iter() {
                        DeviceRow {
                            key: "{device.device_uuid}",
                            device: device.clone(),
                            update_signal,
                        }
                    }
                }
            }
        },
        Some(Err(err)) => rsx! {
            p { class: "status-message status-error", "Failed to load devices: {err}" }
        },
        None => rsx! {
            p { class: "status-message", "Loading devices..." }
        },
    }
}

#[derive(Clone, PartialEq, Props)]
struct DeviceRowProps {
    device: Device,
    update_signal: Signal<()>,
}

#[component]
fn DeviceRow(props: DeviceRowProps) -> Element {
    let device = props.device;
    let mut update_signal = props.update_signal;

    let device_uuid = device.device_uuid;
    let locked = device.locked;

    let last_seen = device
        .last_seen
        .map(local_time)
        .unwrap_or_else(|| String::from("never"));

    let toggle_lock = move |_| async move {
        match set_device_locked(&SetDeviceLockedReq {
            device_uuid,
            locked: !locked,
        })
        .await
        {
            Ok(_) => {
                notify_success(String::from(match locked {
                    true => "Device unlocked",
                    false => "Device locked",
                }));
                update_signal.set(());
            }
            Err(err) => notify_error(format!("Failed to update device: {err}")),
        }
    };

    let name = device.name.clone();
    let unlink = move |_| {
        open_confirm_modal(
            ConfirmOptions::new(
                "Unlink device",
                format!("Unlink \"{name}\"? The client will have to pair it again."),
            )
            // the confirmation closes before the request finishes
            .on_confirm(move || {
                spawn_forever(async move {
                    match unlink_device(&UnlinkDeviceReq { device_uuid }).await {
                        Ok(_) => {
                            notify_success(String::from("Device unlinked"));
                            update_signal.set(());
                        }
                        Err(err) => notify_error(format!("Failed to unlink device: {err}")),
                    }
                });
            })
            .confirm_text("Unlink")
            .variant(Variant::Danger),
        );
    };

    rsx! {
        tr {
            td { "{device.name}" }
            td { "{device.platform}" }
            td { "{last_seen}" }
            td {
                if locked {
                    span { class: "badge badge-danger", "locked" }
                } else {
                    span { class: "badge badge-success", "active" }
                }
            }
            td { class: "row-actions",
                button {
                    class: "btn btn-small btn-secondary",
                    onclick: toggle_lock,
                    if locked {
                        "Unlock"
                    } else {
                        "Lock"
                    }
                }
                button { class: "btn btn-small btn-danger", onclick: unlink, "Unlink" }
            }
        }
    }
}
