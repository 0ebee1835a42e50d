use serde::{Deserialize, Serialize};

use crate::{client::ClientUuid, endpoint};

// structs and types

pub type DeviceUuid = u64;

#[derive(Clone, Debug, Default, PartialEq, Deserialize, Serialize)]
pub struct Device {
    pub device_uuid: DeviceUuid,
    pub client_uuid: ClientUuid,
    pub name: String,
    pub platform: String,
    // unix seconds, None if the device never checked in
    pub last_seen: Option<i64>,
    pub locked: bool,
}

// messages

endpoint!(ListDevices);

#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct ListDevicesReq {
    pub client_uuid: ClientUuid,
}

#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct ListDevicesResp {
    pub devices: Vec<Device>,
}

// lock or unlock a device remotely
endpoint!(SetDeviceLocked);

#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct SetDeviceLockedReq {
    pub device_uuid: DeviceUuid,
    pub locked: bool,
}

#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct SetDeviceLockedResp {}

// detach a device from its client; the device must be re-enrolled afterwards
endpoint!(UnlinkDevice);

#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct UnlinkDeviceReq {
    pub device_uuid: DeviceUuid,
}

#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct UnlinkDeviceResp {}
