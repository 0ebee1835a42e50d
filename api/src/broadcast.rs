use serde::{Deserialize, Serialize};

use crate::{endpoint, plan::PlanUuid};

// structs and types

pub type BroadcastUuid = u64;

#[derive(Clone, Debug, Default, PartialEq, Deserialize, Serialize)]
pub enum Audience {
    #[default]
    Everyone,
    Plan(PlanUuid),
    Unsubscribed,
}

#[derive(Clone, Debug, Default, PartialEq, Deserialize, Serialize)]
pub struct Broadcast {
    #[serde(default)]
    pub broadcast_uuid: BroadcastUuid,
    pub title: String,
    pub body: String,
    pub audience: Audience,
    // unix seconds, filled in by the backend once delivered
    #[serde(default)]
    pub sent: Option<i64>,
}

// messages

endpoint!(ListBroadcasts);

#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct ListBroadcastsReq {}

#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct ListBroadcastsResp {
    pub broadcasts: Vec<Broadcast>,
}

// queue a message for every client matching the audience
endpoint!(SendBroadcast);

#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct SendBroadcastReq {
    pub broadcast: Broadcast,
}

#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct SendBroadcastResp {
    pub broadcast: Broadcast,
}

endpoint!(DeleteBroadcast);

#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct DeleteBroadcastReq {
    pub broadcast_uuid: BroadcastUuid,
}

#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct DeleteBroadcastResp {}
