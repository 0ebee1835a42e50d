use serde::{Deserialize, Serialize};

use crate::{endpoint, plan::PlanUuid};

// structs and types

pub type ClientUuid = u64;

#[derive(Clone, Debug, Default, PartialEq, Deserialize, Serialize)]
pub struct Client {
    pub client_uuid: ClientUuid,
    pub name: String,
    pub email: String,
    pub plan_uuid: Option<PlanUuid>,
    // unix seconds
    pub created: i64,
    pub device_count: u32,
}

// messages

// search clients by name or email
endpoint!(SearchClients);

#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct SearchClientsReq {
    pub filter: String,
}

#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct SearchClientsResp {
    pub clients: Vec<Client>,
}

endpoint!(GetClient);

#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct GetClientReq {
    pub client_uuid: ClientUuid,
}

#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct GetClientResp {
    pub client: Client,
}

// move a client to another plan, or drop their subscription with None
endpoint!(SetClientPlan);

#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct SetClientPlanReq {
    pub client_uuid: ClientUuid,
    pub plan_uuid: Option<PlanUuid>,
}

#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct SetClientPlanResp {}

endpoint!(DeleteClient);

#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct DeleteClientReq {
    pub client_uuid: ClientUuid,
}

#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct DeleteClientResp {}
