use serde::{Deserialize, Serialize};

use crate::endpoint;

// structs and types

pub type PlanUuid = u64;

#[derive(Clone, Debug, Default, PartialEq, Deserialize, Serialize)]
pub struct Plan {
    #[serde(default)]
    pub plan_uuid: PlanUuid,
    pub name: String,
    pub price_cents: u32,
    pub duration_days: u32,
    pub device_limit: u32,
    pub active: bool,
}

impl Plan {
    pub fn price(&self) -> String {
        format!("{}.{:02}", self.price_cents / 100, self.price_cents % 100)
    }
}

// messages

endpoint!(ListPlans);

#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct ListPlansReq {
    pub include_inactive: bool,
}

#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct ListPlansResp {
    pub plans: Vec<Plan>,
}

endpoint!(CreatePlan);

#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct CreatePlanReq {
    pub plan: Plan,
}

#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct CreatePlanResp {
    pub plan: Plan,
}

endpoint!(UpdatePlan);

#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct UpdatePlanReq {
    pub plan: Plan,
}

#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct UpdatePlanResp {
    pub plan: Plan,
}

// plans with subscribed clients are deactivated by the backend rather than removed
endpoint!(DeletePlan);

#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct DeletePlanReq {
    pub plan_uuid: PlanUuid,
}

#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct DeletePlanResp {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn price_is_rendered_with_two_decimals() {
        let plan = Plan {
            price_cents: 1905,
            ..Default::default()
        };

        assert_eq!(plan.price(), "19.05");
    }
}
