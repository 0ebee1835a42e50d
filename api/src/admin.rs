use serde::{Deserialize, Serialize};

use crate::endpoint;

// structs and types

pub type AdminUuid = u64;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Deserialize, Serialize)]
pub enum AdminRole {
    Owner,
    Manager,
    #[default]
    Support,
}

impl AdminRole {
    pub const ALL: [AdminRole; 3] = [AdminRole::Owner, AdminRole::Manager, AdminRole::Support];

    pub fn as_str(&self) -> &'static str {
        match self {
            AdminRole::Owner => "owner",
            AdminRole::Manager => "manager",
            AdminRole::Support => "support",
        }
    }
}

impl From<&str> for AdminRole {
    fn from(value: &str) -> Self {
        match value {
            "owner" => AdminRole::Owner,
            "manager" => AdminRole::Manager,
            _ => AdminRole::Support,
        }
    }
}

// admin_uuid is assigned by the backend and ignored by CreateAdmin
#[derive(Clone, Debug, Default, PartialEq, Deserialize, Serialize)]
pub struct Admin {
    #[serde(default)]
    pub admin_uuid: AdminUuid,
    pub name: String,
    pub email: String,
    pub role: AdminRole,
}

// messages

// list every dashboard administrator
endpoint!(ListAdmins);

#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct ListAdminsReq {}

#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct ListAdminsResp {
    pub admins: Vec<Admin>,
}

// create an administrator, optionally with an initial password
endpoint!(CreateAdmin);

#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct CreateAdminReq {
    pub admin: Admin,
    pub password: String,
}

#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct CreateAdminResp {
    pub admin: Admin,
}

// update name/email/role; an empty password leaves it unchanged
endpoint!(UpdateAdmin);

#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct UpdateAdminReq {
    pub admin: Admin,
    pub password: Option<String>,
}

#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct UpdateAdminResp {
    pub admin: Admin,
}

// delete an administrator
endpoint!(DeleteAdmin);

#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct DeleteAdminReq {
    pub admin_uuid: AdminUuid,
}

#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct DeleteAdminResp {}
