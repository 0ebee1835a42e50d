use serde::{Deserialize, Serialize};

use crate::{category::CategoryUuid, endpoint};

// structs and types

pub type AppUuid = u64;

#[derive(Clone, Debug, Default, PartialEq, Deserialize, Serialize)]
pub struct App {
    #[serde(default)]
    pub app_uuid: AppUuid,
    pub name: String,
    // platform bundle identifier, e.g. com.example.game
    pub package: String,
    pub category_uuid: Option<CategoryUuid>,
}

// messages

endpoint!(ListApps);

#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct ListAppsReq {
    pub category_uuid: Option<CategoryUuid>,
}

#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct ListAppsResp {
    pub apps: Vec<App>,
}

endpoint!(CreateApp);

#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct CreateAppReq {
    pub app: App,
}

#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct CreateAppResp {
    pub app: App,
}

endpoint!(UpdateApp);

#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct UpdateAppReq {
    pub app: App,
}

#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct UpdateAppResp {
    pub app: App,
}

endpoint!(DeleteApp);

#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct DeleteAppReq {
    pub app_uuid: AppUuid,
}

#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct DeleteAppResp {}
