use serde::{Deserialize, Serialize};

use crate::endpoint;

// structs and types

pub type CategoryUuid = u64;

// app categories drive the default blocking policy on managed devices
#[derive(Clone, Debug, Default, PartialEq, Deserialize, Serialize)]
pub struct Category {
    #[serde(default)]
    pub category_uuid: CategoryUuid,
    pub name: String,
    pub description: String,
    pub blocked_by_default: bool,
}

// messages

endpoint!(ListCategories);

#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct ListCategoriesReq {}

#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct ListCategoriesResp {
    pub categories: Vec<Category>,
}

endpoint!(CreateCategory);

#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct CreateCategoryReq {
    pub category: Category,
}

#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct CreateCategoryResp {
    pub category: Category,
}

endpoint!(UpdateCategory);

#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct UpdateCategoryReq {
    pub category: Category,
}

#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct UpdateCategoryResp {
    pub category: Category,
}

endpoint!(DeleteCategory);

#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct DeleteCategoryReq {
    pub category_uuid: CategoryUuid,
}

#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct DeleteCategoryResp {}
