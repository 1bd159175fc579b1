use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct InsertRestaurantModel {
    pub name: String,
    pub description: String,
    pub rating: String,
    pub category: String,
    #[serde(default)]
    pub image_url: Option<String>,
}
