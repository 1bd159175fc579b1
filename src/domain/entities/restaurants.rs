use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct RestaurantEntity {
    pub id: i32,
    pub name: String,
    pub description: String,
    pub rating: String,
    pub category: String,
    pub image_url: Option<String>,
}
