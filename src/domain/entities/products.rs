use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ProductEntity {
    pub id: i32,
    pub name: String,
    pub price: String,
    pub store: String,
    pub category: String,
    pub image_url: Option<String>,
}
