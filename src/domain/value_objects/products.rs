use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct InsertProductModel {
    pub name: String,
    pub price: String,
    pub store: String,
    pub category: String,
    #[serde(default)]
    pub image_url: Option<String>,
}
