use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct InsertInternetPlanModel {
    pub name: String,
    pub price: String,
    pub download_speed: String,
    pub upload_speed: String,
    pub data_limit: String,
    pub features: Vec<String>,
    #[serde(default)]
    pub is_popular: bool,
}
