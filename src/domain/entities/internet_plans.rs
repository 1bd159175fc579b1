use serde::{Deserialize, Serialize};

/// Decimal columns (`price`) carry over the wire as strings, e.g. "29.00".
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct InternetPlanEntity {
    pub id: i32,
    pub name: String,
    pub price: String,
    pub download_speed: String,
    pub upload_speed: String,
    pub data_limit: String,
    pub features: Vec<String>,
    pub is_popular: bool,
}
