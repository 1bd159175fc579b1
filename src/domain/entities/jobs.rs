use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct JobEntity {
    pub id: i32,
    pub title: String,
    pub company: String,
    pub location: String,
    #[serde(rename = "type")]
    pub job_type: String,
    pub salary: String,
    pub description: String,
}
