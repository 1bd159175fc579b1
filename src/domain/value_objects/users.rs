use serde::{Deserialize, Serialize};

use crate::domain::entities::users::UserEntity;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct InsertUserModel {
    pub username: String,
    pub password: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct LoginModel {
    pub username: String,
    pub password: String,
}

/// Opaque bearer token handed to the client; the backend never validates it
/// beyond presence.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct LoginResultModel {
    pub token: String,
    pub user: UserEntity,
}
