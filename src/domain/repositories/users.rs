use anyhow::Result;
use async_trait::async_trait;
use mockall::automock;

use crate::domain::{entities::users::UserEntity, value_objects::users::InsertUserModel};

/// Lookup misses are absence, never an error.
#[async_trait]
#[automock]
pub trait UserRepository {
    async fn find_by_id(&self, user_id: i32) -> Result<Option<UserEntity>>;
    async fn find_by_username(&self, username: &str) -> Result<Option<UserEntity>>;
    async fn create(&self, insert_user_model: InsertUserModel) -> Result<UserEntity>;
}
