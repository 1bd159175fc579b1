use anyhow::Result;
use async_trait::async_trait;
use std::sync::Arc;

use crate::domain::{
    entities::users::UserEntity, repositories::users::UserRepository,
    value_objects::users::InsertUserModel,
};
use crate::infrastructure::memory::memory_connection::{MemStoreSquad, lock_read, lock_write};

pub struct UserMemory {
    store: Arc<MemStoreSquad>,
}

impl UserMemory {
    pub fn new(store: Arc<MemStoreSquad>) -> Self {
        Self { store }
    }
}

#[async_trait]
impl UserRepository for UserMemory {
    async fn find_by_id(&self, user_id: i32) -> Result<Option<UserEntity>> {
        let users = lock_read(&self.store.users)?;

        Ok(users.iter().find(|user| user.id == user_id).cloned())
    }

    async fn find_by_username(&self, username: &str) -> Result<Option<UserEntity>> {
        let users = lock_read(&self.store.users)?;

        Ok(users.iter().find(|user| user.username == username).cloned())
    }

    async fn create(&self, insert_user_model: InsertUserModel) -> Result<UserEntity> {
        let mut users = lock_write(&self.store.users)?;

        let user = UserEntity {
            id: self.store.next_id(),
            username: insert_user_model.username,
            password: insert_user_model.password,
        };
        users.push(user.clone());

        Ok(user)
    }
}
