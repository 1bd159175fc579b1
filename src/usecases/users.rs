use anyhow::Result;
use std::sync::Arc;
use thiserror::Error;
use tracing::{info, warn};
use uuid::Uuid;

use crate::domain::{
    entities::users::UserEntity,
    repositories::users::UserRepository,
    value_objects::users::{InsertUserModel, LoginModel, LoginResultModel},
};

#[derive(Debug, Error)]
pub enum UserError {
    #[error("Username already exists")]
    UsernameTaken,

    #[error("Invalid username or password")]
    InvalidCredentials,

    #[error(transparent)]
    Internal(#[from] anyhow::Error),
}

pub struct UserUseCase<T>
where
    T: UserRepository + Send + Sync + 'static,
{
    user_repository: Arc<T>,
}

impl<T> UserUseCase<T>
where
    T: UserRepository + Send + Sync + 'static,
{
    pub fn new(user_repository: Arc<T>) -> Self {
        Self { user_repository }
    }

    /// Username uniqueness is enforced here, not in the repository: the
    /// storage contract stays check-free and the decision is testable on
    /// its own.
    pub async fn register(
        &self,
        insert_user_model: InsertUserModel,
    ) -> Result<UserEntity, UserError> {
        if self
            .user_repository
            .find_by_username(&insert_user_model.username)
            .await?
            .is_some()
        {
            warn!(
                username = insert_user_model.username,
                "users: registration rejected, username taken"
            );
            return Err(UserError::UsernameTaken);
        }

        let user = self.user_repository.create(insert_user_model).await?;
        info!(user_id = user.id, "users: registered");

        Ok(user)
    }

    pub async fn login(&self, login_model: LoginModel) -> Result<LoginResultModel, UserError> {
        let user = self
            .user_repository
            .find_by_username(&login_model.username)
            .await?
            .ok_or(UserError::InvalidCredentials)?;

        if user.password != login_model.password {
            warn!(username = login_model.username, "users: login rejected");
            return Err(UserError::InvalidCredentials);
        }

        // Opaque token; nothing server-side validates it later.
        let token = Uuid::new_v4().to_string();
        info!(user_id = user.id, "users: logged in");

        Ok(LoginResultModel { token, user })
    }
}
