use crate::impl_unknown_error_trait;
use async_trait::async_trait;
use model::user::User;

pub mod users_repository_impl;

#[cfg(feature = "test_mocks")]
use mockall::mock;

#[derive(Debug, thiserror::Error)]
pub enum UsersRepositoryError {
    #[error("{0:#}")]
    Unknown(anyhow::Error),
    #[error("{0}")]
    UserNotFound(String),
    #[error("{0}")]
    UserAlreadyExists(String),
    #[error("{0}")]
    DeleteConflict(String),
}

impl_unknown_error_trait!(UsersRepositoryError);

#[async_trait]
pub trait UsersRepository
where
    Self: Sync + Send,
{
    async fn create_user(&self, user_name: String) -> Result<User, UsersRepositoryError>;

    /// Fails with `DeleteConflict` while the user still owns access keys or attached policies.
    async fn delete_user(&self, user_name: String) -> Result<(), UsersRepositoryError>;
}

#[cfg(feature = "test_mocks")]
mock! {
    pub UsersRepository {}
    #[async_trait]
    impl UsersRepository for UsersRepository {
        async fn create_user(&self, user_name: String) -> Result<User, UsersRepositoryError>;

        async fn delete_user(&self, user_name: String) -> Result<(), UsersRepositoryError>;
    }
}
