use crate::impl_unknown_error_trait;
use async_trait::async_trait;
use model::access_key::{AccessKey, AccessKeyMetadata};

pub mod access_keys_repository_impl;

#[cfg(feature = "test_mocks")]
use mockall::mock;

#[derive(Debug, thiserror::Error)]
pub enum AccessKeysRepositoryError {
    #[error("{0:#}")]
    Unknown(anyhow::Error),
    #[error("{0}")]
    AccessKeyNotFound(String),
    #[error("{0}")]
    LimitExceeded(String),
}

impl_unknown_error_trait!(AccessKeysRepositoryError);

#[async_trait]
pub trait AccessKeysRepository
where
    Self: Sync + Send,
{
    async fn create_access_key(&self, user_name: String) -> Result<AccessKey, AccessKeysRepositoryError>;

    async fn delete_access_key(
        &self,
        user_name: String,
        access_key_id: String,
    ) -> Result<(), AccessKeysRepositoryError>;

    async fn list_access_keys(
        &self,
        user_name: String,
    ) -> Result<Vec<AccessKeyMetadata>, AccessKeysRepositoryError>;
}

#[cfg(feature = "test_mocks")]
mock! {
    pub AccessKeysRepository {}
    #[async_trait]
    impl AccessKeysRepository for AccessKeysRepository {
        async fn create_access_key(&self, user_name: String) -> Result<AccessKey, AccessKeysRepositoryError>;

        async fn delete_access_key(
            &self,
            user_name: String,
            access_key_id: String,
        ) -> Result<(), AccessKeysRepositoryError>;

        async fn list_access_keys(
            &self,
            user_name: String,
        ) -> Result<Vec<AccessKeyMetadata>, AccessKeysRepositoryError>;
    }
}
