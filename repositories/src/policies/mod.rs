use crate::impl_unknown_error_trait;
use async_trait::async_trait;

pub mod policies_repository_impl;

#[cfg(feature = "test_mocks")]
use mockall::mock;

#[derive(Debug, thiserror::Error)]
pub enum PoliciesRepositoryError {
    #[error("{0:#}")]
    Unknown(anyhow::Error),
    #[error("{0}")]
    PolicyNotFound(String),
    #[error("{0}")]
    DeleteConflict(String),
}

impl_unknown_error_trait!(PoliciesRepositoryError);

#[async_trait]
pub trait PoliciesRepository
where
    Self: Sync + Send,
{
    /// Deletes a customer managed policy. It has to be detached from every principal first.
    async fn delete_policy(&self, policy_arn: String) -> Result<(), PoliciesRepositoryError>;
}

#[cfg(feature = "test_mocks")]
mock! {
    pub PoliciesRepository {}
    #[async_trait]
    impl PoliciesRepository for PoliciesRepository {
        async fn delete_policy(&self, policy_arn: String) -> Result<(), PoliciesRepositoryError>;
    }
}
