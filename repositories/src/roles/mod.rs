use crate::impl_unknown_error_trait;
use async_trait::async_trait;
use model::role::Role;

pub mod roles_repository_impl;

#[cfg(feature = "test_mocks")]
use mockall::mock;

#[derive(Debug, thiserror::Error)]
pub enum RolesRepositoryError {
    #[error("{0:#}")]
    Unknown(anyhow::Error),
    #[error("{0}")]
    RoleNotFound(String),
    #[error("{0}")]
    RoleAlreadyExists(String),
    #[error("{0}")]
    DeleteConflict(String),
    #[error("{0}")]
    PolicyNotAttached(String),
}

impl_unknown_error_trait!(RolesRepositoryError);

#[async_trait]
pub trait RolesRepository
where
    Self: Sync + Send,
{
    async fn create_role(
        &self,
        role_name: String,
        assume_role_policy_document: String,
    ) -> Result<Role, RolesRepositoryError>;

    async fn get_role(&self, role_name: String) -> Result<Role, RolesRepositoryError>;

    async fn delete_role(&self, role_name: String) -> Result<(), RolesRepositoryError>;

    /// Every role in the account, following pagination to the end.
    async fn list_roles(&self, path_prefix: Option<String>) -> Result<Vec<Role>, RolesRepositoryError>;

    /// Fails with `PolicyNotAttached` when IAM reports no such attachment, which covers a
    /// missing role, a missing policy and a policy attached elsewhere alike.
    async fn detach_role_policy(
        &self,
        role_name: String,
        policy_arn: String,
    ) -> Result<(), RolesRepositoryError>;
}

#[cfg(feature = "test_mocks")]
mock! {
    pub RolesRepository {}
    #[async_trait]
    impl RolesRepository for RolesRepository {
        async fn create_role(
            &self,
            role_name: String,
            assume_role_policy_document: String,
        ) -> Result<Role, RolesRepositoryError>;

        async fn get_role(&self, role_name: String) -> Result<Role, RolesRepositoryError>;

        async fn delete_role(&self, role_name: String) -> Result<(), RolesRepositoryError>;

        async fn list_roles(&self, path_prefix: Option<String>) -> Result<Vec<Role>, RolesRepositoryError>;

        async fn detach_role_policy(
            &self,
            role_name: String,
            policy_arn: String,
        ) -> Result<(), RolesRepositoryError>;
    }
}
