use crate::config::aws_client_config::AwsClientConfig;
use async_trait::async_trait;
use rusoto_core::credential::ChainProvider;
use rusoto_core::request::{HttpClient, TlsError};
use rusoto_core::RusotoError;
use rusoto_iam::*;

/// The slice of the IAM API the examples and their fixtures talk to.
///
/// Signatures mirror [`rusoto_iam::Iam`] one to one so the real client satisfies it by
/// delegation, while tests only have to mock the calls that are actually made.
#[async_trait]
pub trait IamApi
where
    Self: Sync + Send,
{
    async fn create_role(
        &self,
        input: CreateRoleRequest,
    ) -> Result<CreateRoleResponse, RusotoError<CreateRoleError>>;

    async fn get_role(
        &self,
        input: GetRoleRequest,
    ) -> Result<GetRoleResponse, RusotoError<GetRoleError>>;

    async fn delete_role(&self, input: DeleteRoleRequest) -> Result<(), RusotoError<DeleteRoleError>>;

    async fn list_roles(
        &self,
        input: ListRolesRequest,
    ) -> Result<ListRolesResponse, RusotoError<ListRolesError>>;

    async fn detach_role_policy(
        &self,
        input: DetachRolePolicyRequest,
    ) -> Result<(), RusotoError<DetachRolePolicyError>>;

    async fn create_user(
        &self,
        input: CreateUserRequest,
    ) -> Result<CreateUserResponse, RusotoError<CreateUserError>>;

    async fn delete_user(&self, input: DeleteUserRequest) -> Result<(), RusotoError<DeleteUserError>>;

    async fn create_access_key(
        &self,
        input: CreateAccessKeyRequest,
    ) -> Result<CreateAccessKeyResponse, RusotoError<CreateAccessKeyError>>;

    async fn delete_access_key(
        &self,
        input: DeleteAccessKeyRequest,
    ) -> Result<(), RusotoError<DeleteAccessKeyError>>;

    async fn list_access_keys(
        &self,
        input: ListAccessKeysRequest,
    ) -> Result<ListAccessKeysResponse, RusotoError<ListAccessKeysError>>;

    async fn list_server_certificates(
        &self,
        input: ListServerCertificatesRequest,
    ) -> Result<ListServerCertificatesResponse, RusotoError<ListServerCertificatesError>>;

    async fn update_server_certificate(
        &self,
        input: UpdateServerCertificateRequest,
    ) -> Result<(), RusotoError<UpdateServerCertificateError>>;

    async fn delete_policy(
        &self,
        input: DeletePolicyRequest,
    ) -> Result<(), RusotoError<DeletePolicyError>>;
}

#[async_trait]
impl IamApi for IamClient {
    async fn create_role(
        &self,
        input: CreateRoleRequest,
    ) -> Result<CreateRoleResponse, RusotoError<CreateRoleError>> {
        Iam::create_role(self, input).await
    }

    async fn get_role(
        &self,
        input: GetRoleRequest,
    ) -> Result<GetRoleResponse, RusotoError<GetRoleError>> {
        Iam::get_role(self, input).await
    }

    async fn delete_role(&self, input: DeleteRoleRequest) -> Result<(), RusotoError<DeleteRoleError>> {
        Iam::delete_role(self, input).await
    }

    async fn list_roles(
        &self,
        input: ListRolesRequest,
    ) -> Result<ListRolesResponse, RusotoError<ListRolesError>> {
        Iam::list_roles(self, input).await
    }

    async fn detach_role_policy(
        &self,
        input: DetachRolePolicyRequest,
    ) -> Result<(), RusotoError<DetachRolePolicyError>> {
        Iam::detach_role_policy(self, input).await
    }

    async fn create_user(
        &self,
        input: CreateUserRequest,
    ) -> Result<CreateUserResponse, RusotoError<CreateUserError>> {
        Iam::create_user(self, input).await
    }

    async fn delete_user(&self, input: DeleteUserRequest) -> Result<(), RusotoError<DeleteUserError>> {
        Iam::delete_user(self, input).await
    }

    async fn create_access_key(
        &self,
        input: CreateAccessKeyRequest,
    ) -> Result<CreateAccessKeyResponse, RusotoError<CreateAccessKeyError>> {
        Iam::create_access_key(self, input).await
    }

    async fn delete_access_key(
        &self,
        input: DeleteAccessKeyRequest,
    ) -> Result<(), RusotoError<DeleteAccessKeyError>> {
        Iam::delete_access_key(self, input).await
    }

    async fn list_access_keys(
        &self,
        input: ListAccessKeysRequest,
    ) -> Result<ListAccessKeysResponse, RusotoError<ListAccessKeysError>> {
        Iam::list_access_keys(self, input).await
    }

    async fn list_server_certificates(
        &self,
        input: ListServerCertificatesRequest,
    ) -> Result<ListServerCertificatesResponse, RusotoError<ListServerCertificatesError>> {
        Iam::list_server_certificates(self, input).await
    }

    async fn update_server_certificate(
        &self,
        input: UpdateServerCertificateRequest,
    ) -> Result<(), RusotoError<UpdateServerCertificateError>> {
        Iam::update_server_certificate(self, input).await
    }

    async fn delete_policy(
        &self,
        input: DeletePolicyRequest,
    ) -> Result<(), RusotoError<DeletePolicyError>> {
        Iam::delete_policy(self, input).await
    }
}

/// Builds an IAM client addressed by `config`, authenticating through the default credentials
/// chain (environment, profile, container and instance metadata).
pub fn get_iam_client(config: &AwsClientConfig) -> Result<IamClient, TlsError> {
    let request_dispatcher = HttpClient::new()?;

    Ok(IamClient::new_with(
        request_dispatcher,
        ChainProvider::new(),
        config.region(),
    ))
}
