use crate::aws_clients::iam::IamApi;
use async_trait::async_trait;
use mockall::mock;
use rusoto_core::RusotoError;
use rusoto_iam::*;

mock! {
    pub IamClient {}
    #[async_trait]
    impl IamApi for IamClient {
        async fn create_role(
            &self,
            input: CreateRoleRequest,
        ) -> Result<CreateRoleResponse, RusotoError<CreateRoleError>>;

        async fn get_role(
            &self,
            input: GetRoleRequest,
        ) -> Result<GetRoleResponse, RusotoError<GetRoleError>>;

        async fn delete_role(
            &self,
            input: DeleteRoleRequest,
        ) -> Result<(), RusotoError<DeleteRoleError>>;

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

        async fn delete_user(
            &self,
            input: DeleteUserRequest,
        ) -> Result<(), RusotoError<DeleteUserError>>;

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
}
