use crate::error::UnknownError;
use crate::roles::{RolesRepository, RolesRepositoryError};
use anyhow::anyhow;
use async_trait::async_trait;
use common::aws_clients::iam::IamApi;
use model::role::Role;
use model::timestamps::parse_iam_timestamp;
use rusoto_core::RusotoError;
use rusoto_iam::{
    CreateRoleError, CreateRoleRequest, DeleteRoleError, DeleteRoleRequest, DetachRolePolicyError,
    DetachRolePolicyRequest, GetRoleError, GetRoleRequest, ListRolesRequest,
};

pub struct RolesRepositoryImpl<T: IamApi> {
    iam_client: T,
}

impl<T: IamApi> RolesRepositoryImpl<T> {
    pub fn new(iam_client: T) -> Self {
        Self { iam_client }
    }
}

fn into_role(role: rusoto_iam::Role) -> Role {
    Role {
        created_at: parse_iam_timestamp(&role.create_date),
        role_name: role.role_name,
        role_id: role.role_id,
        arn: role.arn,
        path: role.path,
        description: role.description,
        assume_role_policy_document: role.assume_role_policy_document,
    }
}

#[async_trait]
impl<T: IamApi> RolesRepository for RolesRepositoryImpl<T> {
    async fn create_role(
        &self,
        role_name: String,
        assume_role_policy_document: String,
    ) -> Result<Role, RolesRepositoryError> {
        let response = self
            .iam_client
            .create_role(CreateRoleRequest {
                role_name: role_name.clone(),
                assume_role_policy_document,
                ..CreateRoleRequest::default()
            })
            .await
            .map_err(|e| match e {
                RusotoError::Service(CreateRoleError::EntityAlreadyExists(message)) => {
                    RolesRepositoryError::RoleAlreadyExists(format!(
                        "Role {role_name} already exists: {message}"
                    ))
                }
                e => RolesRepositoryError::Unknown(
                    anyhow!(e).context(format!("Error creating role {role_name}")),
                ),
            })?;

        tracing::info!(role_name = ?role_name, arn = ?response.role.arn, "role created");

        Ok(into_role(response.role))
    }

    async fn get_role(&self, role_name: String) -> Result<Role, RolesRepositoryError> {
        let response = self
            .iam_client
            .get_role(GetRoleRequest {
                role_name: role_name.clone(),
            })
            .await
            .map_err(|e| match e {
                RusotoError::Service(GetRoleError::NoSuchEntity(_)) => {
                    RolesRepositoryError::RoleNotFound(format!("Role {role_name} not found"))
                }
                e => RolesRepositoryError::Unknown(
                    anyhow!(e).context(format!("Error getting role {role_name}")),
                ),
            })?;

        Ok(into_role(response.role))
    }

    async fn delete_role(&self, role_name: String) -> Result<(), RolesRepositoryError> {
        self.iam_client
            .delete_role(DeleteRoleRequest {
                role_name: role_name.clone(),
            })
            .await
            .map_err(|e| match e {
                RusotoError::Service(DeleteRoleError::NoSuchEntity(_)) => {
                    RolesRepositoryError::RoleNotFound(format!("Role {role_name} not found"))
                }
                RusotoError::Service(DeleteRoleError::DeleteConflict(message)) => {
                    RolesRepositoryError::DeleteConflict(format!(
                        "Role {role_name} is still in use: {message}"
                    ))
                }
                e => RolesRepositoryError::Unknown(
                    anyhow!(e).context(format!("Error deleting role {role_name}")),
                ),
            })?;

        tracing::info!(role_name = ?role_name, "role deleted");

        Ok(())
    }

    async fn list_roles(&self, path_prefix: Option<String>) -> Result<Vec<Role>, RolesRepositoryError> {
        let mut roles = Vec::new();
        let mut marker = None;

        loop {
            let response = self
                .iam_client
                .list_roles(ListRolesRequest {
                    marker: marker.take(),
                    path_prefix: path_prefix.clone(),
                    ..ListRolesRequest::default()
                })
                .await
                .map_err(|e| RolesRepositoryError::unknown(e, Some("Error listing roles")))?;

            roles.extend(response.roles.into_iter().map(into_role));

            match (response.is_truncated, response.marker) {
                (Some(true), Some(next)) => marker = Some(next),
                _ => break,
            }
        }

        Ok(roles)
    }

    async fn detach_role_policy(
        &self,
        role_name: String,
        policy_arn: String,
    ) -> Result<(), RolesRepositoryError> {
        self.iam_client
            .detach_role_policy(DetachRolePolicyRequest {
                role_name: role_name.clone(),
                policy_arn: policy_arn.clone(),
            })
            .await
            .map_err(|e| match e {
                RusotoError::Service(DetachRolePolicyError::NoSuchEntity(message)) => {
                    RolesRepositoryError::PolicyNotAttached(format!(
                        "Policy {policy_arn} is not attached to role {role_name}: {message}"
                    ))
                }
                e => RolesRepositoryError::Unknown(anyhow!(e).context(format!(
                    "Error detaching policy {policy_arn} from role {role_name}"
                ))),
            })?;

        tracing::info!(role_name = ?role_name, policy_arn = ?policy_arn, "policy detached");

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use crate::roles::roles_repository_impl::RolesRepositoryImpl;
    use crate::roles::{RolesRepository, RolesRepositoryError};
    use common::test_tools::constants::{
        role_arn_for_mock_requests, CREATE_DATE_FOR_MOCK_REQUESTS, POLICY_ARN_FOR_MOCK_REQUESTS,
        ROLE_ID_FOR_MOCK_REQUESTS, ROLE_NAME_FOR_MOCK_REQUESTS,
    };
    use common::test_tools::mocks::iam_client::MockIamClient;
    use mockall::predicate::eq;
    use mockall::Sequence;
    use rstest::{fixture, rstest};
    use rusoto_core::RusotoError;
    use rusoto_iam::{
        CreateRoleError, CreateRoleRequest, CreateRoleResponse, DeleteRoleError,
        DeleteRoleRequest, DetachRolePolicyError, DetachRolePolicyRequest, GetRoleError,
        GetRoleRequest, GetRoleResponse, ListRolesError, ListRolesRequest, ListRolesResponse,
    };

    const POLICY_DOCUMENT: &str = r#"{"Version":"2012-10-17","Statement":[]}"#;

    struct TestFixture {
        pub iam_client: MockIamClient,
    }

    #[fixture]
    fn fixture() -> TestFixture {
        TestFixture {
            iam_client: MockIamClient::new(),
        }
    }

    fn rusoto_role(role_name: &str) -> rusoto_iam::Role {
        rusoto_iam::Role {
            arn: role_arn_for_mock_requests(role_name),
            create_date: CREATE_DATE_FOR_MOCK_REQUESTS.to_owned(),
            path: "/".to_owned(),
            role_id: ROLE_ID_FOR_MOCK_REQUESTS.to_owned(),
            role_name: role_name.to_owned(),
            ..rusoto_iam::Role::default()
        }
    }

    #[rstest]
    #[tokio::test]
    async fn create_role(mut fixture: TestFixture) {
        fixture
            .iam_client
            .expect_create_role()
            .with(eq(CreateRoleRequest {
                role_name: ROLE_NAME_FOR_MOCK_REQUESTS.to_owned(),
                assume_role_policy_document: POLICY_DOCUMENT.to_owned(),
                ..CreateRoleRequest::default()
            }))
            .once()
            .returning(|_| {
                Ok(CreateRoleResponse {
                    role: rusoto_role(ROLE_NAME_FOR_MOCK_REQUESTS),
                })
            });

        let repo = RolesRepositoryImpl::new(fixture.iam_client);
        let role = repo
            .create_role(
                ROLE_NAME_FOR_MOCK_REQUESTS.to_owned(),
                POLICY_DOCUMENT.to_owned(),
            )
            .await
            .unwrap();

        assert_eq!(ROLE_NAME_FOR_MOCK_REQUESTS, role.role_name);
        assert_eq!(ROLE_ID_FOR_MOCK_REQUESTS, role.role_id);
        assert_eq!(role_arn_for_mock_requests(ROLE_NAME_FOR_MOCK_REQUESTS), role.arn);
        assert!(role.created_at.is_some());
    }

    #[rstest]
    #[tokio::test]
    async fn create_role_already_exists(mut fixture: TestFixture) {
        fixture
            .iam_client
            .expect_create_role()
            .once()
            .returning(|_| {
                Err(RusotoError::Service(CreateRoleError::EntityAlreadyExists(
                    "Role with name role-4f0e2a8b already exists.".to_owned(),
                )))
            });

        let repo = RolesRepositoryImpl::new(fixture.iam_client);
        let error = repo
            .create_role(
                ROLE_NAME_FOR_MOCK_REQUESTS.to_owned(),
                POLICY_DOCUMENT.to_owned(),
            )
            .await
            .unwrap_err();

        assert!(matches!(error, RolesRepositoryError::RoleAlreadyExists(_)));
        assert!(error.to_string().contains(ROLE_NAME_FOR_MOCK_REQUESTS));
    }

    #[rstest]
    #[tokio::test]
    async fn create_role_malformed_policy(mut fixture: TestFixture) {
        fixture
            .iam_client
            .expect_create_role()
            .once()
            .returning(|_| {
                Err(RusotoError::Service(CreateRoleError::MalformedPolicyDocument(
                    "Syntax errors in policy.".to_owned(),
                )))
            });

        let repo = RolesRepositoryImpl::new(fixture.iam_client);
        let error = repo
            .create_role(ROLE_NAME_FOR_MOCK_REQUESTS.to_owned(), "{".to_owned())
            .await
            .unwrap_err();

        assert!(matches!(error, RolesRepositoryError::Unknown(_)));
        assert!(error.to_string().contains("Error creating role"));
        assert!(error.to_string().contains("Syntax errors in policy."));
    }

    #[rstest]
    #[tokio::test]
    async fn get_role_not_found(mut fixture: TestFixture) {
        fixture
            .iam_client
            .expect_get_role()
            .with(eq(GetRoleRequest {
                role_name: ROLE_NAME_FOR_MOCK_REQUESTS.to_owned(),
            }))
            .once()
            .returning(|_| {
                Err(RusotoError::Service(GetRoleError::NoSuchEntity(
                    "The role cannot be found.".to_owned(),
                )))
            });

        let repo = RolesRepositoryImpl::new(fixture.iam_client);
        let error = repo
            .get_role(ROLE_NAME_FOR_MOCK_REQUESTS.to_owned())
            .await
            .unwrap_err();

        assert!(matches!(error, RolesRepositoryError::RoleNotFound(_)));
    }

    #[rstest]
    #[tokio::test]
    async fn get_role(mut fixture: TestFixture) {
        fixture
            .iam_client
            .expect_get_role()
            .once()
            .returning(|input| {
                Ok(GetRoleResponse {
                    role: rusoto_role(&input.role_name),
                })
            });

        let repo = RolesRepositoryImpl::new(fixture.iam_client);
        let role = repo
            .get_role(ROLE_NAME_FOR_MOCK_REQUESTS.to_owned())
            .await
            .unwrap();

        assert_eq!(ROLE_NAME_FOR_MOCK_REQUESTS, role.role_name);
    }

    #[rstest]
    #[tokio::test]
    async fn delete_role(mut fixture: TestFixture) {
        fixture
            .iam_client
            .expect_delete_role()
            .with(eq(DeleteRoleRequest {
                role_name: ROLE_NAME_FOR_MOCK_REQUESTS.to_owned(),
            }))
            .once()
            .returning(|_| Ok(()));

        let repo = RolesRepositoryImpl::new(fixture.iam_client);
        repo.delete_role(ROLE_NAME_FOR_MOCK_REQUESTS.to_owned())
            .await
            .unwrap();
    }

    #[rstest]
    #[tokio::test]
    async fn delete_role_errors_are_classified(mut fixture: TestFixture) {
        let mut sequence = Sequence::new();
        fixture
            .iam_client
            .expect_delete_role()
            .once()
            .in_sequence(&mut sequence)
            .returning(|_| {
                Err(RusotoError::Service(DeleteRoleError::NoSuchEntity(
                    "The role cannot be found.".to_owned(),
                )))
            });
        fixture
            .iam_client
            .expect_delete_role()
            .once()
            .in_sequence(&mut sequence)
            .returning(|_| {
                Err(RusotoError::Service(DeleteRoleError::DeleteConflict(
                    "Cannot delete entity, must detach all policies first.".to_owned(),
                )))
            });
        fixture
            .iam_client
            .expect_delete_role()
            .once()
            .in_sequence(&mut sequence)
            .returning(|_| Err(RusotoError::Validation("timeout!".to_owned())));

        let repo = RolesRepositoryImpl::new(fixture.iam_client);
        let not_found = repo.delete_role("a".to_owned()).await.unwrap_err();
        let conflict = repo.delete_role("b".to_owned()).await.unwrap_err();
        let unknown = repo.delete_role("c".to_owned()).await.unwrap_err();

        assert!(matches!(not_found, RolesRepositoryError::RoleNotFound(_)));
        assert!(matches!(conflict, RolesRepositoryError::DeleteConflict(_)));
        assert!(matches!(unknown, RolesRepositoryError::Unknown(_)));
        assert!(unknown.to_string().contains("timeout!"));
    }

    #[rstest]
    #[tokio::test]
    async fn list_roles_follows_pagination(mut fixture: TestFixture) {
        let mut sequence = Sequence::new();
        fixture
            .iam_client
            .expect_list_roles()
            .with(eq(ListRolesRequest::default()))
            .once()
            .in_sequence(&mut sequence)
            .returning(|_| {
                Ok(ListRolesResponse {
                    is_truncated: Some(true),
                    marker: Some("page-2".to_owned()),
                    roles: vec![rusoto_role("role-a"), rusoto_role("role-b")],
                    ..ListRolesResponse::default()
                })
            });
        fixture
            .iam_client
            .expect_list_roles()
            .with(eq(ListRolesRequest {
                marker: Some("page-2".to_owned()),
                ..ListRolesRequest::default()
            }))
            .once()
            .in_sequence(&mut sequence)
            .returning(|_| {
                Ok(ListRolesResponse {
                    is_truncated: Some(false),
                    marker: None,
                    roles: vec![rusoto_role("role-c")],
                    ..ListRolesResponse::default()
                })
            });

        let repo = RolesRepositoryImpl::new(fixture.iam_client);
        let names: Vec<String> = repo
            .list_roles(None)
            .await
            .unwrap()
            .into_iter()
            .map(|role| role.role_name)
            .collect();

        assert_eq!(vec!["role-a", "role-b", "role-c"], names);
    }

    #[rstest]
    #[tokio::test]
    async fn list_roles_error(mut fixture: TestFixture) {
        fixture
            .iam_client
            .expect_list_roles()
            .once()
            .returning(|_| {
                Err(RusotoError::Service(ListRolesError::ServiceFailure(
                    "Internal failure".to_owned(),
                )))
            });

        let repo = RolesRepositoryImpl::new(fixture.iam_client);
        let error = repo.list_roles(None).await.unwrap_err();

        assert!(matches!(error, RolesRepositoryError::Unknown(_)));
        assert!(error.to_string().contains("Error listing roles"));
    }

    #[rstest]
    #[tokio::test]
    async fn detach_role_policy(mut fixture: TestFixture) {
        fixture
            .iam_client
            .expect_detach_role_policy()
            .with(eq(DetachRolePolicyRequest {
                role_name: ROLE_NAME_FOR_MOCK_REQUESTS.to_owned(),
                policy_arn: POLICY_ARN_FOR_MOCK_REQUESTS.to_owned(),
            }))
            .once()
            .returning(|_| Ok(()));

        let repo = RolesRepositoryImpl::new(fixture.iam_client);
        repo.detach_role_policy(
            ROLE_NAME_FOR_MOCK_REQUESTS.to_owned(),
            POLICY_ARN_FOR_MOCK_REQUESTS.to_owned(),
        )
        .await
        .unwrap();
    }

    #[rstest]
    #[tokio::test]
    async fn detach_role_policy_not_attached(mut fixture: TestFixture) {
        fixture
            .iam_client
            .expect_detach_role_policy()
            .once()
            .returning(|_| {
                Err(RusotoError::Service(DetachRolePolicyError::NoSuchEntity(
                    "Policy is not attached to role.".to_owned(),
                )))
            });

        let repo = RolesRepositoryImpl::new(fixture.iam_client);
        let error = repo
            .detach_role_policy(
                ROLE_NAME_FOR_MOCK_REQUESTS.to_owned(),
                POLICY_ARN_FOR_MOCK_REQUESTS.to_owned(),
            )
            .await
            .unwrap_err();

        assert!(matches!(error, RolesRepositoryError::PolicyNotAttached(_)));
        assert!(error.to_string().contains(POLICY_ARN_FOR_MOCK_REQUESTS));
    }
}
