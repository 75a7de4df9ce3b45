use iam_examples::samples::create_role::create_iam_role;
use iam_examples::test_fixture::uuid_name;
use repositories::roles::{RolesRepository, RolesRepositoryError};
use rstest::rstest;
use std::collections::HashSet;

use crate::fixtures::iam::{iam_fixture, provisioned, IamFixture};

#[rstest]
#[ignore = "requires AWS credentials or LocalStack"]
#[tokio::test(flavor = "multi_thread")]
async fn deleted_roles_cannot_be_fetched(iam_fixture: IamFixture) {
    let fixture = provisioned(iam_fixture).await;

    fixture
        .clone()
        .scoped(|fixture| async move {
            let role_name = uuid_name("role");
            fixture.track_role(&role_name).await;

            assert!(
                create_iam_role(
                    fixture.roles(),
                    &role_name,
                    fixture.get_assume_role_policy_json()
                )
                .await
            );
            assert!(fixture.delete_role(&role_name).await);

            let fetched = fixture.roles().get_role(role_name).await;
            assert!(matches!(fetched, Err(RolesRepositoryError::RoleNotFound(_))));
        })
        .await
        .unwrap();
}

#[rstest]
#[ignore = "requires AWS credentials or LocalStack"]
#[tokio::test(flavor = "multi_thread")]
async fn repeated_create_and_delete_leaves_no_roles_behind(iam_fixture: IamFixture) {
    let fixture = provisioned(iam_fixture).await;

    fixture
        .clone()
        .scoped(|fixture| async move {
            let prefix = uuid_name("lifecycle");
            assert!(role_names_with_prefix(fixture.roles(), &prefix).await.is_empty());

            for suffix in ["a", "b"] {
                let role_name = format!("{prefix}-{suffix}");
                fixture.track_role(&role_name).await;
                assert!(
                    create_iam_role(
                        fixture.roles(),
                        &role_name,
                        fixture.get_assume_role_policy_json()
                    )
                    .await
                );
                assert_eq!(
                    HashSet::from([role_name.clone()]),
                    role_names_with_prefix(fixture.roles(), &prefix).await
                );

                assert!(fixture.delete_role(&role_name).await);
                assert!(role_names_with_prefix(fixture.roles(), &prefix).await.is_empty());
            }
        })
        .await
        .unwrap();
}

async fn role_names_with_prefix(roles: &dyn RolesRepository, prefix: &str) -> HashSet<String> {
    roles
        .list_roles(None)
        .await
        .unwrap()
        .into_iter()
        .map(|role| role.role_name)
        .filter(|role_name| role_name.starts_with(prefix))
        .collect()
}
