use iam_examples::samples::create_role::create_iam_role;
use iam_examples::test_fixture::uuid_name;
use model::policy::{PolicyDocument, Principal};
use repositories::roles::RolesRepository;
use rstest::rstest;

use crate::fixtures::iam::{iam_fixture, provisioned, IamFixture};

#[rstest]
#[ignore = "requires AWS credentials or LocalStack"]
#[tokio::test(flavor = "multi_thread")]
async fn create_role_trusting_the_fixture_user(iam_fixture: IamFixture) {
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

            let role = fixture.roles().get_role(role_name.clone()).await.unwrap();
            assert_eq!(role_name, role.role_name);

            let policy = PolicyDocument::from_json(fixture.get_assume_role_policy_json()).unwrap();
            assert!(policy.allows_assume_role_by(&Principal::Aws(fixture.user().arn.clone())));

            assert!(fixture.delete_role(&role_name).await);
        })
        .await
        .unwrap();
}

#[rstest]
#[ignore = "requires AWS credentials or LocalStack"]
#[tokio::test(flavor = "multi_thread")]
async fn create_role_twice_fails_the_second_time(iam_fixture: IamFixture) {
    let fixture = provisioned(iam_fixture).await;

    fixture
        .clone()
        .scoped(|fixture| async move {
            let role_name = uuid_name("role");
            let policy = fixture.get_assume_role_policy_json().to_owned();
            fixture.track_role(&role_name).await;

            assert!(create_iam_role(fixture.roles(), &role_name, &policy).await);
            assert!(!create_iam_role(fixture.roles(), &role_name, &policy).await);
        })
        .await
        .unwrap();
}
