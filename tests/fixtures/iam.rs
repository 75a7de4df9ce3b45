use std::sync::Arc;

use common::aws_clients::iam::get_iam_client;
use common::config::aws_client_config::AwsClientConfig;
use common::config::ConfigLoader;
use iam_examples::test_fixture::{FixtureRepositories, IamTestFixture, PRECONDITION_ERROR};
use rstest::fixture;
use rusoto_iam::IamClient;

pub struct IamFixture {
    pub iam_client: IamClient,
}

// Not `#[once]`: the client's connection pool must not outlive the runtime of the test that
// opened it.
#[fixture]
pub fn iam_fixture() -> IamFixture {
    let config = ConfigLoader::load_test::<AwsClientConfig>().expect(PRECONDITION_ERROR);

    IamFixture {
        iam_client: get_iam_client(&config).expect(PRECONDITION_ERROR),
    }
}

pub async fn provisioned(iam_fixture: IamFixture) -> Arc<IamTestFixture> {
    let repositories = FixtureRepositories::from_client(iam_fixture.iam_client);

    Arc::new(
        IamTestFixture::set_up(repositories)
            .await
            .expect(PRECONDITION_ERROR),
    )
}
