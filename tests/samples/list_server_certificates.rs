use iam_examples::samples::list_server_certificates::list_server_certificates;
use repositories::server_certificates::server_certificates_repository_impl::ServerCertificatesRepositoryImpl;
use rstest::rstest;

use crate::fixtures::iam::{iam_fixture, IamFixture};

#[rstest]
#[ignore = "requires AWS credentials or LocalStack"]
#[tokio::test(flavor = "multi_thread")]
async fn list_server_certificates_succeeds(iam_fixture: IamFixture) {
    let certificates = ServerCertificatesRepositoryImpl::new(iam_fixture.iam_client);

    let listed = list_server_certificates(&certificates).await;

    let listed = listed.unwrap();
    assert!(listed.iter().all(|certificate| !certificate.arn.is_empty()));
}
