use std::sync::Arc;

use async_trait::async_trait;
use clap::Parser;
use iam_examples::sample_main;
use iam_examples::sample_structure::sample_trait::Sample;
use iam_examples::samples::list_server_certificates::list_server_certificates;
use repositories::server_certificates::server_certificates_repository_impl::ServerCertificatesRepositoryImpl;
use repositories::server_certificates::ServerCertificatesRepository;
use rusoto_iam::IamClient;
use validator::Validate;

/// Lists the server certificates stored in IAM.
#[derive(Parser, Validate, Debug)]
#[command(version, about)]
pub struct Args {}

pub struct Persisted {
    pub server_certificates_repository: Arc<dyn ServerCertificatesRepository>,
}

pub struct ListServerCertificates;

#[async_trait]
impl Sample for ListServerCertificates {
    type Args = Args;
    type PersistedMemory = Persisted;

    fn bootstrap(iam_client: IamClient) -> Self::PersistedMemory {
        Persisted {
            server_certificates_repository: Arc::new(ServerCertificatesRepositoryImpl::new(
                iam_client,
            )),
        }
    }

    async fn run(_args: Self::Args, persisted: &Self::PersistedMemory) -> bool {
        list_server_certificates(persisted.server_certificates_repository.as_ref())
            .await
            .is_some()
    }
}

sample_main!(ListServerCertificates);
