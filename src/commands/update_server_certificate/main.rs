use std::sync::Arc;

use async_trait::async_trait;
use clap::Parser;
use iam_examples::sample_main;
use iam_examples::sample_structure::sample_trait::Sample;
use iam_examples::samples::update_server_certificate::update_server_certificate;
use iam_examples::validations::iam_names::validate_server_certificate_name;
use repositories::server_certificates::server_certificates_repository_impl::ServerCertificatesRepositoryImpl;
use repositories::server_certificates::ServerCertificatesRepository;
use rusoto_iam::IamClient;
use validator::Validate;

/// Renames a server certificate.
#[derive(Parser, Validate, Debug)]
#[command(version, about)]
pub struct Args {
    #[arg(long)]
    #[validate(custom = "validate_server_certificate_name")]
    pub current_name: String,

    #[arg(long)]
    #[validate(custom = "validate_server_certificate_name")]
    pub new_name: String,
}

pub struct Persisted {
    pub server_certificates_repository: Arc<dyn ServerCertificatesRepository>,
}

pub struct UpdateServerCertificate;

#[async_trait]
impl Sample for UpdateServerCertificate {
    type Args = Args;
    type PersistedMemory = Persisted;

    fn bootstrap(iam_client: IamClient) -> Self::PersistedMemory {
        Persisted {
            server_certificates_repository: Arc::new(ServerCertificatesRepositoryImpl::new(
                iam_client,
            )),
        }
    }

    async fn run(args: Self::Args, persisted: &Self::PersistedMemory) -> bool {
        update_server_certificate(
            persisted.server_certificates_repository.as_ref(),
            &args.current_name,
            &args.new_name,
        )
        .await
    }
}

sample_main!(UpdateServerCertificate);
