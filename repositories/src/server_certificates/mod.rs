use crate::impl_unknown_error_trait;
use async_trait::async_trait;
use model::server_certificate::ServerCertificate;

pub mod server_certificates_repository_impl;

#[cfg(feature = "test_mocks")]
use mockall::mock;

#[derive(Debug, thiserror::Error)]
pub enum ServerCertificatesRepositoryError {
    #[error("{0:#}")]
    Unknown(anyhow::Error),
    #[error("{0}")]
    CertificateNotFound(String),
    #[error("{0}")]
    CertificateAlreadyExists(String),
}

impl_unknown_error_trait!(ServerCertificatesRepositoryError);

#[async_trait]
pub trait ServerCertificatesRepository
where
    Self: Sync + Send,
{
    async fn list_server_certificates(
        &self,
        path_prefix: Option<String>,
    ) -> Result<Vec<ServerCertificate>, ServerCertificatesRepositoryError>;

    /// Renames a certificate. IAM refuses when another certificate already uses `new_name`.
    async fn update_server_certificate(
        &self,
        current_name: String,
        new_name: String,
    ) -> Result<(), ServerCertificatesRepositoryError>;
}

#[cfg(feature = "test_mocks")]
mock! {
    pub ServerCertificatesRepository {}
    #[async_trait]
    impl ServerCertificatesRepository for ServerCertificatesRepository {
        async fn list_server_certificates(
            &self,
            path_prefix: Option<String>,
        ) -> Result<Vec<ServerCertificate>, ServerCertificatesRepositoryError>;

        async fn update_server_certificate(
            &self,
            current_name: String,
            new_name: String,
        ) -> Result<(), ServerCertificatesRepositoryError>;
    }
}
