use crate::error::UnknownError;
use crate::server_certificates::{ServerCertificatesRepository, ServerCertificatesRepositoryError};
use anyhow::anyhow;
use async_trait::async_trait;
use common::aws_clients::iam::IamApi;
use model::server_certificate::ServerCertificate;
use model::timestamps::parse_iam_timestamp;
use rusoto_core::RusotoError;
use rusoto_iam::{
    ListServerCertificatesRequest, ServerCertificateMetadata, UpdateServerCertificateError,
    UpdateServerCertificateRequest,
};

pub struct ServerCertificatesRepositoryImpl<T: IamApi> {
    iam_client: T,
}

impl<T: IamApi> ServerCertificatesRepositoryImpl<T> {
    pub fn new(iam_client: T) -> Self {
        Self { iam_client }
    }
}

fn into_server_certificate(metadata: ServerCertificateMetadata) -> ServerCertificate {
    ServerCertificate {
        uploaded_at: metadata.upload_date.as_deref().and_then(parse_iam_timestamp),
        expires_at: metadata.expiration.as_deref().and_then(parse_iam_timestamp),
        server_certificate_name: metadata.server_certificate_name,
        server_certificate_id: metadata.server_certificate_id,
        arn: metadata.arn,
        path: metadata.path,
    }
}

#[async_trait]
impl<T: IamApi> ServerCertificatesRepository for ServerCertificatesRepositoryImpl<T> {
    async fn list_server_certificates(
        &self,
        path_prefix: Option<String>,
    ) -> Result<Vec<ServerCertificate>, ServerCertificatesRepositoryError> {
        let mut certificates = Vec::new();
        let mut marker = None;

        loop {
            let response = self
                .iam_client
                .list_server_certificates(ListServerCertificatesRequest {
                    marker: marker.take(),
                    path_prefix: path_prefix.clone(),
                    ..ListServerCertificatesRequest::default()
                })
                .await
                .map_err(|e| {
                    ServerCertificatesRepositoryError::unknown(
                        e,
                        Some("Error listing server certificates"),
                    )
                })?;

            certificates.extend(
                response
                    .server_certificate_metadata_list
                    .into_iter()
                    .map(into_server_certificate),
            );

            match (response.is_truncated, response.marker) {
                (Some(true), Some(next)) => marker = Some(next),
                _ => break,
            }
        }

        tracing::info!(count = certificates.len(), "server certificates listed");

        Ok(certificates)
    }

    async fn update_server_certificate(
        &self,
        current_name: String,
        new_name: String,
    ) -> Result<(), ServerCertificatesRepositoryError> {
        self.iam_client
            .update_server_certificate(UpdateServerCertificateRequest {
                server_certificate_name: current_name.clone(),
                new_server_certificate_name: Some(new_name.clone()),
                ..UpdateServerCertificateRequest::default()
            })
            .await
            .map_err(|e| match e {
                RusotoError::Service(UpdateServerCertificateError::NoSuchEntity(_)) => {
                    ServerCertificatesRepositoryError::CertificateNotFound(format!(
                        "Server certificate {current_name} not found"
                    ))
                }
                RusotoError::Service(UpdateServerCertificateError::EntityAlreadyExists(_)) => {
                    ServerCertificatesRepositoryError::CertificateAlreadyExists(format!(
                        "Server certificate {new_name} already exists"
                    ))
                }
                e => ServerCertificatesRepositoryError::Unknown(anyhow!(e).context(format!(
                    "Error renaming server certificate {current_name} to {new_name}"
                ))),
            })?;

        tracing::info!(current_name = ?current_name, new_name = ?new_name, "server certificate renamed");

        Ok(())
    }
}
