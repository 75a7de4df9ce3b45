use model::server_certificate::ServerCertificate;
use repositories::server_certificates::ServerCertificatesRepository;

/// Lists every server certificate in the account. `Some` (possibly empty) on success.
///
/// Expired certificates are listed like any other, flagged `expired` in the log.
pub async fn list_server_certificates<R>(certificates: &R) -> Option<Vec<ServerCertificate>>
where
    R: ServerCertificatesRepository + ?Sized,
{
    match certificates.list_server_certificates(None).await {
        Ok(listed) => {
            if listed.is_empty() {
                tracing::info!("No server certificates found.");
            }
            for certificate in &listed {
                tracing::info!(
                    name = ?certificate.server_certificate_name,
                    id = ?certificate.server_certificate_id,
                    arn = ?certificate.arn,
                    expires_at = ?certificate.expires_at,
                    expired = certificate.is_expired(),
                    "Server certificate {}", certificate.server_certificate_name
                );
            }
            Some(listed)
        }
        Err(e) => {
            tracing::error!(error = %e, "Error listing server certificates");
            None
        }
    }
}
