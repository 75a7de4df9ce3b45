use repositories::server_certificates::ServerCertificatesRepository;

/// Renames the server certificate `current_name` to `new_name`.
pub async fn update_server_certificate<R>(certificates: &R, current_name: &str, new_name: &str) -> bool
where
    R: ServerCertificatesRepository + ?Sized,
{
    match certificates
        .update_server_certificate(current_name.to_owned(), new_name.to_owned())
        .await
    {
        Ok(()) => {
            tracing::info!(
                current_name = ?current_name,
                new_name = ?new_name,
                "Successfully updated server certificate to name {new_name}"
            );
            true
        }
        Err(e) => {
            tracing::error!(current_name = ?current_name, error = %e, "Error updating server certificate {current_name}");
            false
        }
    }
}
