use repositories::roles::RolesRepository;

/// Creates `role_name` with the given trust policy.
pub async fn create_iam_role<R>(roles: &R, role_name: &str, assume_role_policy_json: &str) -> bool
where
    R: RolesRepository + ?Sized,
{
    match roles
        .create_role(role_name.to_owned(), assume_role_policy_json.to_owned())
        .await
    {
        Ok(role) => {
            tracing::info!(role_name = ?role.role_name, arn = ?role.arn, "Created role {}", role.role_name);
            true
        }
        Err(e) => {
            tracing::error!(role_name = ?role_name, error = %e, "Error creating role {role_name}");
            false
        }
    }
}
