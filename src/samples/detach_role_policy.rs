use repositories::roles::RolesRepository;

pub async fn detach_role_policy<R>(roles: &R, role_name: &str, policy_arn: &str) -> bool
where
    R: RolesRepository + ?Sized,
{
    match roles
        .detach_role_policy(role_name.to_owned(), policy_arn.to_owned())
        .await
    {
        Ok(()) => {
            tracing::info!(
                role_name = ?role_name,
                policy_arn = ?policy_arn,
                "Successfully detached policy {policy_arn} from role {role_name}"
            );
            true
        }
        Err(e) => {
            tracing::error!(role_name = ?role_name, policy_arn = ?policy_arn, error = %e, "Error detaching policy");
            false
        }
    }
}
