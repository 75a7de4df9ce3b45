use repositories::policies::PoliciesRepository;

pub async fn delete_policy<R>(policies: &R, policy_arn: &str) -> bool
where
    R: PoliciesRepository + ?Sized,
{
    match policies.delete_policy(policy_arn.to_owned()).await {
        Ok(()) => {
            tracing::info!(policy_arn = ?policy_arn, "Successfully deleted the policy");
            true
        }
        Err(e) => {
            tracing::error!(policy_arn = ?policy_arn, error = %e, "Error deleting policy {policy_arn}");
            false
        }
    }
}
