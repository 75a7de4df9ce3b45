use crate::policies::{PoliciesRepository, PoliciesRepositoryError};
use anyhow::anyhow;
use async_trait::async_trait;
use common::aws_clients::iam::IamApi;
use rusoto_core::RusotoError;
use rusoto_iam::{DeletePolicyError, DeletePolicyRequest};

pub struct PoliciesRepositoryImpl<T: IamApi> {
    iam_client: T,
}

impl<T: IamApi> PoliciesRepositoryImpl<T> {
    pub fn new(iam_client: T) -> Self {
        Self { iam_client }
    }
}

#[async_trait]
impl<T: IamApi> PoliciesRepository for PoliciesRepositoryImpl<T> {
    async fn delete_policy(&self, policy_arn: String) -> Result<(), PoliciesRepositoryError> {
        self.iam_client
            .delete_policy(DeletePolicyRequest {
                policy_arn: policy_arn.clone(),
            })
            .await
            .map_err(|e| match e {
                RusotoError::Service(DeletePolicyError::NoSuchEntity(_)) => {
                    PoliciesRepositoryError::PolicyNotFound(format!(
                        "Policy {policy_arn} not found"
                    ))
                }
                RusotoError::Service(DeletePolicyError::DeleteConflict(message)) => {
                    PoliciesRepositoryError::DeleteConflict(format!(
                        "Policy {policy_arn} is still attached: {message}"
                    ))
                }
                e => PoliciesRepositoryError::Unknown(
                    anyhow!(e).context(format!("Error deleting policy {policy_arn}")),
                ),
            })?;

        tracing::info!(policy_arn = ?policy_arn, "policy deleted");

        Ok(())
    }
}
