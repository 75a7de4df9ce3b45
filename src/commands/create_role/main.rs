use std::sync::Arc;

use async_trait::async_trait;
use clap::Parser;
use iam_examples::sample_main;
use iam_examples::sample_structure::sample_trait::Sample;
use iam_examples::samples::create_role::create_iam_role;
use iam_examples::validations::iam_names::{validate_arn, validate_iam_name};
use model::policy::{PolicyDocument, Principal};
use repositories::roles::roles_repository_impl::RolesRepositoryImpl;
use repositories::roles::RolesRepository;
use rusoto_iam::IamClient;
use validator::Validate;

/// Creates an IAM role that the given principal is allowed to assume.
#[derive(Parser, Validate, Debug)]
#[command(version, about)]
pub struct Args {
    /// Name of the new role
    #[arg(long)]
    #[validate(custom = "validate_iam_name")]
    pub role_name: String,

    /// ARN of the user or role trusted to assume the new role
    #[arg(long)]
    #[validate(custom = "validate_arn")]
    pub trusted_principal_arn: String,
}

pub struct Persisted {
    pub roles_repository: Arc<dyn RolesRepository>,
}

pub struct CreateRole;

#[async_trait]
impl Sample for CreateRole {
    type Args = Args;
    type PersistedMemory = Persisted;

    fn bootstrap(iam_client: IamClient) -> Self::PersistedMemory {
        Persisted {
            roles_repository: Arc::new(RolesRepositoryImpl::new(iam_client)),
        }
    }

    async fn run(args: Self::Args, persisted: &Self::PersistedMemory) -> bool {
        let policy = PolicyDocument::assume_role(Principal::Aws(args.trusted_principal_arn));
        let policy_json = match policy.to_json() {
            Ok(json) => json,
            Err(e) => {
                tracing::error!(error = %e, "Error rendering the trust policy");
                return false;
            }
        };

        create_iam_role(
            persisted.roles_repository.as_ref(),
            &args.role_name,
            &policy_json,
        )
        .await
    }
}

sample_main!(CreateRole);
