use std::sync::Arc;

use async_trait::async_trait;
use clap::Parser;
use iam_examples::sample_main;
use iam_examples::sample_structure::sample_trait::Sample;
use iam_examples::samples::detach_role_policy::detach_role_policy;
use iam_examples::validations::iam_names::{validate_arn, validate_iam_name};
use repositories::roles::roles_repository_impl::RolesRepositoryImpl;
use repositories::roles::RolesRepository;
use rusoto_iam::IamClient;
use validator::Validate;

/// Detaches a managed policy from a role.
#[derive(Parser, Validate, Debug)]
#[command(version, about)]
pub struct Args {
    #[arg(long)]
    #[validate(custom = "validate_iam_name")]
    pub role_name: String,

    #[arg(long)]
    #[validate(custom = "validate_arn")]
    pub policy_arn: String,
}

pub struct Persisted {
    pub roles_repository: Arc<dyn RolesRepository>,
}

pub struct DetachRolePolicy;

#[async_trait]
impl Sample for DetachRolePolicy {
    type Args = Args;
    type PersistedMemory = Persisted;

    fn bootstrap(iam_client: IamClient) -> Self::PersistedMemory {
        Persisted {
            roles_repository: Arc::new(RolesRepositoryImpl::new(iam_client)),
        }
    }

    async fn run(args: Self::Args, persisted: &Self::PersistedMemory) -> bool {
        detach_role_policy(
            persisted.roles_repository.as_ref(),
            &args.role_name,
            &args.policy_arn,
        )
        .await
    }
}

sample_main!(DetachRolePolicy);
