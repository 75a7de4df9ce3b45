use std::sync::Arc;

use async_trait::async_trait;
use clap::Parser;
use iam_examples::sample_main;
use iam_examples::sample_structure::sample_trait::Sample;
use iam_examples::samples::delete_policy::delete_policy;
use iam_examples::validations::iam_names::validate_arn;
use repositories::policies::policies_repository_impl::PoliciesRepositoryImpl;
use repositories::policies::PoliciesRepository;
use rusoto_iam::IamClient;
use validator::Validate;

/// Deletes a customer managed policy.
#[derive(Parser, Validate, Debug)]
#[command(version, about)]
pub struct Args {
    #[arg(long)]
    #[validate(custom = "validate_arn")]
    pub policy_arn: String,
}

pub struct Persisted {
    pub policies_repository: Arc<dyn PoliciesRepository>,
}

pub struct DeletePolicy;

#[async_trait]
impl Sample for DeletePolicy {
    type Args = Args;
    type PersistedMemory = Persisted;

    fn bootstrap(iam_client: IamClient) -> Self::PersistedMemory {
        Persisted {
            policies_repository: Arc::new(PoliciesRepositoryImpl::new(iam_client)),
        }
    }

    async fn run(args: Self::Args, persisted: &Self::PersistedMemory) -> bool {
        delete_policy(persisted.policies_repository.as_ref(), &args.policy_arn).await
    }
}

sample_main!(DeletePolicy);
