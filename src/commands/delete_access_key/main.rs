use std::sync::Arc;

use async_trait::async_trait;
use clap::Parser;
use iam_examples::sample_main;
use iam_examples::sample_structure::sample_trait::Sample;
use iam_examples::samples::delete_access_key::delete_access_key;
use iam_examples::validations::iam_names::{validate_access_key_id, validate_iam_name};
use repositories::access_keys::access_keys_repository_impl::AccessKeysRepositoryImpl;
use repositories::access_keys::AccessKeysRepository;
use rusoto_iam::IamClient;
use validator::Validate;

/// Deletes one access key of an IAM user.
#[derive(Parser, Validate, Debug)]
#[command(version, about)]
pub struct Args {
    #[arg(long)]
    #[validate(custom = "validate_iam_name")]
    pub user_name: String,

    #[arg(long)]
    #[validate(custom = "validate_access_key_id")]
    pub access_key_id: String,
}

pub struct Persisted {
    pub access_keys_repository: Arc<dyn AccessKeysRepository>,
}

pub struct DeleteAccessKey;

#[async_trait]
impl Sample for DeleteAccessKey {
    type Args = Args;
    type PersistedMemory = Persisted;

    fn bootstrap(iam_client: IamClient) -> Self::PersistedMemory {
        Persisted {
            access_keys_repository: Arc::new(AccessKeysRepositoryImpl::new(iam_client)),
        }
    }

    async fn run(args: Self::Args, persisted: &Self::PersistedMemory) -> bool {
        delete_access_key(
            persisted.access_keys_repository.as_ref(),
            &args.user_name,
            &args.access_key_id,
        )
        .await
    }
}

sample_main!(DeleteAccessKey);
