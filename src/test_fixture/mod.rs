//! Per-suite IAM state for tests of the samples.
//!
//! A fixture owns one freshly created IAM user and a ledger of everything created on its
//! behalf, so that [`IamTestFixture::tear_down`] can leave the account as it found it.

use common::aws_clients::iam::IamApi;
use model::policy::{PolicyDocument, Principal};
use model::user::User;
use repositories::access_keys::access_keys_repository_impl::AccessKeysRepositoryImpl;
use repositories::access_keys::{AccessKeysRepository, AccessKeysRepositoryError};
use repositories::roles::roles_repository_impl::RolesRepositoryImpl;
use repositories::roles::{RolesRepository, RolesRepositoryError};
use repositories::users::users_repository_impl::UsersRepositoryImpl;
use repositories::users::{UsersRepository, UsersRepositoryError};
use std::future::Future;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use tokio::runtime::{Handle, RuntimeFlavor};
use tokio::sync::Mutex;
use uuid::Uuid;

/// Logged when a test could not build what it needs, as opposed to the operation under test
/// failing.
pub const PRECONDITION_ERROR: &str = "Test precondition failed";
pub const FIXTURE_USER_PREFIX: &str = "iam-fixture-user";
const IAM_NAME_MAX_LEN: usize = 64;

const UUID_SUFFIX_LEN: usize = 33;

/// `<prefix>-<32 lowercase hex chars>`, within the 64 characters IAM accepts for names.
///
/// Long prefixes are shortened, never the random part.
pub fn uuid_name(prefix: &str) -> String {
    let prefix: String = prefix
        .chars()
        .take(IAM_NAME_MAX_LEN - UUID_SUFFIX_LEN)
        .collect();
    format!("{prefix}-{}", Uuid::new_v4().simple())
}

#[derive(Debug, thiserror::Error)]
pub enum FixtureError {
    #[error("could not create the fixture user: {0}")]
    Provisioning(#[source] UsersRepositoryError),
    #[error("could not render the trust policy: {0}")]
    Policy(#[from] serde_json::Error),
    #[error("teardown left resources behind: {}", .0.join("; "))]
    Teardown(Vec<String>),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TrackedResource {
    Role(String),
    AccessKey(String),
}

/// The repositories a fixture provisions through. Cheap to clone.
#[derive(Clone)]
pub struct FixtureRepositories {
    pub users: Arc<dyn UsersRepository>,
    pub access_keys: Arc<dyn AccessKeysRepository>,
    pub roles: Arc<dyn RolesRepository>,
}

impl FixtureRepositories {
    pub fn from_client<T>(iam_client: T) -> Self
    where
        T: IamApi + Clone + 'static,
    {
        Self {
            users: Arc::new(UsersRepositoryImpl::new(iam_client.clone())),
            access_keys: Arc::new(AccessKeysRepositoryImpl::new(iam_client.clone())),
            roles: Arc::new(RolesRepositoryImpl::new(iam_client)),
        }
    }
}

pub struct IamTestFixture {
    repositories: FixtureRepositories,
    user: User,
    assume_role_policy_json: String,
    ledger: Mutex<Vec<TrackedResource>>,
    torn_down: AtomicBool,
}

impl IamTestFixture {
    /// Creates the fixture user. Nothing else is provisioned until a test asks for it.
    pub async fn set_up(repositories: FixtureRepositories) -> Result<Self, FixtureError> {
        let user_name = uuid_name(FIXTURE_USER_PREFIX);
        let user = repositories
            .users
            .create_user(user_name)
            .await
            .map_err(FixtureError::Provisioning)?;

        let assume_role_policy_json =
            match PolicyDocument::assume_role(Principal::Aws(user.arn.clone())).to_json() {
                Ok(json) => json,
                Err(e) => {
                    if let Err(delete_error) =
                        repositories.users.delete_user(user.user_name.clone()).await
                    {
                        tracing::error!(user_name = ?user.user_name, error = %delete_error, "could not roll back fixture user");
                    }
                    return Err(e.into());
                }
            };

        tracing::info!(user_name = ?user.user_name, arn = ?user.arn, "fixture provisioned");

        Ok(Self {
            repositories,
            user,
            assume_role_policy_json,
            ledger: Mutex::new(Vec::new()),
            torn_down: AtomicBool::new(false),
        })
    }

    pub fn get_user(&self) -> &str {
        &self.user.user_name
    }

    pub fn user(&self) -> &User {
        &self.user
    }

    /// Trust policy allowing the fixture user to assume whatever role carries it.
    pub fn get_assume_role_policy_json(&self) -> &str {
        &self.assume_role_policy_json
    }

    pub fn roles(&self) -> &dyn RolesRepository {
        self.repositories.roles.as_ref()
    }

    pub fn access_keys(&self) -> &dyn AccessKeysRepository {
        self.repositories.access_keys.as_ref()
    }

    /// Creates an access key for the fixture user and returns its id.
    pub async fn create_access_key(&self) -> Option<String> {
        match self
            .repositories
            .access_keys
            .create_access_key(self.user.user_name.clone())
            .await
        {
            Ok(access_key) => {
                self.ledger
                    .lock()
                    .await
                    .push(TrackedResource::AccessKey(access_key.access_key_id.clone()));
                Some(access_key.access_key_id)
            }
            Err(e) => {
                tracing::error!(user_name = ?self.user.user_name, error = %e, "{PRECONDITION_ERROR}");
                None
            }
        }
    }

    /// Makes teardown responsible for `role_name` unless the test deletes it first.
    pub async fn track_role(&self, role_name: &str) {
        self.ledger
            .lock()
            .await
            .push(TrackedResource::Role(role_name.to_owned()));
    }

    pub async fn delete_role(&self, role_name: &str) -> bool {
        match self.repositories.roles.delete_role(role_name.to_owned()).await {
            Ok(()) => {
                self.forget(&TrackedResource::Role(role_name.to_owned())).await;
                true
            }
            Err(e) => {
                tracing::error!(role_name = ?role_name, error = %e, "Error deleting role {role_name}");
                false
            }
        }
    }

    pub async fn tracked(&self) -> Vec<TrackedResource> {
        self.ledger.lock().await.clone()
    }

    pub fn is_torn_down(&self) -> bool {
        self.torn_down.load(Ordering::SeqCst)
    }

    async fn forget(&self, resource: &TrackedResource) {
        self.ledger.lock().await.retain(|tracked| tracked != resource);
    }

    /// Deletes ledgered roles, every access key of the fixture user, then the user itself.
    ///
    /// Resources that are already gone are not failures. Only the first call does any work.
    pub async fn tear_down(&self) -> Result<(), FixtureError> {
        if self.torn_down.swap(true, Ordering::SeqCst) {
            return Ok(());
        }

        let user_name = self.user.user_name.clone();
        let tracked: Vec<TrackedResource> = self.ledger.lock().await.drain(..).rev().collect();
        let mut failures = Vec::new();

        for resource in tracked.iter() {
            let TrackedResource::Role(role_name) = resource else {
                continue;
            };
            match self.repositories.roles.delete_role(role_name.clone()).await {
                Ok(()) | Err(RolesRepositoryError::RoleNotFound(_)) => {}
                Err(e) => failures.push(format!("role {role_name}: {e}")),
            }
        }

        for resource in tracked.iter() {
            let TrackedResource::AccessKey(access_key_id) = resource else {
                continue;
            };
            self.delete_access_key(access_key_id.clone(), &mut failures)
                .await;
        }

        // Keys created behind the fixture's back still block the user deletion.
        match self
            .repositories
            .access_keys
            .list_access_keys(user_name.clone())
            .await
        {
            Ok(remaining) => {
                for access_key in remaining {
                    self.delete_access_key(access_key.access_key_id, &mut failures)
                        .await;
                }
            }
            Err(e) => failures.push(format!("access keys of {user_name}: {e}")),
        }

        match self.repositories.users.delete_user(user_name.clone()).await {
            Ok(()) | Err(UsersRepositoryError::UserNotFound(_)) => {}
            Err(e) => failures.push(format!("user {user_name}: {e}")),
        }

        if failures.is_empty() {
            tracing::info!(user_name = ?user_name, "fixture torn down");
            Ok(())
        } else {
            tracing::error!(user_name = ?user_name, failures = ?failures, "fixture teardown incomplete");
            Err(FixtureError::Teardown(failures))
        }
    }

    async fn delete_access_key(&self, access_key_id: String, failures: &mut Vec<String>) {
        match self
            .repositories
            .access_keys
            .delete_access_key(self.user.user_name.clone(), access_key_id.clone())
            .await
        {
            Ok(()) | Err(AccessKeysRepositoryError::AccessKeyNotFound(_)) => {}
            Err(e) => failures.push(format!("access key {access_key_id}: {e}")),
        }
    }

    /// Runs `test` on its own task, tears the fixture down whatever the outcome, then resumes
    /// the test's panic if it had one.
    pub async fn scoped<F, Fut>(self: Arc<Self>, test: F) -> Result<(), FixtureError>
    where
        F: FnOnce(Arc<Self>) -> Fut,
        Fut: Future<Output = ()> + Send + 'static,
    {
        let outcome = tokio::spawn(test(self.clone())).await;
        let teardown = self.tear_down().await;

        match outcome {
            Ok(()) => teardown,
            Err(e) if e.is_panic() => std::panic::resume_unwind(e.into_panic()),
            Err(e) => {
                tracing::error!(error = %e, "test task did not complete");
                teardown
            }
        }
    }
}

impl Drop for IamTestFixture {
    fn drop(&mut self) {
        if self.is_torn_down() {
            return;
        }

        tracing::warn!(
            user_name = ?self.user.user_name,
            "fixture dropped without teardown, IAM user {} may leak", self.user.user_name
        );

        // block_in_place panics on a current-thread runtime, so only retry where it is allowed.
        let multi_thread = Handle::try_current()
            .map(|handle| handle.runtime_flavor() == RuntimeFlavor::MultiThread)
            .unwrap_or(false);
        if multi_thread {
            if let Err(e) = common::block_on!(self.tear_down()) {
                tracing::error!(user_name = ?self.user.user_name, error = %e, "late teardown failed");
            }
        }
    }
}
