use crate::users::{UsersRepository, UsersRepositoryError};
use anyhow::anyhow;
use async_trait::async_trait;
use common::aws_clients::iam::IamApi;
use model::timestamps::parse_iam_timestamp;
use model::user::User;
use rusoto_core::RusotoError;
use rusoto_iam::{CreateUserError, CreateUserRequest, DeleteUserError, DeleteUserRequest};

pub struct UsersRepositoryImpl<T: IamApi> {
    iam_client: T,
}

impl<T: IamApi> UsersRepositoryImpl<T> {
    pub fn new(iam_client: T) -> Self {
        Self { iam_client }
    }
}

fn into_user(user: rusoto_iam::User) -> User {
    User {
        created_at: parse_iam_timestamp(&user.create_date),
        user_name: user.user_name,
        user_id: user.user_id,
        arn: user.arn,
        path: user.path,
    }
}

#[async_trait]
impl<T: IamApi> UsersRepository for UsersRepositoryImpl<T> {
    async fn create_user(&self, user_name: String) -> Result<User, UsersRepositoryError> {
        let user = self
            .iam_client
            .create_user(CreateUserRequest {
                user_name: user_name.clone(),
                ..CreateUserRequest::default()
            })
            .await
            .map_err(|e| match e {
                RusotoError::Service(CreateUserError::EntityAlreadyExists(message)) => {
                    UsersRepositoryError::UserAlreadyExists(format!(
                        "User {user_name} already exists: {message}"
                    ))
                }
                e => UsersRepositoryError::Unknown(
                    anyhow!(e).context(format!("Error creating user {user_name}")),
                ),
            })?
            .user
            .ok_or_else(|| {
                UsersRepositoryError::Unknown(anyhow!(
                    "IAM accepted user {user_name} but returned no user"
                ))
            })?;

        tracing::info!(user_name = ?user_name, arn = ?user.arn, "user created");

        Ok(into_user(user))
    }

    async fn delete_user(&self, user_name: String) -> Result<(), UsersRepositoryError> {
        self.iam_client
            .delete_user(DeleteUserRequest {
                user_name: user_name.clone(),
            })
            .await
            .map_err(|e| match e {
                RusotoError::Service(DeleteUserError::NoSuchEntity(_)) => {
                    UsersRepositoryError::UserNotFound(format!("User {user_name} not found"))
                }
                RusotoError::Service(DeleteUserError::DeleteConflict(message)) => {
                    UsersRepositoryError::DeleteConflict(format!(
                        "User {user_name} still owns resources: {message}"
                    ))
                }
                e => UsersRepositoryError::Unknown(
                    anyhow!(e).context(format!("Error deleting user {user_name}")),
                ),
            })?;

        tracing::info!(user_name = ?user_name, "user deleted");

        Ok(())
    }
}
