use crate::access_keys::{AccessKeysRepository, AccessKeysRepositoryError};
use crate::error::UnknownError;
use anyhow::anyhow;
use async_trait::async_trait;
use common::aws_clients::iam::IamApi;
use model::access_key::{AccessKey, AccessKeyMetadata, AccessKeyStatus};
use model::timestamps::parse_iam_timestamp;
use rusoto_core::RusotoError;
use rusoto_iam::{
    CreateAccessKeyError, CreateAccessKeyRequest, DeleteAccessKeyError, DeleteAccessKeyRequest,
    ListAccessKeysError, ListAccessKeysRequest,
};
use std::str::FromStr;

pub struct AccessKeysRepositoryImpl<T: IamApi> {
    iam_client: T,
}

impl<T: IamApi> AccessKeysRepositoryImpl<T> {
    pub fn new(iam_client: T) -> Self {
        Self { iam_client }
    }
}

fn into_access_key_metadata(
    metadata: rusoto_iam::AccessKeyMetadata,
    user_name: &str,
) -> Option<AccessKeyMetadata> {
    Some(AccessKeyMetadata {
        access_key_id: metadata.access_key_id?,
        user_name: metadata.user_name.unwrap_or_else(|| user_name.to_owned()),
        status: metadata
            .status
            .and_then(|status| AccessKeyStatus::from_str(&status).ok()),
        created_at: metadata
            .create_date
            .as_deref()
            .and_then(parse_iam_timestamp),
    })
}

#[async_trait]
impl<T: IamApi> AccessKeysRepository for AccessKeysRepositoryImpl<T> {
    async fn create_access_key(&self, user_name: String) -> Result<AccessKey, AccessKeysRepositoryError> {
        let key = self
            .iam_client
            .create_access_key(CreateAccessKeyRequest {
                user_name: Some(user_name.clone()),
            })
            .await
            .map_err(|e| match e {
                RusotoError::Service(CreateAccessKeyError::LimitExceeded(message)) => {
                    AccessKeysRepositoryError::LimitExceeded(format!(
                        "User {user_name} cannot hold more access keys: {message}"
                    ))
                }
                e => AccessKeysRepositoryError::Unknown(
                    anyhow!(e).context(format!("Error creating access key for user {user_name}")),
                ),
            })?
            .access_key;

        let status = AccessKeyStatus::from_str(&key.status).map_err(|e| {
            AccessKeysRepositoryError::unknown(e, Some("Error parsing access key status"))
        })?;

        tracing::info!(user_name = ?user_name, access_key_id = ?key.access_key_id, "access key created");

        Ok(AccessKey {
            created_at: key.create_date.as_deref().and_then(parse_iam_timestamp),
            access_key_id: key.access_key_id,
            secret_access_key: key.secret_access_key,
            user_name: key.user_name,
            status,
        })
    }

    async fn delete_access_key(
        &self,
        user_name: String,
        access_key_id: String,
    ) -> Result<(), AccessKeysRepositoryError> {
        self.iam_client
            .delete_access_key(DeleteAccessKeyRequest {
                access_key_id: access_key_id.clone(),
                user_name: Some(user_name.clone()),
            })
            .await
            .map_err(|e| match e {
                RusotoError::Service(DeleteAccessKeyError::NoSuchEntity(_)) => {
                    AccessKeysRepositoryError::AccessKeyNotFound(format!(
                        "Access key {access_key_id} not found for user {user_name}"
                    ))
                }
                e => AccessKeysRepositoryError::Unknown(anyhow!(e).context(format!(
                    "Error deleting access key {access_key_id} of user {user_name}"
                ))),
            })?;

        tracing::info!(user_name = ?user_name, access_key_id = ?access_key_id, "access key deleted");

        Ok(())
    }

    async fn list_access_keys(
        &self,
        user_name: String,
    ) -> Result<Vec<AccessKeyMetadata>, AccessKeysRepositoryError> {
        let mut keys = Vec::new();
        let mut marker = None;

        loop {
            let response = self
                .iam_client
                .list_access_keys(ListAccessKeysRequest {
                    marker: marker.take(),
                    user_name: Some(user_name.clone()),
                    ..ListAccessKeysRequest::default()
                })
                .await
                .map_err(|e| match e {
                    RusotoError::Service(ListAccessKeysError::NoSuchEntity(_)) => {
                        AccessKeysRepositoryError::AccessKeyNotFound(format!(
                            "User {user_name} not found"
                        ))
                    }
                    e => AccessKeysRepositoryError::Unknown(
                        anyhow!(e).context(format!("Error listing access keys of user {user_name}")),
                    ),
                })?;

            keys.extend(
                response
                    .access_key_metadata
                    .into_iter()
                    .filter_map(|metadata| into_access_key_metadata(metadata, &user_name)),
            );

            match (response.is_truncated, response.marker) {
                (Some(true), Some(next)) => marker = Some(next),
                _ => break,
            }
        }

        Ok(keys)
    }
}
