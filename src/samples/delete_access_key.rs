use repositories::access_keys::AccessKeysRepository;

pub async fn delete_access_key<R>(access_keys: &R, user_name: &str, access_key_id: &str) -> bool
where
    R: AccessKeysRepository + ?Sized,
{
    match access_keys
        .delete_access_key(user_name.to_owned(), access_key_id.to_owned())
        .await
    {
        Ok(()) => {
            tracing::info!(
                user_name = ?user_name,
                access_key_id = ?access_key_id,
                "Successfully deleted access key {access_key_id} from user {user_name}"
            );
            true
        }
        Err(e) => {
            tracing::error!(
                user_name = ?user_name,
                access_key_id = ?access_key_id,
                error = %e,
                "Error deleting access key {access_key_id}"
            );
            false
        }
    }
}
