use validator::ValidationError;

const IAM_NAME_MAX_LEN: usize = 64;
const SERVER_CERTIFICATE_NAME_MAX_LEN: usize = 128;
const ACCESS_KEY_ID_MIN_LEN: usize = 16;
const ACCESS_KEY_ID_MAX_LEN: usize = 128;

fn is_iam_name_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || "_+=,.@-".contains(c)
}

fn validate_name(value: &str, max_len: usize, code: &'static str) -> Result<(), ValidationError> {
    if value.is_empty() || value.len() > max_len || !value.chars().all(is_iam_name_char) {
        return Err(ValidationError::new(code));
    }
    Ok(())
}

/// Role and user names: 1 to 64 characters out of `[A-Za-z0-9_+=,.@-]`.
pub fn validate_iam_name(value: &str) -> Result<(), ValidationError> {
    validate_name(value, IAM_NAME_MAX_LEN, "invalid IAM name")
}

pub fn validate_server_certificate_name(value: &str) -> Result<(), ValidationError> {
    validate_name(
        value,
        SERVER_CERTIFICATE_NAME_MAX_LEN,
        "invalid server certificate name",
    )
}

pub fn validate_access_key_id(value: &str) -> Result<(), ValidationError> {
    if value.len() < ACCESS_KEY_ID_MIN_LEN
        || value.len() > ACCESS_KEY_ID_MAX_LEN
        || !value.chars().all(|c| c.is_ascii_alphanumeric())
    {
        return Err(ValidationError::new("invalid access key id"));
    }
    Ok(())
}

/// `arn:partition:service:region:account:resource`, region may be empty (IAM is global).
pub fn validate_arn(value: &str) -> Result<(), ValidationError> {
    let parts: Vec<&str> = value.splitn(6, ':').collect();
    match parts.as_slice() {
        ["arn", partition, service, _region, _account, resource]
            if !partition.is_empty() && !service.is_empty() && !resource.is_empty() =>
        {
            Ok(())
        }
        _ => Err(ValidationError::new("invalid ARN")),
    }
}
