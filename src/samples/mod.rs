//! One function per IAM call. Each returns only whether the call succeeded (the listing also
//! hands back what it listed); the reason for a failure is logged, never returned.

pub mod create_role;
pub mod delete_access_key;
pub mod delete_policy;
pub mod detach_role_policy;
pub mod list_server_certificates;
pub mod update_server_certificate;
