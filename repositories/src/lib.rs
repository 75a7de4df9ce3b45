pub mod access_keys;
pub mod error;
pub mod policies;
pub mod roles;
pub mod server_certificates;
pub mod users;
