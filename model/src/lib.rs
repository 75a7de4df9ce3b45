pub mod access_key;
pub mod policy;
pub mod role;
pub mod server_certificate;
pub mod timestamps;
pub mod user;
