mod create_role;
mod delete_access_key;
mod list_server_certificates;
mod role_lifecycle;
