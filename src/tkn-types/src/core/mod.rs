pub mod namespace;
pub mod secret;
pub mod service_account;
