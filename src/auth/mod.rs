//! Authentication: the credential check and the session token it hands out

pub mod credentials;
pub mod session;

pub use credentials::{login, Credential, CredentialStore, StaticCredentials};
