//! Document storage on a remote version-controlled file host
//!
//! [`RemoteFileStore`] handles the read / version-token / overwrite cycle over
//! a [`ContentHost`]; [`Repository`] maps one entity list onto one document.

mod error;
mod file_store;
mod github;
pub mod host;
mod memory;
mod repository;

pub use error::{StoreError, StoreResult};
pub use file_store::RemoteFileStore;
pub use github::GithubHost;
pub use host::ContentHost;
pub use memory::MemoryHost;
pub use repository::{AcademyData, Collection, Record, Repositories};
