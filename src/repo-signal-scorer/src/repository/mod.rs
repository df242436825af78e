//! Repository identification.
//!
//! This module turns a user-supplied repository URL into the owner/name pair
//! used to address the GitHub REST API.

mod error;
mod identifier;

pub use error::InvalidUrlError;
pub use identifier::RepoIdentifier;
