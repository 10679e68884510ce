//! Error types for the credential vault.
//!
//! Collaborator traits return these errors; the vault itself never lets them
//! reach its callers. Store-specific failures (keyring, encrypted files,
//! remote sync) are wrapped in string form to keep this type backend-agnostic.

use thiserror::Error;

/// Type alias for Result using our Error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors reported by host-provided collaborators.
#[derive(Error, Debug)]
pub enum Error {
    /// The secret store rejected or could not complete an operation.
    #[error("Secret store error: {0}")]
    Secret(String),
}
