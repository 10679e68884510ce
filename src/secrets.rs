//! Secret storage abstraction.

use async_trait::async_trait;

use crate::errors::Result;

/// Host-provided durable storage for secrets.
///
/// Implementations are typically backed by the platform keyring on desktop or
/// an encrypted file on servers. The backend may fail transiently or
/// permanently; callers must not assume any operation succeeds.
///
/// `get_secret` keeps "no value stored" (`Ok(None)`) distinct from "the store
/// failed" (`Err`); the vault relies on that distinction.
#[async_trait]
pub trait SecretStore: Send + Sync {
    /// Persist a secret under the given service identifier, replacing any
    /// previous value.
    async fn set_secret(&self, service: &str, secret: &str) -> Result<()>;

    /// Retrieve the secret stored under the given service identifier, if any.
    async fn get_secret(&self, service: &str) -> Result<Option<String>>;

    /// Delete the secret stored under the given service identifier. Deleting
    /// a missing entry is not an error.
    async fn delete_secret(&self, service: &str) -> Result<()>;
}
