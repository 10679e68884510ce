//! Credential Vault - token storage over a host-provided secret store.
//!
//! This crate is a thin adapter between an application that needs to persist a
//! single secret token per service identifier and the host environment that
//! actually owns secret storage and user-facing UI. The host supplies the
//! collaborators (secret store, notifier, URL opener) as trait objects; the
//! vault wires them together and enforces one policy: a credential-storage
//! failure is never propagated to the caller as an error. Write failures are
//! reported to the user with a troubleshooting link, read failures surface as
//! a dedicated [`TokenLookup::Failed`] outcome, delete failures are logged and
//! dropped.

pub mod errors;
pub mod host;
pub mod secrets;
pub mod vault;

// Re-export error types
pub use errors::Error;
pub use errors::Result;

// Re-export the adapter surface
pub use host::{Notifier, UrlOpener};
pub use secrets::SecretStore;
pub use vault::{CredentialVault, TokenLookup};
