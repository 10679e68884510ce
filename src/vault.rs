//! Credential vault - get/set/delete for a single named credential.

use std::sync::Arc;

use log::{error, info};

use crate::host::{Notifier, UrlOpener};
use crate::secrets::SecretStore;

/// Action label offered on the write-failure notification.
const TROUBLESHOOTING_ACTION: &str = "Troubleshooting Guide";

/// Documentation for diagnosing keychain problems on the user's platform.
const TROUBLESHOOTING_URL: &str =
    "https://code.visualstudio.com/docs/editor/settings-sync#_troubleshooting-keychain-issues";

/// Outcome of [`CredentialVault::get_token`].
///
/// `Absent` means the store answered and had no value; `Failed` means the
/// store could not answer. Callers that treat the two the same can collapse
/// them with [`TokenLookup::token`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TokenLookup {
    /// A token is stored for the service identifier.
    Found(String),
    /// The store has no token for the service identifier.
    Absent,
    /// The store could not be read; whether a token exists is unknown.
    Failed,
}

impl TokenLookup {
    /// The stored token, if the lookup found one.
    pub fn token(&self) -> Option<&str> {
        match self {
            TokenLookup::Found(token) => Some(token),
            TokenLookup::Absent | TokenLookup::Failed => None,
        }
    }

    pub fn is_absent(&self) -> bool {
        matches!(self, TokenLookup::Absent)
    }

    pub fn is_failed(&self) -> bool {
        matches!(self, TokenLookup::Failed)
    }
}

/// Stores, retrieves, and deletes one secret token for a fixed service
/// identifier, delegating persistence to a host-provided [`SecretStore`].
///
/// Storage failures never propagate to callers: a failed write is reported to
/// the user with a troubleshooting link, a failed read comes back as
/// [`TokenLookup::Failed`], and a failed delete is logged and dropped. The
/// vault performs no locking or deduplication; two concurrent `set_token`
/// calls for the same service identifier may race at the store.
pub struct CredentialVault {
    service_id: String,
    secret_store: Arc<dyn SecretStore>,
    notifier: Arc<dyn Notifier>,
    url_opener: Arc<dyn UrlOpener>,
}

impl CredentialVault {
    /// Create a vault for the given service identifier.
    ///
    /// Uniqueness of `service_id` across vault instances is the caller's
    /// responsibility.
    pub fn new(
        service_id: impl Into<String>,
        secret_store: Arc<dyn SecretStore>,
        notifier: Arc<dyn Notifier>,
        url_opener: Arc<dyn UrlOpener>,
    ) -> Self {
        Self {
            service_id: service_id.into(),
            secret_store,
            notifier,
            url_opener,
        }
    }

    /// The service identifier this vault manages.
    pub fn service_id(&self) -> &str {
        &self.service_id
    }

    /// Persist `token` under the service identifier.
    ///
    /// On store failure the user is shown an error notification with a
    /// troubleshooting link; the failure is not propagated.
    pub async fn set_token(&self, token: &str) {
        info!("Storing token for {}", self.service_id);
        if let Err(err) = self.secret_store.set_secret(&self.service_id, token).await {
            error!("Storing {} token failed: {}", self.service_id, err);
            let message = format!(
                "Writing login information to the keychain failed with error '{}'.",
                err
            );
            let picked = self
                .notifier
                .show_error(&message, &[TROUBLESHOOTING_ACTION])
                .await;
            if picked.as_deref() == Some(TROUBLESHOOTING_ACTION) {
                self.url_opener.open_url(TROUBLESHOOTING_URL);
            }
        }
    }

    /// Retrieve the token stored under the service identifier.
    ///
    /// Read failures are silent to the user; they surface only in the log and
    /// as [`TokenLookup::Failed`].
    pub async fn get_token(&self) -> TokenLookup {
        match self.secret_store.get_secret(&self.service_id).await {
            Ok(Some(token)) => TokenLookup::Found(token),
            Ok(None) => TokenLookup::Absent,
            Err(err) => {
                error!("Getting {} token failed: {}", self.service_id, err);
                TokenLookup::Failed
            }
        }
    }

    /// Delete any token stored under the service identifier.
    ///
    /// On store failure the error is logged and dropped; no UI is shown.
    pub async fn delete_token(&self) {
        info!("Deleting token for {}", self.service_id);
        if let Err(err) = self.secret_store.delete_secret(&self.service_id).await {
            error!("Deleting {} token failed: {}", self.service_id, err);
        }
    }
}
