use serde::{Deserialize, Serialize};

use crate::domain::models::platform::Platform;

/// Account record returned by a provider account store.
///
/// The core passes accounts through unchanged; beyond the identifier, the
/// display name and the owning platform, provider-specific fields are kept
/// as an opaque flattened payload.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Account {
    /// Provider-assigned account identifier
    pub id: String,

    /// Display name of the account
    pub name: String,

    /// Provider kind that owns this account
    pub platform: Platform,

    /// Provider-specific fields the core does not interpret
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}
