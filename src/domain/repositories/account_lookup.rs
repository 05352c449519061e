use crate::domain::errors::DomainError;
use crate::domain::models::account::Account;
use crate::domain::models::platform::Platform;
use async_trait::async_trait;

/// Lookup capability supplied by each provider account store.
///
/// An unknown identifier is a normal outcome and must be reported as
/// `Ok(None)`; an `Err` means the store itself could not answer and is
/// treated as an infrastructure failure by the resolver.
#[async_trait]
pub trait AccountLookup: Send + Sync {
    /// The provider kind this store answers for
    fn platform(&self) -> Platform;

    /// Get an account by its provider-assigned identifier
    async fn lookup_account(&self, id: &str) -> Result<Option<Account>, DomainError>;
}
