use std::sync::Arc;
use std::time::Duration;

use futures_util::stream::{self, StreamExt, TryStreamExt};
use tokio::time::timeout;

use crate::domain::errors::DomainError;
use crate::domain::models::account::Account;
use crate::domain::repositories::account_lookup::AccountLookup;
use crate::infrastructure::logging::logger;

/// Tuning knobs for membership resolution
#[derive(Debug, Clone)]
pub struct ResolverConfig {
    /// How many member identifiers are resolved at the same time
    pub max_concurrency: usize,

    /// Upper bound for a single account-store call
    pub lookup_timeout: Duration,
}

impl Default for ResolverConfig {
    fn default() -> Self {
        Self {
            max_concurrency: 8,
            lookup_timeout: Duration::from_secs(15),
        }
    }
}

/// Resolves member identifiers into account records by probing the provider
/// account stores.
///
/// The store list is probed in order and the first match wins, so a member
/// id that exists in more than one provider namespace always resolves from
/// the earliest store. Resolution across different ids runs concurrently,
/// but the output sequence always matches the input sequence.
pub struct MembershipResolver {
    /// Account stores in probe-priority order
    lookups: Vec<Arc<dyn AccountLookup>>,

    config: ResolverConfig,
}

impl MembershipResolver {
    /// Create a new MembershipResolver over the given stores.
    ///
    /// The order of `lookups` is the probe priority.
    pub fn new(lookups: Vec<Arc<dyn AccountLookup>>, config: ResolverConfig) -> Self {
        Self { lookups, config }
    }

    /// Resolve a member-id sequence into account records.
    ///
    /// Identifiers that no store knows are dropped from the result; the
    /// surviving records keep the input order. A store call that errors or
    /// times out fails the whole batch with `ResolutionFailed`.
    pub async fn resolve_members(&self, member_ids: &[String]) -> Result<Vec<Account>, DomainError> {
        if member_ids.is_empty() {
            return Ok(Vec::new());
        }

        logger::debug(&format!(
            "Resolving {} member ids across {} account stores",
            member_ids.len(),
            self.lookups.len()
        ));

        // `buffered` keeps completion order pinned to the input order, so no
        // reordering pass is needed afterwards.
        let resolved: Vec<Option<Account>> = stream::iter(member_ids)
            .map(|id| self.resolve_one(id))
            .buffered(self.config.max_concurrency.max(1))
            .try_collect()
            .await?;

        Ok(resolved.into_iter().flatten().collect())
    }

    /// Probe the stores in priority order for a single identifier.
    async fn resolve_one(&self, id: &str) -> Result<Option<Account>, DomainError> {
        for lookup in &self.lookups {
            match timeout(self.config.lookup_timeout, lookup.lookup_account(id)).await {
                Ok(Ok(Some(account))) => return Ok(Some(account)),
                Ok(Ok(None)) => continue,
                Ok(Err(error)) => {
                    logger::error(&format!(
                        "Account store {} failed for member {}: {}",
                        lookup.platform(),
                        id,
                        error
                    ));
                    return Err(DomainError::ResolutionFailed(format!(
                        "Account store {} failed for member {}: {}",
                        lookup.platform(),
                        id,
                        error
                    )));
                }
                Err(_) => {
                    logger::error(&format!(
                        "Account store {} timed out for member {}",
                        lookup.platform(),
                        id
                    ));
                    return Err(DomainError::ResolutionFailed(format!(
                        "Account store {} timed out after {:?} for member {}",
                        lookup.platform(),
                        self.config.lookup_timeout,
                        id
                    )));
                }
            }
        }

        Ok(None)
    }
}
