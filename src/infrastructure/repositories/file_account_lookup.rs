use async_trait::async_trait;
use std::path::PathBuf;

use crate::domain::errors::DomainError;
use crate::domain::models::account::Account;
use crate::domain::models::platform::Platform;
use crate::domain::repositories::account_lookup::AccountLookup;
use crate::infrastructure::persistence::file_system::read_json_file;

/// File-based account lookup for one provider kind.
///
/// Accounts live as one JSON file per id under the platform's account
/// directory. A missing file is the normal "unknown id" outcome; an
/// unreadable or malformed file is an infrastructure error.
pub struct FileAccountLookup {
    platform: Platform,
    accounts_dir: PathBuf,
}

impl FileAccountLookup {
    /// Create a new FileAccountLookup for one platform
    pub fn new(platform: Platform, accounts_dir: PathBuf) -> Self {
        Self {
            platform,
            accounts_dir,
        }
    }

    /// Map an identifier to its account file, if the identifier is a safe
    /// file stem. Identifiers that could escape the account directory are
    /// treated as unknown.
    fn account_file_path(&self, id: &str) -> Option<PathBuf> {
        if id.is_empty() || id.contains(['/', '\\']) || id.contains("..") {
            return None;
        }

        Some(self.accounts_dir.join(format!("{}.json", id)))
    }
}

#[async_trait]
impl AccountLookup for FileAccountLookup {
    fn platform(&self) -> Platform {
        self.platform
    }

    async fn lookup_account(&self, id: &str) -> Result<Option<Account>, DomainError> {
        let Some(file_path) = self.account_file_path(id) else {
            return Ok(None);
        };

        match read_json_file::<Account>(&file_path).await {
            Ok(account) => Ok(Some(account)),
            Err(DomainError::NotFound(_)) => Ok(None),
            Err(error) => Err(error),
        }
    }
}
