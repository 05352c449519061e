use std::path::Path;
use std::sync::Arc;

use crate::application::services::group_service::GroupService;
use crate::application::services::membership_resolver::{MembershipResolver, ResolverConfig};
use crate::domain::errors::DomainError;
use crate::domain::models::platform::Platform;
use crate::domain::repositories::account_lookup::AccountLookup;
use crate::domain::repositories::group_repository::GroupRepository;
use crate::infrastructure::persistence::file_system::DataDirectory;
use crate::infrastructure::repositories::file_account_lookup::FileAccountLookup;
use crate::infrastructure::repositories::file_group_repository::FileGroupRepository;

pub(super) async fn initialize_data_directory(
    data_root: &Path,
) -> Result<DataDirectory, DomainError> {
    let data_directory = DataDirectory::new(data_root.to_path_buf());
    data_directory.initialize().await?;
    Ok(data_directory)
}

pub(super) fn build_group_service(
    data_directory: &DataDirectory,
    resolver_config: ResolverConfig,
) -> Arc<GroupService> {
    let group_repository: Arc<dyn GroupRepository> = Arc::new(FileGroupRepository::new(
        data_directory.groups().to_path_buf(),
    ));

    let resolver = Arc::new(MembershipResolver::new(
        build_account_lookups(data_directory),
        resolver_config,
    ));

    Arc::new(GroupService::new(group_repository, resolver))
}

/// Build the account stores in probe-priority order.
///
/// `Platform::ALL` is the priority contract; adding a provider means
/// extending that list, not editing resolution logic.
fn build_account_lookups(data_directory: &DataDirectory) -> Vec<Arc<dyn AccountLookup>> {
    Platform::ALL
        .into_iter()
        .map(|platform| {
            Arc::new(FileAccountLookup::new(
                platform,
                data_directory.accounts_for(platform),
            )) as Arc<dyn AccountLookup>
        })
        .collect()
}
