use std::path::Path;
use std::sync::Arc;

use crate::application::services::group_service::GroupService;
use crate::application::services::membership_resolver::ResolverConfig;
use crate::domain::errors::DomainError;
use crate::infrastructure::persistence::file_system::DataDirectory;

mod bootstrap;

/// Wired application state handed to the transport layer.
///
/// Callers are expected to have performed the administrative credential
/// check before invoking anything on the services held here.
pub struct AppState {
    pub data_directory: DataDirectory,
    pub group_service: Arc<GroupService>,
}

impl AppState {
    pub async fn new(
        data_root: &Path,
        resolver_config: ResolverConfig,
    ) -> Result<Self, DomainError> {
        tracing::info!("Initializing application with data root: {:?}", data_root);

        let data_directory = bootstrap::initialize_data_directory(data_root).await?;
        let group_service = bootstrap::build_group_service(&data_directory, resolver_config);

        tracing::info!("Application initialized successfully");

        Ok(Self {
            data_directory,
            group_service,
        })
    }
}
