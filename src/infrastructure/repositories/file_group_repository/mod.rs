use async_trait::async_trait;
use std::collections::HashMap;
use std::path::PathBuf;
use std::sync::Arc;
use tokio::fs;
use tokio::sync::Mutex;

use crate::domain::errors::DomainError;
use crate::domain::models::group::Group;
use crate::domain::repositories::group_repository::GroupRepository;
use crate::infrastructure::logging::logger;
use crate::infrastructure::persistence::file_system::{
    list_files_with_extension, read_json_file, write_json_file,
};

#[cfg(test)]
mod tests;

/// File-based implementation of the GroupRepository
///
/// Each group is stored as one pretty-printed JSON file under the groups
/// directory, with a write-through in-memory cache on top. Mutations are
/// last-write-wins; there is no per-group versioning.
pub struct FileGroupRepository {
    /// Directory where group files are stored
    groups_dir: PathBuf,

    /// Cache for groups to avoid re-reading files on every call
    cache: Arc<Mutex<HashMap<String, Group>>>,

    /// Flag to indicate if the cache is initialized
    cache_initialized: Arc<Mutex<bool>>,
}

impl FileGroupRepository {
    /// Create a new FileGroupRepository
    pub fn new(groups_dir: PathBuf) -> Self {
        Self {
            groups_dir,
            cache: Arc::new(Mutex::new(HashMap::new())),
            cache_initialized: Arc::new(Mutex::new(false)),
        }
    }

    /// Get the file path for a group
    fn group_file_path(&self, id: &str) -> PathBuf {
        self.groups_dir.join(format!("{}.json", id))
    }

    /// Initialize the cache with all groups
    async fn initialize_cache_if_needed(&self) -> Result<(), DomainError> {
        let mut initialized = self.cache_initialized.lock().await;
        if !*initialized {
            logger::debug("Initializing group cache");

            if !self.groups_dir.exists() {
                fs::create_dir_all(&self.groups_dir).await.map_err(|e| {
                    logger::error(&format!("Failed to create groups directory: {}", e));
                    DomainError::InternalError(format!("Failed to create groups directory: {}", e))
                })?;
            }

            let group_files = list_files_with_extension(&self.groups_dir, "json").await?;

            let mut cache = self.cache.lock().await;

            for file_path in group_files {
                match read_json_file::<Group>(&file_path).await {
                    Ok(group) => {
                        cache.insert(group.id.clone(), group);
                    }
                    Err(e) => {
                        logger::error(&format!("Failed to load group from {:?}: {}", file_path, e));
                    }
                }
            }

            *initialized = true;
            logger::debug(&format!(
                "Group cache initialized with {} groups",
                cache.len()
            ));
        }

        Ok(())
    }
}

#[async_trait]
impl GroupRepository for FileGroupRepository {
    async fn get_all_groups(&self) -> Result<Vec<Group>, DomainError> {
        self.initialize_cache_if_needed().await?;

        let cache = self.cache.lock().await;
        let mut groups: Vec<Group> = cache.values().cloned().collect();

        // Creation order, with the id as a deterministic tie-breaker
        groups.sort_by(|a, b| {
            a.created_at
                .cmp(&b.created_at)
                .then_with(|| a.id.cmp(&b.id))
        });

        Ok(groups)
    }

    async fn get_group(&self, id: &str) -> Result<Option<Group>, DomainError> {
        self.initialize_cache_if_needed().await?;

        let cache = self.cache.lock().await;
        let group = cache.get(id).cloned();

        Ok(group)
    }

    async fn create_group(&self, group: &Group) -> Result<Group, DomainError> {
        self.initialize_cache_if_needed().await?;

        let file_path = self.group_file_path(&group.id);
        write_json_file(&file_path, group).await?;

        let mut cache = self.cache.lock().await;
        cache.insert(group.id.clone(), group.clone());

        Ok(group.clone())
    }

    async fn update_group(&self, group: &Group) -> Result<Group, DomainError> {
        self.initialize_cache_if_needed().await?;

        let file_path = self.group_file_path(&group.id);

        if !file_path.exists() {
            return Err(DomainError::NotFound(format!(
                "Group not found: {}",
                group.id
            )));
        }

        write_json_file(&file_path, group).await?;

        let mut cache = self.cache.lock().await;
        cache.insert(group.id.clone(), group.clone());

        Ok(group.clone())
    }

    async fn delete_group(&self, id: &str) -> Result<(), DomainError> {
        self.initialize_cache_if_needed().await?;

        let file_path = self.group_file_path(id);

        if !file_path.exists() {
            return Err(DomainError::NotFound(format!("Group not found: {}", id)));
        }

        // Only the group and its membership set go away; account records are
        // owned by the provider stores and are never touched from here
        fs::remove_file(&file_path).await.map_err(|e| {
            logger::error(&format!(
                "Failed to delete group file {:?}: {}",
                file_path, e
            ));
            DomainError::InternalError(format!("Failed to delete group file: {}", e))
        })?;

        let mut cache = self.cache.lock().await;
        cache.remove(id);

        Ok(())
    }

    async fn clear_cache(&self) -> Result<(), DomainError> {
        let mut cache = self.cache.lock().await;
        cache.clear();

        let mut initialized = self.cache_initialized.lock().await;
        *initialized = false;

        logger::debug("Group cache cleared");
        Ok(())
    }
}
