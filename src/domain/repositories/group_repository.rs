use crate::domain::errors::DomainError;
use crate::domain::models::group::Group;
use async_trait::async_trait;

/// Repository interface for Group entities
#[async_trait]
pub trait GroupRepository: Send + Sync {
    /// Get all groups, in creation order
    async fn get_all_groups(&self) -> Result<Vec<Group>, DomainError>;

    /// Get a group by ID; `Ok(None)` for an unknown id
    async fn get_group(&self, id: &str) -> Result<Option<Group>, DomainError>;

    /// Persist a new group
    async fn create_group(&self, group: &Group) -> Result<Group, DomainError>;

    /// Replace an existing group; fails with `NotFound` for an unknown id
    async fn update_group(&self, group: &Group) -> Result<Group, DomainError>;

    /// Delete a group by ID; fails with `NotFound` for an unknown id
    async fn delete_group(&self, id: &str) -> Result<(), DomainError>;

    /// Clear the group cache (if implemented)
    async fn clear_cache(&self) -> Result<(), DomainError>;
}
