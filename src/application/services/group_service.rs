use std::sync::Arc;

use chrono::Utc;
use uuid::Uuid;

use crate::application::dto::group_dto::{CreateGroupDto, DeleteGroupDto, UpdateGroupDto};
use crate::application::services::membership_resolver::MembershipResolver;
use crate::domain::errors::DomainError;
use crate::domain::models::account::Account;
use crate::domain::models::group::{dedup_members, Group};
use crate::domain::models::platform::Platform;
use crate::domain::repositories::group_repository::GroupRepository;
use crate::infrastructure::logging::logger;

/// Service for managing account groups
pub struct GroupService {
    /// Repository for group data
    repository: Arc<dyn GroupRepository>,

    /// Resolver turning member ids into account records
    resolver: Arc<MembershipResolver>,
}

impl GroupService {
    /// Create a new GroupService
    pub fn new(repository: Arc<dyn GroupRepository>, resolver: Arc<MembershipResolver>) -> Self {
        Self {
            repository,
            resolver,
        }
    }

    /// Get all groups, optionally restricted to one platform
    pub async fn get_all_groups(
        &self,
        platform: Option<Platform>,
    ) -> Result<Vec<Group>, DomainError> {
        logger::debug("GroupService: Getting all groups");

        let groups = self.repository.get_all_groups().await?;

        Ok(match platform {
            Some(platform) => groups
                .into_iter()
                .filter(|group| group.platform == platform)
                .collect(),
            None => groups,
        })
    }

    /// Get a group by ID
    pub async fn get_group(&self, id: &str) -> Result<Option<Group>, DomainError> {
        logger::debug(&format!("GroupService: Getting group {}", id));
        self.repository.get_group(id).await
    }

    /// Create a new group
    pub async fn create_group(&self, dto: CreateGroupDto) -> Result<Group, DomainError> {
        logger::debug(&format!("GroupService: Creating group {}", dto.name));

        let name = dto.name.trim();
        if name.is_empty() {
            return Err(DomainError::InvalidData(
                "Group name must not be empty".to_string(),
            ));
        }

        let mut group = Group::new(
            Uuid::new_v4().to_string(),
            name.to_string(),
            dto.platform,
            dto.description,
        );
        group.members = dedup_members(dto.members.unwrap_or_default());

        self.repository.create_group(&group).await
    }

    /// Update an existing group; only supplied fields are merged, the
    /// platform can never change
    pub async fn update_group(&self, dto: UpdateGroupDto) -> Result<Group, DomainError> {
        logger::debug(&format!("GroupService: Updating group {}", dto.id));

        let existing_group = self
            .repository
            .get_group(&dto.id)
            .await?
            .ok_or_else(|| DomainError::NotFound(format!("Group not found: {}", dto.id)))?;

        if let Some(platform) = dto.platform {
            if platform != existing_group.platform {
                return Err(DomainError::InvalidData(format!(
                    "Group platform is immutable: {} is scoped to {}",
                    dto.id, existing_group.platform
                )));
            }
        }

        let name = match dto.name {
            Some(name) => {
                let name = name.trim().to_string();
                if name.is_empty() {
                    return Err(DomainError::InvalidData(
                        "Group name must not be empty".to_string(),
                    ));
                }
                name
            }
            None => existing_group.name,
        };

        let updated_group = Group {
            id: existing_group.id,
            name,
            platform: existing_group.platform,
            description: dto.description.or(existing_group.description),
            members: dto
                .members
                .map(dedup_members)
                .unwrap_or(existing_group.members),
            created_at: existing_group.created_at,
            updated_at: Utc::now(),
        };

        self.repository.update_group(&updated_group).await
    }

    /// Delete a group
    pub async fn delete_group(&self, dto: DeleteGroupDto) -> Result<(), DomainError> {
        logger::debug(&format!("GroupService: Deleting group {}", dto.id));
        self.repository.delete_group(&dto.id).await
    }

    /// Get a group's member identifiers, without resolution.
    ///
    /// An unknown group id is `NotFound`; an existing group with no members
    /// yields an empty list. The two outcomes are never conflated here even
    /// if a transport shim chooses to collapse them.
    pub async fn get_group_members(&self, id: &str) -> Result<Vec<String>, DomainError> {
        logger::debug(&format!("GroupService: Getting members of group {}", id));

        let group = self
            .repository
            .get_group(id)
            .await?
            .ok_or_else(|| DomainError::NotFound(format!("Group not found: {}", id)))?;

        Ok(group.members)
    }

    /// Resolve a group's members into account records.
    ///
    /// Member ids no account store knows are dropped; the result keeps the
    /// membership order.
    pub async fn get_resolved_members(&self, id: &str) -> Result<Vec<Account>, DomainError> {
        logger::debug(&format!("GroupService: Resolving members of group {}", id));

        let members = self.get_group_members(id).await?;
        self.resolver.resolve_members(&members).await
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use async_trait::async_trait;
    use tokio::sync::Mutex;

    use super::*;
    use crate::application::services::membership_resolver::ResolverConfig;
    use crate::domain::repositories::account_lookup::AccountLookup;

    /// In-memory repository preserving creation order.
    #[derive(Default)]
    struct InMemoryGroupRepository {
        groups: Mutex<Vec<Group>>,
    }

    #[async_trait]
    impl GroupRepository for InMemoryGroupRepository {
        async fn get_all_groups(&self) -> Result<Vec<Group>, DomainError> {
            Ok(self.groups.lock().await.clone())
        }

        async fn get_group(&self, id: &str) -> Result<Option<Group>, DomainError> {
            let groups = self.groups.lock().await;
            Ok(groups.iter().find(|group| group.id == id).cloned())
        }

        async fn create_group(&self, group: &Group) -> Result<Group, DomainError> {
            self.groups.lock().await.push(group.clone());
            Ok(group.clone())
        }

        async fn update_group(&self, group: &Group) -> Result<Group, DomainError> {
            let mut groups = self.groups.lock().await;
            let slot = groups
                .iter_mut()
                .find(|candidate| candidate.id == group.id)
                .ok_or_else(|| DomainError::NotFound(format!("Group not found: {}", group.id)))?;
            *slot = group.clone();
            Ok(group.clone())
        }

        async fn delete_group(&self, id: &str) -> Result<(), DomainError> {
            let mut groups = self.groups.lock().await;
            let index = groups
                .iter()
                .position(|group| group.id == id)
                .ok_or_else(|| DomainError::NotFound(format!("Group not found: {}", id)))?;
            groups.remove(index);
            Ok(())
        }

        async fn clear_cache(&self) -> Result<(), DomainError> {
            Ok(())
        }
    }

    struct StaticLookup {
        platform: Platform,
        accounts: HashMap<String, Account>,
    }

    impl StaticLookup {
        fn new(platform: Platform, ids: &[&str]) -> Self {
            let accounts = ids
                .iter()
                .map(|id| {
                    (
                        id.to_string(),
                        Account {
                            id: id.to_string(),
                            name: format!("{} account", id),
                            platform,
                            extra: serde_json::Map::new(),
                        },
                    )
                })
                .collect();

            Self { platform, accounts }
        }
    }

    #[async_trait]
    impl AccountLookup for StaticLookup {
        fn platform(&self) -> Platform {
            self.platform
        }

        async fn lookup_account(&self, id: &str) -> Result<Option<Account>, DomainError> {
            Ok(self.accounts.get(id).cloned())
        }
    }

    fn service_with_lookups(lookups: Vec<Arc<dyn AccountLookup>>) -> GroupService {
        let repository = Arc::new(InMemoryGroupRepository::default());
        let resolver = Arc::new(MembershipResolver::new(lookups, ResolverConfig::default()));
        GroupService::new(repository, resolver)
    }

    fn service() -> GroupService {
        service_with_lookups(Vec::new())
    }

    fn create_dto(name: &str, platform: Platform) -> CreateGroupDto {
        CreateGroupDto {
            name: name.to_string(),
            platform,
            description: None,
            members: None,
        }
    }

    #[tokio::test]
    async fn create_group_succeeds_for_every_platform() {
        let service = service();

        for platform in Platform::ALL {
            let group = service
                .create_group(create_dto("pool", platform))
                .await
                .expect("create should succeed");

            assert_eq!(group.platform, platform);
            assert!(group.members.is_empty());
        }
    }

    #[tokio::test]
    async fn create_group_rejects_blank_name() {
        let service = service();

        let error = service
            .create_group(create_dto("   ", Platform::Claude))
            .await
            .expect_err("blank name should be rejected");

        assert!(matches!(error, DomainError::InvalidData(_)));
    }

    #[tokio::test]
    async fn create_group_dedups_initial_members() {
        let service = service();

        let group = service
            .create_group(CreateGroupDto {
                name: "pool".to_string(),
                platform: Platform::Gemini,
                description: None,
                members: Some(vec![
                    "a".to_string(),
                    "b".to_string(),
                    "a".to_string(),
                ]),
            })
            .await
            .expect("create should succeed");

        assert_eq!(group.members, vec!["a", "b"]);
    }

    #[tokio::test]
    async fn update_group_rejects_platform_change() {
        let service = service();

        let group = service
            .create_group(create_dto("pool", Platform::Claude))
            .await
            .expect("create should succeed");

        let error = service
            .update_group(UpdateGroupDto {
                id: group.id.clone(),
                name: None,
                platform: Some(Platform::Openai),
                description: None,
                members: None,
            })
            .await
            .expect_err("platform change should be rejected");

        assert!(matches!(error, DomainError::InvalidData(_)));

        let stored = service
            .get_group(&group.id)
            .await
            .expect("get should succeed")
            .expect("group should still exist");
        assert_eq!(stored.platform, Platform::Claude);
    }

    #[tokio::test]
    async fn update_group_rejects_blank_name() {
        let service = service();

        let group = service
            .create_group(create_dto("pool", Platform::Gemini))
            .await
            .expect("create should succeed");

        let error = service
            .update_group(UpdateGroupDto {
                id: group.id.clone(),
                name: Some("   ".to_string()),
                platform: None,
                description: None,
                members: None,
            })
            .await
            .expect_err("blank name should be rejected");

        assert!(matches!(error, DomainError::InvalidData(_)));

        let stored = service
            .get_group(&group.id)
            .await
            .expect("get should succeed")
            .expect("group should still exist");
        assert_eq!(stored.name, "pool");
    }

    #[tokio::test]
    async fn update_group_merges_partial_fields() {
        let service = service();

        let group = service
            .create_group(CreateGroupDto {
                name: "pool".to_string(),
                platform: Platform::Claude,
                description: Some("primary pool".to_string()),
                members: None,
            })
            .await
            .expect("create should succeed");

        let updated = service
            .update_group(UpdateGroupDto {
                id: group.id.clone(),
                name: Some("renamed".to_string()),
                platform: Some(Platform::Claude),
                description: None,
                members: Some(vec!["m1".to_string(), "m1".to_string(), "m2".to_string()]),
            })
            .await
            .expect("update should succeed");

        assert_eq!(updated.name, "renamed");
        assert_eq!(updated.description.as_deref(), Some("primary pool"));
        assert_eq!(updated.members, vec!["m1", "m2"]);
        assert_eq!(updated.created_at, group.created_at);
        assert!(updated.updated_at >= group.updated_at);
    }

    #[tokio::test]
    async fn update_unknown_group_is_not_found() {
        let service = service();

        let error = service
            .update_group(UpdateGroupDto {
                id: "missing".to_string(),
                name: Some("renamed".to_string()),
                platform: None,
                description: None,
                members: None,
            })
            .await
            .expect_err("unknown id should be rejected");

        assert!(matches!(error, DomainError::NotFound(_)));
    }

    #[tokio::test]
    async fn delete_group_twice_reports_not_found_on_second_call() {
        let service = service();

        let group = service
            .create_group(create_dto("pool", Platform::Gemini))
            .await
            .expect("create should succeed");

        service
            .delete_group(DeleteGroupDto {
                id: group.id.clone(),
            })
            .await
            .expect("first delete should succeed");

        let error = service
            .delete_group(DeleteGroupDto { id: group.id })
            .await
            .expect_err("second delete should report not found");

        assert!(matches!(error, DomainError::NotFound(_)));
    }

    #[tokio::test]
    async fn get_all_groups_filters_by_platform() {
        let service = service();

        for (name, platform) in [
            ("claude-pool", Platform::Claude),
            ("console-pool", Platform::ClaudeConsole),
            ("gemini-pool", Platform::Gemini),
        ] {
            service
                .create_group(create_dto(name, platform))
                .await
                .expect("create should succeed");
        }

        for platform in Platform::ALL {
            let groups = service
                .get_all_groups(Some(platform))
                .await
                .expect("list should succeed");
            assert!(groups.iter().all(|group| group.platform == platform));
        }

        let all = service
            .get_all_groups(None)
            .await
            .expect("list should succeed");
        assert_eq!(all.len(), 3);
    }

    #[tokio::test]
    async fn members_of_unknown_group_is_not_found_not_empty() {
        let service = service();

        let error = service
            .get_group_members("missing")
            .await
            .expect_err("unknown group should be not found");
        assert!(matches!(error, DomainError::NotFound(_)));

        let group = service
            .create_group(create_dto("pool", Platform::Openai))
            .await
            .expect("create should succeed");

        let members = service
            .get_group_members(&group.id)
            .await
            .expect("existing empty group should yield empty list");
        assert!(members.is_empty());
    }

    #[tokio::test]
    async fn resolved_members_keep_order_and_drop_unknown_ids() {
        let service = service_with_lookups(vec![
            Arc::new(StaticLookup::new(Platform::Claude, &["a"])),
            Arc::new(StaticLookup::new(Platform::Gemini, &["b"])),
        ]);

        let group = service
            .create_group(CreateGroupDto {
                name: "pool".to_string(),
                platform: Platform::Claude,
                description: None,
                members: Some(vec!["a".to_string(), "b".to_string(), "c".to_string()]),
            })
            .await
            .expect("create should succeed");

        let resolved = service
            .get_resolved_members(&group.id)
            .await
            .expect("resolution should succeed");

        let resolved_ids: Vec<&str> = resolved.iter().map(|account| account.id.as_str()).collect();
        assert_eq!(resolved_ids, vec!["a", "b"]);
    }

    #[tokio::test]
    async fn resolving_members_of_unknown_group_is_not_found() {
        let service = service();

        let error = service
            .get_resolved_members("missing")
            .await
            .expect_err("unknown group should be not found");

        assert!(matches!(error, DomainError::NotFound(_)));
    }
}
