use std::path::PathBuf;

use chrono::{Duration, Utc};
use rand::random;
use tokio::fs;

use crate::domain::errors::DomainError;
use crate::domain::models::group::Group;
use crate::domain::models::platform::Platform;
use crate::domain::repositories::group_repository::GroupRepository;

use super::FileGroupRepository;

fn unique_temp_root() -> PathBuf {
    std::env::temp_dir().join(format!("relay-admin-group-repo-{}", random::<u64>()))
}

fn setup_repository() -> (FileGroupRepository, PathBuf) {
    let root = unique_temp_root();
    let repository = FileGroupRepository::new(root.join("groups"));
    (repository, root)
}

fn group(id: &str, platform: Platform) -> Group {
    Group::new(id.to_string(), format!("{} pool", id), platform, None)
}

#[tokio::test]
async fn create_then_get_round_trips() {
    let (repository, root) = setup_repository();

    let mut created = group("g1", Platform::Claude);
    created.members = vec!["m1".to_string(), "m2".to_string()];
    repository
        .create_group(&created)
        .await
        .expect("create should succeed");

    let loaded = repository
        .get_group("g1")
        .await
        .expect("get should succeed")
        .expect("group should exist");

    assert_eq!(loaded.name, "g1 pool");
    assert_eq!(loaded.platform, Platform::Claude);
    assert_eq!(loaded.members, vec!["m1", "m2"]);

    let _ = fs::remove_dir_all(&root).await;
}

#[tokio::test]
async fn get_unknown_group_is_none_not_an_error() {
    let (repository, root) = setup_repository();

    let loaded = repository
        .get_group("missing")
        .await
        .expect("get should succeed");
    assert!(loaded.is_none());

    let _ = fs::remove_dir_all(&root).await;
}

#[tokio::test]
async fn listing_is_in_creation_order() {
    let (repository, root) = setup_repository();

    let base = Utc::now();
    for (offset, id) in [(2, "late"), (0, "early"), (1, "middle")] {
        let mut group = group(id, Platform::Gemini);
        group.created_at = base + Duration::seconds(offset);
        group.updated_at = group.created_at;
        repository
            .create_group(&group)
            .await
            .expect("create should succeed");
    }

    let listed = repository
        .get_all_groups()
        .await
        .expect("list should succeed");
    let listed_ids: Vec<&str> = listed.iter().map(|group| group.id.as_str()).collect();

    assert_eq!(listed_ids, vec!["early", "middle", "late"]);

    let _ = fs::remove_dir_all(&root).await;
}

#[tokio::test]
async fn groups_survive_a_cache_clear() {
    let (repository, root) = setup_repository();

    repository
        .create_group(&group("g1", Platform::Openai))
        .await
        .expect("create should succeed");

    repository
        .clear_cache()
        .await
        .expect("clear cache should succeed");

    let loaded = repository
        .get_group("g1")
        .await
        .expect("get should succeed")
        .expect("group should be reloaded from disk");
    assert_eq!(loaded.platform, Platform::Openai);

    let _ = fs::remove_dir_all(&root).await;
}

#[tokio::test]
async fn update_unknown_group_is_not_found() {
    let (repository, root) = setup_repository();

    let error = repository
        .update_group(&group("missing", Platform::Claude))
        .await
        .expect_err("update of unknown group should fail");

    assert!(matches!(error, DomainError::NotFound(_)));

    let _ = fs::remove_dir_all(&root).await;
}

#[tokio::test]
async fn second_delete_reports_not_found() {
    let (repository, root) = setup_repository();

    repository
        .create_group(&group("g1", Platform::ClaudeConsole))
        .await
        .expect("create should succeed");

    repository
        .delete_group("g1")
        .await
        .expect("first delete should succeed");

    let error = repository
        .delete_group("g1")
        .await
        .expect_err("second delete should fail");
    assert!(matches!(error, DomainError::NotFound(_)));

    let _ = fs::remove_dir_all(&root).await;
}
