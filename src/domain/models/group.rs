use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::models::platform::Platform;

/// Group model representing a named, platform-scoped pool of upstream
/// account identifiers
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Group {
    /// Unique identifier for the group, assigned at creation
    pub id: String,

    /// Display name of the group
    pub name: String,

    /// Provider kind this group is scoped to; fixed at creation
    pub platform: Platform,

    /// Optional free-text description
    #[serde(default)]
    pub description: Option<String>,

    /// Account identifiers that are members of this group, deduplicated,
    /// in insertion order
    #[serde(default)]
    pub members: Vec<String>,

    /// When the group was created
    pub created_at: DateTime<Utc>,

    /// When the group was last mutated
    pub updated_at: DateTime<Utc>,
}

impl Group {
    /// Create a new group with basic information and empty membership
    pub fn new(id: String, name: String, platform: Platform, description: Option<String>) -> Self {
        let now = Utc::now();

        Self {
            id,
            name,
            platform,
            description,
            members: Vec::new(),
            created_at: now,
            updated_at: now,
        }
    }
}

/// Deduplicate a member-id list, keeping the first occurrence of each id in
/// its original position.
pub fn dedup_members(members: Vec<String>) -> Vec<String> {
    let mut seen = std::collections::HashSet::with_capacity(members.len());
    members
        .into_iter()
        .filter(|member| seen.insert(member.clone()))
        .collect()
}
