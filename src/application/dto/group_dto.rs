use crate::domain::models::group::Group;
use crate::domain::models::platform::Platform;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// DTO for group responses
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GroupDto {
    /// Unique identifier for the group
    pub id: String,

    /// Display name of the group
    pub name: String,

    /// Provider kind this group is scoped to
    pub platform: Platform,

    /// Optional free-text description
    #[serde(default)]
    pub description: Option<String>,

    /// Account identifiers that are members of this group
    #[serde(default)]
    pub members: Vec<String>,

    /// Creation timestamp
    pub created_at: DateTime<Utc>,

    /// Last mutation timestamp
    pub updated_at: DateTime<Utc>,
}

/// DTO for creating a new group
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateGroupDto {
    /// Display name of the group
    pub name: String,

    /// Provider kind the group is scoped to; an unrecognized value fails
    /// deserialization before the service is reached
    pub platform: Platform,

    /// Optional free-text description
    #[serde(default)]
    pub description: Option<String>,

    /// Initial members (optional); duplicates are silently dropped
    #[serde(default)]
    pub members: Option<Vec<String>>,
}

/// DTO for updating a group; only supplied fields are merged
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UpdateGroupDto {
    /// Unique identifier for the group
    pub id: String,

    /// New display name
    #[serde(default)]
    pub name: Option<String>,

    /// The group's platform, if echoed back by the caller. The platform is
    /// immutable; a value differing from the stored one is rejected.
    #[serde(default)]
    pub platform: Option<Platform>,

    /// New description
    #[serde(default)]
    pub description: Option<String>,

    /// Replacement member list; duplicates are silently dropped
    #[serde(default)]
    pub members: Option<Vec<String>>,
}

/// DTO for deleting a group
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DeleteGroupDto {
    /// Unique identifier for the group to delete
    pub id: String,
}

// Conversion implementations
impl From<Group> for GroupDto {
    fn from(group: Group) -> Self {
        Self {
            id: group.id,
            name: group.name,
            platform: group.platform,
            description: group.description,
            members: group.members,
            created_at: group.created_at,
            updated_at: group.updated_at,
        }
    }
}
