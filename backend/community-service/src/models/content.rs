use chrono::{DateTime, Utc};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use std::fmt;
use utoipa::ToSchema;
use validator::Validate;

/// The read-only content collections served by the API.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ContentKind {
    Group,
    Session,
    Discussion,
    Goal,
    Note,
}

impl ContentKind {
    pub const ALL: [ContentKind; 5] = [
        ContentKind::Group,
        ContentKind::Session,
        ContentKind::Discussion,
        ContentKind::Goal,
        ContentKind::Note,
    ];

    /// Name of the backing collection in the document store.
    pub fn collection(self) -> &'static str {
        match self {
            ContentKind::Group => "group",
            ContentKind::Session => "session",
            ContentKind::Discussion => "discussion",
            ContentKind::Goal => "goal",
            ContentKind::Note => "note",
        }
    }

    /// Number of items returned when the caller does not pass `limit`.
    pub fn default_limit(self) -> usize {
        match self {
            ContentKind::Group => 12,
            ContentKind::Note => 8,
            ContentKind::Session | ContentKind::Discussion | ContentKind::Goal => 6,
        }
    }
}

impl fmt::Display for ContentKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.collection())
    }
}

/// A storage record that can be listed through the content service.
///
/// Stored documents are checked against the record's `Validate` rules on
/// read; failing documents are not served.
pub trait ContentRecord: Serialize + DeserializeOwned + Validate + Send + 'static {
    const KIND: ContentKind;

    /// Hand-authored placeholder records served while the store is unreachable,
    /// already truncated to `limit`.
    fn sample_set(now: DateTime<Utc>, limit: usize) -> Vec<Self>;
}

/// Response body shared by every listing endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ContentPage<T> {
    pub items: Vec<T>,
    /// Set only when `items` are placeholders rather than stored documents.
    #[serde(default, skip_serializing_if = "is_false")]
    pub sample: bool,
}

impl<T> ContentPage<T> {
    pub fn live(items: Vec<T>) -> Self {
        Self {
            items,
            sample: false,
        }
    }

    pub fn sample(items: Vec<T>) -> Self {
        Self {
            items,
            sample: true,
        }
    }
}

fn is_false(value: &bool) -> bool {
    !*value
}

/// Study group
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate, ToSchema)]
pub struct GroupRecord {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[validate(length(min = 1))]
    pub name: String,
    /// Subject or topic
    #[validate(length(min = 1))]
    pub subject: String,
    /// What the group focuses on
    #[validate(length(min = 1))]
    pub description: String,
}

/// Scheduled study session
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate, ToSchema)]
pub struct SessionRecord {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[validate(length(min = 1))]
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub group_id: Option<String>,
    /// Start time of the session (UTC)
    pub start_time: DateTime<Utc>,
    #[serde(default = "default_duration_minutes")]
    #[validate(range(min = 15, max = 300))]
    pub duration_minutes: u16,
}

fn default_duration_minutes() -> u16 {
    60
}

/// Discussion board message
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate, ToSchema)]
pub struct DiscussionRecord {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[validate(length(min = 1))]
    pub author: String,
    #[validate(length(min = 1))]
    pub message: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub group_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
}

/// Member goal
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate, ToSchema)]
pub struct GoalRecord {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[validate(length(min = 1))]
    pub member: String,
    #[validate(length(min = 1))]
    pub content: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub target_date: Option<DateTime<Utc>>,
    /// active/completed; `active` when a stored goal omits it
    #[serde(
        default = "default_goal_status",
        skip_serializing_if = "Option::is_none"
    )]
    pub status: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
}

fn default_goal_status() -> Option<String> {
    Some("active".to_string())
}

/// Downloadable study note
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate, ToSchema)]
pub struct NoteRecord {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[validate(length(min = 1))]
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[validate(length(min = 1))]
    pub download_url: String,
    /// Tags for filtering, in author order
    #[serde(default)]
    pub tag_list: Vec<String>,
}

impl ContentRecord for GroupRecord {
    const KIND: ContentKind = ContentKind::Group;

    fn sample_set(_now: DateTime<Utc>, limit: usize) -> Vec<Self> {
        super::samples::groups(limit)
    }
}

impl ContentRecord for SessionRecord {
    const KIND: ContentKind = ContentKind::Session;

    fn sample_set(now: DateTime<Utc>, limit: usize) -> Vec<Self> {
        super::samples::sessions(now, limit)
    }
}

impl ContentRecord for DiscussionRecord {
    const KIND: ContentKind = ContentKind::Discussion;

    fn sample_set(_now: DateTime<Utc>, limit: usize) -> Vec<Self> {
        super::samples::discussions(limit)
    }
}

impl ContentRecord for GoalRecord {
    const KIND: ContentKind = ContentKind::Goal;

    fn sample_set(_now: DateTime<Utc>, limit: usize) -> Vec<Self> {
        super::samples::goals(limit)
    }
}

impl ContentRecord for NoteRecord {
    const KIND: ContentKind = ContentKind::Note;

    fn sample_set(_now: DateTime<Utc>, limit: usize) -> Vec<Self> {
        super::samples::notes(limit)
    }
}
