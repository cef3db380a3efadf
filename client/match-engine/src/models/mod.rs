use std::collections::HashSet;
use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Opaque project post identifier.
///
/// Upstream keys posts with numeric ids, but the favorites store keeps them
/// as text, so the engine carries them as text end to end.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PostId(String);

impl PostId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<i64> for PostId {
    fn from(id: i64) -> Self {
        Self(id.to_string())
    }
}

impl From<&str> for PostId {
    fn from(id: &str) -> Self {
        Self(id.to_string())
    }
}

impl fmt::Display for PostId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A published project looking for collaborators.
///
/// The author fields are denormalised from the owning profile by the backend
/// join; any of them may be missing on partial records and deserialize to
/// their neutral defaults. `tags` is free-form: it may contain duplicates and
/// may or may not repeat the category.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProjectPost {
    pub id: PostId,
    pub title: String,
    pub description: String,
    pub category: String,
    #[serde(default)]
    pub tags: Vec<String>,
    pub author_id: Uuid,
    #[serde(default)]
    pub author_name: String,
    #[serde(default)]
    pub author_role: String,
    #[serde(default)]
    pub author_avatar: Option<String>,
    #[serde(default)]
    pub image: Option<String>,
    pub created_at: DateTime<Utc>,
}

/// One entry of a profile's work history. Every field is optional upstream.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ExperienceEntry {
    #[serde(default)]
    pub role: Option<String>,
    #[serde(default)]
    pub company: Option<String>,
    #[serde(default)]
    pub period: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
}

/// A public user profile.
///
/// `skills` distinguishes an absent upstream field (`None`, the record never
/// listed skills) from a present-but-empty list (`Some(vec![])`). The two
/// behave differently in profile-to-profile matching: an absent field opts
/// the profile out of scoring entirely, an empty list still participates in
/// the role-complementarity bonus.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Profile {
    pub id: Uuid,
    pub name: String,
    #[serde(default)]
    pub bio: Option<String>,
    /// Free-form role text, conventionally "Founder" or "Co-founder" in
    /// whatever casing the user typed.
    #[serde(default)]
    pub role: String,
    /// Free-form availability text driving the tri-state card badge.
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub skills: Option<Vec<String>>,
    #[serde(default)]
    pub experience: Vec<ExperienceEntry>,
    #[serde(default)]
    pub avatar: Option<String>,
    pub created_at: DateTime<Utc>,
}

/// The authenticated viewer: their own profile plus the favorite-membership
/// sets read by the feed renderer. Absent entirely for anonymous sessions.
#[derive(Debug, Clone)]
pub struct CurrentUser {
    pub profile: Profile,
    pub favorite_projects: HashSet<PostId>,
    pub favorite_profiles: HashSet<Uuid>,
}

impl CurrentUser {
    pub fn new(profile: Profile) -> Self {
        Self {
            profile,
            favorite_projects: HashSet::new(),
            favorite_profiles: HashSet::new(),
        }
    }

    /// The viewer's skills with the absent field flattened to empty, for
    /// project-tag matching where the distinction does not change the score.
    pub fn skills(&self) -> &[String] {
        self.profile.skills.as_deref().unwrap_or(&[])
    }
}

/// Which favorites collection an id belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FavoriteKind {
    Project,
    User,
}

impl FavoriteKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            FavoriteKind::Project => "project",
            FavoriteKind::User => "user",
        }
    }
}

/// The tab the viewer is currently on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ActiveView {
    #[default]
    Projects,
    People,
}

impl ActiveView {
    pub fn as_str(&self) -> &'static str {
        match self {
            ActiveView::Projects => "projects",
            ActiveView::People => "cofounders",
        }
    }
}
