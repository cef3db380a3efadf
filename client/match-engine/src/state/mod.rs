//! Session-scoped application state.
//!
//! One explicit state object replaces the page-global collections the feed
//! used to hang off: the two collection caches, the authenticated viewer and
//! their favorite sets. Scoring and filter output is never written back into
//! the caches; every render derives from them fresh.

use tracing::debug;
use uuid::Uuid;

use crate::models::{CurrentUser, PostId, Profile, ProjectPost};

/// Where a collection cache is in its load lifecycle.
///
/// `Stale` means a refetch is in flight while the previous items remain
/// renderable. Late-arriving results always land in the cache regardless of
/// which view is active; visibility is decided at render time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LoadPhase {
    #[default]
    Empty,
    Loading,
    Loaded,
    Stale,
}

/// An in-memory collection plus its load phase.
#[derive(Debug, Clone)]
pub struct CollectionCache<T> {
    items: Vec<T>,
    phase: LoadPhase,
}

impl<T> Default for CollectionCache<T> {
    fn default() -> Self {
        Self {
            items: Vec::new(),
            phase: LoadPhase::Empty,
        }
    }
}

impl<T> CollectionCache<T> {
    pub fn phase(&self) -> LoadPhase {
        self.phase
    }

    pub fn items(&self) -> &[T] {
        &self.items
    }

    /// Whether a completed load has ever populated this cache. True while
    /// stale: the previous snapshot stays renderable during a refetch.
    pub fn has_loaded(&self) -> bool {
        matches!(self.phase, LoadPhase::Loaded | LoadPhase::Stale)
    }

    pub fn begin_load(&mut self) {
        self.phase = match self.phase {
            LoadPhase::Empty | LoadPhase::Loading => LoadPhase::Loading,
            LoadPhase::Loaded | LoadPhase::Stale => LoadPhase::Stale,
        };
    }

    /// Install a completed fetch. Late results are applied unconditionally;
    /// the most recently resolved collection wins.
    pub fn complete_load(&mut self, items: Vec<T>) {
        self.items = items;
        self.phase = LoadPhase::Loaded;
    }
}

/// All state for one page session.
#[derive(Debug, Default)]
pub struct SessionState {
    pub posts: CollectionCache<ProjectPost>,
    pub profiles: CollectionCache<Profile>,
    pub viewer: Option<CurrentUser>,
}

impl SessionState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sync the local favorites cache after the backend confirmed a toggle.
    /// `now_active` is the backend's answer, which wins over whatever the
    /// optimistic UI assumed. No-op for anonymous sessions.
    pub fn apply_project_favorite(&mut self, id: &PostId, now_active: bool) {
        let Some(viewer) = &mut self.viewer else {
            return;
        };
        if now_active {
            viewer.favorite_projects.insert(id.clone());
        } else {
            viewer.favorite_projects.remove(id);
        }
        debug!(post_id = %id, now_active, "project favorite cache updated");
    }

    /// Profile counterpart of [`Self::apply_project_favorite`].
    pub fn apply_profile_favorite(&mut self, id: Uuid, now_active: bool) {
        let Some(viewer) = &mut self.viewer else {
            return;
        };
        if now_active {
            viewer.favorite_profiles.insert(id);
        } else {
            viewer.favorite_profiles.remove(&id);
        }
        debug!(profile_id = %id, now_active, "profile favorite cache updated");
    }

    /// The viewer's favorited posts, projected from the loaded collection in
    /// its natural order. Empty for anonymous sessions.
    pub fn favorite_projects(&self) -> Vec<ProjectPost> {
        let Some(viewer) = &self.viewer else {
            return Vec::new();
        };
        self.posts
            .items()
            .iter()
            .filter(|post| viewer.favorite_projects.contains(&post.id))
            .cloned()
            .collect()
    }

    /// The viewer's favorited profiles, projected from the loaded collection.
    pub fn favorite_profiles(&self) -> Vec<Profile> {
        let Some(viewer) = &self.viewer else {
            return Vec::new();
        };
        self.profiles
            .items()
            .iter()
            .filter(|profile| viewer.favorite_profiles.contains(&profile.id))
            .cloned()
            .collect()
    }
}
