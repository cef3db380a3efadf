//! Client seam to the hosted backend.
//!
//! The engine never talks to the network itself; implementations of
//! [`DataClient`] wrap whatever SDK the host application uses. Fetches may
//! fail, and the loaders here degrade every failure to an empty result with
//! a logged diagnostic, so a dead backend renders as the empty feed rather
//! than aborting the session.

use std::collections::HashSet;

use anyhow::Result;
use async_trait::async_trait;
use tracing::{info, warn};
use uuid::Uuid;

use crate::models::{CurrentUser, FavoriteKind, PostId, Profile, ProjectPost};
use crate::state::SessionState;

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait DataClient: Send + Sync {
    /// All public project posts, most recent first.
    async fn fetch_all_posts(&self) -> Result<Vec<ProjectPost>>;

    /// All public profiles, most recent first.
    async fn fetch_all_profiles(&self) -> Result<Vec<Profile>>;

    /// The authenticated viewer's profile, or `None` for anonymous sessions.
    async fn fetch_current_viewer(&self) -> Result<Option<Profile>>;

    /// The viewer's favorite ids of one kind, as the text ids the favorites
    /// store keeps.
    async fn fetch_favorite_ids(&self, kind: FavoriteKind) -> Result<Vec<String>>;
}

/// Load a full session: viewer, favorites, then both collections.
///
/// Every fetch degrades independently, so e.g. a failing favorites query
/// still leaves the feeds usable.
pub async fn load_session(client: &dyn DataClient) -> SessionState {
    let mut state = SessionState::new();
    state.posts.begin_load();
    state.profiles.begin_load();

    let viewer = match client.fetch_current_viewer().await {
        Ok(viewer) => viewer,
        Err(error) => {
            warn!(%error, "viewer fetch failed, continuing anonymously");
            None
        }
    };

    if let Some(profile) = viewer {
        let mut user = CurrentUser::new(profile);
        user.favorite_projects = fetch_project_favorites(client).await;
        user.favorite_profiles = fetch_profile_favorites(client).await;
        state.viewer = Some(user);
    }

    let (posts, profiles) = tokio::join!(
        fetch_posts_or_empty(client),
        fetch_profiles_or_empty(client)
    );
    state.posts.complete_load(posts);
    state.profiles.complete_load(profiles);

    info!(
        posts = state.posts.items().len(),
        profiles = state.profiles.items().len(),
        signed_in = state.viewer.is_some(),
        "session loaded"
    );

    state
}

/// Fetch posts, degrading a failure to an empty collection.
pub async fn fetch_posts_or_empty(client: &dyn DataClient) -> Vec<ProjectPost> {
    match client.fetch_all_posts().await {
        Ok(posts) => posts,
        Err(error) => {
            warn!(%error, "post fetch failed, rendering empty feed");
            Vec::new()
        }
    }
}

/// Fetch profiles, degrading a failure to an empty collection.
pub async fn fetch_profiles_or_empty(client: &dyn DataClient) -> Vec<Profile> {
    match client.fetch_all_profiles().await {
        Ok(profiles) => profiles,
        Err(error) => {
            warn!(%error, "profile fetch failed, rendering empty feed");
            Vec::new()
        }
    }
}

async fn fetch_project_favorites(client: &dyn DataClient) -> HashSet<PostId> {
    match client.fetch_favorite_ids(FavoriteKind::Project).await {
        Ok(ids) => ids.into_iter().map(PostId::new).collect(),
        Err(error) => {
            warn!(%error, "project favorites fetch failed, starting empty");
            HashSet::new()
        }
    }
}

async fn fetch_profile_favorites(client: &dyn DataClient) -> HashSet<Uuid> {
    match client.fetch_favorite_ids(FavoriteKind::User).await {
        Ok(ids) => ids
            .into_iter()
            // Malformed ids are skipped, not fatal.
            .filter_map(|id| Uuid::parse_str(&id).ok())
            .collect(),
        Err(error) => {
            warn!(%error, "profile favorites fetch failed, starting empty");
            HashSet::new()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use anyhow::anyhow;
    use chrono::DateTime;
    use mockall::predicate::eq;

    fn profile(name: &str) -> Profile {
        Profile {
            id: Uuid::new_v4(),
            name: name.to_string(),
            bio: None,
            role: "Founder".to_string(),
            status: None,
            skills: Some(vec!["Rust".to_string()]),
            experience: Vec::new(),
            avatar: None,
            created_at: DateTime::from_timestamp(1_700_000_000, 0).unwrap(),
        }
    }

    #[tokio::test]
    async fn failed_fetches_degrade_to_an_empty_loaded_session() {
        let mut client = MockDataClient::new();
        client
            .expect_fetch_current_viewer()
            .returning(|| Err(anyhow!("auth backend down")));
        client
            .expect_fetch_all_posts()
            .returning(|| Err(anyhow!("posts backend down")));
        client
            .expect_fetch_all_profiles()
            .returning(|| Err(anyhow!("profiles backend down")));

        let state = load_session(&client).await;
        assert!(state.viewer.is_none());
        assert!(state.posts.has_loaded());
        assert!(state.posts.items().is_empty());
        assert!(state.profiles.has_loaded());
        assert!(state.profiles.items().is_empty());
    }

    #[tokio::test]
    async fn signed_in_session_loads_both_favorite_sets() {
        let viewer_profile = profile("Viewer");
        let other = profile("Other");
        let other_id = other.id;

        let mut client = MockDataClient::new();
        let returned = viewer_profile.clone();
        client
            .expect_fetch_current_viewer()
            .returning(move || Ok(Some(returned.clone())));
        client
            .expect_fetch_favorite_ids()
            .with(eq(FavoriteKind::Project))
            .returning(|_| Ok(vec!["42".to_string()]));
        client
            .expect_fetch_favorite_ids()
            .with(eq(FavoriteKind::User))
            .returning(move |_| Ok(vec![other_id.to_string(), "not-a-uuid".to_string()]));
        client.expect_fetch_all_posts().returning(|| Ok(Vec::new()));
        let profiles = vec![other];
        client
            .expect_fetch_all_profiles()
            .returning(move || Ok(profiles.clone()));

        let state = load_session(&client).await;
        let viewer = state.viewer.expect("viewer should be present");
        assert!(viewer.favorite_projects.contains(&PostId::from(42)));
        assert_eq!(viewer.favorite_profiles.len(), 1);
        assert!(viewer.favorite_profiles.contains(&other_id));
    }

    #[tokio::test]
    async fn anonymous_session_skips_favorites_entirely() {
        let mut client = MockDataClient::new();
        client.expect_fetch_current_viewer().returning(|| Ok(None));
        client.expect_fetch_favorite_ids().never();
        client.expect_fetch_all_posts().returning(|| Ok(Vec::new()));
        client
            .expect_fetch_all_profiles()
            .returning(|| Ok(Vec::new()));

        let state = load_session(&client).await;
        assert!(state.viewer.is_none());
    }
}
