use std::cmp::Reverse;

use tracing::{debug, info};

use crate::models::{CurrentUser, Profile, ProjectPost};
use crate::services::scoring::{self, MatchTier};

/// How many recommendations each rail shows by default.
pub const DEFAULT_RECOMMENDATION_LIMIT: usize = 5;

/// A post with its match score and badge tier attached.
#[derive(Debug, Clone)]
pub struct ScoredPost {
    pub post: ProjectPost,
    pub score: u32,
    pub tier: MatchTier,
}

/// A profile with its match score and badge tier attached.
#[derive(Debug, Clone)]
pub struct ScoredProfile {
    pub profile: Profile,
    pub score: u32,
    pub tier: MatchTier,
}

/// Ranks the full in-memory collection for the recommendation rails.
///
/// Scores every candidate, drops non-positive scores, sorts descending and
/// keeps the top N. The sort is stable, so candidates with equal scores keep
/// the collection's natural (most-recent-first) order.
pub struct RecommendationLayer {
    limit: usize,
}

impl Default for RecommendationLayer {
    fn default() -> Self {
        Self::new()
    }
}

impl RecommendationLayer {
    pub fn new() -> Self {
        Self {
            limit: DEFAULT_RECOMMENDATION_LIMIT,
        }
    }

    pub fn with_limit(limit: usize) -> Self {
        Self { limit }
    }

    /// Top project matches for the viewer. Anonymous viewers get nothing.
    pub fn recommend_projects(
        &self,
        viewer: Option<&CurrentUser>,
        posts: &[ProjectPost],
    ) -> Vec<ScoredPost> {
        let Some(viewer) = viewer else {
            return Vec::new();
        };
        let skills = viewer.skills();

        let mut scored: Vec<ScoredPost> = posts
            .iter()
            .filter_map(|post| {
                let score = scoring::score_project_match(skills, &post.tags);
                debug!(post_id = %post.id, score, "project match scored");
                (score > 0).then(|| ScoredPost {
                    post: post.clone(),
                    score,
                    tier: MatchTier::for_project(score),
                })
            })
            .collect();

        scored.sort_by_key(|entry| Reverse(entry.score));
        scored.truncate(self.limit);

        info!(
            candidates = posts.len(),
            recommended = scored.len(),
            "project recommendations ranked"
        );

        scored
    }

    /// Top profile matches for the viewer. Anonymous viewers get nothing;
    /// the viewer's own profile is excluded by the scorer.
    pub fn recommend_profiles(
        &self,
        viewer: Option<&CurrentUser>,
        profiles: &[Profile],
    ) -> Vec<ScoredProfile> {
        let Some(viewer) = viewer else {
            return Vec::new();
        };

        let mut scored: Vec<ScoredProfile> = profiles
            .iter()
            .filter_map(|candidate| {
                let score = scoring::score_profile_match(&viewer.profile, candidate);
                debug!(profile_id = %candidate.id, score, "profile match scored");
                (score > 0).then(|| ScoredProfile {
                    profile: candidate.clone(),
                    score,
                    tier: MatchTier::for_profile(score),
                })
            })
            .collect();

        scored.sort_by_key(|entry| Reverse(entry.score));
        scored.truncate(self.limit);

        info!(
            candidates = profiles.len(),
            recommended = scored.len(),
            "profile recommendations ranked"
        );

        scored
    }
}
