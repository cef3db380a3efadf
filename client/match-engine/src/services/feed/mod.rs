//! Feed composition: turns filtered or scored entities into render records.
//!
//! This layer owns no rendering target. It produces plain records a view
//! layer can draw: entity snapshot, favorite membership, match badge,
//! availability badge and tag previews. Empty results are typed so callers
//! can tell "nothing loaded" apart from "filters matched nothing".

use crate::models::{CurrentUser, Profile, ProjectPost};
use crate::services::recommendation::{ScoredPost, ScoredProfile};
use crate::services::scoring::{self, MatchTier};
use crate::state::CollectionCache;

/// How many skills a full profile card shows before collapsing to "+N".
pub const MAX_CARD_SKILLS: usize = 5;

/// How many tags/skills a compact recommendation card shows.
pub const MAX_COMPACT_TAGS: usize = 2;

/// Availability badge color derived from the profile's free-form status
/// text. The default (no status) reads as actively looking.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AvailabilityBadge {
    Green,
    Yellow,
    Red,
}

impl AvailabilityBadge {
    pub fn from_status(status: Option<&str>) -> Self {
        let Some(status) = status else {
            return AvailabilityBadge::Green;
        };
        let mut badge = AvailabilityBadge::Green;
        if status.contains("Åpen") {
            badge = AvailabilityBadge::Yellow;
        }
        if status.contains("Ikke") {
            badge = AvailabilityBadge::Red;
        }
        badge
    }
}

/// Match badge for a card with a positive score.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScoreBadge {
    pub tier: MatchTier,
    pub score: u32,
}

/// A truncated tag/skill list: the visible prefix plus the overflow count
/// behind the "+N" pill.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TagPreview {
    pub visible: Vec<String>,
    pub hidden: usize,
}

pub fn tag_preview(tags: &[String], max_visible: usize) -> TagPreview {
    let visible: Vec<String> = tags.iter().take(max_visible).cloned().collect();
    TagPreview {
        hidden: tags.len() - visible.len(),
        visible,
    }
}

/// One renderable card.
#[derive(Debug, Clone)]
pub struct FeedCard<T> {
    pub entity: T,
    pub is_favorite: bool,
    pub score_badge: Option<ScoreBadge>,
    pub availability: Option<AvailabilityBadge>,
    pub tags: TagPreview,
}

/// A composed feed, with the two empty flavors kept distinct.
#[derive(Debug, Clone)]
pub enum FeedState<T> {
    /// The underlying collection has no data: not loaded yet, still
    /// loading, or the backend returned nothing.
    NoData,
    /// The collection has data but the active criteria matched none of it.
    NoMatches,
    Cards(Vec<FeedCard<T>>),
}

impl<T> FeedState<T> {
    pub fn cards(&self) -> Option<&[FeedCard<T>]> {
        match self {
            FeedState::Cards(cards) => Some(cards),
            _ => None,
        }
    }

    pub fn is_no_data(&self) -> bool {
        matches!(self, FeedState::NoData)
    }

    pub fn is_no_matches(&self) -> bool {
        matches!(self, FeedState::NoMatches)
    }
}

/// Compose the main projects feed from an already-filtered selection.
///
/// Cards get a match badge whenever the viewer's skills give the post a
/// positive score, mirroring the badge on the recommendation rail.
pub fn project_feed(
    base: &CollectionCache<ProjectPost>,
    selected: Vec<ProjectPost>,
    viewer: Option<&CurrentUser>,
) -> FeedState<ProjectPost> {
    if !base.has_loaded() || base.items().is_empty() {
        return FeedState::NoData;
    }
    if selected.is_empty() {
        return FeedState::NoMatches;
    }

    let cards = selected
        .into_iter()
        .map(|post| project_card(post, viewer))
        .collect();
    FeedState::Cards(cards)
}

/// Compose the people feed from an already-filtered selection.
pub fn profile_feed(
    base: &CollectionCache<Profile>,
    selected: Vec<Profile>,
    viewer: Option<&CurrentUser>,
) -> FeedState<Profile> {
    if !base.has_loaded() || base.items().is_empty() {
        return FeedState::NoData;
    }
    if selected.is_empty() {
        return FeedState::NoMatches;
    }

    let cards = selected
        .into_iter()
        .map(|profile| profile_card(profile, viewer))
        .collect();
    FeedState::Cards(cards)
}

/// Compose the recommended-projects rail from scored entries.
pub fn recommended_project_feed(
    base: &CollectionCache<ProjectPost>,
    scored: Vec<ScoredPost>,
    viewer: Option<&CurrentUser>,
) -> FeedState<ProjectPost> {
    if !base.has_loaded() || base.items().is_empty() {
        return FeedState::NoData;
    }
    if scored.is_empty() {
        return FeedState::NoMatches;
    }

    let cards = scored
        .into_iter()
        .map(|entry| FeedCard {
            is_favorite: viewer.is_some_and(|v| v.favorite_projects.contains(&entry.post.id)),
            score_badge: Some(ScoreBadge {
                tier: entry.tier,
                score: entry.score,
            }),
            availability: None,
            tags: tag_preview(&entry.post.tags, MAX_COMPACT_TAGS),
            entity: entry.post,
        })
        .collect();
    FeedState::Cards(cards)
}

/// Compose the recommended-profiles rail from scored entries.
pub fn recommended_profile_feed(
    base: &CollectionCache<Profile>,
    scored: Vec<ScoredProfile>,
    viewer: Option<&CurrentUser>,
) -> FeedState<Profile> {
    if !base.has_loaded() || base.items().is_empty() {
        return FeedState::NoData;
    }
    if scored.is_empty() {
        return FeedState::NoMatches;
    }

    let cards = scored
        .into_iter()
        .map(|entry| {
            let skills = entry.profile.skills.clone().unwrap_or_default();
            FeedCard {
                is_favorite: viewer
                    .is_some_and(|v| v.favorite_profiles.contains(&entry.profile.id)),
                score_badge: Some(ScoreBadge {
                    tier: entry.tier,
                    score: entry.score,
                }),
                availability: Some(AvailabilityBadge::from_status(
                    entry.profile.status.as_deref(),
                )),
                tags: tag_preview(&skills, MAX_COMPACT_TAGS),
                entity: entry.profile,
            }
        })
        .collect();
    FeedState::Cards(cards)
}

fn project_card(post: ProjectPost, viewer: Option<&CurrentUser>) -> FeedCard<ProjectPost> {
    let score = viewer
        .map(|v| scoring::score_project_match(v.skills(), &post.tags))
        .unwrap_or(0);
    let score_badge = (score > 0).then(|| ScoreBadge {
        tier: MatchTier::for_project(score),
        score,
    });

    FeedCard {
        is_favorite: viewer.is_some_and(|v| v.favorite_projects.contains(&post.id)),
        score_badge,
        availability: None,
        // The main feed shows every tag.
        tags: tag_preview(&post.tags, post.tags.len()),
        entity: post,
    }
}

fn profile_card(profile: Profile, viewer: Option<&CurrentUser>) -> FeedCard<Profile> {
    let skills = profile.skills.clone().unwrap_or_default();

    FeedCard {
        is_favorite: viewer.is_some_and(|v| v.favorite_profiles.contains(&profile.id)),
        score_badge: None,
        availability: Some(AvailabilityBadge::from_status(profile.status.as_deref())),
        tags: tag_preview(&skills, MAX_CARD_SKILLS),
        entity: profile,
    }
}
