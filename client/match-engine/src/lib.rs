//! Client-side matching and feed engine for a co-founder marketplace.
//!
//! The engine owns the decision logic of the browsing experience: scoring
//! project posts and profiles against the viewer's skills and role, the
//! multi-criteria filter/search pipeline, and the session state the feeds
//! render from. Everything network-shaped — persistence, auth, messaging,
//! realtime — lives behind the [`data::DataClient`] seam, and everything
//! DOM-shaped consumes the plain render records this crate produces.

pub mod config;
pub mod controller;
pub mod data;
pub mod error;
pub mod models;
pub mod services;
pub mod state;

pub use config::EngineConfig;
pub use controller::{FeedController, RenderedFeed};
pub use data::{load_session, DataClient};
pub use error::{EngineError, Result};
pub use models::{ActiveView, CurrentUser, FavoriteKind, PostId, Profile, ProjectPost};
pub use services::{
    feed::{AvailabilityBadge, FeedCard, FeedState, ScoreBadge, TagPreview},
    filters::{FilterCriteria, FilterPipeline, RoleFilter},
    recommendation::{RecommendationLayer, ScoredPost, ScoredProfile},
    scoring::{score_profile_match, score_project_match, MatchTier},
};
