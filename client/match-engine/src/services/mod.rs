pub mod feed;
pub mod filters;
pub mod recommendation;
pub mod scoring;

pub use feed::{AvailabilityBadge, FeedCard, FeedState, ScoreBadge, TagPreview};
pub use filters::{FilterCriteria, FilterPipeline, RoleFilter};
pub use recommendation::{RecommendationLayer, ScoredPost, ScoredProfile};
pub use scoring::MatchTier;
