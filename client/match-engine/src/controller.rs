//! Event wiring between the view layer and the engine.
//!
//! The controller owns the session state, the filter criteria and the
//! pipeline/recommendation layers, and maps caller-supplied UI events to
//! criteria mutations plus a fresh render. Nothing is patched incrementally:
//! every event and every collection refresh re-runs the pipeline over the
//! current cache, so a slow fetch resolving after a filter change still
//! renders against the latest criteria.
//!
//! Each view's feed is owned by whichever pass ran last. A structured event
//! (category, role, skill pill) renders the structured pass and ignores any
//! text sitting in the search box; typing a search term renders the search
//! pass over the full collection; clearing the term reverts to the full
//! collection without re-applying the structured selections, which remain
//! in the criteria untouched.

use std::collections::HashSet;

use tracing::debug;

use crate::config::EngineConfig;
use crate::models::{ActiveView, Profile, ProjectPost};
use crate::services::feed::{self, FeedState};
use crate::services::filters::suggestions::{self, SkillPills};
use crate::services::filters::{FilterCriteria, FilterPipeline, RoleFilter};
use crate::services::recommendation::RecommendationLayer;
use crate::state::SessionState;

/// Which pipeline pass most recently rendered a view's feed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
enum RenderPass {
    /// Full collection, no selection applied.
    #[default]
    Unfiltered,
    /// Category (projects) or role/skill (people) selections.
    Structured,
    /// Free-text search over the full collection.
    Search,
}

/// The freshly rendered feed for whichever view is active.
#[derive(Debug, Clone)]
pub enum RenderedFeed {
    Projects(FeedState<ProjectPost>),
    People(FeedState<Profile>),
}

pub struct FeedController {
    state: SessionState,
    criteria: FilterCriteria,
    pipeline: FilterPipeline,
    recommender: RecommendationLayer,
    projects_pass: RenderPass,
    people_pass: RenderPass,
}

impl FeedController {
    pub fn new(state: SessionState) -> Self {
        Self::with_config(state, &EngineConfig::default())
    }

    pub fn with_config(state: SessionState, config: &EngineConfig) -> Self {
        Self {
            state,
            criteria: FilterCriteria::default(),
            pipeline: FilterPipeline::with_composed_search(config.search.compose_filters),
            recommender: RecommendationLayer::with_limit(config.recommendation.limit),
            projects_pass: RenderPass::default(),
            people_pass: RenderPass::default(),
        }
    }

    pub fn state(&self) -> &SessionState {
        &self.state
    }

    /// Mutable access for collection refreshes and favorite syncs. Callers
    /// re-render afterwards via [`Self::render_active`].
    pub fn state_mut(&mut self) -> &mut SessionState {
        &mut self.state
    }

    pub fn criteria(&self) -> &FilterCriteria {
        &self.criteria
    }

    pub fn on_view_switched(&mut self, view: ActiveView) -> RenderedFeed {
        self.criteria.set_active_view(view);
        // Switching into the people tab re-lists everyone; the pill and role
        // selections stay in the criteria and re-apply on the next event.
        if view == ActiveView::People {
            self.people_pass = RenderPass::Unfiltered;
        }
        debug!(view = view.as_str(), "view switched");
        self.render_active()
    }

    pub fn on_categories_changed(&mut self, categories: HashSet<String>) -> RenderedFeed {
        self.criteria.set_categories(categories);
        self.projects_pass = RenderPass::Structured;
        self.render_active()
    }

    pub fn on_role_changed(&mut self, role: RoleFilter) -> RenderedFeed {
        self.criteria.set_role(role);
        self.people_pass = RenderPass::Structured;
        self.render_active()
    }

    pub fn on_skill_added(&mut self, skill: &str) -> RenderedFeed {
        self.criteria.add_skill(skill);
        self.people_pass = RenderPass::Structured;
        self.render_active()
    }

    pub fn on_skill_removed(&mut self, skill: &str) -> RenderedFeed {
        self.criteria.remove_skill(skill);
        self.people_pass = RenderPass::Structured;
        self.render_active()
    }

    /// Search input. A blank term reverts the active view to the full
    /// collection; the structured selections are deliberately not re-applied.
    pub fn on_search_input(&mut self, term: &str) -> RenderedFeed {
        self.criteria.set_search_term(term);
        let pass = if self.criteria.has_active_search() {
            RenderPass::Search
        } else {
            RenderPass::Unfiltered
        };
        match self.criteria.active_view() {
            ActiveView::Projects => self.projects_pass = pass,
            ActiveView::People => self.people_pass = pass,
        }
        self.render_active()
    }

    /// Re-render the active view from current state, e.g. after a
    /// collection refresh resolved.
    pub fn render_active(&self) -> RenderedFeed {
        match self.criteria.active_view() {
            ActiveView::Projects => RenderedFeed::Projects(self.project_feed()),
            ActiveView::People => RenderedFeed::People(self.profile_feed()),
        }
    }

    pub fn project_feed(&self) -> FeedState<ProjectPost> {
        let posts = self.state.posts.items();
        let selected = match self.projects_pass {
            RenderPass::Unfiltered => posts.to_vec(),
            RenderPass::Structured => self.pipeline.structured_posts(posts, &self.criteria),
            RenderPass::Search => self.pipeline.search_posts(posts, &self.criteria),
        };
        feed::project_feed(&self.state.posts, selected, self.state.viewer.as_ref())
    }

    pub fn profile_feed(&self) -> FeedState<Profile> {
        let profiles = self.state.profiles.items();
        let selected = match self.people_pass {
            RenderPass::Unfiltered => profiles.to_vec(),
            RenderPass::Structured => self.pipeline.structured_profiles(profiles, &self.criteria),
            RenderPass::Search => self.pipeline.search_profiles(profiles, &self.criteria),
        };
        feed::profile_feed(&self.state.profiles, selected, self.state.viewer.as_ref())
    }

    /// The recommended-projects rail. Visibility is re-checked at render
    /// time: the rail only renders while the projects tab is active, so a
    /// late fetch never resurrects a hidden section.
    pub fn recommended_projects(&self) -> Option<FeedState<ProjectPost>> {
        (self.criteria.active_view() == ActiveView::Projects).then(|| {
            let scored = self
                .recommender
                .recommend_projects(self.state.viewer.as_ref(), self.state.posts.items());
            feed::recommended_project_feed(&self.state.posts, scored, self.state.viewer.as_ref())
        })
    }

    /// The recommended-profiles rail, rendered only on the people tab.
    pub fn recommended_profiles(&self) -> Option<FeedState<Profile>> {
        (self.criteria.active_view() == ActiveView::People).then(|| {
            let scored = self
                .recommender
                .recommend_profiles(self.state.viewer.as_ref(), self.state.profiles.items());
            feed::recommended_profile_feed(&self.state.profiles, scored, self.state.viewer.as_ref())
        })
    }

    /// The skill pills for the people-view filter panel.
    pub fn skill_suggestions(&self) -> SkillPills {
        let all = suggestions::skill_suggestions(self.state.profiles.items());
        suggestions::split_pills(all, self.criteria.selected_skills())
    }
}
