use std::collections::HashSet;

use crate::models::ActiveView;

/// Role radio selection for the people view.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RoleFilter {
    #[default]
    All,
    Founder,
    CoFounder,
}

impl RoleFilter {
    pub fn as_str(&self) -> &'static str {
        match self {
            RoleFilter::All => "all",
            RoleFilter::Founder => "founder",
            RoleFilter::CoFounder => "co-founder",
        }
    }

    /// Parse a radio value; anything unrecognised falls back to `All`.
    pub fn from_value(value: &str) -> Self {
        match value.to_lowercase().as_str() {
            "founder" => RoleFilter::Founder,
            "co-founder" => RoleFilter::CoFounder,
            _ => RoleFilter::All,
        }
    }

    /// Whether a profile's free-form role text passes this filter.
    pub fn matches(&self, role: &str) -> bool {
        match self {
            RoleFilter::All => true,
            _ => role.to_lowercase() == self.as_str(),
        }
    }
}

/// The active filter/search selections for one UI session.
///
/// A mutable value object with no knowledge of the candidate collections.
/// `selected_skills` keeps insertion order (it drives pill display order)
/// while enforcing uniqueness; removal is by exact string match because pill
/// values come from the already-normalised suggestion list.
#[derive(Debug, Clone, Default)]
pub struct FilterCriteria {
    active_view: ActiveView,
    selected_categories: HashSet<String>,
    selected_role: RoleFilter,
    selected_skills: Vec<String>,
    search_term: String,
}

impl FilterCriteria {
    pub fn new(view: ActiveView) -> Self {
        Self {
            active_view: view,
            ..Self::default()
        }
    }

    pub fn active_view(&self) -> ActiveView {
        self.active_view
    }

    pub fn set_active_view(&mut self, view: ActiveView) {
        self.active_view = view;
    }

    pub fn selected_categories(&self) -> &HashSet<String> {
        &self.selected_categories
    }

    pub fn set_categories(&mut self, categories: HashSet<String>) {
        self.selected_categories = categories;
    }

    pub fn selected_role(&self) -> RoleFilter {
        self.selected_role
    }

    pub fn set_role(&mut self, role: RoleFilter) {
        self.selected_role = role;
    }

    pub fn selected_skills(&self) -> &[String] {
        &self.selected_skills
    }

    /// Add a skill pill. Duplicate insertion is ignored; returns whether the
    /// selection changed.
    pub fn add_skill(&mut self, skill: impl Into<String>) -> bool {
        let skill = skill.into();
        if self.selected_skills.contains(&skill) {
            return false;
        }
        self.selected_skills.push(skill);
        true
    }

    /// Remove a skill pill by exact match; returns whether it was present.
    pub fn remove_skill(&mut self, skill: &str) -> bool {
        let before = self.selected_skills.len();
        self.selected_skills.retain(|s| s != skill);
        self.selected_skills.len() != before
    }

    pub fn search_term(&self) -> &str {
        &self.search_term
    }

    pub fn set_search_term(&mut self, term: impl Into<String>) {
        self.search_term = term.into();
    }

    /// The search term as matched: case-folded and trimmed. Empty means no
    /// search is active.
    pub fn normalized_search_term(&self) -> String {
        self.search_term.to_lowercase().trim().to_string()
    }

    pub fn has_active_search(&self) -> bool {
        !self.normalized_search_term().is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn add_skill_keeps_insertion_order_and_uniqueness() {
        let mut criteria = FilterCriteria::default();
        assert!(criteria.add_skill("Rust"));
        assert!(criteria.add_skill("Go"));
        assert!(!criteria.add_skill("Rust"));
        assert_eq!(criteria.selected_skills(), ["Rust", "Go"]);
    }

    #[test]
    fn remove_skill_is_case_sensitive() {
        let mut criteria = FilterCriteria::default();
        criteria.add_skill("Rust");
        assert!(!criteria.remove_skill("rust"));
        assert_eq!(criteria.selected_skills(), ["Rust"]);
        assert!(criteria.remove_skill("Rust"));
        assert!(criteria.selected_skills().is_empty());
    }

    #[test]
    fn search_term_is_folded_and_trimmed_for_matching() {
        let mut criteria = FilterCriteria::default();
        criteria.set_search_term("  FinTech ");
        assert_eq!(criteria.normalized_search_term(), "fintech");
        assert!(criteria.has_active_search());

        criteria.set_search_term("   ");
        assert!(!criteria.has_active_search());
    }

    #[test]
    fn role_filter_matches_case_insensitively() {
        assert!(RoleFilter::Founder.matches("FOUNDER"));
        assert!(RoleFilter::CoFounder.matches("Co-Founder"));
        assert!(!RoleFilter::Founder.matches("Co-founder"));
        assert!(RoleFilter::All.matches("anything"));
        assert_eq!(RoleFilter::from_value("Co-Founder"), RoleFilter::CoFounder);
        assert_eq!(RoleFilter::from_value("investor"), RoleFilter::All);
    }
}
