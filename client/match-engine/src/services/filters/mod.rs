//! Membership filtering for the two feed views.
//!
//! The pipeline selects, it never sorts: results keep the collection's
//! natural most-recent-first order. Free-text search deliberately replaces
//! the structured filters instead of stacking on them: the search pass runs
//! over the full unfiltered collection, and whichever pass ran last owns the
//! feed. That is the shipped behavior; `composed_search` opts into the
//! corrected stacking where search narrows the filtered subset.
//!
//! The structured and search passes are exposed individually because the
//! controller dispatches them per UI event; `filter_posts` and
//! `filter_profiles` are the combined entry points where an active search
//! term wins.

pub mod criteria;
pub mod suggestions;

pub use criteria::{FilterCriteria, RoleFilter};

use crate::models::{Profile, ProjectPost};

/// Applies the active criteria to an in-memory collection.
#[derive(Debug, Clone, Default)]
pub struct FilterPipeline {
    composed_search: bool,
}

impl FilterPipeline {
    pub fn new() -> Self {
        Self::default()
    }

    /// When enabled, search narrows the already-filtered subset instead of
    /// replacing the structured filters.
    pub fn with_composed_search(composed_search: bool) -> Self {
        Self { composed_search }
    }

    /// Projects view, combined: an active search term replaces the category
    /// filter; otherwise the structured pass applies.
    pub fn filter_posts(&self, posts: &[ProjectPost], criteria: &FilterCriteria) -> Vec<ProjectPost> {
        if criteria.has_active_search() {
            self.search_posts(posts, criteria)
        } else {
            self.structured_posts(posts, criteria)
        }
    }

    /// People view, combined: an active search term replaces the role and
    /// skill filters; otherwise the structured pass applies.
    pub fn filter_profiles(&self, profiles: &[Profile], criteria: &FilterCriteria) -> Vec<Profile> {
        if criteria.has_active_search() {
            self.search_profiles(profiles, criteria)
        } else {
            self.structured_profiles(profiles, criteria)
        }
    }

    /// Category multi-select. An empty selection passes everything through.
    pub fn structured_posts(
        &self,
        posts: &[ProjectPost],
        criteria: &FilterCriteria,
    ) -> Vec<ProjectPost> {
        let categories = criteria.selected_categories();
        if categories.is_empty() {
            return posts.to_vec();
        }
        // Categories come from a controlled vocabulary; exact match is intended.
        posts
            .iter()
            .filter(|post| categories.contains(&post.category))
            .cloned()
            .collect()
    }

    /// Role radio plus skill pills, both optional.
    pub fn structured_profiles(
        &self,
        profiles: &[Profile],
        criteria: &FilterCriteria,
    ) -> Vec<Profile> {
        let selected_skills = criteria.selected_skills();
        profiles
            .iter()
            .filter(|profile| criteria.selected_role().matches(&profile.role))
            .filter(|profile| {
                if selected_skills.is_empty() {
                    return true;
                }
                // OR semantics: one exact hit among the selected pills keeps
                // the profile. Pill values are pre-normalised, so this match
                // is case-sensitive on purpose.
                profile.skills.as_ref().is_some_and(|skills| {
                    selected_skills.iter().any(|selected| skills.contains(selected))
                })
            })
            .cloned()
            .collect()
    }

    /// Free-text pass over posts: case-insensitive substring against title,
    /// description, category, author name or any tag.
    pub fn search_posts(&self, posts: &[ProjectPost], criteria: &FilterCriteria) -> Vec<ProjectPost> {
        let term = criteria.normalized_search_term();
        if term.is_empty() {
            return posts.to_vec();
        }
        let base = if self.composed_search {
            self.structured_posts(posts, criteria)
        } else {
            posts.to_vec()
        };
        base.into_iter()
            .filter(|post| post_matches_term(post, &term))
            .collect()
    }

    /// Free-text pass over profiles: case-insensitive substring against
    /// name, bio, role, any skill, or any experience entry's role/company.
    pub fn search_profiles(&self, profiles: &[Profile], criteria: &FilterCriteria) -> Vec<Profile> {
        let term = criteria.normalized_search_term();
        if term.is_empty() {
            return profiles.to_vec();
        }
        let base = if self.composed_search {
            self.structured_profiles(profiles, criteria)
        } else {
            profiles.to_vec()
        };
        base.into_iter()
            .filter(|profile| profile_matches_term(profile, &term))
            .collect()
    }
}

fn post_matches_term(post: &ProjectPost, term: &str) -> bool {
    post.title.to_lowercase().contains(term)
        || post.description.to_lowercase().contains(term)
        || post.category.to_lowercase().contains(term)
        || post.author_name.to_lowercase().contains(term)
        || post.tags.iter().any(|tag| tag.to_lowercase().contains(term))
}

fn profile_matches_term(profile: &Profile, term: &str) -> bool {
    profile.name.to_lowercase().contains(term)
        || profile
            .bio
            .as_deref()
            .is_some_and(|bio| bio.to_lowercase().contains(term))
        || profile.role.to_lowercase().contains(term)
        || profile
            .skills
            .as_deref()
            .is_some_and(|skills| skills.iter().any(|s| s.to_lowercase().contains(term)))
        || profile.experience.iter().any(|entry| {
            entry
                .role
                .as_deref()
                .is_some_and(|role| role.to_lowercase().contains(term))
                || entry
                    .company
                    .as_deref()
                    .is_some_and(|company| company.to_lowercase().contains(term))
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{ExperienceEntry, PostId};
    use chrono::DateTime;
    use std::collections::HashSet;
    use uuid::Uuid;

    fn post(id: i64, title: &str, category: &str, tags: &[&str]) -> ProjectPost {
        ProjectPost {
            id: PostId::from(id),
            title: title.to_string(),
            description: format!("{title} description"),
            category: category.to_string(),
            tags: tags.iter().map(|t| t.to_string()).collect(),
            author_id: Uuid::new_v4(),
            author_name: "Ola".to_string(),
            author_role: "Founder".to_string(),
            author_avatar: None,
            image: None,
            created_at: DateTime::from_timestamp(1_700_000_000 + id, 0).unwrap(),
        }
    }

    fn profile(name: &str, role: &str, skills: Option<Vec<&str>>) -> Profile {
        Profile {
            id: Uuid::new_v4(),
            name: name.to_string(),
            bio: Some(format!("{name} bio")),
            role: role.to_string(),
            status: None,
            skills: skills.map(|s| s.into_iter().map(String::from).collect()),
            experience: Vec::new(),
            avatar: None,
            created_at: DateTime::from_timestamp(1_700_000_000, 0).unwrap(),
        }
    }

    fn categories(values: &[&str]) -> HashSet<String> {
        values.iter().map(|v| v.to_string()).collect()
    }

    #[test]
    fn empty_category_selection_passes_all_posts() {
        let posts = vec![post(1, "A", "Tech", &[]), post(2, "B", "Design", &[])];
        let criteria = FilterCriteria::default();
        assert_eq!(FilterPipeline::new().filter_posts(&posts, &criteria).len(), 2);
    }

    #[test]
    fn category_filter_keeps_matching_posts_in_order() {
        let posts = vec![
            post(1, "A", "Tech", &[]),
            post(2, "B", "Design", &[]),
            post(3, "C", "Tech", &[]),
        ];
        let mut criteria = FilterCriteria::default();
        criteria.set_categories(categories(&["Tech"]));

        let filtered = FilterPipeline::new().filter_posts(&posts, &criteria);
        let ids: Vec<&str> = filtered.iter().map(|p| p.id.as_str()).collect();
        assert_eq!(ids, vec!["1", "3"]);
    }

    #[test]
    fn category_match_is_exact_not_case_folded() {
        let posts = vec![post(1, "A", "tech", &[])];
        let mut criteria = FilterCriteria::default();
        criteria.set_categories(categories(&["Tech"]));
        assert!(FilterPipeline::new().filter_posts(&posts, &criteria).is_empty());
    }

    #[test]
    fn search_replaces_category_filter_over_full_collection() {
        let posts = vec![
            post(1, "A", "Tech", &[]),
            post(2, "B", "Tech", &[]),
            post(3, "C", "Design", &[]),
        ];
        let mut criteria = FilterCriteria::default();
        criteria.set_categories(categories(&["Tech"]));
        criteria.set_search_term("design");

        let filtered = FilterPipeline::new().filter_posts(&posts, &criteria);
        assert_eq!(filtered.len(), 1);
        assert_eq!(filtered[0].id.as_str(), "3");
    }

    #[test]
    fn composed_search_narrows_the_filtered_subset_instead() {
        let posts = vec![
            post(1, "A", "Tech", &[]),
            post(2, "B", "Tech", &[]),
            post(3, "C", "Design", &[]),
        ];
        let mut criteria = FilterCriteria::default();
        criteria.set_categories(categories(&["Tech"]));
        criteria.set_search_term("design");

        let filtered = FilterPipeline::with_composed_search(true).filter_posts(&posts, &criteria);
        assert!(filtered.is_empty());
    }

    #[test]
    fn search_pass_with_blank_term_passes_everything() {
        let posts = vec![post(1, "A", "Tech", &[]), post(2, "B", "Design", &[])];
        let mut criteria = FilterCriteria::default();
        criteria.set_categories(categories(&["Tech"]));
        criteria.set_search_term("   ");

        // The cleared-search path: the full collection comes back even with
        // categories still selected.
        let reverted = FilterPipeline::new().search_posts(&posts, &criteria);
        assert_eq!(reverted.len(), 2);
    }

    #[test]
    fn search_matches_tags_and_author_name() {
        let posts = vec![
            post(1, "App", "Tech", &["React", "Go"]),
            post(2, "Site", "Tech", &[]),
        ];
        let mut criteria = FilterCriteria::default();
        criteria.set_search_term("react");
        let filtered = FilterPipeline::new().filter_posts(&posts, &criteria);
        assert_eq!(filtered.len(), 1);

        criteria.set_search_term("ola");
        let filtered = FilterPipeline::new().filter_posts(&posts, &criteria);
        assert_eq!(filtered.len(), 2);
    }

    #[test]
    fn role_filter_is_case_insensitive() {
        let profiles = vec![
            profile("A", "Founder", Some(vec![])),
            profile("B", "co-founder", Some(vec![])),
            profile("C", "Co-Founder", Some(vec![])),
        ];
        let mut criteria = FilterCriteria::default();
        criteria.set_role(RoleFilter::CoFounder);

        let filtered = FilterPipeline::new().filter_profiles(&profiles, &criteria);
        let names: Vec<&str> = filtered.iter().map(|p| p.name.as_str()).collect();
        assert_eq!(names, vec!["B", "C"]);
    }

    #[test]
    fn skill_pills_use_or_semantics_with_exact_match() {
        let profiles = vec![
            profile("A", "Founder", Some(vec!["Go"])),
            profile("B", "Founder", Some(vec!["Python"])),
            profile("C", "Founder", Some(vec!["Rust", "Java"])),
            profile("D", "Founder", None),
        ];
        let mut criteria = FilterCriteria::default();
        criteria.add_skill("Go");
        criteria.add_skill("Rust");

        let filtered = FilterPipeline::new().filter_profiles(&profiles, &criteria);
        let names: Vec<&str> = filtered.iter().map(|p| p.name.as_str()).collect();
        assert_eq!(names, vec!["A", "C"]);
    }

    #[test]
    fn pill_match_does_not_fold_case() {
        let profiles = vec![profile("A", "Founder", Some(vec!["go"]))];
        let mut criteria = FilterCriteria::default();
        criteria.add_skill("Go");
        assert!(FilterPipeline::new().filter_profiles(&profiles, &criteria).is_empty());
    }

    #[test]
    fn profile_search_replaces_role_and_skill_filters() {
        let profiles = vec![
            profile("Anna", "Founder", Some(vec!["Sales"])),
            profile("Bendik", "Co-founder", Some(vec!["Rust"])),
        ];
        let mut criteria = FilterCriteria::default();
        criteria.set_role(RoleFilter::Founder);
        criteria.add_skill("Sales");
        criteria.set_search_term("rust");

        let filtered = FilterPipeline::new().filter_profiles(&profiles, &criteria);
        assert_eq!(filtered.len(), 1);
        assert_eq!(filtered[0].name, "Bendik");
    }

    #[test]
    fn profile_search_reaches_experience_entries() {
        let mut candidate = profile("Anna", "Founder", Some(vec![]));
        candidate.experience.push(ExperienceEntry {
            role: Some("CTO".to_string()),
            company: Some("Statoil".to_string()),
            period: None,
            description: None,
        });
        let profiles = vec![candidate, profile("Bendik", "Founder", Some(vec![]))];

        let mut criteria = FilterCriteria::default();
        criteria.set_search_term("statoil");
        let filtered = FilterPipeline::new().filter_profiles(&profiles, &criteria);
        assert_eq!(filtered.len(), 1);
        assert_eq!(filtered[0].name, "Anna");
    }

    #[test]
    fn filtering_an_empty_collection_yields_empty() {
        let criteria = FilterCriteria::default();
        let pipeline = FilterPipeline::new();
        assert!(pipeline.filter_posts(&[], &criteria).is_empty());
        assert!(pipeline.filter_profiles(&[], &criteria).is_empty());
    }
}
